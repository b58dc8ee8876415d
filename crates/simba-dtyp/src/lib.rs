//! Wire-level scalar types shared by the SIMBA message definitions.
//!
//! Every type here round-trips through [`binrw`] for decoding and through
//! [`serde`] for JSON rendering, and every enum/bitmask preserves values it
//! does not recognize rather than discarding them.

#![forbid(unsafe_code)]

mod bitmask;
mod constants;
mod decimal;
mod enums;
mod strings;

pub use bitmask::*;
pub use constants::*;
pub use decimal::*;
pub use enums::*;
pub use strings::*;
