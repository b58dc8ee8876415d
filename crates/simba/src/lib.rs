//! Ties the PCAP framer/demultiplexer and the SIMBA message decoder together
//! into a single pull-based decode pipeline, plus a streaming JSON emitter.

#![forbid(unsafe_code)]

pub mod config;
pub mod decoder;
pub mod emit;
pub mod error;

pub use config::DecoderConfig;
pub use decoder::{decode_file, Decoder};
pub use error::{Result, SimbaError};

pub use simba_dtyp as dtyp;
pub use simba_msg as msg;
pub use simba_pcap as pcap;
