//! Message and packet definitions for the SIMBA SBE market-data protocol,
//! plus the template dispatcher that turns a raw payload into a
//! [`SimbaPacket`].

#![forbid(unsafe_code)]

mod decode;
mod error;
mod groups;
mod header;
mod order_book_snapshot;
mod order_execution;
mod order_update;
mod security_definition;
mod security_definition_update_report;
mod security_status;
mod sequence_reset;
mod message;
mod trading_session_status;

pub use decode::decode_packet;
pub use error::{Result, SimbaDecodeError};
pub use header::{GroupSize, GroupSize2, IncrementalPacketHeader, MarketDataPacketHeader, MessageHeader};
pub use message::{SimbaMessage, SimbaPacket, TruncationInfo};
pub use order_book_snapshot::{OrderBookSnapshot, OrderBookSnapshotEntry, OrderBookSnapshotPreamble};
pub use order_execution::OrderExecution;
pub use order_update::OrderUpdate;
pub use security_definition::{
    EventEntry, InstrAttribEntry, LegEntry, MdFeedTypeEntry, SecurityDefinition,
    SecurityDefinitionPreamble, UnderlyingEntry,
};
pub use security_definition_update_report::SecurityDefinitionUpdateReport;
pub use security_status::SecurityStatus;
pub use sequence_reset::SequenceReset;
pub use trading_session_status::TradingSessionStatus;
