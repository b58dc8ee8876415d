use serde::Serialize;

use crate::header::{IncrementalPacketHeader, MarketDataPacketHeader, MessageHeader};
use crate::order_book_snapshot::OrderBookSnapshot;
use crate::order_execution::OrderExecution;
use crate::order_update::OrderUpdate;
use crate::security_definition::SecurityDefinition;
use crate::security_definition_update_report::SecurityDefinitionUpdateReport;
use crate::security_status::SecurityStatus;
use crate::sequence_reset::SequenceReset;
use crate::trading_session_status::TradingSessionStatus;

/// A single decoded SBE message body, tagged by its dispatched template.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "template", content = "body")]
pub enum SimbaMessage {
    SequenceReset(SequenceReset),
    SecurityStatus(SecurityStatus),
    SecurityDefinitionUpdateReport(SecurityDefinitionUpdateReport),
    TradingSessionStatus(TradingSessionStatus),
    OrderUpdate(OrderUpdate),
    OrderExecution(OrderExecution),
    OrderBookSnapshot(OrderBookSnapshot),
    SecurityDefinition(SecurityDefinition),
}

/// Byte offset and expected read size at which a packet's decode stopped short.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TruncationInfo {
    pub offset: usize,
    pub expected: usize,
}

/// One fully or partially decoded SIMBA packet (the payload of one UDP
/// datagram or reassembled TCP segment).
#[derive(Debug, Clone, Serialize)]
pub struct SimbaPacket {
    pub market_data_header: MarketDataPacketHeader,
    pub incremental_header: Option<IncrementalPacketHeader>,
    pub last_message_header: Option<MessageHeader>,
    pub messages: Vec<SimbaMessage>,
    /// Set when the packet's body ran out of bytes before decoding fully.
    pub truncated: Option<TruncationInfo>,
}
