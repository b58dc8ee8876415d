use std::io::Cursor;

use binrw::BinReaderExt;

use crate::error::{Result, SimbaDecodeError};
use crate::header::{IncrementalPacketHeader, MarketDataPacketHeader, MessageHeader};
use crate::message::{SimbaMessage, SimbaPacket, TruncationInfo};
use crate::order_book_snapshot::read_order_book_snapshot;
use crate::order_execution::OrderExecution;
use crate::order_update::OrderUpdate;
use crate::security_definition::read_security_definition;
use crate::security_definition_update_report::SecurityDefinitionUpdateReport;
use crate::security_status::SecurityStatus;
use crate::sequence_reset::SequenceReset;
use crate::trading_session_status::TradingSessionStatus;

const TEMPLATE_SEQUENCE_RESET: u16 = 2;
const TEMPLATE_SECURITY_STATUS: u16 = 9;
const TEMPLATE_SECURITY_DEFINITION_UPDATE_REPORT: u16 = 10;
const TEMPLATE_TRADING_SESSION_STATUS: u16 = 11;
const TEMPLATE_ORDER_UPDATE: u16 = 15;
const TEMPLATE_ORDER_EXECUTION: u16 = 16;
const TEMPLATE_ORDER_BOOK_SNAPSHOT: u16 = 17;
const TEMPLATE_SECURITY_DEFINITION: u16 = 18;

enum DispatchOutcome {
    Message(SimbaMessage),
    Unknown,
    Truncated(TruncationInfo),
}

/// Decodes one SIMBA packet from a demultiplexed payload slice.
///
/// Only a payload too short to even carry a [`MarketDataPacketHeader`] is a
/// hard error; any later truncation still returns the packet decoded so far,
/// with [`SimbaPacket::truncated`] set.
pub fn decode_packet(payload: &[u8]) -> Result<SimbaPacket> {
    let mut cursor = Cursor::new(payload);

    let market_data_header: MarketDataPacketHeader =
        cursor.read_le().map_err(|_| SimbaDecodeError::TruncatedPacket {
            offset: 0,
            expected: MarketDataPacketHeader::WIRE_SIZE,
        })?;

    let mut packet = SimbaPacket {
        market_data_header,
        incremental_header: None,
        last_message_header: None,
        messages: Vec::new(),
        truncated: None,
    };

    if market_data_header.is_incremental() {
        let offset = cursor.position() as usize;
        match cursor.read_le::<IncrementalPacketHeader>() {
            Ok(header) => packet.incremental_header = Some(header),
            Err(_) => {
                packet.truncated = Some(TruncationInfo {
                    offset,
                    expected: IncrementalPacketHeader::WIRE_SIZE,
                });
                return Ok(packet);
            }
        }
    }

    loop {
        let remaining = payload.len().saturating_sub(cursor.position() as usize);
        if remaining == 0 {
            break;
        }

        let offset = cursor.position() as usize;
        let header: MessageHeader = match cursor.read_le() {
            Ok(header) => header,
            Err(_) => {
                packet.truncated = Some(TruncationInfo {
                    offset,
                    expected: MessageHeader::WIRE_SIZE,
                });
                break;
            }
        };
        packet.last_message_header = Some(header);

        match dispatch(&mut cursor, &header, payload.len()) {
            DispatchOutcome::Message(message) => packet.messages.push(message),
            DispatchOutcome::Unknown => {}
            DispatchOutcome::Truncated(info) => {
                packet.truncated = Some(info);
                break;
            }
        }
    }

    Ok(packet)
}

fn dispatch(cursor: &mut Cursor<&[u8]>, header: &MessageHeader, payload_len: usize) -> DispatchOutcome {
    let offset = cursor.position() as usize;

    macro_rules! read_flat {
        ($ty:ty, $variant:ident) => {{
            match cursor.read_le::<$ty>() {
                Ok(value) => DispatchOutcome::Message(SimbaMessage::$variant(value)),
                Err(_) => DispatchOutcome::Truncated(TruncationInfo {
                    offset,
                    expected: <$ty>::WIRE_SIZE,
                }),
            }
        }};
    }

    match header.template_id {
        TEMPLATE_SEQUENCE_RESET => read_flat!(SequenceReset, SequenceReset),
        TEMPLATE_SECURITY_STATUS => read_flat!(SecurityStatus, SecurityStatus),
        TEMPLATE_SECURITY_DEFINITION_UPDATE_REPORT => {
            read_flat!(SecurityDefinitionUpdateReport, SecurityDefinitionUpdateReport)
        }
        TEMPLATE_TRADING_SESSION_STATUS => read_flat!(TradingSessionStatus, TradingSessionStatus),
        TEMPLATE_ORDER_UPDATE => read_flat!(OrderUpdate, OrderUpdate),
        TEMPLATE_ORDER_EXECUTION => read_flat!(OrderExecution, OrderExecution),
        TEMPLATE_ORDER_BOOK_SNAPSHOT => match read_order_book_snapshot(cursor) {
            Ok(value) => DispatchOutcome::Message(SimbaMessage::OrderBookSnapshot(value)),
            Err(SimbaDecodeError::TruncatedPacket { offset, expected }) => {
                DispatchOutcome::Truncated(TruncationInfo { offset, expected })
            }
        },
        TEMPLATE_SECURITY_DEFINITION => match read_security_definition(cursor) {
            Ok(value) => DispatchOutcome::Message(SimbaMessage::SecurityDefinition(value)),
            Err(SimbaDecodeError::TruncatedPacket { offset, expected }) => {
                DispatchOutcome::Truncated(TruncationInfo { offset, expected })
            }
        },
        _ => {
            let skip = header.block_length as usize;
            let new_pos = (cursor.position() as usize + skip).min(payload_len);
            cursor.set_position(new_pos as u64);
            DispatchOutcome::Unknown
        }
    }
}
