use std::io::Cursor;

use binrw::BinReaderExt;
use binrw::{BinRead, BinWrite};
use serde::Serialize;
use simba_dtyp::{Decimal5NULL, MDEntryType, MDFlags2Set, MDFlagsSet};

use crate::error::{Result, SimbaDecodeError};
use crate::groups::read_group;
use crate::header::GroupSize;

/// One row of a full order-book snapshot.
#[derive(BinRead, BinWrite, Debug, Clone, Serialize)]
pub struct OrderBookSnapshotEntry {
    pub md_entry_id: i64,
    pub transact_time: u64,
    pub md_entry_px: Decimal5NULL,
    pub md_entry_size: i64,
    pub trade_id: i64,
    pub md_flags: MDFlagsSet,
    pub md_flags2: MDFlags2Set,
    pub md_entry_type: MDEntryType,
}

impl OrderBookSnapshotEntry {
    pub const WIRE_SIZE: usize = 57;
}

#[derive(BinRead, BinWrite, Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct OrderBookSnapshotPreamble {
    pub security_id: i32,
    pub last_msg_seq_num_processed: u32,
    pub rpt_seq: u32,
    pub exchange_trading_session_id: u32,
}

impl OrderBookSnapshotPreamble {
    pub const WIRE_SIZE: usize = 16;
}

/// Template 17: full order-book snapshot, one repeating group of entries.
#[derive(Debug, Clone, Serialize)]
pub struct OrderBookSnapshot {
    #[serde(flatten)]
    pub preamble: OrderBookSnapshotPreamble,
    pub no_md_entries: GroupSize,
    pub md_entries: Vec<OrderBookSnapshotEntry>,
}

pub(crate) fn read_order_book_snapshot(
    cursor: &mut Cursor<&[u8]>,
) -> Result<OrderBookSnapshot> {
    let offset = cursor.position() as usize;
    let preamble: OrderBookSnapshotPreamble = cursor.read_le().map_err(|_| {
        SimbaDecodeError::TruncatedPacket {
            offset,
            expected: OrderBookSnapshotPreamble::WIRE_SIZE,
        }
    })?;

    let offset = cursor.position() as usize;
    let no_md_entries: GroupSize = cursor.read_le().map_err(|_| {
        SimbaDecodeError::TruncatedPacket {
            offset,
            expected: GroupSize::WIRE_SIZE,
        }
    })?;

    let offset = cursor.position() as usize;
    let md_entries = read_group(cursor, no_md_entries.num_in_group as usize).map_err(|_| {
        SimbaDecodeError::TruncatedPacket {
            offset,
            expected: no_md_entries.num_in_group as usize * OrderBookSnapshotEntry::WIRE_SIZE,
        }
    })?;

    Ok(OrderBookSnapshot {
        preamble,
        no_md_entries,
        md_entries,
    })
}
