use binrw::{BinRead, BinWrite};
use serde::Serialize;
use simba_dtyp::{Decimal5, Decimal5NULL, MDEntryType, MDFlags2Set, MDFlagsSet, MDUpdateAction};

/// Template 16: a trade execution against the book.
#[derive(BinRead, BinWrite, Debug, Clone, Serialize)]
pub struct OrderExecution {
    pub md_entry_id: i64,
    pub md_entry_px: Decimal5NULL,
    pub md_entry_size: i64,
    pub last_px: Decimal5,
    pub last_qty: i64,
    pub trade_id: i64,
    pub md_flags: MDFlagsSet,
    pub md_flags2: MDFlags2Set,
    pub security_id: i32,
    pub rpt_seq: u32,
    pub md_update_action: MDUpdateAction,
    pub md_entry_type: MDEntryType,
}

impl OrderExecution {
    pub const WIRE_SIZE: usize = 74;
}
