use binrw::{BinRead, BinWrite};
use serde::Serialize;
use simba_dtyp::{Decimal5, MDEntryType, MDFlags2Set, MDFlagsSet, MDUpdateAction};

/// Template 15: incremental order-book entry add/change/delete.
#[derive(BinRead, BinWrite, Debug, Clone, Serialize)]
pub struct OrderUpdate {
    pub md_entry_id: i64,
    pub md_entry_px: Decimal5,
    pub md_entry_size: i64,
    pub md_flags: MDFlagsSet,
    pub md_flags2: MDFlags2Set,
    pub security_id: i32,
    pub rpt_seq: u32,
    pub md_update_action: MDUpdateAction,
    pub md_entry_type: MDEntryType,
}

impl OrderUpdate {
    pub const WIRE_SIZE: usize = 50;
}
