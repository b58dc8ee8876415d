use binrw::{BinRead, BinWrite};
use serde::Serialize;

/// Leads every UDP datagram payload; `msg_flags` tells the dispatcher whether
/// an [`IncrementalPacketHeader`] follows.
#[derive(BinRead, BinWrite, Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MarketDataPacketHeader {
    pub msg_seq_num: u32,
    pub msg_size: u16,
    pub msg_flags: u16,
    pub sending_time: u64,
}

impl MarketDataPacketHeader {
    pub const WIRE_SIZE: usize = 16;
    const INCREMENTAL_BIT: u16 = 0x0008;

    pub fn flags(&self) -> simba_dtyp::MsgFlagsSet {
        simba_dtyp::MsgFlagsSet::from_bits(self.msg_flags)
    }

    pub fn is_incremental(&self) -> bool {
        self.msg_flags & Self::INCREMENTAL_BIT != 0
    }
}

/// Present only when [`MarketDataPacketHeader::is_incremental`] is set.
#[derive(BinRead, BinWrite, Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct IncrementalPacketHeader {
    pub transact_time: u64,
    pub exchange_trading_session_id: u32,
}

impl IncrementalPacketHeader {
    pub const WIRE_SIZE: usize = 12;
}

/// SBE message header: identifies the template and its fixed block length.
#[derive(BinRead, BinWrite, Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MessageHeader {
    pub block_length: u16,
    pub template_id: u16,
    pub schema_id: u16,
    pub version: u16,
}

impl MessageHeader {
    pub const WIRE_SIZE: usize = 8;
}

/// One-byte repeating-group counter, used by every group except
/// `SecurityDefinition`'s underlyings/legs/events groups.
#[derive(BinRead, BinWrite, Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GroupSize {
    pub block_length: u16,
    pub num_in_group: u8,
}

impl GroupSize {
    pub const WIRE_SIZE: usize = 3;
}

/// Two-byte repeating-group counter.
#[derive(BinRead, BinWrite, Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GroupSize2 {
    pub block_length: u16,
    pub num_in_group: u16,
}

impl GroupSize2 {
    pub const WIRE_SIZE: usize = 4;
}
