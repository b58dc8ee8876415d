use binrw::{BinRead, BinWrite};
use serde::Serialize;

/// Template 2: gap fill / session-level sequence reset.
#[derive(BinRead, BinWrite, Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SequenceReset {
    pub new_seq_no: u32,
}

impl SequenceReset {
    pub const WIRE_SIZE: usize = 4;
}
