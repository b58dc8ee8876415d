use binrw::{BinRead, BinWrite};
use serde::Serialize;
use simba_dtyp::Decimal5NULL;

/// Template 10: theoretical price / volatility update for a single instrument.
#[derive(BinRead, BinWrite, Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SecurityDefinitionUpdateReport {
    pub security_id: i32,
    pub volatility: Decimal5NULL,
    pub theor_price: Decimal5NULL,
    pub theor_price_limit: Decimal5NULL,
}

impl SecurityDefinitionUpdateReport {
    pub const WIRE_SIZE: usize = 28;
}
