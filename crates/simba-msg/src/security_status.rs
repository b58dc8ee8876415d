use binrw::{BinRead, BinWrite};
use serde::Serialize;
use simba_dtyp::{Decimal2NULL, Decimal5NULL, FixedStr, SecurityTradingStatus};

/// Template 9: instrument-level trading status change.
///
/// `SecurityIDSource` is not read from the wire: like every other message
/// that carries a `SecurityID`, it is implicitly [`simba_dtyp::SECURITY_ID_SOURCE`].
#[derive(BinRead, BinWrite, Debug, Clone, Serialize)]
pub struct SecurityStatus {
    pub security_id: i32,
    pub symbol: FixedStr<25>,
    pub security_trading_status: SecurityTradingStatus,
    pub high_limit_px: Decimal5NULL,
    pub low_limit_px: Decimal5NULL,
    pub initial_margin_on_buy: Decimal2NULL,
    pub initial_margin_on_sell: Decimal2NULL,
    pub initial_margin_syntetic: Decimal2NULL,
}

impl SecurityStatus {
    pub const WIRE_SIZE: usize = 70;
}
