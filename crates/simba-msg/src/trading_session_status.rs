use binrw::{BinRead, BinWrite};
use serde::Serialize;
use simba_dtyp::{MarketSegmentID, TradSesEvent, TradSesStatus, TradingSessionID};

/// Template 11: trading session phase transition.
#[derive(BinRead, BinWrite, Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TradingSessionStatus {
    pub trad_ses_open_time: u64,
    pub trad_ses_close_time: u64,
    pub trad_ses_interm_clearing_start_time: u64,
    pub trad_ses_interm_clearing_end_time: u64,
    pub trading_session_id: TradingSessionID,
    pub exchange_trading_session_id: u64,
    pub trad_ses_status: TradSesStatus,
    pub market_segment_id: MarketSegmentID,
    pub trad_ses_event: TradSesEvent,
}

impl TradingSessionStatus {
    pub const WIRE_SIZE: usize = 44;
}
