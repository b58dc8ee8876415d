/// Market identifier for every SIMBA message. Never transmitted on the wire;
/// the exchange and schema agree on it out of band.
pub const MARKET_ID: &str = "MOEX";

/// `SecurityIDSource` is likewise never transmitted: every message that
/// carries a `SecurityID` implicitly sources it from this value.
pub const SECURITY_ID_SOURCE: u8 = b'8';
