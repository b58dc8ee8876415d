use std::io::{Read, Seek, Write};

use binrw::{BinRead, BinResult, BinWrite, Endian};
use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

/// Declares a scalar enum backed by `$repr` that preserves codes it does not
/// recognize instead of erroring on them.
macro_rules! scalar_enum {
    ($name:ident, $repr:ty, [$($value:expr => $variant:ident),* $(,)?]) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq)]
        pub enum $name {
            $($variant,)*
            Unknown($repr),
        }

        impl $name {
            pub fn from_raw(raw: $repr) -> Self {
                match raw {
                    $($value => Self::$variant,)*
                    other => Self::Unknown(other),
                }
            }

            pub fn raw(&self) -> $repr {
                match self {
                    $(Self::$variant => $value,)*
                    Self::Unknown(v) => *v,
                }
            }

            pub fn name(&self) -> Option<&'static str> {
                match self {
                    $(Self::$variant => Some(stringify!($variant)),)*
                    Self::Unknown(_) => None,
                }
            }
        }

        impl BinRead for $name {
            type Args<'a> = ();

            fn read_options<R: Read + Seek>(
                reader: &mut R,
                endian: Endian,
                _args: Self::Args<'_>,
            ) -> BinResult<Self> {
                let raw = <$repr>::read_options(reader, endian, ())?;
                Ok(Self::from_raw(raw))
            }
        }

        impl BinWrite for $name {
            type Args<'a> = ();

            fn write_options<W: Write + Seek>(
                &self,
                writer: &mut W,
                endian: Endian,
                _args: Self::Args<'_>,
            ) -> BinResult<()> {
                self.raw().write_options(writer, endian, ())
            }
        }

        impl Serialize for $name {
            fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                match self.name() {
                    Some(name) => serializer.serialize_str(name),
                    None => {
                        let mut map = serializer.serialize_map(Some(1))?;
                        map.serialize_entry("unknown", &self.raw())?;
                        map.end()
                    }
                }
            }
        }
    };
}

scalar_enum!(MDUpdateAction, u8, [
    0 => New,
    1 => Change,
    2 => Delete,
]);

scalar_enum!(MDEntryType, u8, [
    b'0' => Bid,
    b'1' => Offer,
    b'J' => EmptyBook,
]);

scalar_enum!(SecurityAltIDSource, u8, [
    b'4' => Isin,
    b'8' => ExchangeSymbol,
]);

scalar_enum!(SecurityTradingStatus, u8, [
    2 => TradingHalt,
    17 => ReadyToTrade,
    18 => NotAvailableForTrading,
    19 => NotTradedOnThisMarket,
    20 => UnknownOrInvalid,
    21 => PreOpen,
    119 => DiscreteAuctionOpen,
    121 => DiscreteAuctionClose,
    122 => InstrumentHalt,
]);

scalar_enum!(TradingSessionID, u8, [
    0 => Null,
    1 => Day,
    3 => Morning,
    5 => Evening,
]);

scalar_enum!(MarketSegmentID, u8, [
    b'D' => Derivatives,
]);

scalar_enum!(TradSesStatus, u8, [
    1 => Halted,
    2 => Open,
    3 => Closed,
    4 => PreOpen,
]);

scalar_enum!(TradSesEvent, u8, [
    0 => TradingResumes,
    1 => ChangeOfTradingSession,
    3 => ChangeOfTradingStatus,
]);

scalar_enum!(NegativePrices, u8, [
    0 => NotEligible,
    1 => Eligible,
]);

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn known_code_roundtrips_by_name() {
        let status = SecurityTradingStatus::from_raw(17);
        assert_eq!(status.name(), Some("ReadyToTrade"));
        assert_eq!(status.raw(), 17);
    }

    #[test]
    fn unknown_code_is_preserved() {
        let status = SecurityTradingStatus::from_raw(250);
        assert_eq!(status, SecurityTradingStatus::Unknown(250));
        assert_eq!(status.raw(), 250);
        assert_eq!(status.name(), None);
    }

    #[test]
    fn binrw_roundtrip() {
        let mut buf = Vec::new();
        let action = MDUpdateAction::Change;
        action
            .write_options(&mut Cursor::new(&mut buf), Endian::Little, ())
            .unwrap();
        let read_back =
            MDUpdateAction::read_options(&mut Cursor::new(&buf), Endian::Little, ()).unwrap();
        assert_eq!(action, read_back);
    }
}
