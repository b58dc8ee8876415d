use std::collections::BTreeSet;
use std::io::{Read, Seek, Write};

use binrw::{BinRead, BinResult, BinWrite, Endian};
use serde::ser::SerializeSeq;
use serde::{Serialize, Serializer};

/// Declares a bitmask wire type together with its named-tag enum.
///
/// Bits not present in the tag list still round-trip: they surface as
/// `Tag::Unknown(bit)` on read and are written back to the same position.
macro_rules! bitmask_set {
    ($set_name:ident, $tag_name:ident, $int:ty, [$($bit:expr => $variant:ident),* $(,)?]) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq)]
        pub enum $tag_name {
            $($variant,)*
            Unknown(u8),
        }

        impl $tag_name {
            fn bit(&self) -> u8 {
                match self {
                    $(Self::$variant => $bit,)*
                    Self::Unknown(bit) => *bit,
                }
            }

            fn name(&self) -> String {
                match self {
                    $(Self::$variant => stringify!($variant).to_string(),)*
                    Self::Unknown(bit) => format!("unknown({bit})"),
                }
            }
        }

        impl PartialOrd for $tag_name {
            fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
                Some(self.cmp(other))
            }
        }

        impl Ord for $tag_name {
            fn cmp(&self, other: &Self) -> std::cmp::Ordering {
                self.bit().cmp(&other.bit())
            }
        }

        #[derive(Debug, Clone, PartialEq, Eq, Default)]
        pub struct $set_name(pub BTreeSet<$tag_name>);

        impl $set_name {
            pub fn from_bits(value: $int) -> Self {
                let mut tags = BTreeSet::new();
                for bit in 0..(std::mem::size_of::<$int>() * 8) as u8 {
                    if value & (1 as $int) << bit != 0 {
                        let tag = match bit {
                            $($bit => $tag_name::$variant,)*
                            other => $tag_name::Unknown(other),
                        };
                        tags.insert(tag);
                    }
                }
                Self(tags)
            }

            pub fn to_bits(&self) -> $int {
                self.0
                    .iter()
                    .fold(0 as $int, |acc, tag| acc | (1 as $int) << tag.bit())
            }

            pub fn contains(&self, tag: $tag_name) -> bool {
                self.0.contains(&tag)
            }
        }

        impl BinRead for $set_name {
            type Args<'a> = ();

            fn read_options<R: Read + Seek>(
                reader: &mut R,
                endian: Endian,
                _args: Self::Args<'_>,
            ) -> BinResult<Self> {
                let raw = <$int>::read_options(reader, endian, ())?;
                Ok(Self::from_bits(raw))
            }
        }

        impl BinWrite for $set_name {
            type Args<'a> = ();

            fn write_options<W: Write + Seek>(
                &self,
                writer: &mut W,
                endian: Endian,
                _args: Self::Args<'_>,
            ) -> BinResult<()> {
                self.to_bits().write_options(writer, endian, ())
            }
        }

        impl Serialize for $set_name {
            fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                let mut seq = serializer.serialize_seq(Some(self.0.len()))?;
                for tag in &self.0 {
                    seq.serialize_element(&tag.name())?;
                }
                seq.end()
            }
        }
    };
}

bitmask_set!(MsgFlagsSet, MsgFlagsTag, u16, [
    0 => LastFragment,
    1 => StartOfSnapshot,
    2 => EndOfSnapshot,
    3 => IncrementalPacket,
    4 => PossDupFlag,
]);

bitmask_set!(MDFlagsSet, MDFlagsTag, u64, [
    0 => Day,
    1 => Ioc,
    2 => NonQuote,
    12 => EndOfTransaction,
    13 => DueToCrossCancel,
    14 => SecondLeg,
    19 => Fok,
    20 => Replace,
    21 => Cancel,
    22 => MassCancel,
    26 => Negotiated,
    27 => MultiLeg,
    29 => CrossTrade,
    31 => NegotiatedMatchByRef,
    32 => Cod,
    41 => ActiveSide,
    42 => PassiveSide,
    45 => Synthetic,
    46 => Rfs,
    57 => SyntheticPassive,
    60 => Boc,
    62 => DuringDiscreteAuction,
]);

// No tags are currently assigned in this field; every set bit surfaces as
// `Unknown`.
bitmask_set!(MDFlags2Set, MDFlags2Tag, u64, []);

bitmask_set!(FlagsSet, FlagsTag, u64, [
    0 => EveningOrMorningSession,
    4 => AnonymousTrading,
    5 => PrivateTrading,
    6 => DaySession,
    8 => MultiLeg,
    18 => Collateral,
    19 => IntradayExercise,
]);

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn roundtrips_known_and_unknown_bits() {
        let raw: u64 = (1 << 0) | (1 << 12) | (1 << 17);
        let set = MDFlagsSet::from_bits(raw);
        assert!(set.contains(MDFlagsTag::Day));
        assert!(set.contains(MDFlagsTag::EndOfTransaction));
        assert!(set.contains(MDFlagsTag::Unknown(17)));
        assert_eq!(set.to_bits(), raw);
    }

    #[test]
    fn binrw_roundtrip() {
        let mut buf = Vec::new();
        let set = MsgFlagsSet::from_bits(0b10101);
        set.write_options(&mut Cursor::new(&mut buf), Endian::Little, ())
            .unwrap();
        let mut cursor = Cursor::new(&buf);
        let read_back = MsgFlagsSet::read_options(&mut cursor, Endian::Little, ()).unwrap();
        assert_eq!(set, read_back);
    }

    #[test]
    fn empty_tag_set_preserves_all_bits_as_unknown() {
        let set = MDFlags2Set::from_bits(0b110);
        assert!(set.contains(MDFlags2Tag::Unknown(1)));
        assert!(set.contains(MDFlags2Tag::Unknown(2)));
        assert_eq!(set.to_bits(), 0b110);
    }
}
