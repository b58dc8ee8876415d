use std::borrow::Cow;
use std::io::{Read, Seek, Write};

use binrw::{BinRead, BinResult, BinWrite, Endian};
use serde::{Serialize, Serializer};

/// A fixed-width character array, NUL-trimmed when rendered as text.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct FixedStr<const N: usize>(pub [u8; N]);

impl<const N: usize> FixedStr<N> {
    pub fn as_str(&self) -> Cow<'_, str> {
        let end = self.0.iter().position(|&b| b == 0).unwrap_or(N);
        String::from_utf8_lossy(&self.0[..end])
    }
}

impl<const N: usize> std::fmt::Debug for FixedStr<N> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self.as_str())
    }
}

impl<const N: usize> BinRead for FixedStr<N> {
    type Args<'a> = ();

    fn read_options<R: Read + Seek>(
        reader: &mut R,
        _endian: Endian,
        _args: Self::Args<'_>,
    ) -> BinResult<Self> {
        let mut buf = [0u8; N];
        reader.read_exact(&mut buf).map_err(binrw::Error::Io)?;
        Ok(FixedStr(buf))
    }
}

impl<const N: usize> BinWrite for FixedStr<N> {
    type Args<'a> = ();

    fn write_options<W: Write + Seek>(
        &self,
        writer: &mut W,
        _endian: Endian,
        _args: Self::Args<'_>,
    ) -> BinResult<()> {
        writer.write_all(&self.0).map_err(binrw::Error::Io)
    }
}

impl<const N: usize> Serialize for FixedStr<N> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.as_str())
    }
}

/// Declares a `u16`-length-prefixed byte field.
macro_rules! length_prefixed_field {
    ($name:ident, $doc:expr) => {
        #[doc = $doc]
        #[derive(Debug, Clone, PartialEq, Eq, Default)]
        pub struct $name(pub Vec<u8>);

        impl $name {
            pub fn as_str(&self) -> Cow<'_, str> {
                String::from_utf8_lossy(&self.0)
            }
        }

        impl BinRead for $name {
            type Args<'a> = ();

            fn read_options<R: Read + Seek>(
                reader: &mut R,
                endian: Endian,
                _args: Self::Args<'_>,
            ) -> BinResult<Self> {
                let len = u16::read_options(reader, endian, ())? as usize;
                let mut buf = vec![0u8; len];
                reader.read_exact(&mut buf).map_err(binrw::Error::Io)?;
                Ok(Self(buf))
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
                (self.0.len() as u16).write_options(writer, endian, ())?;
                writer.write_all(&self.0).map_err(binrw::Error::Io)
            }
        }

        impl Serialize for $name {
            fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.serialize_str(&self.as_str())
            }
        }
    };
}

length_prefixed_field!(Utf8Field, "A `u16`-length-prefixed UTF-8 string.");
length_prefixed_field!(VarField, "A `u16`-length-prefixed ASCII string.");
