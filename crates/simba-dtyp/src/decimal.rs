use binrw::{BinRead, BinWrite};
use serde::{Serialize, Serializer};

macro_rules! fixed_decimal {
    ($name:ident, $exponent:expr, $doc:expr) => {
        #[doc = $doc]
        #[derive(BinRead, BinWrite, Debug, Clone, Copy, PartialEq, Eq)]
        pub struct $name {
            pub mantissa: i64,
        }

        impl $name {
            pub const EXPONENT: i32 = $exponent;

            pub fn new(mantissa: i64) -> Self {
                Self { mantissa }
            }

            pub fn as_f64(&self) -> f64 {
                self.mantissa as f64 * 10f64.powi(Self::EXPONENT)
            }
        }

        impl Serialize for $name {
            fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.serialize_f64(self.as_f64())
            }
        }
    };
}

macro_rules! nullable_decimal {
    ($name:ident, $exponent:expr, $doc:expr) => {
        #[doc = $doc]
        #[derive(BinRead, BinWrite, Debug, Clone, Copy, PartialEq, Eq)]
        pub struct $name {
            pub mantissa: i64,
        }

        impl $name {
            pub const EXPONENT: i32 = $exponent;
            pub const NULL_VALUE: i64 = i64::MAX;

            pub fn new(mantissa: i64) -> Self {
                Self { mantissa }
            }

            pub fn is_null(&self) -> bool {
                self.mantissa == Self::NULL_VALUE
            }

            pub fn as_f64(&self) -> Option<f64> {
                if self.is_null() {
                    None
                } else {
                    Some(self.mantissa as f64 * 10f64.powi(Self::EXPONENT))
                }
            }
        }

        impl Serialize for $name {
            fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                match self.as_f64() {
                    Some(value) => serializer.serialize_f64(value),
                    None => serializer.serialize_none(),
                }
            }
        }
    };
}

fixed_decimal!(Decimal5, -5, "Fixed-point value with an implicit scale of 1e-5, never null.");
nullable_decimal!(Decimal5NULL, -5, "Fixed-point value with an implicit scale of 1e-5, or null.");
nullable_decimal!(Decimal2NULL, -2, "Fixed-point value with an implicit scale of 1e-2, or null.");

/// IEEE-754 double, null encoded as a quiet NaN.
#[derive(BinRead, BinWrite, Debug, Clone, Copy, PartialEq)]
pub struct DoubleNULL {
    pub value: f64,
}

impl DoubleNULL {
    pub fn is_null(&self) -> bool {
        self.value.is_nan()
    }

    pub fn as_option(&self) -> Option<f64> {
        if self.is_null() {
            None
        } else {
            Some(self.value)
        }
    }
}

impl Serialize for DoubleNULL {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self.as_option() {
            Some(value) => serializer.serialize_f64(value),
            None => serializer.serialize_none(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decimal5_scales_mantissa() {
        let d = Decimal5::new(123_45000);
        assert!((d.as_f64() - 123.45).abs() < 1e-9);
    }

    #[test]
    fn decimal5_null_detects_sentinel() {
        let null = Decimal5NULL::new(Decimal5NULL::NULL_VALUE);
        assert!(null.is_null());
        assert_eq!(null.as_f64(), None);

        let value = Decimal5NULL::new(100_000);
        assert_eq!(value.as_f64(), Some(1.0));
    }

    #[test]
    fn double_null_detects_nan() {
        let null = DoubleNULL { value: f64::NAN };
        assert!(null.is_null());
        let value = DoubleNULL { value: 1.5 };
        assert_eq!(value.as_option(), Some(1.5));
    }
}
