use crate::error::ConversionError;

mod sealed {
    pub trait Sealed {}
}

/// A single-value field kind: strings, booleans, integers and floats.
///
/// This set is closed. Custom conversions go through
/// [`UnmarshalText`](crate::UnmarshalText) instead.
pub trait Scalar: sealed::Sealed + Sized {
    /// Converts one percent-decoded query value.
    fn from_query(raw: &str) -> Result<Self, ConversionError>;
}

impl sealed::Sealed for String {}

impl Scalar for String {
    fn from_query(raw: &str) -> Result<Self, ConversionError> {
        Ok(raw.to_owned())
    }
}

impl sealed::Sealed for bool {}

/// A bare flag (`?verbose`) arrives as the empty string and means `true`.
impl Scalar for bool {
    fn from_query(raw: &str) -> Result<Self, ConversionError> {
        match raw {
            "" | "1" | "t" | "T" | "true" | "TRUE" | "True" => Ok(true),
            "0" | "f" | "F" | "false" | "FALSE" | "False" => Ok(false),
            _ => Err(ConversionError::Bool),
        }
    }
}

macro_rules! parse_scalar {
    (signed: $($ty:ty),*) => {
        $(
            impl sealed::Sealed for $ty {}

            impl Scalar for $ty {
                fn from_query(raw: &str) -> Result<Self, ConversionError> {
                    raw.parse::<$ty>().map_err(ConversionError::Int)
                }
            }
        )*
    };

    (unsigned: $($ty:ty),*) => {
        $(
            impl sealed::Sealed for $ty {}

            impl Scalar for $ty {
                fn from_query(raw: &str) -> Result<Self, ConversionError> {
                    if raw.starts_with('+') {
                        return Err(ConversionError::Sign);
                    }
                    raw.parse::<$ty>().map_err(ConversionError::Int)
                }
            }
        )*
    };

    (float: $($ty:ty),*) => {
        $(
            impl sealed::Sealed for $ty {}

            impl Scalar for $ty {
                fn from_query(raw: &str) -> Result<Self, ConversionError> {
                    let value = raw.parse::<$ty>().map_err(ConversionError::Float)?;
                    if value.is_infinite() && !spells_infinity(raw) {
                        return Err(ConversionError::FloatRange);
                    }
                    Ok(value)
                }
            }
        )*
    };
}

/// `inf` or `infinity` in any case, optionally signed.
fn spells_infinity(raw: &str) -> bool {
    let unsigned = raw.strip_prefix(['+', '-']).unwrap_or(raw);
    unsigned.eq_ignore_ascii_case("inf") || unsigned.eq_ignore_ascii_case("infinity")
}

parse_scalar!(signed: i8, i16, i32, i64, i128, isize);
parse_scalar!(unsigned: u8, u16, u32, u64, u128, usize);
parse_scalar!(float: f32, f64);
