use crate::error::ConversionError;

/// Types a raw value can be read as.
///
/// Implemented for `String`, `i32`, `i64`, `f32`, and `f64`. The whole raw value must be
/// consumed: `"12a"` is not an integer and `"3,14,15"` is not a float.
pub trait FromValue: Sized {
    /// # Errors
    ///
    /// Returns [`ConversionError`] if `raw` is not entirely a valid `Self`.
    fn from_value(raw: &str) -> Result<Self, ConversionError>;
}

impl FromValue for String {
    fn from_value(raw: &str) -> Result<Self, ConversionError> {
        Ok(raw.to_owned())
    }
}

macro_rules! impl_from_value_int {
    ($($t:ty),*) => {
        $(
            impl FromValue for $t {
                fn from_value(raw: &str) -> Result<Self, ConversionError> {
                    raw.parse::<$t>().map_err(|source| ConversionError::Integer {
                        value: raw.to_owned(),
                        source,
                    })
                }
            }
        )*
    };
}

macro_rules! impl_from_value_float {
    ($($t:ty),*) => {
        $(
            impl FromValue for $t {
                fn from_value(raw: &str) -> Result<Self, ConversionError> {
                    let invalid = |source| ConversionError::Float {
                        value: raw.to_owned(),
                        source,
                    };
                    let normalized = normalize_decimal(raw);
                    let parsed = normalized
                        .parse::<$t>()
                        .map_err(|source| invalid(Some(source)))?;

                    // Out-of-range literals parse as infinity; only an explicit `inf` may.
                    if parsed.is_infinite() && !names_infinity(&normalized) {
                        return Err(invalid(None));
                    }

                    Ok(parsed)
                }
            }
        )*
    };
}

impl_from_value_int!(i32, i64);
impl_from_value_float!(f32, f64);

fn names_infinity(text: &str) -> bool {
    let unsigned = text.strip_prefix(['+', '-']).unwrap_or(text);
    unsigned.eq_ignore_ascii_case("inf") || unsigned.eq_ignore_ascii_case("infinity")
}

/// Accept a comma as the decimal mark by rewriting every `,` to `.`.
fn normalize_decimal(raw: &str) -> String {
    raw.replace(',', ".")
}
