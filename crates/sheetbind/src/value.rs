//! Decoded cell values and their conversion into record field types

use std::fmt;

use chrono::{NaiveDate, NaiveDateTime};

use crate::error::PropertyError;

/// A typed value decoded from one cell
#[derive(Debug, Clone, PartialEq, Default)]
pub enum DecodedValue {
    /// Blank cell or no cell at all
    #[default]
    Null,
    /// Text, including display-formatted numbers
    String(String),
    /// Raw number
    Number(f64),
    /// Date and time of a date-formatted cell
    Date(NaiveDateTime),
}

impl DecodedValue {
    /// Check if the value is null
    pub fn is_null(&self) -> bool {
        matches!(self, DecodedValue::Null)
    }

    /// Get the text, if this is a string
    pub fn as_str(&self) -> Option<&str> {
        match self {
            DecodedValue::String(s) => Some(s),
            _ => None,
        }
    }

    /// Get the number, if this is a number
    pub fn as_number(&self) -> Option<f64> {
        match self {
            DecodedValue::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Get the date, if this is a date
    pub fn as_date(&self) -> Option<NaiveDateTime> {
        match self {
            DecodedValue::Date(d) => Some(*d),
            _ => None,
        }
    }

    /// Get the type name for error messages
    pub fn type_name(&self) -> &'static str {
        match self {
            DecodedValue::Null => "null",
            DecodedValue::String(_) => "string",
            DecodedValue::Number(_) => "number",
            DecodedValue::Date(_) => "date",
        }
    }

    /// Convert into a field type, naming `key` in the error
    ///
    /// ```
    /// use sheetbind::DecodedValue;
    ///
    /// let id: i64 = DecodedValue::from("42").convert("id").unwrap();
    /// assert_eq!(id, 42);
    /// assert!(DecodedValue::from("n/a").convert::<i64>("id").is_err());
    /// ```
    pub fn convert<T: FromDecoded>(self, key: &str) -> Result<T, PropertyError> {
        let shown = format!("{} {:?}", self.type_name(), self.to_string());
        T::from_decoded(self).ok_or_else(|| PropertyError::IncompatibleValue {
            key: key.to_string(),
            value: shown,
            expected: T::EXPECTED,
        })
    }
}

impl fmt::Display for DecodedValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DecodedValue::Null => Ok(()),
            DecodedValue::String(s) => write!(f, "{}", s),
            DecodedValue::Number(n) => write!(f, "{}", n),
            DecodedValue::Date(d) => write!(f, "{}", d),
        }
    }
}

impl From<&str> for DecodedValue {
    fn from(s: &str) -> Self {
        DecodedValue::String(s.to_string())
    }
}

impl From<String> for DecodedValue {
    fn from(s: String) -> Self {
        DecodedValue::String(s)
    }
}

impl From<f64> for DecodedValue {
    fn from(n: f64) -> Self {
        DecodedValue::Number(n)
    }
}

impl From<NaiveDateTime> for DecodedValue {
    fn from(d: NaiveDateTime) -> Self {
        DecodedValue::Date(d)
    }
}

/// Conversion from a [`DecodedValue`] into a record field type
///
/// Text produced by the display formatter is parsed back where the target is
/// numeric, boolean or a date.
pub trait FromDecoded: Sized {
    /// Name of the target type used in error messages
    const EXPECTED: &'static str;

    /// Convert, returning `None` when the value does not fit
    fn from_decoded(value: DecodedValue) -> Option<Self>;
}

impl FromDecoded for DecodedValue {
    const EXPECTED: &'static str = "value";

    fn from_decoded(value: DecodedValue) -> Option<Self> {
        Some(value)
    }
}

impl FromDecoded for String {
    const EXPECTED: &'static str = "string";

    fn from_decoded(value: DecodedValue) -> Option<Self> {
        Some(value.to_string())
    }
}

impl FromDecoded for f64 {
    const EXPECTED: &'static str = "number";

    fn from_decoded(value: DecodedValue) -> Option<Self> {
        match value {
            DecodedValue::Number(n) => Some(n),
            DecodedValue::String(s) => parse_number(&s),
            _ => None,
        }
    }
}

impl FromDecoded for bool {
    const EXPECTED: &'static str = "boolean";

    fn from_decoded(value: DecodedValue) -> Option<Self> {
        match value {
            DecodedValue::Number(n) => Some(n != 0.0),
            DecodedValue::String(s) => match s.trim().to_uppercase().as_str() {
                "TRUE" | "VRAI" | "1" => Some(true),
                "FALSE" | "FAUX" | "0" => Some(false),
                _ => None,
            },
            _ => None,
        }
    }
}

macro_rules! integer_from_decoded {
    ($($ty:ty),*) => {
        $(
            impl FromDecoded for $ty {
                const EXPECTED: &'static str = stringify!($ty);

                fn from_decoded(value: DecodedValue) -> Option<Self> {
                    let n = f64::from_decoded(value)?;
                    // MAX + 1 is a power of two, exact as f64 where MAX itself may round up
                    let upper = <$ty>::MAX as f64 + 1.0;
                    if n.fract() != 0.0 || n < <$ty>::MIN as f64 || n >= upper {
                        return None;
                    }
                    Some(n as $ty)
                }
            }
        )*
    };
}

integer_from_decoded!(i32, i64, u32, u64);

impl FromDecoded for NaiveDateTime {
    const EXPECTED: &'static str = "date";

    fn from_decoded(value: DecodedValue) -> Option<Self> {
        match value {
            DecodedValue::Date(d) => Some(d),
            DecodedValue::String(s) => parse_date_time(s.trim()),
            _ => None,
        }
    }
}

impl FromDecoded for NaiveDate {
    const EXPECTED: &'static str = "date";

    fn from_decoded(value: DecodedValue) -> Option<Self> {
        NaiveDateTime::from_decoded(value).map(|d| d.date())
    }
}

impl<T: FromDecoded> FromDecoded for Option<T> {
    const EXPECTED: &'static str = T::EXPECTED;

    fn from_decoded(value: DecodedValue) -> Option<Self> {
        match value {
            DecodedValue::Null => Some(None),
            DecodedValue::String(ref s) if s.is_empty() => Some(None),
            other => T::from_decoded(other).map(Some),
        }
    }
}

/// Parse formatter output: plain, grouped (`1,234.5`) or percent (`12%`)
fn parse_number(s: &str) -> Option<f64> {
    let trimmed = s.trim();
    if let Ok(n) = trimmed.parse::<f64>() {
        return Some(n);
    }

    let (body, scale) = match trimmed.strip_suffix('%') {
        Some(body) => (body, 100.0),
        None => (trimmed, 1.0),
    };
    let (body, sign) = match body.strip_prefix('(').and_then(|b| b.strip_suffix(')')) {
        Some(inner) => (inner, -1.0),
        None => (body, 1.0),
    };
    let ungrouped: String = body.chars().filter(|c| *c != ',').collect();
    ungrouped.parse::<f64>().ok().map(|n| sign * n / scale)
}

fn parse_date_time(s: &str) -> Option<NaiveDateTime> {
    const DATE_TIME_PATTERNS: &[&str] = &["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S", "%d/%m/%Y %H:%M:%S"];
    const DATE_PATTERNS: &[&str] = &["%d/%m/%Y", "%Y-%m-%d"];

    DATE_TIME_PATTERNS
        .iter()
        .find_map(|p| NaiveDateTime::parse_from_str(s, p).ok())
        .or_else(|| {
            DATE_PATTERNS
                .iter()
                .find_map(|p| NaiveDate::parse_from_str(s, p).ok())
                .and_then(|d| d.and_hms_opt(0, 0, 0))
        })
}
