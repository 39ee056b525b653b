//! Number format types

/// Number format attached to a cell
///
/// The format is the only signal distinguishing a date, a plain number, or
/// numeric-looking text when the stored value is an `f64`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum NumberFormat {
    /// General format (default)
    #[default]
    General,

    /// Built-in (or workbook-registered) format by ID
    BuiltIn(u32),

    /// Custom format string
    Custom(String),
}

impl NumberFormat {
    /// General format
    pub const GENERAL: Self = NumberFormat::General;

    // Built-in format IDs
    /// 0 - General
    pub const ID_GENERAL: u32 = 0;
    /// 1 - 0
    pub const ID_NUMBER_INT: u32 = 1;
    /// 2 - 0.00
    pub const ID_NUMBER_DEC2: u32 = 2;
    /// 3 - #,##0
    pub const ID_NUMBER_SEP: u32 = 3;
    /// 4 - #,##0.00
    pub const ID_NUMBER_SEP_DEC2: u32 = 4;
    /// 9 - 0%
    pub const ID_PERCENT_INT: u32 = 9;
    /// 10 - 0.00%
    pub const ID_PERCENT_DEC2: u32 = 10;
    /// 11 - 0.00E+00
    pub const ID_SCIENTIFIC: u32 = 11;
    /// 14 - mm-dd-yy
    pub const ID_DATE_SHORT: u32 = 14;
    /// 15 - d-mmm-yy
    pub const ID_DATE_MEDIUM: u32 = 15;
    /// 16 - d-mmm
    pub const ID_DATE_DAY_MONTH: u32 = 16;
    /// 17 - mmm-yy
    pub const ID_DATE_MONTH_YEAR: u32 = 17;
    /// 18 - h:mm AM/PM
    pub const ID_TIME_AMPM: u32 = 18;
    /// 19 - h:mm:ss AM/PM
    pub const ID_TIME_AMPM_SEC: u32 = 19;
    /// 20 - h:mm
    pub const ID_TIME_24H: u32 = 20;
    /// 21 - h:mm:ss
    pub const ID_TIME_24H_SEC: u32 = 21;
    /// 22 - m/d/yy h:mm
    pub const ID_DATETIME: u32 = 22;
    /// 37 - #,##0 ;(#,##0)
    pub const ID_ACCOUNTING_INT: u32 = 37;
    /// 38 - #,##0 ;[Red](#,##0)
    pub const ID_ACCOUNTING_INT_RED: u32 = 38;
    /// 39 - #,##0.00;(#,##0.00)
    pub const ID_ACCOUNTING_DEC2: u32 = 39;
    /// 40 - #,##0.00;[Red](#,##0.00)
    pub const ID_ACCOUNTING_DEC2_RED: u32 = 40;
    /// 45 - mm:ss
    pub const ID_TIME_MIN_SEC: u32 = 45;
    /// 46 - [h]:mm:ss
    pub const ID_TIME_ELAPSED: u32 = 46;
    /// 47 - mm:ss.0
    pub const ID_TIME_MIN_SEC_TENTHS: u32 = 47;
    /// 49 - @
    pub const ID_TEXT: u32 = 49;
    /// 165 - @, as registered by OpenOffice/LibreOffice when exporting text columns
    pub const ID_OPENOFFICE_TEXT: u32 = 165;
    /// 167 - DD/MM/YYYY, as registered by OpenOffice/LibreOffice when exporting date columns
    pub const ID_OPENOFFICE_DATE: u32 = 167;

    /// Create a number format from a format string
    pub fn from_string<S: Into<String>>(format: S) -> Self {
        NumberFormat::Custom(format.into())
    }

    /// Create a built-in format by ID
    pub fn from_id(id: u32) -> Self {
        if id == Self::ID_GENERAL {
            NumberFormat::General
        } else {
            NumberFormat::BuiltIn(id)
        }
    }

    /// Integer format (0)
    pub fn integer() -> Self {
        NumberFormat::BuiltIn(Self::ID_NUMBER_INT)
    }

    /// Decimal format (0.00)
    pub fn decimal() -> Self {
        NumberFormat::BuiltIn(Self::ID_NUMBER_DEC2)
    }

    /// Number with thousands separator (#,##0)
    pub fn thousands() -> Self {
        NumberFormat::BuiltIn(Self::ID_NUMBER_SEP)
    }

    /// Percentage (0%)
    pub fn percent() -> Self {
        NumberFormat::BuiltIn(Self::ID_PERCENT_INT)
    }

    /// Short date (mm-dd-yy)
    pub fn date_short() -> Self {
        NumberFormat::BuiltIn(Self::ID_DATE_SHORT)
    }

    /// Date and time (m/d/yy h:mm)
    pub fn datetime() -> Self {
        NumberFormat::BuiltIn(Self::ID_DATETIME)
    }

    /// Text format (@)
    pub fn text() -> Self {
        NumberFormat::BuiltIn(Self::ID_TEXT)
    }

    /// OpenOffice day/month/year date format (167)
    pub fn openoffice_date() -> Self {
        NumberFormat::BuiltIn(Self::ID_OPENOFFICE_DATE)
    }

    /// OpenOffice text format (165)
    pub fn openoffice_text() -> Self {
        NumberFormat::BuiltIn(Self::ID_OPENOFFICE_TEXT)
    }

    /// Numeric format ID, `None` for custom format strings
    pub fn id(&self) -> Option<u32> {
        match self {
            NumberFormat::General => Some(Self::ID_GENERAL),
            NumberFormat::BuiltIn(id) => Some(*id),
            NumberFormat::Custom(_) => None,
        }
    }

    /// Get the format string
    pub fn format_string(&self) -> &str {
        match self {
            NumberFormat::General => "General",
            NumberFormat::BuiltIn(id) => Self::builtin_format_string(*id),
            NumberFormat::Custom(s) => s,
        }
    }

    /// Get built-in format string by ID
    fn builtin_format_string(id: u32) -> &'static str {
        match id {
            0 => "General",
            1 => "0",
            2 => "0.00",
            3 => "#,##0",
            4 => "#,##0.00",
            9 => "0%",
            10 => "0.00%",
            11 => "0.00E+00",
            12 => "# ?/?",
            13 => "# ??/??",
            14 => "mm-dd-yy",
            15 => "d-mmm-yy",
            16 => "d-mmm",
            17 => "mmm-yy",
            18 => "h:mm AM/PM",
            19 => "h:mm:ss AM/PM",
            20 => "h:mm",
            21 => "h:mm:ss",
            22 => "m/d/yy h:mm",
            37 => "#,##0 ;(#,##0)",
            38 => "#,##0 ;[Red](#,##0)",
            39 => "#,##0.00;(#,##0.00)",
            40 => "#,##0.00;[Red](#,##0.00)",
            45 => "mm:ss",
            46 => "[h]:mm:ss",
            47 => "mm:ss.0",
            48 => "##0.0E+0",
            49 | 165 => "@",
            167 => "DD/MM/YYYY",
            _ => "General",
        }
    }

    /// Check if this format forces numeric-looking content to display as text
    pub fn is_text_format(&self) -> bool {
        match self {
            NumberFormat::BuiltIn(id) => {
                *id == Self::ID_TEXT || *id == Self::ID_OPENOFFICE_TEXT
            }
            NumberFormat::Custom(s) => s.trim() == "@",
            NumberFormat::General => false,
        }
    }

    /// Check if this is exactly the reserved OpenOffice date format (167)
    pub fn is_reserved_date_format(&self) -> bool {
        matches!(self, NumberFormat::BuiltIn(id) if *id == Self::ID_OPENOFFICE_DATE)
    }

    /// Check if this is a date/time format
    pub fn is_date_format(&self) -> bool {
        match self {
            NumberFormat::BuiltIn(id) => matches!(id, 14..=22 | 45..=47 | 167),
            NumberFormat::Custom(s) => is_date_pattern(s),
            NumberFormat::General => false,
        }
    }
}

/// Decide whether a custom format code renders a date or time.
///
/// Quoted literals, escaped characters and bracketed sections (colors,
/// conditions, locales) are ignored; elapsed-time brackets such as `[h]` count
/// as time. Only the first section is inspected.
fn is_date_pattern(code: &str) -> bool {
    let section = code.split(';').next().unwrap_or("");
    let mut cleaned = String::with_capacity(section.len());
    let mut chars = section.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '"' => {
                for q in chars.by_ref() {
                    if q == '"' {
                        break;
                    }
                }
            }
            '\\' | '_' | '*' => {
                chars.next();
            }
            '[' => {
                let mut inner = String::new();
                for b in chars.by_ref() {
                    if b == ']' {
                        break;
                    }
                    inner.push(b);
                }
                let inner = inner.to_ascii_lowercase();
                if !inner.is_empty() && inner.chars().all(|b| matches!(b, 'h' | 'm' | 's')) {
                    cleaned.push_str(&inner);
                }
            }
            _ => cleaned.push(c),
        }
    }

    let lower = cleaned
        .to_ascii_lowercase()
        .replace("am/pm", "")
        .replace("a/p", "");

    lower.chars().any(|c| matches!(c, 'y' | 'm' | 'd' | 'h' | 's'))
        && lower
            .chars()
            .all(|c| matches!(c, 'y' | 'm' | 'd' | 'h' | 's' | 'e' | '-' | '/' | ',' | '.' | ' ' | ':' | '0' | 't'))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_formats() {
        assert!(NumberFormat::text().is_text_format());
        assert!(NumberFormat::openoffice_text().is_text_format());
        assert!(NumberFormat::from_string("@").is_text_format());
        assert!(!NumberFormat::General.is_text_format());
        assert!(!NumberFormat::integer().is_text_format());
    }

    #[test]
    fn test_builtin_date_formats() {
        assert!(NumberFormat::date_short().is_date_format());
        assert!(NumberFormat::datetime().is_date_format());
        assert!(NumberFormat::BuiltIn(NumberFormat::ID_TIME_ELAPSED).is_date_format());
        assert!(NumberFormat::openoffice_date().is_date_format());
        assert!(!NumberFormat::thousands().is_date_format());
        assert!(!NumberFormat::text().is_date_format());
        assert!(!NumberFormat::General.is_date_format());
    }

    #[test]
    fn test_reserved_date_format_is_narrow() {
        assert!(NumberFormat::openoffice_date().is_reserved_date_format());
        assert!(!NumberFormat::date_short().is_reserved_date_format());
        assert!(!NumberFormat::from_string("dd/mm/yyyy").is_reserved_date_format());
    }

    #[test]
    fn test_custom_date_patterns() {
        assert!(NumberFormat::from_string("dd/mm/yyyy").is_date_format());
        assert!(NumberFormat::from_string("yyyy-mm-dd hh:mm:ss").is_date_format());
        assert!(NumberFormat::from_string("[$-40C]d mmmm yyyy").is_date_format());
        assert!(NumberFormat::from_string("h:mm AM/PM").is_date_format());
        assert!(NumberFormat::from_string("[h]:mm").is_date_format());
        assert!(NumberFormat::from_string("[Red]dd/mm/yy").is_date_format());
    }

    #[test]
    fn test_custom_non_date_patterns() {
        assert!(!NumberFormat::from_string("#,##0.00").is_date_format());
        assert!(!NumberFormat::from_string("0.0%").is_date_format());
        assert!(!NumberFormat::from_string("\"days: \"0").is_date_format());
        assert!(!NumberFormat::from_string("General").is_date_format());
        assert!(!NumberFormat::from_string("@").is_date_format());
    }

    #[test]
    fn test_format_string_and_id() {
        assert_eq!(NumberFormat::General.format_string(), "General");
        assert_eq!(NumberFormat::text().format_string(), "@");
        assert_eq!(NumberFormat::openoffice_date().format_string(), "DD/MM/YYYY");
        assert_eq!(NumberFormat::from_id(0), NumberFormat::General);
        assert_eq!(NumberFormat::text().id(), Some(49));
        assert_eq!(NumberFormat::from_string("0.0").id(), None);
    }
}
