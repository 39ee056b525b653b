//! Display formatting of cell values
//!
//! Renders a cell the way a spreadsheet shows it, in one fixed locale (`.` as
//! decimal separator, `,` for grouping). Only number format codes built from
//! digit placeholders, grouping, percent and exponent are interpreted; any
//! other code (dates included) falls back to the "General" rendering.

use sheetbind_core::{CellValue, NumberFormat};

/// Largest magnitude "General" shows without switching to scientific notation
const GENERAL_MAX: f64 = 1e11;
/// Smallest magnitude "General" shows without switching to scientific notation
const GENERAL_MIN: f64 = 1e-9;
/// Significant digits "General" keeps
const GENERAL_DIGITS: i32 = 10;

/// Format a cell value for display
pub fn format_cell_value(value: &CellValue, format: &NumberFormat) -> String {
    match value {
        CellValue::Empty => String::new(),
        CellValue::Boolean(b) => (if *b { "TRUE" } else { "FALSE" }).to_string(),
        CellValue::Number(n) => format_number(*n, format),
        CellValue::String(s) => s.to_string(),
        CellValue::Error(e) => e.as_str().to_string(),
        CellValue::Formula {
            cached_value: Some(v),
            ..
        } => format_cell_value(v, format),
        CellValue::Formula {
            cached_value: None, ..
        } => String::new(),
    }
}

/// Format a number with a number format
pub fn format_number(value: f64, format: &NumberFormat) -> String {
    if !value.is_finite() {
        return String::new();
    }
    if format.is_text_format() || format.is_date_format() {
        return format_general(value);
    }

    let code = format.format_string();
    let mut sections = code.split(';');
    let positive = sections.next().unwrap_or("");

    let (section, shown) = match sections.next() {
        Some(negative) if value < 0.0 => (negative, -value),
        _ => (positive, value),
    };

    match Pattern::parse(section) {
        Some(pattern) => pattern.render(shown),
        None => format_general(value),
    }
}

/// Excel "General" rendering
pub fn format_general(value: f64) -> String {
    if value == 0.0 {
        return "0".to_string();
    }

    let abs = value.abs();
    if abs >= GENERAL_MAX || abs < GENERAL_MIN {
        return scientific(value, 5, 2, true);
    }
    if value.fract() == 0.0 {
        return format!("{}", value as i64);
    }

    let int_digits = if abs >= 1.0 {
        abs.log10().floor() as i32 + 1
    } else {
        0
    };
    let decimals = (GENERAL_DIGITS - int_digits).max(0) as usize;
    trim_fraction(format!("{:.*}", decimals, value))
}

/// One section of a numeric format code
#[derive(Debug, Clone, PartialEq)]
struct Pattern {
    decimals: usize,
    grouping: bool,
    percent: bool,
    exponent_digits: Option<usize>,
    parens: bool,
    minus: bool,
}

impl Pattern {
    fn parse(section: &str) -> Option<Self> {
        let mut body = String::with_capacity(section.len());
        let mut in_bracket = false;
        for c in section.chars() {
            match c {
                '[' => in_bracket = true,
                ']' => in_bracket = false,
                _ if !in_bracket => body.push(c),
                _ => {}
            }
        }

        let mut body = body.trim();
        let parens = match body.strip_prefix('(').and_then(|b| b.strip_suffix(')')) {
            Some(inner) => {
                body = inner.trim();
                true
            }
            None => false,
        };
        let minus = match body.strip_prefix('-') {
            Some(rest) => {
                body = rest;
                true
            }
            None => false,
        };
        let percent = match body.strip_suffix('%') {
            Some(rest) => {
                body = rest;
                true
            }
            None => false,
        };

        let upper = body.to_ascii_uppercase();
        let (mantissa, exponent_digits) = match upper.find("E+").or_else(|| upper.find("E-")) {
            Some(pos) => {
                let digits = &upper[pos + 2..];
                if digits.is_empty() || !digits.chars().all(|c| c == '0') {
                    return None;
                }
                (&upper[..pos], Some(digits.len()))
            }
            None => (upper.as_str(), None),
        };

        if mantissa.is_empty()
            || !mantissa.chars().all(|c| matches!(c, '0' | '#' | ',' | '.'))
            || !mantissa.chars().any(|c| matches!(c, '0' | '#'))
        {
            return None;
        }

        let (integer, fraction) = match mantissa.split_once('.') {
            Some((i, f)) => (i, f),
            None => (mantissa, ""),
        };

        Some(Self {
            decimals: fraction.chars().filter(|c| matches!(c, '0' | '#')).count(),
            grouping: integer.contains(','),
            percent,
            exponent_digits,
            parens,
            minus,
        })
    }

    fn render(&self, value: f64) -> String {
        let negative = value < 0.0;
        let mut abs = value.abs();
        if self.percent {
            abs *= 100.0;
        }

        let mut body = match self.exponent_digits {
            Some(digits) => scientific(abs, self.decimals, digits, false),
            None => fixed(abs, self.decimals, self.grouping),
        };
        if self.percent {
            body.push('%');
        }

        let is_zero = body
            .chars()
            .all(|c| matches!(c, '0' | '.' | ',' | '%' | 'E' | '+'));
        if self.parens {
            format!("({})", body)
        } else if (negative || self.minus) && !is_zero {
            format!("-{}", body)
        } else {
            body
        }
    }
}

fn fixed(value: f64, decimals: usize, grouping: bool) -> String {
    let text = format!("{:.*}", decimals, value);
    if !grouping {
        return text;
    }

    let (integer, fraction) = match text.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (text.as_str(), None),
    };

    let mut grouped = String::with_capacity(text.len() + integer.len() / 3);
    for (i, c) in integer.chars().enumerate() {
        if i > 0 && (integer.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    if let Some(fraction) = fraction {
        grouped.push('.');
        grouped.push_str(fraction);
    }
    grouped
}

fn scientific(value: f64, decimals: usize, exponent_digits: usize, trim: bool) -> String {
    let text = format!("{:.*e}", decimals, value);
    let (mantissa, exponent) = text.split_once('e').unwrap_or((text.as_str(), "0"));
    let exponent: i32 = exponent.parse().unwrap_or(0);

    let mantissa = if trim {
        trim_fraction(mantissa.to_string())
    } else {
        mantissa.to_string()
    };
    let sign = if exponent < 0 { '-' } else { '+' };
    format!(
        "{}E{}{:0width$}",
        mantissa,
        sign,
        exponent.abs(),
        width = exponent_digits
    )
}

fn trim_fraction(text: String) -> String {
    if !text.contains('.') {
        return text;
    }
    text.trim_end_matches('0').trim_end_matches('.').to_string()
}
