//! Excel serial date conversion
//!
//! Excel stores dates as serial numbers: whole days since a base date, with the
//! time of day as the fractional part.
//!
//! - In the 1900 date system serial 1 is 1900-01-01, and Excel inserts the
//!   non-existent day 1900-02-29 as serial 60.
//! - In the 1904 date system serial 0 is 1904-01-01.

use chrono::{Duration, NaiveDate, NaiveDateTime};

const MILLIS_PER_DAY: f64 = 86_400_000.0;

/// Largest serial Excel accepts (9999-12-31 in the 1900 system)
const MAX_SERIAL: f64 = 2_958_466.0;

/// The date system of a workbook
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DateSystem {
    /// 1900 date system (Windows default)
    #[default]
    V1900,
    /// 1904 date system (legacy Mac workbooks)
    V1904,
}

impl DateSystem {
    /// Pick the date system from the workbook `date1904` flag
    pub fn from_date_1904(date_1904: bool) -> Self {
        if date_1904 {
            DateSystem::V1904
        } else {
            DateSystem::V1900
        }
    }

    /// Convert a serial number into a date and time
    ///
    /// Returns `None` for NaN, negative or out-of-range serials. The time of
    /// day is rounded to the millisecond. Serial 60 of the 1900 system, which
    /// names a day that never existed, maps to 1900-02-28.
    pub fn to_datetime(self, serial: f64) -> Option<NaiveDateTime> {
        if !serial.is_finite() || serial < 0.0 || serial > MAX_SERIAL {
            return None;
        }

        let mut days = serial.floor() as i64;
        let mut millis = ((serial - serial.floor()) * MILLIS_PER_DAY).round() as i64;
        if millis >= MILLIS_PER_DAY as i64 {
            days += 1;
            millis = 0;
        }

        let date = match self {
            DateSystem::V1900 => {
                // Serials before the phantom leap day are one day ahead of the
                // Gregorian calendar.
                let base = NaiveDate::from_ymd_opt(1899, 12, 31)?;
                let adjusted = match days {
                    0..=59 => days,
                    60 => 59,
                    _ => days - 1,
                };
                base.checked_add_signed(Duration::days(adjusted))?
            }
            DateSystem::V1904 => {
                let base = NaiveDate::from_ymd_opt(1904, 1, 1)?;
                base.checked_add_signed(Duration::days(days))?
            }
        };

        date.and_hms_opt(0, 0, 0)?
            .checked_add_signed(Duration::milliseconds(millis))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveTime;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap()
    }

    #[test]
    fn test_1900_system() {
        let sys = DateSystem::V1900;
        assert_eq!(sys.to_datetime(1.0), Some(ymd(1900, 1, 1)));
        assert_eq!(sys.to_datetime(59.0), Some(ymd(1900, 2, 28)));
        assert_eq!(sys.to_datetime(61.0), Some(ymd(1900, 3, 1)));
        assert_eq!(sys.to_datetime(45366.0), Some(ymd(2024, 3, 15)));
        assert_eq!(sys.to_datetime(36526.0), Some(ymd(2000, 1, 1)));
    }

    #[test]
    fn test_phantom_leap_day() {
        assert_eq!(DateSystem::V1900.to_datetime(60.0), Some(ymd(1900, 2, 28)));
    }

    #[test]
    fn test_1904_system() {
        let sys = DateSystem::V1904;
        assert_eq!(sys.to_datetime(0.0), Some(ymd(1904, 1, 1)));
        assert_eq!(sys.to_datetime(34064.0), Some(ymd(1997, 4, 6)));
    }

    #[test]
    fn test_time_of_day() {
        let dt = DateSystem::V1900.to_datetime(45366.75).unwrap();
        assert_eq!(dt.date(), NaiveDate::from_ymd_opt(2024, 3, 15).unwrap());
        assert_eq!(dt.time(), NaiveTime::from_hms_opt(18, 0, 0).unwrap());
    }

    #[test]
    fn test_invalid_serials() {
        assert_eq!(DateSystem::V1900.to_datetime(f64::NAN), None);
        assert_eq!(DateSystem::V1900.to_datetime(-1.0), None);
        assert_eq!(DateSystem::V1900.to_datetime(1e9), None);
    }

    #[test]
    fn test_from_flag() {
        assert_eq!(DateSystem::from_date_1904(false), DateSystem::V1900);
        assert_eq!(DateSystem::from_date_1904(true), DateSystem::V1904);
    }
}
