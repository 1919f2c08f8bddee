//! Date and number formatting for the UI layer.

use chrono::{DateTime, NaiveDate, Utc};

/// Numeric short date, e.g. "1/15/2024".
pub fn format_date(at: &DateTime<Utc>) -> String {
    at.format("%-m/%-d/%Y").to_string()
}

/// Short date for calendar-only values.
pub fn format_day(day: &NaiveDate) -> String {
    day.format("%-m/%-d/%Y").to_string()
}

/// "Jan 15, 2024"
pub fn format_date_human(at: &DateTime<Utc>) -> String {
    at.format("%b %-d, %Y").to_string()
}

/// "Jan 15, 2024 9:30 AM"
pub fn format_datetime_human(at: &DateTime<Utc>) -> String {
    at.format("%b %-d, %Y %-I:%M %p").to_string()
}

/// "Joined Mar 2023"
pub fn format_joined(day: &NaiveDate) -> String {
    format!("Joined {}", day.format("%b %Y"))
}

/// Thousands separators for counters, e.g. 1234 → "1,234".
pub fn format_count(n: u32) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn dates_format_without_padding() {
        let at = Utc.with_ymd_and_hms(2024, 1, 5, 9, 30, 0).unwrap();
        assert_eq!(format_date(&at), "1/5/2024");
        assert_eq!(format_date_human(&at), "Jan 5, 2024");
        assert_eq!(format_datetime_human(&at), "Jan 5, 2024 9:30 AM");
    }

    #[test]
    fn joined_label() {
        let day = NaiveDate::from_ymd_opt(2023, 3, 14).unwrap();
        assert_eq!(format_joined(&day), "Joined Mar 2023");
        assert_eq!(format_day(&day), "3/14/2023");
    }

    #[test]
    fn counts_get_separators() {
        assert_eq!(format_count(0), "0");
        assert_eq!(format_count(999), "999");
        assert_eq!(format_count(1234), "1,234");
        assert_eq!(format_count(1234567), "1,234,567");
    }
}
