//! Field validators for member data.

use std::sync::LazyLock;

use chrono::NaiveDate;
use regex::Regex;

static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$")
        .expect("email pattern is a valid regex")
});

/// Returns true if `s` looks like an email address.
///
/// The check is intentionally loose: it only requires a local part, an `@`,
/// a domain and a top-level domain of at least two ASCII letters.
pub fn is_valid_email(s: &str) -> bool {
    EMAIL_PATTERN.is_match(s)
}

/// Returns true if `s` is a real calendar date written as `YYYY-MM-DD`.
///
/// Year, month and day must be zero-padded to 4, 2 and 2 digits. Month and
/// day-of-month are checked against the calendar, leap years included.
pub fn is_valid_date(s: &str) -> bool {
    parse_date(s).is_some()
}

/// Parses a strict `YYYY-MM-DD` date.
pub fn parse_date(s: &str) -> Option<NaiveDate> {
    let bytes = s.as_bytes();
    if bytes.len() != 10 || bytes[4] != b'-' || bytes[7] != b'-' {
        return None;
    }

    let digits_only = bytes
        .iter()
        .enumerate()
        .all(|(i, b)| i == 4 || i == 7 || b.is_ascii_digit());
    if !digits_only {
        return None;
    }

    let year: i32 = s[0..4].parse().ok()?;
    let month: u32 = s[5..7].parse().ok()?;
    let day: u32 = s[8..10].parse().ok()?;
    NaiveDate::from_ymd_opt(year, month, day)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_dates() {
        for date in ["2023-10-15", "2020-02-29", "2000-02-29", "1990-01-01", "0001-01-01"] {
            assert!(is_valid_date(date), "{date} should be valid");
        }
    }

    #[test]
    fn invalid_dates() {
        for date in [
            "2023-02-29", // not a leap year
            "1900-02-29", // century, not a leap year
            "15-10-2023",
            "2023/10/15",
            "",
            "2023-13-01",
            "2023-00-01",
            "2023-12-32",
            "2023-04-31",
            "2023-1-05",
            "2023-01-5 ",
            "+023-01-05",
            "2023-10-15T00:00:00",
        ] {
            assert!(!is_valid_date(date), "{date:?} should be invalid");
        }
    }

    #[test]
    fn formatted_dates_validate() {
        let mut date = NaiveDate::from_ymd_opt(1999, 12, 1).unwrap();
        let end = NaiveDate::from_ymd_opt(2001, 3, 31).unwrap();
        while date <= end {
            let formatted = date.format("%Y-%m-%d").to_string();
            assert_eq!(parse_date(&formatted), Some(date));
            date = date.succ_opt().unwrap();
        }
    }

    #[test]
    fn valid_emails() {
        for email in [
            "test@example.com",
            "user.name+tag+sorting@example.com",
            "user.name@example.co.uk",
            "test@domain.corporate",
            "John.Doe@gmail.com",
        ] {
            assert!(is_valid_email(email), "{email} should be valid");
        }
    }

    #[test]
    fn invalid_emails() {
        for email in [
            "invalid-email",
            "@example.com",
            "test@.com",
            "test@domain",
            "test@domain.c",
            "test@domain.c0m",
            "",
            "test @example.com",
        ] {
            assert!(!is_valid_email(email), "{email:?} should be invalid");
        }
    }
}
