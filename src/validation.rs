use chrono::{Local, NaiveDate};

use crate::error::{BookError, BookResult};

/// Text layout of every date the book reads or prints.
pub const DATE_FORMAT: &str = "%d.%m.%Y";

/// Number of digits a phone number must have.
pub const PHONE_DIGITS: usize = 10;

/// Validates that a name is not empty. Whitespace is kept as-is.
pub fn validate_name(value: &str) -> BookResult<String> {
    if value.is_empty() {
        Err(BookError::InvalidName)
    } else {
        Ok(value.to_string())
    }
}

/// Validates that a phone number is exactly ten ASCII digits.
pub fn validate_phone(value: &str) -> BookResult<String> {
    if value.len() == PHONE_DIGITS && value.bytes().all(|b| b.is_ascii_digit()) {
        Ok(value.to_string())
    } else {
        Err(BookError::InvalidPhone {
            value: value.to_string(),
        })
    }
}

/// Validates a `DD.MM.YYYY` birthday against the local system date.
pub fn validate_birthday(value: &str) -> BookResult<NaiveDate> {
    validate_birthday_as_of(value, Local::now().date_naive())
}

/// Validates a `DD.MM.YYYY` birthday that must not be after `today`.
pub fn validate_birthday_as_of(value: &str, today: NaiveDate) -> BookResult<NaiveDate> {
    let date = parse_date(value)?;
    if date > today {
        return Err(BookError::InvalidDate {
            value: value.to_string(),
            reason: "birthday cannot be in the future".into(),
        });
    }
    Ok(date)
}

/// Parses a `DD.MM.YYYY` date. Out-of-range days or months are rejected,
/// never rolled over.
pub fn parse_date(value: &str) -> BookResult<NaiveDate> {
    NaiveDate::parse_from_str(value, DATE_FORMAT).map_err(|_| BookError::InvalidDate {
        value: value.to_string(),
        reason: "use DD.MM.YYYY".into(),
    })
}

pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn validate_name_accepts_non_empty() {
        assert_eq!(validate_name("Alice").unwrap(), "Alice");
    }

    #[test]
    fn validate_name_keeps_whitespace() {
        assert_eq!(validate_name(" ").unwrap(), " ");
    }

    #[test]
    fn validate_name_rejects_empty() {
        assert!(matches!(validate_name(""), Err(BookError::InvalidName)));
    }

    #[test]
    fn validate_phone_accepts_ten_digits() {
        assert_eq!(validate_phone("0123456789").unwrap(), "0123456789");
    }

    #[test]
    fn validate_phone_rejects_wrong_length() {
        assert!(validate_phone("123456789").is_err());
        assert!(validate_phone("12345678901").is_err());
        assert!(validate_phone("").is_err());
    }

    #[test]
    fn validate_phone_rejects_non_digits() {
        assert!(validate_phone("12345-7890").is_err());
        assert!(validate_phone("+123456789").is_err());
        assert!(validate_phone("12345 7890").is_err());
    }

    #[test]
    fn validate_phone_rejects_non_ascii_digits() {
        // Arabic-Indic digits are numeric but not ASCII.
        assert!(validate_phone("٠١٢٣٤٥٦٧٨٩").is_err());
    }

    #[test]
    fn validate_birthday_accepts_past_and_today() {
        let today = date(2024, 6, 10);
        assert_eq!(
            validate_birthday_as_of("12.06.2020", today).unwrap(),
            date(2020, 6, 12)
        );
        assert_eq!(validate_birthday_as_of("10.06.2024", today).unwrap(), today);
    }

    #[test]
    fn validate_birthday_rejects_future() {
        let today = date(2024, 6, 10);
        let err = validate_birthday_as_of("11.06.2024", today).unwrap_err();
        assert!(matches!(err, BookError::InvalidDate { .. }));
    }

    #[test]
    fn validate_birthday_rejects_out_of_range_parts() {
        let today = date(2024, 6, 10);
        assert!(validate_birthday_as_of("31.02.2020", today).is_err());
        assert!(validate_birthday_as_of("01.13.2020", today).is_err());
        assert!(validate_birthday_as_of("29.02.2023", today).is_err());
    }

    #[test]
    fn validate_birthday_rejects_other_layouts() {
        let today = date(2024, 6, 10);
        assert!(validate_birthday_as_of("2020-06-12", today).is_err());
        assert!(validate_birthday_as_of("12/06/2020", today).is_err());
        assert!(validate_birthday_as_of("12.06.2020x", today).is_err());
        assert!(validate_birthday_as_of("", today).is_err());
    }

    #[test]
    fn validate_birthday_uses_system_clock() {
        assert!(validate_birthday("01.01.2000").is_ok());
        assert!(validate_birthday("01.01.9999").is_err());
    }

    #[test]
    fn format_date_pads_day_and_month() {
        assert_eq!(format_date(date(2024, 1, 5)), "05.01.2024");
    }
}
