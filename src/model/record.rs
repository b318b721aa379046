use chrono::NaiveDate;
use std::fmt;

use super::fields::{Birthday, Name, Phone, ValidatedField};
use crate::error::BookResult;

/// What `change_phone` did. A missing old number is a normal outcome.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PhoneChange {
    Changed { old: Phone, new: Phone },
    NotFound,
}

/// Everything the book knows about one person.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    name: Name,
    phones: Vec<Phone>,
    birthday: Option<Birthday>,
}

impl Record {
    pub fn new(name: &str) -> BookResult<Self> {
        Ok(Self::with_name(Name::parse(name)?))
    }

    pub fn with_name(name: Name) -> Self {
        Self {
            name,
            phones: Vec::new(),
            birthday: None,
        }
    }

    pub fn name(&self) -> &Name {
        &self.name
    }

    pub fn phones(&self) -> &[Phone] {
        &self.phones
    }

    pub fn birthday(&self) -> Option<Birthday> {
        self.birthday
    }

    /// Appends a phone. Duplicates are kept.
    pub fn add_phone(&mut self, phone: &str) -> BookResult<()> {
        let phone = Phone::parse(phone)?;
        self.push_phone(phone);
        Ok(())
    }

    pub fn push_phone(&mut self, phone: Phone) {
        self.phones.push(phone);
    }

    /// Replaces the first phone equal to `old` with `new`, keeping its position.
    /// `new` is validated before the search, so a malformed `new` never
    /// touches the record.
    pub fn change_phone(&mut self, old: &str, new: &str) -> BookResult<PhoneChange> {
        let new = Phone::parse(new)?;
        match self.phones.iter_mut().find(|p| p.as_str() == old) {
            Some(slot) => {
                let old = std::mem::replace(slot, new.clone());
                Ok(PhoneChange::Changed { old, new })
            }
            None => Ok(PhoneChange::NotFound),
        }
    }

    pub fn add_birthday(&mut self, value: &str) -> BookResult<()> {
        self.set_birthday(Birthday::parse(value)?);
        Ok(())
    }

    pub fn add_birthday_as_of(&mut self, value: &str, today: NaiveDate) -> BookResult<()> {
        self.set_birthday(Birthday::parse_as_of(value, today)?);
        Ok(())
    }

    pub fn set_birthday(&mut self, birthday: Birthday) {
        self.birthday = Some(birthday);
    }

    /// Phones joined for display, e.g. `0123456789; 0987654321`.
    pub fn phones_joined(&self, separator: &str) -> String {
        self.phones
            .iter()
            .map(Phone::as_str)
            .collect::<Vec<_>>()
            .join(separator)
    }

    pub fn to_display_string(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Contact name: {}, phones: {}",
            self.name,
            self.phones_joined("; ")
        )?;
        if let Some(bday) = &self.birthday {
            write!(f, ", birthday: {}", bday)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::BookError;

    #[test]
    fn new_record_has_no_phones_or_birthday() {
        let record = Record::new("Alice").unwrap();
        assert_eq!(record.name().as_str(), "Alice");
        assert!(record.phones().is_empty());
        assert!(record.birthday().is_none());
    }

    #[test]
    fn new_rejects_empty_name() {
        assert!(matches!(Record::new(""), Err(BookError::InvalidName)));
    }

    #[test]
    fn add_phone_keeps_duplicates_in_order() {
        let mut record = Record::new("Alice").unwrap();
        record.add_phone("1111111111").unwrap();
        record.add_phone("2222222222").unwrap();
        record.add_phone("1111111111").unwrap();
        assert_eq!(record.phones_joined(","), "1111111111,2222222222,1111111111");
    }

    #[test]
    fn add_phone_failure_leaves_record_unchanged() {
        let mut record = Record::new("Alice").unwrap();
        record.add_phone("1111111111").unwrap();
        assert!(record.add_phone("12").is_err());
        assert_eq!(record.phones().len(), 1);
    }

    #[test]
    fn change_phone_with_malformed_new_is_error_even_without_match() {
        let mut record = Record::new("Alice").unwrap();
        record.add_phone("1111111111").unwrap();
        assert!(record.change_phone("9999999999", "bad").is_err());
        assert!(record.change_phone("1111111111", "bad").is_err());
        assert_eq!(record.phones_joined(","), "1111111111");
    }

    #[test]
    fn change_phone_replaces_only_first_match() {
        let mut record = Record::new("Alice").unwrap();
        record.add_phone("1111111111").unwrap();
        record.add_phone("1111111111").unwrap();
        record.change_phone("1111111111", "2222222222").unwrap();
        assert_eq!(record.phones_joined(","), "2222222222,1111111111");
    }

    #[test]
    fn display_without_birthday() {
        let mut record = Record::new("Alice").unwrap();
        record.add_phone("1111111111").unwrap();
        record.add_phone("2222222222").unwrap();
        assert_eq!(
            record.to_display_string(),
            "Contact name: Alice, phones: 1111111111; 2222222222"
        );
    }

    #[test]
    fn display_with_birthday() {
        let mut record = Record::new("Alice").unwrap();
        let today = NaiveDate::from_ymd_opt(2024, 6, 10).unwrap();
        record.add_birthday_as_of("01.02.1990", today).unwrap();
        assert_eq!(
            record.to_string(),
            "Contact name: Alice, phones: , birthday: 01.02.1990"
        );
    }
}
