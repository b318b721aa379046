use chrono::NaiveDate;
use std::fmt;

use crate::error::BookResult;
use crate::validation;

/// A value that can only exist in validated form.
///
/// Each field kind has one constructor, `parse`, that either returns the
/// wrapped value or the typed error for that kind. `Display` renders the
/// canonical text form, which `parse` accepts again.
pub trait ValidatedField: Sized + fmt::Display {
    fn parse(raw: &str) -> BookResult<Self>;
}

/// A contact's name. Never empty.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Name(String);

impl Name {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl ValidatedField for Name {
    fn parse(raw: &str) -> BookResult<Self> {
        validation::validate_name(raw).map(Self)
    }
}

impl fmt::Display for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A ten-digit phone number.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Phone(String);

impl Phone {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl ValidatedField for Phone {
    fn parse(raw: &str) -> BookResult<Self> {
        validation::validate_phone(raw).map(Self)
    }
}

impl fmt::Display for Phone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A birthday that was not in the future when it was entered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Birthday(NaiveDate);

impl Birthday {
    /// Wraps a date that was already validated, e.g. one read back from storage.
    /// The future-date rule only applies when a birthday is first entered.
    pub fn from_stored(date: NaiveDate) -> Self {
        Self(date)
    }

    /// Parses against an explicit reference date instead of the system clock.
    pub fn parse_as_of(raw: &str, today: NaiveDate) -> BookResult<Self> {
        validation::validate_birthday_as_of(raw, today).map(Self)
    }

    pub fn date(&self) -> NaiveDate {
        self.0
    }
}

impl ValidatedField for Birthday {
    fn parse(raw: &str) -> BookResult<Self> {
        validation::validate_birthday(raw).map(Self)
    }
}

impl fmt::Display for Birthday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&validation::format_date(self.0))
    }
}
