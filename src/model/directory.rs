use chrono::{Local, NaiveDate};

use super::record::Record;
use crate::queries::birthday_queries::{self, UpcomingBirthday};

/// Default look-ahead for `get_upcoming_birthdays`, in days.
pub const DEFAULT_WINDOW_DAYS: i64 = 7;

/// All contacts, keyed by name and kept in insertion order.
///
/// Replacing a record under an existing name keeps that name's position.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Directory {
    records: Vec<Record>,
}

impl Directory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts the record, or replaces the one with the same name entirely.
    pub fn add_record(&mut self, record: Record) {
        match self.position(record.name().as_str()) {
            Some(idx) => self.records[idx] = record,
            None => self.records.push(record),
        }
    }

    pub fn find(&self, name: &str) -> Option<&Record> {
        self.records.iter().find(|r| r.name().as_str() == name)
    }

    pub fn find_mut(&mut self, name: &str) -> Option<&mut Record> {
        self.records.iter_mut().find(|r| r.name().as_str() == name)
    }

    pub fn records(&self) -> impl Iterator<Item = &Record> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Birthdays falling within `window_days` of today's local date.
    pub fn get_upcoming_birthdays(&self, window_days: i64) -> Vec<UpcomingBirthday> {
        self.upcoming_birthdays_as_of(Local::now().date_naive(), window_days)
    }

    pub fn upcoming_birthdays_as_of(&self, today: NaiveDate, window_days: i64) -> Vec<UpcomingBirthday> {
        birthday_queries::upcoming_birthdays(self.records(), today, window_days)
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.records.iter().position(|r| r.name().as_str() == name)
    }
}

impl FromIterator<Record> for Directory {
    fn from_iter<I: IntoIterator<Item = Record>>(iter: I) -> Self {
        let mut book = Directory::new();
        for record in iter {
            book.add_record(record);
        }
        book
    }
}
