use chrono::NaiveDate;
use tracing::debug;

use crate::error::{BookError, BookResult};
use crate::model::{Birthday, Directory, Phone, PhoneChange, Record, ValidatedField};

/// Result of `add_contact`: either a new contact or one more phone.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AddOutcome {
    Created,
    PhoneAdded,
}

/// Adds `phone` to the contact called `name`, creating the contact if needed.
/// Nothing is inserted when the phone is invalid.
pub fn add_contact(book: &mut Directory, name: &str, phone: &str) -> BookResult<AddOutcome> {
    if let Some(record) = book.find_mut(name) {
        record.add_phone(phone)?;
        debug!(contact = name, phone, "added phone to existing contact");
        return Ok(AddOutcome::PhoneAdded);
    }

    let mut record = Record::new(name)?;
    record.push_phone(Phone::parse(phone)?);
    book.add_record(record);
    debug!(contact = name, phone, "created contact");
    Ok(AddOutcome::Created)
}

pub fn change_phone(book: &mut Directory, name: &str, old: &str, new: &str) -> BookResult<PhoneChange> {
    let outcome = ensure_contact_mut(book, name)?.change_phone(old, new)?;
    debug!(contact = name, old, new, ?outcome, "change phone");
    Ok(outcome)
}

pub fn set_birthday(book: &mut Directory, name: &str, value: &str) -> BookResult<Birthday> {
    apply_birthday(book, name, || Birthday::parse(value))
}

pub fn set_birthday_as_of(
    book: &mut Directory,
    name: &str,
    value: &str,
    today: NaiveDate,
) -> BookResult<Birthday> {
    apply_birthday(book, name, || Birthday::parse_as_of(value, today))
}

// The contact lookup comes first so an unknown name is reported even when the
// date is also bad.
fn apply_birthday<F>(book: &mut Directory, name: &str, parse: F) -> BookResult<Birthday>
where
    F: FnOnce() -> BookResult<Birthday>,
{
    let record = ensure_contact_mut(book, name)?;
    let birthday = parse()?;
    record.set_birthday(birthday);
    debug!(contact = name, %birthday, "set birthday");
    Ok(birthday)
}

pub fn ensure_contact<'a>(book: &'a Directory, name: &str) -> BookResult<&'a Record> {
    book.find(name).ok_or_else(|| BookError::ContactNotFound {
        name: name.to_string(),
    })
}

pub fn ensure_contact_mut<'a>(book: &'a mut Directory, name: &str) -> BookResult<&'a mut Record> {
    book.find_mut(name).ok_or_else(|| BookError::ContactNotFound {
        name: name.to_string(),
    })
}
