use chrono::NaiveDate;
use contact_book::error::BookError;
use contact_book::model::*;
use contact_book::ops::*;

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 6, 10).unwrap()
}

// ==========================================================================
// CONTACT OPS TESTS
// ==========================================================================

#[test]
fn add_contact_creates_then_appends() {
    let mut book = Directory::new();
    assert_eq!(
        contact_ops::add_contact(&mut book, "Ann", "1111111111").unwrap(),
        AddOutcome::Created
    );
    assert_eq!(
        contact_ops::add_contact(&mut book, "Ann", "1111111111").unwrap(),
        AddOutcome::PhoneAdded
    );
    assert_eq!(book.find("Ann").unwrap().phones().len(), 2);
}

#[test]
fn add_contact_rejects_empty_name() {
    let mut book = Directory::new();
    let err = contact_ops::add_contact(&mut book, "", "1111111111").unwrap_err();
    assert!(matches!(err, BookError::InvalidName));
    assert!(book.is_empty());
}

#[test]
fn add_contact_bad_phone_on_existing_contact_changes_nothing() {
    let mut book = Directory::new();
    contact_ops::add_contact(&mut book, "Ann", "1111111111").unwrap();
    assert!(contact_ops::add_contact(&mut book, "Ann", "nope").is_err());
    assert_eq!(book.find("Ann").unwrap().phones().len(), 1);
}

#[test]
fn change_phone_on_unknown_contact() {
    let mut book = Directory::new();
    let err = contact_ops::change_phone(&mut book, "Ghost", "1111111111", "2222222222").unwrap_err();
    assert!(matches!(err, BookError::ContactNotFound { ref name } if name == "Ghost"));
}

#[test]
fn set_birthday_checks_contact_before_date() {
    let mut book = Directory::new();
    let err = contact_ops::set_birthday_as_of(&mut book, "Ghost", "bad", today()).unwrap_err();
    assert!(matches!(err, BookError::ContactNotFound { .. }));
}

#[test]
fn set_birthday_rejects_future_dates() {
    let mut book = Directory::new();
    contact_ops::add_contact(&mut book, "Ann", "1111111111").unwrap();
    let err = contact_ops::set_birthday_as_of(&mut book, "Ann", "11.06.2024", today()).unwrap_err();
    assert!(matches!(err, BookError::InvalidDate { .. }));
    assert!(book.find("Ann").unwrap().birthday().is_none());
}

#[test]
fn set_birthday_stores_date() {
    let mut book = Directory::new();
    contact_ops::add_contact(&mut book, "Ann", "1111111111").unwrap();
    let bday = contact_ops::set_birthday_as_of(&mut book, "Ann", "10.06.2024", today()).unwrap();
    assert_eq!(book.find("Ann").unwrap().birthday(), Some(bday));
}

#[test]
fn ensure_contact_finds_existing() {
    let mut book = Directory::new();
    contact_ops::add_contact(&mut book, "Ann", "1111111111").unwrap();
    assert_eq!(contact_ops::ensure_contact(&book, "Ann").unwrap().name().as_str(), "Ann");
}
