use crate::cli::{take_args, CommandResult};
use crate::model::{Directory, PhoneChange};
use crate::ops::{contact_ops, AddOutcome};

pub fn hello(_args: &[&str], _book: &mut Directory) -> CommandResult {
    Ok("How can I help you?".into())
}

pub fn add(args: &[&str], book: &mut Directory) -> CommandResult {
    let [name, phone] = take_args::<2>("add", args)?;
    match contact_ops::add_contact(book, name, phone)? {
        AddOutcome::Created => Ok(format!("New contact {} added with phone {}.", name, phone)),
        AddOutcome::PhoneAdded => Ok(format!("Added phone {} to {}.", phone, name)),
    }
}

pub fn change(args: &[&str], book: &mut Directory) -> CommandResult {
    let [name, old, new] = take_args::<3>("change", args)?;
    match contact_ops::change_phone(book, name, old, new)? {
        PhoneChange::Changed { old, new } => {
            Ok(format!("Phone number {} changed to {}.", old, new))
        }
        PhoneChange::NotFound => Ok("Old phone number not found.".into()),
    }
}

pub fn phone(args: &[&str], book: &mut Directory) -> CommandResult {
    let [name] = take_args::<1>("phone", args)?;
    let record = contact_ops::ensure_contact(book, name)?;
    Ok(format!("{}'s phones: {}", name, record.phones_joined(", ")))
}

pub fn all(_args: &[&str], book: &mut Directory) -> CommandResult {
    if book.is_empty() {
        return Ok("No contacts in the address book.".into());
    }
    Ok(book
        .records()
        .map(|r| r.to_display_string())
        .collect::<Vec<_>>()
        .join("\n"))
}
