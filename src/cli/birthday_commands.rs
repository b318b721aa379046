use chrono::NaiveDate;

use crate::cli::{take_args, CommandResult};
use crate::model::{Directory, DEFAULT_WINDOW_DAYS};
use crate::ops::contact_ops;

pub fn add_birthday(args: &[&str], book: &mut Directory) -> CommandResult {
    let [name, date] = take_args::<2>("add-birthday", args)?;
    contact_ops::set_birthday(book, name, date)?;
    Ok(format!("Birthday for {} added successfully.", name))
}

pub fn show_birthday(args: &[&str], book: &mut Directory) -> CommandResult {
    let [name] = take_args::<1>("show-birthday", args)?;
    let record = contact_ops::ensure_contact(book, name)?;
    match record.birthday() {
        Some(bday) => Ok(format!("{}'s birthday is on {}.", name, bday)),
        None => Ok(format!("No birthday set for {}.", name)),
    }
}

pub fn birthdays(book: &Directory, window_days: i64, today: NaiveDate) -> CommandResult {
    let upcoming = book.upcoming_birthdays_as_of(today, window_days);
    if upcoming.is_empty() {
        if window_days == DEFAULT_WINDOW_DAYS {
            return Ok("No upcoming birthdays this week.".into());
        }
        return Ok(format!("No upcoming birthdays in the next {} days.", window_days));
    }

    let mut lines = vec!["Upcoming birthdays:".to_string()];
    lines.extend(
        upcoming
            .iter()
            .map(|entry| format!("{} - {}", entry.name, entry.formatted_date())),
    );
    Ok(lines.join("\n"))
}
