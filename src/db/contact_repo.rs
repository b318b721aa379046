use rusqlite::{params, Connection};

use crate::error::BookResult;
use crate::model::{Birthday, Directory, Phone, Record, ValidatedField};
use crate::validation::{format_date, parse_date};

pub fn insert(conn: &Connection, position: usize, record: &Record) -> BookResult<()> {
    conn.execute(
        "INSERT INTO contacts (position, name, birthday) VALUES (?1, ?2, ?3)",
        params![
            position as i64,
            record.name().as_str(),
            record.birthday().map(|b| format_date(b.date())),
        ],
    )?;

    for (idx, phone) in record.phones().iter().enumerate() {
        conn.execute(
            "INSERT INTO phones (contact_name, position, number) VALUES (?1, ?2, ?3)",
            params![record.name().as_str(), idx as i64, phone.as_str()],
        )?;
    }
    Ok(())
}

pub fn delete_all(conn: &Connection) -> BookResult<()> {
    conn.execute_batch("DELETE FROM phones; DELETE FROM contacts;")?;
    Ok(())
}

/// Replaces whatever is stored with the contents of `book`.
/// Run it inside a transaction so a failed save leaves the old data intact.
pub fn replace_all(conn: &Connection, book: &Directory) -> BookResult<()> {
    delete_all(conn)?;
    for (position, record) in book.records().enumerate() {
        insert(conn, position, record)?;
    }
    Ok(())
}

pub fn find_all(conn: &Connection) -> BookResult<Directory> {
    let mut stmt = conn.prepare("SELECT name, birthday FROM contacts ORDER BY position")?;
    let rows = stmt
        .query_map([], |row| {
            Ok((row.get::<_, String>(0)?, row.get::<_, Option<String>>(1)?))
        })?
        .collect::<Result<Vec<_>, _>>()?;

    let mut book = Directory::new();
    for (name, birthday) in rows {
        let mut record = Record::new(&name)?;
        for phone in find_phones(conn, &name)? {
            record.push_phone(phone);
        }
        if let Some(raw) = birthday {
            record.set_birthday(Birthday::from_stored(parse_date(&raw)?));
        }
        book.add_record(record);
    }
    Ok(book)
}

pub fn find_phones(conn: &Connection, contact_name: &str) -> BookResult<Vec<Phone>> {
    let mut stmt = conn.prepare(
        "SELECT number FROM phones WHERE contact_name = ?1 ORDER BY position",
    )?;

    let numbers = stmt
        .query_map(params![contact_name], |row| row.get::<_, String>(0))?
        .collect::<Result<Vec<_>, _>>()?;

    numbers.iter().map(|n| Phone::parse(n)).collect()
}
