use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::db;
use crate::error::{BookError, BookResult};
use crate::model::{Birthday, Directory, Record, ValidatedField};

/// One contact in the JSON interchange file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactJson {
    pub name: String,
    #[serde(default)]
    pub phones: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub birthday: Option<String>,
}

impl From<&Record> for ContactJson {
    fn from(record: &Record) -> Self {
        Self {
            name: record.name().to_string(),
            phones: record.phones().iter().map(|p| p.to_string()).collect(),
            birthday: record.birthday().map(|b| b.to_string()),
        }
    }
}

impl TryFrom<ContactJson> for Record {
    type Error = BookError;

    fn try_from(json: ContactJson) -> BookResult<Record> {
        let mut record = Record::new(&json.name)?;
        for phone in &json.phones {
            record.add_phone(phone)?;
        }
        if let Some(raw) = &json.birthday {
            record.set_birthday(Birthday::parse(raw)?);
        }
        Ok(record)
    }
}

#[derive(Debug, Default, PartialEq, Eq)]
pub struct ImportStats {
    pub contacts: usize,
    pub phones: usize,
    pub birthdays: usize,
}

/// Parses a JSON array of contacts. Every field goes through the same
/// validation as interactive input; the first invalid entry aborts the parse.
pub fn parse_json(json_str: &str) -> BookResult<Directory> {
    let entries: Vec<ContactJson> = serde_json::from_str(json_str)?;
    entries.into_iter().map(Record::try_from).collect()
}

pub fn to_json(book: &Directory) -> BookResult<String> {
    let entries: Vec<ContactJson> = book.records().map(ContactJson::from).collect();
    Ok(serde_json::to_string_pretty(&entries)?)
}

/// Imports a JSON contact list into a new database at `db_path`.
pub fn import_json(json_path: &Path, db_path: &Path) -> BookResult<ImportStats> {
    let json_str = std::fs::read_to_string(json_path)?;
    let book = parse_json(&json_str)?;
    db::save(&book, db_path)?;

    let stats = stats_for(&book);
    info!(?stats, source = %json_path.display(), "imported contacts");
    Ok(stats)
}

/// Writes the database at `db_path` out as a JSON contact list.
pub fn export_json(db_path: &Path, json_path: &Path) -> BookResult<ImportStats> {
    let book = db::load(db_path)?;
    std::fs::write(json_path, to_json(&book)?)?;

    let stats = stats_for(&book);
    info!(?stats, target = %json_path.display(), "exported contacts");
    Ok(stats)
}

fn stats_for(book: &Directory) -> ImportStats {
    ImportStats {
        contacts: book.len(),
        phones: book.records().map(|r| r.phones().len()).sum(),
        birthdays: book.records().filter(|r| r.birthday().is_some()).count(),
    }
}
