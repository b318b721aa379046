//! SQLite persistence for the contact book.
//!
//! The whole book is read at startup and written back at shutdown. A
//! connection lives only for the duration of one `load` or `save` call.

pub mod schema;
pub mod contact_repo;

use std::path::Path;

use rusqlite::Connection;
use tracing::{debug, info};

use crate::error::BookResult;
use crate::model::Directory;

/// Reads the book stored at `path`. A missing file is an empty book.
pub fn load(path: &Path) -> BookResult<Directory> {
    if !path.exists() {
        info!(path = %path.display(), "no saved contact book, starting empty");
        return Ok(Directory::new());
    }

    let conn = Connection::open(path)?;
    schema::initialize(&conn)?;
    let book = load_from(&conn)?;
    info!(path = %path.display(), contacts = book.len(), "loaded contact book");
    Ok(book)
}

/// Writes the whole book to `path`, replacing what was there.
pub fn save(book: &Directory, path: &Path) -> BookResult<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            debug!(dir = %parent.display(), "creating data directory");
            std::fs::create_dir_all(parent)?;
        }
    }

    let mut conn = Connection::open(path)?;
    schema::initialize(&conn)?;
    save_to(&mut conn, book)?;
    info!(path = %path.display(), contacts = book.len(), "saved contact book");
    Ok(())
}

pub fn load_from(conn: &Connection) -> BookResult<Directory> {
    contact_repo::find_all(conn)
}

pub fn save_to(conn: &mut Connection, book: &Directory) -> BookResult<()> {
    let tx = conn.transaction()?;
    contact_repo::replace_all(&tx, book)?;
    tx.commit()?;
    Ok(())
}
