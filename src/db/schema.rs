use rusqlite::Connection;

use crate::error::BookResult;

/// Initialize the database schema. Creates all tables if they don't exist.
///
/// `position` columns record insertion order, which is the order the book
/// lists contacts and phones in.
pub fn initialize(conn: &Connection) -> BookResult<()> {
    conn.execute_batch(
        "
        CREATE TABLE IF NOT EXISTS contacts (
            position INTEGER PRIMARY KEY NOT NULL,
            name TEXT NOT NULL UNIQUE,
            birthday TEXT
        );

        CREATE TABLE IF NOT EXISTS phones (
            contact_name TEXT NOT NULL REFERENCES contacts(name) ON DELETE CASCADE,
            position INTEGER NOT NULL,
            number TEXT NOT NULL,
            PRIMARY KEY (contact_name, position)
        );

        PRAGMA foreign_keys = ON;
        ",
    )?;
    Ok(())
}

/// Create an in-memory connection for testing. Available in test builds.
pub fn test_connection() -> Connection {
    let conn = Connection::open_in_memory().unwrap();
    initialize(&conn).unwrap();
    conn
}
