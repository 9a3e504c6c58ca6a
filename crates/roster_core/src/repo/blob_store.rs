//! Key-value blob store contract and SQLite implementation.
//!
//! # Responsibility
//! - Persist opaque text blobs under string keys.
//! - Keep SQL details inside the core persistence boundary.
//!
//! # Invariants
//! - A write replaces the whole blob for its key; there are no partial writes.
//! - Keys are non-empty.

use crate::db::DbError;
use rusqlite::{params, Connection, OptionalExtension};
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type BlobResult<T> = Result<T, BlobStoreError>;

#[derive(Debug)]
pub enum BlobStoreError {
    Db(DbError),
    EmptyKey,
    /// Connection was not migrated to a schema that has `kv_blobs`.
    SchemaMissing,
}

impl Display for BlobStoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
            Self::EmptyKey => write!(f, "blob key must not be empty"),
            Self::SchemaMissing => write!(f, "blob table `kv_blobs` is missing"),
        }
    }
}

impl Error for BlobStoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            Self::EmptyKey | Self::SchemaMissing => None,
        }
    }
}

impl From<DbError> for BlobStoreError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for BlobStoreError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Persistence boundary holding one text blob per key.
pub trait BlobStore {
    fn read_blob(&self, key: &str) -> BlobResult<Option<String>>;
    fn write_blob(&self, key: &str, value: &str) -> BlobResult<()>;
}

/// SQLite-backed blob store owning its connection.
pub struct SqliteBlobStore {
    conn: Connection,
}

impl SqliteBlobStore {
    /// Wraps a migrated connection.
    ///
    /// # Errors
    /// - `SchemaMissing` when `kv_blobs` does not exist (connection not opened
    ///   through `open_db`/`open_db_in_memory`).
    pub fn try_new(conn: Connection) -> BlobResult<Self> {
        let exists: i64 = conn.query_row(
            "SELECT EXISTS(
                SELECT 1 FROM sqlite_master WHERE type = 'table' AND name = 'kv_blobs'
            );",
            [],
            |row| row.get(0),
        )?;
        if exists != 1 {
            return Err(BlobStoreError::SchemaMissing);
        }
        Ok(Self { conn })
    }

    pub fn connection(&self) -> &Connection {
        &self.conn
    }
}

impl BlobStore for SqliteBlobStore {
    fn read_blob(&self, key: &str) -> BlobResult<Option<String>> {
        ensure_key(key)?;
        let value = self
            .conn
            .query_row(
                "SELECT value FROM kv_blobs WHERE key = ?1;",
                [key],
                |row| row.get::<_, String>(0),
            )
            .optional()?;
        Ok(value)
    }

    fn write_blob(&self, key: &str, value: &str) -> BlobResult<()> {
        ensure_key(key)?;
        self.conn.execute(
            "INSERT INTO kv_blobs (key, value) VALUES (?1, ?2)
             ON CONFLICT(key) DO UPDATE SET
                value = excluded.value,
                updated_at = (strftime('%s', 'now') * 1000);",
            params![key, value],
        )?;
        Ok(())
    }
}

fn ensure_key(key: &str) -> BlobResult<()> {
    if key.is_empty() {
        return Err(BlobStoreError::EmptyKey);
    }
    Ok(())
}
