#![forbid(unsafe_code)]

mod error;

pub use error::StoreError;

use cpt_core::ids::PostId;
use cpt_core::model::CustomTextEntry;
use rusqlite::{Connection, OptionalExtension, params};
use std::path::{Path, PathBuf};
use std::time::Duration;

const DB_FILE: &str = "custom_post_text.db";

#[derive(Debug)]
pub struct CustomTextStore {
    conn: Connection,
    storage_dir: PathBuf,
}

impl CustomTextStore {
    pub fn open(storage_dir: impl AsRef<Path>) -> Result<Self, StoreError> {
        let storage_dir = storage_dir.as_ref().to_path_buf();
        std::fs::create_dir_all(&storage_dir)?;

        let db_path = storage_dir.join(DB_FILE);
        let conn = Connection::open(db_path)?;
        conn.busy_timeout(Duration::from_secs(5))?;
        conn.execute_batch("PRAGMA journal_mode=WAL; PRAGMA synchronous=NORMAL;")?;

        Ok(Self { conn, storage_dir })
    }

    pub fn storage_dir(&self) -> &Path {
        &self.storage_dir
    }

    // Activation hook target. Safe to call on every activation; entries from
    // a previous activation survive.
    pub fn initialize(&self) -> Result<(), StoreError> {
        self.conn.execute_batch(
            "CREATE TABLE IF NOT EXISTS custom_post_text (
               id INTEGER PRIMARY KEY AUTOINCREMENT,
               post_id INTEGER NOT NULL UNIQUE,
               custom_text TEXT NOT NULL
             );",
        )?;
        Ok(())
    }

    // Uninstall hook target. Drops every entry with the table.
    pub fn teardown(&self) -> Result<(), StoreError> {
        self.conn
            .execute_batch("DROP TABLE IF EXISTS custom_post_text;")?;
        Ok(())
    }

    pub fn put(&mut self, post_id: i64, text: &str) -> Result<(), StoreError> {
        let post_id = canonicalize_post_id(post_id)?;
        // Upsert keyed on post_id: the UNIQUE constraint holds the
        // at-most-one-entry invariant, the surrogate id survives overwrites.
        self.conn.execute(
            "INSERT INTO custom_post_text(post_id, custom_text) VALUES (?1, ?2) \
             ON CONFLICT(post_id) DO UPDATE SET custom_text=excluded.custom_text",
            params![post_id.as_i64(), text],
        )?;
        Ok(())
    }

    pub fn get(&self, post_id: i64) -> Result<Option<String>, StoreError> {
        let post_id = canonicalize_post_id(post_id)?;
        Ok(self
            .conn
            .query_row(
                "SELECT custom_text FROM custom_post_text WHERE post_id=?1",
                params![post_id.as_i64()],
                |row| row.get::<_, String>(0),
            )
            .optional()?)
    }

    pub fn delete(&mut self, post_id: i64) -> Result<(), StoreError> {
        let post_id = canonicalize_post_id(post_id)?;
        self.conn.execute(
            "DELETE FROM custom_post_text WHERE post_id=?1",
            params![post_id.as_i64()],
        )?;
        Ok(())
    }

    pub fn list_all(&self) -> Result<Vec<CustomTextEntry>, StoreError> {
        // No ORDER BY: listing order is unspecified and callers must not
        // depend on it.
        let mut stmt = self
            .conn
            .prepare("SELECT id, post_id, custom_text FROM custom_post_text")?;
        let mut rows = stmt.query([])?;
        let mut out = Vec::new();

        while let Some(row) = rows.next()? {
            out.push(CustomTextEntry {
                id: row.get::<_, i64>(0)?,
                post_id: row.get::<_, i64>(1)?,
                text: row.get::<_, String>(2)?,
            });
        }

        Ok(out)
    }
}

fn canonicalize_post_id(value: i64) -> Result<PostId, StoreError> {
    PostId::try_new(value).map_err(|_| StoreError::InvalidInput("post_id must be positive"))
}
