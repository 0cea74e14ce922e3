//! Session snapshot persistence contract and SQLite implementation.
//!
//! # Responsibility
//! - Persist the session's durable subset (token, principal, overlay) as
//!   one JSON payload row keyed by a fixed store name.
//! - Read the snapshot back exactly once at process start.
//!
//! # Invariants
//! - The derived `authenticated` flag is never part of the persisted
//!   payload; it is recomputed from restored fields on rehydration.
//! - Read paths surface corrupt persisted payloads as typed errors
//!   instead of masking them.

use crate::db::DbError;
use crate::model::auth::ProfileOverlay;
use crate::model::user::User;
use rusqlite::{params, Connection, OptionalExtension};
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Durable storage key for the session store.
pub const SESSION_STORE_NAME: &str = "auth-storage";

pub type StoreResult<T> = Result<T, StoreError>;

/// Persistence error for store snapshot save/load operations.
#[derive(Debug)]
pub enum StoreError {
    Db(DbError),
    Encode(serde_json::Error),
    InvalidData(String),
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
            Self::Encode(err) => write!(f, "failed to encode store payload: {err}"),
            Self::InvalidData(message) => write!(f, "invalid persisted store payload: {message}"),
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            Self::Encode(err) => Some(err),
            Self::InvalidData(_) => None,
        }
    }
}

impl From<DbError> for StoreError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for StoreError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// The persisted subset of session state.
///
/// Field names match the original persisted payload shape, so an existing
/// `auth-storage` document keeps rehydrating after upgrades.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SessionSnapshot {
    pub token: Option<String>,
    #[serde(rename = "user")]
    pub principal: Option<User>,
    #[serde(rename = "profileFields", default)]
    pub overlay: ProfileOverlay,
}

/// Persistence interface for session snapshots.
pub trait SessionRepository {
    fn save(&self, snapshot: &SessionSnapshot) -> StoreResult<()>;
    fn load(&self) -> StoreResult<Option<SessionSnapshot>>;
}

/// SQLite-backed session repository writing one `store_state` row.
pub struct SqliteSessionRepository<'conn> {
    conn: &'conn Connection,
    store_name: &'static str,
}

impl<'conn> SqliteSessionRepository<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self {
            conn,
            store_name: SESSION_STORE_NAME,
        }
    }
}

impl SessionRepository for SqliteSessionRepository<'_> {
    fn save(&self, snapshot: &SessionSnapshot) -> StoreResult<()> {
        let payload = serde_json::to_string(snapshot).map_err(StoreError::Encode)?;

        self.conn.execute(
            "INSERT INTO store_state (name, payload, updated_at)
             VALUES (?1, ?2, strftime('%s', 'now') * 1000)
             ON CONFLICT(name) DO UPDATE SET
                payload = excluded.payload,
                updated_at = excluded.updated_at;",
            params![self.store_name, payload],
        )?;

        Ok(())
    }

    fn load(&self) -> StoreResult<Option<SessionSnapshot>> {
        let payload: Option<String> = self
            .conn
            .query_row(
                "SELECT payload FROM store_state WHERE name = ?1;",
                [self.store_name],
                |row| row.get(0),
            )
            .optional()?;

        let Some(payload) = payload else {
            return Ok(None);
        };

        let snapshot = serde_json::from_str(&payload).map_err(|err| {
            StoreError::InvalidData(format!(
                "payload for `{}` does not parse: {err}",
                self.store_name
            ))
        })?;

        Ok(Some(snapshot))
    }
}
