use super::schema::TableSchema;
use crate::libs::config::Config;
use crate::libs::error::Result;
use crate::libs::messages::Message;
use crate::msg_debug;
use crate::query::Select;
use chrono::{SecondsFormat, Utc};
use parking_lot::{Mutex, MutexGuard};
use rusqlite::types::Value;
use rusqlite::{params_from_iter, Connection, OptionalExtension, Row};
use std::path::Path;
use std::sync::Arc;

/// Shared SQLite handle.
///
/// One connection per process, behind a mutex. Clones share the connection,
/// so every service built from the same `Db` sees the same data.
#[derive(Clone)]
pub struct Db {
    conn: Arc<Mutex<Connection>>,
}

impl Db {
    /// Open the database named by the configuration in the data directory.
    pub fn new() -> Result<Db> {
        let config = Config::read()?;
        Self::open(&config.database_path()?)
    }

    pub fn open(path: &Path) -> Result<Db> {
        let conn = Connection::open(path)?;
        msg_debug!(Message::DatabaseOpened(path.display().to_string()));
        Ok(Self::from_connection(conn))
    }

    pub fn open_in_memory() -> Result<Db> {
        let conn = Connection::open_in_memory()?;
        msg_debug!(Message::DatabaseOpened(":memory:".to_string()));
        Ok(Self::from_connection(conn))
    }

    fn from_connection(conn: Connection) -> Db {
        Db { conn: Arc::new(Mutex::new(conn)) }
    }

    /// Hold the connection for the duration of one operation.
    pub fn lock(&self) -> MutexGuard<'_, Connection> {
        self.conn.lock()
    }

    pub fn ensure(&self, schema: &TableSchema) -> Result<()> {
        schema.ensure(&mut self.lock())
    }

    /// Run `select` and map every row.
    pub fn fetch<T, F>(&self, select: &Select, map: F) -> Result<Vec<T>>
    where
        F: FnMut(&Row<'_>) -> rusqlite::Result<T>,
    {
        let (sql, params) = select.to_sql();
        let conn = self.lock();
        let mut stmt = conn.prepare(&sql)?;
        let rows = stmt.query_map(params_from_iter(params.iter()), map)?;
        Ok(rows.collect::<rusqlite::Result<Vec<T>>>()?)
    }
}

/// Server-side timestamp: RFC 3339, UTC, second precision.
pub(crate) fn timestamp() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true)
}

/// Whether `table` holds a row with `id` that also satisfies `extra`, an
/// optional SQL condition without parameters.
pub(crate) fn row_exists(conn: &Connection, table: &str, id: i64, extra: Option<&str>) -> rusqlite::Result<bool> {
    let mut sql = format!("SELECT 1 FROM \"{}\" WHERE \"id\" = ?1", table);
    if let Some(extra) = extra {
        sql.push_str(" AND ");
        sql.push_str(extra);
    }
    conn.query_row(&sql, [id], |_| Ok(())).optional().map(|row| row.is_some())
}

/// `UPDATE` the named columns of one row. Returns the affected row count.
pub(crate) fn update_columns(
    conn: &Connection,
    table: &str,
    id: i64,
    changes: Vec<(&'static str, Value)>,
) -> rusqlite::Result<usize> {
    let assignments = changes
        .iter()
        .enumerate()
        .map(|(i, (column, _))| format!("\"{}\" = ?{}", column, i + 2))
        .collect::<Vec<_>>()
        .join(", ");
    let sql = format!("UPDATE \"{}\" SET {} WHERE \"id\" = ?1", table, assignments);
    let params = std::iter::once(Value::Integer(id)).chain(changes.into_iter().map(|(_, value)| value));
    conn.execute(&sql, params_from_iter(params))
}
