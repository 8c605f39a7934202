//! Idempotent table schemas.
//!
//! Each record kind declares its table as a [`TableSchema`]. Ensuring it
//! creates the table when missing and adds any column an older database
//! lacks, inside one transaction. Columns are never dropped or altered.

use crate::libs::error::{Error, Result};
use crate::libs::messages::Message;
use crate::{msg_debug, msg_error};
use rusqlite::Connection;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Column {
    pub name: &'static str,
    /// Type and constraints, as written after the name in `CREATE TABLE`.
    pub definition: &'static str,
}

impl Column {
    pub const fn new(name: &'static str, definition: &'static str) -> Self {
        Self { name, definition }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableSchema {
    pub name: &'static str,
    pub columns: &'static [Column],
}

impl TableSchema {
    pub fn column_names(&self) -> Vec<&'static str> {
        self.columns.iter().map(|c| c.name).collect()
    }

    fn create_sql(&self) -> String {
        let columns = self
            .columns
            .iter()
            .map(|c| format!("\"{}\" {}", c.name, c.definition))
            .collect::<Vec<_>>()
            .join(",\n    ");
        format!("CREATE TABLE IF NOT EXISTS \"{}\" (\n    {}\n)", self.name, columns)
    }

    /// Create the table if missing and add absent columns.
    pub fn ensure(&self, conn: &mut Connection) -> Result<()> {
        self.ensure_inner(conn).map_err(|source| {
            msg_error!(Message::SchemaEnsureFailed(self.name.to_string(), source.to_string()));
            Error::Schema { table: self.name, source }
        })?;
        msg_debug!(Message::SchemaEnsured(self.name.to_string()));
        Ok(())
    }

    fn ensure_inner(&self, conn: &mut Connection) -> rusqlite::Result<()> {
        let tx = conn.transaction()?;
        tx.execute(&self.create_sql(), [])?;

        let existing: Vec<String> = {
            let mut stmt = tx.prepare(&format!("PRAGMA table_info(\"{}\")", self.name))?;
            let names = stmt.query_map([], |row| row.get::<_, String>("name"))?;
            names.collect::<rusqlite::Result<_>>()?
        };

        for column in self.columns.iter().filter(|c| !existing.iter().any(|e| e == c.name)) {
            tx.execute(
                &format!("ALTER TABLE \"{}\" ADD COLUMN \"{}\" {}", self.name, column.name, column.definition),
                [],
            )?;
            msg_debug!(Message::SchemaColumnAdded(self.name.to_string(), column.name.to_string()));
        }

        tx.commit()
    }
}
