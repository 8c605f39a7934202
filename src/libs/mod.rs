//! Core library modules: record types, configuration, errors, messaging and
//! the UI bridge.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use schejzuren::db::{activities::Activities, db::Db};
//! use schejzuren::libs::activity::Activity;
//!
//! let activities = Activities::new(Db::new()?)?;
//! let id = activities.create(&Activity::new("Morning run"))?;
//! # Ok::<(), schejzuren::libs::error::Error>(())
//! ```

pub mod activity;
pub mod bridge;
pub mod config;
pub mod data_storage;
pub mod error;
pub mod messages;
pub mod todo;

use rusqlite::types::Type;
use rusqlite::Row;

/// Read a JSON string-list column. `NULL` and empty text read as no tags.
pub(crate) fn tags_from_column(row: &Row<'_>, column: &str) -> rusqlite::Result<Vec<String>> {
    let raw: Option<String> = row.get(column)?;
    match raw.as_deref() {
        None | Some("") => Ok(Vec::new()),
        Some(text) => serde_json::from_str(text).map_err(|e| {
            let index = row.as_ref().column_index(column).unwrap_or_default();
            rusqlite::Error::FromSqlConversionFailure(index, Type::Text, Box::new(e))
        }),
    }
}

pub(crate) fn tags_to_column(tags: &[String]) -> serde_json::Result<String> {
    serde_json::to_string(tags)
}
