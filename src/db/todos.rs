//! Todo storage with soft deletion.
//!
//! `delete` only stamps `deleted_at`. Soft-deleted rows are invisible to
//! `list`, `get` and `update`; `purge` removes a row for good.

use super::db::{self, Db};
use super::schema::{Column, TableSchema};
use crate::libs::error::{Error, Result};
use crate::libs::messages::Message;
use crate::libs::tags_to_column;
use crate::libs::todo::{Todo, TodoPatch, TodoQuery};
use crate::msg_debug;
use crate::query::{compile, Comparison, Predicate, Select};
use rusqlite::params;
use rusqlite::types::Value;

const KIND: &str = "Todo";

pub const TODOS: TableSchema = TableSchema {
    name: "todos",
    columns: &[
        Column::new("id", "INTEGER PRIMARY KEY AUTOINCREMENT"),
        Column::new("title", "TEXT NOT NULL DEFAULT ''"),
        Column::new("description", "TEXT"),
        Column::new("tags", "TEXT NOT NULL DEFAULT '[]'"),
        Column::new("color", "TEXT"),
        Column::new("status", "TEXT NOT NULL DEFAULT ''"),
        Column::new("priority", "TEXT NOT NULL DEFAULT ''"),
        Column::new("starts_at", "TEXT"),
        Column::new("due", "TEXT"),
        Column::new("updated_at", "TEXT"),
        Column::new("created_at", "TEXT"),
        Column::new("completed_at", "TEXT"),
        Column::new("is_recurring", "INTEGER NOT NULL DEFAULT 0"),
        Column::new("recurrence_rule", "TEXT"),
        Column::new("deleted_at", "TEXT"),
    ],
};

const INSERT_TODO: &str = "INSERT INTO todos (
    title, description, tags, color, status, priority, starts_at, due,
    updated_at, created_at, completed_at, is_recurring, recurrence_rule
) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13)";
const SOFT_DELETE_TODO: &str = "UPDATE todos SET deleted_at = ?2 WHERE id = ?1 AND deleted_at IS NULL";
const PURGE_TODO: &str = "DELETE FROM todos WHERE id = ?1";
const LIVE: &str = "\"deleted_at\" IS NULL";

pub struct Todos {
    db: Db,
}

impl Todos {
    pub fn new(db: Db) -> Result<Self> {
        db.ensure(&TODOS)?;
        Ok(Self { db })
    }

    fn select() -> Select {
        Select::new(TODOS.name, TODOS.column_names()).filter(Predicate::is_null("deleted_at"))
    }

    pub fn list(&self, query: Option<&TodoQuery>) -> Result<Vec<Todo>> {
        let select = compile(query).apply(Self::select());
        let todos = self.db.fetch(&select, Todo::from_row)?;
        msg_debug!(Message::RecordsListed(KIND.to_string(), todos.len()));
        Ok(todos)
    }

    pub fn get(&self, id: i64) -> Result<Todo> {
        let select = Self::select()
            .filter(Predicate::compare("id", Comparison::Eq, Value::Integer(id)))
            .limit(1);
        self.db.fetch(&select, Todo::from_row)?.pop().ok_or_else(|| {
            msg_debug!(Message::RecordNotFound(KIND.to_string(), id));
            Error::NotFound { kind: KIND, id }
        })
    }

    pub fn create(&self, todo: &Todo) -> Result<i64> {
        let now = db::timestamp();
        let tags = tags_to_column(&todo.tags)?;
        let conn = self.db.lock();
        conn.execute(
            INSERT_TODO,
            params![
                todo.title,
                todo.description,
                tags,
                todo.color,
                todo.status,
                todo.priority,
                todo.starts_at,
                todo.due,
                now,
                now,
                todo.completed_at,
                todo.is_recurring,
                todo.recurrence_rule,
            ],
        )?;
        let id = conn.last_insert_rowid();
        msg_debug!(Message::RecordCreated(KIND.to_string(), id));
        Ok(id)
    }

    /// Apply the fields set in `patch` to a live todo.
    pub fn update(&self, id: i64, patch: &TodoPatch) -> Result<()> {
        let mut changes = changes(patch)?;
        let conn = self.db.lock();
        if !db::row_exists(&conn, TODOS.name, id, Some(LIVE))? {
            msg_debug!(Message::RecordNotFound(KIND.to_string(), id));
            return Err(Error::NotFound { kind: KIND, id });
        }
        if changes.is_empty() {
            msg_debug!(Message::RecordUpdateEmptyPatch(KIND.to_string(), id));
            return Ok(());
        }
        changes.push(("updated_at", Value::Text(db::timestamp())));
        db::update_columns(&conn, TODOS.name, id, changes)?;
        msg_debug!(Message::RecordUpdated(KIND.to_string(), id));
        Ok(())
    }

    /// Soft-delete. Missing and already deleted ids are not an error.
    pub fn delete(&self, id: i64) -> Result<()> {
        let affected = self.db.lock().execute(SOFT_DELETE_TODO, params![id, db::timestamp()])?;
        if affected > 0 {
            msg_debug!(Message::RecordSoftDeleted(KIND.to_string(), id));
        }
        Ok(())
    }

    /// Remove the row physically, deleted or not.
    pub fn purge(&self, id: i64) -> Result<()> {
        let affected = self.db.lock().execute(PURGE_TODO, params![id])?;
        if affected > 0 {
            msg_debug!(Message::RecordPurged(KIND.to_string(), id));
        }
        Ok(())
    }
}

fn changes(patch: &TodoPatch) -> Result<Vec<(&'static str, Value)>> {
    let mut changes = Vec::new();
    if let Some(title) = &patch.title {
        changes.push(("title", Value::from(title.clone())));
    }
    if let Some(description) = &patch.description {
        changes.push(("description", Value::from(description.clone())));
    }
    if let Some(tags) = &patch.tags {
        changes.push(("tags", Value::from(tags_to_column(tags)?)));
    }
    if let Some(color) = &patch.color {
        changes.push(("color", Value::from(color.clone())));
    }
    if let Some(status) = &patch.status {
        changes.push(("status", Value::from(status.clone())));
    }
    if let Some(priority) = &patch.priority {
        changes.push(("priority", Value::from(priority.clone())));
    }
    if let Some(starts_at) = &patch.starts_at {
        changes.push(("starts_at", Value::from(starts_at.clone())));
    }
    if let Some(due) = &patch.due {
        changes.push(("due", Value::from(due.clone())));
    }
    if let Some(completed_at) = &patch.completed_at {
        changes.push(("completed_at", Value::from(completed_at.clone())));
    }
    if let Some(is_recurring) = patch.is_recurring {
        changes.push(("is_recurring", Value::from(is_recurring)));
    }
    if let Some(recurrence_rule) = &patch.recurrence_rule {
        changes.push(("recurrence_rule", Value::from(recurrence_rule.clone())));
    }
    Ok(changes)
}
