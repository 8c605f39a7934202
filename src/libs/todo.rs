//! The Todo record.
//!
//! Todos evolve independently of activities: status and priority are free
//! strings, and deletion is soft (`deleted_at`). The identifier and the
//! deletion marker keep their base-model wire names, `ID` and `DeletedAt`.

use rusqlite::Row;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Todo {
    #[serde(rename = "ID", alias = "id", default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub color: Option<String>,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub priority: String,
    #[serde(default)]
    pub starts_at: Option<String>,
    #[serde(default)]
    pub due: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub completed_at: Option<String>,
    #[serde(default)]
    pub is_recurring: bool,
    #[serde(default)]
    pub recurrence_rule: Option<String>,
    #[serde(rename = "DeletedAt", default, skip_serializing_if = "Option::is_none")]
    pub deleted_at: Option<String>,
}

impl Todo {
    pub fn new(title: &str) -> Self {
        Todo {
            title: title.to_string(),
            ..Default::default()
        }
    }

    pub(crate) fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(Todo {
            id: row.get("id")?,
            title: row.get("title")?,
            description: row.get("description")?,
            tags: super::tags_from_column(row, "tags")?,
            color: row.get("color")?,
            status: row.get("status")?,
            priority: row.get("priority")?,
            starts_at: row.get("starts_at")?,
            due: row.get("due")?,
            updated_at: row.get("updated_at")?,
            created_at: row.get("created_at")?,
            completed_at: row.get("completed_at")?,
            is_recurring: row.get("is_recurring")?,
            recurrence_rule: row.get("recurrence_rule")?,
            deleted_at: row.get("deleted_at")?,
        })
    }
}

/// Partial update for a [`Todo`]. Only `Some` fields are written.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TodoPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub starts_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub due: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completed_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_recurring: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recurrence_rule: Option<String>,
}

crate::filter_fields! {
    /// Filterable fields of a [`Todo`].
    pub struct TodoFilter {
        id("ID"): Unsigned,
        title("title"): Text,
        description("description"): Text,
        color("color"): Text,
        status("status"): Text,
        priority("priority"): Text,
        starts_at("startsAt"): Text,
        due("due"): Text,
        updated_at("updatedAt"): Text,
        created_at("createdAt"): Text,
        completed_at("completedAt"): Text,
        is_recurring("isRecurring"): Boolean,
        recurrence_rule("recurrenceRule"): Text,
    }
}

pub type TodoQuery = crate::query::Query<TodoFilter>;
