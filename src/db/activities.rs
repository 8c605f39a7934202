//! Activity storage.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use schejzuren::db::{activities::Activities, db::Db};
//! use schejzuren::libs::activity::{Activity, ActivityPatch, Status};
//!
//! let activities = Activities::new(Db::new()?)?;
//! let id = activities.create(&Activity::new("Water the plants"))?;
//! activities.update(id, &ActivityPatch { status: Some(Status::Done), ..Default::default() })?;
//! let today = activities.list_today()?;
//! # Ok::<(), schejzuren::libs::error::Error>(())
//! ```

use super::db::{self, Db};
use super::schema::{Column, TableSchema};
use crate::libs::activity::{Activity, ActivityFilter, ActivityPatch, ActivityQuery};
use crate::libs::error::{Error, Result};
use crate::libs::messages::Message;
use crate::libs::tags_to_column;
use crate::msg_debug;
use crate::query::{compile, Comparison, FilterCondition, FilterNode, Predicate, Select};
use chrono::{Datelike, Local, Weekday};
use rusqlite::params;
use rusqlite::types::Value;

const KIND: &str = "Activity";

pub const ACTIVITIES: TableSchema = TableSchema {
    name: "activities",
    columns: &[
        Column::new("id", "INTEGER PRIMARY KEY AUTOINCREMENT"),
        Column::new("title", "TEXT NOT NULL DEFAULT ''"),
        Column::new("description", "TEXT"),
        Column::new("tags", "TEXT NOT NULL DEFAULT '[]'"),
        Column::new("color", "TEXT"),
        Column::new("status", "TEXT NOT NULL DEFAULT 'todo'"),
        Column::new("priority", "TEXT NOT NULL DEFAULT 'medium'"),
        Column::new("starts_at", "TEXT"),
        Column::new("due", "TEXT"),
        Column::new("updated_at", "TEXT"),
        Column::new("created_at", "TEXT"),
        Column::new("completed_at", "TEXT"),
        Column::new("is_recurring", "INTEGER NOT NULL DEFAULT 0"),
        Column::new("recurrence_rule", "TEXT"),
    ],
};

const INSERT_ACTIVITY: &str = "INSERT INTO activities (
    title, description, tags, color, status, priority, starts_at, due,
    updated_at, created_at, completed_at, is_recurring, recurrence_rule
) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13)";
const DELETE_ACTIVITY: &str = "DELETE FROM activities WHERE id = ?1";

/// Recurrence rule marker matching every day of the week.
pub const EVERYDAY: &str = "everyday";

pub struct Activities {
    db: Db,
}

impl Activities {
    /// Ensure the table and return the service.
    pub fn new(db: Db) -> Result<Self> {
        db.ensure(&ACTIVITIES)?;
        Ok(Self { db })
    }

    fn select() -> Select {
        Select::new(ACTIVITIES.name, ACTIVITIES.column_names())
    }

    /// Activities matching `query`; everything when it is absent.
    pub fn list(&self, query: Option<&ActivityQuery>) -> Result<Vec<Activity>> {
        let select = compile(query).apply(Self::select());
        let activities = self.db.fetch(&select, Activity::from_row)?;
        msg_debug!(Message::RecordsListed(KIND.to_string(), activities.len()));
        Ok(activities)
    }

    pub fn get(&self, id: i64) -> Result<Activity> {
        let select = Self::select()
            .filter(Predicate::compare("id", Comparison::Eq, Value::Integer(id)))
            .limit(1);
        self.db.fetch(&select, Activity::from_row)?.pop().ok_or_else(|| {
            msg_debug!(Message::RecordNotFound(KIND.to_string(), id));
            Error::NotFound { kind: KIND, id }
        })
    }

    /// Insert `activity` and return the id storage assigned. Any id and
    /// timestamps carried by the record are ignored.
    pub fn create(&self, activity: &Activity) -> Result<i64> {
        let now = db::timestamp();
        let tags = tags_to_column(&activity.tags)?;
        let conn = self.db.lock();
        conn.execute(
            INSERT_ACTIVITY,
            params![
                activity.title,
                activity.description,
                tags,
                activity.color,
                activity.status,
                activity.priority,
                activity.starts_at,
                activity.due,
                now,
                now,
                activity.completed_at,
                activity.is_recurring,
                activity.recurrence_rule,
            ],
        )?;
        let id = conn.last_insert_rowid();
        msg_debug!(Message::RecordCreated(KIND.to_string(), id));
        Ok(id)
    }

    /// Apply the fields set in `patch`. Fails with `NotFound` when `id` does
    /// not exist; an empty patch changes nothing.
    pub fn update(&self, id: i64, patch: &ActivityPatch) -> Result<()> {
        let mut changes = changes(patch)?;
        let conn = self.db.lock();
        if !db::row_exists(&conn, ACTIVITIES.name, id, None)? {
            msg_debug!(Message::RecordNotFound(KIND.to_string(), id));
            return Err(Error::NotFound { kind: KIND, id });
        }
        if changes.is_empty() {
            msg_debug!(Message::RecordUpdateEmptyPatch(KIND.to_string(), id));
            return Ok(());
        }
        changes.push(("updated_at", Value::Text(db::timestamp())));
        db::update_columns(&conn, ACTIVITIES.name, id, changes)?;
        msg_debug!(Message::RecordUpdated(KIND.to_string(), id));
        Ok(())
    }

    /// Remove the activity. Deleting a missing id is not an error.
    pub fn delete(&self, id: i64) -> Result<()> {
        let affected = self.db.lock().execute(DELETE_ACTIVITY, params![id])?;
        if affected > 0 {
            msg_debug!(Message::RecordDeleted(KIND.to_string(), id));
        }
        Ok(())
    }

    /// Activities whose recurrence rule mentions `everyday` or the weekday's
    /// lowercase name.
    pub fn list_for_weekday(&self, weekday: Weekday) -> Result<Vec<Activity>> {
        let rule = |needle: &str| {
            FilterNode::leaf(ActivityFilter {
                recurrence_rule: Some(FilterCondition::containing(needle)),
                ..Default::default()
            })
        };
        let query = ActivityQuery::new().filter(FilterNode::any(vec![rule(EVERYDAY), rule(weekday_name(weekday))]));
        self.list(Some(&query))
    }

    pub fn list_today(&self) -> Result<Vec<Activity>> {
        self.list_for_weekday(Local::now().weekday())
    }
}

fn changes(patch: &ActivityPatch) -> Result<Vec<(&'static str, Value)>> {
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
    if let Some(status) = patch.status {
        changes.push(("status", Value::from(status.as_str().to_string())));
    }
    if let Some(priority) = patch.priority {
        changes.push(("priority", Value::from(priority.as_str().to_string())));
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

/// Lowercase English name, as used in recurrence rules.
pub fn weekday_name(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Mon => "monday",
        Weekday::Tue => "tuesday",
        Weekday::Wed => "wednesday",
        Weekday::Thu => "thursday",
        Weekday::Fri => "friday",
        Weekday::Sat => "saturday",
        Weekday::Sun => "sunday",
    }
}
