//! Storage layer on SQLite.
//!
//! A single [`Db`](db::Db) handle is shared by the record services. Each
//! service owns a [`TableSchema`](schema::TableSchema) and ensures it when
//! constructed, so a fresh or older database file is brought up to date
//! without a separate migration step.
//!
//! ## Usage
//!
//! ```rust
//! use schejzuren::db::{activities::Activities, db::Db, todos::Todos};
//! use schejzuren::libs::todo::Todo;
//!
//! let db = Db::open_in_memory()?;
//! let activities = Activities::new(db.clone())?;
//! let todos = Todos::new(db)?;
//!
//! let id = todos.create(&Todo::new("Buy milk"))?;
//! todos.delete(id)?;
//! assert!(todos.list(None)?.is_empty());
//! assert!(activities.list(None)?.is_empty());
//! # Ok::<(), schejzuren::libs::error::Error>(())
//! ```

/// Connection handle and shared statement helpers.
pub mod db;

/// Declarative table definitions and the schema-ensure step.
pub mod schema;

/// Activity records: CRUD plus recurring-day listings.
pub mod activities;

/// Todo records: CRUD with soft deletion.
pub mod todos;
