//! # Schejzuren - activity and todo tracker backend
//!
//! Stores activities and todos in SQLite and answers the desktop UI's calls.
//!
//! ## Features
//!
//! - **Query Compiler**: turns the UI's JSON list requests (filter tree,
//!   sorting, pagination) into parameterised SQL
//! - **Record Services**: create, read, update and delete for activities and
//!   todos, with schema upkeep on startup
//! - **Bridge**: the UI's method calls over JSON lines
//!
//! ## Usage
//!
//! ```rust
//! use schejzuren::db::{activities::Activities, db::Db};
//! use schejzuren::libs::activity::{Activity, ActivityQuery};
//! use schejzuren::query::Paginate;
//!
//! let activities = Activities::new(Db::open_in_memory()?)?;
//! activities.create(&Activity::new("Stretch"))?;
//!
//! let query: ActivityQuery = serde_json::from_str(r#"{"where":{"title":{"contains":"tre"}}}"#)?;
//! assert_eq!(activities.list(Some(&query))?.len(), 1);
//!
//! let first_page = ActivityQuery::new().descending("createdAt").paginate(Paginate::page(1, 20));
//! assert_eq!(activities.list(Some(&first_page))?.len(), 1);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod commands;
pub mod db;
pub mod libs;
pub mod query;
