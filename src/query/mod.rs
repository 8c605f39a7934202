//! Declarative filter, sort and pagination queries over a single record table.
//!
//! The UI sends a [`Query`] describing what it wants: sort fields, an optional
//! page, and a nested `AND` / `OR` / `NOT` tree of per-field conditions. The
//! compiler turns that into a [`Compiled`] list of steps that is later applied
//! to a [`Select`] handle for the record's table.
//!
//! ## Usage
//!
//! ```rust
//! use schejzuren::query::{compile, FilterCondition, FilterNode, Paginate, Query, Select};
//!
//! schejzuren::filter_fields! {
//!     pub struct ItemFilter {
//!         title("title"): Text,
//!         done("isDone"): Boolean,
//!     }
//! }
//!
//! let query = Query::<ItemFilter>::new()
//!     .descending("title")
//!     .paginate(Paginate::page(2, 20))
//!     .filter(FilterNode::leaf(ItemFilter {
//!         done: Some(FilterCondition::equal(false)),
//!         ..Default::default()
//!     }));
//!
//! let select = compile(Some(&query)).apply(Select::new("items", vec!["id", "title", "is_done"]));
//! let (sql, params) = select.to_sql();
//! assert_eq!(
//!     sql,
//!     "SELECT \"id\", \"title\", \"is_done\" FROM \"items\" WHERE \"is_done\" = ? ORDER BY \"title\" DESC LIMIT 20 OFFSET 20"
//! );
//! assert_eq!(params.len(), 1);
//! ```
//!
//! Unknown sort fields are ignored when the steps are applied. Filter fields
//! are closed at compile time by the record's [`filter_fields!`](crate::filter_fields)
//! table, so unknown `where` keys never get past deserialisation.

mod case;
mod compile;
mod condition;
mod descriptor;
mod filter;
mod predicate;
mod select;

pub use case::to_snake_case;
pub use compile::{compile, compile_node, Compiled, Step};
pub use condition::{FieldCondition, FilterCondition, SqlScalar};
pub use descriptor::{Paginate, Query, DEFAULT_PAGE_SIZE};
pub use filter::{FieldFilter, FilterNode};
pub use predicate::{Comparison, Predicate};
pub use select::{Direction, Select};
