//! Filter trees and the per-record field tables they are built from.

use super::condition::FieldCondition;
use serde::{Deserialize, Serialize};

/// The closed set of filterable fields of one record kind.
///
/// Implemented through [`filter_fields!`](crate::filter_fields), which
/// generates a struct with one optional condition per field.
pub trait FieldFilter {
    /// The set conditions of this leaf, paired with their wire field names.
    fn conditions(&self) -> Vec<(&'static str, FieldCondition<'_>)>;
}

/// One node of a filter tree.
///
/// Leaf conditions and the `AND` / `OR` / `NOT` combinators live side by
/// side, so a single node may carry both.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FilterNode<F> {
    #[serde(flatten)]
    pub fields: F,
    #[serde(rename = "AND", default, skip_serializing_if = "Vec::is_empty")]
    pub and: Vec<FilterNode<F>>,
    #[serde(rename = "OR", default, skip_serializing_if = "Vec::is_empty")]
    pub or: Vec<FilterNode<F>>,
    #[serde(rename = "NOT", default, skip_serializing_if = "Option::is_none")]
    pub not: Option<Box<FilterNode<F>>>,
}

impl<F: Default> Default for FilterNode<F> {
    fn default() -> Self {
        Self { fields: F::default(), and: Vec::new(), or: Vec::new(), not: None }
    }
}

impl<F: Default> FilterNode<F> {
    pub fn leaf(fields: F) -> Self {
        Self { fields, ..Self::default() }
    }

    pub fn all(children: Vec<FilterNode<F>>) -> Self {
        Self { and: children, ..Self::default() }
    }

    pub fn any(children: Vec<FilterNode<F>>) -> Self {
        Self { or: children, ..Self::default() }
    }

    pub fn negate(child: FilterNode<F>) -> Self {
        Self { not: Some(Box::new(child)), ..Self::default() }
    }
}

/// Declare the filterable fields of a record kind.
///
/// Each entry names the struct field, its wire (JSON) name and its value
/// kind: `Text`, `Integer`, `Unsigned` or `Boolean`. The column name is
/// derived from the wire name with [`to_snake_case`](crate::query::to_snake_case).
///
/// ```rust
/// schejzuren::filter_fields! {
///     pub struct NoteFilter {
///         id("id"): Unsigned,
///         created_at("createdAt"): Text,
///     }
/// }
///
/// assert_eq!(NoteFilter::FIELDS, &["id", "createdAt"]);
/// ```
#[macro_export]
macro_rules! filter_fields {
    (@type Text) => { String };
    (@type Integer) => { i64 };
    (@type Unsigned) => { u64 };
    (@type Boolean) => { bool };
    (
        $(#[$meta:meta])*
        $vis:vis struct $name:ident {
            $( $field:ident ( $wire:literal ) : $kind:ident ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
        $vis struct $name {
            $(
                #[serde(rename = $wire, default, skip_serializing_if = "Option::is_none")]
                pub $field: Option<$crate::query::FilterCondition<$crate::filter_fields!(@type $kind)>>,
            )*
        }

        impl $name {
            /// Wire names of every filterable field, in declaration order.
            pub const FIELDS: &'static [&'static str] = &[$($wire),*];
        }

        impl $crate::query::FieldFilter for $name {
            fn conditions(&self) -> Vec<(&'static str, $crate::query::FieldCondition<'_>)> {
                let mut out = Vec::new();
                $(
                    if let Some(condition) = &self.$field {
                        out.push(($wire, $crate::query::FieldCondition::$kind(condition)));
                    }
                )*
                out
            }
        }
    };
}
