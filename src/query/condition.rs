//! Per-field filter conditions.
//!
//! A [`FilterCondition`] carries every operator the UI may set for one field.
//! Only one of them is honoured per evaluation, chosen by a fixed priority:
//! `eq`, `ne`, `gt`, `gte`, `lt`, `lte`, `in`, `notIn`, `like`, `contains`.

use super::predicate::{Comparison, Predicate};
use rusqlite::types::Value;
use serde::{Deserialize, Serialize};

/// Scalar types that can appear in a filter condition.
///
/// `None` means the value has no SQLite integer form; a condition whose
/// chosen operator carries such a value contributes no predicate.
pub trait SqlScalar: Clone {
    fn to_value(&self) -> Option<Value>;
}

impl SqlScalar for String {
    fn to_value(&self) -> Option<Value> {
        Some(Value::Text(self.clone()))
    }
}

impl SqlScalar for i64 {
    fn to_value(&self) -> Option<Value> {
        Some(Value::Integer(*self))
    }
}

impl SqlScalar for u64 {
    fn to_value(&self) -> Option<Value> {
        i64::try_from(*self).ok().map(Value::Integer)
    }
}

impl SqlScalar for bool {
    fn to_value(&self) -> Option<Value> {
        Some(Value::Integer(i64::from(*self)))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterCondition<T> {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub eq: Option<T>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ne: Option<T>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gt: Option<T>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lt: Option<T>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gte: Option<T>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lte: Option<T>,
    #[serde(rename = "in", default, skip_serializing_if = "Vec::is_empty")]
    pub one_of: Vec<T>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub not_in: Vec<T>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub like: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contains: Option<String>,
}

impl<T> Default for FilterCondition<T> {
    fn default() -> Self {
        Self {
            eq: None,
            ne: None,
            gt: None,
            lt: None,
            gte: None,
            lte: None,
            one_of: Vec::new(),
            not_in: Vec::new(),
            like: None,
            contains: None,
        }
    }
}

impl<T> FilterCondition<T> {
    pub fn equal(value: impl Into<T>) -> Self {
        Self { eq: Some(value.into()), ..Self::default() }
    }

    pub fn not_equal(value: impl Into<T>) -> Self {
        Self { ne: Some(value.into()), ..Self::default() }
    }

    pub fn greater_than(value: impl Into<T>) -> Self {
        Self { gt: Some(value.into()), ..Self::default() }
    }

    pub fn less_than(value: impl Into<T>) -> Self {
        Self { lt: Some(value.into()), ..Self::default() }
    }

    pub fn at_least(value: impl Into<T>) -> Self {
        Self { gte: Some(value.into()), ..Self::default() }
    }

    pub fn at_most(value: impl Into<T>) -> Self {
        Self { lte: Some(value.into()), ..Self::default() }
    }

    pub fn one_of(values: impl IntoIterator<Item = T>) -> Self {
        Self { one_of: values.into_iter().collect(), ..Self::default() }
    }

    pub fn none_of(values: impl IntoIterator<Item = T>) -> Self {
        Self { not_in: values.into_iter().collect(), ..Self::default() }
    }

    pub fn matching(pattern: impl Into<String>) -> Self {
        Self { like: Some(pattern.into()), ..Self::default() }
    }

    pub fn containing(needle: impl Into<String>) -> Self {
        Self { contains: Some(needle.into()), ..Self::default() }
    }

    /// True when no operator slot is set. Empty lists count as unset.
    pub fn is_empty(&self) -> bool {
        self.eq.is_none()
            && self.ne.is_none()
            && self.gt.is_none()
            && self.lt.is_none()
            && self.gte.is_none()
            && self.lte.is_none()
            && self.one_of.is_empty()
            && self.not_in.is_empty()
            && self.like.is_none()
            && self.contains.is_none()
    }
}

impl<T: SqlScalar> FilterCondition<T> {
    /// The single predicate this condition contributes for `column`, if any.
    pub fn predicate(&self, column: &str) -> Option<Predicate> {
        let comparisons = [
            (&self.eq, Comparison::Eq),
            (&self.ne, Comparison::Ne),
            (&self.gt, Comparison::Gt),
            (&self.gte, Comparison::Gte),
            (&self.lt, Comparison::Lt),
            (&self.lte, Comparison::Lte),
        ];
        for (slot, op) in comparisons {
            if let Some(value) = slot {
                return value.to_value().map(|value| Predicate::compare(column, op, value));
            }
        }
        if !self.one_of.is_empty() {
            let values = self.one_of.iter().map(SqlScalar::to_value).collect::<Option<Vec<_>>>()?;
            return Some(Predicate::in_set(column, values, false));
        }
        if !self.not_in.is_empty() {
            let values = self.not_in.iter().map(SqlScalar::to_value).collect::<Option<Vec<_>>>()?;
            return Some(Predicate::in_set(column, values, true));
        }
        if let Some(pattern) = &self.like {
            return Some(Predicate::like(column, pattern.clone()));
        }
        if let Some(needle) = &self.contains {
            return Some(Predicate::like(column, format!("%{}%", needle)));
        }
        None
    }
}

/// A field's condition tagged with its value type.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FieldCondition<'a> {
    Text(&'a FilterCondition<String>),
    Integer(&'a FilterCondition<i64>),
    Unsigned(&'a FilterCondition<u64>),
    Boolean(&'a FilterCondition<bool>),
}

impl FieldCondition<'_> {
    pub fn predicate(&self, column: &str) -> Option<Predicate> {
        match self {
            FieldCondition::Text(c) => c.predicate(column),
            FieldCondition::Integer(c) => c.predicate(column),
            FieldCondition::Unsigned(c) => c.predicate(column),
            FieldCondition::Boolean(c) => c.predicate(column),
        }
    }
}
