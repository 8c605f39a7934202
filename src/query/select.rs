//! The storage handle compiled queries are applied to.

use super::predicate::{quoted, Predicate};
use crate::libs::messages::Message;
use crate::msg_warning;
use rusqlite::types::Value;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Asc,
    Desc,
}

impl Direction {
    const fn sql(self) -> &'static str {
        match self {
            Direction::Asc => "ASC",
            Direction::Desc => "DESC",
        }
    }
}

/// A `SELECT` over one table, built up clause by clause.
///
/// Ordering only accepts the table's own columns; anything else is dropped
/// with a warning so request text never reaches the SQL verbatim.
#[derive(Debug, Clone, PartialEq)]
pub struct Select {
    table: &'static str,
    columns: Vec<&'static str>,
    predicate: Option<Predicate>,
    order: Vec<(String, Direction)>,
    limit: Option<u64>,
    offset: Option<u64>,
}

impl Select {
    pub fn new(table: &'static str, columns: Vec<&'static str>) -> Self {
        Self { table, columns, predicate: None, order: Vec::new(), limit: None, offset: None }
    }

    pub fn limit(mut self, limit: u64) -> Self {
        self.limit = Some(limit);
        self
    }

    pub fn offset(mut self, offset: u64) -> Self {
        self.offset = Some(offset);
        self
    }

    pub fn order_by(mut self, column: &str, direction: Direction) -> Self {
        match self.columns.iter().find(|c| **c == column) {
            Some(known) => self.order.push((known.to_string(), direction)),
            None => msg_warning!(Message::UnknownSortField(self.table.to_string(), column.to_string())),
        }
        self
    }

    /// Conjoin `predicate` with whatever has been applied so far.
    pub fn filter(mut self, predicate: Predicate) -> Self {
        self.predicate = Some(match self.predicate.take() {
            Some(existing) => existing.and(predicate),
            None => predicate,
        });
        self
    }

    pub fn ordering(&self) -> &[(String, Direction)] {
        &self.order
    }

    pub fn limit_value(&self) -> Option<u64> {
        self.limit
    }

    pub fn offset_value(&self) -> Option<u64> {
        self.offset
    }

    /// Render to parameterised SQL.
    ///
    /// Without an explicit ordering rows come back by `id` so pages are stable.
    pub fn to_sql(&self) -> (String, Vec<Value>) {
        let columns = self.columns.iter().map(|c| quoted(c)).collect::<Vec<_>>().join(", ");
        let mut sql = format!("SELECT {} FROM {}", columns, quoted(self.table));
        let mut params = Vec::new();

        if let Some(predicate) = &self.predicate {
            sql.push_str(" WHERE ");
            predicate.render(&mut sql, &mut params);
        }

        if !self.order.is_empty() {
            let order = self
                .order
                .iter()
                .map(|(column, direction)| format!("{} {}", quoted(column), direction.sql()))
                .collect::<Vec<_>>()
                .join(", ");
            sql.push_str(&format!(" ORDER BY {}", order));
        } else if self.columns.contains(&"id") {
            sql.push_str(" ORDER BY \"id\" ASC");
        }

        match (self.limit, self.offset) {
            (Some(limit), Some(offset)) => sql.push_str(&format!(" LIMIT {} OFFSET {}", limit, offset)),
            (Some(limit), None) => sql.push_str(&format!(" LIMIT {}", limit)),
            (None, Some(offset)) => sql.push_str(&format!(" LIMIT -1 OFFSET {}", offset)),
            (None, None) => {}
        }

        (sql, params)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::predicate::Comparison;

    fn items() -> Select {
        Select::new("items", vec!["id", "title", "status"])
    }

    #[test]
    fn bare_select_orders_by_id() {
        let (sql, params) = items().to_sql();
        assert_eq!(sql, "SELECT \"id\", \"title\", \"status\" FROM \"items\" ORDER BY \"id\" ASC");
        assert!(params.is_empty());
    }

    #[test]
    fn unknown_order_column_is_dropped() {
        let select = items().order_by("title; DROP TABLE items", Direction::Asc).order_by("status", Direction::Desc);
        assert_eq!(select.ordering(), &[("status".to_string(), Direction::Desc)]);
        let (sql, _) = select.to_sql();
        assert!(!sql.contains("DROP"));
        assert!(sql.ends_with("ORDER BY \"status\" DESC"));
    }

    #[test]
    fn filters_are_conjoined() {
        let select = items()
            .filter(Predicate::compare("title", Comparison::Eq, Value::Text("a".into())))
            .filter(Predicate::compare("status", Comparison::Ne, Value::Text("done".into())));
        let (sql, params) = select.to_sql();
        assert!(sql.contains("WHERE \"title\" = ? AND \"status\" <> ?"));
        assert_eq!(params.len(), 2);
    }

    #[test]
    fn offset_without_limit_uses_unbounded_limit() {
        let (sql, _) = items().offset(5).to_sql();
        assert!(sql.ends_with("LIMIT -1 OFFSET 5"));
        let (sql, _) = items().limit(10).offset(20).to_sql();
        assert!(sql.ends_with("LIMIT 10 OFFSET 20"));
    }
}
