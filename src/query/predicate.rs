//! Column predicates and their SQL rendering.
//!
//! A [`Predicate`] is a small boolean expression tree over single-column
//! comparisons. Values never appear in the rendered SQL: every value becomes
//! a `?` placeholder and is pushed onto the parameter list in order.

use rusqlite::types::Value;

/// Binary comparison operators supported on a single column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Comparison {
    Eq,
    Ne,
    Gt,
    Gte,
    Lt,
    Lte,
}

impl Comparison {
    const fn sql(self) -> &'static str {
        match self {
            Comparison::Eq => "=",
            Comparison::Ne => "<>",
            Comparison::Gt => ">",
            Comparison::Gte => ">=",
            Comparison::Lt => "<",
            Comparison::Lte => "<=",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Predicate {
    Compare { column: String, op: Comparison, value: Value },
    In { column: String, values: Vec<Value>, negated: bool },
    Like { column: String, pattern: String },
    Null { column: String },
    All(Vec<Predicate>),
    Any(Vec<Predicate>),
    Not(Box<Predicate>),
}

impl Predicate {
    pub fn compare(column: &str, op: Comparison, value: Value) -> Self {
        Predicate::Compare { column: column.to_string(), op, value }
    }

    pub fn in_set(column: &str, values: Vec<Value>, negated: bool) -> Self {
        Predicate::In { column: column.to_string(), values, negated }
    }

    pub fn like(column: &str, pattern: impl Into<String>) -> Self {
        Predicate::Like { column: column.to_string(), pattern: pattern.into() }
    }

    pub fn is_null(column: &str) -> Self {
        Predicate::Null { column: column.to_string() }
    }

    /// Conjoin `parts`, flattening nested conjunctions.
    ///
    /// Returns `None` for an empty list and the sole element for a list of one.
    pub fn all(parts: Vec<Predicate>) -> Option<Predicate> {
        let mut flat = Vec::with_capacity(parts.len());
        for part in parts {
            match part {
                Predicate::All(inner) => flat.extend(inner),
                other => flat.push(other),
            }
        }
        match flat.len() {
            0 => None,
            1 => flat.pop(),
            _ => Some(Predicate::All(flat)),
        }
    }

    /// Disjoin `parts`, flattening nested disjunctions.
    pub fn any(parts: Vec<Predicate>) -> Option<Predicate> {
        let mut flat = Vec::with_capacity(parts.len());
        for part in parts {
            match part {
                Predicate::Any(inner) => flat.extend(inner),
                other => flat.push(other),
            }
        }
        match flat.len() {
            0 => None,
            1 => flat.pop(),
            _ => Some(Predicate::Any(flat)),
        }
    }

    pub fn negate(self) -> Predicate {
        match self {
            Predicate::Not(inner) => *inner,
            other => Predicate::Not(Box::new(other)),
        }
    }

    pub fn and(self, other: Predicate) -> Predicate {
        match (self, other) {
            (Predicate::All(mut left), Predicate::All(right)) => {
                left.extend(right);
                Predicate::All(left)
            }
            (Predicate::All(mut left), right) => {
                left.push(right);
                Predicate::All(left)
            }
            (left, Predicate::All(right)) => {
                let mut parts = vec![left];
                parts.extend(right);
                Predicate::All(parts)
            }
            (left, right) => Predicate::All(vec![left, right]),
        }
    }

    /// Render as a SQL boolean expression, appending bound values to `params`.
    pub fn render(&self, sql: &mut String, params: &mut Vec<Value>) {
        match self {
            Predicate::Compare { column, op, value } => {
                sql.push_str(&format!("{} {} ?", quoted(column), op.sql()));
                params.push(value.clone());
            }
            Predicate::In { column, values, negated } => {
                let keyword = if *negated { "NOT IN" } else { "IN" };
                let placeholders = vec!["?"; values.len()].join(", ");
                sql.push_str(&format!("{} {} ({})", quoted(column), keyword, placeholders));
                params.extend(values.iter().cloned());
            }
            Predicate::Like { column, pattern } => {
                sql.push_str(&format!("{} LIKE ?", quoted(column)));
                params.push(Value::Text(pattern.clone()));
            }
            Predicate::Null { column } => sql.push_str(&format!("{} IS NULL", quoted(column))),
            Predicate::All(parts) => render_joined(parts, " AND ", sql, params),
            Predicate::Any(parts) => render_joined(parts, " OR ", sql, params),
            Predicate::Not(inner) => {
                sql.push_str("NOT (");
                inner.render(sql, params);
                sql.push(')');
            }
        }
    }

    /// Render to a standalone `(sql, params)` pair.
    pub fn to_sql(&self) -> (String, Vec<Value>) {
        let mut sql = String::new();
        let mut params = Vec::new();
        self.render(&mut sql, &mut params);
        (sql, params)
    }
}

fn render_joined(parts: &[Predicate], separator: &str, sql: &mut String, params: &mut Vec<Value>) {
    for (i, part) in parts.iter().enumerate() {
        if i > 0 {
            sql.push_str(separator);
        }
        let grouped = matches!(part, Predicate::All(_) | Predicate::Any(_));
        if grouped {
            sql.push('(');
        }
        part.render(sql, params);
        if grouped {
            sql.push(')');
        }
    }
}

/// Quote an identifier for SQLite. Identifiers only ever come from static
/// table definitions.
pub(crate) fn quoted(identifier: &str) -> String {
    format!("\"{}\"", identifier.replace('"', "\"\""))
}
