//! Compilation of a [`Query`] into an ordered list of handle steps.
//!
//! Compiling executes nothing. The resulting [`Compiled`] value can be applied
//! to any number of [`Select`] handles, or chained with further steps.
//!
//! Filter trees compile group-wise: a node's own conditions, each `AND`
//! child, the `OR` children taken together as one disjunction, and the `NOT`
//! child negated as a whole are all conjoined.

use super::case::to_snake_case;
use super::descriptor::Query;
use super::filter::{FieldFilter, FilterNode};
use super::predicate::Predicate;
use super::select::{Direction, Select};
use crate::libs::messages::Message;
use crate::msg_debug;

#[derive(Debug, Clone, PartialEq)]
pub enum Step {
    Limit(u64),
    Offset(u64),
    Order { column: String, direction: Direction },
    Filter(Predicate),
}

/// A compiled query: the steps to apply, in order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Compiled {
    steps: Vec<Step>,
}

impl Compiled {
    pub fn identity() -> Self {
        Self::default()
    }

    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    pub fn is_identity(&self) -> bool {
        self.steps.is_empty()
    }

    /// Append `other`'s steps after this one's.
    pub fn then(mut self, other: Compiled) -> Self {
        self.steps.extend(other.steps);
        self
    }

    pub fn apply(&self, select: Select) -> Select {
        self.steps.iter().fold(select, |select, step| match step {
            Step::Limit(limit) => select.limit(*limit),
            Step::Offset(offset) => select.offset(*offset),
            Step::Order { column, direction } => select.order_by(column, *direction),
            Step::Filter(predicate) => select.filter(predicate.clone()),
        })
    }
}

/// Compile `query`. An absent query compiles to the identity.
pub fn compile<F: FieldFilter>(query: Option<&Query<F>>) -> Compiled {
    let Some(query) = query else {
        return Compiled::identity();
    };
    let mut steps = Vec::new();

    if let Some(paginate) = &query.paginate {
        steps.push(Step::Limit(paginate.limit()));
        let offset = paginate.effective_offset();
        if offset > 0 {
            steps.push(Step::Offset(offset));
        }
    }

    for field in &query.asc {
        steps.push(Step::Order { column: to_snake_case(field), direction: Direction::Asc });
    }
    for field in &query.desc {
        steps.push(Step::Order { column: to_snake_case(field), direction: Direction::Desc });
    }

    if let Some(predicate) = query.filter.as_ref().and_then(compile_node) {
        steps.push(Step::Filter(predicate));
    }

    msg_debug!(Message::QueryCompiled(steps.len()));
    Compiled { steps }
}

/// Compile one filter node to a predicate, or `None` when it constrains nothing.
pub fn compile_node<F: FieldFilter>(node: &FilterNode<F>) -> Option<Predicate> {
    let mut parts: Vec<Predicate> = node
        .fields
        .conditions()
        .into_iter()
        .filter_map(|(field, condition)| condition.predicate(&to_snake_case(field)))
        .collect();

    parts.extend(node.and.iter().filter_map(compile_node));

    if let Some(any) = Predicate::any(node.or.iter().filter_map(compile_node).collect()) {
        parts.push(any);
    }

    if let Some(not) = node.not.as_deref().and_then(compile_node) {
        parts.push(not.negate());
    }

    Predicate::all(parts)
}
