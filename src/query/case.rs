//! Naming convention translation between wire field names and SQL columns.
//!
//! The UI speaks camelCase (`recurrenceRule`), while columns are snake_case
//! (`recurrence_rule`). Boundaries are only recognised at lowercase→uppercase
//! transitions, so runs of capitals such as `ID` stay in one piece.

/// Convert a camelCase or PascalCase identifier to snake_case.
///
/// ```rust
/// use schejzuren::query::to_snake_case;
///
/// assert_eq!(to_snake_case("RecurrenceRule"), "recurrence_rule");
/// assert_eq!(to_snake_case("startsAt"), "starts_at");
/// assert_eq!(to_snake_case("ID"), "id");
/// ```
pub fn to_snake_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 4);
    let mut prev_lower = false;
    for c in s.chars() {
        if c.is_uppercase() {
            if prev_lower {
                out.push('_');
            }
            out.extend(c.to_lowercase());
            prev_lower = false;
        } else {
            out.push(c);
            prev_lower = c.is_lowercase();
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::to_snake_case;

    #[test]
    fn splits_at_lower_to_upper_boundaries() {
        assert_eq!(to_snake_case("RecurrenceRule"), "recurrence_rule");
        assert_eq!(to_snake_case("recurrenceRule"), "recurrence_rule");
        assert_eq!(to_snake_case("isRecurring"), "is_recurring");
        assert_eq!(to_snake_case("completedAt"), "completed_at");
    }

    #[test]
    fn all_caps_has_no_internal_boundary() {
        assert_eq!(to_snake_case("ID"), "id");
        assert_eq!(to_snake_case("URL"), "url");
    }

    #[test]
    fn snake_case_is_left_alone() {
        assert_eq!(to_snake_case("starts_at"), "starts_at");
        assert_eq!(to_snake_case("title"), "title");
        assert_eq!(to_snake_case(""), "");
    }
}
