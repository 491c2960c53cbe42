//! The per-entity validation contract and the shared field checks that
//! interpret it.
//!
//! Validation is advisory and separate from decoding: a fully decoded
//! entity may still be invalid, and the caller is expected to branch on
//! [`Validate::is_valid`] before trusting it. Every check appends
//! human-readable messages to one list, in field declaration order, so
//! `get_errors` reports all unmet requirements rather than the first.
//! Nested failures are prefixed with the owning field (and element
//! index for lists) to identify the failing sub-path.

/// Structural validity of a decoded or constructed entity.
pub trait Validate {
    /// Every unmet requirement, in field declaration order. Empty iff
    /// the entity is valid.
    fn get_errors(&self) -> Vec<String>;

    fn is_valid(&self) -> bool {
        self.get_errors().is_empty()
    }
}

/// Required field of any type: presence only.
pub(crate) fn require<T>(errors: &mut Vec<String>, entity: &str, field: &str, value: &Option<T>) {
    if value.is_none() {
        errors.push(format!("No {field} in {entity}."));
    }
}

/// Required string: present and non-empty.
pub(crate) fn require_string(
    errors: &mut Vec<String>,
    entity: &str,
    field: &str,
    value: &Option<String>,
) {
    match value {
        None => errors.push(format!("No {field} in {entity}.")),
        Some(s) if s.is_empty() => errors.push(format!("Empty {field} in {entity}.")),
        Some(_) => {}
    }
}

/// Optional string that must be non-empty when present.
pub(crate) fn check_non_empty(
    errors: &mut Vec<String>,
    entity: &str,
    field: &str,
    value: &Option<String>,
) {
    if let Some(s) = value {
        if s.is_empty() {
            errors.push(format!("Empty {field} in {entity}."));
        }
    }
}

/// Closed-interval range check on a present numeric field.
pub(crate) fn check_range(
    errors: &mut Vec<String>,
    entity: &str,
    field: &str,
    value: &Option<f64>,
    min: f64,
    max: f64,
) {
    if let Some(v) = value {
        if *v < min || *v > max {
            errors.push(format!(
                "{field} in {entity} not in the range of {min} to {max}."
            ));
        }
    }
}

/// Lower-bound check on a present numeric field.
pub(crate) fn check_min(
    errors: &mut Vec<String>,
    entity: &str,
    field: &str,
    value: &Option<f64>,
    min: f64,
) {
    if let Some(v) = value {
        if *v < min {
            errors.push(format!("{field} in {entity} is less than {min}."));
        }
    }
}

/// Enumerated-literal check on a present string field. Matching is
/// exact and case-sensitive. Empty strings are not flagged here; pair
/// with [`require_string`] or [`check_non_empty`] so an empty value is
/// reported once, as an emptiness error.
pub(crate) fn check_one_of(
    errors: &mut Vec<String>,
    entity: &str,
    field: &str,
    value: &Option<String>,
    allowed: &[&str],
) {
    if let Some(v) = value {
        if !v.is_empty() && !allowed.contains(&v.as_str()) {
            errors.push(format!("Invalid {field} in {entity}."));
        }
    }
}

/// Optional nested entity: must be fully valid when present.
pub(crate) fn check_entity<T: Validate>(
    errors: &mut Vec<String>,
    entity: &str,
    field: &str,
    value: &Option<T>,
) {
    if let Some(nested) = value {
        for err in nested.get_errors() {
            errors.push(format!("{field} in {entity}: {err}"));
        }
    }
}

/// Required nested entity: present and fully valid.
pub(crate) fn require_entity<T: Validate>(
    errors: &mut Vec<String>,
    entity: &str,
    field: &str,
    value: &Option<T>,
) {
    match value {
        None => errors.push(format!("No {field} in {entity}.")),
        Some(_) => check_entity(errors, entity, field, value),
    }
}

/// Optional nested entity list: every element valid when present.
pub(crate) fn check_list<T: Validate>(
    errors: &mut Vec<String>,
    entity: &str,
    field: &str,
    value: &Option<Vec<T>>,
) {
    if let Some(items) = value {
        for (i, item) in items.iter().enumerate() {
            for err in item.get_errors() {
                errors.push(format!("{field}[{i}] in {entity}: {err}"));
            }
        }
    }
}

/// Required nested entity list. `non_empty` additionally rejects an
/// empty list.
pub(crate) fn require_list<T: Validate>(
    errors: &mut Vec<String>,
    entity: &str,
    field: &str,
    value: &Option<Vec<T>>,
    non_empty: bool,
) {
    match value {
        None => errors.push(format!("No {field} in {entity}.")),
        Some(items) => {
            if non_empty && items.is_empty() {
                errors.push(format!("Empty {field} in {entity}."));
            }
            check_list(errors, entity, field, value);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Leaf {
        ok: bool,
    }

    impl Validate for Leaf {
        fn get_errors(&self) -> Vec<String> {
            if self.ok {
                Vec::new()
            } else {
                vec!["No X in Leaf.".to_owned()]
            }
        }
    }

    #[test]
    fn nested_errors_carry_sub_paths() {
        let mut errors = Vec::new();
        let items = Some(vec![Leaf { ok: true }, Leaf { ok: false }]);
        require_list(&mut errors, "Outer", "Items", &items, true);
        assert_eq!(errors, vec!["Items[1] in Outer: No X in Leaf."]);
    }

    #[test]
    fn empty_required_list_is_flagged() {
        let mut errors = Vec::new();
        require_list::<Leaf>(&mut errors, "Outer", "Items", &Some(Vec::new()), true);
        assert_eq!(errors, vec!["Empty Items in Outer."]);
    }

    #[test]
    fn range_is_closed_interval() {
        let mut errors = Vec::new();
        check_range(&mut errors, "E", "Lat", &Some(90.0), -90.0, 90.0);
        check_range(&mut errors, "E", "Lat", &Some(90.0001), -90.0, 90.0);
        assert_eq!(errors, vec!["Lat in E not in the range of -90 to 90."]);
    }

    #[test]
    fn literal_match_is_case_sensitive() {
        let mut errors = Vec::new();
        check_one_of(&mut errors, "E", "Type", &Some("standard".to_owned()), &["Standard"]);
        assert_eq!(errors, vec!["Invalid Type in E."]);
    }
}
