//! Field resolution for placeholder names

use std::fmt::Display;

use tracing::debug;

use crate::fields::Fields;

/// Resolve a placeholder name against an object's fields
///
/// Misses (unknown name, empty name, or a field without a value) are logged
/// at debug level and reported as `None`; they are never errors.
pub fn resolve_field<'o, T: Fields + ?Sized>(object: &'o T, name: &str) -> Option<&'o dyn Display> {
    let value = object.field(name);
    if value.is_none() {
        debug!(
            target: "object_formatter::resolve",
            field = name,
            object = object.type_name(),
            known = ?object.field_names(),
            "no value for placeholder"
        );
    }
    value
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Person {
        name: String,
        age: u32,
        email: Option<String>,
    }

    crate::fields!(Person { name, age } nullable { email });

    fn person() -> Person {
        Person {
            name: "Ana".to_string(),
            age: 5,
            email: None,
        }
    }

    #[test]
    fn test_resolves_declared_field() {
        let p = person();
        assert_eq!(resolve_field(&p, "name").map(|v| v.to_string()), Some("Ana".to_string()));
        assert_eq!(resolve_field(&p, "age").map(|v| v.to_string()), Some("5".to_string()));
    }

    #[test]
    fn test_unknown_field_is_absent() {
        assert!(resolve_field(&person(), "height").is_none());
    }

    #[test]
    fn test_empty_name_is_absent() {
        assert!(resolve_field(&person(), "").is_none());
    }

    #[test]
    fn test_case_mismatch_is_absent() {
        assert!(resolve_field(&person(), "Name").is_none());
    }

    #[test]
    fn test_null_field_is_absent() {
        let mut p = person();
        assert!(resolve_field(&p, "email").is_none());
        p.email = Some("ana@example.com".to_string());
        assert!(resolve_field(&p, "email").is_some());
    }

    #[test]
    fn test_dotted_name_is_not_a_path() {
        assert!(resolve_field(&person(), "name.len").is_none());
    }
}
