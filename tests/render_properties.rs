//! Integration tests for template rendering semantics
//!
//! These exercise the public `render` entry point against the behaviors
//! callers rely on: literal pass-through, exact-name lookup, left-to-right
//! substitution with differing lengths, and silent misses.

use std::collections::HashMap;
use std::sync::Arc;
use std::thread;

use object_formatter::{fields, render, unresolved, Fields};
use pretty_assertions::assert_eq;

struct Person {
    name: String,
    age: u32,
}

fields!(Person { name, age });

struct Pair {
    a: String,
    b: String,
}

fields!(Pair { a, b });

/// Field literally spelled with a capital letter
struct Capitalized {
    #[allow(non_snake_case)]
    Name: String,
}

fields!(Capitalized { Name });

struct Base {
    id: u64,
}

fields!(Base { id });

/// Embeds `Base` but only lists its own fields
struct Derived {
    base: Base,
    label: String,
}

fields!(Derived { label });

struct Profile {
    user: String,
    bio: Option<String>,
    score: f64,
    active: bool,
    initial: char,
}

fields!(Profile { user, score, active, initial } nullable { bio });

fn ana() -> Person {
    Person {
        name: "Ana".to_string(),
        age: 5,
    }
}

#[test]
fn test_template_without_placeholders_is_unchanged() {
    for template in ["", "plain", "costs $5", "{name}", "$ {name}", "100% $"] {
        assert_eq!(render(&ana(), template), template);
    }
}

#[test]
fn test_single_field_renders_display_text() {
    assert_eq!(render(&ana(), "${name}"), "Ana");
    assert_eq!(render(&ana(), "${age}"), 5.to_string());
}

#[test]
fn test_missing_field_stays_literal() {
    assert_eq!(render(&ana(), "${missing}"), "${missing}");
}

#[test]
fn test_placeholders_resolve_left_to_right() {
    assert_eq!(render(&ana(), "${name} is ${age}"), "Ana is 5");
}

#[test]
fn test_consecutive_placeholders() {
    let pair = Pair {
        a: "X".to_string(),
        b: "Y".to_string(),
    };
    assert_eq!(render(&pair, "${a}${b}"), "XY");
}

#[test]
fn test_growing_and_shrinking_replacements() {
    let pair = Pair {
        a: "a much longer value than the token".to_string(),
        b: String::new(),
    };
    assert_eq!(
        render(&pair, "[${a}|${b}|${a}]"),
        "[a much longer value than the token||a much longer value than the token]"
    );
}

#[test]
fn test_name_match_is_case_sensitive() {
    let c = Capitalized {
        Name: "Ana".to_string(),
    };
    assert_eq!(render(&c, "${name}"), "${name}");
    assert_eq!(render(&c, "${Name}"), "Ana");
}

#[test]
fn test_embedded_struct_fields_not_visible() {
    let d = Derived {
        base: Base { id: 7 },
        label: "seven".to_string(),
    };
    assert_eq!(render(&d, "${label}#${id}"), "seven#${id}");
    assert_eq!(render(&d.base, "${id}"), "7");
}

#[test]
fn test_dotted_names_are_not_paths() {
    let d = Derived {
        base: Base { id: 7 },
        label: "seven".to_string(),
    };
    assert_eq!(render(&d, "${base.id}"), "${base.id}");
}

#[test]
fn test_value_kinds_use_default_display() {
    let mut profile = Profile {
        user: "ana".to_string(),
        bio: None,
        score: 2.5,
        active: true,
        initial: 'A',
    };
    assert_eq!(
        render(&profile, "${user} ${score} ${active} ${initial} ${bio}"),
        "ana 2.5 true A ${bio}"
    );
    profile.bio = Some("hi".to_string());
    assert_eq!(render(&profile, "${bio}"), "hi");
}

#[test]
fn test_malformed_placeholders_pass_through() {
    assert_eq!(render(&ana(), "${name"), "${name");
    assert_eq!(render(&ana(), "${na me}"), "${na me}");
    assert_eq!(render(&ana(), "$${name}"), "$Ana");
    assert_eq!(render(&ana(), "${${name}}"), "${Ana}");
}

#[test]
fn test_map_view_as_object() {
    let mut record = HashMap::new();
    record.insert("city", "Lisbon");
    record.insert("Country", "PT");
    assert_eq!(render(&record, "${city}, ${country}"), "Lisbon, ${country}");
}

#[test]
fn test_unresolved_agrees_with_render() {
    let template = "${name} ${Name} ${age}${}";
    let missing: Vec<&str> = unresolved(&ana(), template).iter().map(|p| p.raw).collect();
    assert_eq!(missing, vec!["${Name}", "${}"]);
}

#[test]
fn test_concurrent_renders_on_separate_objects() {
    let handles: Vec<_> = (0..8u32)
        .map(|i| {
            thread::spawn(move || {
                let p = Person {
                    name: format!("p{}", i),
                    age: i,
                };
                render(&p, "${name}:${age}")
            })
        })
        .collect();
    let results: Vec<String> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    let expected: Vec<String> = (0..8).map(|i| format!("p{}:{}", i, i)).collect();
    assert_eq!(results, expected);
}

#[test]
fn test_shared_object_through_arc() {
    let shared = Arc::new(ana());
    let clone = Arc::clone(&shared);
    let rendered = thread::spawn(move || render(&clone, "${name}")).join().unwrap();
    assert_eq!(rendered, "Ana");
    assert!(shared.type_name().ends_with("Person"));
}
