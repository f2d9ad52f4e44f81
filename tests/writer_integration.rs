//! Integration tests for the console writers and the `%` stage

use std::collections::{BinaryHeap, VecDeque};

use object_formatter::{
    args, fields, write_list, write_object, write_object_args, write_sorted, Arg, FormatError,
    PrintError,
};
use pretty_assertions::assert_eq;

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
struct Person {
    name: String,
    age: u32,
}

fields!(Person { name, age });

fn person(name: &str, age: u32) -> Person {
    Person {
        name: name.to_string(),
        age,
    }
}

/// Ordered by a float, so NaN makes elements incomparable
#[derive(Debug, PartialEq, PartialOrd)]
struct Measurement {
    value: f64,
}

fields!(Measurement { value });

fn collect(f: impl FnOnce(&mut Vec<u8>) -> Result<(), PrintError>) -> Result<String, PrintError> {
    let mut buf = Vec::new();
    f(&mut buf)?;
    Ok(String::from_utf8(buf).expect("utf-8"))
}

#[test]
fn test_sequence_writer_one_line_per_element() {
    let people = vec![person("A", 1), person("B", 2)];
    let out = collect(|w| write_list(w, &people, "${name}:${age}")).unwrap();
    assert_eq!(out, "A:1\nB:2\n");
}

#[test]
fn test_sequence_writer_empty_collection() {
    let people: Vec<Person> = Vec::new();
    let out = collect(|w| write_list(w, &people, "${name}")).unwrap();
    assert_eq!(out, "");
}

#[test]
fn test_sequence_writer_keeps_percent_literal() {
    let people = vec![person("A", 1)];
    let out = collect(|w| write_list(w, people, "${name} 100%")).unwrap();
    assert_eq!(out, "A 100%\n");
}

#[test]
fn test_natural_order_writer_sorts() {
    let queue: VecDeque<Person> = vec![person("C", 3), person("A", 9), person("B", 1)]
        .into_iter()
        .collect();
    let out = collect(|w| write_sorted(w, queue, "${name}")).unwrap();
    assert_eq!(out, "A\nB\nC\n");
}

#[test]
fn test_natural_order_writer_drains_heap() {
    let heap: BinaryHeap<Person> = vec![person("B", 2), person("A", 1)].into_iter().collect();
    let out = collect(|w| write_sorted(w, heap, "${name}=${age}")).unwrap();
    assert_eq!(out, "A=1\nB=2\n");
}

#[test]
fn test_natural_order_writer_fails_before_output() {
    let readings = vec![
        Measurement { value: 1.0 },
        Measurement { value: 0.5 },
        Measurement { value: f64::NAN },
    ];
    let mut buf = Vec::new();
    let err = write_sorted(&mut buf, readings, "${value}").unwrap_err();
    assert!(matches!(err, PrintError::Incomparable { right: 2, .. }));
    assert!(buf.is_empty(), "no partial output expected");
}

#[test]
fn test_natural_order_writer_floats_without_nan() {
    let readings = vec![Measurement { value: 2.5 }, Measurement { value: -1.0 }];
    let out = collect(|w| write_sorted(w, readings, "${value}")).unwrap();
    assert_eq!(out, "-1\n2.5\n");
}

#[test]
fn test_single_writer_without_arguments() {
    let out = collect(|w| write_object(w, &person("Ana", 5), "${name}, ${age} years old")).unwrap();
    assert_eq!(out, "Ana, 5 years old");
}

#[test]
fn test_single_writer_with_positional_arguments() {
    let out = collect(|w| {
        write_object_args(w, &person("Ana", 5), "${name} has %d potatoes%n", &args![12])
    })
    .unwrap();
    assert_eq!(out, "Ana has 12 potatoes\n");
}

#[test]
fn test_printf_stage_pads_to_width() {
    let out = collect(|w| {
        write_object_args(w, &person("Ana", 5), "[${name}] %5s|%03d", &args!["ok", 7])
    })
    .unwrap();
    assert_eq!(out, "[Ana]    ok|007");
}

#[test]
fn test_unresolved_placeholder_survives_printf_stage() {
    let out = collect(|w| {
        write_object_args(w, &person("Ana", 5), "${nick} is %s", &args!["here"])
    })
    .unwrap();
    assert_eq!(out, "${nick} is here");
}

#[test]
fn test_printf_stage_errors_propagate() {
    let err = collect(|w| write_object_args(w, &person("Ana", 5), "${name} %d", &[Arg::from("x")]))
        .unwrap_err();
    match err {
        PrintError::Format(FormatError::IllegalConversion { specifier, .. }) => {
            assert_eq!(specifier, "%d");
        }
        other => panic!("unexpected error: {:?}", other),
    }
}

#[test]
fn test_printf_span_points_into_rendered_text() {
    // "Ana " is four bytes, so the specifier starts at 4 in the rendered text
    let err = collect(|w| write_object_args(w, &person("Ana", 5), "${name} %s", &[])).unwrap_err();
    match err {
        PrintError::Format(e) => assert_eq!(e.span(), &(4..6)),
        other => panic!("unexpected error: {:?}", other),
    }
}
