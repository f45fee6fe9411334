prelude!();

use std::collections::BTreeMap;
use std::fmt;

#[derive(Debug)]
#[allow(dead_code)]
struct Point {
    x: i32,
    y: i32,
}

#[derive(Debug)]
#[allow(dead_code)]
struct Config {
    name: String,
    values: Vec<u32>,
}

struct Broken;

impl fmt::Debug for Broken {
    fn fmt(&self, _: &mut fmt::Formatter<'_>) -> fmt::Result {
        Err(fmt::Error)
    }
}

#[test]
fn test_scalars() {
    assert_eq!(describe("boom"), "\"boom\"");
    assert_eq!(describe(&String::from("boom")), "\"boom\"");
    assert_eq!(describe(&42u32), "42");
    assert_eq!(describe(&-1.5f64), "-1.5");
    assert_eq!(describe(&true), "true");
    assert_eq!(describe(&None::<u32>), "None");
    assert_eq!(describe(&()), "()");
}

#[test]
fn test_short_structures_stay_inline() {
    assert_eq!(describe(&Point { x: 1, y: 2 }), "Point { x: 1, y: 2 }");
    assert_eq!(describe(&[1, 2, 3]), "[1, 2, 3]");
}

#[test]
fn test_long_structures_are_pretty_printed() {
    let config = Config {
        name: String::from("a configuration with a reasonably long name"),
        values: (0..16).collect(),
    };

    let out = describe(&config);
    assert!(out.starts_with("Config {\n"));
    assert!(out.contains("    name: \"a configuration with a reasonably long name\",\n"));

    let mut map = BTreeMap::new();

    for n in 0..8 {
        map.insert(format!("key-{n}"), n);
    }

    let out = describe(&map);
    assert!(out.lines().count() > 8);
}

#[test]
fn test_long_strings_are_quoted() {
    let long = "x".repeat(INLINE_LIMIT * 2);
    assert_eq!(describe(long.as_str()), format!("\"{long}\""));
}

#[test]
fn test_broken_debug_falls_back_to_type_name() {
    let out = describe(&Broken);
    assert!(out.starts_with('['));
    assert!(out.ends_with("Broken]"));
}

#[test]
fn test_unwrap_message_uses_description() {
    let error = failure::<u32, _>(Point { x: 1, y: 2 }).try_unwrap_success().unwrap_err();
    assert_eq!(
        error.message(),
        "Called `unwrap_success` on a `Failure` value: Point { x: 1, y: 2 }"
    );

    let error = failure::<u32, _>(Broken).try_unwrap_success().unwrap_err();
    assert!(error.message().ends_with("Broken]"));
}

#[cfg(feature = "serde")]
#[test]
fn test_describe_json() {
    use crate::describe_json;

    assert_eq!(describe_json("boom"), "\"boom\"");
    assert_eq!(describe_json(&42), "42");
    assert_eq!(describe_json(&false), "false");
    assert_eq!(describe_json(&None::<u32>), "null");
    assert_eq!(describe_json(&vec![1, 2]), "[\n  1,\n  2\n]");

    let mut map = BTreeMap::new();
    map.insert((1, 2), "tuple keys cannot be serialized to json");
    let out = describe_json(&map);
    assert!(out.starts_with('['));
    assert!(out.contains("BTreeMap"));
}
