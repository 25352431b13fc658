//! A handful of plain traversals over a parsed [`Value`] tree, used by
//! the CLI front end. Everything else in this family (diffing,
//! flatten/unflatten, dot-path query, type statistics) is out of scope;
//! this module only carries what `jsonfix`'s own flags need.

use crate::value::{Object, Value};

/// Serializes `value` as indented JSON. Falls back to compact output if
/// serialization somehow fails (it never should, since `Value` has no
/// cycles and no non-finite floats reach a `Number`: the dispatcher
/// maps `NaN`/`Infinity` literals to `Null` at parse time).
pub fn to_pretty_string(value: &Value) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|_| to_compact_string(value))
}

/// Serializes `value` as single-line JSON.
pub fn to_compact_string(value: &Value) -> String {
    serde_json::to_string(value).unwrap_or_else(|_| "null".to_string())
}

/// Recursively rebuilds `value`, reordering every object's entries by key
/// (lexicographic). Arrays keep their element order; scalars pass through
/// unchanged. Returns a new tree; the input is untouched.
pub fn sorted_keys(value: &Value) -> Value {
    match value {
        Value::Object(o) => {
            let mut entries: Vec<(&str, &Value)> = o.iter().collect();
            entries.sort_by(|a, b| a.0.cmp(b.0));
            let mut out = Object::new();
            for (k, v) in entries {
                out.insert(k.to_string(), sorted_keys(v));
            }
            Value::Object(out)
        }
        Value::Array(items) => Value::Array(items.iter().map(sorted_keys).collect()),
        other => other.clone(),
    }
}

/// Recursively drops object entries whose value is `Null`. Arrays and
/// scalars are otherwise left untouched; `Null` entries inside arrays
/// are kept, since there is no key to strip them by.
pub fn strip_nulls(value: &Value) -> Value {
    match value {
        Value::Object(o) => {
            let mut out = Object::new();
            for (k, v) in o.iter() {
                if matches!(v, Value::Null) {
                    continue;
                }
                out.insert(k.to_string(), strip_nulls(v));
            }
            Value::Object(out)
        }
        Value::Array(items) => Value::Array(items.iter().map(strip_nulls).collect()),
        other => other.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::Options;
    use crate::parser::Parser;

    fn parse(input: &str) -> Value {
        Parser::new(input, Options::default())
            .parse()
            .unwrap()
            .result
    }

    #[test]
    fn pretty_and_compact_round_trip_through_serde_json() {
        let v = parse(r#"{"a": 1, "b": [true, null]}"#);
        let pretty = to_pretty_string(&v);
        let compact = to_compact_string(&v);
        assert!(pretty.contains('\n'));
        assert!(!compact.contains('\n'));
        let reparsed: serde_json::Value = serde_json::from_str(&compact).unwrap();
        assert_eq!(reparsed["a"], 1);
    }

    #[test]
    fn sorted_keys_reorders_entries_lexicographically() {
        let v = parse(r#"{"z": 1, "a": 2}"#);
        match sorted_keys(&v) {
            Value::Object(o) => {
                let keys: Vec<&str> = o.iter().map(|(k, _)| k).collect();
                assert_eq!(keys, vec!["a", "z"]);
            }
            _ => panic!("expected object"),
        }
    }

    #[test]
    fn sorted_keys_recurses_into_nested_objects_and_arrays() {
        let v = parse(r#"{"outer": {"z": 1, "a": 2}, "list": [{"y": 1, "b": 2}]}"#);
        match sorted_keys(&v) {
            Value::Object(o) => {
                match o.get("outer").unwrap() {
                    Value::Object(inner) => {
                        let keys: Vec<&str> = inner.iter().map(|(k, _)| k).collect();
                        assert_eq!(keys, vec!["a", "z"]);
                    }
                    _ => panic!("expected nested object"),
                }
                match o.get("list").unwrap() {
                    Value::Array(items) => match &items[0] {
                        Value::Object(inner) => {
                            let keys: Vec<&str> = inner.iter().map(|(k, _)| k).collect();
                            assert_eq!(keys, vec!["b", "y"]);
                        }
                        _ => panic!("expected object in array"),
                    },
                    _ => panic!("expected array"),
                }
            }
            _ => panic!("expected object"),
        }
    }

    #[test]
    fn sorted_keys_leaves_non_objects_untouched() {
        assert_eq!(sorted_keys(&parse("[3,1,2]")), Value::Array(vec![
            Value::Number(3.0),
            Value::Number(1.0),
            Value::Number(2.0),
        ]));
        assert_eq!(sorted_keys(&parse("42")), Value::Number(42.0));
    }

    #[test]
    fn strip_nulls_removes_only_object_entries() {
        let v = parse(r#"{"a": null, "b": 1, "c": [null, 2]}"#);
        let stripped = strip_nulls(&v);
        match stripped {
            Value::Object(o) => {
                assert!(!o.contains_key("a"));
                assert_eq!(o.get("b"), Some(&Value::Number(1.0)));
                assert_eq!(o.get("c"), Some(&Value::Array(vec![Value::Null, Value::Number(2.0)])));
            }
            _ => panic!("expected object"),
        }
    }
}
