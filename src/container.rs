//! Object and array readers: key/colon/value/separator state machines,
//! depth tracking, local recovery, and auto-closure.

use crate::dispatcher::{dispatch_value, ParseState};
use crate::scanner::Scanner;
use crate::string_reader::read_string;
use crate::value::{Object, Value};

pub fn read_object(scanner: &mut Scanner, state: &mut ParseState) -> Value {
    state.container_depth += 1;
    if state.container_depth > state.options.max_depth {
        let pos = scanner.pos();
        state
            .log
            .push(pos, format!("Max depth exceeded at pos {}", pos));
        skip_balanced(scanner, '{', '}');
        state.container_depth -= 1;
        return Value::Object(Object::new());
    }

    scanner.advance(); // consume '{'
    let mut obj = Object::new();

    loop {
        scanner.skip_whitespace(&state.options);
        if scanner.eof() {
            break;
        }
        let c = scanner.peek().unwrap();

        if c == ',' {
            if is_trailing_before(scanner, '}') && !state.options.allow_trailing_comma {
                let pos = scanner.pos();
                state
                    .log
                    .push(pos, "Trailing comma before `}`".to_string());
            }
            scanner.advance();
            continue;
        }
        if c == '}' {
            break;
        }
        if c == ']' {
            let pos = scanner.pos();
            state
                .log
                .push(pos, "Unexpected `]` inside object".to_string());
            scanner.advance();
            continue;
        }

        let key_start = scanner.pos();
        let mut key = if c == '"' || c == '\'' {
            read_string(scanner, &mut state.log)
        } else if c.is_alphabetic() || c == '_' || c == '$' {
            read_bare_word(scanner)
        } else {
            let pos = scanner.pos();
            state.log.push(pos, format!("Expected key at pos {}", pos));
            scanner.advance();
            continue;
        };
        if c.is_alphabetic() || c == '_' || c == '$' {
            state.log.push(key_start, "Unquoted key".to_string());
        }

        scanner.skip_whitespace(&state.options);
        if key.starts_with(',') {
            let pos = scanner.pos();
            state
                .log
                .push(pos, format!("Stray leading comma(s) in key at pos {}", pos));
            key = key.trim_start_matches(',').trim_start().to_string();
        }

        if scanner.peek() == Some(':') {
            scanner.advance();
        } else {
            scanner.skip_whitespace(&state.options);
            match scanner.peek() {
                None | Some(',') | Some('}') => {
                    obj.insert(key, Value::Null);
                    continue;
                }
                _ => {
                    let pos = scanner.pos();
                    state
                        .log
                        .push(pos, format!("Missing colon after key '{}' at pos {}", key, pos));
                }
            }
        }

        scanner.skip_whitespace(&state.options);
        if scanner.eof() {
            obj.insert(key, Value::Null);
            break;
        }

        let value = dispatch_value(scanner, state);
        let value = if value.is_absent() { Value::Null } else { value };
        obj.insert(key, value);

        scanner.skip_whitespace(&state.options);
        match scanner.peek() {
            Some(',') => {
                scanner.advance();
            }
            Some('}') => {}
            None => break,
            _ => {
                let pos = scanner.pos();
                state.log.push(pos, "Expected `,` or `}`".to_string());
            }
        }
    }

    if scanner.peek() == Some('}') {
        scanner.advance();
    } else {
        let pos = scanner.pos();
        state
            .log
            .push(pos, "Unclosed object, auto-closing".to_string());
    }
    state.container_depth -= 1;
    Value::Object(obj)
}

pub fn read_array(scanner: &mut Scanner, state: &mut ParseState) -> Value {
    state.container_depth += 1;
    if state.container_depth > state.options.max_depth {
        let pos = scanner.pos();
        state
            .log
            .push(pos, format!("Max depth exceeded at pos {}", pos));
        skip_balanced(scanner, '[', ']');
        state.container_depth -= 1;
        return Value::Array(Vec::new());
    }

    scanner.advance(); // consume '['
    let mut items = Vec::new();

    loop {
        scanner.skip_whitespace(&state.options);
        if scanner.eof() {
            break;
        }
        let c = scanner.peek().unwrap();

        if c == ',' {
            if is_trailing_before(scanner, ']') && !state.options.allow_trailing_comma {
                let pos = scanner.pos();
                state
                    .log
                    .push(pos, "Trailing comma before `]`".to_string());
            }
            scanner.advance();
            continue;
        }
        if c == ']' {
            break;
        }
        if c == '}' {
            let pos = scanner.pos();
            state
                .log
                .push(pos, "Unexpected `}` inside array".to_string());
            scanner.advance();
            continue;
        }

        if premature_array_end(scanner) {
            let pos = scanner.pos();
            state.log.push(
                pos,
                "Detected object key inside array, closing array".to_string(),
            );
            break;
        }

        let value = dispatch_value(scanner, state);
        if !value.is_absent() {
            items.push(value);
        }

        scanner.skip_whitespace(&state.options);
        match scanner.peek() {
            Some(',') => {
                scanner.advance();
            }
            Some(']') => {}
            None => break,
            _ => {
                let pos = scanner.pos();
                state.log.push(pos, "Expected `,` or `]`".to_string());
            }
        }
    }

    if scanner.peek() == Some(']') {
        scanner.advance();
    } else {
        let pos = scanner.pos();
        state
            .log
            .push(pos, "Unclosed array, auto-closing".to_string());
    }
    state.container_depth -= 1;
    Value::Array(items)
}

fn read_bare_word(scanner: &mut Scanner) -> String {
    let mut s = String::new();
    while let Some(c) = scanner.peek() {
        if c.is_alphanumeric() || c == '_' || c == '$' {
            s.push(c);
            scanner.advance();
        } else {
            break;
        }
    }
    s
}

/// Does the comma at the cursor sit immediately (modulo whitespace)
/// before `closer`? Non-mutating.
fn is_trailing_before(scanner: &Scanner, closer: char) -> bool {
    let rest = scanner.rest();
    let after_comma = &rest[','.len_utf8()..];
    let i = skip_ws(after_comma, 0);
    after_comma[i..].chars().next() == Some(closer)
}

/// Advances past a balanced `open`/`close` span starting at the cursor
/// (which must be on `open`), counting nesting, EOF-safe.
fn skip_balanced(scanner: &mut Scanner, open: char, close: char) {
    let mut depth = 0i32;
    loop {
        match scanner.peek() {
            None => break,
            Some(c) if c == open => {
                depth += 1;
                scanner.advance();
            }
            Some(c) if c == close => {
                scanner.advance();
                depth -= 1;
                if depth <= 0 {
                    break;
                }
            }
            Some(_) => scanner.advance(),
        }
    }
}

/// Non-mutating look-ahead: does the upcoming input look like a `key:`
/// shape? Used to detect an array that should have closed before a
/// trailing run of object members.
fn premature_array_end(scanner: &Scanner) -> bool {
    let rest = scanner.rest();
    let mut i = skip_ws(rest, 0);
    if i >= rest.len() {
        return false;
    }
    let c = rest[i..].chars().next().unwrap();

    if c == '"' || c == '\'' {
        let quote = c;
        i += c.len_utf8();
        loop {
            if i >= rest.len() {
                return false;
            }
            let ch = rest[i..].chars().next().unwrap();
            if ch == '\\' {
                i += ch.len_utf8();
                if i >= rest.len() {
                    return false;
                }
                let escaped = rest[i..].chars().next().unwrap();
                i += escaped.len_utf8();
                continue;
            }
            if ch == quote {
                i += ch.len_utf8();
                break;
            }
            if ch == '\n' || ch == '\r' {
                return false;
            }
            i += ch.len_utf8();
        }
    } else if c.is_alphabetic() || c == '_' || c == '$' {
        while i < rest.len() {
            let ch = rest[i..].chars().next().unwrap();
            if ch.is_alphanumeric() || ch == '_' || ch == '$' {
                i += ch.len_utf8();
            } else {
                break;
            }
        }
    } else {
        return false;
    }

    i = skip_ws(rest, i);
    i < rest.len() && rest[i..].chars().next() == Some(':')
}

fn skip_ws(s: &str, mut i: usize) -> usize {
    while i < s.len() {
        let c = s[i..].chars().next().unwrap();
        if c.is_whitespace() {
            i += c.len_utf8();
        } else {
            break;
        }
    }
    i
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::Options;

    fn parse_object(input: &str, options: Options) -> (Value, ParseState) {
        let mut scanner = Scanner::new(input);
        let mut state = ParseState::new(options);
        let v = read_object(&mut scanner, &mut state);
        (v, state)
    }

    fn parse_array(input: &str, options: Options) -> (Value, ParseState) {
        let mut scanner = Scanner::new(input);
        let mut state = ParseState::new(options);
        let v = read_array(&mut scanner, &mut state);
        (v, state)
    }

    #[test]
    fn well_formed_object() {
        let (v, state) = parse_object(r#"{"a": 1, "b": 2}"#, Options::default());
        match v {
            Value::Object(o) => {
                assert_eq!(o.get("a"), Some(&Value::Number(1.0)));
                assert_eq!(o.get("b"), Some(&Value::Number(2.0)));
            }
            _ => panic!("expected object"),
        }
        assert!(state.log.is_empty());
    }

    #[test]
    fn truncated_object_fills_null_and_autocloses() {
        let (v, state) = parse_object(r#"{"name":"John","age":30,"addr"#, Options::default());
        match v {
            Value::Object(o) => {
                assert_eq!(o.get("name"), Some(&Value::String("John".into())));
                assert_eq!(o.get("age"), Some(&Value::Number(30.0)));
                assert_eq!(o.get("addr"), Some(&Value::Null));
            }
            _ => panic!("expected object"),
        }
        assert!(!state.log.is_empty());
    }

    #[test]
    fn unquoted_keys_and_python_bools() {
        let (v, state) = parse_object("{x: True, y: False}", Options::default());
        match v {
            Value::Object(o) => {
                assert_eq!(o.get("x"), Some(&Value::Bool(true)));
                assert_eq!(o.get("y"), Some(&Value::Bool(false)));
            }
            _ => panic!("expected object"),
        }
        assert_eq!(
            state
                .log
                .iter()
                .filter(|d| d.message.contains("Unquoted key"))
                .count(),
            2
        );
        assert_eq!(
            state
                .log
                .iter()
                .filter(|d| d.message.contains("Converted Python literal"))
                .count(),
            2
        );
    }

    #[test]
    fn missing_comma_between_pairs_recovers() {
        let (v, state) = parse_object(r#"{"a":1 "b":2}"#, Options::default());
        match v {
            Value::Object(o) => {
                assert_eq!(o.get("a"), Some(&Value::Number(1.0)));
                assert_eq!(o.get("b"), Some(&Value::Number(2.0)));
            }
            _ => panic!("expected object"),
        }
        assert!(state
            .log
            .iter()
            .any(|d| d.message.contains("Expected `,` or `}`")));
    }

    #[test]
    fn repeated_internal_commas_tolerated() {
        let (v, _state) = parse_object(r#"{"a":1,,,}"#, Options::default());
        match v {
            Value::Object(o) => {
                assert_eq!(o.len(), 1);
                assert_eq!(o.get("a"), Some(&Value::Number(1.0)));
            }
            _ => panic!("expected object"),
        }
    }

    #[test]
    fn unclosed_array_autocloses() {
        let (v, state) = parse_array("[1,2,3", Options::default());
        assert_eq!(
            v,
            Value::Array(vec![
                Value::Number(1.0),
                Value::Number(2.0),
                Value::Number(3.0)
            ])
        );
        assert!(state
            .log
            .iter()
            .any(|d| d.message.contains("Unclosed array")));
    }

    #[test]
    fn premature_array_end_closes_before_key_shape() {
        let (v, state) = parse_array(r#"[1, 2, "fps": 30]"#, Options::default());
        assert_eq!(v, Value::Array(vec![Value::Number(1.0), Value::Number(2.0)]));
        assert!(state
            .log
            .iter()
            .any(|d| d.message.contains("Detected object key inside array")));
    }

    #[test]
    fn max_depth_prunes_innermost_container() {
        let opts = Options {
            max_depth: 2,
            ..Options::default()
        };
        let (v, state) = parse_object(r#"{"a":{"b":{"c":1}}}"#, opts);
        assert!(state.log.iter().any(|d| d.message.contains("Max depth")));
        match v {
            Value::Object(o) => assert!(o.contains_key("a")),
            _ => panic!("expected object"),
        }
    }

    #[test]
    fn comments_and_trailing_comma_are_silent_by_default() {
        let (v, state) = parse_object(r#"{"a": 1 /* hi */, "b": 2,}"#, Options::default());
        match v {
            Value::Object(o) => {
                assert_eq!(o.get("a"), Some(&Value::Number(1.0)));
                assert_eq!(o.get("b"), Some(&Value::Number(2.0)));
            }
            _ => panic!("expected object"),
        }
        assert!(state.log.is_empty());
    }
}
