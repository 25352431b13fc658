//! The value dispatcher: classifies the next value, substitutes alien
//! literals, and drives bounded recovery for stray or unknown bytes.

use crate::container::{read_array, read_object};
use crate::diagnostics::Log;
use crate::number::read_number;
use crate::options::Options;
use crate::scanner::Scanner;
use crate::string_reader::read_string;
use crate::value::Value;

/// Bounds how many consecutive bytes the dispatcher may skip while
/// failing to classify a value.
const MAX_DISPATCH_RETRIES: usize = 10;

/// Mutable state threaded through the whole recursive-descent parse:
/// the log, the container-depth counter, and the retry guard.
pub struct ParseState {
    pub log: Log,
    pub container_depth: usize,
    pub dispatch_retries: usize,
    pub options: Options,
}

impl ParseState {
    pub fn new(options: Options) -> Self {
        Self {
            log: Log::new(),
            container_depth: 0,
            dispatch_retries: 0,
            options,
        }
    }
}

/// Reads the next value at the cursor. May return [`Value::Absent`] to
/// signal an enclosing container that a closing byte (`}`/`]`) was
/// deliberately left unconsumed.
pub fn dispatch_value(scanner: &mut Scanner, state: &mut ParseState) -> Value {
    scanner.skip_whitespace(&state.options);
    if scanner.eof() {
        return Value::Null;
    }

    let c = scanner.peek().unwrap();

    if c == '{' {
        state.dispatch_retries = 0;
        return read_object(scanner, state);
    }
    if c == '[' {
        state.dispatch_retries = 0;
        return read_array(scanner, state);
    }
    if c == '"' || c == '\'' {
        state.dispatch_retries = 0;
        return Value::String(read_string(scanner, &mut state.log));
    }
    if c == '-' || c.is_ascii_digit() {
        state.dispatch_retries = 0;
        return Value::Number(read_number(scanner, &mut state.log));
    }
    if scanner.match_word("true") {
        advance_chars(scanner, 4);
        state.dispatch_retries = 0;
        return Value::Bool(true);
    }
    if scanner.match_word("false") {
        advance_chars(scanner, 5);
        state.dispatch_retries = 0;
        return Value::Bool(false);
    }
    if scanner.match_word("null") {
        advance_chars(scanner, 4);
        state.dispatch_retries = 0;
        return Value::Null;
    }
    if state.options.convert_python_tokens && scanner.match_word("True") {
        let pos = scanner.pos();
        advance_chars(scanner, 4);
        state
            .log
            .push(pos, format!("Converted Python literal 'True' to true at pos {}", pos));
        state.dispatch_retries = 0;
        return Value::Bool(true);
    }
    if state.options.convert_python_tokens && scanner.match_word("False") {
        let pos = scanner.pos();
        advance_chars(scanner, 5);
        state.log.push(
            pos,
            format!("Converted Python literal 'False' to false at pos {}", pos),
        );
        state.dispatch_retries = 0;
        return Value::Bool(false);
    }
    if state.options.convert_python_tokens && scanner.match_word("None") {
        let pos = scanner.pos();
        advance_chars(scanner, 4);
        state
            .log
            .push(pos, format!("Converted Python literal 'None' to null at pos {}", pos));
        state.dispatch_retries = 0;
        return Value::Null;
    }
    if state.options.convert_undefined && scanner.match_word("undefined") {
        let pos = scanner.pos();
        advance_chars(scanner, 9);
        state
            .log
            .push(pos, format!("Converted 'undefined' to null at pos {}", pos));
        state.dispatch_retries = 0;
        return Value::Null;
    }
    if scanner.match_word("NaN") {
        let pos = scanner.pos();
        advance_chars(scanner, 3);
        state.log.push(pos, format!("Converted 'NaN' to null at pos {}", pos));
        state.dispatch_retries = 0;
        return Value::Null;
    }
    if scanner.match_word("Infinity") {
        let pos = scanner.pos();
        advance_chars(scanner, 8);
        state
            .log
            .push(pos, format!("Converted 'Infinity' to null at pos {}", pos));
        state.dispatch_retries = 0;
        return Value::Null;
    }
    if c == '}' || c == ']' {
        // Refuse to consume: this byte belongs to the enclosing container.
        return Value::Absent;
    }
    if c == ',' || c == ':' {
        let pos = scanner.pos();
        state
            .log
            .push(pos, format!("Stray '{}' at pos {}", c, pos));
        scanner.advance();
        return retry(scanner, state);
    }

    let pos = scanner.pos();
    state
        .log
        .push(pos, format!("Unexpected character '{}' at pos {}", c, pos));
    scanner.advance();
    retry(scanner, state)
}

fn retry(scanner: &mut Scanner, state: &mut ParseState) -> Value {
    state.dispatch_retries += 1;
    if state.dispatch_retries > MAX_DISPATCH_RETRIES {
        state.dispatch_retries = 0;
        return Value::Null;
    }
    dispatch_value(scanner, state)
}

fn advance_chars(scanner: &mut Scanner, count: usize) {
    for _ in 0..count {
        scanner.advance();
    }
}
