//! A fault-tolerant JSON reader: a recursive-descent parser that
//! accepts strict JSON plus a wide superset of common malformations:
//! truncated payloads, unquoted keys, single-quoted strings, comments,
//! trailing commas, foreign-language literals (`True`, `False`, `None`,
//! `undefined`, `NaN`, `Infinity`), unescaped embedded quotes, stray
//! punctuation, and unknown characters. Every malformation is locally
//! recovered at its byte position rather than aborting the parse,
//! producing a best-effort [`value::Value`] tree and a log of every
//! recovery taken.
//!
//! The primary entry point is [`parse_smart`]. Callers who want a
//! reusable-looking (but single-use) parser object can use
//! [`parser::Parser`] instead.

pub mod container;
pub mod diagnostics;
pub mod dispatcher;
pub mod error;
pub mod number;
pub mod options;
pub mod parser;
pub mod reader;
pub mod scanner;
pub mod string_reader;
pub mod tree;
pub mod value;

#[cfg(feature = "python")]
pub mod bindings;

use diagnostics::Diagnostic;
use options::Options;
use value::Value;

/// The result of a `parse_smart` call. `results` holds zero or
/// one value: empty for empty/whitespace-only input, otherwise the
/// single parsed top-level value. `multiple` is always `false`; it is
/// reserved for a future multi-document mode and carried for interface
/// stability, not used by anything in this crate.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Outcome {
    pub ok: bool,
    pub results: Vec<Value>,
    pub error_count: usize,
    pub errors: Vec<String>,
    pub multiple: bool,
}

impl Outcome {
    fn empty() -> Self {
        Self {
            ok: true,
            results: Vec::new(),
            error_count: 0,
            errors: Vec::new(),
            multiple: false,
        }
    }

    fn fatal(diagnostic: &Diagnostic) -> Self {
        Self {
            ok: false,
            results: Vec::new(),
            error_count: 1,
            errors: vec![diagnostic.format()],
            multiple: false,
        }
    }
}

/// Parses `input` per the documented recovery policy, never raising an
/// error to the caller: strict-mode aborts collapse into an `Outcome`
/// with `ok=false` and exactly one error rather than a `Result::Err`.
/// `options` defaults to [`Options::default`] when `None`.
pub fn parse_smart(input: &str, options: Option<Options>) -> Outcome {
    match parser::run_entry_point(input, options.unwrap_or_default()) {
        Ok(outcome) => Outcome {
            ok: outcome.ok,
            results: if outcome.present {
                vec![outcome.value]
            } else {
                Vec::new()
            },
            error_count: outcome.errors.len(),
            errors: outcome.errors,
            multiple: false,
        },
        Err(error::ParseError::Fatal(diagnostic)) => Outcome::fatal(&diagnostic),
        Err(error::ParseError::AlreadyConsumed) => {
            unreachable!("run_entry_point never reuses a parser")
        }
    }
}
