//! The secondary (direct) API: a reusable-looking but single-use parser
//! object, and the shared entry-point logic both APIs run.

use crate::dispatcher::{dispatch_value, ParseState};
use crate::error::ParseError;
use crate::options::Options;
use crate::scanner::Scanner;
use crate::value::Value;

/// Result of a single parse run, as the direct API returns it.
pub struct DirectResult {
    pub ok: bool,
    pub result: Value,
    pub errors: Vec<String>,
}

/// Internal shape shared by both APIs before each picks its own outward
/// representation (the direct API always has a `Value`; the primary API
/// needs to know whether that value belongs in `results` at all).
pub(crate) struct EntryOutcome {
    pub ok: bool,
    pub value: Value,
    pub present: bool,
    pub errors: Vec<String>,
}

/// A single-use parser. Constructing it does no work; `parse()` consumes
/// it and runs the whole entry point exactly once.
pub struct Parser<'a> {
    input: &'a str,
    options: Options,
    consumed: bool,
}

impl<'a> Parser<'a> {
    pub fn new(input: &'a str, options: Options) -> Self {
        Self {
            input,
            options,
            consumed: false,
        }
    }

    /// Run the parse. Returns [`ParseError::AlreadyConsumed`] if called
    /// twice, and [`ParseError::Fatal`] if `strict` is set and a
    /// recovery was attempted.
    pub fn parse(mut self) -> Result<DirectResult, ParseError> {
        if self.consumed {
            return Err(ParseError::AlreadyConsumed);
        }
        self.consumed = true;
        let outcome = run_entry_point(self.input, self.options)?;
        Ok(DirectResult {
            ok: outcome.ok,
            result: outcome.value,
            errors: outcome.errors,
        })
    }
}

/// Shared by both the direct API and `parse_smart`: normalizes empty
/// input, strips a leading BOM, and dispatches exactly one top-level
/// value.
///
/// `present` distinguishes the three outcome shapes callers care about:
/// empty/whitespace-only input (`present=false`, value unused), a
/// single-`Null` result at EOF-after-BOM (`present=true`, `Null`), and an
/// ordinary dispatched value, which is only absent if the top-level
/// cursor sat on a bare `}`/`]` with nothing to enclose it.
pub(crate) fn run_entry_point(
    input: &str,
    options: Options,
) -> Result<EntryOutcome, ParseError> {
    if input.trim().is_empty() {
        return Ok(EntryOutcome {
            ok: true,
            value: Value::Null,
            present: false,
            errors: Vec::new(),
        });
    }

    let mut scanner = Scanner::new(input);
    let mut state = ParseState::new(options);
    scanner.skip_bom();
    scanner.skip_whitespace(&state.options);

    let (value, present) = if scanner.eof() {
        (Value::Null, true)
    } else {
        let v = dispatch_value(&mut scanner, &mut state);
        if v.is_absent() {
            (Value::Null, false)
        } else {
            (v, true)
        }
    };

    if options.strict {
        if let Some(first) = state.log.first() {
            return Err(ParseError::Fatal(first.clone()));
        }
    }

    Ok(EntryOutcome {
        ok: state.log.is_empty(),
        value,
        present,
        errors: state.log.formatted(),
    })
}
