//! The parser's configuration record. Unknown fields (e.g. from a future
//! caller-side JSON-encoded config) are ignored silently, for forward
//! compatibility.

use serde::{Deserialize, Serialize};

/// Effective parse options. `Default` gives the documented defaults.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Options {
    /// Abort with a fatal error on the first diagnostic, rather than
    /// recovering and continuing.
    pub strict: bool,
    /// Hard cap on nested container depth.
    pub max_depth: usize,
    /// Skip `//...` and `/*...*/` spans as whitespace.
    pub allow_comments: bool,
    /// A separator immediately before a closer is not a diagnostic.
    pub allow_trailing_comma: bool,
    /// Accept `True`/`False`/`None` as `true`/`false`/`null`, with a
    /// diagnostic.
    pub convert_python_tokens: bool,
    /// Accept `undefined` as `null`, with a diagnostic.
    pub convert_undefined: bool,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            strict: false,
            max_depth: 100,
            allow_comments: true,
            allow_trailing_comma: true,
            convert_python_tokens: true,
            convert_undefined: true,
        }
    }
}
