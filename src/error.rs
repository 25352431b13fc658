//! Error types for the secondary (direct) API and strict mode.
//!
//! Recoveries are never `Err`: they are diagnostics appended to the log.
//! This type exists only for the narrow set of conditions a non-strict
//! parse cannot represent as a diagnostic: strict mode's fatal
//! short-circuit, and a caller misusing the single-use direct API.

use crate::diagnostics::Diagnostic;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParseError {
    /// Strict mode's first diagnostic; the parse unwound with no partial
    /// tree.
    #[error("fatal: {0}")]
    Fatal(Diagnostic),

    /// The direct API's `Parser` is single-use; a caller that calls
    /// `parse()` twice gets this instead of silently reusing stale
    /// state.
    #[error("parser already consumed")]
    AlreadyConsumed,
}
