//! The append-only diagnostic log a parse run accumulates.

use serde::{Deserialize, Serialize};

/// A single recovery, recorded at the byte position it was detected.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Diagnostic {
    pub position: usize,
    pub message: String,
}

impl Diagnostic {
    pub fn new(position: usize, message: impl Into<String>) -> Self {
        Self {
            position,
            message: message.into(),
        }
    }

    /// `"[pos <N>] <message>"`, the one wire format this crate emits.
    pub fn format(&self) -> String {
        format!("[pos {}] {}", self.position, self.message)
    }
}

impl std::fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.format())
    }
}

/// Ordered, append-only. Order matches the chronological order in which
/// recoveries occurred during the parse.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Log {
    entries: Vec<Diagnostic>,
}

impl Log {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, position: usize, message: impl Into<String>) {
        self.entries.push(Diagnostic::new(position, message));
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn first(&self) -> Option<&Diagnostic> {
        self.entries.first()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Diagnostic> {
        self.entries.iter()
    }

    pub fn into_vec(self) -> Vec<Diagnostic> {
        self.entries
    }

    pub fn formatted(&self) -> Vec<String> {
        self.entries.iter().map(Diagnostic::format).collect()
    }
}
