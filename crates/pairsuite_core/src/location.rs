//! Source locations used as label prefixes.
//!
//! Rendered the way compiler diagnostics print them: `File "<file>", line <line>, characters <column>`.

use std::fmt::{self, Display};

/// A position in a test source file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Location {
    pub file: &'static str,
    pub line: u32,
    pub column: u32,
}

impl Location {
    pub const fn new(file: &'static str, line: u32, column: u32) -> Self {
        Self { file, line, column }
    }

    /// Location of the caller (propagates through `#[track_caller]` functions).
    #[track_caller]
    pub fn caller() -> Self {
        let loc = std::panic::Location::caller();
        Self::new(loc.file(), loc.line(), loc.column())
    }
}

impl Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "File \"{}\", line {}, characters {}",
            self.file, self.line, self.column
        )
    }
}
