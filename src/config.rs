//! Handoff configuration

use std::fmt;
use std::str::FromStr;

use crate::error::SuiteError;

/// Order in which a suite is handed to its runner.
///
/// Registration always records assertions chronologically; the order only applies at handoff.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SuiteOrder {
    /// Most recent registration first (the list-prepend order test modules have always produced).
    #[default]
    NewestFirst,
    /// Registration order.
    Chronological,
}

impl SuiteOrder {
    pub fn as_str(self) -> &'static str {
        match self {
            SuiteOrder::NewestFirst => "newest-first",
            SuiteOrder::Chronological => "chronological",
        }
    }
}

impl fmt::Display for SuiteOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SuiteOrder {
    type Err = SuiteError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "newest-first" => Ok(SuiteOrder::NewestFirst),
            "chronological" => Ok(SuiteOrder::Chronological),
            other => Err(SuiteError::UnknownOrder(other.to_string())),
        }
    }
}

/// Suite handoff configuration
#[derive(Debug, Clone, Default)]
pub struct SuiteConfig {
    /// Order of assertions passed to the runner
    pub order: SuiteOrder,
}

impl SuiteConfig {
    /// Create a new config with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the handoff order
    pub fn with_order(mut self, order: SuiteOrder) -> Self {
        self.order = order;
        self
    }
}
