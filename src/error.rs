//! Error taxonomy for suite handoff and fixture lookup.
//!
//! Registration itself never fails; these errors only arise once a suite leaves the registrar.

use thiserror::Error;

/// Errors that occur after registration (handoff, lookup, rendering).
#[derive(Debug, Error)]
pub enum SuiteError {
    #[error("unknown fixture '{0}'")]
    UnknownFixture(String),

    #[error("unknown suite order '{0}' (expected 'newest-first' or 'chronological')")]
    UnknownOrder(String),

    #[error("suite runner failed: {0}")]
    Runner(String),

    #[error("failed to serialize manifest: {0}")]
    Serialize(#[from] serde_json::Error),
}
