//! Suite handoff
//!
//! A finished [`Registrar`] is handed, together with the module name, to a [`SuiteRunner`]. The runner owns
//! everything after that point: invoking the deferred checks, comparing, reporting, and deciding what a failure
//! means. This crate ships only the [`ManifestRunner`](crate::manifest::ManifestRunner), which describes a suite
//! without judging it.

use crate::config::SuiteConfig;
use crate::error::SuiteError;
use crate::suite::{Assertion, Registrar};

/// Receiver of a finished suite.
pub trait SuiteRunner {
    /// What the runner produces for a suite (a report, a manifest, `()`...).
    type Output;

    /// Consume the assertions registered by `module_name`.
    fn run(&mut self, module_name: &str, pairs: Vec<Assertion>) -> Result<Self::Output, SuiteError>;
}

/// Hand `registrar`'s suite to `runner`, in the order named by `config`.
///
/// ## Parameters
/// - `module_name`: name the runner reports the suite under (usually the test source file).
/// - `registrar`: consumed; registration is over once the suite is handed off.
/// - `config`: handoff settings.
/// - `runner`: the receiving runner.
///
/// ## Returns
/// - (`Result<R::Output, SuiteError>`): whatever the runner returns.
#[tracing::instrument(skip_all, fields(module = module_name, count = registrar.len(), order = %config.order))]
pub fn from_pair_suites<R: SuiteRunner>(
    module_name: &str,
    registrar: Registrar,
    config: &SuiteConfig,
    runner: &mut R,
) -> Result<R::Output, SuiteError> {
    let pairs = registrar.into_suite().into_pairs(config.order);
    tracing::debug!("handing suite to runner");
    runner.run(module_name, pairs)
}
