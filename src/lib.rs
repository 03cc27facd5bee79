#![forbid(unsafe_code)]
//! pairsuite: labelled, deferred equality checks for compiler regression suites
//!
//! A test module owns a [`Registrar`]. Every registration records an assertion whose label is the caller's
//! location plus a running id, and whose check is deferred until a [`SuiteRunner`] receives the suite through
//! [`from_pair_suites`].
//!
//! ## Panic Policy
//!
//! - **Production code**: Use `Result` or `Option` with `?` / `ok_or` / `map_err`. The `cli` module enforces
//!   `#![deny(clippy::unwrap_used)]`.
//!
//! - **Test code**: `.unwrap()` and `.expect()` are acceptable in tests.

pub mod cli;
pub mod config;
pub mod error;
pub mod fixtures;
pub mod manifest;
pub mod runner;
pub mod suite;
pub mod version;

pub use pairsuite_core::{Check, CheckKind, Location};

pub use config::{SuiteConfig, SuiteOrder};
pub use error::SuiteError;
pub use manifest::{Manifest, ManifestEntry, ManifestRunner};
pub use runner::{SuiteRunner, from_pair_suites};
pub use suite::{Assertion, Deferred, Registrar, Suite};
