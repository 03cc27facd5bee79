//! Regression fixtures expressed against the registrar.
//!
//! Each fixture is a test module: a name, the module name its suite is handed off under, and a function that
//! registers its assertions.

pub mod gpr_1667;

use crate::config::SuiteConfig;
use crate::error::SuiteError;
use crate::manifest::{Manifest, ManifestRunner};
use crate::runner::{SuiteRunner, from_pair_suites};
use crate::suite::Registrar;

/// A registered regression fixture.
#[derive(Debug, Clone, Copy)]
pub struct Fixture {
    /// Short name used on the command line (e.g. `gpr_1667`).
    pub name: &'static str,
    /// Module name the suite is reported under (e.g. `gpr_1667_test.ml`).
    pub module: &'static str,
    /// Registers the fixture's assertions.
    pub register: fn(&mut Registrar),
}

impl Fixture {
    /// Register into a fresh registrar and hand the suite to `runner`.
    pub fn run_with<R: SuiteRunner>(&self, config: &SuiteConfig, runner: &mut R) -> Result<R::Output, SuiteError> {
        let mut registrar = Registrar::new();
        (self.register)(&mut registrar);
        from_pair_suites(self.module, registrar, config, runner)
    }

    pub fn manifest(&self, config: &SuiteConfig) -> Result<Manifest, SuiteError> {
        self.run_with(config, &mut ManifestRunner)
    }
}

/// Every known fixture, sorted by name.
pub const ALL: &[Fixture] = &[Fixture {
    name: gpr_1667::NAME,
    module: gpr_1667::MODULE_NAME,
    register: gpr_1667::register,
}];

/// Find a fixture by short name or module name.
pub fn lookup(name: &str) -> Result<&'static Fixture, SuiteError> {
    ALL.iter()
        .find(|f| f.name == name || f.module == name)
        .ok_or_else(|| SuiteError::UnknownFixture(name.to_string()))
}
