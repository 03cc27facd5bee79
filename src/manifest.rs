//! Suite manifests
//!
//! A manifest is a description of a suite: one entry per assertion with its label, tag, rendered operands and
//! whether the comparison holds. Producing one is the only thing [`ManifestRunner`] does; it does not report
//! failures or affect exit status.

use std::fmt::Write as _;

use serde::Serialize;

use crate::error::SuiteError;
use crate::runner::SuiteRunner;
use crate::suite::Assertion;

/// One described assertion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ManifestEntry {
    pub label: String,
    pub kind: &'static str,
    pub left: String,
    pub right: String,
    pub holds: bool,
}

/// Description of a handed-off suite.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Manifest {
    pub module: String,
    pub entries: Vec<ManifestEntry>,
}

impl Manifest {
    /// Pretty-printed JSON.
    pub fn to_json(&self) -> Result<String, SuiteError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// One header line, then `<label>: <Kind>(<left>, <right>) -> <holds>` per entry.
    pub fn render_text(&self) -> String {
        let mut out = String::new();
        // Writing to String cannot fail.
        let _ = writeln!(out, "{} ({} assertion(s))", self.module, self.entries.len());
        for entry in &self.entries {
            let _ = writeln!(
                out,
                "  {}: {}({}, {}) -> {}",
                entry.label, entry.kind, entry.left, entry.right, entry.holds
            );
        }
        out
    }

    /// Number of entries whose comparison does not hold.
    pub fn mismatches(&self) -> usize {
        self.entries.iter().filter(|e| !e.holds).count()
    }
}

/// Render several manifests as one pretty-printed JSON array.
pub fn render_json(manifests: &[Manifest]) -> Result<String, SuiteError> {
    Ok(serde_json::to_string_pretty(manifests)?)
}

/// A [`SuiteRunner`] that invokes each deferred check once and describes the result.
#[derive(Debug, Default)]
pub struct ManifestRunner;

impl SuiteRunner for ManifestRunner {
    type Output = Manifest;

    fn run(&mut self, module_name: &str, pairs: Vec<Assertion>) -> Result<Manifest, SuiteError> {
        let entries = pairs
            .iter()
            .map(|assertion| {
                let check = assertion.check();
                ManifestEntry {
                    label: assertion.label().to_string(),
                    kind: check.kind().as_str(),
                    left: check.left().to_string(),
                    right: check.right().to_string(),
                    holds: check.holds(),
                }
            })
            .collect();

        Ok(Manifest {
            module: module_name.to_string(),
            entries,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SuiteConfig;
    use crate::runner::from_pair_suites;
    use crate::suite::Registrar;

    fn manifest_for(registrar: Registrar) -> Manifest {
        from_pair_suites("t.ml", registrar, &SuiteConfig::default(), &mut ManifestRunner).unwrap()
    }

    #[test]
    fn test_manifest_describes_each_assertion() {
        let mut registrar = Registrar::new();
        registrar.register("a", 0, 0);
        registrar.register_neq("b", "x", "x");

        let manifest = manifest_for(registrar);
        assert_eq!(manifest.module, "t.ml");
        assert_eq!(
            manifest.entries[0],
            ManifestEntry {
                label: "b id 2".to_string(),
                kind: "Neq",
                left: "\"x\"".to_string(),
                right: "\"x\"".to_string(),
                holds: false,
            }
        );
        assert_eq!(manifest.entries[1].label, "a id 1");
        assert_eq!(manifest.mismatches(), 1);
    }

    #[test]
    fn test_render_text() {
        let mut registrar = Registrar::new();
        registrar.register("L", 0, 0);

        let text = manifest_for(registrar).render_text();
        assert_eq!(text, "t.ml (1 assertion(s))\n  L id 1: Eq(0, 0) -> true\n");
    }

    #[test]
    fn test_json_fields() {
        let mut registrar = Registrar::new();
        registrar.register("L", 1, 2);

        let json = manifest_for(registrar).to_json().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["module"], "t.ml");
        assert_eq!(value["entries"][0]["label"], "L id 1");
        assert_eq!(value["entries"][0]["kind"], "Eq");
        assert_eq!(value["entries"][0]["holds"], false);
    }
}
