//! CLI command implementations
//!
//! All command functions return `CliResult<ExitCode>` instead of calling
//! `process::exit`. Error handling and exits happen in the top-level `run()`.

use crate::config::{SuiteConfig, SuiteOrder};
use crate::fixtures::{self, Fixture};
use crate::manifest::{Manifest, render_json};

use super::{CliResult, ExitCode};

/// Build manifests for the selected fixtures and print them to stdout.
pub fn list(fixture: Option<&str>, json: bool, order: SuiteOrder) -> CliResult<ExitCode> {
    let output = render_list(fixture, json, order)?;
    print!("{output}");
    Ok(ExitCode::SUCCESS)
}

/// Produce the text `list` prints.
pub fn render_list(fixture: Option<&str>, json: bool, order: SuiteOrder) -> CliResult<String> {
    let selected: Vec<&Fixture> = match fixture {
        Some(name) => vec![fixtures::lookup(name)?],
        None => fixtures::ALL.iter().collect(),
    };

    let config = SuiteConfig::new().with_order(order);
    let manifests = selected
        .iter()
        .map(|f| f.manifest(&config))
        .collect::<Result<Vec<Manifest>, _>>()?;

    for manifest in &manifests {
        let mismatches = manifest.mismatches();
        if mismatches > 0 {
            tracing::warn!(module = %manifest.module, mismatches, "suite contains checks that do not hold");
        }
    }

    if json {
        let mut out = render_json(&manifests)?;
        out.push('\n');
        Ok(out)
    } else {
        Ok(manifests.iter().map(Manifest::render_text).collect())
    }
}
