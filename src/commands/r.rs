//! R package handling through the host's R engine.
//!
//! Version pinning is not supported for R packages; the orchestration
//! rejects pinned specs before this module is reached.

use anyhow::Result;
use log::{debug, warn};

use crate::host::HostSession;
use crate::tokens::PackageSpec;

/// Install each R package from CRAN.
pub(crate) fn install<H: HostSession>(host: &H, specs: &[PackageSpec]) -> Result<()> {
    for spec in specs {
        println!("**** Installing R package {} ****", spec.name);
        let program = install_program(&spec.name);
        debug!("Submitting R program for {}", spec.name);
        match host.run_r_program(&program) {
            Ok(output) => super::echo_output(&spec.name, &output),
            Err(err) => warn!("Could not run the R engine for {}: {err:#}", spec.name),
        }
    }
    Ok(())
}

/// The per-package program. A fresh engine session may have the repos option
/// still at the "@CRAN@" placeholder, so the program points it at the cloud
/// mirror before installing.
fn install_program(package: &str) -> String {
    format!(
        r#"r = getOption("repos")
if (r == "@CRAN@") {{
  r["CRAN"] <- "https://cloud.r-project.org"
  options(repos = r)
}}
install.packages("{package}", quiet=TRUE)"#
    )
}
