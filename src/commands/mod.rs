//! Install/uninstall orchestration.
//!
//! One request carries up to three token lists: Python packages to install
//! (names with optional version qualifiers), R packages to install, and
//! Python packages to uninstall. All validation happens before any
//! subprocess runs; after that, each package is processed independently and
//! a failure never aborts the rest of the batch.

use anyhow::{Result, bail};
use log::warn;

use crate::host::{HostOutput, HostSession};
use crate::runtime::Runtime;
use crate::tokens;

mod python;
mod r;

/// Raw token lists as supplied by the caller.
#[derive(Debug, Clone, Default)]
pub struct PackageRequest {
    pub python: Vec<String>,
    pub r: Vec<String>,
    pub uninstall: Vec<String>,
}

/// Execute a package request: uninstalls first, then Python installs, then
/// R installs.
pub fn run<R: Runtime, H: HostSession>(
    runtime: &R,
    host: &H,
    request: &PackageRequest,
) -> Result<()> {
    let python_specs = tokens::pair(&request.python)?;
    let r_specs = tokens::pair(&request.r)?;
    if r_specs.iter().any(|spec| !spec.is_wildcard()) {
        bail!("Version specifications for R packages are not currently supported");
    }

    if python_specs.is_empty() && r_specs.is_empty() && request.uninstall.is_empty() {
        bail!("No packages to install were specified.");
    }

    python::uninstall(runtime, host, &request.uninstall)?;
    python::install(runtime, host, &python_specs)?;
    r::install(host, &r_specs)?;
    Ok(())
}

/// Echo a command's captured output to the console, success or not.
fn echo_output(name: &str, output: &HostOutput) {
    if !output.stdout.is_empty() {
        print!("{}", output.stdout);
    }
    if !output.stderr.is_empty() {
        eprint!("{}", output.stderr);
    }
    if !output.success {
        warn!("Package manager reported failure for {name}");
    }
}
