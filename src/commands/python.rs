//! Python package handling through the engine's bundled pip.

use anyhow::Result;
use log::{debug, warn};
use std::path::Path;

use crate::host::HostSession;
use crate::location::{self, EngineLocation};
use crate::runtime::Runtime;
use crate::tokens::PackageSpec;

/// Install each package into the configured extension directory, pinning the
/// version where one was given.
pub(crate) fn install<R: Runtime, H: HostSession>(
    runtime: &R,
    host: &H,
    specs: &[PackageSpec],
) -> Result<()> {
    if specs.is_empty() {
        return Ok(());
    }
    let engine = location::engine_location(runtime)?;
    let target = location::target_location(runtime)?;

    for spec in specs {
        println!(
            "*** Installing Python package {} into {} ***",
            spec.name,
            target.display()
        );
        submit(host, &spec.name, &install_command(&engine, &target, spec));
    }
    Ok(())
}

/// Uninstall each listed package unconditionally. An empty list is a no-op
/// and resolves no environment.
pub(crate) fn uninstall<R: Runtime, H: HostSession>(
    runtime: &R,
    host: &H,
    packages: &[String],
) -> Result<()> {
    if packages.is_empty() {
        return Ok(());
    }
    let engine = location::engine_location(runtime)?;

    for name in packages {
        println!("*** Uninstalling Python package {name} ***");
        submit(host, name, &uninstall_command(&engine, name));
    }
    Ok(())
}

/// Shared command head: optional macOS prelude, quoted launcher path, pip.
fn pip_prefix(engine: &EngineLocation) -> String {
    let launcher = engine.bin_dir.join("statisticspython3");
    let mut command = String::new();
    if let Some(prelude) = &engine.shell_prelude {
        command.push_str(prelude);
        command.push_str(" && ");
    }
    command.push_str(&format!(
        r#""{}" -m pip --disable-pip-version-check"#,
        launcher.display()
    ));
    command
}

fn install_command(engine: &EngineLocation, target: &Path, spec: &PackageSpec) -> String {
    format!(
        r#"{} install -U --no-cache-dir -t "{}" {}{}"#,
        pip_prefix(engine),
        target.display(),
        spec.name,
        spec.pip_constraint()
    )
}

fn uninstall_command(engine: &EngineLocation, name: &str) -> String {
    format!("{} uninstall -y {name}", pip_prefix(engine))
}

/// Run one pip command and echo its output. Failures are reported and
/// swallowed so the rest of the batch still runs.
fn submit<H: HostSession>(host: &H, name: &str, command: &str) {
    debug!("Submitting: {command}");
    match host.run_shell(command) {
        Ok(output) => super::echo_output(name, &output),
        Err(err) => warn!("Could not run the package manager for {name}: {err:#}"),
    }
}
