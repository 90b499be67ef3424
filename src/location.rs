//! Environment resolution for the statistics engine.
//!
//! The engine's install directory comes from a platform-specific environment
//! variable, and the directory packages are installed into comes from the
//! host-exposed extension-paths setting. Both lookups go through [`Runtime`]
//! so they can be mocked.

use anyhow::{Context, Result, bail};
use log::debug;
use std::path::PathBuf;

use crate::runtime::Runtime;

/// Engine home on Windows.
pub const WINDOWS_HOME_VAR: &str = "SPSS_HOME";
/// Engine home on macOS. Not always set; see [`engine_location`].
pub const MACOS_HOME_VAR: &str = "SPSSHOME";
/// Engine home on Linux (server installs).
pub const LINUX_HOME_VAR: &str = "SPSS_SERVER_HOME";
/// PATH-style list of configured extension install locations, exported by
/// the host from its EXTPATHS setting. The first entry is the install target.
pub const EXTPATHS_VAR: &str = "SPSS_EXTPATHS";

/// Fixed application-bundle location used on macOS when SPSSHOME is unset.
const MACOS_APP_CONTENTS: &str =
    "/Applications/IBM SPSS Statistics/SPSS Statistics.app/Contents";

/// Where the engine's interpreter launchers live, plus any shell prelude an
/// invocation needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineLocation {
    pub bin_dir: PathBuf,
    /// Prepended to engine shell commands. On macOS the statisticspython3
    /// launcher fails without SPSSHOME in its environment, so when the
    /// variable is unset the command carries its own export.
    pub shell_prelude: Option<String>,
}

/// Resolve the engine's binary directory for the current platform.
///
/// Three-way dispatch on the OS family; anything else is a fatal
/// environment error. On Windows and Linux the home variable must name an
/// existing directory.
pub fn engine_location<R: Runtime>(runtime: &R) -> Result<EngineLocation> {
    let os = runtime.os();
    debug!("Resolving engine location for platform {os}");

    match os.as_str() {
        "windows" => {
            let home = home_dir(runtime, WINDOWS_HOME_VAR)?;
            Ok(EngineLocation {
                bin_dir: home,
                shell_prelude: None,
            })
        }
        "macos" => {
            let shell_prelude = match runtime.env_var(MACOS_HOME_VAR) {
                Ok(_) => None,
                Err(_) => Some(format!(r#"export SPSSHOME="{MACOS_APP_CONTENTS}""#)),
            };
            Ok(EngineLocation {
                bin_dir: PathBuf::from(MACOS_APP_CONTENTS).join("bin"),
                shell_prelude,
            })
        }
        "linux" => {
            let home = home_dir(runtime, LINUX_HOME_VAR)?;
            Ok(EngineLocation {
                bin_dir: home.join("bin"),
                shell_prelude: None,
            })
        }
        other => bail!("Could not find the Statistics location on platform \"{other}\""),
    }
}

fn home_dir<R: Runtime>(runtime: &R, var: &str) -> Result<PathBuf> {
    let home = runtime
        .env_var(var)
        .map_err(|_| anyhow::anyhow!("Could not find {var} environment variable"))?;
    let home = PathBuf::from(home);
    if !runtime.is_dir(&home) {
        bail!("{var} does not name an existing directory: {}", home.display());
    }
    Ok(home)
}

/// Resolve the directory installed packages should go into.
///
/// Uses the first entry of the host's configured extension locations.
pub fn target_location<R: Runtime>(runtime: &R) -> Result<PathBuf> {
    let raw = runtime.env_var(EXTPATHS_VAR).map_err(|_| {
        anyhow::anyhow!("No extension install locations are configured ({EXTPATHS_VAR} is unset)")
    })?;

    std::env::split_paths(&raw)
        .find(|p| !p.as_os_str().is_empty())
        .context("No extension install locations are configured")
}
