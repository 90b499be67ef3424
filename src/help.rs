//! Opens the command's HTML documentation in the default browser.

use anyhow::{Context, Result};
use log::debug;
use std::path::{Path, PathBuf};

use crate::host::HostSession;
use crate::runtime::Runtime;

/// Documentation file installed next to the binary.
const HELP_FILE: &str = "markdown.html";

/// Open the local documentation, best effort. A missing file or a failed
/// browser launch prints a notice and still returns `Ok`.
pub fn open<R: Runtime, H: HostSession>(runtime: &R, host: &H) -> Result<()> {
    let path = help_path()?;
    open_at(runtime, host, &path);
    Ok(())
}

fn open_at<R: Runtime, H: HostSession>(runtime: &R, host: &H, path: &Path) {
    let url = format!("file://{}", path.display());
    let launched = match opener(&runtime.os()) {
        Some(command) => {
            let command = format!(r#"{command} "{url}""#);
            debug!("Launching browser: {command}");
            host.run_shell(&command).map(|o| o.success).unwrap_or(false)
        }
        None => false,
    };
    if !launched {
        println!("Help file not found: {url}");
    }
}

fn help_path() -> Result<PathBuf> {
    let exe = std::env::current_exe().context("Failed to locate the command executable")?;
    Ok(exe.with_file_name(HELP_FILE))
}

fn opener(os: &str) -> Option<&'static str> {
    match os {
        "windows" => Some(r#"start """#),
        "macos" => Some("open"),
        "linux" => Some("xdg-open"),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::MockHostSession;
    use crate::runtime::MockRuntime;
    use crate::test_utils::ok_output;

    #[test]
    fn test_open_at_uses_platform_opener() {
        let mut runtime = MockRuntime::new();
        runtime.expect_os().returning(|| "linux".to_string());

        let mut host = MockHostSession::new();
        host.expect_run_shell()
            .withf(|cmd: &str| cmd == r#"xdg-open "file:///opt/docs/markdown.html""#)
            .times(1)
            .returning(|_| Ok(ok_output("")));

        open_at(&runtime, &host, Path::new("/opt/docs/markdown.html"));
    }

    #[test]
    fn test_open_at_unknown_platform_skips_launch() {
        let mut runtime = MockRuntime::new();
        runtime.expect_os().returning(|| "freebsd".to_string());
        let host = MockHostSession::new();

        // No run_shell expectation: nothing may be launched.
        open_at(&runtime, &host, Path::new("/opt/docs/markdown.html"));
    }

    #[test]
    fn test_opener_table() {
        assert_eq!(opener("macos"), Some("open"));
        assert_eq!(opener("linux"), Some("xdg-open"));
        assert!(opener("windows").unwrap().starts_with("start"));
        assert_eq!(opener("haiku"), None);
    }
}
