use assert_cmd::Command;
use predicates::prelude::*;

/// A command with every engine-related variable scrubbed.
fn statspkg() -> Command {
    let mut cmd = Command::cargo_bin("statspkg").unwrap();
    cmd.env_remove("SPSS_HOME")
        .env_remove("SPSSHOME")
        .env_remove("SPSS_SERVER_HOME")
        .env_remove("SPSS_EXTPATHS");
    cmd
}

#[test]
fn test_empty_request_fails() {
    statspkg()
        .assert()
        .failure()
        .stderr(predicate::str::contains("No packages to install were specified."));
}

#[test]
fn test_too_many_versions_fails_validation() {
    statspkg()
        .args(["--python", "numpy", "1.2.3", "2.0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Too many version numbers specified"));
}

#[test]
fn test_r_version_spec_fails_validation() {
    statspkg()
        .args(["--r", "ggplot2", "3.4.0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "Version specifications for R packages are not currently supported",
        ));
}

#[test]
fn test_docs_flag_overrides_package_work() {
    // With --docs present the package lists are ignored entirely: the
    // command succeeds even though the scrubbed environment could never
    // resolve an install target.
    statspkg()
        .args(["--docs", "--python", "numpy"])
        .assert()
        .success()
        .stdout(predicate::str::contains("*** Installing").not())
        .stderr(predicate::str::contains("Could not find").not());
}

#[test]
fn test_install_without_engine_environment_fails() {
    // Whatever the platform, a scrubbed environment cannot resolve an
    // install target.
    statspkg()
        .args(["--python", "numpy"])
        .assert()
        .failure();
}

#[cfg(target_os = "linux")]
mod linux {
    use super::*;
    use std::os::unix::fs::PermissionsExt;
    use tempfile::tempdir;

    /// Fake engine home with a statisticspython3 launcher that echoes its
    /// arguments and exits with the given status.
    fn fake_engine_home(exit_code: i32) -> tempfile::TempDir {
        let home = tempdir().unwrap();
        let bin = home.path().join("bin");
        std::fs::create_dir(&bin).unwrap();
        let launcher = bin.join("statisticspython3");
        std::fs::write(
            &launcher,
            format!("#!/bin/sh\necho \"FAKE-PIP $@\"\nexit {exit_code}\n"),
        )
        .unwrap();
        std::fs::set_permissions(&launcher, std::fs::Permissions::from_mode(0o755)).unwrap();
        home
    }

    #[test]
    fn test_missing_server_home_is_reported() {
        statspkg()
            .args(["--uninstall", "scipy"])
            .assert()
            .failure()
            .stderr(predicate::str::contains(
                "Could not find SPSS_SERVER_HOME environment variable",
            ));
    }

    #[test]
    fn test_install_drives_pip_with_pinned_version() {
        let home = fake_engine_home(0);
        let target = tempdir().unwrap();

        statspkg()
            .env("SPSS_SERVER_HOME", home.path())
            .env("SPSS_EXTPATHS", target.path())
            .args(["--python", "numpy", "1.2.3", "pandas"])
            .assert()
            .success()
            .stdout(predicate::str::contains("*** Installing Python package numpy"))
            .stdout(predicate::str::contains(
                "install -U --no-cache-dir -t",
            ))
            .stdout(predicate::str::contains("numpy==1.2.3"))
            .stdout(predicate::str::contains("*** Installing Python package pandas"))
            .stdout(predicate::str::contains("FAKE-PIP"));
    }

    #[test]
    fn test_uninstall_drives_pip() {
        let home = fake_engine_home(0);

        statspkg()
            .env("SPSS_SERVER_HOME", home.path())
            .args(["--uninstall", "scipy"])
            .assert()
            .success()
            .stdout(predicate::str::contains("*** Uninstalling Python package scipy"))
            .stdout(predicate::str::contains("uninstall -y scipy"));
    }

    #[test]
    fn test_per_package_failures_do_not_fail_the_command() {
        let home = fake_engine_home(1);
        let target = tempdir().unwrap();

        statspkg()
            .env("SPSS_SERVER_HOME", home.path())
            .env("SPSS_EXTPATHS", target.path())
            .args(["--python", "numpy", "pandas"])
            .assert()
            .success()
            .stdout(predicate::str::contains("*** Installing Python package numpy"))
            .stdout(predicate::str::contains("*** Installing Python package pandas"));
    }

    #[test]
    fn test_home_must_be_an_existing_directory() {
        statspkg()
            .env("SPSS_SERVER_HOME", "/no/such/engine/home")
            .args(["--uninstall", "scipy"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("existing directory"));
    }
}
