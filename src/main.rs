use anyhow::Result;
use clap::Parser;
use statspkg::commands::{self, PackageRequest};
use statspkg::host::RealHostSession;
use statspkg::runtime::RealRuntime;

/// statspkg - package installer for the Statistics scripting engines
///
/// Install or uninstall third-party packages for the embedded Python and R
/// interpreters by driving each ecosystem's package manager. A Python package
/// name may be followed by a version spec ("1.26.4"); unversioned packages
/// get the latest release. R packages cannot be pinned.
///
/// Examples:
///   statspkg --python numpy "1.26.4" pandas
///   statspkg --r ggplot2 --uninstall scipy
#[derive(Parser, Debug)]
#[command(author, version = env!("STATSPKG_VERSION"), about)]
struct Cli {
    /// Python packages to install, with optional version specs
    #[arg(long = "python", value_name = "PKG|VER", num_args = 1..)]
    python: Vec<String>,

    /// R packages to install
    #[arg(long = "r", value_name = "PKG", num_args = 1..)]
    r: Vec<String>,

    /// Python packages to uninstall
    #[arg(long = "uninstall", value_name = "PKG", num_args = 1..)]
    uninstall: Vec<String>,

    /// Open the command documentation in the default browser and exit
    #[arg(long)]
    docs: bool,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let cli = Cli::parse();
    let runtime = RealRuntime;
    let host = RealHostSession;

    // The docs flag overrides everything else.
    if cli.docs {
        return statspkg::help::open(&runtime, &host);
    }

    commands::run(
        &runtime,
        &host,
        &PackageRequest {
            python: cli.python,
            r: cli.r,
            uninstall: cli.uninstall,
        },
    )
}
