// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! # xtask
//!
//! Developer tasks for the care shift marketplace workspace.
//!
//! - `cargo xtask ci` checks layering, formatting, clippy, docs and tests
//! - `cargo xtask test -p care-shifts-api` tests one workspace crate
//! - `cargo xtask serve` starts the HTTP server with demo data loaded
//! - `cargo xtask layers` checks that crates only depend downwards
//!
//! Every task shells out to cargo through `duct` and logs the command line
//! before running it.

#![deny(
    clippy::pedantic,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all
)]

use std::{io, process::Output};

use cargo_metadata::{DependencyKind, Metadata, MetadataCommand};
use clap::{Parser, Subcommand};
use clap_verbosity_flag::{InfoLevel, Verbosity};
use color_eyre::{
    Result,
    eyre::{Context, bail},
};
use duct::cmd;
use tracing::level_filters::LevelFilter;
use tracing_log::AsTrace;

/// The server binary package.
const SERVER_PACKAGE: &str = "care-shifts-server";

/// Workspace crates from the bottom layer up. A crate may only depend on
/// crates listed before it.
const LAYERS: [&str; 5] = [
    "care-shifts-domain",
    "care-shifts-audit",
    "care-shifts",
    "care-shifts-api",
    SERVER_PACKAGE,
];

fn main() -> Result<()> {
    color_eyre::install()?;
    let args = Args::parse();
    tracing_subscriber::fmt()
        .with_max_level(args.log_level())
        .without_time()
        .init();

    if let Err(err) = args.command.run() {
        tracing::error!("{err:#}");
        std::process::exit(1);
    }
    Ok(())
}

#[derive(Debug, Parser)]
#[command(bin_name = "cargo xtask", styles = clap_cargo::style::CLAP_STYLING)]
struct Args {
    #[command(subcommand)]
    command: Command,

    #[command(flatten)]
    verbosity: Verbosity<InfoLevel>,
}

impl Args {
    fn log_level(&self) -> LevelFilter {
        self.verbosity.log_level_filter().as_trace()
    }
}

#[derive(Clone, Debug, Subcommand)]
enum Command {
    /// Layering, formatting, clippy, docs and tests
    CI,

    /// Formatting check, clippy and docs
    #[command(visible_alias = "l")]
    Lint,

    /// Format the workspace
    #[command(visible_alias = "fmt")]
    Format,

    /// Check that no crate depends on a crate above it
    Layers,

    /// Run tests, optionally for one workspace crate
    #[command(visible_alias = "t")]
    Test {
        /// Workspace package to test
        #[arg(short, long)]
        package: Option<String>,
    },

    /// Write an lcov report to target/lcov.info
    #[command(visible_alias = "cov")]
    Coverage,

    /// Run the server
    #[command(visible_alias = "s")]
    Serve {
        /// Port to bind the server to
        #[arg(short, long, default_value_t = 3000)]
        port: u16,

        /// IANA timezone for shift dates and start times
        #[arg(short, long, default_value = "Europe/London")]
        timezone: String,

        /// Start with an empty marketplace instead of the demo records
        #[arg(long)]
        empty: bool,
    },
}

impl Command {
    fn run(self) -> Result<()> {
        match self {
            Self::CI => ci(),
            Self::Lint => lint(),
            Self::Format => run_cargo_nightly(&["fmt", "--all"]),
            Self::Layers => layers(&workspace_metadata()?),
            Self::Test { package } => test(package.as_deref()),
            Self::Coverage => run_cargo(&[
                "llvm-cov",
                "--lcov",
                "--output-path",
                "target/lcov.info",
                "--all-features",
            ]),
            Self::Serve {
                port,
                timezone,
                empty,
            } => serve(port, &timezone, empty),
        }
    }
}

fn ci() -> Result<()> {
    layers(&workspace_metadata()?)?;
    lint()?;
    test(None)
}

fn lint() -> Result<()> {
    run_cargo_nightly(&["fmt", "--all", "--check"])?;
    run_cargo(&[
        "clippy",
        "--all-targets",
        "--all-features",
        "--",
        "-D",
        "warnings",
    ])?;
    lint_docs(&workspace_metadata()?)
}

/// Builds each crate's docs with docs.rs-equivalent flags.
fn lint_docs(meta: &Metadata) -> Result<()> {
    for package in meta.workspace_packages() {
        if package.name.as_str() == "xtask" {
            continue;
        }
        cmd(
            "cargo",
            [
                "doc",
                "--no-deps",
                "--all-features",
                "--package",
                package.name.as_str(),
            ],
        )
        .env_remove("CARGO")
        .env("RUSTUP_TOOLCHAIN", "nightly")
        .env("RUSTDOCFLAGS", "--cfg docsrs -D warnings")
        .run_with_trace()?;
    }
    Ok(())
}

fn layers(meta: &Metadata) -> Result<()> {
    let mut violations: Vec<String> = Vec::new();
    for package in meta.workspace_packages() {
        let Some(level) = layer_of(package.name.as_str()) else {
            continue;
        };
        for dependency in &package.dependencies {
            if dependency.kind != DependencyKind::Normal {
                continue;
            }
            if let Some(target) = layer_of(&dependency.name) {
                if target >= level {
                    let edge: String = format!("{} -> {}", package.name.as_str(), dependency.name);
                    violations.push(edge);
                }
            }
        }
    }

    if !violations.is_empty() {
        bail!("crates depend upwards: {}", violations.join(", "));
    }
    tracing::info!(crates = LAYERS.len(), "Crate layering holds");
    Ok(())
}

fn layer_of(name: &str) -> Option<usize> {
    LAYERS.iter().position(|layer| *layer == name)
}

fn test(package: Option<&str>) -> Result<()> {
    let Some(package) = package else {
        run_cargo(&["test", "--all-targets", "--all-features"])?;
        // Doc tests last, they are the slowest.
        return run_cargo(&["test", "--doc", "--all-features"]);
    };

    let meta: Metadata = workspace_metadata()?;
    if !meta
        .workspace_packages()
        .iter()
        .any(|p| p.name.as_str() == package)
    {
        bail!("'{package}' is not a workspace package");
    }
    run_cargo(&["test", "--all-targets", "--package", package])
}

fn serve(port: u16, timezone: &str, empty: bool) -> Result<()> {
    let port: String = port.to_string();
    let mut args: Vec<&str> = vec![
        "run",
        "--package",
        SERVER_PACKAGE,
        "--",
        "--port",
        &port,
        "--timezone",
        timezone,
    ];
    if !empty {
        args.push("--seed-demo");
    }
    run_cargo(&args).wrap_err("server exited with an error")
}

fn workspace_metadata() -> Result<Metadata> {
    MetadataCommand::new()
        .no_deps()
        .exec()
        .wrap_err("failed to get cargo metadata")
}

fn run_cargo(args: &[&str]) -> Result<()> {
    cmd("cargo", args).run_with_trace()?;
    Ok(())
}

fn run_cargo_nightly(args: &[&str]) -> Result<()> {
    cmd("cargo", args)
        // Set by cargo when running a subcommand; it would pin the toolchain.
        .env_remove("CARGO")
        .env("RUSTUP_TOOLCHAIN", "nightly")
        .run_with_trace()?;
    Ok(())
}

/// Logs a `duct::Expression` before running it.
trait ExpressionExt {
    fn run_with_trace(&self) -> io::Result<Output>;
}

impl ExpressionExt for duct::Expression {
    fn run_with_trace(&self) -> io::Result<Output> {
        tracing::info!("running command: {:?}", self);
        self.run().inspect_err(|_| {
            tracing::error!("failed to run command: {:?}", self);
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layers_are_ordered_bottom_up() {
        assert_eq!(layer_of("care-shifts-domain"), Some(0));
        assert!(layer_of("care-shifts") < layer_of("care-shifts-api"));
        assert_eq!(layer_of(SERVER_PACKAGE), Some(LAYERS.len() - 1));
        assert_eq!(layer_of("xtask"), None);
    }

    #[test]
    fn test_args_parse_package_filter() {
        let args = Args::try_parse_from(["cargo xtask", "test", "-p", "care-shifts-api"]).unwrap();
        assert!(matches!(
            args.command,
            Command::Test { package: Some(ref p) } if p == "care-shifts-api"
        ));
    }

    #[test]
    fn test_serve_defaults_to_demo_data() {
        let args = Args::try_parse_from(["cargo xtask", "serve"]).unwrap();
        let Command::Serve {
            port,
            timezone,
            empty,
        } = args.command
        else {
            panic!("expected serve");
        };
        assert_eq!(port, 3000);
        assert_eq!(timezone, "Europe/London");
        assert!(!empty);
    }
}
