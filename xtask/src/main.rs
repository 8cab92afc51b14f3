//! Build automation tasks for the wordfall demos
//!
//! Usage:
//!   cargo xtask dist     # Build release binaries and stage them in dist/
//!   cargo xtask clean    # Remove the dist/ staging directory

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use std::process::Command;

/// Binaries staged by `dist`.
const BINARIES: [&str; 2] = ["wordfall", "triangle"];

#[derive(Parser)]
#[command(name = "xtask")]
#[command(about = "Build automation for the wordfall demos")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build release binaries and stage them in dist/
    Dist,
    /// Remove the dist/ staging directory
    Clean,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Dist => dist(),
        Commands::Clean => clean(),
    }
}

/// Get the project root directory
fn project_root() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .expect("xtask lives one level below the project root")
        .to_path_buf()
}

/// Run a command and check for success
fn run_cmd(cmd: &mut Command) -> Result<()> {
    let status = cmd.status().context("Failed to execute command")?;
    if !status.success() {
        anyhow::bail!("Command failed with status: {}", status);
    }
    Ok(())
}

/// Build both demos in release mode and copy them into dist/.
fn dist() -> Result<()> {
    let root = project_root();
    let dist = root.join("dist");

    println!("Building release binaries...");
    run_cmd(
        Command::new("cargo")
            .current_dir(&root)
            .args(["build", "--release"]),
    )?;

    if dist.exists() {
        std::fs::remove_dir_all(&dist)?;
    }
    std::fs::create_dir_all(&dist)?;

    let exe_suffix = if cfg!(windows) { ".exe" } else { "" };
    for bin in BINARIES {
        let name = format!("{}{}", bin, exe_suffix);
        let built = root.join("target/release").join(&name);
        std::fs::copy(&built, dist.join(&name))
            .with_context(|| format!("Missing release binary {}", built.display()))?;
        println!("Staged {}", name);
    }

    println!("Done: {}", dist.display());
    Ok(())
}

/// Remove the staging directory.
fn clean() -> Result<()> {
    let dist = project_root().join("dist");
    if dist.exists() {
        std::fs::remove_dir_all(&dist)?;
        println!("Removed {}", dist.display());
    } else {
        println!("Nothing to clean");
    }
    Ok(())
}
