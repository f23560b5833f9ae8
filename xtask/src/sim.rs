use anyhow::{Context, Result};
use colored::Colorize;
use std::process::Command;

/// Run the tick-loop simulator in the foreground with its output attached.
pub fn run(log: &str) -> Result<()> {
    println!();
    println!("{}", "▶ Starting tick-loop simulator...".cyan().bold());
    println!();

    let status = Command::new("cargo")
        .args([
            "run",
            "-p",
            "firmware",
            "--example",
            "tick_loop",
            "--features",
            "emulator",
        ])
        .env("RUST_LOG", log)
        .status()
        .context("Failed to launch simulator")?;

    if !status.success() {
        anyhow::bail!("Simulator exited with {status}");
    }
    Ok(())
}
