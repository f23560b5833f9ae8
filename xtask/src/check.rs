use anyhow::Result;
use colored::Colorize;
use std::time::Instant;

use crate::step::{self, OnFailure};

/// Bare-metal target used to prove the core stays `no_std`.
const EMBEDDED_TARGET: &str = "thumbv7em-none-eabihf";

pub fn run() -> Result<()> {
    println!();
    println!("{}", "🔍 Checking builds...".cyan().bold());
    println!();

    let start = Instant::now();

    for krate in ["platform", "ui", "firmware"] {
        step::cargo(
            &format!("Checking {krate} (no_std, {EMBEDDED_TARGET})"),
            &["check", "-p", krate, "--target", EMBEDDED_TARGET],
            OnFailure::Abort,
        )?;
    }

    step::cargo(
        "Checking firmware with defmt",
        &[
            "check",
            "-p",
            "firmware",
            "--target",
            EMBEDDED_TARGET,
            "--features",
            "defmt",
        ],
        OnFailure::Abort,
    )?;

    step::cargo(
        "Checking simulator (host)",
        &["check", "-p", "firmware", "--features", "emulator", "--examples"],
        OnFailure::Abort,
    )?;

    // Lints and formatting are reported, not enforced.
    step::cargo(
        "Running clippy",
        &["clippy", "--workspace", "--all-targets", "--", "-D", "warnings"],
        OnFailure::Warn,
    )?;
    if step::cargo("Checking formatting", &["fmt", "--all", "--check"], OnFailure::Warn)?
        .is_none()
    {
        eprintln!("     Run 'cargo fmt --all' to fix");
    }

    step::done("All checks completed", start);
    Ok(())
}
