//! `tower-conformance`: verifies every layer of the number tower under
//! explicit sample bounds.
//!
//! Runs the complete conformance suite:
//! - Peano axioms on both natural carriers, and the set view
//! - Round trip and operation preservation for the six bridges
//! - The embedding chain
//! - Quotient laws, √2 convergence, and the imaginary collapse
//!
//! **Usage:**
//! ```text
//! tower-conformance [--quick] [--json] [--integer <n>] [--sqrt-iterations <n>] ...
//! ```
//!
//! Logging goes to stderr and follows `RUST_LOG` (default `info`).
//! Exits non-zero if any conformance check fails.

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

use std::process;

use anyhow::{Context, Result};
use clap::Parser;
use tower_conformance::{run_all, Severity, VerificationBounds};
use tracing_subscriber::EnvFilter;

/// Run the number tower conformance suite.
#[derive(Parser)]
#[command(
    name = "tower-conformance",
    about = "Verify the number tower against its efficient counterparts"
)]
struct Args {
    /// Start from the small smoke-test bounds instead of the defaults.
    #[arg(long)]
    quick: bool,

    /// Print the report as JSON instead of text.
    #[arg(long)]
    json: bool,

    /// Naturals 0..=n for the ℕ bridge.
    #[arg(long)]
    natural: Option<u32>,

    /// Integers -n..=n for the ℤ bridge.
    #[arg(long)]
    integer: Option<u32>,

    /// Numerator bound for the ℚ bridge and the quotient laws.
    #[arg(long)]
    rational: Option<u32>,

    /// Dyadic sample bound for the ℝ and iℝ bridges.
    #[arg(long)]
    real: Option<u32>,

    /// Sample half-width for the ℂ bridge and the imaginary collapse.
    #[arg(long)]
    complex: Option<u32>,

    /// Naturals 0..=n for the embedding chain.
    #[arg(long)]
    embedding: Option<u32>,

    /// Sample size for the Peano axioms and the set view.
    #[arg(long)]
    axiom_samples: Option<u64>,

    /// Terms inspected by the Cauchy prefix check.
    #[arg(long)]
    cauchy_prefix: Option<u64>,

    /// Bisection steps for the square root of two.
    #[arg(long)]
    sqrt_iterations: Option<u32>,
}

impl Args {
    fn bounds(&self) -> VerificationBounds {
        let base = if self.quick {
            VerificationBounds::quick()
        } else {
            VerificationBounds::default()
        };
        VerificationBounds {
            natural: self.natural.unwrap_or(base.natural),
            integer: self.integer.unwrap_or(base.integer),
            rational: self.rational.unwrap_or(base.rational),
            real: self.real.unwrap_or(base.real),
            complex: self.complex.unwrap_or(base.complex),
            embedding: self.embedding.unwrap_or(base.embedding),
            axiom_samples: self.axiom_samples.unwrap_or(base.axiom_samples),
            cauchy_prefix: self.cauchy_prefix.unwrap_or(base.cauchy_prefix),
            sqrt_iterations: self.sqrt_iterations.unwrap_or(base.sqrt_iterations),
        }
    }
}

fn main() -> Result<()> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let bounds = args.bounds();
    let report = run_all(&bounds).context("invalid verification bounds")?;

    if args.json {
        println!("{}", report.to_json().context("failed to serialize report")?);
    } else {
        println!("Number Tower Conformance Report");
        println!("===============================");
        println!();

        for result in &report.results {
            let status = match result.severity {
                Severity::Pass => "PASS",
                Severity::Warning => "WARN",
                Severity::Failure => "FAIL",
            };
            println!("[{}] {}: {}", status, result.validator, result.message);
            for detail in &result.details {
                println!("       {}", detail);
            }
        }

        println!();
        println!(
            "Summary: {} passed, {} warnings, {} failed",
            report.count(Severity::Pass),
            report.count(Severity::Warning),
            report.failure_count()
        );
    }

    let failed = report.failure_count();
    if failed > 0 {
        eprintln!("Conformance FAILED: {} check(s) did not pass.", failed);
        process::exit(1);
    }

    if !args.json {
        println!("Conformance PASSED.");
    }
    Ok(())
}
