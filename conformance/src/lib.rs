//! Number tower conformance suite.
//!
//! Runs every verification entry point of `number-tower` under explicit
//! sample bounds and collects the outcomes into one report. Nothing is read
//! from disk; a run is fully determined by its [`VerificationBounds`].
//!
//! # Conformance Scope
//!
//! | Validator | Property |
//! |-----------|----------|
//! | `axioms` | Peano axioms on the successor chain and `BigUint`; set view |
//! | `isomorphism` | Round trip and operation preservation for ℕ, ℤ, ℚ, ℝ, ℂ, iℝ |
//! | `embedding` | ℕ ↪ ℤ ↪ ℚ ↪ ℝ ↪ ℂ is injective, homomorphic and commutes |
//! | `laws` | Integer equivalence, rational field law, density, zero division |
//! | `convergence` | √2 is Cauchy and approximates two from below |
//! | `collapse` | Products of imaginaries are real |
//!
//! # Entry Point
//!
//! ```no_run
//! use tower_conformance::{run_all, VerificationBounds};
//!
//! let report = run_all(&VerificationBounds::default()).expect("bounds are valid");
//! assert!(report.all_passed());
//! ```

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]
#![cfg_attr(test, allow(clippy::unwrap_used, clippy::expect_used))]

pub mod bounds;
pub mod report;
pub mod validators;

pub use bounds::{BoundsError, VerificationBounds};
pub use report::{ConformanceReport, Severity, TestResult};

/// Runs all validators and returns the aggregated report.
///
/// Validators are run in this order:
/// 1. Peano axioms on both natural carriers
/// 2. Set view of the successor chain
/// 3. Round trip per layer (six bridges)
/// 4. Embedding chain
/// 5. Quotient and field laws
/// 6. Cauchy convergence of √2
/// 7. Imaginary collapse
///
/// # Errors
///
/// Returns [`BoundsError`] when `bounds` fails validation; no check runs.
pub fn run_all(bounds: &VerificationBounds) -> Result<ConformanceReport, BoundsError> {
    bounds.validate()?;
    tracing::info!(?bounds, "starting conformance run");
    let mut report = ConformanceReport::new();

    // 1. Peano axioms
    report.extend(validators::axioms::validate(bounds));

    // 2. Set view
    report.extend(validators::axioms::validate_set_view(bounds));

    // 3. Bridges
    report.extend(validators::isomorphism::validate(bounds));

    // 4. Embedding chain
    report.extend(validators::embedding::validate(bounds));

    // 5. Laws
    report.extend(validators::laws::validate(bounds));

    // 6. Convergence
    report.extend(validators::convergence::validate(bounds));

    // 7. Imaginary collapse
    report.extend(validators::collapse::validate(bounds));

    tracing::info!(
        results = report.results.len(),
        failures = report.failure_count(),
        "conformance run finished"
    );
    Ok(report)
}
