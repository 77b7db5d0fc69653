//! The embedding chain ℕ ↪ ℤ ↪ ℚ ↪ ℝ ↪ ℂ.

use number_tower::verify_embedding_chain;

use crate::bounds::VerificationBounds;
use crate::report::{ConformanceReport, TestResult};

/// Checks injectivity, homomorphism and commutation along the chain.
pub fn validate(bounds: &VerificationBounds) -> ConformanceReport {
    let mut report = ConformanceReport::new();
    let bound = bounds.embedding;
    let verified = verify_embedding_chain(bound);
    tracing::info!(bound, verified, "embedding chain checked");
    report.push(TestResult::check(
        "embedding",
        format!("embedding chain commutes and preserves operations on 0..={bound}"),
        verified,
    ));
    report
}
