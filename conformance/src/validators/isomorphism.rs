//! Round trip and operation preservation for every bridge.

use number_tower::{
    ComplexIsomorphism, ImaginaryIsomorphism, IntegerIsomorphism, Isomorphism,
    NaturalIsomorphism, RationalIsomorphism, RealIsomorphism,
};

use crate::bounds::VerificationBounds;
use crate::report::{ConformanceReport, TestResult};

const VALIDATOR: &str = "isomorphism";

fn check<I: Isomorphism>(bound: u32) -> TestResult {
    let verified = I::verify_round_trip(bound);
    tracing::info!(layer = I::LAYER, bound, verified, "bridge checked");
    TestResult::check(
        VALIDATOR,
        format!("{} bridge round trips and preserves operations at bound {bound}", I::LAYER),
        verified,
    )
}

/// Verifies the six bridges, ℕ through iℝ, each at its own bound.
pub fn validate(bounds: &VerificationBounds) -> ConformanceReport {
    let mut report = ConformanceReport::new();
    report.push(check::<NaturalIsomorphism>(bounds.natural));
    report.push(check::<IntegerIsomorphism>(bounds.integer));
    report.push(check::<RationalIsomorphism>(bounds.rational));
    report.push(check::<RealIsomorphism>(bounds.real));
    report.push(check::<ComplexIsomorphism>(bounds.complex));
    report.push(check::<ImaginaryIsomorphism>(bounds.real));
    report
}
