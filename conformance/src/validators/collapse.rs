//! The imaginary collapse: `(bi)(di) = −bd` is a real.

use number_tower::{precision_bits, ConstructedImaginary, ConstructedRational, ConstructedReal};

use crate::bounds::VerificationBounds;
use crate::report::{ConformanceReport, TestResult};

/// Agreement threshold, in bits.
const COLLAPSE_BITS: u32 = 30;

fn real(p: i64, q: i64) -> Option<ConstructedReal> {
    ConstructedRational::of(p, q)
        .ok()
        .map(|r| ConstructedReal::from_rational(&r))
}

/// Checks `(b/2 · i)(d/3 · i) = −bd/6` for `|b|, |d| ≤ complex`.
pub fn validate(bounds: &VerificationBounds) -> ConformanceReport {
    let mut report = ConformanceReport::new();
    let bound = i64::from(bounds.complex);
    let precision = precision_bits(COLLAPSE_BITS);
    let mut details = Vec::new();

    for b in -bound..=bound {
        for d in -bound..=bound {
            let (Some(left), Some(right), Some(expected)) =
                (real(b, 2), real(d, 3), real(-b * d, 6))
            else {
                details.push(format!("samples for b = {b}, d = {d} could not be built"));
                continue;
            };
            let product: ConstructedReal =
                &ConstructedImaginary::new(left) * &ConstructedImaginary::new(right);
            if !product.approx_eq(&expected, &precision) {
                details.push(format!("({b}/2 i)({d}/3 i) = {product}, expected {expected}"));
            }
        }
    }

    tracing::info!(bound, violations = details.len(), "imaginary collapse checked");
    let message = format!("products of imaginaries are real for |b|, |d| ≤ {bound}");
    if details.is_empty() {
        report.push(TestResult::pass("collapse", message));
    } else {
        report.push(TestResult::fail_with_details("collapse", message, details));
    }
    report
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quick_bounds_pass() {
        assert!(validate(&VerificationBounds::quick()).all_passed());
    }
}
