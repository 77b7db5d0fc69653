//! Cauchy convergence of the square root of two.

use number_tower::{ConstructedRational, ConstructedReal};

use crate::bounds::VerificationBounds;
use crate::report::{ConformanceReport, TestResult};

const VALIDATOR: &str = "convergence";

/// Precision of the approximation check, in bits.
const APPROX_BITS: u32 = 30;

/// Checks the Cauchy prefix of √2 and that its 2^-30 approximation squares
/// to within 1/1000 of two from below.
pub fn validate(bounds: &VerificationBounds) -> ConformanceReport {
    let mut report = ConformanceReport::new();
    let built = ConstructedRational::of(2, 1).and_then(|two| {
        let tolerance = ConstructedRational::of(1, 1000)?;
        let root = ConstructedReal::sqrt(&two, bounds.sqrt_iterations)?;
        Ok((two, tolerance, root))
    });
    let (two, tolerance, root) = match built {
        Ok(built) => built,
        Err(err) => {
            report.push(TestResult::fail(VALIDATOR, format!("√2 could not be built: {err}")));
            return report;
        }
    };

    let prefix = bounds.cauchy_prefix;
    let cauchy = root.is_cauchy_on_finite_prefix(prefix);
    tracing::info!(prefix, cauchy, "cauchy prefix checked");
    report.push(TestResult::check(
        VALIDATOR,
        format!("√2 is Cauchy on its first {prefix} terms"),
        cauchy,
    ));

    // Bisection halves the bracket [0, 2] once per step.
    if bounds.sqrt_iterations <= APPROX_BITS {
        report.push(TestResult::warn(
            VALIDATOR,
            format!(
                "approximation check needs more than {APPROX_BITS} bisection steps, got {}",
                bounds.sqrt_iterations
            ),
        ));
        return report;
    }

    let approx = root.approximate_rational(APPROX_BITS);
    let square = &approx * &approx;
    let close = square <= two && &two - &square < tolerance;
    tracing::info!(%approx, close, "approximation checked");
    report.push(TestResult::check(
        VALIDATOR,
        format!("√2 approximated at 2^-{APPROX_BITS} squares to within 1/1000 of 2"),
        close,
    ));
    report
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_bounds_pass() {
        let report = validate(&VerificationBounds::default());
        assert_eq!(report.results.len(), 2);
        assert!(report.all_passed(), "{:#?}", report.results);
    }

    #[test]
    fn few_iterations_warn() {
        let bounds = VerificationBounds {
            sqrt_iterations: 12,
            ..VerificationBounds::quick()
        };
        let report = validate(&bounds);
        assert_eq!(report.count(crate::Severity::Warning), 1);
        assert!(report.all_passed());
    }
}
