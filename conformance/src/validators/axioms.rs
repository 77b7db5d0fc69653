//! Peano axioms on both natural carriers, and the von Neumann set view.

use num_bigint::BigUint;
use number_tower::{PeanoAxioms, VonNeumannNatural};

use crate::bounds::VerificationBounds;
use crate::report::{ConformanceReport, TestResult};

const VALIDATOR: &str = "axioms";

/// Checks the Peano axioms on the successor chain and on `BigUint`.
pub fn validate(bounds: &VerificationBounds) -> ConformanceReport {
    let mut report = ConformanceReport::new();
    let samples = bounds.axiom_samples;

    let chain = VonNeumannNatural::satisfies_axioms(samples);
    report.push(TestResult::check(
        VALIDATOR,
        format!("successor chain satisfies the Peano axioms on 0..{samples}"),
        chain,
    ));

    let machine = BigUint::satisfies_axioms(samples);
    report.push(TestResult::check(
        VALIDATOR,
        format!("BigUint satisfies the Peano axioms on 0..{samples}"),
        machine,
    ));

    tracing::info!(samples, chain, machine, "peano axioms checked");
    report
}

/// Checks that every natural `n` below the sample size is the set of its
/// predecessors: `|set(n)| = n` and `k ∈ set(n)` exactly when `k < n`.
pub fn validate_set_view(bounds: &VerificationBounds) -> ConformanceReport {
    let mut report = ConformanceReport::new();
    // The set view is quadratic in n.
    let limit = bounds.axiom_samples.min(64);
    let mut details = Vec::new();

    let mut n = VonNeumannNatural::ZERO;
    for count in 0..limit {
        let view = n.to_set_view();
        if u64::try_from(view.len()).ok() != Some(count) {
            details.push(format!("set({count}) has {} members", view.len()));
        }
        let mut k = VonNeumannNatural::ZERO;
        for below in 0..=count {
            let inside = view.contains(&k);
            if inside != (below < count) || inside != k.is_member_of(&n) {
                details.push(format!("membership of {below} in set({count}) is {inside}"));
            }
            k = k.succ();
        }
        n = n.succ();
    }

    tracing::info!(limit, violations = details.len(), "set view checked");
    if details.is_empty() {
        report.push(TestResult::pass(
            VALIDATOR,
            format!("set view matches strict predecessors on 0..{limit}"),
        ));
    } else {
        report.push(TestResult::fail_with_details(
            VALIDATOR,
            "set view disagrees with the successor order",
            details,
        ));
    }
    report
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quick_bounds_pass() {
        let bounds = VerificationBounds::quick();
        assert!(validate(&bounds).all_passed());
        assert!(validate_set_view(&bounds).all_passed());
    }
}
