//! Quotient laws: integer equivalence, the rational field law, density,
//! and division by zero at every layer that divides.

use number_tower::{
    ConstructedComplex, ConstructedInteger, ConstructedRational, ConstructedReal, TowerError,
    DEFAULT_APARTNESS_BITS,
};

use crate::bounds::VerificationBounds;
use crate::report::{ConformanceReport, TestResult};

const VALIDATOR: &str = "laws";

fn outcome(report: &mut ConformanceReport, message: String, details: Vec<String>) {
    if details.is_empty() {
        report.push(TestResult::pass(VALIDATOR, message));
    } else {
        report.push(TestResult::fail_with_details(VALIDATOR, message, details));
    }
}

/// Runs every law check under `bounds`.
pub fn validate(bounds: &VerificationBounds) -> ConformanceReport {
    let mut report = ConformanceReport::new();
    integer_equivalence(&mut report, bounds.rational);
    rational_field(&mut report, bounds.rational);
    density(&mut report, bounds.rational);
    zero_division(&mut report);
    report
}

/// `(a, b) ~ (c, d)` exactly when `a + d = b + c`, on a full grid.
fn integer_equivalence(report: &mut ConformanceReport, bound: u32) {
    let bound = u64::from(bound);
    let mut details = Vec::new();
    for a in 0..=bound {
        for b in 0..=bound {
            for c in 0..=bound {
                for d in 0..=bound {
                    let equal = ConstructedInteger::of(a, b) == ConstructedInteger::of(c, d);
                    if equal != (a + d == b + c) {
                        details.push(format!("({a},{b}) vs ({c},{d}) compared {equal}"));
                    }
                }
            }
        }
    }
    tracing::info!(bound, violations = details.len(), "integer equivalence checked");
    outcome(
        report,
        format!("integer equality is the pair equivalence on 0..={bound}"),
        details,
    );
}

fn rational_samples(bound: u32) -> Vec<ConstructedRational> {
    let bound = i64::from(bound);
    (-bound..=bound)
        .flat_map(|p| (1..=bound).filter_map(move |q| ConstructedRational::of(p, q).ok()))
        .collect()
}

/// Every non-zero class has an inverse and zero has none.
fn rational_field(report: &mut ConformanceReport, bound: u32) {
    let mut details = Vec::new();
    for a in rational_samples(bound) {
        match a.reciprocal() {
            Ok(inverse) if !a.is_zero() => {
                if &a * &inverse != ConstructedRational::one() {
                    details.push(format!("{a} · {inverse} is not one"));
                }
            }
            Ok(inverse) => details.push(format!("zero inverted to {inverse}")),
            Err(_) if a.is_zero() => {}
            Err(err) => details.push(format!("{a} has no inverse: {err}")),
        }
    }
    tracing::info!(bound, violations = details.len(), "rational field law checked");
    outcome(
        report,
        format!("every non-zero rational p/q with |p|, q ≤ {bound} is invertible"),
        details,
    );
}

/// The midpoint of two distinct rationals lies strictly between them.
fn density(report: &mut ConformanceReport, bound: u32) {
    let samples = rational_samples(bound);
    let mut details = Vec::new();
    for a in &samples {
        for b in samples.iter().filter(|b| a < *b) {
            let m = a.midpoint(b);
            if !(a < &m && &m < b) {
                details.push(format!("midpoint {m} of {a} and {b} is not strictly between"));
            }
        }
    }
    tracing::info!(bound, violations = details.len(), "density checked");
    outcome(
        report,
        format!("midpoints witness density over {} rationals", samples.len()),
        details,
    );
}

/// Division by an exact zero fails with `DivisionByZero` at ℚ, ℝ and ℂ.
fn zero_division(report: &mut ConformanceReport) {
    let mut details = Vec::new();
    let mut record = |layer: &str, result: Result<(), TowerError>| match result {
        Err(TowerError::DivisionByZero { .. }) => {}
        Err(other) => details.push(format!("{layer}: unexpected error {other}")),
        Ok(()) => details.push(format!("{layer}: division by zero succeeded")),
    };

    record(
        "rational",
        ConstructedRational::one()
            .checked_div(&ConstructedRational::zero())
            .map(drop),
    );
    record(
        "real",
        ConstructedReal::one()
            .checked_div(&ConstructedReal::zero())
            .map(drop),
    );
    record(
        "complex",
        ConstructedComplex::zero()
            .try_recip(DEFAULT_APARTNESS_BITS)
            .map(drop),
    );

    tracing::info!(violations = details.len(), "zero division checked");
    outcome(
        report,
        "division by zero is rejected at every dividing layer".to_owned(),
        details,
    );
}
