//! Verification budgets.
//!
//! Every check in the suite runs over a finite sample whose size is set
//! here. Naturals are unary and binary checks are quadratic in the sample,
//! so each bound has a ceiling past which a run stops being practical.

use serde::Serialize;
use thiserror::Error;

/// Sample bounds for one conformance run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct VerificationBounds {
    /// Naturals `0..=natural` for the ℕ bridge.
    pub natural: u32,
    /// Integers `−integer..=integer` for the ℤ bridge.
    pub integer: u32,
    /// Numerators `−rational..=rational` for the ℚ bridge and the field laws.
    pub rational: u32,
    /// Dyadic samples `i/8`, `|i| ≤ real`, for the ℝ and iℝ bridges.
    pub real: u32,
    /// Sample half-width for the ℂ bridge and the imaginary collapse.
    pub complex: u32,
    /// Naturals `0..=embedding` for the embedding chain.
    pub embedding: u32,
    /// Sample size for the Peano axioms and the set view.
    pub axiom_samples: u64,
    /// Terms inspected by the Cauchy prefix check.
    pub cauchy_prefix: u64,
    /// Bisection steps for the square root of two.
    pub sqrt_iterations: u32,
}

/// Bounds that fail validation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BoundsError {
    /// A bound of zero leaves nothing to check.
    #[error("bound `{field}` must be at least 1")]
    Zero {
        /// Name of the offending field.
        field: &'static str,
    },

    /// A bound past its practical ceiling.
    #[error("bound `{field}` = {value} exceeds the maximum of {max}")]
    TooLarge {
        /// Name of the offending field.
        field: &'static str,
        /// The configured value.
        value: u64,
        /// The ceiling for this field.
        max: u64,
    },
}

impl VerificationBounds {
    /// Small bounds for smoke runs and tests.
    pub fn quick() -> Self {
        Self {
            natural: 6,
            integer: 12,
            rational: 4,
            real: 4,
            complex: 2,
            embedding: 4,
            axiom_samples: 16,
            cauchy_prefix: 32,
            sqrt_iterations: 48,
        }
    }

    /// Rejects zero bounds and bounds past their ceilings.
    ///
    /// # Errors
    ///
    /// Returns the first offending field as a [`BoundsError`].
    pub fn validate(&self) -> Result<(), BoundsError> {
        let fields: [(&'static str, u64, u64); 9] = [
            ("natural", self.natural.into(), 64),
            ("integer", self.integer.into(), 1_000),
            ("rational", self.rational.into(), 40),
            ("real", self.real.into(), 64),
            ("complex", self.complex.into(), 16),
            ("embedding", self.embedding.into(), 24),
            ("axiom_samples", self.axiom_samples, 4_096),
            ("cauchy_prefix", self.cauchy_prefix, 1_024),
            ("sqrt_iterations", self.sqrt_iterations.into(), 1_024),
        ];
        for (field, value, max) in fields {
            if value == 0 {
                return Err(BoundsError::Zero { field });
            }
            if value > max {
                return Err(BoundsError::TooLarge { field, value, max });
            }
        }
        Ok(())
    }
}

impl Default for VerificationBounds {
    fn default() -> Self {
        Self {
            natural: 16,
            integer: 150,
            rational: 10,
            real: 12,
            complex: 4,
            embedding: 8,
            axiom_samples: 64,
            cauchy_prefix: 64,
            sqrt_iterations: 64,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_and_quick_validate() {
        assert_eq!(VerificationBounds::default().validate(), Ok(()));
        assert_eq!(VerificationBounds::quick().validate(), Ok(()));
    }

    #[test]
    fn zero_bound_rejected() {
        let bounds = VerificationBounds {
            real: 0,
            ..VerificationBounds::default()
        };
        assert_eq!(bounds.validate(), Err(BoundsError::Zero { field: "real" }));
    }

    #[test]
    fn oversized_bound_rejected() {
        let bounds = VerificationBounds {
            natural: 500,
            ..VerificationBounds::default()
        };
        let err = bounds.validate().unwrap_err();
        assert_eq!(err.to_string(), "bound `natural` = 500 exceeds the maximum of 64");
    }
}
