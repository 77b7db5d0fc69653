//! Construction and domain errors.
//!
//! Every fallible operation in the tower fails fast at the call that would
//! create an invalid value. Verification entry points (`verify_round_trip`,
//! `satisfies_axioms`, ...) never produce these errors: they return `false`.

use thiserror::Error;

/// Errors raised when a construction precondition or a domain rule is violated.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TowerError {
    /// A rational pair `(p, q)` was built with `q ~ 0`.
    #[error("rational construction with a zero denominator")]
    ZeroDenominator,

    /// A value was divided by the zero element of its layer.
    #[error("division by zero in the {layer} layer")]
    DivisionByZero {
        /// Name of the number layer (`"rational"`, `"complex"`, ...).
        layer: &'static str,
    },

    /// A real divisor could not be separated from zero within the budget.
    #[error("real divisor is not apart from zero within 2^-{budget}")]
    NotApart {
        /// Binary precision that was searched before giving up.
        budget: u32,
    },

    /// An even root was requested for a negative radicand.
    #[error("even root of a negative radicand")]
    NegativeRadicand,

    /// A bisection bracket with `lower ≥ upper`.
    #[error("bisection bracket is empty")]
    EmptyBracket,

    /// A root of degree zero was requested.
    #[error("root degree must be at least 1")]
    ZeroDegree,

    /// NaN or an infinity crossed over from the efficient real layer.
    #[error("non-finite efficient real {0}")]
    NonFinite(f64),

    /// An efficient complex value off the imaginary axis was read as `b·i`.
    #[error("efficient complex value has a non-zero real part {0}")]
    NotPureImaginary(f64),

    /// A textual value could not be parsed.
    #[error("cannot parse {input:?}: {reason}")]
    Parse {
        /// The rejected input.
        input: String,
        /// What was wrong with it.
        reason: &'static str,
    },
}

/// Result alias for fallible tower operations.
pub type Result<T> = core::result::Result<T, TowerError>;

impl TowerError {
    pub(crate) fn parse(input: &str, reason: &'static str) -> Self {
        Self::Parse {
            input: input.to_owned(),
            reason,
        }
    }
}
