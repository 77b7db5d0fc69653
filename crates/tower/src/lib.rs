//! The classical number tower, constructed from first principles.
//!
//! Every layer is built from the one below it and certified against an
//! efficient arbitrary-precision counterpart:
//!
//! ```text
//! ℕ  VonNeumannNatural    Zero | Successor(n)            ↔ BigUint
//! ℤ  ConstructedInteger   (a, b) / a + d = b + c         ↔ BigInt
//! ℚ  ConstructedRational  (p, q) / p·s = q·r, q ≁ 0      ↔ BigRational
//! ℝ  ConstructedReal      Cauchy sequence + modulus      ↔ f64
//! ℂ  ConstructedComplex   (re, im) over ℝ                ↔ Complex64
//! iℝ ConstructedImaginary b·i, with (b·i)(d·i) ∈ ℝ       ↔ Complex64 (re = 0)
//! ```
//!
//! # Quotient Equality
//!
//! Integers and rationals are equivalence classes of pairs. Their
//! `PartialEq` and `Hash` implement the quotient relation, never field-wise
//! equality: `(3, 1)` and `(4, 2)` are the same integer. Reals have no
//! `PartialEq` at all and are compared at an explicit precision.
//!
//! # Cost Model
//!
//! | Operation | Cost |
//! |-----------|------|
//! | ℕ conversion, `+`, compare | linear in the value (unary) |
//! | ℕ `×` | linear in the product |
//! | ℤ, ℚ arithmetic | bignum arithmetic on the pair components |
//! | ℝ `+ − × ÷` | O(1): builds a node, evaluates nothing |
//! | ℝ `term`, `modulus`, `compare` | proportional to the graph and precision |
//! | Bridge verification at bound `b` | quadratic in the sample count |
//!
//! Real arithmetic is "build now, pay later": a long chain of unevaluated
//! operations is cheap to construct and is paid for when a term is forced.
//! All verification entry points take an explicit bound.
//!
//! # Isomorphism Protocol
//!
//! Each layer has a stateless bridge implementing [`Isomorphism`]. Bridges
//! never take part in arithmetic; `verify_round_trip(bound)` only certifies
//! that the two worlds agree on a finite sample.
//!
//! ```
//! use number_tower::{ConstructedInteger, IntegerIsomorphism, Isomorphism};
//! use num_bigint::BigInt;
//!
//! let sum = ConstructedInteger::of(3, 1) + ConstructedInteger::of(2, 5);
//! assert_eq!(IntegerIsomorphism::to_efficient(&sum), BigInt::from(-1));
//! assert!(IntegerIsomorphism::verify_round_trip(10));
//! ```
//!
//! # Errors
//!
//! Construction preconditions (a zero denominator, dividing by zero, an even
//! root of a negative) fail at the call with a [`TowerError`]. Verification
//! functions return `bool` and log counterexamples with `tracing`.

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]
#![cfg_attr(test, allow(clippy::unwrap_used, clippy::expect_used))]

// Operator forwarding macros
mod macros;

// Capability traits and their efficient-layer implementations
pub mod algebra;

// Error type shared by every layer
pub mod error;

// ℕ: successor chains
pub mod natural;

// ℤ: pairs of naturals
pub mod integer;

// ℚ: pairs of integers
pub mod rational;

// ℝ: lazy Cauchy sequences
pub mod real;

// ℂ and iℝ: pairs of reals, pure imaginaries
pub mod complex;

// Bridges to the efficient layer and the embedding chain
pub mod iso;

pub use algebra::efficient::{complexes_agree, reals_agree};
pub use algebra::traits::{Field, Ordered, PeanoAxioms, Ring, Semiring};
pub use complex::{ConstructedComplex, ConstructedImaginary};
pub use error::{Result, TowerError};
pub use integer::ConstructedInteger;
pub use iso::embedding::{
    imaginary_to_complex, integer_to_rational, natural_to_integer, natural_to_rational,
    rational_to_real, real_to_complex, verify_embedding_chain,
};
pub use iso::{
    ComplexIsomorphism, ImaginaryIsomorphism, IntegerIsomorphism, Isomorphism,
    NaturalIsomorphism, RationalIsomorphism, RealIsomorphism,
};
pub use natural::VonNeumannNatural;
pub use rational::ConstructedRational;
pub use real::{precision_bits, ConstructedReal, DEFAULT_APARTNESS_BITS};

/// Glob-importable set of the types and traits most callers need.
pub mod prelude {
    pub use crate::algebra::traits::{Field, Ordered, PeanoAxioms, Ring, Semiring};
    pub use crate::complex::{ConstructedComplex, ConstructedImaginary};
    pub use crate::integer::ConstructedInteger;
    pub use crate::iso::Isomorphism;
    pub use crate::natural::VonNeumannNatural;
    pub use crate::rational::ConstructedRational;
    pub use crate::real::{precision_bits, ConstructedReal};
}
