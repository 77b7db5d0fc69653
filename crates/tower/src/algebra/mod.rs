//! Capability traits and the efficient-layer adapters.
//!
//! - [`traits`]: [`Semiring`](traits::Semiring), [`Ring`](traits::Ring),
//!   [`Field`](traits::Field), [`Ordered`](traits::Ordered),
//!   [`PeanoAxioms`](traits::PeanoAxioms)
//! - [`efficient`]: implementations for `BigUint`, `BigInt`, `BigRational`,
//!   `f64` and `Complex64`

pub mod efficient;
pub mod traits;
