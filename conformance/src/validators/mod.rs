//! Validators, one module per property group.
//!
//! Each validator takes the run's [`VerificationBounds`](crate::VerificationBounds)
//! and returns a [`ConformanceReport`](crate::ConformanceReport). A validator
//! never stops at the first counterexample; every check it owns is reported.

pub mod axioms;
pub mod collapse;
pub mod convergence;
pub mod embedding;
pub mod isomorphism;
pub mod laws;
