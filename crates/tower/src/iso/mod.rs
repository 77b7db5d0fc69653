//! Bridges between each constructed layer and its efficient counterpart.
//!
//! A bridge is a stateless unit struct implementing [`Isomorphism`]. It maps
//! values both ways and certifies, over a finite sample, that
//!
//! - `to_efficient(from_efficient(k))` agrees with `k`, and
//! - `to_efficient(a ⊕ b)` agrees with `to_efficient(a) ⊕ to_efficient(b)`
//!   for every operation the layer carries and every pair of samples.
//!
//! These are test oracles. They return `false` on the first counterexample,
//! log it at `debug` level, and never produce an error.
//!
//! | Bridge | Constructed | Efficient |
//! |--------|-------------|-----------|
//! | [`NaturalIsomorphism`] | [`VonNeumannNatural`](crate::VonNeumannNatural) | `BigUint` |
//! | [`IntegerIsomorphism`] | [`ConstructedInteger`](crate::ConstructedInteger) | `BigInt` |
//! | [`RationalIsomorphism`] | [`ConstructedRational`](crate::ConstructedRational) | `BigRational` |
//! | [`RealIsomorphism`] | [`ConstructedReal`](crate::ConstructedReal) | `f64` |
//! | [`ComplexIsomorphism`] | [`ConstructedComplex`](crate::ConstructedComplex) | `Complex64` |
//! | [`ImaginaryIsomorphism`] | [`ConstructedImaginary`](crate::ConstructedImaginary) | `Complex64` on the imaginary axis |
//!
//! Binary checks run over every ordered pair of samples, so their cost is
//! quadratic in the sample count; for naturals each operation is itself
//! linear in the values. Keep bounds small.

mod continuous;
mod discrete;
pub mod embedding;

use core::cmp::Ordering;
use core::fmt;

pub use continuous::{ComplexIsomorphism, ImaginaryIsomorphism, RealIsomorphism};
pub use discrete::{IntegerIsomorphism, NaturalIsomorphism, RationalIsomorphism};

use crate::algebra::traits::{Field, Ordered, Ring, Semiring};
use crate::error::Result;

/// A structural bijection between a constructed layer and an efficient one.
pub trait Isomorphism {
    /// The axiomatic type.
    type Constructed: Clone;

    /// The efficient counterpart.
    type Efficient: Clone + fmt::Debug;

    /// Layer name used in logs and reports.
    const LAYER: &'static str;

    /// Projects a constructed value.
    fn to_efficient(value: &Self::Constructed) -> Self::Efficient;

    /// Builds the constructed value of an efficient one.
    ///
    /// # Errors
    ///
    /// Fails for efficient values with no constructed counterpart, such as
    /// non-finite doubles.
    fn from_efficient(value: &Self::Efficient) -> Result<Self::Constructed>;

    /// The efficient values checked at `bound`. Distinct, in ascending order
    /// where the layer is ordered.
    fn samples(bound: u32) -> Vec<Self::Efficient>;

    /// Agreement on the efficient side: equality for exact layers, a
    /// relative tolerance for floating-point ones.
    fn agrees(left: &Self::Efficient, right: &Self::Efficient) -> bool;

    /// Operation preservation over every pair of samples.
    fn preserves_operations(samples: &[Self::Efficient]) -> bool;

    /// Round trip and operation preservation over `samples(bound)`.
    fn verify_round_trip(bound: u32) -> bool {
        let samples = Self::samples(bound);
        let verified = round_trips::<Self>(&samples) && Self::preserves_operations(&samples);
        tracing::debug!(
            layer = Self::LAYER,
            bound,
            samples = samples.len(),
            verified,
            "round trip verification"
        );
        verified
    }
}

/// `to_efficient(from_efficient(k))` agrees with `k` for every sample.
pub fn round_trips<I: Isomorphism + ?Sized>(samples: &[I::Efficient]) -> bool {
    samples.iter().all(|k| match I::from_efficient(k) {
        Ok(value) => {
            let back = I::to_efficient(&value);
            let agrees = I::agrees(&back, k);
            if !agrees {
                tracing::debug!(layer = I::LAYER, sample = ?k, back = ?back, "round trip differs");
            }
            agrees
        }
        Err(err) => {
            tracing::debug!(layer = I::LAYER, sample = ?k, %err, "sample has no constructed value");
            false
        }
    })
}

/// Lifts every sample; `None` if any has no constructed value.
fn lift<I: Isomorphism + ?Sized>(samples: &[I::Efficient]) -> Option<Vec<I::Constructed>> {
    samples
        .iter()
        .map(|k| I::from_efficient(k).ok())
        .collect()
}

/// Checks one binary operation against its efficient counterpart on all pairs.
fn preserves_binary<I, C, E>(
    operation: &'static str,
    samples: &[I::Efficient],
    lifted: &[I::Constructed],
    constructed: C,
    efficient: E,
) -> bool
where
    I: Isomorphism + ?Sized,
    C: Fn(&I::Constructed, &I::Constructed) -> I::Constructed,
    E: Fn(&I::Efficient, &I::Efficient) -> I::Efficient,
{
    for (a, x) in samples.iter().zip(lifted) {
        for (b, y) in samples.iter().zip(lifted) {
            let expected = efficient(a, b);
            let actual = I::to_efficient(&constructed(x, y));
            if !I::agrees(&actual, &expected) {
                tracing::debug!(
                    layer = I::LAYER,
                    operation,
                    left = ?a,
                    right = ?b,
                    actual = ?actual,
                    expected = ?expected,
                    "operation not preserved"
                );
                return false;
            }
        }
    }
    true
}

/// Addition and multiplication commute with the bridge.
pub fn preserves_semiring<I>(samples: &[I::Efficient]) -> bool
where
    I: Isomorphism + ?Sized,
    I::Constructed: Semiring,
    I::Efficient: Semiring,
{
    let Some(lifted) = lift::<I>(samples) else {
        return false;
    };
    let add = preserves_binary::<I, _, _>(
        "add",
        samples,
        &lifted,
        |x, y| x.ring_add(y),
        |a, b| a.ring_add(b),
    );
    add && preserves_binary::<I, _, _>(
        "mul",
        samples,
        &lifted,
        |x, y| x.ring_mul(y),
        |a, b| a.ring_mul(b),
    )
}

/// [`preserves_semiring`] plus subtraction and negation.
pub fn preserves_ring<I>(samples: &[I::Efficient]) -> bool
where
    I: Isomorphism + ?Sized,
    I::Constructed: Ring,
    I::Efficient: Ring,
{
    let Some(lifted) = lift::<I>(samples) else {
        return false;
    };
    let negation = samples.iter().zip(&lifted).all(|(a, x)| {
        let agrees = I::agrees(&I::to_efficient(&x.ring_neg()), &a.ring_neg());
        if !agrees {
            tracing::debug!(
                layer = I::LAYER,
                operation = "neg",
                operand = ?a,
                "operation not preserved"
            );
        }
        agrees
    });
    negation
        && preserves_semiring::<I>(samples)
        && preserves_binary::<I, _, _>(
            "sub",
            samples,
            &lifted,
            |x, y| x.ring_sub(y),
            |a, b| a.ring_sub(b),
        )
}

/// [`preserves_ring`] plus division by every non-zero sample.
///
/// A divisor the efficient side rejects must be rejected by the constructed
/// side too, and the other way round.
pub fn preserves_field<I>(samples: &[I::Efficient]) -> bool
where
    I: Isomorphism + ?Sized,
    I::Constructed: Field,
    I::Efficient: Field,
{
    let Some(lifted) = lift::<I>(samples) else {
        return false;
    };
    if !preserves_ring::<I>(samples) {
        return false;
    }
    for (a, x) in samples.iter().zip(&lifted) {
        for (b, y) in samples.iter().zip(&lifted) {
            let agrees = match (x.ring_div(y), a.ring_div(b)) {
                (Ok(actual), Ok(expected)) => I::agrees(&I::to_efficient(&actual), &expected),
                (Err(_), Err(_)) => true,
                _ => false,
            };
            if !agrees {
                tracing::debug!(
                    layer = I::LAYER,
                    operation = "div",
                    left = ?a,
                    right = ?b,
                    "operation not preserved"
                );
                return false;
            }
        }
    }
    true
}

/// The order on constructed values matches the efficient order.
pub fn preserves_order<I>(samples: &[I::Efficient]) -> bool
where
    I: Isomorphism + ?Sized,
    I::Constructed: Ordered,
    I::Efficient: Ordered,
{
    let Some(lifted) = lift::<I>(samples) else {
        return false;
    };
    for (a, x) in samples.iter().zip(&lifted) {
        for (b, y) in samples.iter().zip(&lifted) {
            let actual: Ordering = x.compare(y);
            let expected = a.compare(b);
            if actual != expected {
                tracing::debug!(
                    layer = I::LAYER,
                    operation = "compare",
                    left = ?a,
                    right = ?b,
                    ?actual,
                    ?expected,
                    "order not preserved"
                );
                return false;
            }
        }
    }
    true
}
