//! Exact bridges: ℕ, ℤ and ℚ agree with their efficient counterparts by `==`.

use num_bigint::{BigInt, BigUint};
use num_rational::BigRational;

use super::{preserves_field, preserves_order, preserves_ring, preserves_semiring, Isomorphism};
use crate::algebra::traits::PeanoAxioms;
use crate::error::Result;
use crate::integer::ConstructedInteger;
use crate::natural::VonNeumannNatural;
use crate::rational::ConstructedRational;

/// [`VonNeumannNatural`] ↔ `BigUint`, both directions by unary counting.
#[derive(Debug, Clone, Copy, Default)]
pub struct NaturalIsomorphism;

impl Isomorphism for NaturalIsomorphism {
    type Constructed = VonNeumannNatural;
    type Efficient = BigUint;

    const LAYER: &'static str = "natural";

    fn to_efficient(value: &VonNeumannNatural) -> BigUint {
        value.count()
    }

    fn from_efficient(value: &BigUint) -> Result<VonNeumannNatural> {
        Ok(VonNeumannNatural::from_count(value))
    }

    /// `0, 1, …, bound`, built by the efficient successor.
    fn samples(bound: u32) -> Vec<BigUint> {
        let mut out = Vec::with_capacity(bound as usize + 1);
        let mut n = <BigUint as PeanoAxioms>::zero();
        for _ in 0..=bound {
            let next = n.succ();
            out.push(n);
            n = next;
        }
        out
    }

    fn agrees(left: &BigUint, right: &BigUint) -> bool {
        left == right
    }

    fn preserves_operations(samples: &[BigUint]) -> bool {
        preserves_semiring::<Self>(samples) && preserves_order::<Self>(samples)
    }
}

/// [`ConstructedInteger`] ↔ `BigInt`.
#[derive(Debug, Clone, Copy, Default)]
pub struct IntegerIsomorphism;

impl Isomorphism for IntegerIsomorphism {
    type Constructed = ConstructedInteger;
    type Efficient = BigInt;

    const LAYER: &'static str = "integer";

    fn to_efficient(value: &ConstructedInteger) -> BigInt {
        value.to_efficient()
    }

    fn from_efficient(value: &BigInt) -> Result<ConstructedInteger> {
        Ok(ConstructedInteger::from_efficient(value))
    }

    /// `−bound, …, bound`.
    fn samples(bound: u32) -> Vec<BigInt> {
        let bound = i64::from(bound);
        (-bound..=bound).map(BigInt::from).collect()
    }

    fn agrees(left: &BigInt, right: &BigInt) -> bool {
        left == right
    }

    fn preserves_operations(samples: &[BigInt]) -> bool {
        preserves_ring::<Self>(samples) && preserves_order::<Self>(samples)
    }
}

/// [`ConstructedRational`] ↔ `BigRational`.
#[derive(Debug, Clone, Copy, Default)]
pub struct RationalIsomorphism;

impl Isomorphism for RationalIsomorphism {
    type Constructed = ConstructedRational;
    type Efficient = BigRational;

    const LAYER: &'static str = "rational";

    fn to_efficient(value: &ConstructedRational) -> BigRational {
        value.to_efficient()
    }

    fn from_efficient(value: &BigRational) -> Result<ConstructedRational> {
        Ok(ConstructedRational::from_efficient(value))
    }

    /// `p / (1 + |p| mod 5)` for `p` in `−bound..=bound`, duplicates removed.
    fn samples(bound: u32) -> Vec<BigRational> {
        let bound = i64::from(bound);
        let mut out: Vec<BigRational> = (-bound..=bound)
            .map(|p| BigRational::new(BigInt::from(p), BigInt::from(1 + p.abs() % 5)))
            .collect();
        out.sort();
        out.dedup();
        out
    }

    fn agrees(left: &BigRational, right: &BigRational) -> bool {
        left == right
    }

    fn preserves_operations(samples: &[BigRational]) -> bool {
        preserves_field::<Self>(samples) && preserves_order::<Self>(samples)
    }
}
