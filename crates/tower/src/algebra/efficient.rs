//! Capability adapters for the efficient primitives.
//!
//! The efficient layer is not part of the tower: it is `num-bigint`,
//! `num-rational`, `num-complex` and IEEE-754 doubles. This module only
//! teaches those types the tower's capability traits so that bridges can
//! compare `to_efficient(a ⊕ b)` with `to_efficient(a) ⊕ to_efficient(b)`.
//!
//! | Layer | Efficient type |
//! |-------|----------------|
//! | ℕ | [`BigUint`] |
//! | ℤ | [`BigInt`] |
//! | ℚ | [`BigRational`] |
//! | ℝ | `f64` |
//! | ℂ | [`Complex64`] |

use core::cmp::Ordering;

use num_bigint::{BigInt, BigUint};
use num_complex::Complex64;
use num_rational::BigRational;
use num_traits::Zero;

use super::traits::{Field, Ordered, PeanoAxioms, Ring, Semiring};
use crate::error::{Result, TowerError};

// =============================================================================
// ℕ
// =============================================================================

impl Semiring for BigUint {
    #[inline]
    fn ring_zero() -> Self {
        num_traits::zero()
    }

    #[inline]
    fn ring_one() -> Self {
        num_traits::one()
    }

    #[inline]
    fn ring_add(&self, other: &Self) -> Self {
        self + other
    }

    #[inline]
    fn ring_mul(&self, other: &Self) -> Self {
        self * other
    }
}

impl Ordered for BigUint {
    #[inline]
    fn compare(&self, other: &Self) -> Ordering {
        self.cmp(other)
    }
}

impl PeanoAxioms for BigUint {
    #[inline]
    fn zero() -> Self {
        num_traits::zero()
    }

    #[inline]
    fn succ(&self) -> Self {
        self + 1u32
    }

    #[inline]
    fn pred(&self) -> Option<Self> {
        if Zero::is_zero(self) {
            None
        } else {
            Some(self - 1u32)
        }
    }

    #[inline]
    fn is_zero(&self) -> bool {
        Zero::is_zero(self)
    }
}

// =============================================================================
// ℤ
// =============================================================================

impl Semiring for BigInt {
    #[inline]
    fn ring_zero() -> Self {
        num_traits::zero()
    }

    #[inline]
    fn ring_one() -> Self {
        num_traits::one()
    }

    #[inline]
    fn ring_add(&self, other: &Self) -> Self {
        self + other
    }

    #[inline]
    fn ring_mul(&self, other: &Self) -> Self {
        self * other
    }
}

impl Ring for BigInt {
    #[inline]
    fn ring_neg(&self) -> Self {
        -self
    }

    #[inline]
    fn ring_sub(&self, other: &Self) -> Self {
        self - other
    }
}

impl Ordered for BigInt {
    #[inline]
    fn compare(&self, other: &Self) -> Ordering {
        self.cmp(other)
    }
}

// =============================================================================
// ℚ
// =============================================================================

impl Semiring for BigRational {
    #[inline]
    fn ring_zero() -> Self {
        num_traits::zero()
    }

    #[inline]
    fn ring_one() -> Self {
        num_traits::one()
    }

    #[inline]
    fn ring_add(&self, other: &Self) -> Self {
        self + other
    }

    #[inline]
    fn ring_mul(&self, other: &Self) -> Self {
        self * other
    }
}

impl Ring for BigRational {
    #[inline]
    fn ring_neg(&self) -> Self {
        -self
    }

    #[inline]
    fn ring_sub(&self, other: &Self) -> Self {
        self - other
    }
}

impl Field for BigRational {
    fn ring_recip(&self) -> Result<Self> {
        if Zero::is_zero(self) {
            return Err(TowerError::DivisionByZero { layer: "rational" });
        }
        Ok(self.recip())
    }
}

impl Ordered for BigRational {
    #[inline]
    fn compare(&self, other: &Self) -> Ordering {
        self.cmp(other)
    }
}

// =============================================================================
// ℝ
// =============================================================================

impl Semiring for f64 {
    #[inline]
    fn ring_zero() -> Self {
        0.0
    }

    #[inline]
    fn ring_one() -> Self {
        1.0
    }

    #[inline]
    fn ring_add(&self, other: &Self) -> Self {
        self + other
    }

    #[inline]
    fn ring_mul(&self, other: &Self) -> Self {
        self * other
    }
}

impl Ring for f64 {
    #[inline]
    fn ring_neg(&self) -> Self {
        -self
    }

    #[inline]
    fn ring_sub(&self, other: &Self) -> Self {
        self - other
    }
}

impl Field for f64 {
    fn ring_recip(&self) -> Result<Self> {
        if *self == 0.0 {
            return Err(TowerError::DivisionByZero { layer: "real" });
        }
        Ok(self.recip())
    }
}

// =============================================================================
// ℂ
// =============================================================================

impl Semiring for Complex64 {
    #[inline]
    fn ring_zero() -> Self {
        Complex64::new(0.0, 0.0)
    }

    #[inline]
    fn ring_one() -> Self {
        Complex64::new(1.0, 0.0)
    }

    #[inline]
    fn ring_add(&self, other: &Self) -> Self {
        self + other
    }

    #[inline]
    fn ring_mul(&self, other: &Self) -> Self {
        self * other
    }
}

impl Ring for Complex64 {
    #[inline]
    fn ring_neg(&self) -> Self {
        -self
    }

    #[inline]
    fn ring_sub(&self, other: &Self) -> Self {
        self - other
    }
}

impl Field for Complex64 {
    fn ring_recip(&self) -> Result<Self> {
        if self.norm_sqr() == 0.0 {
            return Err(TowerError::DivisionByZero { layer: "complex" });
        }
        Ok(self.inv())
    }
}

/// Agreement of two efficient reals up to a relative tolerance of `1e-9`.
///
/// Constructed reals are projected through a rational approximation, so
/// bridges compare doubles with this rather than `==`.
#[inline]
#[must_use]
pub fn reals_agree(left: f64, right: f64) -> bool {
    let scale = left.abs().max(right.abs()).max(1.0);
    (left - right).abs() <= 1e-9 * scale
}

/// [`reals_agree`] applied to both components.
#[inline]
#[must_use]
pub fn complexes_agree(left: Complex64, right: Complex64) -> bool {
    reals_agree(left.re, right.re) && reals_agree(left.im, right.im)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_biguint_peano() {
        assert!(<BigUint as PeanoAxioms>::satisfies_axioms(64));
        let five = BigUint::from(5u32);
        assert_eq!(five.pred(), Some(BigUint::from(4u32)));
        assert_eq!(<BigUint as PeanoAxioms>::zero().pred(), None);
    }

    #[test]
    fn test_biguint_recursion_adds() {
        let three = BigUint::from(3u32);
        let plus_three = BigUint::recurse(three.clone(), |_, acc: BigUint| acc.succ());
        assert_eq!(plus_three(&BigUint::from(4u32)), BigUint::from(7u32));
    }

    #[test]
    fn test_rational_recip_of_zero() {
        let zero = BigRational::ring_zero();
        assert_eq!(
            zero.ring_recip(),
            Err(TowerError::DivisionByZero { layer: "rational" })
        );
    }

    #[test]
    fn test_complex_division() {
        let a = Complex64::new(1.0, 2.0);
        let b = Complex64::new(3.0, -1.0);
        let q = a.ring_div(&b).unwrap();
        assert!(complexes_agree(q.ring_mul(&b), a));
    }

    #[test]
    fn test_reals_agree_is_relative() {
        assert!(reals_agree(1e12, 1e12 + 1.0));
        assert!(!reals_agree(1.0, 1.001));
    }
}
