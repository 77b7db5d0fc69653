//! Integers as equivalence classes of pairs of naturals.
//!
//! The pair `(a, b)` stands for `a − b`. Two pairs denote the same integer
//! exactly when `a + d = b + c`; this relation, never field-wise equality,
//! is what [`PartialEq`] and [`Hash`] implement for [`ConstructedInteger`].
//!
//! # Representatives
//!
//! No canonical pair is maintained. Arithmetic works on whatever pairs it is
//! given and produces a valid (usually non-minimal) pair:
//!
//! ```text
//! (a, b) + (c, d) = (a + c, b + d)
//! (a, b) − (c, d) = (a + d, b + c)
//! (a, b) × (c, d) = (ac + bd, ad + bc)
//!          −(a, b) = (b, a)
//! ```
//!
//! [`ConstructedInteger::normalized`] yields the minimal pair on demand.
//!
//! # Example
//!
//! ```
//! use number_tower::ConstructedInteger;
//! use num_bigint::BigInt;
//!
//! let two = ConstructedInteger::of(3, 1);
//! assert_eq!(two, ConstructedInteger::of(4, 2));
//!
//! let minus_three = ConstructedInteger::of(2, 5);
//! assert_eq!((&two + &minus_three).to_efficient(), BigInt::from(-1));
//! assert_eq!((&two * &minus_three).to_efficient(), BigInt::from(-6));
//! ```

use core::cmp::Ordering;
use core::fmt;
use core::hash::{Hash, Hasher};
use core::str::FromStr;

use num_bigint::{BigInt, BigUint, Sign};

use crate::algebra::traits::{Ordered, Ring, Semiring};
use crate::error::{Result, TowerError};
use crate::macros::{forward_ref_binop, forward_ref_unop};
use crate::natural::VonNeumannNatural;

/// An integer as the class of a pair of naturals `(a, b)` read as `a − b`.
///
/// Equality is the quotient relation `(a, b) ~ (c, d) ⟺ a + d = b + c`.
/// Deriving `PartialEq` here would compare pairs field by field and break
/// every law of the construction; the impls below are written by hand.
#[derive(Clone)]
pub struct ConstructedInteger {
    positive: BigUint,
    negative: BigUint,
}

impl ConstructedInteger {
    /// The class of `(a, b)`, i.e. `a − b`.
    #[must_use]
    pub fn of(a: u64, b: u64) -> Self {
        Self::from_pair(BigUint::from(a), BigUint::from(b))
    }

    /// The class of an arbitrary pair of efficient naturals.
    #[inline]
    #[must_use]
    pub fn from_pair(positive: BigUint, negative: BigUint) -> Self {
        Self { positive, negative }
    }

    /// The class of a pair of successor-chain naturals.
    ///
    /// Both chains are counted, so this is linear in `a + b`.
    #[must_use]
    pub fn from_naturals(a: &VonNeumannNatural, b: &VonNeumannNatural) -> Self {
        Self::from_pair(a.count(), b.count())
    }

    /// The class of `(n, 0)` or `(0, −n)`.
    #[must_use]
    pub fn from_i64(n: i64) -> Self {
        if n >= 0 {
            Self::of(n.unsigned_abs(), 0)
        } else {
            Self::of(0, n.unsigned_abs())
        }
    }

    /// `(0, 0)`.
    #[must_use]
    pub fn zero() -> Self {
        Self::of(0, 0)
    }

    /// `(1, 0)`.
    #[must_use]
    pub fn one() -> Self {
        Self::of(1, 0)
    }

    /// The representative pair this value happens to hold.
    #[inline]
    #[must_use]
    pub fn pair(&self) -> (&BigUint, &BigUint) {
        (&self.positive, &self.negative)
    }

    /// The quotient relation `a + d = b + c`.
    #[must_use]
    pub fn equivalent(&self, other: &Self) -> bool {
        &self.positive + &other.negative == &self.negative + &other.positive
    }

    /// The minimal representative: one side of the pair is zero.
    #[must_use]
    pub fn normalized(&self) -> Self {
        let common = (&self.positive).min(&self.negative).clone();
        Self::from_pair(&self.positive - &common, &self.negative - &common)
    }

    /// True for the class of `(n, n)`.
    #[inline]
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.positive == self.negative
    }

    /// True when `a < b`.
    #[inline]
    #[must_use]
    pub fn is_negative(&self) -> bool {
        self.positive < self.negative
    }

    /// Sign as an ordering against zero.
    #[inline]
    #[must_use]
    pub fn signum(&self) -> Ordering {
        self.positive.cmp(&self.negative)
    }

    /// Absolute value: the pair with its larger side first.
    #[must_use]
    pub fn abs(&self) -> Self {
        if self.is_negative() {
            -self
        } else {
            self.clone()
        }
    }

    /// Projects the class onto the efficient integer `a − b`.
    #[must_use]
    pub fn to_efficient(&self) -> BigInt {
        BigInt::from(self.positive.clone()) - BigInt::from(self.negative.clone())
    }

    /// `(k, 0)` for non-negative `k`, `(0, |k|)` otherwise.
    #[must_use]
    pub fn from_efficient(value: &BigInt) -> Self {
        let magnitude = value.magnitude().clone();
        match value.sign() {
            Sign::Minus => Self::from_pair(BigUint::default(), magnitude),
            Sign::NoSign | Sign::Plus => Self::from_pair(magnitude, BigUint::default()),
        }
    }
}

impl PartialEq for ConstructedInteger {
    fn eq(&self, other: &Self) -> bool {
        self.equivalent(other)
    }
}

impl Eq for ConstructedInteger {}

impl Hash for ConstructedInteger {
    fn hash<H: Hasher>(&self, state: &mut H) {
        let minimal = self.normalized();
        minimal.positive.hash(state);
        minimal.negative.hash(state);
    }
}

impl Ordered for ConstructedInteger {
    /// `(a, b) < (c, d) ⟺ a + d < b + c`.
    fn compare(&self, other: &Self) -> Ordering {
        (&self.positive + &other.negative).cmp(&(&self.negative + &other.positive))
    }
}

impl PartialOrd for ConstructedInteger {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for ConstructedInteger {
    fn cmp(&self, other: &Self) -> Ordering {
        self.compare(other)
    }
}

impl fmt::Debug for ConstructedInteger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ConstructedInteger({} - {})", self.positive, self.negative)
    }
}

impl fmt::Display for ConstructedInteger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_efficient())
    }
}

impl FromStr for ConstructedInteger {
    type Err = TowerError;

    fn from_str(s: &str) -> Result<Self> {
        let value = BigInt::from_str(s.trim())
            .map_err(|_| TowerError::parse(s, "not a decimal integer"))?;
        Ok(Self::from_efficient(&value))
    }
}

impl From<&VonNeumannNatural> for ConstructedInteger {
    /// `n ↦ (n, 0)`.
    fn from(n: &VonNeumannNatural) -> Self {
        Self::from_naturals(n, &VonNeumannNatural::Zero)
    }
}

impl From<i64> for ConstructedInteger {
    fn from(n: i64) -> Self {
        Self::from_i64(n)
    }
}

// =============================================================================
// Arithmetic
// =============================================================================

impl core::ops::Add<&ConstructedInteger> for &ConstructedInteger {
    type Output = ConstructedInteger;

    fn add(self, rhs: &ConstructedInteger) -> ConstructedInteger {
        ConstructedInteger::from_pair(
            &self.positive + &rhs.positive,
            &self.negative + &rhs.negative,
        )
    }
}

impl core::ops::Sub<&ConstructedInteger> for &ConstructedInteger {
    type Output = ConstructedInteger;

    fn sub(self, rhs: &ConstructedInteger) -> ConstructedInteger {
        ConstructedInteger::from_pair(
            &self.positive + &rhs.negative,
            &self.negative + &rhs.positive,
        )
    }
}

impl core::ops::Mul<&ConstructedInteger> for &ConstructedInteger {
    type Output = ConstructedInteger;

    fn mul(self, rhs: &ConstructedInteger) -> ConstructedInteger {
        let (a, b) = (&self.positive, &self.negative);
        let (c, d) = (&rhs.positive, &rhs.negative);
        ConstructedInteger::from_pair(a * c + b * d, a * d + b * c)
    }
}

impl core::ops::Neg for &ConstructedInteger {
    type Output = ConstructedInteger;

    fn neg(self) -> ConstructedInteger {
        ConstructedInteger::from_pair(self.negative.clone(), self.positive.clone())
    }
}

forward_ref_binop!(impl Add, add for ConstructedInteger);
forward_ref_binop!(impl Sub, sub for ConstructedInteger);
forward_ref_binop!(impl Mul, mul for ConstructedInteger);
forward_ref_unop!(impl Neg, neg for ConstructedInteger);

impl Semiring for ConstructedInteger {
    #[inline]
    fn ring_zero() -> Self {
        Self::zero()
    }

    #[inline]
    fn ring_one() -> Self {
        Self::one()
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

impl Ring for ConstructedInteger {
    #[inline]
    fn ring_neg(&self) -> Self {
        -self
    }

    #[inline]
    fn ring_sub(&self, other: &Self) -> Self {
        self - other
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_equivalent_pairs_are_equal() {
        assert_eq!(ConstructedInteger::of(3, 1), ConstructedInteger::of(4, 2));
        assert_eq!(ConstructedInteger::of(0, 0), ConstructedInteger::of(9, 9));
        assert_ne!(ConstructedInteger::of(3, 1), ConstructedInteger::of(1, 3));
    }

    #[test]
    fn test_quotient_arithmetic() {
        let a = ConstructedInteger::of(3, 1);
        let b = ConstructedInteger::of(2, 5);
        assert_eq!((&a + &b).to_efficient(), BigInt::from(-1));
        assert_eq!((&a - &b).to_efficient(), BigInt::from(5));
        assert_eq!((&a * &b).to_efficient(), BigInt::from(-6));
        assert_eq!((-&a).to_efficient(), BigInt::from(-2));
    }

    #[test]
    fn test_results_ignore_representative() {
        let a1 = ConstructedInteger::of(3, 1);
        let a2 = ConstructedInteger::of(10, 8);
        let b1 = ConstructedInteger::of(2, 5);
        let b2 = ConstructedInteger::of(0, 3);
        assert_eq!(&a1 * &b1, &a2 * &b2);
        assert_eq!(&a1 + &b1, &a2 + &b2);
        assert_eq!(&a1 - &b2, &a2 - &b1);
    }

    #[test]
    fn test_normalized_is_minimal() {
        let n = ConstructedInteger::of(10, 13).normalized();
        assert_eq!(n.pair(), (&BigUint::from(0u32), &BigUint::from(3u32)));
    }

    #[test]
    fn test_compare() {
        let minus_two = ConstructedInteger::of(1, 3);
        let one = ConstructedInteger::of(5, 4);
        assert_eq!(minus_two.compare(&one), Ordering::Less);
        assert!(one > minus_two);
        assert_eq!(minus_two.signum(), Ordering::Less);
        assert_eq!(minus_two.abs(), ConstructedInteger::of(2, 0));
    }

    #[test]
    fn test_hash_follows_relation() {
        use std::collections::HashSet;
        let mut set = HashSet::new();
        set.insert(ConstructedInteger::of(3, 1));
        assert!(set.contains(&ConstructedInteger::of(7, 5)));
    }

    #[test]
    fn test_efficient_round_trip() {
        for k in -50i64..=50 {
            let value = BigInt::from(k);
            assert_eq!(ConstructedInteger::from_efficient(&value).to_efficient(), value);
        }
    }

    #[test]
    fn test_parse_and_display() {
        let n: ConstructedInteger = "-42".parse().unwrap();
        assert_eq!(n.to_string(), "-42");
        assert!("4x2".parse::<ConstructedInteger>().is_err());
    }

    #[test]
    fn test_natural_embedding() {
        let five = VonNeumannNatural::from_u64(5);
        assert_eq!(ConstructedInteger::from(&five), ConstructedInteger::of(5, 0));
    }
}
