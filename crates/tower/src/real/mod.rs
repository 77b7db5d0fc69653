//! Reals as Cauchy sequences of rationals.
//!
//! A [`ConstructedReal`] is a term function `n ↦ a_n ∈ ℚ` together with a
//! convergence modulus `k ↦ N` such that `|a_m − a_n| ≤ 1/k` whenever
//! `m, n ≥ N`. Arithmetic never evaluates anything: `a + b` is a new node
//! holding both operands, and only asking for a term or a modulus walks the
//! graph. Building a long chain is cheap; forcing it costs time in the size
//! of the chain and in the precision requested.
//!
//! Two representatives of the same real can have entirely different terms,
//! so there is no `PartialEq`. Reals are compared at an explicit precision
//! through [`ConstructedReal::compare`] and [`ConstructedReal::approx_eq`].
//!
//! Precision arguments are the denominator `k` of the tolerance `1/k`;
//! [`precision_bits`] builds `k = 2^bits`.
//!
//! # Example
//!
//! ```
//! use number_tower::{precision_bits, ConstructedRational, ConstructedReal};
//!
//! let root_two = ConstructedReal::sqrt(&ConstructedRational::of(2, 1)?, 64)?;
//! let two = ConstructedReal::from_rational(&ConstructedRational::of(2, 1)?);
//! assert!((&root_two * &root_two).approx_eq(&two, &precision_bits(20)));
//! assert_eq!(root_two.to_decimal(4), "1.4142");
//! # Ok::<(), number_tower::TowerError>(())
//! ```

mod root;
mod sequence;

use core::cmp::Ordering;
use core::fmt;
use std::sync::{Arc, OnceLock};

use num_bigint::{BigInt, BigUint};
use num_rational::BigRational;
use num_traits::{One, Signed, ToPrimitive, Zero};

use crate::algebra::traits::{Field, Ring, Semiring};
use crate::error::{Result, TowerError};
use crate::macros::{forward_ref_binop, forward_ref_unop};
use crate::rational::{parse_efficient, ConstructedRational};
use sequence::{find_apartness, rational_from_natural, Node};

/// Binary precision searched when dividing through [`Field::ring_div`].
pub const DEFAULT_APARTNESS_BITS: u32 = 64;

/// Decimal digits printed by `Display` when no precision is given.
pub const DISPLAY_DIGITS: usize = 10;

/// Binary precision of [`ConstructedReal::to_f64`], past what a double holds.
const F64_BITS: u32 = 64;

/// Largest `2^bits` precision probed by the finite-prefix check.
const MAX_PREFIX_BITS: u32 = 64;

/// The precision `k = 2^bits`, i.e. the tolerance `2^-bits`.
#[must_use]
pub fn precision_bits(bits: u32) -> BigUint {
    BigUint::one() << bits
}

/// A real number, represented by a lazily evaluated Cauchy sequence.
///
/// Cloning shares the underlying node.
#[derive(Clone)]
pub struct ConstructedReal {
    node: Arc<Node>,
}

impl ConstructedReal {
    fn from_node(node: Node) -> Self {
        Self {
            node: Arc::new(node),
        }
    }

    /// The constant sequence `q, q, q, …`.
    #[must_use]
    pub fn from_rational(q: &ConstructedRational) -> Self {
        Self::from_node(Node::Constant(q.reduced()))
    }

    /// `0`.
    #[must_use]
    pub fn zero() -> Self {
        Self::from_rational(&ConstructedRational::zero())
    }

    /// `1`.
    #[must_use]
    pub fn one() -> Self {
        Self::from_rational(&ConstructedRational::one())
    }

    /// A caller-supplied sequence with its modulus.
    ///
    /// Nothing is checked: the pair must actually satisfy the Cauchy
    /// condition. [`ConstructedReal::is_cauchy_on_finite_prefix`] can test a
    /// prefix of it.
    ///
    /// ```
    /// use num_bigint::BigUint;
    /// use num_traits::ToPrimitive;
    /// use number_tower::{ConstructedRational, ConstructedReal};
    ///
    /// // 1/(n+1) → 0, and terms past index k are within 1/k of each other.
    /// let tail = ConstructedReal::from_fn(
    ///     |n| ConstructedRational::of(1, n as i64 + 1).unwrap_or_else(|_| ConstructedRational::zero()),
    ///     |k: &BigUint| k.to_u64().unwrap_or(u64::MAX),
    /// );
    /// assert!(tail.is_cauchy_on_finite_prefix(200));
    /// ```
    pub fn from_fn<T, M>(term: T, modulus: M) -> Self
    where
        T: Fn(u64) -> ConstructedRational + Send + Sync + 'static,
        M: Fn(&BigUint) -> u64 + Send + Sync + 'static,
    {
        Self::from_node(Node::Generated {
            term: Box::new(term),
            modulus: Box::new(modulus),
        })
    }

    /// The exact value of a finite double.
    ///
    /// # Errors
    ///
    /// Returns [`TowerError::NonFinite`] for NaN and the infinities.
    pub fn from_f64(value: f64) -> Result<Self> {
        let exact = BigRational::from_float(value).ok_or(TowerError::NonFinite(value))?;
        Ok(Self::from_rational(&ConstructedRational::from_efficient(&exact)))
    }

    /// The exact value of a decimal or fraction string such as `"-2.125"`.
    ///
    /// # Errors
    ///
    /// Returns [`TowerError::Parse`] for malformed input.
    pub fn from_decimal_str(s: &str) -> Result<Self> {
        let exact = parse_efficient(s)?;
        Ok(Self::from_rational(&ConstructedRational::from_efficient(&exact)))
    }

    /// The `n`-th term of the representative sequence.
    #[must_use]
    pub fn term(&self, n: u64) -> ConstructedRational {
        self.node.term(n)
    }

    /// An index past which all terms are within `1/k` of each other.
    ///
    /// `k = 0` is treated as `k = 1`.
    #[must_use]
    pub fn modulus(&self, k: &BigUint) -> u64 {
        if k.is_zero() {
            return self.node.modulus(&BigUint::one());
        }
        self.node.modulus(k)
    }

    /// The first `prefix` terms.
    pub fn terms(&self, prefix: u64) -> impl Iterator<Item = ConstructedRational> + '_ {
        (0..prefix).map(move |n| self.term(n))
    }

    /// A rational within `2^-bits` of the limit.
    #[must_use]
    pub fn approximate_rational(&self, bits: u32) -> ConstructedRational {
        self.term(self.modulus(&precision_bits(bits)))
    }

    /// The nearest double to a `2^-64` approximation of the limit.
    #[must_use]
    pub fn to_f64(&self) -> f64 {
        self.approximate_rational(F64_BITS)
            .to_efficient()
            .to_f64()
            .unwrap_or(f64::NAN)
    }

    /// Decimal rendering rounded to `digits` places after the point.
    ///
    /// The approximation used is within `½·10^-digits` of the limit, so the
    /// last digit can be off by one.
    #[must_use]
    pub fn to_decimal(&self, digits: usize) -> String {
        let scale = num_traits::pow(BigInt::from(10u8), digits);
        let k = scale.magnitude() * 2u32;
        let approx = self.term(self.modulus(&k)).to_efficient();
        let rounded = (approx * BigRational::from_integer(scale)).round().to_integer();
        let sign = if rounded.is_negative() { "-" } else { "" };
        let body = rounded.magnitude().to_str_radix(10);
        if digits == 0 {
            return format!("{sign}{body}");
        }
        let padded = format!("{body:0>width$}", width = digits + 1);
        let (whole, fraction) = padded.split_at(padded.len() - digits);
        format!("{sign}{whole}.{fraction}")
    }

    /// Compares the limits at precision `1/k`.
    ///
    /// The guarantee is one-sided. [`Ordering::Equal`] certifies that the
    /// limits are within `1/k` of each other, and any other result certifies
    /// the sign of their difference. Limits that are close but not equal may
    /// still come back ordered, even when they are exactly `1/k` apart.
    /// There is no precision-free comparison.
    #[must_use]
    pub fn compare(&self, other: &Self, precision: &BigUint) -> Ordering {
        let k = if precision.is_zero() {
            BigUint::one()
        } else {
            precision.clone()
        };
        let doubled = k * 2u32;
        let difference = self - other;
        let x = difference.term(difference.modulus(&doubled));
        if &x.abs() * &rational_from_natural(&doubled) <= ConstructedRational::one() {
            Ordering::Equal
        } else {
            x.signum()
        }
    }

    /// `compare(other, precision) == Equal`: `true` certifies the limits are
    /// within `1/precision`, `false` only that they differ.
    #[must_use]
    pub fn approx_eq(&self, other: &Self, precision: &BigUint) -> bool {
        self.compare(other, precision) == Ordering::Equal
    }

    /// Checks the modulus against the first `prefix` terms.
    ///
    /// For every `k = 2^j` whose modulus `N` falls inside the prefix, all of
    /// `a_N, …, a_{prefix−1}` must lie within `1/k` of each other. A
    /// diagnostic: arithmetic never calls it.
    #[must_use]
    pub fn is_cauchy_on_finite_prefix(&self, prefix: u64) -> bool {
        let terms: Vec<ConstructedRational> = self.terms(prefix).collect();
        for bits in 0..=MAX_PREFIX_BITS {
            let k = precision_bits(bits);
            let start = self.modulus(&k);
            let Ok(start) = usize::try_from(start) else {
                break;
            };
            if start >= terms.len() {
                break;
            }
            let window = &terms[start..];
            let (Some(low), Some(high)) = (window.iter().min(), window.iter().max()) else {
                break;
            };
            let spread = high - low;
            if &spread * &rational_from_natural(&k) > ConstructedRational::one() {
                tracing::debug!(
                    node = self.node.tag(),
                    bits,
                    start,
                    spread = %spread,
                    "terms past the modulus are not within tolerance"
                );
                return false;
            }
        }
        true
    }

    /// `1 / self`, once `self` is shown apart from zero within `2^-budget`.
    ///
    /// # Errors
    ///
    /// [`TowerError::DivisionByZero`] for the constant zero and
    /// [`TowerError::NotApart`] when no term past the searched moduli
    /// separates the value from zero.
    pub fn try_recip(&self, budget: u32) -> Result<Self> {
        if let Some(q) = self.as_constant() {
            return match q.reciprocal() {
                Ok(inverse) => Ok(Self::from_rational(&inverse)),
                Err(_) => Err(TowerError::DivisionByZero { layer: "real" }),
            };
        }
        let witness = find_apartness(self, budget).ok_or(TowerError::NotApart { budget })?;
        Ok(Self::from_node(Node::Reciprocal {
            of: self.clone(),
            witness,
        }))
    }

    /// `self ÷ other` with the default apartness budget.
    ///
    /// # Errors
    ///
    /// Fails as [`ConstructedReal::try_recip`] fails on `other`.
    pub fn checked_div(&self, other: &Self) -> Result<Self> {
        self.checked_div_within(other, DEFAULT_APARTNESS_BITS)
    }

    /// `self ÷ other`, searching `budget` bits for apartness of `other`.
    ///
    /// # Errors
    ///
    /// Fails as [`ConstructedReal::try_recip`] fails on `other`.
    pub fn checked_div_within(&self, other: &Self, budget: u32) -> Result<Self> {
        Ok(self * &other.try_recip(budget)?)
    }

    fn as_constant(&self) -> Option<&ConstructedRational> {
        match self.node.as_ref() {
            Node::Constant(q) => Some(q),
            _ => None,
        }
    }
}

impl fmt::Debug for ConstructedReal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.as_constant() {
            Some(q) => write!(f, "ConstructedReal({q})"),
            None => write!(f, "ConstructedReal(<{}>)", self.node.tag()),
        }
    }
}

impl fmt::Display for ConstructedReal {
    /// Forces the sequence; `{:.n}` selects the number of digits.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_decimal(f.precision().unwrap_or(DISPLAY_DIGITS)))
    }
}

impl From<&ConstructedRational> for ConstructedReal {
    fn from(q: &ConstructedRational) -> Self {
        Self::from_rational(q)
    }
}

// =============================================================================
// Arithmetic
// =============================================================================
//
// Constant operands fold eagerly; everything else becomes a new node.

impl core::ops::Add<&ConstructedReal> for &ConstructedReal {
    type Output = ConstructedReal;

    fn add(self, rhs: &ConstructedReal) -> ConstructedReal {
        if let (Some(a), Some(b)) = (self.as_constant(), rhs.as_constant()) {
            return ConstructedReal::from_rational(&(a + b));
        }
        ConstructedReal::from_node(Node::Sum(self.clone(), rhs.clone()))
    }
}

impl core::ops::Sub<&ConstructedReal> for &ConstructedReal {
    type Output = ConstructedReal;

    fn sub(self, rhs: &ConstructedReal) -> ConstructedReal {
        self + &(-rhs)
    }
}

impl core::ops::Mul<&ConstructedReal> for &ConstructedReal {
    type Output = ConstructedReal;

    fn mul(self, rhs: &ConstructedReal) -> ConstructedReal {
        if let (Some(a), Some(b)) = (self.as_constant(), rhs.as_constant()) {
            return ConstructedReal::from_rational(&(a * b));
        }
        ConstructedReal::from_node(Node::Product {
            left: self.clone(),
            right: rhs.clone(),
            bounds: OnceLock::new(),
        })
    }
}

impl core::ops::Neg for &ConstructedReal {
    type Output = ConstructedReal;

    fn neg(self) -> ConstructedReal {
        match self.as_constant() {
            Some(q) => ConstructedReal::from_rational(&-q),
            None => ConstructedReal::from_node(Node::Negation(self.clone())),
        }
    }
}

forward_ref_binop!(impl Add, add for ConstructedReal);
forward_ref_binop!(impl Sub, sub for ConstructedReal);
forward_ref_binop!(impl Mul, mul for ConstructedReal);
forward_ref_unop!(impl Neg, neg for ConstructedReal);

impl Semiring for ConstructedReal {
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

impl Ring for ConstructedReal {
    #[inline]
    fn ring_neg(&self) -> Self {
        -self
    }

    #[inline]
    fn ring_sub(&self, other: &Self) -> Self {
        self - other
    }
}

impl Field for ConstructedReal {
    fn ring_recip(&self) -> Result<Self> {
        self.try_recip(DEFAULT_APARTNESS_BITS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn q(p: i64, d: i64) -> ConstructedRational {
        ConstructedRational::of(p, d).unwrap()
    }

    fn r(p: i64, d: i64) -> ConstructedReal {
        ConstructedReal::from_rational(&q(p, d))
    }

    /// `1/3` as the decimal truncations `0, 0.3, 0.33, …`, hiding the constant.
    fn third_by_decimals() -> ConstructedReal {
        ConstructedReal::from_fn(
            |n| {
                let scale = num_traits::pow(BigInt::from(10u8), n as usize);
                let digits = &scale / BigInt::from(3u8);
                ConstructedRational::from_efficient(&BigRational::new(digits, scale))
            },
            |k| u64::from(k.bits()),
        )
    }

    fn fine() -> BigUint {
        precision_bits(24)
    }

    #[test]
    fn test_constant_arithmetic_folds() {
        let sum = &r(1, 2) + &r(1, 3);
        assert_eq!(sum.term(0), q(5, 6));
        assert_eq!(format!("{sum:?}"), "ConstructedReal(5/6)");
        assert_eq!((&r(2, 3) * &r(3, 4)).term(7), q(1, 2));
    }

    #[test]
    fn test_lazy_sum_and_product() {
        let third = third_by_decimals();
        let sum = &third + &third;
        assert!(sum.approx_eq(&r(2, 3), &fine()));
        let product = &third * &r(3, 1);
        assert!(product.approx_eq(&ConstructedReal::one(), &fine()));
        assert_eq!(format!("{product:?}"), "ConstructedReal(<product>)");
    }

    #[test]
    fn test_subtraction_cancels() {
        let third = third_by_decimals();
        assert!((&third - &r(1, 3)).approx_eq(&ConstructedReal::zero(), &fine()));
    }

    #[test]
    fn test_compare_is_one_sided() {
        let quarter = BigUint::from(4u32);
        // Exactly 1/k apart: not certified equal, the sign is certain.
        assert_eq!(
            ConstructedReal::zero().compare(&r(1, 4), &quarter),
            Ordering::Less
        );
        assert!(!ConstructedReal::zero().approx_eq(&r(1, 4), &quarter));
        assert!(ConstructedReal::zero().approx_eq(&r(1, 16), &quarter));
    }

    #[test]
    fn test_long_sum_chain_forces_and_drops() {
        let one = ConstructedReal::one();
        let mut acc = ConstructedReal::sqrt(&q(2, 1), 8).unwrap();
        for _ in 0..100_000 {
            acc = &acc + &one;
        }
        assert_eq!(acc.term(0), q(100_000, 1));
        assert_eq!(acc.modulus(&BigUint::one()), 8);
        drop(acc);
    }

    #[test]
    fn test_long_negation_chain_forces_and_drops() {
        let mut acc = ConstructedReal::from_fn(|_| q(1, 1), |_| 0);
        for _ in 0..100_001 {
            acc = -&acc;
        }
        assert_eq!(acc.term(3), q(-1, 1));
        assert_eq!(acc.modulus(&fine()), 0);
        drop(acc);
    }

    #[test]
    fn test_product_chain_forces_and_drops() {
        let one = ConstructedReal::one();
        let mut acc = ConstructedReal::from_fn(|_| q(3, 2), |_| 0);
        for _ in 0..2_000 {
            acc = &acc * &one;
        }
        assert_eq!(acc.term(5), q(3, 2));
        assert_eq!(acc.modulus(&fine()), 0);
    }

    #[test]
    fn test_shared_operands_survive_drop() {
        let third = third_by_decimals();
        let mut acc = third.clone();
        for _ in 0..1_000 {
            acc = &acc - &third;
        }
        drop(acc);
        assert!(third.approx_eq(&r(1, 3), &fine()));
    }

    #[test]
    fn test_compare_at_precision() {
        let third = third_by_decimals();
        assert_eq!(third.compare(&r(1, 4), &fine()), Ordering::Greater);
        assert_eq!(r(1, 4).compare(&third, &fine()), Ordering::Less);
        // 1/3 and 1/3 + 2^-30 are indistinguishable at 2^-24.
        let nudged = &third + &ConstructedReal::from_rational(&q(1, 1 << 30));
        assert_eq!(third.compare(&nudged, &fine()), Ordering::Equal);
    }

    #[test]
    fn test_reciprocal_of_lazy_value() {
        let third = third_by_decimals();
        let three = third.try_recip(16).unwrap();
        assert!(three.approx_eq(&r(3, 1), &fine()));
        let one = third.checked_div(&third).unwrap();
        assert!(one.approx_eq(&ConstructedReal::one(), &fine()));
    }

    #[test]
    fn test_reciprocal_of_zero() {
        assert_eq!(
            ConstructedReal::zero().try_recip(8).err(),
            Some(TowerError::DivisionByZero { layer: "real" })
        );
        let vanishing = &third_by_decimals() - &r(1, 3);
        assert_eq!(
            vanishing.try_recip(12).err(),
            Some(TowerError::NotApart { budget: 12 })
        );
    }

    #[test]
    fn test_prefix_check() {
        assert!(third_by_decimals().is_cauchy_on_finite_prefix(40));
        // Claims to settle immediately but keeps moving by 1/2 per step.
        let liar = ConstructedReal::from_fn(|n| q(n as i64, 2), |_| 0);
        assert!(!liar.is_cauchy_on_finite_prefix(10));
    }

    #[test]
    fn test_f64_round_trip() {
        let x = ConstructedReal::from_f64(-0.375).unwrap();
        assert_eq!(x.term(0), q(-3, 8));
        assert_eq!(x.to_f64(), -0.375);
        assert!(matches!(
            ConstructedReal::from_f64(f64::NAN),
            Err(TowerError::NonFinite(_))
        ));
        assert!(ConstructedReal::from_f64(f64::INFINITY).is_err());
    }

    #[test]
    fn test_decimal_rendering() {
        let x = ConstructedReal::from_decimal_str("-2.125").unwrap();
        assert_eq!(x.to_decimal(3), "-2.125");
        assert_eq!(x.to_decimal(1), "-2.1");
        assert_eq!(r(1, 40).to_decimal(3), "0.025");
        assert_eq!(r(7, 2).to_decimal(0), "4");
        assert_eq!(format!("{:.4}", third_by_decimals()), "0.3333");
        assert!(ConstructedReal::from_decimal_str("two").is_err());
    }

    #[test]
    fn test_zero_precision_is_unit() {
        let third = third_by_decimals();
        assert_eq!(third.modulus(&BigUint::zero()), third.modulus(&BigUint::one()));
    }

    #[test]
    fn test_field_capability() {
        let half = r(1, 2);
        let quotient = ConstructedReal::one().ring_div(&half).unwrap();
        assert!(quotient.approx_eq(&r(2, 1), &fine()));
        assert!(half.ring_sub(&half).approx_eq(&ConstructedReal::ring_zero(), &fine()));
    }
}
