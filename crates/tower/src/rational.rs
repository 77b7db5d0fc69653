//! Rationals as equivalence classes of pairs of integers.
//!
//! The pair `(p, q)` with `q ≁ 0` stands for `p / q`. Two pairs denote the
//! same rational exactly when `p · s = q · r`, and that relation (computed
//! with [`ConstructedInteger`] multiplication and the integer quotient
//! relation) is what [`PartialEq`] implements.
//!
//! ```text
//! p/q + r/s = (ps + rq) / qs
//! p/q − r/s = (ps − rq) / qs
//! p/q × r/s = pr / qs
//! p/q ÷ r/s = ps / qr          (r ≁ 0)
//! ```
//!
//! A zero denominator is rejected when the pair is built, never later.
//!
//! # Example
//!
//! ```
//! use number_tower::{ConstructedRational, TowerError};
//!
//! let half = ConstructedRational::of(1, 2)?;
//! let third = ConstructedRational::of(-2, -6)?;
//! assert_eq!((&half + &third).to_string(), "5/6");
//! assert_eq!(ConstructedRational::of(1, 0), Err(TowerError::ZeroDenominator));
//! # Ok::<(), TowerError>(())
//! ```

use core::cmp::Ordering;
use core::fmt;
use core::hash::{Hash, Hasher};
use core::str::FromStr;

use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::{One, Zero};

use crate::algebra::traits::{Field, Ordered, Ring, Semiring};
use crate::error::{Result, TowerError};
use crate::integer::ConstructedInteger;
use crate::macros::{forward_ref_binop, forward_ref_unop};

/// A rational as the class of an integer pair `(p, q)`, `q ≁ 0`.
///
/// Equality is the quotient relation `(p, q) ~ (r, s) ⟺ p·s ~ q·r`, not
/// field-wise equality of the stored pair.
#[derive(Clone)]
pub struct ConstructedRational {
    numerator: ConstructedInteger,
    denominator: ConstructedInteger,
}

impl ConstructedRational {
    /// The class of `(numerator, denominator)`.
    ///
    /// # Errors
    ///
    /// Returns [`TowerError::ZeroDenominator`] when `denominator ~ 0`.
    pub fn new(numerator: ConstructedInteger, denominator: ConstructedInteger) -> Result<Self> {
        if denominator.is_zero() {
            return Err(TowerError::ZeroDenominator);
        }
        Ok(Self::from_parts(numerator, denominator))
    }

    /// The class of `p / q` for machine integers.
    ///
    /// # Errors
    ///
    /// Returns [`TowerError::ZeroDenominator`] when `q == 0`.
    pub fn of(p: i64, q: i64) -> Result<Self> {
        Self::new(ConstructedInteger::from_i64(p), ConstructedInteger::from_i64(q))
    }

    /// The class of `p / q` for borrowed integer classes.
    ///
    /// # Errors
    ///
    /// Returns [`TowerError::ZeroDenominator`] when `q ~ 0`.
    pub fn from_integers(p: &ConstructedInteger, q: &ConstructedInteger) -> Result<Self> {
        Self::new(p.clone(), q.clone())
    }

    /// Internal constructor; callers guarantee `denominator ≁ 0`.
    fn from_parts(numerator: ConstructedInteger, denominator: ConstructedInteger) -> Self {
        Self {
            numerator,
            denominator,
        }
    }

    /// The embedding `z ↦ z / 1`.
    #[must_use]
    pub fn from_integer(z: &ConstructedInteger) -> Self {
        Self::from_parts(z.clone(), ConstructedInteger::one())
    }

    /// `0 / 1`.
    #[must_use]
    pub fn zero() -> Self {
        Self::from_integer(&ConstructedInteger::zero())
    }

    /// `1 / 1`.
    #[must_use]
    pub fn one() -> Self {
        Self::from_integer(&ConstructedInteger::one())
    }

    /// The stored numerator representative.
    #[inline]
    #[must_use]
    pub fn numerator(&self) -> &ConstructedInteger {
        &self.numerator
    }

    /// The stored denominator representative.
    #[inline]
    #[must_use]
    pub fn denominator(&self) -> &ConstructedInteger {
        &self.denominator
    }

    /// The quotient relation `p·s ~ q·r`.
    #[must_use]
    pub fn equivalent(&self, other: &Self) -> bool {
        (&self.numerator * &other.denominator).equivalent(&(&self.denominator * &other.numerator))
    }

    /// The same class with a positive denominator representative.
    #[must_use]
    pub fn with_positive_denominator(&self) -> Self {
        if self.denominator.is_negative() {
            Self::from_parts(-&self.numerator, -&self.denominator)
        } else {
            self.clone()
        }
    }

    /// The same class in lowest terms with minimal integer pairs.
    ///
    /// Reduction goes through the efficient rational, which keeps its values
    /// in lowest terms; the class itself is unchanged.
    #[must_use]
    pub fn reduced(&self) -> Self {
        Self::from_efficient(&self.to_efficient())
    }

    /// True for the class of `0 / q`.
    #[inline]
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.numerator.is_zero()
    }

    /// Sign as an ordering against zero.
    #[must_use]
    pub fn signum(&self) -> Ordering {
        match (self.numerator.signum(), self.denominator.signum()) {
            (Ordering::Equal, _) => Ordering::Equal,
            (n, d) if n == d => Ordering::Greater,
            _ => Ordering::Less,
        }
    }

    /// Absolute value.
    #[must_use]
    pub fn abs(&self) -> Self {
        Self::from_parts(self.numerator.abs(), self.denominator.abs())
    }

    /// Multiplicative inverse `q / p`.
    ///
    /// # Errors
    ///
    /// Returns [`TowerError::DivisionByZero`] when the numerator is `~ 0`.
    pub fn reciprocal(&self) -> Result<Self> {
        if self.numerator.is_zero() {
            return Err(TowerError::DivisionByZero { layer: "rational" });
        }
        Ok(Self::from_parts(self.denominator.clone(), self.numerator.clone()))
    }

    /// `q / p` without the zero check, for callers holding an apartness witness.
    pub(crate) fn reciprocal_unchecked(&self) -> Self {
        debug_assert!(!self.numerator.is_zero());
        Self::from_parts(self.denominator.clone(), self.numerator.clone())
    }

    /// `self ÷ other`.
    ///
    /// # Errors
    ///
    /// Returns [`TowerError::DivisionByZero`] when `other ~ 0`.
    pub fn checked_div(&self, other: &Self) -> Result<Self> {
        Ok(self * &other.reciprocal()?)
    }

    /// `(self + other) / 2`, strictly between the two when they differ.
    ///
    /// Witnesses that the order on ℚ is dense.
    #[must_use]
    pub fn midpoint(&self, other: &Self) -> Self {
        let sum = self + other;
        Self::from_parts(sum.numerator, &sum.denominator * &ConstructedInteger::of(2, 0))
    }

    /// Projects the class onto the efficient rational `p / q`.
    #[must_use]
    pub fn to_efficient(&self) -> BigRational {
        BigRational::new(self.numerator.to_efficient(), self.denominator.to_efficient())
    }

    /// The class of an efficient rational's reduced numerator and denominator.
    #[must_use]
    pub fn from_efficient(value: &BigRational) -> Self {
        Self::from_parts(
            ConstructedInteger::from_efficient(value.numer()),
            ConstructedInteger::from_efficient(value.denom()),
        )
    }

    /// Parses `"p/q"`, `"p"` or a decimal such as `"-1.25"` exactly.
    ///
    /// # Errors
    ///
    /// Returns [`TowerError::Parse`] for malformed input and
    /// [`TowerError::ZeroDenominator`] for `"p/0"`.
    pub fn parse(s: &str) -> Result<Self> {
        Ok(Self::from_efficient(&parse_efficient(s)?))
    }
}

/// Parses a fraction or an exact decimal into the efficient rational.
pub(crate) fn parse_efficient(s: &str) -> Result<BigRational> {
    let trimmed = s.trim();
    if let Some((p, q)) = trimmed.split_once('/') {
        let p = BigInt::from_str(p.trim()).map_err(|_| TowerError::parse(s, "invalid numerator"))?;
        let q =
            BigInt::from_str(q.trim()).map_err(|_| TowerError::parse(s, "invalid denominator"))?;
        if q.is_zero() {
            return Err(TowerError::ZeroDenominator);
        }
        return Ok(BigRational::new(p, q));
    }
    parse_decimal(trimmed).ok_or_else(|| TowerError::parse(s, "not a fraction or decimal"))
}

/// `[-+]digits[.digits]` as an exact rational.
fn parse_decimal(s: &str) -> Option<BigRational> {
    let (negative, unsigned) = match s.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, s.strip_prefix('+').unwrap_or(s)),
    };
    let (whole, fraction) = unsigned.split_once('.').unwrap_or((unsigned, ""));
    if whole.is_empty() && fraction.is_empty() {
        return None;
    }
    if !whole.chars().chain(fraction.chars()).all(|c| c.is_ascii_digit()) {
        return None;
    }
    let digits = format!("{whole}{fraction}");
    let magnitude = BigInt::from_str(if digits.is_empty() { "0" } else { &digits }).ok()?;
    let scale = num_traits::pow(BigInt::from(10u8), fraction.len());
    let value = BigRational::new(magnitude, scale);
    Some(if negative { -value } else { value })
}

impl PartialEq for ConstructedRational {
    fn eq(&self, other: &Self) -> bool {
        self.equivalent(other)
    }
}

impl Eq for ConstructedRational {}

impl Hash for ConstructedRational {
    fn hash<H: Hasher>(&self, state: &mut H) {
        let canonical = self.to_efficient();
        canonical.numer().hash(state);
        canonical.denom().hash(state);
    }
}

impl Ordered for ConstructedRational {
    /// With positive denominators, `p/q < r/s ⟺ p·s < r·q`.
    fn compare(&self, other: &Self) -> Ordering {
        let a = self.with_positive_denominator();
        let b = other.with_positive_denominator();
        (&a.numerator * &b.denominator).compare(&(&b.numerator * &a.denominator))
    }
}

impl PartialOrd for ConstructedRational {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for ConstructedRational {
    fn cmp(&self, other: &Self) -> Ordering {
        self.compare(other)
    }
}

impl fmt::Debug for ConstructedRational {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ConstructedRational({:?} / {:?})",
            self.numerator, self.denominator
        )
    }
}

impl fmt::Display for ConstructedRational {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let canonical = self.to_efficient();
        if canonical.denom().is_one() {
            write!(f, "{}", canonical.numer())
        } else {
            write!(f, "{}/{}", canonical.numer(), canonical.denom())
        }
    }
}

impl FromStr for ConstructedRational {
    type Err = TowerError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl From<&ConstructedInteger> for ConstructedRational {
    /// `z ↦ z / 1`.
    fn from(z: &ConstructedInteger) -> Self {
        Self::from_integer(z)
    }
}

// =============================================================================
// Arithmetic
// =============================================================================

impl core::ops::Add<&ConstructedRational> for &ConstructedRational {
    type Output = ConstructedRational;

    fn add(self, rhs: &ConstructedRational) -> ConstructedRational {
        let (p, q) = (&self.numerator, &self.denominator);
        let (r, s) = (&rhs.numerator, &rhs.denominator);
        ConstructedRational::from_parts(p * s + r * q, q * s)
    }
}

impl core::ops::Sub<&ConstructedRational> for &ConstructedRational {
    type Output = ConstructedRational;

    fn sub(self, rhs: &ConstructedRational) -> ConstructedRational {
        let (p, q) = (&self.numerator, &self.denominator);
        let (r, s) = (&rhs.numerator, &rhs.denominator);
        ConstructedRational::from_parts(p * s - r * q, q * s)
    }
}

impl core::ops::Mul<&ConstructedRational> for &ConstructedRational {
    type Output = ConstructedRational;

    fn mul(self, rhs: &ConstructedRational) -> ConstructedRational {
        ConstructedRational::from_parts(
            &self.numerator * &rhs.numerator,
            &self.denominator * &rhs.denominator,
        )
    }
}

impl core::ops::Neg for &ConstructedRational {
    type Output = ConstructedRational;

    fn neg(self) -> ConstructedRational {
        ConstructedRational::from_parts(-&self.numerator, self.denominator.clone())
    }
}

forward_ref_binop!(impl Add, add for ConstructedRational);
forward_ref_binop!(impl Sub, sub for ConstructedRational);
forward_ref_binop!(impl Mul, mul for ConstructedRational);
forward_ref_unop!(impl Neg, neg for ConstructedRational);

impl Semiring for ConstructedRational {
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

impl Ring for ConstructedRational {
    #[inline]
    fn ring_neg(&self) -> Self {
        -self
    }

    #[inline]
    fn ring_sub(&self, other: &Self) -> Self {
        self - other
    }
}

impl Field for ConstructedRational {
    #[inline]
    fn ring_recip(&self) -> Result<Self> {
        self.reciprocal()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn q(p: i64, d: i64) -> ConstructedRational {
        ConstructedRational::of(p, d).unwrap()
    }

    #[test]
    fn test_zero_denominator_rejected() {
        assert_eq!(
            ConstructedRational::new(ConstructedInteger::one(), ConstructedInteger::of(4, 4)),
            Err(TowerError::ZeroDenominator)
        );
        let three = ConstructedInteger::of(5, 2);
        assert_eq!(
            ConstructedRational::from_integers(&three, &ConstructedInteger::of(0, 6)),
            Ok(q(-1, 2))
        );
    }

    #[test]
    fn test_cross_multiplication_equality() {
        assert_eq!(q(1, 2), q(3, 6));
        assert_eq!(q(1, -2), q(-1, 2));
        assert_ne!(q(1, 2), q(2, 1));
    }

    #[test]
    fn test_field_arithmetic() {
        assert_eq!(&q(1, 2) + &q(1, 3), q(5, 6));
        assert_eq!(&q(1, 2) - &q(1, 3), q(1, 6));
        assert_eq!(&q(2, 3) * &q(9, 4), q(3, 2));
        assert_eq!(q(2, 3).checked_div(&q(4, 9)).unwrap(), q(3, 2));
    }

    #[test]
    fn test_division_by_zero() {
        assert_eq!(
            q(2, 3).checked_div(&q(0, 7)),
            Err(TowerError::DivisionByZero { layer: "rational" })
        );
    }

    #[test]
    fn test_reciprocal_law() {
        for p in -6..=6 {
            for d in 1..=4 {
                let a = q(p, d);
                if a.is_zero() {
                    continue;
                }
                assert_eq!(&a * &a.reciprocal().unwrap(), ConstructedRational::one());
            }
        }
    }

    #[test]
    fn test_compare_with_negative_denominators() {
        assert_eq!(q(1, -2).compare(&q(1, 3)), Ordering::Less);
        assert_eq!(q(-3, -4).compare(&q(1, 2)), Ordering::Greater);
        assert_eq!(q(2, 4).compare(&q(-1, -2)), Ordering::Equal);
    }

    #[test]
    fn test_midpoint_is_strictly_between() {
        let a = q(1, 3);
        let b = q(1, 2);
        let m = a.midpoint(&b);
        assert!(a < m && m < b);
        assert_eq!(m, q(5, 12));
    }

    #[test]
    fn test_signum_and_abs() {
        assert_eq!(q(-1, -3).signum(), Ordering::Greater);
        assert_eq!(q(1, -3).signum(), Ordering::Less);
        assert_eq!(q(0, -3).signum(), Ordering::Equal);
        assert_eq!(q(1, -3).abs(), q(1, 3));
    }

    #[test]
    fn test_parse_forms() {
        assert_eq!("3/4".parse::<ConstructedRational>().unwrap(), q(3, 4));
        assert_eq!("-1.25".parse::<ConstructedRational>().unwrap(), q(-5, 4));
        assert_eq!("7".parse::<ConstructedRational>().unwrap(), q(7, 1));
        assert_eq!(".5".parse::<ConstructedRational>().unwrap(), q(1, 2));
        assert_eq!(
            "1/0".parse::<ConstructedRational>(),
            Err(TowerError::ZeroDenominator)
        );
        assert!("1.2.3".parse::<ConstructedRational>().is_err());
        assert!("-".parse::<ConstructedRational>().is_err());
    }

    #[test]
    fn test_reduced_keeps_class() {
        let a = &q(2, 4) + &q(3, 6);
        let r = a.reduced();
        assert_eq!(r, a);
        assert_eq!(r.to_string(), "1");
    }

    #[test]
    fn test_hash_follows_relation() {
        use std::collections::HashSet;
        let mut set = HashSet::new();
        set.insert(q(2, 4));
        assert!(set.contains(&q(-3, -6)));
    }
}
