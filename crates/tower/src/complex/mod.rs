//! Complex numbers as ordered pairs of reals.
//!
//! ```text
//! (a, b) + (c, d) = (a + c, b + d)
//! (a, b) × (c, d) = (ac − bd, ad + bc)
//! (a, b) ÷ (c, d) = ((ac + bd) / (c² + d²), (bc − ad) / (c² + d²))
//! ```
//!
//! There is no order on ℂ, so [`ConstructedComplex`] implements the
//! algebraic capabilities ([`Semiring`], [`Ring`], [`Field`]) and nothing
//! else. Equality is approximate, component-wise, at a caller-chosen
//! precision, as it is for the reals underneath.

mod imaginary;

use core::fmt;

use num_bigint::BigUint;

pub use imaginary::ConstructedImaginary;

use crate::algebra::traits::{Field, Ring, Semiring};
use crate::error::{Result, TowerError};
use crate::macros::{forward_ref_binop, forward_ref_unop};
use crate::real::{ConstructedReal, DEFAULT_APARTNESS_BITS, DISPLAY_DIGITS};

/// A complex number `re + im·i`.
#[derive(Clone, Debug)]
pub struct ConstructedComplex {
    re: ConstructedReal,
    im: ConstructedReal,
}

impl ConstructedComplex {
    /// The pair `(re, im)`.
    #[must_use]
    pub fn new(re: ConstructedReal, im: ConstructedReal) -> Self {
        Self { re, im }
    }

    /// The embedding `r ↦ (r, 0)`.
    #[must_use]
    pub fn from_real(r: &ConstructedReal) -> Self {
        Self::new(r.clone(), ConstructedReal::zero())
    }

    /// `(0, 0)`.
    #[must_use]
    pub fn zero() -> Self {
        Self::from_real(&ConstructedReal::zero())
    }

    /// `(1, 0)`.
    #[must_use]
    pub fn one() -> Self {
        Self::from_real(&ConstructedReal::one())
    }

    /// `(0, 1)`.
    #[must_use]
    pub fn i() -> Self {
        Self::new(ConstructedReal::zero(), ConstructedReal::one())
    }

    /// Real part.
    #[inline]
    #[must_use]
    pub fn re(&self) -> &ConstructedReal {
        &self.re
    }

    /// Imaginary part.
    #[inline]
    #[must_use]
    pub fn im(&self) -> &ConstructedReal {
        &self.im
    }

    /// `(a, −b)`.
    #[must_use]
    pub fn conjugate(&self) -> Self {
        Self::new(self.re.clone(), -&self.im)
    }

    /// `a² + b²`, a real.
    #[must_use]
    pub fn modulus_squared(&self) -> ConstructedReal {
        &(&self.re * &self.re) + &(&self.im * &self.im)
    }

    /// Multiplies both components by a real.
    #[must_use]
    pub fn scale(&self, factor: &ConstructedReal) -> Self {
        Self::new(&self.re * factor, &self.im * factor)
    }

    /// `1 / self = conj(self) / |self|²`.
    ///
    /// # Errors
    ///
    /// [`TowerError::DivisionByZero`] when `self` is the constant zero and
    /// [`TowerError::NotApart`] when `|self|²` cannot be separated from zero
    /// within `2^-budget`.
    pub fn try_recip(&self, budget: u32) -> Result<Self> {
        let inverse_norm = self
            .modulus_squared()
            .try_recip(budget)
            .map_err(|err| match err {
                TowerError::DivisionByZero { .. } => {
                    TowerError::DivisionByZero { layer: "complex" }
                }
                other => other,
            })?;
        Ok(self.conjugate().scale(&inverse_norm))
    }

    /// `self ÷ other`.
    ///
    /// # Errors
    ///
    /// Fails as [`ConstructedComplex::try_recip`] fails on `other`.
    pub fn checked_div(&self, other: &Self) -> Result<Self> {
        Ok(self * &other.try_recip(DEFAULT_APARTNESS_BITS)?)
    }

    /// Both components agree within `1/precision`.
    #[must_use]
    pub fn approx_eq(&self, other: &Self, precision: &BigUint) -> bool {
        self.re.approx_eq(&other.re, precision) && self.im.approx_eq(&other.im, precision)
    }

    /// `"a + bi"` with both parts rounded to `digits` places.
    #[must_use]
    pub fn to_decimal(&self, digits: usize) -> String {
        let re = self.re.to_decimal(digits);
        let im = self.im.to_decimal(digits);
        match im.strip_prefix('-') {
            Some(magnitude) => format!("{re} - {magnitude}i"),
            None => format!("{re} + {im}i"),
        }
    }
}

impl fmt::Display for ConstructedComplex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_decimal(f.precision().unwrap_or(DISPLAY_DIGITS)))
    }
}

impl From<&ConstructedReal> for ConstructedComplex {
    fn from(r: &ConstructedReal) -> Self {
        Self::from_real(r)
    }
}

impl core::ops::Add<&ConstructedComplex> for &ConstructedComplex {
    type Output = ConstructedComplex;

    fn add(self, rhs: &ConstructedComplex) -> ConstructedComplex {
        ConstructedComplex::new(&self.re + &rhs.re, &self.im + &rhs.im)
    }
}

impl core::ops::Sub<&ConstructedComplex> for &ConstructedComplex {
    type Output = ConstructedComplex;

    fn sub(self, rhs: &ConstructedComplex) -> ConstructedComplex {
        ConstructedComplex::new(&self.re - &rhs.re, &self.im - &rhs.im)
    }
}

impl core::ops::Mul<&ConstructedComplex> for &ConstructedComplex {
    type Output = ConstructedComplex;

    fn mul(self, rhs: &ConstructedComplex) -> ConstructedComplex {
        let (a, b) = (&self.re, &self.im);
        let (c, d) = (&rhs.re, &rhs.im);
        ConstructedComplex::new(&(a * c) - &(b * d), &(a * d) + &(b * c))
    }
}

impl core::ops::Neg for &ConstructedComplex {
    type Output = ConstructedComplex;

    fn neg(self) -> ConstructedComplex {
        ConstructedComplex::new(-&self.re, -&self.im)
    }
}

forward_ref_binop!(impl Add, add for ConstructedComplex);
forward_ref_binop!(impl Sub, sub for ConstructedComplex);
forward_ref_binop!(impl Mul, mul for ConstructedComplex);
forward_ref_unop!(impl Neg, neg for ConstructedComplex);

impl Semiring for ConstructedComplex {
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

impl Ring for ConstructedComplex {
    #[inline]
    fn ring_neg(&self) -> Self {
        -self
    }

    #[inline]
    fn ring_sub(&self, other: &Self) -> Self {
        self - other
    }
}

impl Field for ConstructedComplex {
    fn ring_recip(&self) -> Result<Self> {
        self.try_recip(DEFAULT_APARTNESS_BITS)
    }
}
