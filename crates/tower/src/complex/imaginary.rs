//! Pure imaginaries `b·i`.
//!
//! Sums, differences and real multiples of pure imaginaries stay pure
//! imaginary. The product of two does not: `(b·i)(d·i) = −b·d` is real, and
//! `Mul` says so in its `Output` type.

use core::fmt;

use num_bigint::BigUint;

use super::ConstructedComplex;
use crate::macros::{forward_ref_binop, forward_ref_unop};
use crate::real::{ConstructedReal, DISPLAY_DIGITS};

/// The pure imaginary `coefficient · i`.
#[derive(Clone, Debug)]
pub struct ConstructedImaginary {
    coefficient: ConstructedReal,
}

impl ConstructedImaginary {
    /// `b·i`.
    #[must_use]
    pub fn new(coefficient: ConstructedReal) -> Self {
        Self { coefficient }
    }

    /// `0·i`.
    #[must_use]
    pub fn zero() -> Self {
        Self::new(ConstructedReal::zero())
    }

    /// `1·i`.
    #[must_use]
    pub fn unit() -> Self {
        Self::new(ConstructedReal::one())
    }

    /// The real coefficient `b`.
    #[inline]
    #[must_use]
    pub fn coefficient(&self) -> &ConstructedReal {
        &self.coefficient
    }

    /// `(r·b)·i`.
    #[must_use]
    pub fn scale(&self, factor: &ConstructedReal) -> Self {
        Self::new(&self.coefficient * factor)
    }

    /// The embedding `b·i ↦ (0, b)`.
    #[must_use]
    pub fn to_complex(&self) -> ConstructedComplex {
        ConstructedComplex::new(ConstructedReal::zero(), self.coefficient.clone())
    }

    /// Coefficients agree within `1/precision`.
    #[must_use]
    pub fn approx_eq(&self, other: &Self, precision: &BigUint) -> bool {
        self.coefficient.approx_eq(&other.coefficient, precision)
    }
}

impl fmt::Display for ConstructedImaginary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let digits = f.precision().unwrap_or(DISPLAY_DIGITS);
        write!(f, "{}i", self.coefficient.to_decimal(digits))
    }
}

impl From<&ConstructedImaginary> for ConstructedComplex {
    fn from(b: &ConstructedImaginary) -> Self {
        b.to_complex()
    }
}

impl core::ops::Add<&ConstructedImaginary> for &ConstructedImaginary {
    type Output = ConstructedImaginary;

    fn add(self, rhs: &ConstructedImaginary) -> ConstructedImaginary {
        ConstructedImaginary::new(&self.coefficient + &rhs.coefficient)
    }
}

impl core::ops::Sub<&ConstructedImaginary> for &ConstructedImaginary {
    type Output = ConstructedImaginary;

    fn sub(self, rhs: &ConstructedImaginary) -> ConstructedImaginary {
        ConstructedImaginary::new(&self.coefficient - &rhs.coefficient)
    }
}

impl core::ops::Neg for &ConstructedImaginary {
    type Output = ConstructedImaginary;

    fn neg(self) -> ConstructedImaginary {
        ConstructedImaginary::new(-&self.coefficient)
    }
}

/// `(b·i)(d·i) = −b·d`.
impl core::ops::Mul<&ConstructedImaginary> for &ConstructedImaginary {
    type Output = ConstructedReal;

    fn mul(self, rhs: &ConstructedImaginary) -> ConstructedReal {
        -&(&self.coefficient * &rhs.coefficient)
    }
}

impl core::ops::Mul for ConstructedImaginary {
    type Output = ConstructedReal;

    fn mul(self, rhs: ConstructedImaginary) -> ConstructedReal {
        &self * &rhs
    }
}

/// `(b·i)·r = (b·r)·i`.
impl core::ops::Mul<&ConstructedReal> for &ConstructedImaginary {
    type Output = ConstructedImaginary;

    fn mul(self, rhs: &ConstructedReal) -> ConstructedImaginary {
        self.scale(rhs)
    }
}

forward_ref_binop!(impl Add, add for ConstructedImaginary);
forward_ref_binop!(impl Sub, sub for ConstructedImaginary);
forward_ref_unop!(impl Neg, neg for ConstructedImaginary);
