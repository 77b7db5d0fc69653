//! Floating-point bridges: ℝ, ℂ and the imaginary axis against `f64`.
//!
//! Samples are dyadic, so every sample is exact on both sides and a round
//! trip reproduces it bit for bit. Results of arithmetic are compared with
//! [`reals_agree`] / [`complexes_agree`].

use num_complex::Complex64;
use num_rational::BigRational;

use super::{preserves_binary, preserves_field, Isomorphism};
use crate::algebra::efficient::{complexes_agree, reals_agree};
use crate::complex::{ConstructedComplex, ConstructedImaginary};
use crate::error::{Result, TowerError};
use crate::rational::ConstructedRational;
use crate::real::{precision_bits, ConstructedReal};

/// Bisection steps used when checking square roots.
const ROOT_ITERATIONS: u32 = 64;

/// Precision, in bits, of the order check on real samples.
const ORDER_BITS: u32 = 32;

/// `i / 8` for `i` in `−bound..=bound`.
fn dyadic(bound: u32) -> impl Iterator<Item = f64> {
    let bound = i32::try_from(bound).unwrap_or(i32::MAX);
    (-bound..=bound).map(|i| f64::from(i) / 8.0)
}

/// [`ConstructedReal`] ↔ `f64`.
#[derive(Debug, Clone, Copy, Default)]
pub struct RealIsomorphism;

impl RealIsomorphism {
    /// `compare` at `2^-32` matches the order of the doubles.
    fn preserves_order(samples: &[f64], lifted: &[ConstructedReal]) -> bool {
        let precision = precision_bits(ORDER_BITS);
        for (a, x) in samples.iter().zip(lifted) {
            for (b, y) in samples.iter().zip(lifted) {
                let expected = a.partial_cmp(b);
                let actual = x.compare(y, &precision);
                if expected != Some(actual) {
                    tracing::debug!(left = a, right = b, ?actual, "real order not preserved");
                    return false;
                }
            }
        }
        true
    }

    /// Bisected square roots of the non-negative samples match `f64::sqrt`.
    fn preserves_roots(samples: &[f64]) -> bool {
        samples.iter().filter(|a| **a >= 0.0).all(|a| {
            let Some(exact) = BigRational::from_float(*a) else {
                return false;
            };
            let radicand = ConstructedRational::from_efficient(&exact);
            let agrees = ConstructedReal::sqrt(&radicand, ROOT_ITERATIONS)
                .map(|root| reals_agree(root.to_f64(), a.sqrt()))
                .unwrap_or(false);
            if !agrees {
                tracing::debug!(radicand = a, "square root not preserved");
            }
            agrees
        })
    }
}

impl Isomorphism for RealIsomorphism {
    type Constructed = ConstructedReal;
    type Efficient = f64;

    const LAYER: &'static str = "real";

    fn to_efficient(value: &ConstructedReal) -> f64 {
        value.to_f64()
    }

    fn from_efficient(value: &f64) -> Result<ConstructedReal> {
        ConstructedReal::from_f64(*value)
    }

    fn samples(bound: u32) -> Vec<f64> {
        dyadic(bound).collect()
    }

    fn agrees(left: &f64, right: &f64) -> bool {
        reals_agree(*left, *right)
    }

    fn preserves_operations(samples: &[f64]) -> bool {
        let Ok(lifted) = samples
            .iter()
            .map(|a| ConstructedReal::from_f64(*a))
            .collect::<Result<Vec<_>>>()
        else {
            return false;
        };
        preserves_field::<Self>(samples)
            && Self::preserves_order(samples, &lifted)
            && Self::preserves_roots(samples)
    }
}

/// [`ConstructedComplex`] ↔ `Complex64`.
#[derive(Debug, Clone, Copy, Default)]
pub struct ComplexIsomorphism;

impl Isomorphism for ComplexIsomorphism {
    type Constructed = ConstructedComplex;
    type Efficient = Complex64;

    const LAYER: &'static str = "complex";

    fn to_efficient(value: &ConstructedComplex) -> Complex64 {
        Complex64::new(value.re().to_f64(), value.im().to_f64())
    }

    fn from_efficient(value: &Complex64) -> Result<ConstructedComplex> {
        Ok(ConstructedComplex::new(
            ConstructedReal::from_f64(value.re)?,
            ConstructedReal::from_f64(value.im)?,
        ))
    }

    /// `i/4 + j/8·i` for `i` in `−bound..=bound`, with `j` a permutation of
    /// the same range so that both parts vary independently.
    fn samples(bound: u32) -> Vec<Complex64> {
        let width = 2 * i64::from(bound) + 1;
        (-i64::from(bound)..=i64::from(bound))
            .map(|i| {
                let j = (3 * i).rem_euclid(width) - i64::from(bound);
                Complex64::new(i as f64 / 4.0, j as f64 / 8.0)
            })
            .collect()
    }

    fn agrees(left: &Complex64, right: &Complex64) -> bool {
        complexes_agree(*left, *right)
    }

    fn preserves_operations(samples: &[Complex64]) -> bool {
        let conjugation = samples.iter().all(|a| match Self::from_efficient(a) {
            Ok(x) => {
                let conjugate = Self::agrees(&Self::to_efficient(&x.conjugate()), &a.conj());
                let norm = reals_agree(x.modulus_squared().to_f64(), a.norm_sqr());
                if !(conjugate && norm) {
                    tracing::debug!(operand = ?a, conjugate, norm, "conjugation not preserved");
                }
                conjugate && norm
            }
            Err(_) => false,
        });
        conjugation && preserves_field::<Self>(samples)
    }
}

/// [`ConstructedImaginary`] ↔ `Complex64` with a zero real part.
#[derive(Debug, Clone, Copy, Default)]
pub struct ImaginaryIsomorphism;

impl ImaginaryIsomorphism {
    /// `(b·i)(d·i)` is the real `−b·d`: the constructed product is checked
    /// as a real against the real part of the efficient product, whose
    /// imaginary part must vanish.
    fn preserves_collapse(samples: &[Complex64], lifted: &[ConstructedImaginary]) -> bool {
        for (a, x) in samples.iter().zip(lifted) {
            for (b, y) in samples.iter().zip(lifted) {
                let expected = a * b;
                let actual: ConstructedReal = x * y;
                if expected.im != 0.0 || !reals_agree(actual.to_f64(), expected.re) {
                    tracing::debug!(left = ?a, right = ?b, ?expected, "imaginary product not real");
                    return false;
                }
            }
        }
        true
    }
}

impl Isomorphism for ImaginaryIsomorphism {
    type Constructed = ConstructedImaginary;
    type Efficient = Complex64;

    const LAYER: &'static str = "imaginary";

    fn to_efficient(value: &ConstructedImaginary) -> Complex64 {
        Complex64::new(0.0, value.coefficient().to_f64())
    }

    /// # Errors
    ///
    /// [`TowerError::NotPureImaginary`] off the imaginary axis.
    fn from_efficient(value: &Complex64) -> Result<ConstructedImaginary> {
        if value.re != 0.0 {
            return Err(TowerError::NotPureImaginary(value.re));
        }
        Ok(ConstructedImaginary::new(ConstructedReal::from_f64(value.im)?))
    }

    fn samples(bound: u32) -> Vec<Complex64> {
        dyadic(bound).map(|b| Complex64::new(0.0, b)).collect()
    }

    fn agrees(left: &Complex64, right: &Complex64) -> bool {
        complexes_agree(*left, *right)
    }

    fn preserves_operations(samples: &[Complex64]) -> bool {
        let Ok(lifted) = samples
            .iter()
            .map(Self::from_efficient)
            .collect::<Result<Vec<_>>>()
        else {
            return false;
        };
        let negation = samples
            .iter()
            .zip(&lifted)
            .all(|(a, x)| Self::agrees(&Self::to_efficient(&-x), &-a));
        negation
            && preserves_binary::<Self, _, _>("add", samples, &lifted, |x, y| x + y, |a, b| a + b)
            && preserves_binary::<Self, _, _>("sub", samples, &lifted, |x, y| x - y, |a, b| a - b)
            && preserves_binary::<Self, _, _>(
                "scale",
                samples,
                &lifted,
                |x, y| x.scale(y.coefficient()),
                |a, b| Complex64::new(0.0, a.im * b.im),
            )
            && Self::preserves_collapse(samples, &lifted)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_real_bridge() {
        assert_eq!(RealIsomorphism::samples(2), vec![-0.25, -0.125, 0.0, 0.125, 0.25]);
        assert!(RealIsomorphism::verify_round_trip(8));
    }

    #[test]
    fn test_non_finite_real_has_no_constructed_value() {
        assert!(RealIsomorphism::from_efficient(&f64::NAN).is_err());
        assert!(!super::super::round_trips::<RealIsomorphism>(&[1.0, f64::INFINITY]));
    }

    #[test]
    fn test_complex_bridge() {
        let samples = ComplexIsomorphism::samples(3);
        assert_eq!(samples.len(), 7);
        assert!(samples.iter().all(|z| z.norm_sqr() > 0.0));
        assert!(ComplexIsomorphism::verify_round_trip(3));
    }

    #[test]
    fn test_imaginary_bridge() {
        assert!(ImaginaryIsomorphism::verify_round_trip(6));
        assert_eq!(
            ImaginaryIsomorphism::from_efficient(&Complex64::new(1.0, 2.0)).err(),
            Some(TowerError::NotPureImaginary(1.0))
        );
    }

    #[test]
    fn test_order_check_rejects_reversed_lift() {
        let samples = [0.0, 1.0];
        let reversed = [ConstructedReal::one(), ConstructedReal::zero()];
        assert!(!RealIsomorphism::preserves_order(&samples, &reversed));
    }
}
