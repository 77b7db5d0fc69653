//! The embedding chain `ℕ ↪ ℤ ↪ ℚ ↪ ℝ ↪ ℂ`, plus `iℝ ↪ ℂ`.
//!
//! Each map is injective and preserves addition and multiplication. The
//! composite `ℕ ↪ ℤ ↪ ℚ` coincides with the direct map `ℕ ↪ ℚ`.
//! [`verify_embedding_chain`] checks all of this on a finite sample.

use core::fmt;

use num_bigint::BigUint;

use crate::algebra::traits::Semiring;
use crate::complex::{ConstructedComplex, ConstructedImaginary};
use crate::integer::ConstructedInteger;
use crate::natural::VonNeumannNatural;
use crate::rational::ConstructedRational;
use crate::real::{precision_bits, ConstructedReal};

/// Precision, in bits, at which embedded reals and complexes are compared.
const CHAIN_BITS: u32 = 32;

/// `n ↦ (n, 0)`.
#[must_use]
pub fn natural_to_integer(n: &VonNeumannNatural) -> ConstructedInteger {
    ConstructedInteger::from(n)
}

/// `z ↦ z / 1`.
#[must_use]
pub fn integer_to_rational(z: &ConstructedInteger) -> ConstructedRational {
    ConstructedRational::from(z)
}

/// `q ↦ (q, q, q, …)`.
#[must_use]
pub fn rational_to_real(q: &ConstructedRational) -> ConstructedReal {
    ConstructedReal::from(q)
}

/// `r ↦ (r, 0)`.
#[must_use]
pub fn real_to_complex(r: &ConstructedReal) -> ConstructedComplex {
    ConstructedComplex::from(r)
}

/// `b·i ↦ (0, b)`.
#[must_use]
pub fn imaginary_to_complex(b: &ConstructedImaginary) -> ConstructedComplex {
    ConstructedComplex::from(b)
}

/// `n ↦ (n, 0) / (1, 0)`, without passing through [`natural_to_integer`].
#[must_use]
pub fn natural_to_rational(n: &VonNeumannNatural) -> ConstructedRational {
    let numerator = ConstructedInteger::from_pair(n.count(), BigUint::default());
    ConstructedRational::from_integer(&numerator)
}

/// Checks one link of the chain on `samples`, which must be distinct.
///
/// Injectivity: distinct samples have images that `same` tells apart.
/// Homomorphism: `embed(a + b)` and `embed(a × b)` are `same` as the sum
/// and product of the images.
fn check_link<A, B, F, S>(link: &'static str, samples: &[A], embed: F, same: S) -> bool
where
    A: Semiring + fmt::Debug,
    B: Semiring,
    F: Fn(&A) -> B,
    S: Fn(&B, &B) -> bool,
{
    let images: Vec<B> = samples.iter().map(&embed).collect();
    for (i, (a, x)) in samples.iter().zip(&images).enumerate() {
        for (j, (b, y)) in samples.iter().zip(&images).enumerate() {
            let failure = if i != j && same(x, y) {
                Some("not injective")
            } else if !same(&embed(&a.ring_add(b)), &x.ring_add(y)) {
                Some("does not preserve addition")
            } else if !same(&embed(&a.ring_mul(b)), &x.ring_mul(y)) {
                Some("does not preserve multiplication")
            } else {
                None
            };
            if let Some(failure) = failure {
                tracing::debug!(link, left = ?a, right = ?b, failure, "embedding check failed");
                return false;
            }
        }
    }
    true
}

/// The imaginary axis is not a ring; its embedding is checked for
/// injectivity, additivity and `(b·i)(d·i) ↦ (b·i)·(d·i)` in ℂ.
fn check_imaginary_link(samples: &[ConstructedReal], precision: &BigUint) -> bool {
    let imaginaries: Vec<ConstructedImaginary> = samples
        .iter()
        .map(|b| ConstructedImaginary::new(b.clone()))
        .collect();
    for (i, x) in imaginaries.iter().enumerate() {
        for (j, y) in imaginaries.iter().enumerate() {
            let (zx, zy) = (imaginary_to_complex(x), imaginary_to_complex(y));
            let injective = i == j || !zx.approx_eq(&zy, precision);
            let additive = imaginary_to_complex(&(x + y)).approx_eq(&(&zx + &zy), precision);
            let collapsed = real_to_complex(&(x * y)).approx_eq(&(&zx * &zy), precision);
            if !(injective && additive && collapsed) {
                tracing::debug!(
                    link = "imaginary → complex",
                    injective,
                    additive,
                    collapsed,
                    "embedding check failed"
                );
                return false;
            }
        }
    }
    true
}

/// Verifies every link and the commuting triangle over naturals `0..=bound`
/// and integers `−bound..=bound`.
///
/// Natural multiplication is unary, so the cost grows with `bound⁴`.
#[must_use]
pub fn verify_embedding_chain(bound: u32) -> bool {
    let precision = precision_bits(CHAIN_BITS);
    let naturals: Vec<VonNeumannNatural> =
        (0..=u64::from(bound)).map(VonNeumannNatural::from_u64).collect();
    let integers: Vec<ConstructedInteger> = (-i64::from(bound)..=i64::from(bound))
        .map(ConstructedInteger::from_i64)
        .collect();
    let rationals: Vec<ConstructedRational> = integers
        .iter()
        .filter_map(|z| ConstructedRational::new(z.clone(), ConstructedInteger::of(2, 0)).ok())
        .collect();
    let reals: Vec<ConstructedReal> = rationals.iter().map(rational_to_real).collect();

    let commutes = naturals.iter().all(|n| {
        let composite = integer_to_rational(&natural_to_integer(n));
        let direct = natural_to_rational(n);
        if composite != direct {
            tracing::debug!(natural = %n, "ℕ → ℤ → ℚ differs from ℕ → ℚ");
        }
        composite == direct
    });

    let verified = commutes
        && check_link("natural → integer", &naturals, natural_to_integer, |x, y| x == y)
        && check_link("integer → rational", &integers, integer_to_rational, |x, y| x == y)
        && check_link("rational → real", &rationals, rational_to_real, |x, y| {
            x.approx_eq(y, &precision)
        })
        && check_link("real → complex", &reals, real_to_complex, |x, y| {
            x.approx_eq(y, &precision)
        })
        && check_imaginary_link(&reals, &precision);
    tracing::debug!(bound, verified, "embedding chain verification");
    verified
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_triangle_commutes() {
        for n in 0..10 {
            let n = VonNeumannNatural::from_u64(n);
            assert_eq!(integer_to_rational(&natural_to_integer(&n)), natural_to_rational(&n));
        }
    }

    #[test]
    fn test_links() {
        let three = VonNeumannNatural::from_u64(3);
        assert_eq!(natural_to_integer(&three), ConstructedInteger::of(5, 2));
        let half = ConstructedRational::of(1, 2).unwrap();
        let z = real_to_complex(&rational_to_real(&half));
        assert_eq!(z.re().term(0), half);
        assert!(z.im().term(0).is_zero());
        let b = ConstructedImaginary::new(rational_to_real(&half));
        let embedded = imaginary_to_complex(&b);
        assert!(embedded.re().term(0).is_zero());
        assert_eq!(embedded.im().term(0), half);
    }

    #[test]
    fn test_chain_verifies() {
        assert!(verify_embedding_chain(6));
    }

    #[test]
    fn test_link_detects_non_injective_map() {
        let integers: Vec<ConstructedInteger> =
            (-2..=2).map(ConstructedInteger::from_i64).collect();
        let square = |z: &ConstructedInteger| integer_to_rational(&(z * z));
        assert!(!check_link("square", &integers, square, |x, y| x == y));
    }
}
