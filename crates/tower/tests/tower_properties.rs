//! The tower's named properties, checked end to end through the public API.

use num_bigint::{BigInt, BigUint};
use number_tower::prelude::*;
use number_tower::{
    integer_to_rational, natural_to_integer, natural_to_rational, verify_embedding_chain,
    ComplexIsomorphism, ImaginaryIsomorphism, IntegerIsomorphism, NaturalIsomorphism,
    RationalIsomorphism, RealIsomorphism,
};

fn rational(p: i64, q: i64) -> ConstructedRational {
    ConstructedRational::of(p, q).unwrap()
}

fn real(p: i64, q: i64) -> ConstructedReal {
    ConstructedReal::from_rational(&rational(p, q))
}

// =============================================================================
// Equivalence Invariance
// =============================================================================

#[test]
fn equivalent_pairs_build_equal_integers() {
    assert_eq!(ConstructedInteger::of(3, 1), ConstructedInteger::of(4, 2));
    assert_eq!(ConstructedInteger::of(3, 1).to_efficient(), BigInt::from(2));

    for a in 0..8u64 {
        for b in 0..8u64 {
            for c in 0..8u64 {
                // d is forced by a + d = b + c; skip when it would be negative.
                let Some(d) = (b + c).checked_sub(a) else {
                    continue;
                };
                let left = ConstructedInteger::of(a, b);
                let right = ConstructedInteger::of(c, d);
                assert_eq!(left, right, "({a},{b}) vs ({c},{d})");
            }
        }
    }
}

#[test]
fn equivalent_naturals_build_equal_integers() {
    let n = |k| VonNeumannNatural::from_u64(k);
    let left = ConstructedInteger::from_naturals(&n(7), &n(2));
    let right = ConstructedInteger::from_naturals(&n(10), &n(5));
    assert_eq!(left, right);
}

#[test]
fn arithmetic_is_representative_independent() {
    let a = ConstructedInteger::of(3, 1);
    let a_alt = ConstructedInteger::of(10, 8);
    let b = ConstructedInteger::of(2, 5);
    let b_alt = ConstructedInteger::of(0, 3);
    assert_eq!(&a + &b, &a_alt + &b_alt);
    assert_eq!(&a * &b, &a_alt * &b_alt);
    assert_eq!(&a - &b, &a_alt - &b_alt);

    let p = rational(1, 2);
    let p_alt = rational(-7, -14);
    let q = rational(2, 3);
    let q_alt = rational(6, 9);
    assert_eq!(&p + &q, &p_alt + &q_alt);
    assert_eq!(p.checked_div(&q).unwrap(), p_alt.checked_div(&q_alt).unwrap());
}

// =============================================================================
// Quotient Arithmetic Round Trip
// =============================================================================

#[test]
fn quotient_arithmetic_matches_efficient_values() {
    let a = ConstructedInteger::of(3, 1);
    let b = ConstructedInteger::of(2, 5);
    assert_eq!((&a + &b).to_efficient(), BigInt::from(-1));
    assert_eq!((&a - &b).to_efficient(), BigInt::from(5));
    assert_eq!((&a * &b).to_efficient(), BigInt::from(-6));
    assert_eq!((-&a).to_efficient(), BigInt::from(-2));
}

// =============================================================================
// Rational Field Law
// =============================================================================

#[test]
fn every_nonzero_rational_has_an_inverse() {
    for p in -12..=12 {
        for q in (-7..=7).filter(|q| *q != 0) {
            let a = rational(p, q);
            if a.is_zero() {
                assert!(a.reciprocal().is_err());
                continue;
            }
            assert_eq!(&a * &a.reciprocal().unwrap(), ConstructedRational::one());
        }
    }
}

#[test]
fn density_witness_lies_strictly_between() {
    let a = rational(-1, 3);
    let b = rational(-1, 4);
    let m = a.midpoint(&b);
    assert!(a < m && m < b);
}

// =============================================================================
// Cauchy Convergence
// =============================================================================

#[test]
fn square_root_of_two_converges() {
    let root = ConstructedReal::sqrt(&rational(2, 1), 64).unwrap();
    assert!(root.is_cauchy_on_finite_prefix(64));

    let approx = root.approximate_rational(30);
    let square = &approx * &approx;
    assert!(square <= rational(2, 1));
    assert!(&rational(2, 1) - &square < rational(1, 1000));
}

#[test]
fn lazy_arithmetic_keeps_moduli_honest() {
    let root = ConstructedReal::sqrt(&rational(2, 1), 64).unwrap();
    let expr = &(&root * &root) - &real(1, 1);
    assert!(expr.is_cauchy_on_finite_prefix(48));
    assert!(expr.approx_eq(&real(1, 1), &precision_bits(24)));

    let inverse = root.try_recip(32).unwrap();
    assert!((&inverse * &root).approx_eq(&ConstructedReal::one(), &precision_bits(24)));
}

// =============================================================================
// Isomorphism Preservation
// =============================================================================

#[test]
fn integer_bridge_holds_to_one_fifty() {
    assert!(IntegerIsomorphism::verify_round_trip(150));
    for k in -150..150i64 {
        let k = BigInt::from(k);
        let constructed = IntegerIsomorphism::from_efficient(&k).unwrap();
        assert_eq!(IntegerIsomorphism::to_efficient(&constructed), k);
    }
}

#[test]
fn every_bridge_round_trips() {
    assert!(NaturalIsomorphism::verify_round_trip(16));
    assert!(RationalIsomorphism::verify_round_trip(10));
    assert!(RealIsomorphism::verify_round_trip(12));
    assert!(ComplexIsomorphism::verify_round_trip(4));
    assert!(ImaginaryIsomorphism::verify_round_trip(8));
}

// =============================================================================
// Embedding Chain
// =============================================================================

#[test]
fn embedding_triangle_commutes() {
    for n in 0..40 {
        let n = VonNeumannNatural::from_u64(n);
        assert_eq!(integer_to_rational(&natural_to_integer(&n)), natural_to_rational(&n));
    }
    assert!(verify_embedding_chain(8));
}

// =============================================================================
// Complex Non-Ordering and Imaginary Collapse
// =============================================================================

#[test]
fn imaginary_products_are_real() {
    for b in -4..=4 {
        for d in -4..=4 {
            let bi = ConstructedImaginary::new(real(b, 2));
            let di = ConstructedImaginary::new(real(d, 3));
            let product: ConstructedReal = &bi * &di;
            assert!(product.approx_eq(&real(-b * d, 6), &precision_bits(30)));
        }
    }
}

#[test]
fn natural_axioms_hold_on_both_carriers() {
    assert!(VonNeumannNatural::satisfies_axioms(32));
    assert!(BigUint::satisfies_axioms(32));
    assert_eq!(VonNeumannNatural::from_u64(5).to_set_view().len(), 5);
}
