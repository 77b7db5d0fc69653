//! Property-based tests for the quotient layers.
//!
//! Uses proptest to check that arithmetic on integer and rational classes is
//! independent of the chosen representative and agrees with the efficient
//! layer for arbitrary inputs.

use num_bigint::BigInt;
use num_rational::BigRational;
use number_tower::prelude::*;
use proptest::prelude::*;

fn shifted(z: &ConstructedInteger, by: u64) -> ConstructedInteger {
    let (a, b) = z.pair();
    ConstructedInteger::from_pair(a + by, b + by)
}

// =============================================================================
// Integer Properties
// =============================================================================

proptest! {
    /// (a, b) ~ (a + k, b + k)
    #[test]
    fn prop_shift_preserves_class(a in 0u64..1_000_000, b in 0u64..1_000_000, k in 0u64..1_000) {
        let z = ConstructedInteger::of(a, b);
        prop_assert_eq!(shifted(&z, k), z);
    }

    /// Operations give equal classes for any representatives of the operands.
    #[test]
    fn prop_integer_ops_ignore_representative(
        a in 0u64..10_000, b in 0u64..10_000,
        c in 0u64..10_000, d in 0u64..10_000,
        k in 0u64..100, m in 0u64..100,
    ) {
        let x = ConstructedInteger::of(a, b);
        let y = ConstructedInteger::of(c, d);
        let x_alt = shifted(&x, k);
        let y_alt = shifted(&y, m);
        prop_assert_eq!(&x + &y, &x_alt + &y_alt);
        prop_assert_eq!(&x - &y, &x_alt - &y_alt);
        prop_assert_eq!(&x * &y, &x_alt * &y_alt);
        prop_assert_eq!(x.compare(&y), x_alt.compare(&y_alt));
    }

    /// The projection is a ring homomorphism.
    #[test]
    fn prop_integer_projection_commutes(x in -100_000i64..100_000, y in -100_000i64..100_000) {
        let a = ConstructedInteger::from_i64(x);
        let b = ConstructedInteger::from_i64(y);
        prop_assert_eq!((&a + &b).to_efficient(), BigInt::from(x) + BigInt::from(y));
        prop_assert_eq!((&a * &b).to_efficient(), BigInt::from(x) * BigInt::from(y));
        prop_assert_eq!((&a - &b).to_efficient(), BigInt::from(x) - BigInt::from(y));
    }

    /// Equal classes hash equally.
    #[test]
    fn prop_integer_hash_follows_class(a in 0u64..1_000, b in 0u64..1_000, k in 0u64..1_000) {
        use std::collections::hash_map::DefaultHasher;
        use std::hash::{Hash, Hasher};
        let hash = |z: &ConstructedInteger| {
            let mut h = DefaultHasher::new();
            z.hash(&mut h);
            h.finish()
        };
        let z = ConstructedInteger::of(a, b);
        prop_assert_eq!(hash(&z), hash(&shifted(&z, k)));
    }
}

// =============================================================================
// Rational Properties
// =============================================================================

proptest! {
    /// (p, q) ~ (kp, kq) for every non-zero k.
    #[test]
    fn prop_scaling_preserves_class(
        p in -1_000i64..1_000,
        q in 1i64..1_000,
        k in 1i64..50,
        flip: bool,
    ) {
        let k = if flip { -k } else { k };
        prop_assert_eq!(
            ConstructedRational::of(p, q).unwrap(),
            ConstructedRational::of(p * k, q * k).unwrap()
        );
    }

    /// The projection is a field homomorphism.
    #[test]
    fn prop_rational_projection_commutes(
        p in -500i64..500, q in 1i64..50,
        r in -500i64..500, s in 1i64..50,
    ) {
        let a = ConstructedRational::of(p, q).unwrap();
        let b = ConstructedRational::of(r, s).unwrap();
        let ea = BigRational::new(BigInt::from(p), BigInt::from(q));
        let eb = BigRational::new(BigInt::from(r), BigInt::from(s));
        prop_assert_eq!((&a + &b).to_efficient(), &ea + &eb);
        prop_assert_eq!((&a * &b).to_efficient(), &ea * &eb);
        prop_assert_eq!(a.compare(&b), ea.cmp(&eb));
        if r != 0 {
            prop_assert_eq!(a.checked_div(&b).unwrap().to_efficient(), &ea / &eb);
        } else {
            prop_assert!(a.checked_div(&b).is_err());
        }
    }

    /// Parsing the display form gives back the same class.
    #[test]
    fn prop_rational_display_parses_back(p in -10_000i64..10_000, q in 1i64..10_000) {
        let a = ConstructedRational::of(p, q).unwrap();
        prop_assert_eq!(a.to_string().parse::<ConstructedRational>().unwrap(), a);
    }
}

// =============================================================================
// Real Properties
// =============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    /// Square roots of small rationals square back within tolerance.
    #[test]
    fn prop_sqrt_squares_back(p in 0i64..400, q in 1i64..20) {
        let x = ConstructedRational::of(p, q).unwrap();
        let root = ConstructedReal::sqrt(&x, 48).unwrap();
        let square = &root * &root;
        prop_assert!(square.approx_eq(&ConstructedReal::from_rational(&x), &precision_bits(16)));
    }

    /// Dyadic doubles survive the trip through a constructed real.
    #[test]
    fn prop_dyadic_f64_round_trip(i in -1_000_000i32..1_000_000, shift in 0u32..20) {
        let value = f64::from(i) / f64::from(1u32 << shift);
        let real = ConstructedReal::from_f64(value).unwrap();
        prop_assert_eq!(real.to_f64(), value);
    }
}
