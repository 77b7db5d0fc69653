//! Von Neumann naturals: the successor chain at the bottom of the tower.
//!
//! A natural is either [`VonNeumannNatural::Zero`] or the successor of
//! another natural. Read as sets, `0 = {}` and `n + 1 = n ∪ {n}`, so every
//! natural is the set of its predecessors; [`VonNeumannNatural::to_set_view`]
//! builds that set literally.
//!
//! # Cost Model
//!
//! The representation is unary. Converting to or from the efficient natural,
//! comparing, adding and multiplying all cost time linear in the values
//! involved (multiplication in their product). Successors share their
//! predecessor chain through an [`Arc`], so building `n + 1` from `n` is O(1).
//!
//! # Example
//!
//! ```
//! use number_tower::VonNeumannNatural;
//!
//! let two = VonNeumannNatural::from_u64(2);
//! let three = two.succ();
//! assert_eq!((&two + &three).depth(), 5);
//! assert_eq!(three.to_set_view().len(), 3);
//! assert!(VonNeumannNatural::Zero.predecessor().is_none());
//! ```

use core::cmp::Ordering;
use core::fmt;
use core::hash::{Hash, Hasher};
use std::collections::BTreeSet;
use std::sync::{Arc, OnceLock};

use num_bigint::BigUint;

use crate::algebra::traits::{Ordered, PeanoAxioms, Semiring};
use crate::macros::forward_ref_binop;

/// A natural number as a chain of successors.
///
/// Equality, ordering and hashing are defined by chain length and never
/// recurse, so arbitrarily long chains are safe to compare and to drop.
#[derive(Clone)]
pub enum VonNeumannNatural {
    /// The empty set.
    Zero,
    /// `of ∪ {of}`.
    Successor(Arc<VonNeumannNatural>),
}

/// The zero every dropped chain is unlinked onto.
fn shared_zero() -> Arc<VonNeumannNatural> {
    static ZERO: OnceLock<Arc<VonNeumannNatural>> = OnceLock::new();
    Arc::clone(ZERO.get_or_init(|| Arc::new(VonNeumannNatural::Zero)))
}

impl VonNeumannNatural {
    /// Zero, `{}`.
    pub const ZERO: Self = Self::Zero;

    /// One, `{0}`.
    #[must_use]
    pub fn one() -> Self {
        Self::Zero.succ()
    }

    /// Builds `n` by applying the successor `n` times.
    #[must_use]
    pub fn from_u64(n: u64) -> Self {
        let mut value = Self::Zero;
        for _ in 0..n {
            value = value.succ();
        }
        value
    }

    /// Builds the chain for an efficient natural by unary counting.
    ///
    /// Linear in `n`; callers keep `n` within a sample bound.
    #[must_use]
    pub fn from_count(n: &BigUint) -> Self {
        let mut value = Self::Zero;
        let mut counter = BigUint::default();
        while &counter < n {
            value = value.succ();
            counter += 1u32;
        }
        value
    }

    /// The successor `self ∪ {self}`.
    #[inline]
    #[must_use]
    pub fn succ(&self) -> Self {
        Self::Successor(Arc::new(self.clone()))
    }

    /// The predecessor, or `None` for zero.
    #[inline]
    #[must_use]
    pub fn predecessor(&self) -> Option<&Self> {
        match self {
            Self::Zero => None,
            Self::Successor(of) => Some(&**of),
        }
    }

    /// True for the empty chain.
    #[inline]
    #[must_use]
    pub fn is_zero(&self) -> bool {
        matches!(self, Self::Zero)
    }

    /// Length of the successor chain.
    #[must_use]
    pub fn depth(&self) -> u64 {
        let mut depth = 0;
        let mut cursor = self;
        while let Self::Successor(of) = cursor {
            depth += 1;
            cursor = &**of;
        }
        depth
    }

    /// Counts the chain into the efficient natural.
    #[must_use]
    pub fn count(&self) -> BigUint {
        BigUint::from(self.depth())
    }

    /// Truncation-free subtraction: `Some(self - other)` when `other ≤ self`.
    #[must_use]
    pub fn checked_sub(&self, other: &Self) -> Option<Self> {
        let mut remainder = self;
        let mut cursor = other;
        while let Self::Successor(of) = cursor {
            remainder = remainder.predecessor()?;
            cursor = &**of;
        }
        Some(remainder.clone())
    }

    /// Von Neumann membership: `self ∈ other` exactly when `self < other`.
    #[inline]
    #[must_use]
    pub fn is_member_of(&self, other: &Self) -> bool {
        self.compare(other) == Ordering::Less
    }

    /// The natural as the set of its strict predecessors.
    ///
    /// Built by structural recursion exactly as the definition reads:
    /// `set(0) = {}` and `set(k + 1) = set(k) ∪ {k}`.
    #[must_use]
    pub fn to_set_view(&self) -> BTreeSet<VonNeumannNatural> {
        let build = Self::recurse(BTreeSet::new(), |k, mut set: BTreeSet<Self>| {
            set.insert(k.clone());
            set
        });
        build(self)
    }
}

impl Default for VonNeumannNatural {
    fn default() -> Self {
        Self::Zero
    }
}

impl Drop for VonNeumannNatural {
    fn drop(&mut self) {
        // Unlink uniquely owned predecessors one at a time instead of letting
        // the compiler-generated drop recurse down the whole chain.
        let mut link = match self {
            Self::Zero => return,
            Self::Successor(of) => core::mem::replace(of, shared_zero()),
        };
        loop {
            match Arc::try_unwrap(link) {
                Ok(mut node) => match &mut node {
                    Self::Zero => break,
                    Self::Successor(of) => link = core::mem::replace(of, shared_zero()),
                },
                Err(_) => break,
            }
        }
    }
}

impl Ordered for VonNeumannNatural {
    fn compare(&self, other: &Self) -> Ordering {
        let (mut a, mut b) = (self, other);
        loop {
            match (a, b) {
                (Self::Zero, Self::Zero) => return Ordering::Equal,
                (Self::Zero, Self::Successor(_)) => return Ordering::Less,
                (Self::Successor(_), Self::Zero) => return Ordering::Greater,
                (Self::Successor(x), Self::Successor(y)) => {
                    if Arc::ptr_eq(x, y) {
                        return Ordering::Equal;
                    }
                    a = &**x;
                    b = &**y;
                }
            }
        }
    }
}

impl PartialEq for VonNeumannNatural {
    fn eq(&self, other: &Self) -> bool {
        self.compare(other) == Ordering::Equal
    }
}

impl Eq for VonNeumannNatural {}

impl PartialOrd for VonNeumannNatural {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for VonNeumannNatural {
    fn cmp(&self, other: &Self) -> Ordering {
        self.compare(other)
    }
}

impl Hash for VonNeumannNatural {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.depth().hash(state);
    }
}

impl fmt::Debug for VonNeumannNatural {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "VonNeumannNatural({})", self.depth())
    }
}

impl fmt::Display for VonNeumannNatural {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.depth())
    }
}

impl From<u64> for VonNeumannNatural {
    fn from(n: u64) -> Self {
        Self::from_u64(n)
    }
}

impl From<&VonNeumannNatural> for BigUint {
    fn from(n: &VonNeumannNatural) -> Self {
        n.count()
    }
}

impl PeanoAxioms for VonNeumannNatural {
    #[inline]
    fn zero() -> Self {
        Self::Zero
    }

    #[inline]
    fn succ(&self) -> Self {
        VonNeumannNatural::succ(self)
    }

    #[inline]
    fn pred(&self) -> Option<Self> {
        self.predecessor().cloned()
    }

    #[inline]
    fn is_zero(&self) -> bool {
        VonNeumannNatural::is_zero(self)
    }
}

// =============================================================================
// Arithmetic
// =============================================================================

impl core::ops::Add<&VonNeumannNatural> for &VonNeumannNatural {
    type Output = VonNeumannNatural;

    /// `m + 0 = m`, `m + succ(k) = succ(m + k)`.
    fn add(self, rhs: &VonNeumannNatural) -> VonNeumannNatural {
        let mut sum = self.clone();
        let mut cursor = rhs;
        while let VonNeumannNatural::Successor(of) = cursor {
            sum = sum.succ();
            cursor = &**of;
        }
        sum
    }
}

impl core::ops::Mul<&VonNeumannNatural> for &VonNeumannNatural {
    type Output = VonNeumannNatural;

    /// `m · 0 = 0`, `m · succ(k) = m · k + m`.
    fn mul(self, rhs: &VonNeumannNatural) -> VonNeumannNatural {
        let mut product = VonNeumannNatural::Zero;
        let mut cursor = rhs;
        while let VonNeumannNatural::Successor(of) = cursor {
            product = &product + self;
            cursor = &**of;
        }
        product
    }
}

forward_ref_binop!(impl Add, add for VonNeumannNatural);
forward_ref_binop!(impl Mul, mul for VonNeumannNatural);

impl Semiring for VonNeumannNatural {
    #[inline]
    fn ring_zero() -> Self {
        Self::Zero
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_u64_depth() {
        for n in 0..50 {
            assert_eq!(VonNeumannNatural::from_u64(n).depth(), n);
        }
    }

    #[test]
    fn test_predecessor_of_zero_is_absent() {
        assert!(VonNeumannNatural::Zero.predecessor().is_none());
        assert_eq!(PeanoAxioms::pred(&VonNeumannNatural::Zero), None);
    }

    #[test]
    fn test_successor_shares_chain() {
        let four = VonNeumannNatural::from_u64(4);
        let five = four.succ();
        match &five {
            VonNeumannNatural::Successor(of) => assert_eq!(**of, four),
            VonNeumannNatural::Zero => unreachable!(),
        }
    }

    #[test]
    fn test_arithmetic() {
        let a = VonNeumannNatural::from_u64(7);
        let b = VonNeumannNatural::from_u64(6);
        assert_eq!((&a + &b).depth(), 13);
        assert_eq!((&a * &b).depth(), 42);
        assert_eq!(a.checked_sub(&b).map(|d| d.depth()), Some(1));
        assert_eq!(b.checked_sub(&a), None);
        assert_eq!((&a * &VonNeumannNatural::Zero).depth(), 0);
    }

    #[test]
    fn test_ordering_and_membership() {
        let three = VonNeumannNatural::from_u64(3);
        let five = VonNeumannNatural::from_u64(5);
        assert!(three < five);
        assert!(three.is_member_of(&five));
        assert!(!five.is_member_of(&three));
        assert!(!three.is_member_of(&three));
    }

    #[test]
    fn test_set_view_is_predecessors() {
        let five = VonNeumannNatural::from_u64(5);
        let view = five.to_set_view();
        assert_eq!(view.len(), 5);
        for m in 0..5 {
            assert!(view.contains(&VonNeumannNatural::from_u64(m)));
        }
        assert!(!view.contains(&five));
        assert!(VonNeumannNatural::Zero.to_set_view().is_empty());
    }

    #[test]
    fn test_set_view_is_union_with_self() {
        let four = VonNeumannNatural::from_u64(4);
        let mut expected = four.to_set_view();
        expected.insert(four.clone());
        assert_eq!(four.succ().to_set_view(), expected);
    }

    #[test]
    fn test_count_round_trip() {
        for n in 0..40u32 {
            let efficient = BigUint::from(n);
            assert_eq!(VonNeumannNatural::from_count(&efficient).count(), efficient);
        }
    }

    #[test]
    fn test_axioms_hold() {
        assert!(VonNeumannNatural::satisfies_axioms(40));
    }

    #[test]
    fn test_long_chain_drops() {
        let long = VonNeumannNatural::from_u64(200_000);
        assert_eq!(long.depth(), 200_000);
        let shared = long.clone();
        drop(long);
        assert_eq!(shared.depth(), 200_000);
    }

    #[test]
    fn test_hash_agrees_with_eq() {
        use std::collections::HashSet;
        let mut set = HashSet::new();
        set.insert(VonNeumannNatural::from_u64(3));
        assert!(set.contains(&VonNeumannNatural::from_u64(3)));
        assert!(!set.contains(&VonNeumannNatural::from_u64(4)));
    }
}
