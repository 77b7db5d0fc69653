//! Capability traits shared by the constructed and the efficient layers.
//!
//! The tower speaks about arithmetic through these traits so that the
//! isomorphism protocol can state "the conversion commutes with `⊕`" once,
//! for both sides of every bridge. Constructed types implement them from
//! their quotient or sequence definitions; efficient types implement them
//! by delegating to `num-bigint`, `num-rational`, `num-complex` and `f64`.
//!
//! | Capability | Layers |
//! |------------|--------|
//! | [`Semiring`] | ℕ, ℤ, ℚ, ℝ, ℂ |
//! | [`Ring`] | ℤ, ℚ, ℝ, ℂ |
//! | [`Field`] | ℚ, ℝ, ℂ |
//! | [`Ordered`] | ℕ, ℤ, ℚ |
//!
//! Reals are ordered only up to a caller-chosen precision and complex
//! numbers are not ordered at all, so neither implements [`Ordered`].

use core::cmp::Ordering;

use crate::error::Result;

/// Additive and multiplicative structure with identities.
pub trait Semiring: Sized + Clone {
    /// The additive identity.
    fn ring_zero() -> Self;

    /// The multiplicative identity.
    fn ring_one() -> Self;

    /// Addition.
    fn ring_add(&self, other: &Self) -> Self;

    /// Multiplication.
    fn ring_mul(&self, other: &Self) -> Self;
}

/// A [`Semiring`] with additive inverses.
pub trait Ring: Semiring {
    /// Additive inverse.
    fn ring_neg(&self) -> Self;

    /// Subtraction, `self + (-other)` unless a layer has something cheaper.
    #[inline]
    fn ring_sub(&self, other: &Self) -> Self {
        self.ring_add(&other.ring_neg())
    }
}

/// A [`Ring`] whose non-zero elements have multiplicative inverses.
pub trait Field: Ring {
    /// Multiplicative inverse.
    ///
    /// # Errors
    ///
    /// Returns [`TowerError::DivisionByZero`](crate::TowerError::DivisionByZero)
    /// (or a layer-specific variant) when `self` is the zero element.
    fn ring_recip(&self) -> Result<Self>;

    /// Division, `self × other⁻¹`.
    ///
    /// # Errors
    ///
    /// Fails exactly when [`Field::ring_recip`] fails on `other`.
    #[inline]
    fn ring_div(&self, other: &Self) -> Result<Self> {
        Ok(self.ring_mul(&other.ring_recip()?))
    }
}

/// Total order, decidable without a precision argument.
pub trait Ordered {
    /// Compares two values.
    fn compare(&self, other: &Self) -> Ordering;
}

/// The successor/predecessor structure of the naturals.
///
/// Implemented by the successor chain
/// ([`VonNeumannNatural`](crate::VonNeumannNatural)) and by the efficient
/// natural (`BigUint`). Higher layers bootstrap from whichever carrier they
/// hold through this interface alone.
pub trait PeanoAxioms: Sized + Clone + PartialEq {
    /// The natural with no predecessor.
    fn zero() -> Self;

    /// The successor `n + 1`.
    fn succ(&self) -> Self;

    /// The predecessor, absent for zero.
    fn pred(&self) -> Option<Self>;

    /// True for zero only.
    fn is_zero(&self) -> bool {
        self.pred().is_none()
    }

    /// Structural recursion: `f(0) = base`, `f(k + 1) = step(k, f(k))`.
    ///
    /// The returned function walks the predecessor chain of its argument,
    /// so evaluating it costs time linear in the argument's value.
    fn recurse<R, F>(base: R, step: F) -> impl Fn(&Self) -> R
    where
        R: Clone,
        F: Fn(&Self, R) -> R,
    {
        move |n: &Self| {
            let mut chain = Vec::new();
            let mut cursor = n.clone();
            while let Some(prev) = cursor.pred() {
                chain.push(prev.clone());
                cursor = prev;
            }
            chain
                .iter()
                .rev()
                .fold(base.clone(), |acc, k| step(k, acc))
        }
    }

    /// Finite sampled check of the Peano axioms over `0..sample_size`.
    ///
    /// Checks that zero is not a successor, that `pred(succ(n)) = n`, that
    /// `succ` is injective on the sample, and that recursion counts every
    /// sample back to its index. Returns `false` on the first violation.
    fn satisfies_axioms(sample_size: u64) -> bool {
        let zero = Self::zero();
        if !zero.is_zero() || zero.pred().is_some() {
            tracing::debug!("zero is not recognised as zero");
            return false;
        }

        let mut sample = Vec::new();
        let mut cursor = zero;
        for _ in 0..sample_size {
            let next = cursor.succ();
            sample.push(cursor);
            cursor = next;
        }

        let count = Self::recurse(0u64, |_, acc| acc + 1);
        for (index, n) in sample.iter().enumerate() {
            let next = n.succ();
            if next.is_zero() {
                tracing::debug!(index, "successor collapsed to zero");
                return false;
            }
            if next.pred().as_ref() != Some(n) {
                tracing::debug!(index, "pred(succ(n)) differs from n");
                return false;
            }
            if count(n) != index as u64 {
                tracing::debug!(index, "recursion does not count the chain");
                return false;
            }
        }

        for (i, m) in sample.iter().enumerate() {
            let succ_m = m.succ();
            for n in &sample[i + 1..] {
                if succ_m == n.succ() {
                    tracing::debug!(index = i, "succ is not injective");
                    return false;
                }
            }
        }
        true
    }
}
