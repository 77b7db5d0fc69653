//! Roots by bounded bisection.
//!
//! A bisection over `[lower, upper]` with predicate `P` halves the bracket
//! `iterations` times, keeping `P(lower_j)` true. The lower endpoints form
//! the Cauchy sequence: after step `j` every later endpoint lies within
//! `width / 2^j` of `lower_j`. The sequence stops moving after the last
//! iteration, so the value is the limit only to `width / 2^iterations`.

use num_bigint::{BigInt, BigUint};
use num_rational::BigRational;
use num_traits::{One, Signed};

use super::sequence::Node;
use super::ConstructedReal;
use crate::error::{Result, TowerError};
use crate::rational::ConstructedRational;

type Predicate = dyn Fn(&ConstructedRational) -> bool + Send + Sync;

/// The state of one bisection node.
pub(crate) struct Bisection {
    lower: ConstructedRational,
    upper: ConstructedRational,
    iterations: u32,
    at_or_below: Box<Predicate>,
}

impl Bisection {
    /// The lower endpoint after `min(n, iterations)` halvings.
    ///
    /// Nothing is memoised: each call replays the halvings from the initial
    /// bracket and holds only the current one.
    pub(crate) fn term(&self, n: u64) -> ConstructedRational {
        let steps = n.min(u64::from(self.iterations));
        tracing::trace!(steps, "forcing bisection");
        let mut lower = self.lower.clone();
        let mut upper = self.upper.clone();
        for _ in 0..steps {
            let mid = lower.midpoint(&upper).reduced();
            if (self.at_or_below)(&mid) {
                lower = mid;
            } else {
                upper = mid;
            }
        }
        lower
    }

    /// The first step `j` with `width / 2^j ≤ 1/k`, capped at `iterations`.
    pub(crate) fn modulus(&self, k: &BigUint) -> u64 {
        let width = (&self.upper - &self.lower).to_efficient();
        let scaled = (width * BigRational::from_integer(BigInt::from(k.clone()))).ceil();
        let cells = scaled.to_integer().magnitude().clone();
        let steps = if cells <= BigUint::one() {
            0
        } else {
            (cells - 1u32).bits()
        };
        steps.min(u64::from(self.iterations))
    }
}

impl ConstructedReal {
    /// The real found by bisecting `[lower, upper]` on `at_or_below`.
    ///
    /// `at_or_below(x)` must hold at `lower` and be monotone (true up to the
    /// target, false beyond it). The result converges on the boundary of
    /// the predicate from below and is exact to `(upper − lower) / 2^iterations`.
    ///
    /// # Errors
    ///
    /// Returns [`TowerError::EmptyBracket`] when `lower ≥ upper`.
    pub fn bisect<P>(
        lower: ConstructedRational,
        upper: ConstructedRational,
        iterations: u32,
        at_or_below: P,
    ) -> Result<Self>
    where
        P: Fn(&ConstructedRational) -> bool + Send + Sync + 'static,
    {
        if lower >= upper {
            return Err(TowerError::EmptyBracket);
        }
        Ok(Self::from_node(Node::Bisection(Bisection {
            lower,
            upper,
            iterations,
            at_or_below: Box::new(at_or_below),
        })))
    }

    /// The real `degree`-th root of a rational, bisected `iterations` times.
    ///
    /// Odd roots of negative radicands are the negated root of `|x|`.
    ///
    /// # Errors
    ///
    /// [`TowerError::ZeroDegree`] for `degree == 0` and
    /// [`TowerError::NegativeRadicand`] for an even root of a negative `x`.
    pub fn nth_root(radicand: &ConstructedRational, degree: u32, iterations: u32) -> Result<Self> {
        if degree == 0 {
            return Err(TowerError::ZeroDegree);
        }
        if radicand.to_efficient().is_negative() {
            if degree % 2 == 0 {
                return Err(TowerError::NegativeRadicand);
            }
            return Ok(-Self::nth_root(&radicand.abs(), degree, iterations)?);
        }
        let target = radicand.reduced();
        let upper = if target > ConstructedRational::one() {
            target.clone()
        } else {
            ConstructedRational::one()
        };
        let at_or_below = move |x: &ConstructedRational| power(x, degree) <= target;
        Self::bisect(ConstructedRational::zero(), upper, iterations, at_or_below)
    }

    /// `√x` bisected `iterations` times.
    ///
    /// # Errors
    ///
    /// [`TowerError::NegativeRadicand`] when `x < 0`.
    pub fn sqrt(radicand: &ConstructedRational, iterations: u32) -> Result<Self> {
        Self::nth_root(radicand, 2, iterations)
    }
}

fn power(x: &ConstructedRational, degree: u32) -> ConstructedRational {
    let mut acc = ConstructedRational::one();
    for _ in 0..degree {
        acc = (&acc * x).reduced();
    }
    acc
}
