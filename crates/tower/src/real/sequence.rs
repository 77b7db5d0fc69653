//! The lazy sequence graph behind [`ConstructedReal`].
//!
//! Every real is a node: a leaf (a constant, a caller-supplied sequence, a
//! bisection) or an operator tag over operand reals. Asking a node for
//! `term(n)` or `modulus(k)` walks the graph on demand; building a node
//! evaluates nothing. Forcing and dropping both walk the graph with an
//! explicit work list, so long operator chains cost heap, not stack.
//!
//! # Moduli
//!
//! `modulus(k)` returns an index `N` such that every pair of terms at or
//! beyond `N` is within `1/k`. Operators derive their modulus from their
//! operands at a refined precision:
//!
//! ```text
//! a + b    N(k) = max(Na(2k), Nb(2k))
//! −a       N(k) = Na(k)
//! a × b    N(k) = max(N₀, Na(2k·B), Nb(2k·A))   A ≥ |a_n|, B ≥ |b_n| for n ≥ N₀
//! 1 / a    N(k) = max(N₁, Na(k·s²))             |a_n| > 1/s for n ≥ N₁
//! ```

use std::sync::{Arc, OnceLock};

use num_bigint::BigUint;
use num_traits::{One, Signed};

use super::root::Bisection;
use super::ConstructedReal;
use crate::integer::ConstructedInteger;
use crate::rational::ConstructedRational;

/// A caller-supplied term function.
pub(crate) type TermFn = dyn Fn(u64) -> ConstructedRational + Send + Sync;

/// A caller-supplied convergence modulus.
pub(crate) type ModulusFn = dyn Fn(&BigUint) -> u64 + Send + Sync;

/// One node of the lazy graph.
pub(crate) enum Node {
    Constant(ConstructedRational),
    Generated {
        term: Box<TermFn>,
        modulus: Box<ModulusFn>,
    },
    Sum(ConstructedReal, ConstructedReal),
    Negation(ConstructedReal),
    Product {
        left: ConstructedReal,
        right: ConstructedReal,
        bounds: OnceLock<ProductBounds>,
    },
    Reciprocal {
        of: ConstructedReal,
        witness: Apartness,
    },
    Bisection(Bisection),
}

/// Bounds on both factors of a product, valid from `start` on.
pub(crate) struct ProductBounds {
    start: u64,
    left: BigUint,
    right: BigUint,
}

impl ProductBounds {
    fn compute(left: &ConstructedReal, right: &ConstructedReal) -> Self {
        let unit = BigUint::one();
        let start = left.modulus(&unit).max(right.modulus(&unit));
        tracing::trace!(start, "forcing product bounds");
        Self {
            start,
            left: magnitude_bound(&left.term(start)),
            right: magnitude_bound(&right.term(start)),
        }
    }
}

/// Evidence that a real stays away from zero: `|a_n| > 1/separation` for
/// every `n ≥ start`.
#[derive(Clone)]
pub(crate) struct Apartness {
    pub(crate) start: u64,
    pub(crate) separation: BigUint,
}

/// `⌈|q|⌉ + 1`, a bound on every term within distance 1 of `q`.
fn magnitude_bound(q: &ConstructedRational) -> BigUint {
    let ceiling = q.to_efficient().abs().ceil().to_integer();
    ceiling.magnitude() + 1u32
}

/// The natural `k` as a rational.
pub(crate) fn rational_from_natural(k: &BigUint) -> ConstructedRational {
    ConstructedRational::from_integer(&ConstructedInteger::from_pair(
        k.clone(),
        BigUint::default(),
    ))
}

/// Operands are pushed before their operator runs, so the stack is never
/// short; the fallback only keeps this total.
fn pop_term(values: &mut Vec<ConstructedRational>) -> ConstructedRational {
    values.pop().unwrap_or_else(ConstructedRational::zero)
}

/// Pending work for an iterative term evaluation.
enum TermStep<'a> {
    Visit(&'a Node, u64),
    Add,
    Negate,
    Multiply,
    Invert,
}

/// Pending work for an iterative modulus evaluation.
enum ModulusStep<'a> {
    Visit(&'a Node, BigUint),
    /// Replaces the top `arity` results with their maximum and `floor`.
    Max { arity: usize, floor: u64 },
}

impl Node {
    /// Evaluates with an explicit stack, so arbitrarily deep operator
    /// chains are forced without recursion.
    pub(crate) fn term(&self, n: u64) -> ConstructedRational {
        let mut steps = vec![TermStep::Visit(self, n)];
        let mut values: Vec<ConstructedRational> = Vec::new();
        while let Some(step) = steps.pop() {
            match step {
                TermStep::Visit(node, n) => match node {
                    Node::Constant(q) => values.push(q.clone()),
                    Node::Generated { term, .. } => values.push(term(n)),
                    Node::Bisection(bisection) => values.push(bisection.term(n)),
                    Node::Sum(a, b) => {
                        steps.push(TermStep::Add);
                        steps.push(TermStep::Visit(b.node.as_ref(), n));
                        steps.push(TermStep::Visit(a.node.as_ref(), n));
                    }
                    Node::Negation(a) => {
                        steps.push(TermStep::Negate);
                        steps.push(TermStep::Visit(a.node.as_ref(), n));
                    }
                    Node::Product { left, right, .. } => {
                        steps.push(TermStep::Multiply);
                        steps.push(TermStep::Visit(right.node.as_ref(), n));
                        steps.push(TermStep::Visit(left.node.as_ref(), n));
                    }
                    Node::Reciprocal { of, witness } => {
                        steps.push(TermStep::Invert);
                        steps.push(TermStep::Visit(of.node.as_ref(), n.max(witness.start)));
                    }
                },
                TermStep::Add => {
                    let (b, a) = (pop_term(&mut values), pop_term(&mut values));
                    values.push((&a + &b).reduced());
                }
                TermStep::Negate => {
                    let a = pop_term(&mut values);
                    values.push(-&a);
                }
                TermStep::Multiply => {
                    let (b, a) = (pop_term(&mut values), pop_term(&mut values));
                    values.push((&a * &b).reduced());
                }
                TermStep::Invert => {
                    let a = pop_term(&mut values);
                    values.push(a.reciprocal_unchecked().reduced());
                }
            }
        }
        pop_term(&mut values)
    }

    /// Evaluates with an explicit stack like [`Node::term`].
    pub(crate) fn modulus(&self, k: &BigUint) -> u64 {
        let mut steps = vec![ModulusStep::Visit(self, k.clone())];
        let mut values: Vec<u64> = Vec::new();
        while let Some(step) = steps.pop() {
            match step {
                ModulusStep::Visit(node, k) => match node {
                    Node::Constant(_) => values.push(0),
                    Node::Generated { modulus, .. } => values.push(modulus(&k)),
                    Node::Bisection(bisection) => values.push(bisection.modulus(&k)),
                    Node::Sum(a, b) => {
                        let refined = k * 2u32;
                        steps.push(ModulusStep::Max { arity: 2, floor: 0 });
                        steps.push(ModulusStep::Visit(b.node.as_ref(), refined.clone()));
                        steps.push(ModulusStep::Visit(a.node.as_ref(), refined));
                    }
                    Node::Negation(a) => steps.push(ModulusStep::Visit(a.node.as_ref(), k)),
                    Node::Product {
                        left,
                        right,
                        bounds,
                    } => {
                        if bounds.get().is_none() {
                            node.prime_product_bounds();
                        }
                        let bounds = bounds.get_or_init(|| ProductBounds::compute(left, right));
                        let doubled = k * 2u32;
                        steps.push(ModulusStep::Max {
                            arity: 2,
                            floor: bounds.start,
                        });
                        let for_right = &doubled * &bounds.left;
                        let for_left = doubled * &bounds.right;
                        steps.push(ModulusStep::Visit(right.node.as_ref(), for_right));
                        steps.push(ModulusStep::Visit(left.node.as_ref(), for_left));
                    }
                    Node::Reciprocal { of, witness } => {
                        let refined = k * &witness.separation * &witness.separation;
                        steps.push(ModulusStep::Max {
                            arity: 1,
                            floor: witness.start,
                        });
                        steps.push(ModulusStep::Visit(of.node.as_ref(), refined));
                    }
                },
                ModulusStep::Max { arity, floor } => {
                    let split = values.len().saturating_sub(arity);
                    let top = values.drain(split..).fold(floor, u64::max);
                    values.push(top);
                }
            }
        }
        values.pop().unwrap_or(0)
    }

    /// Forces the bounds of every product below this node, innermost first.
    ///
    /// Computing a product's bounds evaluates its factors. Once every inner
    /// product is settled, that evaluation never needs to force more bounds
    /// itself. Products whose bounds are already set are skipped with their
    /// whole subgraph, since forcing them settled everything beneath.
    fn prime_product_bounds(&self) {
        let mut stack = vec![(self, false)];
        while let Some((node, expanded)) = stack.pop() {
            match node {
                Node::Product {
                    left,
                    right,
                    bounds,
                } => {
                    if bounds.get().is_some() {
                        continue;
                    }
                    if expanded {
                        bounds.get_or_init(|| ProductBounds::compute(left, right));
                    } else {
                        stack.push((node, true));
                        stack.push((right.node.as_ref(), false));
                        stack.push((left.node.as_ref(), false));
                    }
                }
                Node::Sum(a, b) => {
                    stack.push((b.node.as_ref(), false));
                    stack.push((a.node.as_ref(), false));
                }
                Node::Negation(a) => stack.push((a.node.as_ref(), false)),
                Node::Reciprocal { of, .. } => stack.push((of.node.as_ref(), false)),
                Node::Constant(_) | Node::Generated { .. } | Node::Bisection(_) => {}
            }
        }
    }

    pub(crate) fn tag(&self) -> &'static str {
        match self {
            Node::Constant(_) => "constant",
            Node::Generated { .. } => "sequence",
            Node::Sum(..) => "sum",
            Node::Negation(_) => "negation",
            Node::Product { .. } => "product",
            Node::Reciprocal { .. } => "reciprocal",
            Node::Bisection(_) => "bisection",
        }
    }
}

impl Node {
    /// Moves every operand out of this node, leaving the shared zero behind.
    fn detach_operands(&mut self, into: &mut Vec<Arc<Node>>) {
        let mut take = |real: &mut ConstructedReal| {
            into.push(core::mem::replace(&mut real.node, shared_zero()));
        };
        match self {
            Node::Sum(a, b) => {
                take(a);
                take(b);
            }
            Node::Negation(a) => take(a),
            Node::Product { left, right, .. } => {
                take(left);
                take(right);
            }
            Node::Reciprocal { of, .. } => take(of),
            Node::Constant(_) | Node::Generated { .. } | Node::Bisection(_) => {}
        }
    }
}

/// The node every dropped operand is replaced with.
fn shared_zero() -> Arc<Node> {
    static ZERO: OnceLock<Arc<Node>> = OnceLock::new();
    Arc::clone(ZERO.get_or_init(|| Arc::new(Node::Constant(ConstructedRational::zero()))))
}

impl Drop for Node {
    fn drop(&mut self) {
        // Unlink uniquely owned operands through a work list instead of
        // letting the compiler-generated drop recurse down the graph.
        let mut pending = Vec::new();
        self.detach_operands(&mut pending);
        while let Some(operand) = pending.pop() {
            if let Ok(mut node) = Arc::try_unwrap(operand) {
                node.detach_operands(&mut pending);
            }
        }
    }
}

/// Searches `k = 1, 2, 4, …, 2^budget` for an index where `|a_N| > 2/k`.
///
/// With `N = modulus(k)` every later term is within `1/k` of `a_N`, hence
/// above `1/k` in magnitude: the witness is `(N, k)`.
pub(crate) fn find_apartness(of: &ConstructedReal, budget: u32) -> Option<Apartness> {
    let two = ConstructedRational::from_integer(&ConstructedInteger::of(2, 0));
    for bits in 0..=budget {
        let k = BigUint::one() << bits;
        let start = of.modulus(&k);
        let scaled = &of.term(start).abs() * &rational_from_natural(&k);
        if scaled > two {
            tracing::trace!(bits, start, "found apartness witness");
            return Some(Apartness {
                start,
                separation: k,
            });
        }
    }
    None
}
