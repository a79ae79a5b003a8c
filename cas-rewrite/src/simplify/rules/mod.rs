//! Implementation of the per-operator rewrite rules.
//!
//! Each rule in this module is a function that takes the expression to rewrite as an argument,
//! and returns `Some(expr)` with the rewritten expression if the rule applies, or `None` if the
//! rule does not apply. A rule that applies pushes exactly one [`Step`] to the step collector.
//!
//! Rules only look at the node they are given. Rewriting inside children, flattening, and
//! coefficient bookkeeping is done by the [reducer](super::reduce) before a rule is consulted.

pub mod power;
pub mod product;
pub mod quotient;
pub mod sum;

use crate::expr::{Expr, Op};
use crate::step_collector::StepCollector;
use super::step::Step;

/// If the expression is a sum, calls the given transformation function with the terms.
///
/// Returns `Some(..)` with the result of the transformation if one was applied.
pub(crate) fn do_sum<R>(expr: &Expr, f: impl FnOnce(&[Expr]) -> Option<R>) -> Option<R> {
    if let Op::Sum(terms) = &expr.op {
        f(terms)
    } else {
        None
    }
}

/// If the expression is a product, calls the given transformation function with the factors.
///
/// Returns `Some(..)` with the result of the transformation if one was applied.
pub(crate) fn do_product<R>(expr: &Expr, f: impl FnOnce(&[Expr]) -> Option<R>) -> Option<R> {
    if let Op::Product(factors) = &expr.op {
        f(factors)
    } else {
        None
    }
}

/// If the expression is a quotient, calls the given transformation function with the numerator
/// and denominator.
///
/// Returns `Some(..)` with the result of the transformation if one was applied.
pub(crate) fn do_quotient<R>(expr: &Expr, f: impl FnOnce(&Expr, &Expr) -> Option<R>) -> Option<R> {
    if let Op::Quotient(numerator, denominator) = &expr.op {
        f(numerator, denominator)
    } else {
        None
    }
}

/// If the expression is a power, calls the given transformation function with the base and
/// exponent.
///
/// Returns `Some(..)` with the result of the transformation if one was applied.
pub(crate) fn do_power<R>(expr: &Expr, f: impl FnOnce(&Expr, &Expr) -> Option<R>) -> Option<R> {
    if let Op::Power(base, exponent) = &expr.op {
        f(base, exponent)
    } else {
        None
    }
}

/// Returns a copy of `children` with the child at `i` replaced by `replacement` and the child at
/// `j` removed.
pub(crate) fn merge_pair(children: &[Expr], i: usize, j: usize, replacement: Expr) -> Vec<Expr> {
    let mut children = children.to_vec();
    children[i] = replacement;
    children.remove(j);
    children
}

/// Applies the rules of the expression's operator.
pub fn all(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    match expr.op {
        Op::Primitive(_) => None,
        Op::Sum(_) => sum::all(expr, step_collector),
        Op::Product(_) => product::all(expr, step_collector),
        Op::Quotient(..) => quotient::all(expr, step_collector),
        Op::Power(..) => power::all(expr, step_collector),
    }
}
