//! The single-step reducer.
//!
//! [`step`] applies exactly one rewrite somewhere in the tree, or reports that the tree is already
//! in normal form. The order in which rewrites are attempted at each node is:
//!
//! 1. Push the coefficient of a sum into its terms, or of a quotient into its numerator.
//! 2. Reduce the children, left to right, stopping at the first child that rewrites. A child that
//! does not rewrite may still be spliced into its parent (a sum inside a sum, or a product inside
//! a product), or may give its coefficient to a parent product.
//! 3. Replace a sum or product with a single child by that child.
//! 4. Apply the rules of the node's operator, in [`rules`].
//!
//! Since children are always reduced leftmost first, the sequence of rewrites is fully determined
//! by the input tree.

use crate::expr::{Expr, Op};
use crate::primitive::int;
use crate::step_collector::StepCollector;
use super::{rules, step::Step};

/// `c(a + b) = (ca + cb)`
/// `c(a / b) = (ca / b)`
fn distribute_coefficient(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    if expr.coeff == 1 {
        return None;
    }

    let op = match &expr.op {
        Op::Sum(terms) => Op::Sum(
            terms.iter()
                .map(|term| term.clone().scaled(&expr.coeff))
                .collect()
        ),
        Op::Quotient(numerator, denominator) => Op::Quotient(
            Box::new((**numerator).clone().scaled(&expr.coeff)),
            denominator.clone(),
        ),
        _ => return None,
    };

    step_collector.push(Step::DistributeCoefficient);
    Some(Expr { coeff: int(1), op })
}

/// Returns a copy of `children` with the child at `idx` replaced by `replacement`.
fn splice(children: &[Expr], idx: usize, replacement: impl IntoIterator<Item = Expr>) -> Vec<Expr> {
    children[..idx].iter()
        .cloned()
        .chain(replacement)
        .chain(children[idx + 1..].iter().cloned())
        .collect()
}

/// Splices the children of a sum into a parent sum, or the factors of a product into a parent
/// product.
///
/// `a + c(b + d) = a + cb + cd`
/// `a * c(b * d) = a * cb * d`
fn flatten_group(
    expr: &Expr,
    idx: usize,
    child: &Expr,
    step_collector: &mut dyn StepCollector<Step>,
) -> Option<Expr> {
    let op = match (&expr.op, &child.op) {
        (Op::Sum(terms), Op::Sum(inner)) => {
            let inner = inner.iter().map(|term| term.clone().scaled(&child.coeff));
            Op::Sum(splice(terms, idx, inner))
        },
        (Op::Product(factors), Op::Product(inner)) => {
            // the coefficient only needs to land on one of the factors
            let mut inner = inner.clone();
            if let Some(first) = inner.first_mut() {
                first.coeff *= &child.coeff;
            }
            Op::Product(splice(factors, idx, inner))
        },
        _ => return None,
    };

    step_collector.push(Step::FlattenGroup);
    Some(Expr { coeff: expr.coeff.clone(), op })
}

/// `a * cb = c(a * b)`
fn hoist_coefficient(
    expr: &Expr,
    idx: usize,
    child: &Expr,
    step_collector: &mut dyn StepCollector<Step>,
) -> Option<Expr> {
    if !matches!(expr.op, Op::Product(_)) || child.coeff == 1 {
        return None;
    }

    let mut new_expr = expr.clone();
    new_expr.coeff *= &child.coeff;
    new_expr.child_mut(idx).coeff = int(1);

    step_collector.push(Step::HoistCoefficient);
    Some(new_expr)
}

/// Reduces the first child that can be reduced.
fn reduce_children(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    for (idx, child) in expr.children().into_iter().enumerate() {
        if let Some(new_child) = step_with(child, step_collector) {
            let mut new_expr = expr.clone();
            *new_expr.child_mut(idx) = new_child;
            return Some(new_expr);
        }

        let restructured = flatten_group(expr, idx, child, step_collector)
            .or_else(|| hoist_coefficient(expr, idx, child, step_collector));
        if restructured.is_some() {
            return restructured;
        }
    }

    None
}

/// `c(a) = ca`
fn collapse_group(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    let child = match &expr.op {
        Op::Sum(children) | Op::Product(children) if children.len() == 1 => &children[0],
        _ => return None,
    };

    step_collector.push(Step::CollapseGroup);
    Some(child.clone().scaled(&expr.coeff))
}

/// Applies a single rewrite to the expression, returning [`None`] if the expression is already in
/// normal form.
pub fn step(expr: &Expr) -> Option<Expr> {
    step_with(expr, &mut ())
}

/// Applies a single rewrite to the expression, reporting the rewrite to the given step collector.
///
/// Exactly one [`Step`] is pushed if, and only if, [`Some`] is returned.
pub fn step_with(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    if let Op::Primitive(_) = expr.op {
        return None;
    }

    distribute_coefficient(expr, step_collector)
        .or_else(|| reduce_children(expr, step_collector))
        .or_else(|| collapse_group(expr, step_collector))
        .or_else(|| rules::all(expr, step_collector))
}
