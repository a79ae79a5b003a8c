//! Rewrite rules for sums, including combining like terms.

use crate::expr::{Expr, Op};
use crate::simplify::{rules::{do_sum, merge_pair}, step::Step};
use crate::step_collector::StepCollector;
use rug::Integer;

/// Adds two fractions over the same denominator.
///
/// `a/c + b/c = (a + b)/c`
fn add_fractions(lhs: &Expr, rhs: &Expr) -> Option<Expr> {
    let (Op::Quotient(lhs_num, lhs_den), Op::Quotient(rhs_num, rhs_den)) = (&lhs.op, &rhs.op) else {
        return None;
    };
    if lhs_den.exact_hash() != rhs_den.exact_hash() {
        return None;
    }

    let numerator = Expr::sum(1, vec![
        (**lhs_num).clone().scaled(&lhs.coeff),
        (**rhs_num).clone().scaled(&rhs.coeff),
    ]);
    Some(Expr::quotient(1, numerator, (**lhs_den).clone()))
}

/// Merges the first pair of terms that can be merged, scanning pairs `(i, j)` with `i < j` in
/// order.
///
/// `a/c + b/c = (a + b)/c`
/// `2a + 3a = 5a`
pub fn combine_terms(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    let (terms, step) = do_sum(expr, |terms| {
        for i in 0..terms.len() {
            let add_hash = terms[i].add_hash();
            for j in i + 1..terms.len() {
                if let Some(merged) = add_fractions(&terms[i], &terms[j]) {
                    return Some((merge_pair(terms, i, j, merged), Step::CombineFractions));
                }

                if add_hash == terms[j].add_hash() {
                    let coeff = Integer::from(&terms[i].coeff + &terms[j].coeff);
                    let merged = terms[i].clone().with_coeff(coeff);
                    return Some((merge_pair(terms, i, j, merged), Step::CombineLikeTerms));
                }
            }
        }

        None
    })?;

    // keep the step collection logic outside of the closure
    step_collector.push(step);
    Some(Expr::sum(expr.coeff.clone(), terms))
}

/// `a+0 = a`
/// `0+a = a`
pub fn add_zero(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    let opt = do_sum(expr, |terms| {
        if terms.len() < 2 || terms.iter().all(|term| term.coeff != 0) {
            return None;
        }

        let terms = terms.iter()
            .filter(|term| term.coeff != 0)
            .cloned()
            .collect::<Vec<_>>();
        if terms.is_empty() {
            Some(Expr::number(0))
        } else {
            Some(Expr::sum(expr.coeff.clone(), terms))
        }
    })?;

    step_collector.push(Step::AddZero);
    Some(opt)
}

/// Applies all sum rules.
pub fn all(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    combine_terms(expr, step_collector)
        .or_else(|| add_zero(expr, step_collector))
}
