//! Rewrite rules for products, including combining like factors and distributing over sums.

use crate::expr::{Expr, Op};
use crate::simplify::{rules::{do_product, merge_pair}, step::Step};
use crate::step_collector::StepCollector;
use rug::Integer;

/// `0(a * b) = 0`
pub fn multiply_zero(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    let opt = do_product(expr, |_| {
        if expr.coeff == 0 {
            Some(Expr::number(0))
        } else {
            None
        }
    })?;

    step_collector.push(Step::MultiplyZero);
    Some(opt)
}

/// Tries to combine the factor at `i` with the factor at `j`.
///
/// Returns the new coefficient of the product and its new factors.
fn combine_pair(coeff: &Integer, factors: &[Expr], i: usize, j: usize) -> Option<(Integer, Vec<Expr>, Step)> {
    let (lhs, rhs) = (&factors[i], &factors[j]);

    // 2a * 3b = 6(a * 1b)
    if lhs.coeff != 1 && rhs.coeff != 1 {
        let mut factors = factors.to_vec();
        factors[i].coeff *= &rhs.coeff;
        factors[j].coeff = Integer::from(1);
        return Some((coeff.clone(), factors, Step::MultiplyCoefficients));
    }

    // a * 1 = a
    if rhs.is_number() {
        let mut factors = factors.to_vec();
        factors.remove(j);
        return Some((Integer::from(coeff * &rhs.coeff), factors, Step::MultiplyNumber));
    }

    // a * b/c = ab/c
    // a/b * c/d = ac/bd
    if let Op::Quotient(rhs_num, rhs_den) = &rhs.op {
        let merged = match &lhs.op {
            Op::Quotient(lhs_num, lhs_den) => Expr::quotient(
                Integer::from(&lhs.coeff * &rhs.coeff),
                Expr::product(1, vec![(**lhs_num).clone(), (**rhs_num).clone()]),
                Expr::product(1, vec![(**lhs_den).clone(), (**rhs_den).clone()]),
            ),
            _ => Expr::quotient(
                rhs.coeff.clone(),
                Expr::product(1, vec![lhs.clone(), (**rhs_num).clone()]),
                (**rhs_den).clone(),
            ),
        };
        return Some((coeff.clone(), merge_pair(factors, i, j, merged), Step::MultiplyFraction));
    }

    // c(a + b) * d = (c(a * d) + c(b * d))
    if let Op::Sum(terms) = &lhs.op {
        let distributed = terms.iter()
            .map(|term| Expr::product(lhs.coeff.clone(), vec![term.clone(), rhs.clone()]))
            .collect();
        let merged = Expr::sum(1, distributed);
        return Some((coeff.clone(), merge_pair(factors, i, j, merged), Step::DistributiveProperty));
    }

    // a^m * a^n = a^(m + n)
    if lhs.mul_hash() == rhs.mul_hash() {
        let (lhs_scale, base, lhs_exp) = lhs.split_power();
        let (rhs_scale, _, rhs_exp) = rhs.split_power();
        let merged = Expr::power(
            lhs_scale * rhs_scale,
            base,
            Expr::sum(1, vec![lhs_exp, rhs_exp]),
        );
        return Some((coeff.clone(), merge_pair(factors, i, j, merged), Step::CombineLikeFactors));
    }

    None
}

/// Combines the first pair of factors that can be combined, scanning every ordered pair `(i, j)`
/// with `i != j`, `i` in the outer loop.
pub fn combine_factors(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    let (coeff, factors, step) = do_product(expr, |factors| {
        (0..factors.len())
            .flat_map(|i| (0..factors.len()).map(move |j| (i, j)))
            .filter(|(i, j)| i != j)
            .find_map(|(i, j)| combine_pair(&expr.coeff, factors, i, j))
    })?;

    step_collector.push(step);
    Some(Expr::product(coeff, factors))
}

/// Applies all product rules.
pub fn all(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    multiply_zero(expr, step_collector)
        .or_else(|| combine_factors(expr, step_collector))
}
