//! Rewrite rules for quotients, including cancelling common factors.

use crate::consts::PRIMES;
use crate::expr::{Expr, Op, Symbol};
use crate::simplify::{divide::divide, rules::do_quotient, step::Step};
use crate::step_collector::StepCollector;

/// `a/1 = a`
pub fn divide_one(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    let opt = do_quotient(expr, |numerator, denominator| {
        if denominator.is_number() && denominator.coeff == 1 {
            Some(numerator.clone().scaled(&expr.coeff))
        } else {
            None
        }
    })?;

    step_collector.push(Step::DivideOne);
    Some(opt)
}

/// `0/a = 0`
pub fn zero_numerator(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    let opt = do_quotient(expr, |numerator, _| {
        if numerator.coeff == 0 {
            Some(Expr::number(0))
        } else {
            None
        }
    })?;

    step_collector.push(Step::ZeroNumerator);
    Some(opt)
}

/// Rewrites a quotient with a quotient on either side as a product of two quotients, neither of
/// which is nested.
///
/// `c(a/b)/d = (ca/b) * (1/d)`
/// `a/c(b/d) = (a/1) * (d/cb)`
pub fn multiply_reciprocal(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    let opt = do_quotient(expr, |numerator, denominator| {
        let (lhs, rhs) = match (&numerator.op, &denominator.op) {
            (Op::Quotient(..), _) | (_, Op::Quotient(..)) => (numerator, denominator),
            _ => return None,
        };

        let lhs = match &lhs.op {
            Op::Quotient(num, den) => Expr::quotient(1, (**num).clone().scaled(&lhs.coeff), (**den).clone()),
            _ => Expr::quotient(1, lhs.clone(), Expr::number(1)),
        };
        let rhs = match &rhs.op {
            Op::Quotient(num, den) => Expr::quotient(1, (**den).clone(), (**num).clone().scaled(&rhs.coeff)),
            _ => Expr::quotient(1, Expr::number(1), rhs.clone()),
        };
        Some(Expr::product(expr.coeff.clone(), vec![lhs, rhs]))
    })?;

    step_collector.push(Step::MultiplyReciprocal);
    Some(opt)
}

/// `a/a = 1`
pub fn divide_self(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    let opt = do_quotient(expr, |numerator, denominator| {
        if numerator.exact_hash() == denominator.exact_hash() {
            Some(Expr::number(expr.coeff.clone()))
        } else {
            None
        }
    })?;

    step_collector.push(Step::DivideSelf);
    Some(opt)
}

/// Cancels a factor found by dividing the numerator by the denominator.
///
/// `3X/2X = 3/2`
/// `2X/X^2 = 2X^(1 - 2)/X^(2 - 2)`
pub fn cancel_factor(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    let opt = do_quotient(expr, |numerator, denominator| {
        let division = divide(numerator, denominator)?;
        let reduced = divide(denominator, &division.divisor)?;
        Some(Expr::quotient(expr.coeff.clone(), division.remainder, reduced.remainder))
    })?;

    step_collector.push(Step::CancelFactor);
    Some(opt)
}

/// Cancels the first small prime, then the first symbol, that divides both sides of the quotient.
///
/// `6X/4Y = 3X/2Y`
pub fn cancel_common_factor(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    let opt = do_quotient(expr, |numerator, denominator| {
        let by_prime = PRIMES.iter().find_map(|&prime| {
            let factor = Expr::number(prime);
            Some((divide(numerator, &factor)?, divide(denominator, &factor)?))
        });
        let (numerator, denominator) = match by_prime {
            Some(pair) => pair,
            None => Symbol::ALL.iter().find_map(|&symbol| {
                let factor = Expr::primitive(1, symbol);
                let numerator = divide(numerator, &factor)?;
                let denominator = divide(denominator, &factor)?;
                if numerator.divisor.symbol() == denominator.divisor.symbol() {
                    Some((numerator, denominator))
                } else {
                    None
                }
            })?,
        };
        Some(Expr::quotient(expr.coeff.clone(), numerator.remainder, denominator.remainder))
    })?;

    step_collector.push(Step::CancelCommonFactor);
    Some(opt)
}

/// Applies all quotient rules.
pub fn all(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    divide_one(expr, step_collector)
        .or_else(|| zero_numerator(expr, step_collector))
        .or_else(|| multiply_reciprocal(expr, step_collector))
        .or_else(|| divide_self(expr, step_collector))
        .or_else(|| cancel_factor(expr, step_collector))
        .or_else(|| cancel_common_factor(expr, step_collector))
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use super::*;

    fn rewrite(expr: &Expr) -> (String, Vec<Step>) {
        let mut steps = Vec::new();
        let result = all(expr, &mut steps).unwrap();
        (result.to_string(), steps)
    }

    #[test]
    fn over_one() {
        let expr = Expr::quotient(1, Expr::primitive(3, Symbol::A), Expr::number(1));
        assert_eq!(rewrite(&expr), ("3A".to_string(), vec![Step::DivideOne]));
    }

    #[test]
    fn zero_over_anything() {
        let expr = Expr::quotient(1, Expr::number(0), Expr::primitive(1, Symbol::X));
        assert_eq!(rewrite(&expr), ("0".to_string(), vec![Step::ZeroNumerator]));
    }

    #[test]
    fn nested_numerator() {
        let expr = Expr::quotient(
            1,
            Expr::quotient(2, Expr::number(125), Expr::primitive(1, Symbol::X)),
            Expr::number(5),
        );
        assert_eq!(
            rewrite(&expr),
            ("1(1(250 / 1X) * 1(1 / 5))".to_string(), vec![Step::MultiplyReciprocal]),
        );
    }

    #[test]
    fn nested_denominator() {
        let expr = Expr::quotient(
            1,
            Expr::primitive(1, Symbol::A),
            Expr::quotient(3, Expr::primitive(1, Symbol::X), Expr::number(2)),
        );
        assert_eq!(
            rewrite(&expr),
            ("1(1(1A / 1) * 1(2 / 3X))".to_string(), vec![Step::MultiplyReciprocal]),
        );
    }

    #[test]
    fn identical_sides() {
        let side = Expr::sum(1, vec![Expr::primitive(1, Symbol::X), Expr::number(2)]);
        let expr = Expr::quotient(1, side.clone(), side);
        assert_eq!(rewrite(&expr), ("1".to_string(), vec![Step::DivideSelf]));
    }

    #[test]
    fn cancel_pronumeral() {
        let expr = Expr::quotient(1, Expr::primitive(3, Symbol::X), Expr::primitive(2, Symbol::X));
        assert_eq!(rewrite(&expr), ("1(3 / 2)".to_string(), vec![Step::CancelFactor]));
    }

    #[test]
    fn cancel_prime() {
        let expr = Expr::quotient(1, Expr::primitive(6, Symbol::X), Expr::primitive(4, Symbol::Y));
        assert_eq!(rewrite(&expr), ("1(3X / 2Y)".to_string(), vec![Step::CancelCommonFactor]));
    }

    #[test]
    fn cancel_symbol() {
        let expr = Expr::quotient(
            1,
            Expr::product(1, vec![Expr::primitive(1, Symbol::A), Expr::primitive(1, Symbol::Y)]),
            Expr::product(1, vec![Expr::primitive(1, Symbol::B), Expr::primitive(1, Symbol::Y)]),
        );
        assert_eq!(
            rewrite(&expr),
            ("1(1(1A * 1) / 1(1B * 1))".to_string(), vec![Step::CancelCommonFactor]),
        );
    }

    #[test]
    fn stable_rational() {
        let expr = Expr::quotient(1, Expr::number(3), Expr::number(2));
        assert_eq!(all(&expr, &mut ()), None);
    }
}
