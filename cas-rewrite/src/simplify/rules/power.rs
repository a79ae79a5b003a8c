//! Rewrite rules for powers.

use crate::expr::{Expr, Op};
use crate::primitive::int;
use crate::simplify::{rules::do_power, step::Step};
use crate::step_collector::StepCollector;

/// `a^(b^c) = a^(b*c)`
pub fn fold_exponent(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    let opt = do_power(expr, |base, exponent| {
        let Op::Power(inner_base, inner_exp) = &exponent.op else {
            return None;
        };
        let exponent = Expr::product(
            exponent.coeff.clone(),
            vec![(**inner_base).clone(), (**inner_exp).clone()],
        );
        Some(Expr::power(expr.coeff.clone(), base.clone(), exponent))
    })?;

    step_collector.push(Step::FoldExponent);
    Some(opt)
}

/// `a^0 = 1`
pub fn power_zero(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    let opt = do_power(expr, |_, exponent| {
        if exponent.is_number() && exponent.coeff == 0 {
            Some(Expr::number(expr.coeff.clone()))
        } else {
            None
        }
    })?;

    step_collector.push(Step::PowerZero);
    Some(opt)
}

/// `a^-n = 1/a^n`
pub fn negative_exponent(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    let opt = do_power(expr, |base, exponent| {
        if !exponent.is_number() || exponent.coeff >= 0 {
            return None;
        }
        let power = Expr::power(1, base.clone(), Expr::number(-exponent.coeff.clone()));
        Some(Expr::quotient(expr.coeff.clone(), Expr::number(1), power))
    })?;

    step_collector.push(Step::NegativeExponent);
    Some(opt)
}

/// Writes out a positive integer power as a product.
///
/// `a^3 = a*a*a`
///
/// A bare pronumeral raised to a power other than 1 is already in its simplest form, so it is
/// left alone. Exponents too large to count are also left alone.
pub fn expand_power(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    let opt = do_power(expr, |base, exponent| {
        if !exponent.is_number() || exponent.coeff <= 0 {
            return None;
        }
        if base.is_pronumeral() && exponent.coeff != 1 {
            return None;
        }
        let count = exponent.coeff.to_usize()?;
        Some(Expr::product(expr.coeff.clone(), vec![base.clone(); count]))
    })?;

    step_collector.push(Step::ExpandPower);
    Some(opt)
}

/// `(a^b)^c = a^(b*c)`
pub fn power_power(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    let opt = do_power(expr, |base, exponent| {
        let Op::Power(inner_base, inner_exp) = &base.op else {
            return None;
        };
        if base.coeff != 1 {
            return None;
        }
        let exponent = Expr::product(1, vec![(**inner_exp).clone(), exponent.clone()]);
        Some(Expr::power(expr.coeff.clone(), (**inner_base).clone(), exponent))
    })?;

    step_collector.push(Step::PowerPower);
    Some(opt)
}

/// Takes an exact root of a number.
///
/// `8^(1/3) = 2^1`
/// `16^(3/4) = 2^3`
pub fn integer_root(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    let opt = do_power(expr, |base, exponent| {
        let Op::Quotient(num, den) = &exponent.op else {
            return None;
        };
        if !base.is_number() || !num.is_number() || !den.is_number() || den.coeff <= 1 {
            return None;
        }

        let power = int(&exponent.coeff * &num.coeff);
        let degree = den.coeff.to_u32()?;
        if power == 0 || (base.coeff < 0 && degree % 2 == 0) {
            return None;
        }

        let (root, rem) = base.coeff.clone().root_rem(int(0), degree);
        if rem != 0 {
            return None;
        }
        Some(Expr::power(expr.coeff.clone(), Expr::number(root), Expr::number(power)))
    })?;

    step_collector.push(Step::IntegerRoot);
    Some(opt)
}

/// Applies all power rules.
pub fn all(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    fold_exponent(expr, step_collector)
        .or_else(|| power_zero(expr, step_collector))
        .or_else(|| negative_exponent(expr, step_collector))
        .or_else(|| expand_power(expr, step_collector))
        .or_else(|| power_power(expr, step_collector))
        .or_else(|| integer_root(expr, step_collector))
}

#[cfg(test)]
mod tests {
    use crate::expr::Symbol;
    use pretty_assertions::assert_eq;
    use super::*;

    fn x() -> Expr {
        Expr::primitive(1, Symbol::X)
    }

    fn rewrite(expr: &Expr) -> (String, Vec<Step>) {
        let mut steps = Vec::new();
        let result = all(expr, &mut steps).unwrap();
        (result.to_string(), steps)
    }

    #[test]
    fn nested_exponent() {
        let expr = Expr::power(
            1,
            x(),
            Expr::power(1, Expr::primitive(2, Symbol::Y), Expr::primitive(3, Symbol::A)),
        );
        assert_eq!(rewrite(&expr), ("1(1X ^ 1(2Y * 3A))".to_string(), vec![Step::FoldExponent]));
    }

    #[test]
    fn zero_exponent() {
        let expr = Expr::power(4, x(), Expr::number(0));
        assert_eq!(rewrite(&expr), ("4".to_string(), vec![Step::PowerZero]));
    }

    #[test]
    fn negative() {
        let expr = Expr::power(3, x(), Expr::number(-2));
        assert_eq!(rewrite(&expr), ("3(1 / 1(1X ^ 2))".to_string(), vec![Step::NegativeExponent]));
    }

    #[test]
    fn expand() {
        let expr = Expr::power(1, Expr::number(2), Expr::number(3));
        assert_eq!(rewrite(&expr), ("1(2 * 2 * 2)".to_string(), vec![Step::ExpandPower]));

        let expr = Expr::power(5, x(), Expr::number(1));
        assert_eq!(rewrite(&expr), ("5(1X)".to_string(), vec![Step::ExpandPower]));
    }

    #[test]
    fn pronumeral_power_is_stable() {
        let expr = Expr::power(2, x(), Expr::number(2));
        assert_eq!(all(&expr, &mut ()), None);

        let expr = Expr::power(1, x(), Expr::primitive(1, Symbol::Y));
        assert_eq!(all(&expr, &mut ()), None);
    }

    #[test]
    fn power_of_power() {
        let half = || Expr::quotient(1, Expr::number(1), Expr::number(2));
        let expr = Expr::power(1, Expr::power(1, x(), half()), half());
        assert_eq!(
            rewrite(&expr),
            ("1(1X ^ 1(1(1 / 2) * 1(1 / 2)))".to_string(), vec![Step::PowerPower]),
        );
    }

    #[test]
    fn exact_root() {
        let third = Expr::quotient(1, Expr::number(1), Expr::number(3));
        let expr = Expr::power(1, Expr::number(8), third.clone());
        assert_eq!(rewrite(&expr), ("1(2 ^ 1)".to_string(), vec![Step::IntegerRoot]));

        let expr = Expr::power(1, Expr::number(-27), third.clone());
        assert_eq!(rewrite(&expr), ("1(-3 ^ 1)".to_string(), vec![Step::IntegerRoot]));

        let expr = Expr::power(1, Expr::number(9), third);
        assert_eq!(all(&expr, &mut ()), None);

        let half = Expr::quotient(1, Expr::number(1), Expr::number(2));
        let expr = Expr::power(1, Expr::number(-4), half);
        assert_eq!(all(&expr, &mut ()), None);
    }
}
