//! Structural division, used by the quotient rule to find factors common to a numerator and a
//! denominator.

use crate::expr::{Expr, Op};
use rug::Integer;

/// A successful division of a numerator by a denominator.
///
/// The numerator equals `remainder * divisor`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Division {
    /// What remains of the numerator once the divisor is removed.
    pub remainder: Expr,

    /// The factor that was removed.
    pub divisor: Expr,
}

/// Tries to divide `numerator` by `denominator`, or by a factor of `denominator`.
///
/// Returns [`None`] if no common factor could be found. The divisor that was removed is not
/// necessarily all of `denominator`; the caller is expected to divide the denominator by it too.
pub fn divide(numerator: &Expr, denominator: &Expr) -> Option<Division> {
    if let Some(division) = divide_coefficient(numerator, denominator) {
        return Some(division);
    }

    match &numerator.op {
        Op::Primitive(symbol) if denominator.symbol().is_some() => {
            // 3X / 2X: the pronumeral cancels, leaving the numerator's coefficient
            if symbol.is_pronumeral() && denominator.symbol() == Some(*symbol) {
                Some(Division {
                    remainder: Expr::number(numerator.coeff.clone()),
                    divisor: Expr::primitive(1, *symbol),
                })
            } else {
                None
            }
        },
        Op::Sum(terms) => {
            if let Some(division) = divide_self(numerator, denominator) {
                return Some(division);
            }

            // every term must be divisible by the same factor
            let mut remainders = Vec::with_capacity(terms.len());
            let mut divisor: Option<Expr> = None;
            for term in terms {
                let division = divide(term, denominator)?;
                if divisor.as_ref().map_or(false, |divisor| *divisor != division.divisor) {
                    return None;
                }
                divisor = Some(division.divisor);
                remainders.push(division.remainder);
            }

            Some(Division {
                remainder: Expr::sum(numerator.coeff.clone(), remainders),
                divisor: divisor?,
            })
        },
        Op::Product(factors) => {
            if let Some(division) = divide_self(numerator, denominator) {
                return Some(division);
            }

            // one factor is enough
            factors.iter().enumerate().find_map(|(idx, factor)| {
                let division = divide(factor, denominator)?;
                let mut remainder = numerator.clone();
                *remainder.child_mut(idx) = division.remainder;
                Some(Division { remainder, divisor: division.divisor })
            })
        },
        Op::Primitive(_) | Op::Power(..) => divide_power(numerator, denominator),

        // a nested quotient is normalized by the quotient rule before it is divided
        Op::Quotient(..) => None,
    }
}

/// `6a / 3b = 2a / b`
fn divide_coefficient(numerator: &Expr, denominator: &Expr) -> Option<Division> {
    if denominator.coeff == 1
        || denominator.coeff == 0
        || !numerator.coeff.is_divisible(&denominator.coeff)
    {
        return None;
    }

    let coeff = Integer::from(&numerator.coeff / &denominator.coeff);
    Some(Division {
        remainder: numerator.clone().with_coeff(coeff),
        divisor: Expr::number(denominator.coeff.clone()),
    })
}

/// `2(a + b) / (a + b) = 2`
fn divide_self(numerator: &Expr, denominator: &Expr) -> Option<Division> {
    if denominator.coeff != 1 || numerator.add_hash() != denominator.add_hash() {
        return None;
    }

    Some(Division {
        remainder: Expr::number(numerator.coeff.clone()),
        divisor: denominator.clone(),
    })
}

/// `a^m / a^n = a^(m + -1n)`
///
/// The numerator is a leaf or a power, and the denominator must share its base.
fn divide_power(numerator: &Expr, denominator: &Expr) -> Option<Division> {
    if numerator.mul_hash() != denominator.mul_hash() {
        return None;
    }

    let (scale, base, numerator_exp) = numerator.split_power();
    let (_, denominator_base, denominator_exp) = denominator.split_power();
    let exponent = Expr::sum(1, vec![
        numerator_exp,
        Expr::product(1, vec![Expr::number(-1), denominator_exp.clone()]),
    ]);

    let divisor = match denominator.op {
        Op::Power(..) => Expr::power(1, denominator_base, denominator_exp),
        _ => denominator_base,
    };

    Some(Division {
        remainder: Expr::power(scale, base, exponent),
        divisor,
    })
}

#[cfg(test)]
mod tests {
    use crate::expr::Symbol;
    use pretty_assertions::assert_eq;
    use super::*;

    fn x() -> Expr {
        Expr::primitive(1, Symbol::X)
    }

    #[test]
    fn coefficient() {
        let division = divide(&Expr::number(6), &Expr::number(2)).unwrap();
        assert_eq!(division, Division { remainder: Expr::number(3), divisor: Expr::number(2) });

        assert_eq!(divide(&Expr::number(3), &Expr::number(2)), None);
        assert_eq!(divide(&Expr::number(3), &Expr::number(0)), None);
    }

    #[test]
    fn pronumerals() {
        let division = divide(&Expr::primitive(3, Symbol::X), &Expr::primitive(2, Symbol::X)).unwrap();
        assert_eq!(division, Division { remainder: Expr::number(3), divisor: x() });

        assert_eq!(divide(&Expr::primitive(3, Symbol::X), &Expr::primitive(1, Symbol::Y)), None);
        assert_eq!(divide(&Expr::number(4), &x()), None);
    }

    #[test]
    fn sum_needs_common_divisor() {
        // 9X + 12 over 3
        let sum = Expr::sum(1, vec![Expr::primitive(9, Symbol::X), Expr::number(12)]);
        let division = divide(&sum, &Expr::number(3)).unwrap();
        assert_eq!(division.remainder.to_string(), "1(3X + 4)");
        assert_eq!(division.divisor, Expr::number(3));

        // 2X + 2Y over X
        let sum = Expr::sum(1, vec![Expr::primitive(2, Symbol::X), Expr::primitive(2, Symbol::Y)]);
        assert_eq!(divide(&sum, &x()), None);
    }

    #[test]
    fn product_needs_one_factor() {
        let product = Expr::product(5, vec![Expr::primitive(1, Symbol::A), x()]);
        let division = divide(&product, &Expr::primitive(1, Symbol::X)).unwrap();
        assert_eq!(division.remainder.to_string(), "5(1A * 1)");
        assert_eq!(division.divisor, x());
    }

    #[test]
    fn powers() {
        // X ^ 7 over 4X
        let power = Expr::power(1, x(), Expr::number(7));
        let division = divide(&power, &Expr::primitive(4, Symbol::X)).unwrap();
        assert_eq!(division.remainder.to_string(), "1(1X ^ 1(7 + 1(-1 * 1)))");
        assert_eq!(division.divisor, x());

        // 2X over X ^ 2
        let division = divide(&Expr::primitive(2, Symbol::X), &Expr::power(1, x(), Expr::number(2))).unwrap();
        assert_eq!(division.remainder.to_string(), "2(1X ^ 1(1 + 1(-1 * 2)))");
        assert_eq!(division.divisor.to_string(), "1(1X ^ 2)");
    }

    #[test]
    fn same_group() {
        let group = Expr::sum(1, vec![x(), Expr::number(2)]);
        let division = divide(&group.clone().with_coeff(3), &group).unwrap();
        assert_eq!(division, Division { remainder: Expr::number(3), divisor: group });
    }

    #[test]
    fn nested_quotient() {
        let quotient = Expr::quotient(1, x(), Expr::number(2));
        assert_eq!(divide(&quotient, &x()), None);
    }

    #[test]
    fn remainder_times_divisor_is_numerator() {
        let cases = [
            (Expr::number(12), Expr::number(4)),
            (Expr::power(3, Expr::number(2), Expr::number(5)), Expr::power(1, Expr::number(2), Expr::number(2))),
            (Expr::sum(2, vec![Expr::number(6), Expr::number(10)]), Expr::number(2)),
            (Expr::product(1, vec![Expr::number(7), Expr::number(9)]), Expr::number(3)),
        ];
        for (numerator, denominator) in cases {
            let division = divide(&numerator, &denominator).unwrap();
            let product = Expr::product(1, vec![division.remainder, division.divisor]);
            assert_eq!(product.value(), numerator.value());
        }
    }
}
