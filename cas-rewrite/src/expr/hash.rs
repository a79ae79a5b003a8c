//! Structural fingerprints used to decide when two subtrees are interchangeable.
//!
//! Each node has three fingerprints, each coarser than the last:
//!
//! - [`Fingerprint::exact`]: the whole structure, every coefficient included. Two nodes with equal
//! exact fingerprints are the same expression.
//! - [`Fingerprint::add`]: the structure without the node's own coefficient. Two terms with equal
//! add fingerprints can be summed by adding their coefficients (`2X + 3X = 5X`).
//! - [`Fingerprint::mul`]: for a power, the fingerprint of its base alone. Two factors with equal
//! mul fingerprints can be multiplied by adding their exponents (`X * X ^ 2 = X ^ 3`).
//!
//! Plain numbers are only the same factor as an identical number, and a power whose base has its
//! own coefficient is only the same factor as a power of that exact base.

use super::{Expr, Op, Operator, Symbol};
use rug::Integer;

/// The three fingerprints of a node.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Fingerprint {
    /// Equal only for identical expressions.
    pub exact: String,

    /// Equal for terms that differ only in their coefficient.
    pub add: String,

    /// Equal for factors that share a base.
    pub mul: String,
}

impl Fingerprint {
    /// Computes the fingerprints of the given expression in one bottom-up pass.
    pub fn of(expr: &Expr) -> Self {
        let operator = match &expr.op {
            Op::Primitive(symbol) => return Self::primitive(&expr.coeff, *symbol),
            Op::Sum(_) => Operator::Sum,
            Op::Product(_) => Operator::Product,
            Op::Quotient(..) => Operator::Quotient,
            Op::Power(..) => Operator::Power,
        };

        let children = expr.children()
            .into_iter()
            .map(Self::of)
            .collect::<Vec<_>>();
        let body = format!(
            "{}({})",
            operator.symbol(),
            children.iter().map(|child| child.exact.as_str()).collect::<Vec<_>>().join(","),
        );

        let mul = match &expr.op {
            Op::Power(base, _) if base.coeff == 1 => children[0].mul.clone(),
            Op::Power(..) => children[0].exact.clone(),
            _ => body.clone(),
        };

        Self {
            exact: format!("{}_{}", expr.coeff, body),
            add: body,
            mul,
        }
    }

    fn primitive(coeff: &Integer, symbol: Symbol) -> Self {
        let exact = format!("{}_{}", coeff, symbol.name());
        let mul = if symbol.is_pronumeral() {
            symbol.name().to_string()
        } else {
            exact.clone()
        };
        Self {
            exact,
            add: symbol.name().to_string(),
            mul,
        }
    }
}

impl Expr {
    /// Computes all three fingerprints of this node.
    pub fn fingerprint(&self) -> Fingerprint {
        Fingerprint::of(self)
    }

    /// Returns the [exact](Fingerprint::exact) fingerprint of this node.
    pub fn exact_hash(&self) -> String {
        self.fingerprint().exact
    }

    /// Returns the [add](Fingerprint::add) fingerprint of this node.
    pub fn add_hash(&self) -> String {
        self.fingerprint().add
    }

    /// Returns the [mul](Fingerprint::mul) fingerprint of this node.
    pub fn mul_hash(&self) -> String {
        self.fingerprint().mul
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::{assert_eq, assert_ne};
    use super::*;

    fn x_squared(coeff: i32) -> Expr {
        Expr::power(coeff, Expr::primitive(1, Symbol::X), Expr::number(2))
    }

    #[test]
    fn primitives() {
        let fp = Expr::primitive(3, Symbol::X).fingerprint();
        assert_eq!(fp, Fingerprint {
            exact: "3_X".to_string(),
            add: "X".to_string(),
            mul: "X".to_string(),
        });

        let fp = Expr::number(-2).fingerprint();
        assert_eq!(fp.exact, "-2_NUMBER");
        assert_eq!(fp.add, "NUMBER");
        assert_eq!(fp.mul, "-2_NUMBER");
    }

    #[test]
    fn like_terms_ignore_own_coefficient() {
        assert_eq!(x_squared(1).add_hash(), x_squared(3).add_hash());
        assert_ne!(x_squared(1).exact_hash(), x_squared(3).exact_hash());

        let lhs = Expr::product(6, vec![Expr::primitive(1, Symbol::X), Expr::primitive(1, Symbol::Y)]);
        let rhs = Expr::product(2, vec![Expr::primitive(1, Symbol::X), Expr::primitive(1, Symbol::Y)]);
        assert_eq!(lhs.add_hash(), rhs.add_hash());
        assert_eq!(lhs.add_hash(), "*(1_X,1_Y)");
    }

    #[test]
    fn like_factors_share_base() {
        let x = Expr::primitive(1, Symbol::X);
        assert_eq!(x.mul_hash(), x_squared(1).mul_hash());
        assert_eq!(
            x.mul_hash(),
            Expr::power(1, Expr::primitive(1, Symbol::X), Expr::primitive(1, Symbol::Y)).mul_hash(),
        );
    }

    #[test]
    fn distinct_numeric_bases() {
        let two_to_x = Expr::power(1, Expr::number(2), Expr::primitive(1, Symbol::X));
        let three_to_y = Expr::power(1, Expr::number(3), Expr::primitive(1, Symbol::Y));
        assert_ne!(two_to_x.mul_hash(), three_to_y.mul_hash());

        let two_x_squared = Expr::power(1, Expr::primitive(2, Symbol::X), Expr::number(2));
        let three_x_squared = Expr::power(1, Expr::primitive(3, Symbol::X), Expr::number(2));
        assert_ne!(two_x_squared.mul_hash(), three_x_squared.mul_hash());
        assert_ne!(two_x_squared.mul_hash(), Expr::primitive(1, Symbol::X).mul_hash());
    }
}
