//! The expression tree operated on by the rewrite engine.
//!
//! Every node is an [`Expr`]: an integer coefficient multiplying the value of an [`Op`]. A
//! [`Op::Primitive`] is a leaf, either a plain number or one of the pronumerals in [`Symbol`].
//! Compound nodes combine their children with one of the four [`Operator`]s.
//!
//! ```
//! use cas_rewrite::expr::{Expr, Symbol};
//!
//! // 2(3X + 1)
//! let expr = Expr::sum(2, vec![
//!     Expr::primitive(3, Symbol::X),
//!     Expr::number(1),
//! ]);
//! assert_eq!(expr.to_string(), "2(3X + 1)");
//! ```
//!
//! Nodes own their children outright, so cloning an [`Expr`] is a deep copy and no two trees ever
//! share a subtree.

pub mod hash;
pub mod iter;

use crate::error::{kind::InvalidArity, Error};
use crate::primitive::{int, rational};
use iter::ExprIter;
use rug::{ops::Pow, Integer, Rational};
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The closed alphabet of leaf symbols.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Symbol {
    /// A plain number, whose value is the coefficient of the leaf.
    Number,
    A,
    B,
    X,
    Y,
}

impl Symbol {
    /// Every symbol, in the order common factors are searched for.
    pub const ALL: [Symbol; 5] = [Symbol::Number, Symbol::A, Symbol::B, Symbol::X, Symbol::Y];

    /// Returns the name of the symbol, as used in fingerprints.
    pub fn name(self) -> &'static str {
        match self {
            Self::Number => "NUMBER",
            Self::A => "A",
            Self::B => "B",
            Self::X => "X",
            Self::Y => "Y",
        }
    }

    /// Returns true if the symbol is a pronumeral, i.e. not [`Symbol::Number`].
    pub fn is_pronumeral(self) -> bool {
        self != Self::Number
    }
}

/// The number of children an [`Operator`] accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Arity {
    /// Exactly this many children.
    Exactly(usize),

    /// This many children or more.
    AtLeast(usize),
}

impl Arity {
    /// Returns true if a group with `count` children satisfies this arity.
    pub fn accepts(self, count: usize) -> bool {
        match self {
            Self::Exactly(n) => count == n,
            Self::AtLeast(n) => count >= n,
        }
    }
}

impl fmt::Display for Arity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Exactly(n) => write!(f, "exactly {}", n),
            Self::AtLeast(n) => write!(f, "at least {}", n),
        }
    }
}

/// The operator of a compound node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Operator {
    Sum,
    Product,
    Quotient,
    Power,
}

impl Operator {
    /// Returns the symbol that separates children of this operator in canonical text.
    pub fn symbol(self) -> &'static str {
        match self {
            Self::Sum => "+",
            Self::Product => "*",
            Self::Quotient => "/",
            Self::Power => "^",
        }
    }

    /// Returns the number of children a group of this operator must have.
    pub fn arity(self) -> Arity {
        match self {
            Self::Sum | Self::Product => Arity::AtLeast(1),
            Self::Quotient | Self::Power => Arity::Exactly(2),
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Sum => "sum",
            Self::Product => "product",
            Self::Quotient => "quotient",
            Self::Power => "power",
        };
        write!(f, "{}", name)
    }
}

/// What a node computes from its children, before scaling by its coefficient.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Op {
    /// A leaf.
    Primitive(Symbol),

    /// Terms added together.
    Sum(Vec<Expr>),

    /// Factors multiplied together.
    Product(Vec<Expr>),

    /// A numerator divided by a denominator.
    Quotient(Box<Expr>, Box<Expr>),

    /// A base raised to an exponent.
    Power(Box<Expr>, Box<Expr>),
}

/// A node of the expression tree.
///
/// The value of a node is `coeff` multiplied by the value of its [`Op`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Expr {
    /// The integer that scales the value of this node.
    pub coeff: Integer,

    /// The operation this node performs.
    pub op: Op,
}

impl Expr {
    /// Creates a leaf with the given coefficient and symbol.
    pub fn primitive<T>(coeff: T, symbol: Symbol) -> Self
    where
        Integer: From<T>,
    {
        Self { coeff: int(coeff), op: Op::Primitive(symbol) }
    }

    /// Creates a plain number.
    pub fn number<T>(coeff: T) -> Self
    where
        Integer: From<T>,
    {
        Self::primitive(coeff, Symbol::Number)
    }

    /// Creates a sum of the given terms.
    ///
    /// Panics if `terms` is empty. Use [`Expr::group`] to construct groups whose size is not
    /// known ahead of time.
    pub fn sum<T>(coeff: T, terms: Vec<Expr>) -> Self
    where
        Integer: From<T>,
    {
        assert!(!terms.is_empty(), "a sum must have at least one term");
        Self { coeff: int(coeff), op: Op::Sum(terms) }
    }

    /// Creates a product of the given factors.
    ///
    /// Panics if `factors` is empty. Use [`Expr::group`] to construct groups whose size is not
    /// known ahead of time.
    pub fn product<T>(coeff: T, factors: Vec<Expr>) -> Self
    where
        Integer: From<T>,
    {
        assert!(!factors.is_empty(), "a product must have at least one factor");
        Self { coeff: int(coeff), op: Op::Product(factors) }
    }

    /// Creates a quotient.
    pub fn quotient<T>(coeff: T, numerator: Expr, denominator: Expr) -> Self
    where
        Integer: From<T>,
    {
        Self {
            coeff: int(coeff),
            op: Op::Quotient(Box::new(numerator), Box::new(denominator)),
        }
    }

    /// Creates a power.
    pub fn power<T>(coeff: T, base: Expr, exponent: Expr) -> Self
    where
        Integer: From<T>,
    {
        Self {
            coeff: int(coeff),
            op: Op::Power(Box::new(base), Box::new(exponent)),
        }
    }

    /// Creates a compound node with the given operator, checking that the number of children
    /// matches the operator's [`Arity`].
    pub fn group<T>(coeff: T, operator: Operator, children: Vec<Expr>) -> Result<Self, Error>
    where
        Integer: From<T>,
    {
        let expected = operator.arity();
        if !expected.accepts(children.len()) {
            return Err(invalid_arity(int(coeff), operator, expected, &children));
        }

        let coeff = int(coeff);
        let op = match operator {
            Operator::Sum => Op::Sum(children),
            Operator::Product => Op::Product(children),
            Operator::Quotient | Operator::Power => {
                let mut iter = children.into_iter();
                let (Some(lhs), Some(rhs)) = (iter.next(), iter.next()) else {
                    unreachable!("arity was checked above");
                };
                let (lhs, rhs) = (Box::new(lhs), Box::new(rhs));
                if operator == Operator::Quotient {
                    Op::Quotient(lhs, rhs)
                } else {
                    Op::Power(lhs, rhs)
                }
            },
        };
        Ok(Self { coeff, op })
    }

    /// Returns this node with its coefficient replaced.
    pub fn with_coeff<T>(mut self, coeff: T) -> Self
    where
        Integer: From<T>,
    {
        self.coeff = int(coeff);
        self
    }

    /// Returns this node with its coefficient multiplied by `factor`.
    pub fn scaled(mut self, factor: &Integer) -> Self {
        self.coeff *= factor;
        self
    }

    /// Returns the operator of this node, or [`None`] for a leaf.
    pub fn operator(&self) -> Option<Operator> {
        match self.op {
            Op::Primitive(_) => None,
            Op::Sum(_) => Some(Operator::Sum),
            Op::Product(_) => Some(Operator::Product),
            Op::Quotient(..) => Some(Operator::Quotient),
            Op::Power(..) => Some(Operator::Power),
        }
    }

    /// Returns the symbol of this node if it is a leaf.
    pub fn symbol(&self) -> Option<Symbol> {
        match self.op {
            Op::Primitive(symbol) => Some(symbol),
            _ => None,
        }
    }

    /// Returns true if this node is a plain number.
    pub fn is_number(&self) -> bool {
        self.op == Op::Primitive(Symbol::Number)
    }

    /// Returns true if this node is a leaf holding a pronumeral.
    pub fn is_pronumeral(&self) -> bool {
        matches!(self.op, Op::Primitive(symbol) if symbol.is_pronumeral())
    }

    /// Returns the children of this node, in order.
    pub fn children(&self) -> Vec<&Expr> {
        match &self.op {
            Op::Primitive(_) => Vec::new(),
            Op::Sum(children) | Op::Product(children) => children.iter().collect(),
            Op::Quotient(lhs, rhs) | Op::Power(lhs, rhs) => vec![&**lhs, &**rhs],
        }
    }

    /// Returns a mutable reference to the child at the given index.
    ///
    /// Panics if there is no such child.
    pub fn child_mut(&mut self, idx: usize) -> &mut Expr {
        match &mut self.op {
            Op::Primitive(_) => unreachable!("a leaf has no children"),
            Op::Sum(children) | Op::Product(children) => &mut children[idx],
            Op::Quotient(lhs, rhs) | Op::Power(lhs, rhs) => match idx {
                0 => &mut **lhs,
                1 => &mut **rhs,
                _ => unreachable!("binary node has no child {}", idx),
            },
        }
    }

    /// Splits this node into a scale, a base and an exponent, such that the node's value is
    /// `scale * base ^ exponent`.
    ///
    /// - `5` -> `(1, 5, 1)`
    /// - `3X` -> `(3, 1X, 1)`
    /// - `2(1X ^ 4)` -> `(2, 1X, 4)`
    /// - `3(1X + 1)` -> `(3, 1(1X + 1), 1)`
    ///
    /// Plain numbers are their own base, which keeps `2` and `3` from looking like powers of a
    /// common base.
    pub fn split_power(&self) -> (Integer, Expr, Expr) {
        match &self.op {
            Op::Primitive(Symbol::Number) => (int(1), self.clone(), Expr::number(1)),
            Op::Power(base, exponent) => (self.coeff.clone(), (**base).clone(), (**exponent).clone()),
            _ => (self.coeff.clone(), self.clone().with_coeff(1), Expr::number(1)),
        }
    }

    /// Evaluates this node exactly.
    ///
    /// Returns [`None`] if the tree contains a pronumeral, divides by zero, or raises to an
    /// exponent that is not a small integer.
    pub fn value(&self) -> Option<Rational> {
        let combined = match &self.op {
            Op::Primitive(Symbol::Number) => rational(1),
            Op::Primitive(_) => return None,
            Op::Sum(terms) => terms
                .iter()
                .try_fold(rational(0), |acc, term| Some(acc + term.value()?))?,
            Op::Product(factors) => factors
                .iter()
                .try_fold(rational(1), |acc, factor| Some(acc * factor.value()?))?,
            Op::Quotient(numerator, denominator) => {
                let denominator = denominator.value()?;
                if denominator == 0 {
                    return None;
                }
                numerator.value()? / denominator
            },
            Op::Power(base, exponent) => {
                let base = base.value()?;
                let exponent = exponent.value()?;
                if *exponent.denom() != 1 {
                    return None;
                }
                let exponent = exponent.numer().to_i32()?;
                if base == 0 && exponent < 0 {
                    return None;
                }
                base.pow(exponent)
            },
        };
        Some(combined * rational(&self.coeff))
    }

    /// Returns true if every compound node in the tree has a valid number of children.
    pub fn is_well_formed(&self) -> bool {
        self.post_order_iter().all(|expr| match expr.operator() {
            Some(operator) => operator.arity().accepts(expr.children().len()),
            None => true,
        })
    }

    /// Returns an iterator that traverses the tree of expressions in left-to-right post-order
    /// (i.e. depth-first).
    pub fn post_order_iter(&self) -> ExprIter {
        ExprIter::new(self)
    }
}

/// Builds the error for a group with the wrong number of children.
///
/// The source text is the group as it would print, so the labels can point at the offending
/// children.
fn invalid_arity(coeff: Integer, operator: Operator, expected: Arity, children: &[Expr]) -> Error {
    let mut source = format!("{}(", coeff);
    let mut child_spans = Vec::with_capacity(children.len());
    for (idx, child) in children.iter().enumerate() {
        if idx > 0 {
            source.push_str(&format!(" {} ", operator.symbol()));
        }
        let start = source.len();
        source.push_str(&child.to_string());
        child_spans.push(start..source.len());
    }
    source.push(')');

    let spans = match expected {
        Arity::Exactly(n) if children.len() > n => child_spans.split_off(n),
        _ => vec![0..source.len()],
    };
    Error::new(source, spans, InvalidArity { operator, expected, found: children.len() })
}

/// Prints the canonical text of the expression.
///
/// A plain number prints as its coefficient, a pronumeral as its coefficient followed by its
/// name, and a compound node as its coefficient followed by its parenthesized children.
impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.op {
            Op::Primitive(Symbol::Number) => write!(f, "{}", self.coeff),
            Op::Primitive(symbol) => write!(f, "{}{}", self.coeff, symbol.name()),
            _ => {
                let separator = self.operator().map(Operator::symbol).unwrap_or_default();
                write!(f, "{}(", self.coeff)?;
                for (idx, child) in self.children().into_iter().enumerate() {
                    if idx > 0 {
                        write!(f, " {} ", separator)?;
                    }
                    write!(f, "{}", child)?;
                }
                write!(f, ")")
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use super::*;

    #[test]
    fn canonical_text() {
        let expr = Expr::sum(1, vec![
            Expr::product(6, vec![Expr::primitive(1, Symbol::X), Expr::primitive(1, Symbol::Y)]),
            Expr::quotient(1, Expr::number(3), Expr::number(2)),
            Expr::power(2, Expr::primitive(1, Symbol::X), Expr::number(-1)),
            Expr::number(-4),
        ]);
        assert_eq!(expr.to_string(), "1(6(1X * 1Y) + 1(3 / 2) + 2(1X ^ -1) + -4)");
    }

    #[test]
    fn group_checks_arity() {
        let expr = Expr::group(1, Operator::Power, vec![Expr::number(2), Expr::number(3)]).unwrap();
        assert_eq!(expr, Expr::power(1, Expr::number(2), Expr::number(3)));

        let err = Expr::group(1, Operator::Quotient, vec![
            Expr::number(1),
            Expr::number(2),
            Expr::primitive(3, Symbol::A),
        ]).unwrap_err();
        assert_eq!(err.source, "1(1 / 2 / 3A)");
        assert_eq!(err.spans, vec![10..12]);

        let err = Expr::group(1, Operator::Sum, vec![]).unwrap_err();
        assert_eq!(err.source, "1()");
        assert_eq!(err.spans, vec![0..3]);
    }

    #[test]
    fn split_power() {
        assert_eq!(
            Expr::number(5).split_power(),
            (int(1), Expr::number(5), Expr::number(1)),
        );
        assert_eq!(
            Expr::primitive(3, Symbol::X).split_power(),
            (int(3), Expr::primitive(1, Symbol::X), Expr::number(1)),
        );
        assert_eq!(
            Expr::power(2, Expr::primitive(1, Symbol::X), Expr::number(4)).split_power(),
            (int(2), Expr::primitive(1, Symbol::X), Expr::number(4)),
        );
    }

    #[test]
    fn exact_value() {
        // 2(3 + 1(1 / 2)) * 2 ^ -2
        let expr = Expr::product(1, vec![
            Expr::sum(2, vec![Expr::number(3), Expr::quotient(1, Expr::number(1), Expr::number(2))]),
            Expr::power(1, Expr::number(2), Expr::number(-2)),
        ]);
        assert_eq!(expr.value(), Some(rational((7, 4))));

        assert_eq!(Expr::primitive(1, Symbol::X).value(), None);
        assert_eq!(Expr::quotient(1, Expr::number(1), Expr::number(0)).value(), None);
        assert_eq!(
            Expr::power(1, Expr::number(4), Expr::quotient(1, Expr::number(1), Expr::number(2))).value(),
            None,
        );
    }

    #[test]
    fn well_formed() {
        let expr = Expr::sum(1, vec![Expr::number(1), Expr::primitive(1, Symbol::B)]);
        assert!(expr.is_well_formed());

        let broken = Expr { coeff: int(1), op: Op::Product(vec![]) };
        assert!(!Expr::sum(1, vec![broken]).is_well_formed());
    }
}
