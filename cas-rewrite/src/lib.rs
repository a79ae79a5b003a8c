//! Step-by-step simplification of algebraic expressions.
//!
//! Expressions are trees of [`Expr`] nodes over a small, fixed alphabet: plain numbers and the
//! pronumerals `A`, `B`, `X`, and `Y`, combined with sums, products, quotients, and powers. Every
//! node carries an integer coefficient.
//!
//! [`simplify`] repeatedly applies exactly one value-preserving rewrite to the leftmost position
//! where one applies, until no rewrite applies. Each rewrite is identified by a
//! [`Step`](simplify::step::Step), and [`simplify_with_steps`] returns every intermediate
//! expression along with the step that produced it.
//!
//! ```
//! use cas_rewrite::{simplify, Expr, Symbol};
//!
//! // X + X
//! let expr = Expr::sum(1, vec![
//!     Expr::primitive(1, Symbol::X),
//!     Expr::primitive(1, Symbol::X),
//! ]);
//! assert_eq!(simplify(&expr).into_expr().to_string(), "2X");
//! ```
//!
//! # Features
//!
//! - `serde`: Derives `Serialize` and `Deserialize` for expressions, steps, and
//! [`Options`](simplify::Options).

pub mod consts;
pub mod error;
pub mod expr;
pub mod primitive;
pub mod simplify;
pub mod step_collector;

pub use expr::{Expr, Operator, Symbol};
pub use simplify::{simplify, simplify_with, simplify_with_steps};
pub use step_collector::StepCollector;
