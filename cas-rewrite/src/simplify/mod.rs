//! Module to simplify expressions.
//!
//! This module provides the [`simplify`] function, which runs the single-step [reducer](reduce)
//! until the expression reaches a fixed point. Every rewrite is value-preserving, so the result is
//! always equivalent to the input.
//!
//! Some inputs never reach a fixed point; instead the rewrites cycle between equivalent forms.
//! The driver remembers the canonical text of every expression it has seen during a run, and stops
//! as soon as a rewrite would produce one of them again. The expression it stopped at is accepted
//! as the result, and the run is reported as [`Outcome::Converged`].
//!
//! A run that neither reaches a fixed point nor cycles within [`Options::max_iterations`] rewrites
//! is reported as [`Outcome::NonTerminating`].

pub mod divide;
pub mod reduce;
pub mod rules;
pub mod step;

use crate::error::{kind, Error};
use crate::expr::Expr;
use crate::step_collector::StepCollector;
use std::collections::HashSet;
use step::Step;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The default bound on the number of rewrites in one run.
pub const DEFAULT_MAX_ITERATIONS: usize = 1000;

/// Options for a simplification run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Options {
    /// The number of rewrites after which a run is reported as non-terminating.
    pub max_iterations: usize,
}

impl Default for Options {
    fn default() -> Self {
        Self { max_iterations: DEFAULT_MAX_ITERATIONS }
    }
}

/// A rewrite accepted by the driver.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transition {
    /// The rewrite that was applied.
    pub step: Step,

    /// The whole expression after the rewrite.
    pub expr: Expr,
}

/// The result of a simplification run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// No rewrite applies to the expression.
    Simplified(Expr),

    /// The next rewrite would have produced an expression that was already seen in this run.
    Converged(Expr),

    /// The iteration bound was reached.
    NonTerminating {
        /// The expression the run stopped at.
        last: Expr,

        /// The number of rewrites that were applied.
        iterations: usize,
    },
}

impl Outcome {
    /// Returns the expression the run stopped at.
    pub fn expr(&self) -> &Expr {
        match self {
            Self::Simplified(expr) | Self::Converged(expr) => expr,
            Self::NonTerminating { last, .. } => last,
        }
    }

    /// Returns the expression the run stopped at.
    pub fn into_expr(self) -> Expr {
        match self {
            Self::Simplified(expr) | Self::Converged(expr) => expr,
            Self::NonTerminating { last, .. } => last,
        }
    }

    /// Returns true if the run reached a fixed point or a cycle.
    pub fn is_terminating(&self) -> bool {
        !matches!(self, Self::NonTerminating { .. })
    }

    /// Returns the accepted expression, or an error describing where the run stopped if it did not
    /// terminate.
    pub fn into_result(self) -> Result<Expr, Error> {
        match self {
            Self::Simplified(expr) | Self::Converged(expr) => Ok(expr),
            Self::NonTerminating { last, iterations } => {
                let source = last.to_string();
                let span = 0..source.len();
                Err(Error::new(source, vec![span], kind::NonTerminating { iterations }))
            },
        }
    }
}

/// Runs `reducer` on the expression until it reaches a fixed point, cycles, or hits the iteration
/// bound.
fn run<R>(
    expr: &Expr,
    options: &Options,
    step_collector: &mut dyn StepCollector<Transition>,
    mut reducer: R,
) -> Outcome
where
    R: FnMut(&Expr, &mut dyn StepCollector<Step>) -> Option<Expr>,
{
    let mut current = expr.clone();
    let mut seen = HashSet::new();
    seen.insert(current.to_string());

    for _ in 0..options.max_iterations {
        let mut fired: Option<Step> = None;
        let next = match reducer(&current, &mut fired) {
            Some(next) => next,
            None => return Outcome::Simplified(current),
        };
        let step = match fired {
            Some(step) => step,
            None => unreachable!("the reducer rewrote `{}` without reporting a step", current),
        };

        if !seen.insert(next.to_string()) {
            return Outcome::Converged(current);
        }

        step_collector.push(Transition { step, expr: next.clone() });
        current = next;
    }

    Outcome::NonTerminating {
        last: current,
        iterations: options.max_iterations,
    }
}

/// Simplify the given expression with the default [`Options`].
pub fn simplify(expr: &Expr) -> Outcome {
    simplify_with(expr, &Options::default(), &mut ())
}

/// Simplify the given expression with the given [`Options`]. Every accepted rewrite is reported to
/// the step collector, in order.
pub fn simplify_with(
    expr: &Expr,
    options: &Options,
    step_collector: &mut dyn StepCollector<Transition>,
) -> Outcome {
    run(expr, options, step_collector, reduce::step_with)
}

/// Simplify the given expression with the default [`Options`]. The rewrites taken by the
/// simplifier will also be collected and returned. This is useful for debugging, and also for
/// displaying the steps taken to the user.
pub fn simplify_with_steps(expr: &Expr) -> (Outcome, Vec<Transition>) {
    let mut transitions = Vec::new();
    let outcome = simplify_with(expr, &Options::default(), &mut transitions);
    (outcome, transitions)
}
