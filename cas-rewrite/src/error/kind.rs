use ariadne::{Fmt, Label, Report, ReportKind};
use crate::expr::{Arity, Operator};
use super::{ErrorKind, EXPR};
use std::ops::Range;

/// A group was given the wrong number of children for its operator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidArity {
    /// The operator of the group.
    pub operator: Operator,

    /// The number of children the operator accepts.
    pub expected: Arity,

    /// The number of children that were given.
    pub found: usize,
}

impl ErrorKind for InvalidArity {
    fn build_report<'a>(
        &self,
        src_id: &'a str,
        spans: &[Range<usize>],
    ) -> Report<(&'a str, Range<usize>)> {
        let label = match self.expected {
            _ if self.found == 0 => "this group is empty".to_string(),
            Arity::Exactly(n) if self.found > n => "this child does not fit".to_string(),
            _ => format!("this group has {} children", self.found),
        };
        let noun = match self.expected {
            Arity::Exactly(1) | Arity::AtLeast(1) => "child",
            _ => "children",
        };

        Report::build(ReportKind::Error, src_id, spans.first().map_or(0, |span| span.start))
            .with_message(format!("invalid number of children for a {} group", self.operator))
            .with_labels(spans.iter().cloned().map(|span| {
                Label::new((src_id, span))
                    .with_message(&label)
                    .with_color(EXPR)
            }))
            .with_help(format!("a {} takes {} {}", self.operator, self.expected, noun.fg(EXPR)))
            .finish()
    }
}

/// The fixpoint driver hit its iteration bound before the expression stopped changing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NonTerminating {
    /// The number of rewrites that were applied.
    pub iterations: usize,
}

impl ErrorKind for NonTerminating {
    fn build_report<'a>(
        &self,
        src_id: &'a str,
        spans: &[Range<usize>],
    ) -> Report<(&'a str, Range<usize>)> {
        Report::build(ReportKind::Error, src_id, spans.first().map_or(0, |span| span.start))
            .with_message(format!(
                "simplification did not terminate after {} rewrites",
                self.iterations,
            ))
            .with_labels(spans.iter().cloned().map(|span| {
                Label::new((src_id, span))
                    .with_message(format!("this is the last {} reached", "expression".fg(EXPR)))
                    .with_color(EXPR)
            }))
            .with_help("raise `Options::max_iterations`, or collect the transitions to find the rewrites that repeat")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use crate::expr::{Expr, Symbol};
    use crate::error::Error;
    use super::*;

    fn render(err: &Error) -> String {
        let report = err.report_to_string().unwrap();
        String::from_utf8(strip_ansi_escapes::strip(report)).unwrap()
    }

    #[test]
    fn invalid_arity_report() {
        let err = Expr::group(1, Operator::Power, vec![
            Expr::number(2),
            Expr::number(3),
            Expr::primitive(1, Symbol::X),
        ]).unwrap_err();
        let report = render(&err);

        assert!(report.contains("invalid number of children for a power group"));
        assert!(report.contains("1(2 ^ 3 ^ 1X)"));
        assert!(report.contains("this child does not fit"));
        assert!(report.contains("a power takes exactly 2 children"));
    }

    #[test]
    fn empty_group_report() {
        let err = Expr::group(4, Operator::Product, vec![]).unwrap_err();
        let report = render(&err);

        assert!(report.contains("invalid number of children for a product group"));
        assert!(report.contains("this group is empty"));
        assert!(report.contains("a product takes at least 1 child"));
    }

    #[test]
    fn non_terminating_report() {
        let source = "1(1X + 1Y)";
        let err = Error::new(source, vec![0..source.len()], NonTerminating { iterations: 10 });
        let report = render(&err);

        assert!(report.contains("simplification did not terminate after 10 rewrites"));
        assert!(report.contains("this is the last expression reached"));
    }
}
