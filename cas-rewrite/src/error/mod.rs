//! Contains the [`ErrorKind`] trait and the [`Error`] type for errors that can be displayed as
//! user-facing reports.
//!
//! Errors carry the canonical text of the expression they refer to, so the spans of an error
//! always point into [`Error::source`].

pub mod kind;

use ariadne::{Color, Report, Source};
use std::{fmt::Debug, io, ops::Range};

/// The color to use to highlight expressions.
pub const EXPR: Color = Color::RGB(52, 235, 152);

/// Represents any kind of error that can occur during some operation.
pub trait ErrorKind: Debug + Send {
    /// Builds the report for this error.
    fn build_report<'a>(
        &self,
        src_id: &'a str,
        spans: &[Range<usize>],
    ) -> Report<(&'a str, Range<usize>)>;
}

/// An error associated with regions of an expression's canonical text.
#[derive(Debug)]
pub struct Error {
    /// The canonical text of the expression this error is about.
    pub source: String,

    /// The regions of [`Error::source`] that this error originated from.
    pub spans: Vec<Range<usize>>,

    /// The kind of error that occurred.
    pub kind: Box<dyn ErrorKind>,
}

impl Error {
    /// Creates a new error with the given source text, spans, and kind.
    pub fn new(
        source: impl Into<String>,
        spans: Vec<Range<usize>>,
        kind: impl ErrorKind + 'static,
    ) -> Self {
        Self { source: source.into(), spans, kind: Box::new(kind) }
    }

    /// Build a report from this error kind.
    pub fn build_report<'a>(&self, src_id: &'a str) -> Report<(&'a str, Range<usize>)> {
        self.kind.build_report(src_id, &self.spans)
    }

    /// Renders the report for this error to a string.
    ///
    /// The `ariadne` crate's [`Report`] type does not implement `Display`, so the report is
    /// written into a buffer instead.
    pub fn report_to_string(&self) -> io::Result<String> {
        let mut buf = Vec::new();
        self.build_report("expr")
            .write(("expr", Source::from(&self.source)), &mut buf)?;
        Ok(String::from_utf8_lossy(&buf).into_owned())
    }
}
