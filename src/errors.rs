//! Error types for guide formula parsing and evaluation.
//!
//! None of these are fatal to the caller: the evaluator recovers every one of
//! them to a zero-valued guide and keeps going. They exist so the recovery
//! diagnostic can say precisely what went wrong, with a span into the
//! offending formula where one is available.

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

/// A guide formula that could not be parsed or evaluated.
#[derive(Error, Diagnostic, Debug)]
pub enum FormulaError {
    #[error("unrecognized formula form")]
    #[diagnostic(code(prstgeom::formula::unrecognized))]
    Unrecognized {
        #[source_code]
        src: NamedSource<String>,
        #[label("expected `val`, `*/`, `+-`, `cos`, `sin`, `pin`, `max`, a name, or a number")]
        span: SourceSpan,
    },

    #[error("`val` takes a numeric literal")]
    #[diagnostic(code(prstgeom::formula::bad_literal))]
    BadLiteral {
        #[source_code]
        src: NamedSource<String>,
        #[label("not a number")]
        span: SourceSpan,
    },

    #[error("unknown name: {name}")]
    #[diagnostic(code(prstgeom::formula::unknown_name))]
    UnknownName { name: String },

    #[error("division by zero")]
    #[diagnostic(code(prstgeom::formula::division_by_zero))]
    DivisionByZero,

    #[error("result is infinite or NaN")]
    #[diagnostic(code(prstgeom::formula::non_finite))]
    NonFinite,
}
