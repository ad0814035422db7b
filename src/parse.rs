//! Parsing guide formulas into the AST.
//!
//! One pass: the pest grammar in `guide.pest` recognizes the whole-string
//! form, and the pair walk below classifies operand tokens. Anything the
//! grammar rejects surfaces as a [`FormulaError`] with a span into the
//! formula text; the evaluator turns that into a zero-valued guide.

use miette::NamedSource;
use pest::Parser;
use pest::error::InputLocation;
use pest::iterators::Pair;
use pest_derive::Parser;

use crate::ast::{Formula, Operand};
use crate::errors::FormulaError;

#[derive(Parser)]
#[grammar = "guide.pest"]
struct GuideParser;

/// Parse one formula string.
pub fn parse_formula(src: &str) -> Result<Formula, FormulaError> {
    let mut pairs =
        GuideParser::parse(Rule::formula, src).map_err(|e| unrecognized(src, &e))?;
    let formula = pairs.next().expect("a successful parse yields a formula pair");
    let form = formula
        .into_inner()
        .next()
        .expect("the formula rule wraps exactly one form");
    build(src, form)
}

fn build(src: &str, form: Pair<'_, Rule>) -> Result<Formula, FormulaError> {
    match form.as_rule() {
        Rule::operand => Ok(match classify(form.as_str()) {
            Operand::Number(n) => Formula::Literal(n),
            Operand::Name(name) => Formula::VarRef(name),
        }),
        Rule::val_form => {
            let pair = form
                .into_inner()
                .find(|p| p.as_rule() == Rule::operand)
                .expect("val form has one operand");
            match pair.as_str().parse::<f64>() {
                Ok(n) => Ok(Formula::Literal(n)),
                Err(_) => Err(bad_literal(src, &pair)),
            }
        }
        Rule::ratio_form => {
            let [a, n, d] = operands::<3>(form);
            Ok(Formula::ScaledRatio(a, n, d))
        }
        Rule::addsub_form => {
            let [a, b, c] = operands::<3>(form);
            Ok(Formula::AddSub(a, b, c))
        }
        Rule::cos_form => {
            let [r, angle] = operands::<2>(form);
            Ok(Formula::Cos(r, angle))
        }
        Rule::sin_form => {
            let [r, angle] = operands::<2>(form);
            Ok(Formula::Sin(r, angle))
        }
        Rule::pin_form => {
            let [lo, value, hi] = operands::<3>(form);
            Ok(Formula::Pin(lo, value, hi))
        }
        Rule::max_form => {
            let [a, b] = operands::<2>(form);
            Ok(Formula::Max(a, b))
        }
        other => unreachable!("form rule cannot produce {other:?}"),
    }
}

/// Collect a form's operand tokens; the grammar fixes the count per form.
fn operands<const N: usize>(form: Pair<'_, Rule>) -> [Operand; N] {
    let ops: Vec<Operand> = form
        .into_inner()
        .filter(|p| p.as_rule() == Rule::operand)
        .map(|p| classify(p.as_str()))
        .collect();
    ops.try_into()
        .expect("the grammar fixes each form's operand count")
}

fn classify(token: &str) -> Operand {
    match token.parse::<f64>() {
        Ok(n) => Operand::Number(n),
        Err(_) => Operand::Name(token.to_string()),
    }
}

fn unrecognized(src: &str, err: &pest::error::Error<Rule>) -> FormulaError {
    let (offset, len) = match err.location {
        InputLocation::Pos(p) => (p.min(src.len()), 0),
        InputLocation::Span((s, e)) => (s.min(src.len()), e.saturating_sub(s)),
    };
    FormulaError::Unrecognized {
        src: NamedSource::new("formula", src.to_string()),
        span: (offset, len).into(),
    }
}

fn bad_literal(src: &str, pair: &Pair<'_, Rule>) -> FormulaError {
    let span = pair.as_span();
    FormulaError::BadLiteral {
        src: NamedSource::new("formula", src.to_string()),
        span: (span.start(), span.end() - span.start()).into(),
    }
}
