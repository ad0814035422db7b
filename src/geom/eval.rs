//! Guide evaluation: an exhaustive match over the formula AST.
//!
//! Guides are processed strictly in declaration order, each one seeing the
//! coordinate frame plus every guide computed before it. A guide that cannot
//! be parsed or resolved recovers to `0` with a diagnostic; the batch never
//! aborts, because a degenerate outline is still renderable and a crash
//! inside a content pipeline is not.

use std::f64::consts::PI;

use crate::ast::{Formula, Guide, Operand};
use crate::errors::FormulaError;
use crate::log::warn;
use crate::parse::parse_formula;

use super::defaults::ANGLE_UNITS_PER_PI;
use super::frame::Env;

/// Extend `env` with every guide's value, in declaration order.
pub fn evaluate(guides: &[Guide], mut env: Env) -> Env {
    for guide in guides {
        // _err: referenced only when the tracing feature is compiled in.
        let value = match guide_value(guide.formula, &env) {
            Ok(v) => v,
            Err(_err) => {
                warn!("guide `{}` recovered to 0: {}", guide.name, _err);
                0.0
            }
        };
        env.insert(guide.name, value);
    }
    env
}

fn guide_value(formula: &str, env: &Env) -> Result<f64, FormulaError> {
    let value = eval_formula(&parse_formula(formula)?, env)?;
    if !value.is_finite() {
        return Err(FormulaError::NonFinite);
    }
    Ok(value)
}

fn eval_formula(formula: &Formula, env: &Env) -> Result<f64, FormulaError> {
    Ok(match formula {
        Formula::Literal(n) => *n,
        Formula::ScaledRatio(a, n, d) => {
            let den = resolve(d, env)?;
            if den == 0.0 {
                return Err(FormulaError::DivisionByZero);
            }
            resolve(a, env)? * resolve(n, env)? / den
        }
        Formula::AddSub(a, b, c) => resolve(a, env)? + resolve(b, env)? - resolve(c, env)?,
        Formula::Cos(r, angle) => resolve(r, env)? * to_radians(resolve(angle, env)?).cos(),
        Formula::Sin(r, angle) => resolve(r, env)? * to_radians(resolve(angle, env)?).sin(),
        Formula::Pin(lo, value, hi) => {
            let lo = resolve(lo, env)?;
            let hi = resolve(hi, env)?;
            // Not f64::clamp: an inverted degenerate range must not panic.
            resolve(value, env)?.max(lo).min(hi)
        }
        Formula::Max(a, b) => resolve(a, env)?.max(resolve(b, env)?),
        Formula::VarRef(name) => lookup(name, env)?,
    })
}

fn resolve(op: &Operand, env: &Env) -> Result<f64, FormulaError> {
    match op {
        Operand::Name(name) => lookup(name, env),
        Operand::Number(n) => Ok(*n),
    }
}

fn lookup(name: &str, env: &Env) -> Result<f64, FormulaError> {
    env.get(name)
        .ok_or_else(|| FormulaError::UnknownName { name: name.to_string() })
}

fn to_radians(units: f64) -> f64 {
    units * PI / ANGLE_UNITS_PER_PI
}
