//! Geometry generation: frame → guides → generator → serialized paths.
//!
//! This module is organized into submodules:
//! - `frame`: the scalar environment and the coordinate-frame builder
//! - `eval`: guide evaluation over the formula AST
//! - `registry`: the static shape-definition table
//! - `shapes`: the per-family path generators
//! - `path`: draw commands, paths, and the fluent builder
//! - `serialize`: the wire geometry format
//! - `defaults`: fixed proportions that live in code

pub mod defaults;
pub mod eval;
pub mod frame;
pub mod path;
pub mod registry;
pub mod serialize;
pub mod shapes;

use crate::log::debug;

use self::path::{Geometry, Path};
use self::registry::ShapeDef;
use self::shapes::OutlineGenerator;

/// Generate the outline geometry for a shape at an offset bounding box.
///
/// This never fails: unknown identifiers fall back to the rectangle family,
/// broken guides degrade to zero, and a generator that emits nothing is
/// replaced by the rectangle outline.
pub fn generate(shape_id: &str, width: f64, height: f64, x: f64, y: f64) -> Geometry {
    let def = match registry::lookup(shape_id) {
        Some(def) => def,
        None => {
            debug!("unknown shape id `{}`; using the rectangle family", shape_id);
            registry::fallback()
        }
    };
    Geometry {
        paths: vec![generate_path(def, width, height, x, y)],
    }
}

fn generate_path(def: &ShapeDef, width: f64, height: f64, x: f64, y: f64) -> Path {
    let env = eval::evaluate(def.guides, frame::build(width, height, x, y));
    let mut commands = def.generator.emit(&env);
    if commands.is_empty() {
        // Generator defect; keep the pipeline total.
        commands = shapes::Rectangle.emit(&env);
    }
    Path {
        width,
        height,
        commands,
    }
}
