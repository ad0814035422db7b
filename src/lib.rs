//! Parametric preset-shape geometry.
//!
//! Given a shape identifier and a bounding box, the engine builds a named
//! scalar environment (the coordinate frame), evaluates the shape's
//! declarative guide formulas against it, and emits the outline as
//! move/line/cubic/close draw commands plus a serialized wire form.
//!
//! ```
//! use prstgeom::generate_geometry;
//!
//! let geometry = generate_geometry("diamond", 200.0, 100.0);
//! assert_eq!(
//!     geometry.to_wire(),
//!     "w=200 h=100 M 0 50 L 100 0 L 200 50 L 100 100 Z",
//! );
//! ```
//!
//! Every stage is a pure function of its inputs: no I/O, no shared mutable
//! state, and no fatal conditions. Unknown identifiers render as rectangles,
//! broken guide formulas degrade to zero, and degenerate bounding boxes
//! produce degenerate (but well-formed) geometry. The engine sits inside
//! automated content pipelines where a panic would abort a whole document.
//!
//! Calls are trivially parallel-safe: each one owns its environment and its
//! output, and nothing is cached across calls.

pub mod ast;
pub mod errors;
pub mod geom;
mod log;
pub mod parse;

pub use ast::{Formula, Guide, Operand};
pub use errors::FormulaError;
pub use geom::frame::Env;
pub use geom::path::{DrawCommand, Geometry, Path};
pub use geom::registry::{ShapeDef, lookup};
// Draw-command coordinates are glam vectors; re-export so callers can match
// on them without naming the dependency.
pub use glam::DVec2;

/// Generate outline geometry in a local 0-based frame.
pub fn generate_geometry(shape_id: &str, width: f64, height: f64) -> Geometry {
    generate_geometry_at(shape_id, width, height, 0.0, 0.0)
}

/// Generate outline geometry with the frame translated by an offset.
///
/// The offset shifts every coordinate; the path's declared bounds stay the
/// requested width and height.
pub fn generate_geometry_at(
    shape_id: &str,
    width: f64,
    height: f64,
    x_offset: f64,
    y_offset: f64,
) -> Geometry {
    geom::generate(shape_id, width, height, x_offset, y_offset)
}
