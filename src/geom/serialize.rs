//! Serialization of draw commands into the wire geometry format.
//!
//! One line per path: the declared bounds (`w=.. h=..`) followed by the
//! command stream, `M x y`, `L x y`, `C c1x c1y c2x c2y x y`, and `Z`.
//!
//! Coordinates round to the nearest integer with ties away from zero
//! (`f64::round`). The rule is part of the wire contract: downstream
//! consumers compare output byte-for-byte, so it must not drift with
//! platform defaults.

use std::fmt::Write;

use glam::DVec2;

use crate::log::warn;

use super::frame;
use super::path::{DrawCommand, Geometry};
use super::shapes::{OutlineGenerator, Rectangle};

/// Round one coordinate for the wire: nearest integer, ties away from zero.
fn round_coord(v: f64) -> i64 {
    v.round() as i64
}

fn push_point(out: &mut String, p: DVec2) {
    let _ = write!(out, " {} {}", round_coord(p.x), round_coord(p.y));
}

/// Serialize a command sequence with its declared bounds.
///
/// An empty sequence is a generator defect; the rectangle outline for the
/// same bounds is substituted so the output stays renderable.
pub fn serialize(commands: &[DrawCommand], width: f64, height: f64) -> String {
    if commands.is_empty() {
        warn!("empty command list; substituting the rectangle outline");
        let fallback = Rectangle.emit(&frame::build(width, height, 0.0, 0.0));
        return serialize(&fallback, width, height);
    }

    let mut out = String::new();
    let _ = write!(out, "w={} h={}", round_coord(width), round_coord(height));
    for command in commands {
        match command {
            DrawCommand::MoveTo(p) => {
                out.push_str(" M");
                push_point(&mut out, *p);
            }
            DrawCommand::LineTo(p) => {
                out.push_str(" L");
                push_point(&mut out, *p);
            }
            DrawCommand::CubicTo { c1, c2, end } => {
                out.push_str(" C");
                push_point(&mut out, *c1);
                push_point(&mut out, *c2);
                push_point(&mut out, *end);
            }
            DrawCommand::Close => out.push_str(" Z"),
        }
    }
    out
}

impl Geometry {
    /// Serialize every path, one line each.
    pub fn to_wire(&self) -> String {
        self.paths
            .iter()
            .map(|p| serialize(&p.commands, p.width, p.height))
            .collect::<Vec<_>>()
            .join("\n")
    }
}
