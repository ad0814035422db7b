//! Draw commands, paths, and the fluent path builder.

use glam::DVec2;

/// One instruction in a vector outline.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DrawCommand {
    MoveTo(DVec2),
    LineTo(DVec2),
    CubicTo { c1: DVec2, c2: DVec2, end: DVec2 },
    Close,
}

/// A command sequence with its declared bounds.
///
/// The sequence may contain several closed subpaths; a cube emits three
/// faces. Bounds are the caller's requested width and height, independent of
/// any frame offset.
#[derive(Debug, Clone, PartialEq)]
pub struct Path {
    pub width: f64,
    pub height: f64,
    pub commands: Vec<DrawCommand>,
}

/// The complete output of one generation call.
#[derive(Debug, Clone, PartialEq)]
pub struct Geometry {
    pub paths: Vec<Path>,
}

/// Fluent builder for command sequences.
#[derive(Debug, Default)]
pub struct PathBuilder {
    commands: Vec<DrawCommand>,
}

impl PathBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn m(mut self, x: f64, y: f64) -> Self {
        self.commands.push(DrawCommand::MoveTo(DVec2::new(x, y)));
        self
    }

    pub fn l(mut self, x: f64, y: f64) -> Self {
        self.commands.push(DrawCommand::LineTo(DVec2::new(x, y)));
        self
    }

    pub fn c(mut self, c1x: f64, c1y: f64, c2x: f64, c2y: f64, x: f64, y: f64) -> Self {
        self.commands.push(DrawCommand::CubicTo {
            c1: DVec2::new(c1x, c1y),
            c2: DVec2::new(c2x, c2y),
            end: DVec2::new(x, y),
        });
        self
    }

    pub fn z(mut self) -> Self {
        self.commands.push(DrawCommand::Close);
        self
    }

    pub fn build(self) -> Vec<DrawCommand> {
        self.commands
    }
}
