//! Path generators, one per shape family.
//!
//! Each generator is a pure function of the scalar environment: it reads the
//! coordinate frame plus its family's guides and emits one or more closed
//! subpaths. A guide that failed to evaluate reads as zero, which degrades
//! the outline instead of failing the call.

use std::f64::consts::PI;

use enum_dispatch::enum_dispatch;

use super::defaults::BEZIER_CIRCLE_K;
use super::frame::Env;
use super::path::{DrawCommand, PathBuilder};

/// A path generator for one shape family.
#[enum_dispatch]
pub trait OutlineGenerator {
    /// Emit the outline for the frame and guides in `env`.
    fn emit(&self, env: &Env) -> Vec<DrawCommand>;
}

/// The closed set of shape families.
#[enum_dispatch(OutlineGenerator)]
#[derive(Debug, Clone, Copy)]
pub enum Generator {
    Rectangle,
    Diamond,
    Star5,
    Arrow,
    Ellipse,
    Cube,
    Hexagon,
    Callout,
    Triangle,
    RoundRect,
}

/// The bounding-box scalars every generator reads.
struct Bounds {
    l: f64,
    t: f64,
    r: f64,
    b: f64,
    hc: f64,
    vc: f64,
    wd2: f64,
    hd2: f64,
}

impl Bounds {
    fn read(env: &Env) -> Self {
        Self {
            l: env.get_or("l", 0.0),
            t: env.get_or("t", 0.0),
            r: env.get_or("r", 0.0),
            b: env.get_or("b", 0.0),
            hc: env.get_or("hc", 0.0),
            vc: env.get_or("vc", 0.0),
            wd2: env.get_or("wd2", 0.0),
            hd2: env.get_or("hd2", 0.0),
        }
    }
}

/// Axis-aligned rectangle; also the fallback for unknown shape identifiers.
#[derive(Debug, Clone, Copy)]
pub struct Rectangle;

impl OutlineGenerator for Rectangle {
    fn emit(&self, env: &Env) -> Vec<DrawCommand> {
        let bx = Bounds::read(env);
        PathBuilder::new()
            .m(bx.l, bx.t)
            .l(bx.r, bx.t)
            .l(bx.r, bx.b)
            .l(bx.l, bx.b)
            .z()
            .build()
    }
}

/// The four bounding-box midpoints in rhombus order.
#[derive(Debug, Clone, Copy)]
pub struct Diamond;

impl OutlineGenerator for Diamond {
    fn emit(&self, env: &Env) -> Vec<DrawCommand> {
        let bx = Bounds::read(env);
        PathBuilder::new()
            .m(bx.l, bx.vc)
            .l(bx.hc, bx.t)
            .l(bx.r, bx.vc)
            .l(bx.hc, bx.b)
            .z()
            .build()
    }
}

/// Five-point star: ten vertices alternating between the `outer` and `inner`
/// guide radii, starting at the top and stepping by π/5.
#[derive(Debug, Clone, Copy)]
pub struct Star5;

impl OutlineGenerator for Star5 {
    fn emit(&self, env: &Env) -> Vec<DrawCommand> {
        let bx = Bounds::read(env);
        let outer = env.get_or("outer", 0.0);
        let inner = env.get_or("inner", 0.0);

        let mut pb = PathBuilder::new();
        for i in 0..10 {
            let radius = if i % 2 == 0 { outer } else { inner };
            let theta = -PI / 2.0 + i as f64 * PI / 5.0;
            let x = bx.hc + radius * theta.cos();
            let y = bx.vc + radius * theta.sin();
            pb = if i == 0 { pb.m(x, y) } else { pb.l(x, y) };
        }
        pb.z().build()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArrowHeading {
    Up,
    Down,
    Left,
    Right,
}

/// Block arrow: a centered stem plus a triangular head, as a 7-point
/// polygon starting at the tip.
///
/// Guides: `sw2` (stem half-span), `hw2` (head half-span), `neck` (the
/// along-axis coordinate where the head meets the stem).
#[derive(Debug, Clone, Copy)]
pub struct Arrow {
    pub heading: ArrowHeading,
}

impl OutlineGenerator for Arrow {
    fn emit(&self, env: &Env) -> Vec<DrawCommand> {
        let bx = Bounds::read(env);
        let sw2 = env.get_or("sw2", 0.0);
        let hw2 = env.get_or("hw2", 0.0);
        let neck = env.get_or("neck", 0.0);

        match self.heading {
            ArrowHeading::Down => PathBuilder::new()
                .m(bx.hc, bx.b)
                .l(bx.hc - hw2, neck)
                .l(bx.hc - sw2, neck)
                .l(bx.hc - sw2, bx.t)
                .l(bx.hc + sw2, bx.t)
                .l(bx.hc + sw2, neck)
                .l(bx.hc + hw2, neck)
                .z()
                .build(),
            ArrowHeading::Up => PathBuilder::new()
                .m(bx.hc, bx.t)
                .l(bx.hc - hw2, neck)
                .l(bx.hc - sw2, neck)
                .l(bx.hc - sw2, bx.b)
                .l(bx.hc + sw2, bx.b)
                .l(bx.hc + sw2, neck)
                .l(bx.hc + hw2, neck)
                .z()
                .build(),
            ArrowHeading::Left => PathBuilder::new()
                .m(bx.l, bx.vc)
                .l(neck, bx.vc - hw2)
                .l(neck, bx.vc - sw2)
                .l(bx.r, bx.vc - sw2)
                .l(bx.r, bx.vc + sw2)
                .l(neck, bx.vc + sw2)
                .l(neck, bx.vc + hw2)
                .z()
                .build(),
            ArrowHeading::Right => PathBuilder::new()
                .m(bx.r, bx.vc)
                .l(neck, bx.vc - hw2)
                .l(neck, bx.vc - sw2)
                .l(bx.l, bx.vc - sw2)
                .l(bx.l, bx.vc + sw2)
                .l(neck, bx.vc + sw2)
                .l(neck, bx.vc + hw2)
                .z()
                .build(),
        }
    }
}

/// Four cubic arcs; control offsets are `k` times the per-axis radius, so
/// the approximation holds at any aspect ratio.
#[derive(Debug, Clone, Copy)]
pub struct Ellipse;

impl OutlineGenerator for Ellipse {
    fn emit(&self, env: &Env) -> Vec<DrawCommand> {
        let bx = Bounds::read(env);
        let kx = BEZIER_CIRCLE_K * bx.wd2;
        let ky = BEZIER_CIRCLE_K * bx.hd2;
        PathBuilder::new()
            .m(bx.r, bx.vc)
            .c(bx.r, bx.vc + ky, bx.hc + kx, bx.b, bx.hc, bx.b)
            .c(bx.hc - kx, bx.b, bx.l, bx.vc + ky, bx.l, bx.vc)
            .c(bx.l, bx.vc - ky, bx.hc - kx, bx.t, bx.hc, bx.t)
            .c(bx.hc + kx, bx.t, bx.r, bx.vc - ky, bx.r, bx.vc)
            .z()
            .build()
    }
}

/// Isometric-style cube: front, top, and right faces as three disjoint
/// closed subpaths, skewed by the `off` guide.
///
/// Guides: `ft` (front-face top), `fr` (front-face right), `il` (back-top
/// left), `ib` (right-face bottom).
#[derive(Debug, Clone, Copy)]
pub struct Cube;

impl OutlineGenerator for Cube {
    fn emit(&self, env: &Env) -> Vec<DrawCommand> {
        let bx = Bounds::read(env);
        let ft = env.get_or("ft", 0.0);
        let fr = env.get_or("fr", 0.0);
        let il = env.get_or("il", 0.0);
        let ib = env.get_or("ib", 0.0);

        let front = PathBuilder::new()
            .m(bx.l, ft)
            .l(fr, ft)
            .l(fr, bx.b)
            .l(bx.l, bx.b)
            .z();
        let top = front.m(bx.l, ft).l(il, bx.t).l(bx.r, bx.t).l(fr, ft).z();
        let side = top.m(fr, ft).l(bx.r, bx.t).l(bx.r, ib).l(fr, bx.b).z();
        side.build()
    }
}

/// Six vertices at angles i·π/3 with per-axis radii.
#[derive(Debug, Clone, Copy)]
pub struct Hexagon;

impl OutlineGenerator for Hexagon {
    fn emit(&self, env: &Env) -> Vec<DrawCommand> {
        let bx = Bounds::read(env);
        let mut pb = PathBuilder::new();
        for i in 0..6 {
            let theta = i as f64 * PI / 3.0;
            let x = bx.hc + bx.wd2 * theta.cos();
            let y = bx.vc + bx.hd2 * theta.sin();
            pb = if i == 0 { pb.m(x, y) } else { pb.l(x, y) };
        }
        pb.z().build()
    }
}

/// Speech callout: a centered body rectangle with a triangular tail whose
/// apex sits at the bottom-center of the bounding box, as a 7-point outline.
///
/// Guides: `bw2`/`bh2` (body half-spans), `tw2` (tail base half-span).
#[derive(Debug, Clone, Copy)]
pub struct Callout;

impl OutlineGenerator for Callout {
    fn emit(&self, env: &Env) -> Vec<DrawCommand> {
        let bx = Bounds::read(env);
        let bw2 = env.get_or("bw2", 0.0);
        let bh2 = env.get_or("bh2", 0.0);
        let tw2 = env.get_or("tw2", 0.0);

        let (left, right) = (bx.hc - bw2, bx.hc + bw2);
        let (top, bottom) = (bx.vc - bh2, bx.vc + bh2);
        PathBuilder::new()
            .m(left, top)
            .l(right, top)
            .l(right, bottom)
            .l(bx.hc + tw2, bottom)
            .l(bx.hc, bx.b)
            .l(bx.hc - tw2, bottom)
            .l(left, bottom)
            .z()
            .build()
    }
}

/// Isosceles triangle: apex at top-center, base on the bottom edge.
#[derive(Debug, Clone, Copy)]
pub struct Triangle;

impl OutlineGenerator for Triangle {
    fn emit(&self, env: &Env) -> Vec<DrawCommand> {
        let bx = Bounds::read(env);
        PathBuilder::new()
            .m(bx.hc, bx.t)
            .l(bx.r, bx.b)
            .l(bx.l, bx.b)
            .z()
            .build()
    }
}

/// Rectangle with quarter-circle corners approximated by cubics, using the
/// same `k` constant as the ellipse. The corner radius is the `rad` guide.
#[derive(Debug, Clone, Copy)]
pub struct RoundRect;

impl OutlineGenerator for RoundRect {
    fn emit(&self, env: &Env) -> Vec<DrawCommand> {
        let bx = Bounds::read(env);
        let rad = env.get_or("rad", 0.0);
        let k = BEZIER_CIRCLE_K * rad;
        PathBuilder::new()
            .m(bx.l + rad, bx.t)
            .l(bx.r - rad, bx.t)
            .c(bx.r - rad + k, bx.t, bx.r, bx.t + rad - k, bx.r, bx.t + rad)
            .l(bx.r, bx.b - rad)
            .c(bx.r, bx.b - rad + k, bx.r - rad + k, bx.b, bx.r - rad, bx.b)
            .l(bx.l + rad, bx.b)
            .c(bx.l + rad - k, bx.b, bx.l, bx.b - rad + k, bx.l, bx.b - rad)
            .l(bx.l, bx.t + rad)
            .c(bx.l, bx.t + rad - k, bx.l + rad - k, bx.t, bx.l + rad, bx.t)
            .z()
            .build()
    }
}
