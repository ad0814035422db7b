//! The static shape-definition table.
//!
//! Definitions are data: an identifier, an ordered guide list, and the
//! generator that consumes the evaluated environment. The table is built
//! once and read-only; per-call state lives entirely in the environment.

use std::collections::HashMap;
use std::sync::LazyLock;

use crate::ast::Guide;

use super::shapes::{
    Arrow, ArrowHeading, Callout, Cube, Diamond, Ellipse, Generator, Hexagon, Rectangle,
    RoundRect, Star5, Triangle,
};

/// One shape family: identifier, guides, and path generator.
#[derive(Debug, Clone, Copy)]
pub struct ShapeDef {
    pub id: &'static str,
    pub guides: &'static [Guide],
    pub generator: Generator,
}

const fn g(name: &'static str, formula: &'static str) -> Guide {
    Guide { name, formula }
}

const NONE: &[Guide] = &[];

static SHAPES: &[ShapeDef] = &[
    // `rect` stays first: it doubles as the unknown-identifier fallback.
    ShapeDef {
        id: "rect",
        guides: NONE,
        generator: Generator::Rectangle(Rectangle),
    },
    ShapeDef {
        id: "flowChartProcess",
        guides: NONE,
        generator: Generator::Rectangle(Rectangle),
    },
    ShapeDef {
        id: "diamond",
        guides: NONE,
        generator: Generator::Diamond(Diamond),
    },
    ShapeDef {
        id: "flowChartDecision",
        guides: NONE,
        generator: Generator::Diamond(Diamond),
    },
    ShapeDef {
        id: "star5",
        // outer = 0.9 of the half short-side; inner = 0.4 of outer.
        guides: &[g("outer", "*/ ss 9 20"), g("inner", "*/ outer 2 5")],
        generator: Generator::Star5(Star5),
    },
    ShapeDef {
        id: "downArrow",
        guides: &[
            g("sw2", "*/ w 3 20"),
            g("hw2", "*/ w 3 10"),
            g("hl", "*/ h 2 5"),
            g("neck", "+- b 0 hl"),
        ],
        generator: Generator::Arrow(Arrow { heading: ArrowHeading::Down }),
    },
    ShapeDef {
        id: "upArrow",
        guides: &[
            g("sw2", "*/ w 3 20"),
            g("hw2", "*/ w 3 10"),
            g("hl", "*/ h 2 5"),
            g("neck", "+- t hl 0"),
        ],
        generator: Generator::Arrow(Arrow { heading: ArrowHeading::Up }),
    },
    ShapeDef {
        id: "leftArrow",
        guides: &[
            g("sw2", "*/ h 3 20"),
            g("hw2", "*/ h 3 10"),
            g("hl", "*/ w 2 5"),
            g("neck", "+- l hl 0"),
        ],
        generator: Generator::Arrow(Arrow { heading: ArrowHeading::Left }),
    },
    ShapeDef {
        id: "rightArrow",
        guides: &[
            g("sw2", "*/ h 3 20"),
            g("hw2", "*/ h 3 10"),
            g("hl", "*/ w 2 5"),
            g("neck", "+- r 0 hl"),
        ],
        generator: Generator::Arrow(Arrow { heading: ArrowHeading::Right }),
    },
    ShapeDef {
        id: "ellipse",
        guides: NONE,
        generator: Generator::Ellipse(Ellipse),
    },
    ShapeDef {
        id: "cube",
        guides: &[
            g("off", "*/ ss 1 5"),
            g("ft", "+- t off 0"),
            g("fr", "+- r 0 off"),
            g("il", "+- l off 0"),
            g("ib", "+- b 0 off"),
        ],
        generator: Generator::Cube(Cube),
    },
    ShapeDef {
        id: "hexagon",
        guides: NONE,
        generator: Generator::Hexagon(Hexagon),
    },
    ShapeDef {
        id: "callout1",
        guides: &[
            g("bw2", "*/ w 2 5"),
            g("bh2", "*/ h 3 10"),
            g("tw2", "*/ w 1 10"),
        ],
        generator: Generator::Callout(Callout),
    },
    ShapeDef {
        id: "triangle",
        guides: NONE,
        generator: Generator::Triangle(Triangle),
    },
    ShapeDef {
        id: "roundRect",
        // Nominal radius is a sixth of the short side, pinned to stay a
        // sane fraction of it even for wildly skewed boxes.
        guides: &[
            g("rad0", "*/ ss 1 6"),
            g("radcap", "*/ ss 1 2"),
            g("rad", "pin 0 rad0 radcap"),
        ],
        generator: Generator::RoundRect(RoundRect),
    },
];

static INDEX: LazyLock<HashMap<&'static str, &'static ShapeDef>> =
    LazyLock::new(|| SHAPES.iter().map(|def| (def.id, def)).collect());

/// Look up a shape family by identifier.
pub fn lookup(shape_id: &str) -> Option<&'static ShapeDef> {
    INDEX.get(shape_id).copied()
}

/// The definition substituted for unknown identifiers.
pub fn fallback() -> &'static ShapeDef {
    &SHAPES[0]
}
