//! The scalar environment and the coordinate-frame builder.

use std::collections::HashMap;

/// Named scalars visible to guide formulas and path generators.
///
/// Built once per generation call: the coordinate frame first, then each
/// guide in declaration order. Later guides read earlier ones; nothing is
/// shared across calls.
#[derive(Debug, Clone, Default)]
pub struct Env {
    values: HashMap<String, f64>,
}

impl Env {
    pub fn get(&self, name: &str) -> Option<f64> {
        self.values.get(name).copied()
    }

    /// Value for `name`, or `fallback` when absent.
    ///
    /// Generators use this with a zero fallback so that a guide which failed
    /// to evaluate degrades the outline instead of failing the call.
    pub fn get_or(&self, name: &str, fallback: f64) -> f64 {
        self.get(name).unwrap_or(fallback)
    }

    pub fn insert(&mut self, name: impl Into<String>, value: f64) {
        self.values.insert(name.into(), value);
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Build the base coordinate frame for a bounding box at an offset.
///
/// Produces exactly the fixed roster below and nothing else; shape guides add
/// the rest. Zero (or negative) dimensions are legal and simply collapse the
/// derived scalars.
pub fn build(width: f64, height: f64, x: f64, y: f64) -> Env {
    let mut env = Env::default();

    macro_rules! frame_scalars {
        ($($name:ident => $value:expr),* $(,)?) => {
            $( env.insert(stringify!($name), $value); )*
        };
    }

    frame_scalars! {
        l   => x,
        t   => y,
        r   => x + width,
        b   => y + height,
        hc  => x + width / 2.0,
        vc  => y + height / 2.0,
        w   => width,
        h   => height,
        wd2 => width / 2.0,
        hd2 => height / 2.0,
        wd4 => width / 4.0,
        hd4 => height / 4.0,
        ss  => width.min(height),
        ls  => width.max(height),
    }

    env
}

#[cfg(test)]
mod tests {
    use super::*;

    fn v(env: &Env, name: &str) -> f64 {
        env.get(name).unwrap()
    }

    #[test]
    fn frame_identities_hold() {
        for (w, h, x, y) in [
            (200.0, 100.0, 0.0, 0.0),
            (100.0, 100.0, 50.0, -25.0),
            (1.0, 3.0, 0.5, 0.5),
        ] {
            let env = build(w, h, x, y);
            assert_eq!(v(&env, "r") - v(&env, "l"), w);
            assert_eq!(v(&env, "b") - v(&env, "t"), h);
            assert_eq!(v(&env, "hc"), (v(&env, "l") + v(&env, "r")) / 2.0);
            assert_eq!(v(&env, "vc"), (v(&env, "t") + v(&env, "b")) / 2.0);
            assert_eq!(v(&env, "ss"), w.min(h));
            assert_eq!(v(&env, "ls"), w.max(h));
            assert_eq!(v(&env, "wd2"), w / 2.0);
            assert_eq!(v(&env, "hd4"), h / 4.0);
        }
    }

    #[test]
    fn exactly_the_documented_scalars() {
        let env = build(10.0, 20.0, 0.0, 0.0);
        assert_eq!(env.len(), 14);
        for name in [
            "l", "t", "r", "b", "hc", "vc", "w", "h", "wd2", "hd2", "wd4", "hd4", "ss", "ls",
        ] {
            assert!(env.get(name).is_some(), "missing {name}");
        }
    }

    #[test]
    fn zero_box_collapses_to_zero() {
        let env = build(0.0, 0.0, 0.0, 0.0);
        for name in ["l", "t", "r", "b", "hc", "vc", "wd2", "hd4", "ss", "ls"] {
            assert_eq!(env.get(name), Some(0.0));
        }
    }
}
