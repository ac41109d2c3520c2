use crate::puzzle::Puzzle;
use fastrand::Rng;
use itertools::Itertools;
use serde::{Deserialize, Serialize};
use std::fmt;
use strum_macros::{Display, EnumIter, EnumString};

/// The six outer faces of a cube, in standard notation.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, EnumString, Display, Serialize, Deserialize,
)]
pub enum Face {
    R,
    L,
    U,
    D,
    F,
    B,
}

/// Draw order for uniform face picks.
pub const FACES: [Face; 6] = [Face::R, Face::L, Face::U, Face::D, Face::F, Face::B];

impl Face {
    /// The face on the opposite side of the cube.
    pub fn opposite(self) -> Face {
        match self {
            Self::R => Self::L,
            Self::L => Self::R,
            Self::U => Self::D,
            Self::D => Self::U,
            Self::F => Self::B,
            Self::B => Self::F,
        }
    }

    /// Uniform draw over all six faces.
    pub fn random(rng: &mut Rng) -> Face {
        FACES[rng.usize(0..FACES.len())]
    }
}

/// Turn amount attached to a face turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, Serialize, Deserialize)]
pub enum Modifier {
    /// Quarter turn clockwise; bare notation ("R").
    Clockwise,
    /// Quarter turn counterclockwise; prime notation ("R'").
    Counterclockwise,
    /// Half turn; "2" notation ("R2").
    Double,
}

/// Draw order for uniform modifier picks.
pub const MODIFIERS: [Modifier; 3] = [
    Modifier::Clockwise,
    Modifier::Counterclockwise,
    Modifier::Double,
];

impl Modifier {
    pub fn suffix(self) -> &'static str {
        match self {
            Self::Clockwise => "",
            Self::Counterclockwise => "'",
            Self::Double => "2",
        }
    }

    /// Uniform draw over the three turn amounts.
    pub fn random(rng: &mut Rng) -> Modifier {
        MODIFIERS[rng.usize(0..MODIFIERS.len())]
    }
}

/// One scramble token.
///
/// `layer` and `wide` never appear together: 4x4x4 and 5x5x5 scrambles use
/// the `w` suffix ("Rw2"), 6x6x6 and larger use a numeric layer prefix
/// ("3U'"), and smaller cubes use neither.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Move {
    pub face: Face,
    /// Depth of a layer-prefixed turn; always 2 or deeper when present.
    pub layer: Option<u8>,
    pub wide: bool,
    pub modifier: Modifier,
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(depth) = self.layer {
            write!(f, "{}", depth)?;
        }
        write!(f, "{}", self.face)?;
        if self.wide {
            f.write_str("w")?;
        }
        f.write_str(self.modifier.suffix())
    }
}

/// A complete scramble sequence for one puzzle.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Scramble {
    pub puzzle: Puzzle,
    pub moves: Vec<Move>,
}

impl Scramble {
    /// Space-joined notation, e.g. "R U' F2 L".
    pub fn notation(&self) -> String {
        self.moves.iter().join(" ")
    }
}

impl fmt::Display for Scramble {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.notation())
    }
}
