use crate::error::{CoreError, CoreResult};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use strum_macros::{Display, EnumIter, EnumString};

/// Which notation family a cube size scrambles with.
///
/// - `Basic`: plain face turns (2x2x2, 3x3x3)
/// - `Wide`: face turns with an optional `w` wide suffix (4x4x4, 5x5x5)
/// - `Layered`: face turns with an optional numeric layer prefix (6x6x6 and up)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SizeClass {
    Basic,
    Wide,
    Layered,
}

/// The cube sizes we generate scrambles and keep statistics for.
///
/// The string form is grid notation ("3x3x3"). That is also the form the
/// HTTP layer accepts and the database stores.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, EnumString, Display, Serialize, Deserialize,
)]
pub enum Puzzle {
    #[strum(serialize = "2x2x2")]
    #[serde(rename = "2x2x2")]
    Cube2,
    #[strum(serialize = "3x3x3")]
    #[serde(rename = "3x3x3")]
    Cube3,
    #[strum(serialize = "4x4x4")]
    #[serde(rename = "4x4x4")]
    Cube4,
    #[strum(serialize = "5x5x5")]
    #[serde(rename = "5x5x5")]
    Cube5,
    #[strum(serialize = "6x6x6")]
    #[serde(rename = "6x6x6")]
    Cube6,
    #[strum(serialize = "7x7x7")]
    #[serde(rename = "7x7x7")]
    Cube7,
    #[strum(serialize = "8x8x8")]
    #[serde(rename = "8x8x8")]
    Cube8,
    #[strum(serialize = "9x9x9")]
    #[serde(rename = "9x9x9")]
    Cube9,
}

impl Puzzle {
    /// Edge length of the cube (2..=9).
    pub fn size(self) -> u8 {
        match self {
            Self::Cube2 => 2,
            Self::Cube3 => 3,
            Self::Cube4 => 4,
            Self::Cube5 => 5,
            Self::Cube6 => 6,
            Self::Cube7 => 7,
            Self::Cube8 => 8,
            Self::Cube9 => 9,
        }
    }

    /// Fixed scramble length for this cube size.
    pub fn scramble_len(self) -> usize {
        match self {
            Self::Cube2 => 11,
            Self::Cube3 => 20,
            Self::Cube4 => 40,
            Self::Cube5 => 60,
            Self::Cube6 => 80,
            Self::Cube7 => 100,
            Self::Cube8 => 120,
            Self::Cube9 => 140,
        }
    }

    pub fn size_class(self) -> SizeClass {
        match self.size() {
            2 | 3 => SizeClass::Basic,
            4 | 5 => SizeClass::Wide,
            _ => SizeClass::Layered,
        }
    }

    /// Parses grid notation ("4x4x4"). Anything else is an unsupported puzzle.
    pub fn parse(s: &str) -> CoreResult<Self> {
        Self::from_str(s).map_err(|_| CoreError::UnsupportedPuzzle(s.to_string()))
    }
}
