pub mod moves;

pub use moves::{Face, Modifier, Move, Scramble, FACES, MODIFIERS};

use crate::puzzle::{Puzzle, SizeClass};
use fastrand::Rng;
use tracing::debug;

/// Draws the face for the next move by rejection sampling: the previous
/// face and its opposite are both excluded, so consecutive moves never
/// share an axis ("R R2" and "R L" are equally illegal).
pub fn next_face(prev: Face, rng: &mut Rng) -> Face {
    loop {
        let candidate = Face::random(rng);
        if candidate != prev && candidate != prev.opposite() {
            return candidate;
        }
    }
}

/// Generates a fresh scramble for `puzzle`, with `rng` as the only source
/// of randomness. Same seed, same puzzle: same scramble.
pub fn generate(puzzle: Puzzle, rng: &mut Rng) -> Scramble {
    let len = puzzle.scramble_len();
    let mut moves = Vec::with_capacity(len);

    let mut face = Face::random(rng);
    moves.push(decorate(puzzle, face, rng));

    while moves.len() < len {
        face = next_face(face, rng);
        moves.push(decorate(puzzle, face, rng));
    }

    debug!("🎲 Generated {}-move scramble for {}", moves.len(), puzzle);
    Scramble { puzzle, moves }
}

// Attaches the size-dependent decoration to a chosen face.
fn decorate(puzzle: Puzzle, face: Face, rng: &mut Rng) -> Move {
    match puzzle.size_class() {
        SizeClass::Basic => Move {
            face,
            layer: None,
            wide: false,
            modifier: Modifier::random(rng),
        },
        SizeClass::Wide => {
            let wide = rng.bool();
            Move {
                face,
                layer: None,
                wide,
                modifier: Modifier::random(rng),
            }
        }
        SizeClass::Layered => {
            let layer = random_layer(puzzle.size(), rng);
            Move {
                face,
                layer,
                wide: false,
                modifier: Modifier::random(rng),
            }
        }
    }
}

// A cube of edge length N has floor(N / 2) outer layers per face. Depth
// "none" is a plain face turn; explicit depths run 2..=floor(N / 2).
fn random_layer(size: u8, rng: &mut Rng) -> Option<u8> {
    let choices = size / 2;
    match rng.u8(0..choices) {
        0 => None,
        depth => Some(depth + 1),
    }
}
