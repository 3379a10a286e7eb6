//! Face pool and deck generation.

use alloc::format;
use alloc::vec::Vec;
#[cfg(all(not(feature = "std"), feature = "alloc"))]
use hashbrown::HashSet;
use rand::Rng;
use rand::seq::SliceRandom;
#[cfg(feature = "std")]
use std::collections::HashSet;

use crate::card::Face;

const ADJECTIVES: [&str; 16] = [
    "admiring", "bold", "brave", "clever", "dreamy", "eager", "focused", "gallant", "happy",
    "jolly", "keen", "lucid", "nifty", "quirky", "serene", "witty",
];

const NAMES: [&str; 16] = [
    "babbage", "curie", "darwin", "euler", "faraday", "gauss", "hopper", "kepler", "lovelace",
    "newton", "noether", "pascal", "ritchie", "shannon", "tesla", "turing",
];

/// Number of distinct faces the generator can produce.
pub const FACE_POOL_SIZE: usize = ADJECTIVES.len() * NAMES.len();

/// Draws a random face name such as `clever_lovelace`.
pub fn random_face<R: Rng>(rng: &mut R) -> Face {
    let adjective = ADJECTIVES[rng.random_range(0..ADJECTIVES.len())];
    let name = NAMES[rng.random_range(0..NAMES.len())];
    Face::new(format!("{adjective}_{name}"))
}

/// Builds a shuffled deck holding `pairs` distinct faces, each twice.
///
/// Colliding names are redrawn, so `pairs` must not exceed
/// [`FACE_POOL_SIZE`].
pub fn create_deck<R: Rng>(pairs: usize, rng: &mut R) -> Vec<Face> {
    debug_assert!(pairs <= FACE_POOL_SIZE);

    let mut cards = Vec::with_capacity(pairs * 2);
    let mut used = HashSet::with_capacity(pairs);

    while used.len() < pairs {
        let face = random_face(rng);
        if used.insert(face.clone()) {
            cards.push(face.clone());
            cards.push(face);
        } else {
            log::trace!("face {face} already dealt, drawing again");
        }
    }

    cards.shuffle(rng);
    cards
}
