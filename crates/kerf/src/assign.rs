//! Deterministic distribution of captions and textures over pieces.
//!
//! Re-rolling a distribution is done purely by changing its seed; region
//! growth is never re-run for it.

use serde::{Deserialize, Serialize};

use crate::patterns::Texture;
use crate::piece::Piece;
use crate::rng::Mix;

/// Stream salt for caption assignment.
pub const TEXT_SALT: u32 = 1;
/// Stream salt for texture assignment; distinct from [`TEXT_SALT`] so the
/// two streams stay decorrelated even with the same base seed.
pub const TEXTURE_SALT: u32 = 13579;

/// Assignment probability under the random policy.
const RANDOM_COVERAGE: f64 = 0.7;

/// Which pieces receive an optional attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Distribution {
    /// Every piece, cycling through the pool.
    #[default]
    All,
    /// Even-indexed pieces only, cycling at half rate.
    Alternate,
    /// Seeded 70%-coverage draw with a uniform pool pick.
    Random,
}

impl Distribution {
    pub fn name(&self) -> &'static str {
        match self {
            Distribution::All => "all",
            Distribution::Alternate => "alternate",
            Distribution::Random => "random",
        }
    }

    pub fn from_name(name: &str) -> Option<Distribution> {
        match name.to_lowercase().as_str() {
            "all" => Some(Distribution::All),
            "alternate" | "alt" => Some(Distribution::Alternate),
            "random" => Some(Distribution::Random),
            _ => None,
        }
    }
}

/// Pool index assigned to the piece at `index`, or None.
///
/// Pure function of its arguments: identical `(policy, index, pool_len,
/// seed, salt)` always yields the identical result.
pub fn pick(
    policy: Distribution,
    index: usize,
    pool_len: usize,
    seed: u32,
    salt: u32,
) -> Option<usize> {
    if pool_len == 0 {
        return None;
    }
    match policy {
        Distribution::All => Some(index % pool_len),
        Distribution::Alternate => (index % 2 == 0).then_some((index / 2) % pool_len),
        Distribution::Random => {
            let key = seed
                .wrapping_mul(49297)
                .wrapping_add((index as u32).wrapping_mul(9301))
                .wrapping_add(salt);
            let mut rng = Mix::new(key);
            (rng.next_f64() < RANDOM_COVERAGE).then(|| rng.next_index(pool_len))
        }
    }
}

/// Distribute caption units over pieces in order.
pub fn assign_texts(pieces: &mut [Piece], units: &[String], policy: Distribution, seed: u32) {
    for (index, piece) in pieces.iter_mut().enumerate() {
        piece.text =
            pick(policy, index, units.len(), seed, TEXT_SALT).map(|i| units[i].clone());
    }
}

/// Distribute textures over pieces in order.
pub fn assign_textures(pieces: &mut [Piece], pool: &[Texture], policy: Distribution, seed: u32) {
    for (index, piece) in pieces.iter_mut().enumerate() {
        piece.texture = pick(policy, index, pool.len(), seed, TEXTURE_SALT).map(|i| pool[i]);
    }
}
