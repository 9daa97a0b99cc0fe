//! Progression curve: XP thresholds, rank bands and title unlocks.
//!
//! Everything here is a pure lookup over static tables. The XP table is an
//! exponential curve quantized to multiples of 5 and precomputed up to
//! [`LEVEL_CAP`]; past the cap the requirement plateaus. Upper levels exceed
//! `u64`, so thresholds are `u128`.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::LazyLock;

/// XP required to leave level 1.
pub const BASE_XP: u128 = 120;
/// Growth applied per level before quantizing.
pub const XP_GROWTH: f64 = 1.45;
/// Highest level with its own table entry.
pub const LEVEL_CAP: u32 = 120;

static XP_TABLE: LazyLock<Vec<u128>> = LazyLock::new(|| build_xp_table(LEVEL_CAP));

/// Letter rank derived from level, lowest to highest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Rank {
    E,
    D,
    C,
    B,
    A,
    S,
}

impl Rank {
    pub const ALL: [Rank; 6] = [Rank::E, Rank::D, Rank::C, Rank::B, Rank::A, Rank::S];

    pub fn as_str(&self) -> &'static str {
        match self {
            Rank::E => "E",
            Rank::D => "D",
            Rank::C => "C",
            Rank::B => "B",
            Rank::A => "A",
            Rank::S => "S",
        }
    }
}

impl Default for Rank {
    fn default() -> Self {
        Rank::E
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Inclusive level bands per rank. Levels past the last band stay at S.
pub const RANK_BANDS: &[(Rank, u32, u32)] = &[
    (Rank::E, 1, 9),
    (Rank::D, 10, 18),
    (Rank::C, 19, 27),
    (Rank::B, 28, 36),
    (Rank::A, 37, 45),
    (Rank::S, 46, 70),
];

/// Sparse level -> title unlocks, ordered by level.
pub const TITLE_UNLOCKS: &[(u32, &str)] = &[
    (3, "Beginner Seeker"),
    (7, "First Ember"),
    (12, "Steady Hand"),
    (20, "Relentless"),
    (30, "Silent Hunter"),
    (45, "Iron Will"),
    (55, "Night Vanguard"),
    (70, "Ascendant"),
];

fn build_xp_table(cap: u32) -> Vec<u128> {
    let mut table = Vec::with_capacity(cap as usize);
    let mut current = BASE_XP;
    table.push(current);
    for _ in 2..=cap {
        let scaled = (current as f64 * XP_GROWTH / 5.0).round_ties_even();
        current = (scaled as u128).saturating_mul(5);
        table.push(current);
    }
    table
}

/// XP needed to advance from `level` to `level + 1`.
///
/// Level 0 is treated as level 1 and anything above [`LEVEL_CAP`] returns
/// the cap's requirement.
pub fn xp_for_next_level(level: u32) -> u128 {
    let index = level.clamp(1, LEVEL_CAP) as usize - 1;
    XP_TABLE[index]
}

/// Rank for a level. Total over all inputs: 0 maps to E, above 70 maps to S.
pub fn rank_for_level(level: u32) -> Rank {
    if let Some((rank, _, _)) = RANK_BANDS
        .iter()
        .find(|(_, start, end)| (*start..=*end).contains(&level))
    {
        return *rank;
    }
    match RANK_BANDS.last() {
        Some((top, _, end)) if level > *end => *top,
        _ => Rank::E,
    }
}

/// Title unlocked on reaching `level`, if any.
pub fn title_for_level(level: u32) -> Option<&'static str> {
    TITLE_UNLOCKS
        .iter()
        .find(|(at, _)| *at == level)
        .map(|(_, title)| *title)
}
