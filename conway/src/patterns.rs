// patterns.rs - Built-in Life presets and seeded random fills

use crate::config::DEFAULT_DIMENSION;
use crate::state_file::ConwayState;
use grid::Point;
use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

pub struct Pattern {
    pub name  : &'static str,
    pub cells : &'static [(i32, i32)],
}

impl Pattern {
    /// The pattern as a state on the default-sized grid.
    pub fn to_state(&self) -> ConwayState {
        let nodes = self.cells.iter().map(|&cell| Point::from(cell)).collect();
        ConwayState::new(self.name, DEFAULT_DIMENSION, nodes)
    }
}

pub const PATTERNS: &[Pattern] = &[
    Pattern {
        name: "Glider",
        cells: &[(6, 7), (7, 8), (8, 6), (8, 7), (8, 8)],
    },
    Pattern {
        name: "Blinker",
        cells: &[(25, 24), (25, 25), (25, 26)],
    },
    Pattern {
        name: "Toad",
        cells: &[(24, 25), (24, 26), (24, 27), (25, 24), (25, 25), (25, 26)],
    },
    Pattern {
        name: "Beacon",
        cells: &[(10, 10), (10, 11), (11, 10), (11, 11), (12, 12), (12, 13), (13, 12), (13, 13)],
    },
    Pattern {
        // Period 3, centered on (26, 28)
        name: "Pulsar",
        cells: &[
            (20, 24), (20, 25), (20, 26), (20, 30), (20, 31), (20, 32),
            (22, 22), (22, 27), (22, 29), (22, 34),
            (23, 22), (23, 27), (23, 29), (23, 34),
            (24, 22), (24, 27), (24, 29), (24, 34),
            (25, 24), (25, 25), (25, 26), (25, 30), (25, 31), (25, 32),
            (27, 24), (27, 25), (27, 26), (27, 30), (27, 31), (27, 32),
            (28, 22), (28, 27), (28, 29), (28, 34),
            (29, 22), (29, 27), (29, 29), (29, 34),
            (30, 22), (30, 27), (30, 29), (30, 34),
            (32, 24), (32, 25), (32, 26), (32, 30), (32, 31), (32, 32),
        ],
    },
    Pattern {
        // Methuselah: stays active for over a thousand generations on an open plane
        name: "R-pentomino",
        cells: &[(24, 25), (24, 26), (25, 24), (25, 25), (26, 25)],
    },
    Pattern {
        name: "Gosper Glider Gun",
        cells: &[
            (5, 1), (5, 2), (6, 1), (6, 2),
            (3, 13), (3, 14), (4, 12), (4, 16), (5, 11), (5, 17), (6, 11), (6, 15),
            (6, 17), (6, 18), (7, 11), (7, 17), (8, 12), (8, 16), (9, 13), (9, 14),
            (1, 25), (2, 23), (2, 25), (3, 21), (3, 22), (4, 21), (4, 22), (5, 21),
            (5, 22), (6, 23), (6, 25), (7, 25),
            (3, 35), (3, 36), (4, 35), (4, 36),
        ],
    },
];

pub fn find_pattern(name: &str) -> Option<&'static Pattern> {
    PATTERNS.iter().find(|pattern| pattern.name.eq_ignore_ascii_case(name))
}

pub fn builtin_states() -> Vec<ConwayState> {
    PATTERNS.iter().map(Pattern::to_state).collect()
}

/// Fills roughly a third of the interior cells, deterministically per seed.
pub fn random_state(seed_value: u32, dimension: i32) -> ConwayState {
    let mut hasher = DefaultHasher::new();
    seed_value.hash(&mut hasher);
    let mut seed = hasher.finish();

    let mut nodes = Vec::new();
    for x in 1..dimension - 1 {
        for y in 1..dimension - 1 {
            seed = seed.wrapping_mul(1103515245).wrapping_add(12345);
            if (seed >> 33) % 3 == 0 {   // High bits; low LCG bits cycle quickly
                nodes.push(Point::new(x, y));
            }
        }
    }

    ConwayState::new(format!("Random {seed_value}"), dimension, nodes)
}
