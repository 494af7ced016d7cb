// generation.rs - Dense occupancy view of a grid and the Conway transition
//
// Only interior cells are evaluated. Border cells have part of their
// neighborhood outside the grid and are always dead in the next generation.

use grid::{Grid, GridNode};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LifeGeneration {
    dimension : usize,
    cells     : Vec<bool>,   // Row-major by x, then y
}

impl LifeGeneration {
    pub fn empty(dimension: usize) -> Self {
        Self { dimension, cells: vec![false; dimension * dimension] }
    }

    pub fn from_grid(grid: &Grid) -> Self {
        let dimension = grid.dimension().max(0) as usize;
        let mut generation = Self::empty(dimension);
        for node in grid.iter() {
            generation.set(node.x as usize, node.y as usize, true);
        }
        generation
    }

    pub fn dimension(&self) -> usize {
        self.dimension
    }

    pub fn is_alive(&self, x: usize, y: usize) -> bool {
        x < self.dimension && y < self.dimension && self.cells[self.index(x, y)]
    }

    pub fn set(&mut self, x: usize, y: usize, alive: bool) {
        if x < self.dimension && y < self.dimension {
            let index = self.index(x, y);
            self.cells[index] = alive;
        }
    }

    pub fn population(&self) -> usize {
        self.cells.iter().filter(|&&alive| alive).count()
    }

    /// Computes the following generation with a full pass over the interior.
    pub fn next(&self) -> Self {
        let mut next = Self::empty(self.dimension);
        let end = self.dimension.saturating_sub(1);

        for l in 1..end {
            for m in 1..end {
                let count = self.alive_neighbors(l, m);
                let alive = self.cells[self.index(l, m)];

                let next_state = match (alive, count) {
                    (true, 2) | (true, 3) => true,   // Survival
                    (false, 3)            => true,   // Birth
                    _                     => false,  // Death or stays dead
                };

                let index = self.index(l, m);
                next.cells[index] = next_state;
            }
        }

        next
    }

    /// Live cells as plain grid nodes, ordered by x then y.
    pub fn alive_nodes(&self) -> impl Iterator<Item = GridNode> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter(|&(_, &alive)| alive)
            .map(|(index, _)| {
                let x = index / self.dimension;
                let y = index % self.dimension;
                GridNode::new(x as i32, y as i32)
            })
    }

    fn alive_neighbors(&self, l: usize, m: usize) -> usize {
        let neighbors = [
            (l - 1, m - 1), (l - 1, m), (l - 1, m + 1),
            (l,     m - 1),             (l,     m + 1),
            (l + 1, m - 1), (l + 1, m), (l + 1, m + 1),
        ];

        neighbors
            .iter()
            .filter(|&&(nx, ny)| self.cells[self.index(nx, ny)])
            .count()
    }

    fn index(&self, x: usize, y: usize) -> usize {
        x * self.dimension + y
    }
}
