// stats.rs - Population statistics accumulated over a Life run

use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct LifeStats {
    pub generation                     : u32,
    pub population                     : usize,
    pub max_population                 : usize,
    pub corresponding_generation       : u32,   // Most recent generation at the max
    pub first_corresponding_generation : u32,   // First generation to reach the max
}

impl LifeStats {
    /// Records a new generation with the given population.
    ///
    /// Exceeding the max moves both corresponding generations; tying it only
    /// moves the most recent one.
    pub fn record(&mut self, population: usize) {
        self.generation += 1;
        self.population = population;

        if population > self.max_population {
            self.max_population = population;
            self.first_corresponding_generation = self.generation;
            self.corresponding_generation = self.generation;
        } else if population == self.max_population {
            self.corresponding_generation = self.generation;
        }
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn corresponding_generation_label(&self) -> String {
        if self.first_corresponding_generation == 0
            || self.first_corresponding_generation == self.generation
        {
            format!("Corr Gen: {}", self.corresponding_generation)
        } else {
            format!(
                "Corr Gen: {}, first: {}",
                self.corresponding_generation, self.first_corresponding_generation
            )
        }
    }
}

impl fmt::Display for LifeStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Generation: {} | Population: {} | Max Population: {} | {}",
            self.generation,
            self.population,
            self.max_population,
            self.corresponding_generation_label()
        )
    }
}
