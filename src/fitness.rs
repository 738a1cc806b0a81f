//! Per-generation fitness statistics.

use serde::{Deserialize, Serialize};

/// Immutable record of one completed generation: its number and every
/// member's score, in the rank order the generation was sorted into.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerationFitnessPair {
    generation: usize,
    fitness_scores: Vec<f64>,
}

impl GenerationFitnessPair {
    pub fn new(generation: usize, fitness_scores: Vec<f64>) -> Self {
        Self {
            generation,
            fitness_scores,
        }
    }

    pub fn generation(&self) -> usize {
        self.generation
    }

    pub fn fitness_scores(&self) -> &[f64] {
        &self.fitness_scores
    }

    /// Best score of the generation: the maximum when optimizing for
    /// fitness ( descending sort ), the minimum when minimizing error.
    pub fn best(&self, sort_descending: bool) -> Option<f64> {
        let scores = self.fitness_scores.iter().copied();
        if sort_descending {
            scores.max_by(f64::total_cmp)
        } else {
            scores.min_by(f64::total_cmp)
        }
    }

    /// Nearest-rank percentile over this generation's scores: sort
    /// ascending, take the value `percentile`/100 of the way through the
    /// list. 0 is the minimum, 100 the maximum, and the result never
    /// decreases as `percentile` grows. No history crosses generations.
    pub fn nth_percentile_fitness(&self, percentile: usize) -> Option<f64> {
        if self.fitness_scores.is_empty() {
            return None;
        }
        let mut sorted = self.fitness_scores.clone();
        sorted.sort_by(f64::total_cmp);
        let index = (percentile.min(100) * sorted.len()) / 100;
        Some(sorted[index.min(sorted.len() - 1)])
    }
}
