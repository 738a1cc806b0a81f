//! Per-generation reporting for long runs.

use crate::{
    fitness::GenerationFitnessPair,
    params::{EvaluatorParams, StoppingCondition},
};
use tracing::{debug, info};

/// External reporting seam of the parameterized loop. A sink observes the
/// run; it cannot influence it.
pub trait ProgressSink {
    /// Called exactly once per completed generation, synchronously, before
    /// the stopping check.
    fn generation(&mut self, pair: &GenerationFitnessPair);

    /// Called once after the loop returns its final population.
    fn finished(&mut self) {}
}

/// Sink that reports through `tracing`: the configured percentile metric
/// per generation at info level, the full percentile spread at debug level.
#[derive(Debug, Clone)]
pub struct LogProgress {
    evaluation_percentile: usize,
    stopping_condition: StoppingCondition,
    max_generations: usize,
}

impl LogProgress {
    pub fn new(params: &EvaluatorParams) -> Self {
        Self {
            evaluation_percentile: params.evaluation_percentile,
            stopping_condition: params.stopping_condition,
            max_generations: params.max_generations,
        }
    }
}

impl ProgressSink for LogProgress {
    fn generation(&mut self, pair: &GenerationFitnessPair) {
        if let Some(metric) = pair.nth_percentile_fitness(self.evaluation_percentile) {
            info!(
                "[{}/{}] percentile {} {}: {:.3}",
                pair.generation(),
                self.max_generations,
                self.evaluation_percentile,
                self.stopping_condition.label(),
                metric,
            );
        }
        debug!("[{}] {}", pair.generation(), percentile_summary(pair));
    }

    fn finished(&mut self) {
        info!("run complete");
    }
}

/// Fixed spread of percentile metrics for one generation, for example
/// `0: 0.120 10: 0.480 .. 100: 3.221`.
pub fn percentile_summary(pair: &GenerationFitnessPair) -> String {
    [0, 10, 25, 50, 75, 90, 100]
        .iter()
        .filter_map(|&n| pair.nth_percentile_fitness(n).map(|v| format!("{n}: {v:.3}")))
        .collect::<Vec<_>>()
        .join(" ")
}
