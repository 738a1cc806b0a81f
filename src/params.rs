//! Named, user-facing configuration for an evolutionary run.

use crate::{
    evolve::{elimination_count, EvolveError},
    random::random_seed,
};
use serde::{Deserialize, Serialize};
use std::{error::Error, fs, path::Path};

/// Which way a run optimizes: `Fitness` maximizes a score, `Error`
/// minimizes one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StoppingCondition {
    Fitness,
    Error,
}

impl StoppingCondition {
    /// Whether `actual` clears `target` for this optimization direction.
    pub fn should_stop(self, actual: f64, target: f64) -> bool {
        match self {
            Self::Fitness => actual > target,
            Self::Error => actual < target,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Fitness => "fitness",
            Self::Error => "error",
        }
    }
}

/// Configuration for one run of [`crate::evolve_with`]. Fixed for the
/// duration of the run; build a new value for the next one.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EvaluatorParams {
    /// Number of simulations alive in every generation.
    pub population_size: usize,
    /// Fraction of the population eliminated and refilled each generation.
    pub elimination_ratio: f64,
    /// How many times a simulation should iterate itself per evaluation.
    /// The loop never reads this; populating functions pass it through to
    /// the candidates they build.
    pub iterations_per_run: usize,
    /// Hard cap on generations, regardless of the target metric.
    pub max_generations: usize,
    /// Population percentile inspected by the stopping check.
    pub evaluation_percentile: usize,
    pub stopping_condition: StoppingCondition,
    /// Metric the inspected percentile has to clear for the run to stop.
    pub target_metric: f64,
    /// Seed for the run's selection stream; fixing it makes runs replicable.
    pub seed: u64,
}

impl Default for EvaluatorParams {
    fn default() -> Self {
        Self {
            population_size: 100,
            elimination_ratio: 0.5,
            iterations_per_run: 100,
            max_generations: 500,
            evaluation_percentile: 5,
            stopping_condition: StoppingCondition::Fitness,
            target_metric: 0.0,
            seed: random_seed(),
        }
    }
}

impl EvaluatorParams {
    pub fn new(stopping_condition: StoppingCondition, target_metric: f64) -> Self {
        Self {
            stopping_condition,
            target_metric,
            ..Self::default()
        }
    }

    /// Reject configurations the loop cannot honor, before any population
    /// is built.
    pub fn validate(&self) -> Result<(), EvolveError> {
        if self.population_size == 0 {
            return Err(EvolveError::ZeroPopulation);
        }
        if !(0.0..=1.0).contains(&self.elimination_ratio) {
            return Err(EvolveError::EliminationRatio(self.elimination_ratio));
        }
        let eliminated = elimination_count(self.population_size, self.elimination_ratio);
        if eliminated >= self.population_size {
            return Err(EvolveError::NoSurvivors {
                population: self.population_size,
                eliminated,
            });
        }
        if self.evaluation_percentile > 100 {
            return Err(EvolveError::EvaluationPercentile(self.evaluation_percentile));
        }
        Ok(())
    }

    pub fn to_file<P: AsRef<Path>>(&self, path: P) -> Result<(), Box<dyn Error>> {
        fs::write(path, serde_json::to_string_pretty(self)?)?;
        Ok(())
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, Box<dyn Error>> {
        Ok(serde_json::from_str(&fs::read_to_string(path)?)?)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::new_t;

    #[test]
    fn test_should_stop_direction() {
        assert!(StoppingCondition::Fitness.should_stop(2.0, 1.0));
        assert!(!StoppingCondition::Fitness.should_stop(1.0, 1.0));
        assert!(StoppingCondition::Error.should_stop(0.5, 1.0));
        assert!(!StoppingCondition::Error.should_stop(1.0, 1.0));
    }

    #[test]
    fn test_validate_rejects_bad_configs() {
        let zero_pop = new_t!(EvaluatorParams, population_size = 0);
        assert!(matches!(
            zero_pop.validate(),
            Err(EvolveError::ZeroPopulation)
        ));

        let bad_ratio = new_t!(EvaluatorParams, elimination_ratio = 1.5);
        assert!(matches!(
            bad_ratio.validate(),
            Err(EvolveError::EliminationRatio(_))
        ));

        let extinct = new_t!(EvaluatorParams, population_size = 4, elimination_ratio = 1.0);
        assert!(matches!(
            extinct.validate(),
            Err(EvolveError::NoSurvivors {
                population: 4,
                eliminated: 4
            })
        ));

        let bad_percentile = new_t!(EvaluatorParams, evaluation_percentile = 150);
        assert!(matches!(
            bad_percentile.validate(),
            Err(EvolveError::EvaluationPercentile(150))
        ));

        assert!(EvaluatorParams::default().validate().is_ok());
    }

    #[test]
    fn test_serde_roundtrip() {
        let params = new_t!(
            EvaluatorParams,
            population_size = 42,
            stopping_condition = StoppingCondition::Error,
            target_metric = 0.01,
            seed = 7,
        );
        let encoded = serde_json::to_string(&params).unwrap();
        let decoded: EvaluatorParams = serde_json::from_str(&encoded).unwrap();
        assert_eq!(42, decoded.population_size);
        assert_eq!(StoppingCondition::Error, decoded.stopping_condition);
        assert_eq!(7, decoded.seed);
    }

    #[test]
    fn test_partial_config_fills_defaults() {
        let decoded: EvaluatorParams =
            serde_json::from_str(r#"{"stopping_condition": "Error", "target_metric": 0.05}"#)
                .unwrap();
        assert_eq!(StoppingCondition::Error, decoded.stopping_condition);
        assert_eq!(100, decoded.population_size);
        assert_eq!(500, decoded.max_generations);
    }

    #[test]
    fn test_file_roundtrip() {
        let path = std::env::temp_dir().join("germline-params-test.json");
        let params = EvaluatorParams::new(StoppingCondition::Error, 0.25);
        params.to_file(&path).unwrap();
        let loaded = EvaluatorParams::from_file(&path).unwrap();
        assert_eq!(params.seed, loaded.seed);
        assert_eq!(StoppingCondition::Error, loaded.stopping_condition);
        std::fs::remove_file(path).ok();
    }
}
