//! The generational loop: populate once, evaluate concurrently, rank,
//! eliminate, refill from survivors.

use crate::{
    fitness::GenerationFitnessPair,
    params::{EvaluatorParams, StoppingCondition},
    progress::ProgressSink,
    random::sample_with_replacement,
    sim::{EvoSim, PopulatingParams, SimError},
};
use rand::{rngs::StdRng, seq::SliceRandom, SeedableRng};
use rayon::prelude::*;
use thiserror::Error;

/// Why a run could not start or finish.
#[derive(Debug, Error)]
pub enum EvolveError {
    #[error("population size must be positive")]
    ZeroPopulation,
    #[error("elimination ratio {0} is outside [0, 1]")]
    EliminationRatio(f64),
    #[error("eliminating {eliminated} of {population} members leaves no survivors")]
    NoSurvivors { population: usize, eliminated: usize },
    #[error("evaluation percentile {0} is outside [0, 100]")]
    EvaluationPercentile(usize),
    #[error("candidate failed: {0}")]
    Candidate(#[source] SimError),
}

/// How many members are discarded and replaced per generation:
/// `round(population_size * elimination_ratio)`.
pub(crate) fn elimination_count(population_size: usize, elimination_ratio: f64) -> usize {
    (population_size as f64 * elimination_ratio).round() as usize
}

/// Run the generational loop and return the last generation's population.
///
/// `populating_function` builds each member of generation zero; every later
/// generation arises only from cloning and mutating survivors. Each
/// generation all members are evaluated concurrently, ranked ( descending
/// for fitness, ascending for error, ties broken by a pre-sort shuffle ),
/// the worst [`elimination_count`] are dropped, and the gap is refilled
/// with mutated clones of survivors sampled uniformly with replacement.
/// Survivors themselves pass into the next generation unmutated. `peek`
/// sees every completed generation's ranked scores right before
/// `stopping_function` decides whether to return, so the body always runs
/// at least once. The returned population is not re-evaluated.
///
/// All selection randomness derives from `seed`; a run is replicable
/// whenever its candidates are.
pub fn evolve<S, P, F, K>(
    mut populating_function: P,
    population_size: usize,
    elimination_ratio: f64,
    mut stopping_function: F,
    mut peek: K,
    sort_descending: bool,
    seed: u64,
) -> Result<Vec<S>, EvolveError>
where
    S: EvoSim,
    P: FnMut(PopulatingParams) -> S,
    F: FnMut(&GenerationFitnessPair) -> bool,
    K: FnMut(&GenerationFitnessPair),
{
    if population_size == 0 {
        return Err(EvolveError::ZeroPopulation);
    }
    if !(0.0..=1.0).contains(&elimination_ratio) {
        return Err(EvolveError::EliminationRatio(elimination_ratio));
    }
    let eliminated = elimination_count(population_size, elimination_ratio);
    if eliminated >= population_size {
        return Err(EvolveError::NoSurvivors {
            population: population_size,
            eliminated,
        });
    }

    let mut rng = StdRng::seed_from_u64(seed);
    let populating_params = PopulatingParams { seed };
    let mut population: Vec<S> = (0..population_size)
        .map(|_| populating_function(populating_params))
        .collect();

    let mut generation = 0;
    loop {
        generation += 1;

        // one eval per member, fanned out over the worker pool; the collect
        // is all-or-nothing, so one failing candidate aborts the generation
        let fitness_scores = population
            .par_iter_mut()
            .map(|sim| sim.eval().map_err(EvolveError::Candidate))
            .collect::<Result<Vec<_>, _>>()?;

        let mut ranked: Vec<(S, f64)> = population.into_iter().zip(fitness_scores).collect();
        ranked.shuffle(&mut rng);
        if sort_descending {
            ranked.sort_by(|(_, l), (_, r)| r.total_cmp(l));
        } else {
            ranked.sort_by(|(_, l), (_, r)| l.total_cmp(r));
        }

        let scores: Vec<f64> = ranked.iter().map(|(_, score)| *score).collect();
        ranked.truncate(population_size - eliminated);
        let survivors: Vec<S> = ranked.into_iter().map(|(sim, _)| sim).collect();

        population = survivors
            .iter()
            .cloned()
            .chain(
                sample_with_replacement(&survivors, eliminated, &mut rng).map(|sim| {
                    let mut offspring = sim.clone();
                    offspring.mutate();
                    offspring
                }),
            )
            .collect();

        let generation_fitness_pair = GenerationFitnessPair::new(generation, scores);
        peek(&generation_fitness_pair);
        if stopping_function(&generation_fitness_pair) {
            break Ok(population);
        }
    }
}

/// Parameterized entry point: stops once the configured percentile of the
/// population clears `target_metric` per the stopping condition, or once
/// the generation count exceeds `max_generations`. The two paths are
/// indistinguishable in the returned population. `progress` is told about
/// every generation and closed when the run ends.
pub fn evolve_with<S, P, Q>(
    params: &EvaluatorParams,
    populating_function: P,
    progress: &mut Q,
) -> Result<Vec<S>, EvolveError>
where
    S: EvoSim,
    P: FnMut(PopulatingParams) -> S,
    Q: ProgressSink + ?Sized,
{
    params.validate()?;
    let last_generation = evolve(
        populating_function,
        params.population_size,
        params.elimination_ratio,
        |pair| {
            pair.nth_percentile_fitness(params.evaluation_percentile)
                .is_some_and(|actual| {
                    params
                        .stopping_condition
                        .should_stop(actual, params.target_metric)
                })
                || pair.generation() > params.max_generations
        },
        |pair| progress.generation(pair),
        params.stopping_condition == StoppingCondition::Fitness,
        params.seed,
    )?;
    progress.finished();
    Ok(last_generation)
}
