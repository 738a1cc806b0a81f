//! The contract a domain simulation implements to be evolvable.

use rand::rngs::StdRng;
use std::error::Error;

/// Errors surfaced by candidate implementations. `Send + Sync` so a failure
/// can cross back over the evaluation worker pool.
pub type SimError = Box<dyn Error + Send + Sync>;

/// A domain genotype. Exposes the genotype's own seeded random stream so
/// gene-level randomness stays reproducible per candidate, independent of
/// the stream driving selection.
pub trait Genotype {
    fn rng(&mut self) -> &mut StdRng;
}

/// Seed context handed to the populating function, once per member of
/// generation zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PopulatingParams {
    pub seed: u64,
}

/// One complete evolvable candidate: a full simulation configuration.
///
/// `Clone` is the copy operation; implementations must own their chromosomes
/// so that a clone can mutate freely without aliasing the original. `Send`
/// lets sibling candidates evaluate concurrently.
pub trait EvoSim: Clone + Send {
    /// External environment a candidate can materialize a visible build
    /// into; see [`EvoSim::visualize`].
    type Environment;

    /// Apply one round of domain-specific mutation to the candidate's
    /// chromosomes.
    fn mutate(&mut self);

    /// Materialize the live simulation for the current chromosome state.
    /// Possibly long-running. Called by `eval` implementations when they
    /// need a fresh build, never by the generational loop itself.
    fn build(&mut self) -> Result<(), SimError>;

    /// Run the materialized simulation and reduce it to a scalar score.
    /// Must not touch state shared with sibling candidates: any number of
    /// evaluations may be in flight at once.
    fn eval(&mut self) -> Result<f64, SimError>;

    /// Materialize a human-inspectable build of this candidate inside
    /// `environment`, returning the visible copy. Only used to present a
    /// finished run, never during optimization.
    fn visualize(&self, environment: &mut Self::Environment) -> Result<Self, SimError>;
}
