pub mod evolve;
pub mod fitness;
pub mod gene;
mod macros;
pub mod params;
pub mod progress;
pub mod random;
pub mod sim;

pub use evolve::{evolve, evolve_with, EvolveError};
pub use fitness::GenerationFitnessPair;
pub use gene::{Chromosome, Express, Gene};
pub use params::{EvaluatorParams, StoppingCondition};
pub use progress::{percentile_summary, LogProgress, ProgressSink};
pub use random::{random_seed, sample_with_replacement};
pub use sim::{EvoSim, Genotype, PopulatingParams, SimError};
