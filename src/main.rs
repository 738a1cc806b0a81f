//! Seeker demo: evolve an agent's movement program until it lands on a goal.
//!
//! Each candidate owns a chromosome of velocity-step genes. An evaluation
//! expresses the genes into a movement program, walks it for the configured
//! number of iterations and scores the agent by its final distance to the
//! goal, so the run minimizes error.

use germline::{
    evolve_with, random_seed, Chromosome, EvaluatorParams, EvoSim, Express, Gene, Genotype,
    LogProgress, SimError, StoppingCondition,
};
use rand::{rngs::StdRng, Rng, SeedableRng};
use rand_distr::{Distribution, Normal};

const GOAL: (f64, f64) = (80.0, -35.0);
const STEP_GENES: usize = 8;
const MUTATION_SD: f64 = 0.2;

/// One velocity impulse of the movement program.
#[derive(Debug, Clone, Copy, PartialEq)]
struct Step {
    dx: f64,
    dy: f64,
}

#[derive(Debug, Clone)]
struct StepGene {
    template: Step,
}

impl Gene for StepGene {
    type Template = Step;

    fn template(&self) -> &Step {
        &self.template
    }

    fn template_mut(&mut self) -> &mut Step {
        &mut self.template
    }
}

impl Express for StepGene {
    fn express(&self) -> Step {
        self.template
    }
}

/// Trails laid down by visualized seekers.
#[derive(Debug, Default)]
struct TraceWorld {
    trails: Vec<Vec<(f64, f64)>>,
}

#[derive(Debug, Clone)]
struct SeekerSim {
    steps: Chromosome<StepGene>,
    rng: StdRng,
    iterations: usize,
    program: Option<Vec<Step>>,
}

impl SeekerSim {
    fn from_seed(seed: u64, iterations: usize) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let steps = Chromosome::generate(STEP_GENES, |_| StepGene {
            template: Step {
                dx: rng.random_range(-1.0..1.0),
                dy: rng.random_range(-1.0..1.0),
            },
        });
        Self {
            steps,
            rng,
            iterations,
            program: None,
        }
    }

    fn walk(program: &[Step], iterations: usize) -> Vec<(f64, f64)> {
        let mut position = (0.0, 0.0);
        program
            .iter()
            .cycle()
            .take(iterations)
            .map(|step| {
                position.0 += step.dx;
                position.1 += step.dy;
                position
            })
            .collect()
    }
}

impl Genotype for SeekerSim {
    fn rng(&mut self) -> &mut StdRng {
        &mut self.rng
    }
}

impl EvoSim for SeekerSim {
    type Environment = TraceWorld;

    fn mutate(&mut self) {
        let normal = Normal::new(0.0, MUTATION_SD).unwrap();
        let deltas: Vec<Step> = (0..self.steps.len())
            .map(|_| Step {
                dx: normal.sample(self.rng()),
                dy: normal.sample(self.rng()),
            })
            .collect();
        for (gene, delta) in self.steps.iter_mut().zip(deltas) {
            gene.mutate(|step| {
                step.dx += delta.dx;
                step.dy += delta.dy;
            });
        }
    }

    fn build(&mut self) -> Result<(), SimError> {
        self.program = Some(self.steps.iter().map(Express::express).collect());
        Ok(())
    }

    fn eval(&mut self) -> Result<f64, SimError> {
        self.build()?;
        let program = self.program.as_deref().ok_or("no movement program built")?;
        let (x, y) = Self::walk(program, self.iterations)
            .last()
            .copied()
            .unwrap_or((0.0, 0.0));
        Ok(((x - GOAL.0).powi(2) + (y - GOAL.1).powi(2)).sqrt())
    }

    fn visualize(&self, environment: &mut TraceWorld) -> Result<Self, SimError> {
        let mut visible = self.clone();
        visible.build()?;
        let program = visible.program.as_deref().ok_or("no movement program built")?;
        environment
            .trails
            .push(Self::walk(program, visible.iterations));
        Ok(visible)
    }
}

fn main() {
    tracing_subscriber::fmt::init();

    let params = EvaluatorParams {
        population_size: 150,
        elimination_ratio: 0.5,
        iterations_per_run: 40,
        max_generations: 300,
        evaluation_percentile: 5,
        seed: random_seed(),
        ..EvaluatorParams::new(StoppingCondition::Error, 0.5)
    };
    println!("seed {}", params.seed);

    let iterations = params.iterations_per_run;
    let mut member = 0u64;
    let mut progress = LogProgress::new(&params);
    let last_generation = evolve_with(
        &params,
        |populating| {
            member += 1;
            SeekerSim::from_seed(populating.seed.wrapping_add(member), iterations)
        },
        &mut progress,
    )
    .unwrap();

    // survivors lead the returned population in rank order
    let mut champion = last_generation.into_iter().next().unwrap();
    let error = champion.eval().unwrap();

    let mut world = TraceWorld::default();
    champion.visualize(&mut world).unwrap();
    let trail = world.trails.last().unwrap();
    let (x, y) = trail.last().copied().unwrap_or((0.0, 0.0));
    println!(
        "champion lands at ({x:.2}, {y:.2}), {error:.3} away from {GOAL:?} after {} steps",
        trail.len()
    );
}
