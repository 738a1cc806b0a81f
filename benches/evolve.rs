use criterion::Criterion;
use germline::{evolve, EvoSim, SimError};

#[derive(Debug, Clone)]
struct CountingSim {
    score: f64,
}

impl EvoSim for CountingSim {
    type Environment = ();

    fn mutate(&mut self) {
        self.score += 1.0;
    }

    fn build(&mut self) -> Result<(), SimError> {
        Ok(())
    }

    fn eval(&mut self) -> Result<f64, SimError> {
        Ok(self.score)
    }

    fn visualize(&self, _environment: &mut ()) -> Result<Self, SimError> {
        Ok(self.clone())
    }
}

fn bench_evolve(bench: &mut Criterion) {
    bench.bench_function("evolve-100x20", |b| {
        b.iter(|| {
            evolve(
                |_| CountingSim { score: 0.0 },
                100,
                0.5,
                |pair| pair.generation() == 20,
                |_| {},
                true,
                7,
            )
            .unwrap()
        })
    });

    bench.bench_function("evolve-1000x5", |b| {
        b.iter(|| {
            evolve(
                |_| CountingSim { score: 0.0 },
                1000,
                0.5,
                |pair| pair.generation() == 5,
                |_| {},
                true,
                7,
            )
            .unwrap()
        })
    });
}

pub fn benches() {
    #[cfg(not(feature = "smol_bench"))]
    let mut criterion: criterion::Criterion<_> = Criterion::default()
        .sample_size(100)
        .significance_level(0.1);
    #[cfg(feature = "smol_bench")]
    let mut criterion: criterion::Criterion<_> = {
        use core::time::Duration;
        Criterion::default()
            .measurement_time(Duration::from_millis(1))
            .sample_size(10)
            .nresamples(1)
            .without_plots()
            .configure_from_args()
    };
    bench_evolve(&mut criterion);
}

fn main() {
    benches();
    criterion::Criterion::default()
        .configure_from_args()
        .final_summary();
}
