// FICHIER : engine/tests/common/mod.rs

use evolve::genetics::genomes::{BitStringGenome, RealVectorGenome};
use evolve::genetics::evaluators::{OneMaxEvaluator, SphereEvaluator};
use evolve::genetics::{Genome, Individual, SeededRandom};
use evolve::utils::prelude::*;
use std::sync::Once;

static INIT: Once = Once::new();

pub fn init_test_logging() {
    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt().with_test_writer().try_init();
    });
}

/// Génome "échelle" : la seule mutation possible fait monter d'un cran.
/// Fitness constante (0) tant qu'aucune mutation n'a réussi.
#[derive(Clone, Debug, PartialEq)]
pub struct LadderGenome {
    pub level: u32,
    pub climb_probability: f64,
}

impl Genome for LadderGenome {
    fn crossover(&self, other: &Self, rng: &mut SeededRandom) -> Result<Self> {
        let level = if rng.next_bool(0.5) {
            self.level
        } else {
            other.level
        };
        Ok(Self {
            level,
            climb_probability: self.climb_probability,
        })
    }

    fn mutate(&mut self, rng: &mut SeededRandom) -> Result<()> {
        if rng.next_bool(self.climb_probability) {
            self.level += 1;
        }
        Ok(())
    }
}

pub struct LadderEvaluator;

impl evolve::Evaluator<LadderGenome> for LadderEvaluator {
    fn name(&self) -> String {
        "ladder".into()
    }

    fn evaluate(&self, genome: &LadderGenome) -> Result<f64> {
        Ok(genome.level as f64)
    }
}

#[allow(dead_code)]
pub type LadderAgent = Individual<LadderGenome, LadderEvaluator>;
#[allow(dead_code)]
pub type OneMaxAgent = Individual<BitStringGenome, OneMaxEvaluator>;
#[allow(dead_code)]
pub type SphereAgent = Individual<RealVectorGenome, SphereEvaluator>;

#[allow(dead_code)]
pub fn ladder_prototype() -> LadderAgent {
    Individual::new(
        LadderGenome {
            level: 0,
            climb_probability: 0.3,
        },
        LadderEvaluator,
    )
}

#[allow(dead_code)]
pub fn one_max_prototype(len: usize) -> OneMaxAgent {
    Individual::new(
        BitStringGenome::zeros(len, 1.0 / len as f64),
        OneMaxEvaluator,
    )
}

#[allow(dead_code)]
pub fn sphere_prototype(dimension: usize) -> SphereAgent {
    Individual::new(
        RealVectorGenome::new(vec![3.0; dimension], 0.3, 0.2),
        SphereEvaluator::default(),
    )
}
