// FICHIER : engine/tests/genetics_suite/reproducibility_test.rs

use crate::common::{one_max_prototype, sphere_prototype, LadderGenome, SphereAgent};
use evolve::genetics::genomes::RealVectorGenome;
use evolve::genetics::{Agent, Genome, SeededRandom};
use evolve::utils::prelude::*;
use evolve::Population;
use std::sync::atomic::{AtomicU32, Ordering as AtomicOrdering};
use std::sync::Arc;

fn run_sphere(config: EvolutionConfig, generations: usize) -> (Vec<f64>, Vec<RealVectorGenome>) {
    let mut pop: Population<SphereAgent> = Population::with_config(config).unwrap();
    pop.populate(&sphere_prototype(5));

    let history = (0..generations)
        .map(|_| pop.step_generation().unwrap())
        .collect();
    let genomes = pop.agents().iter().map(|a| a.genome.clone()).collect();
    (history, genomes)
}

#[test]
fn test_same_seed_same_run() {
    let (hist_a, genomes_a) = run_sphere(EvolutionConfig::new(20, 42), 8);
    let (hist_b, genomes_b) = run_sphere(EvolutionConfig::new(20, 42), 8);

    let bits_a: Vec<u64> = hist_a.iter().map(|f| f.to_bits()).collect();
    let bits_b: Vec<u64> = hist_b.iter().map(|f| f.to_bits()).collect();
    assert_eq!(bits_a, bits_b);
    assert_eq!(genomes_a, genomes_b);
}

#[test]
fn test_different_seeds_diverge() {
    let (_, genomes_a) = run_sphere(EvolutionConfig::new(20, 1), 5);
    let (_, genomes_b) = run_sphere(EvolutionConfig::new(20, 2), 5);
    assert_ne!(genomes_a, genomes_b);
}

#[test]
fn test_parallel_evaluation_matches_sequential() {
    let sequential = EvolutionConfig::new(24, 7);
    let mut parallel = EvolutionConfig::new(24, 7);
    parallel.parallel_evaluation = true;

    let (hist_s, genomes_s) = run_sphere(sequential, 6);
    let (hist_p, genomes_p) = run_sphere(parallel, 6);
    assert_eq!(hist_s, hist_p);
    assert_eq!(genomes_s, genomes_p);
}

#[test]
fn test_parallel_breeding_is_reproducible() {
    let mut config = EvolutionConfig::new(24, 11);
    config.parallel_breeding = true;
    config.parallel_evaluation = true;

    let (hist_a, genomes_a) = run_sphere(config.clone(), 6);
    let (hist_b, genomes_b) = run_sphere(config, 6);
    assert_eq!(hist_a, hist_b);
    assert_eq!(genomes_a, genomes_b);
    assert_eq!(genomes_a.len(), 24);
}

#[test]
fn test_one_max_reproducible_bit_for_bit() {
    let run = || {
        let mut pop = Population::new(16, 42).unwrap();
        pop.populate(&one_max_prototype(16));
        for _ in 0..5 {
            pop.step_generation().unwrap();
        }
        pop.agents()
            .iter()
            .map(|a| a.genome.bits.clone())
            .collect::<Vec<_>>()
    };
    assert_eq!(run(), run());
}

/// Agent numéroté à la copie : la i-ème copie du prototype porte le niveau i.
/// Les agents listés dans `failing` échouent avec un message qui les identifie.
#[derive(Debug)]
struct NumberedAgent {
    genome: LadderGenome,
    next_id: Arc<AtomicU32>,
    failing: Arc<Vec<u32>>,
    fitness: Option<f64>,
}

impl Agent for NumberedAgent {
    type Genome = LadderGenome;

    fn genome(&self) -> &LadderGenome {
        &self.genome
    }

    fn copy(&self) -> Self {
        let mut genome = self.genome.clone();
        genome.level = self.next_id.fetch_add(1, AtomicOrdering::SeqCst);
        Self {
            genome,
            next_id: Arc::clone(&self.next_id),
            failing: Arc::clone(&self.failing),
            fitness: self.fitness,
        }
    }

    fn compute_fitness(&mut self) -> Result<()> {
        if self.failing.contains(&self.genome.level) {
            return Err(AppError::plugin(
                "numbered",
                format!("agent {}", self.genome.level),
            ));
        }
        self.fitness = Some(self.genome.level as f64);
        Ok(())
    }

    fn fitness(&self) -> Option<f64> {
        self.fitness
    }

    fn crossover(&self, other: &Self, rng: &mut SeededRandom) -> Result<Self> {
        Ok(Self {
            genome: self.genome.crossover(&other.genome, rng)?,
            next_id: Arc::clone(&self.next_id),
            failing: Arc::clone(&self.failing),
            fitness: None,
        })
    }

    fn mutate(&mut self, rng: &mut SeededRandom) -> Result<()> {
        self.fitness = None;
        self.genome.mutate(rng)
    }
}

fn numbered_prototype(failing: Vec<u32>) -> NumberedAgent {
    NumberedAgent {
        genome: LadderGenome {
            level: 0,
            climb_probability: 0.0,
        },
        next_id: Arc::new(AtomicU32::new(0)),
        failing: Arc::new(failing),
        fitness: None,
    }
}

#[test]
fn test_parallel_evaluation_reports_lowest_index_error() {
    let mut config = EvolutionConfig::new(64, 3);
    config.parallel_evaluation = true;

    // Plusieurs essais : l'ordre de fin des threads ne doit pas changer l'erreur remontée
    for _ in 0..10 {
        let mut pop: Population<NumberedAgent> = Population::with_config(config.clone()).unwrap();
        pop.populate(&numbered_prototype(vec![57, 5, 31]));
        assert_eq!(pop.agents()[5].genome().level, 5);

        match pop.step_generation() {
            Err(AppError::Plugin { message, .. }) => assert_eq!(message, "agent 5"),
            other => panic!("Erreur de plug-in attendue, obtenu {:?}", other),
        }
        assert_eq!(pop.len(), 64, "Aucune troncature après un échec d'évaluation");
    }
}

#[test]
fn test_sequential_and_parallel_report_the_same_error() {
    let mut parallel = EvolutionConfig::new(16, 3);
    parallel.parallel_evaluation = true;

    let first_error = |config: EvolutionConfig| {
        let mut pop: Population<NumberedAgent> = Population::with_config(config).unwrap();
        pop.populate(&numbered_prototype(vec![12, 4]));
        pop.step_generation().unwrap_err().to_string()
    };
    assert_eq!(first_error(EvolutionConfig::new(16, 3)), first_error(parallel));
}
