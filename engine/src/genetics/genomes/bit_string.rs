use crate::genetics::operators::{crossover, mutation};
use crate::genetics::random::SeededRandom;
use crate::genetics::traits::Genome;
use crate::utils::prelude::*;

/// Chaîne de bits de longueur fixe (croisement à un point, mutation par inversion).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BitStringGenome {
    pub bits: Vec<bool>,
    /// Probabilité d'inversion par locus
    pub mutation_rate: f64,
}

impl BitStringGenome {
    pub fn zeros(len: usize, mutation_rate: f64) -> Self {
        Self {
            bits: vec![false; len],
            mutation_rate,
        }
    }

    pub fn new_random(len: usize, mutation_rate: f64, rng: &mut SeededRandom) -> Self {
        Self {
            bits: (0..len).map(|_| rng.next_bool(0.5)).collect(),
            mutation_rate,
        }
    }

    pub fn ones(&self) -> usize {
        self.bits.iter().filter(|&&b| b).count()
    }
}

impl Genome for BitStringGenome {
    fn crossover(&self, other: &Self, rng: &mut SeededRandom) -> Result<Self> {
        Ok(Self {
            bits: crossover::single_point_crossover(&self.bits, &other.bits, rng)?,
            mutation_rate: self.mutation_rate,
        })
    }

    fn mutate(&mut self, rng: &mut SeededRandom) -> Result<()> {
        mutation::flip_mutation(&mut self.bits, self.mutation_rate, rng);
        Ok(())
    }

    /// Distance de Hamming
    fn distance(&self, other: &Self) -> f64 {
        self.bits
            .iter()
            .zip(other.bits.iter())
            .filter(|(a, b)| a != b)
            .count() as f64
    }
}
