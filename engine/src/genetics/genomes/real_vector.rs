use crate::genetics::operators::{crossover, mutation};
use crate::genetics::random::SeededRandom;
use crate::genetics::traits::Genome;
use crate::utils::prelude::*;

/// Vecteur réel de dimension fixe (croisement uniforme, mutation gaussienne).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RealVectorGenome {
    pub genes: Vec<f64>,
    pub mutation_rate: f64,
    pub sigma: f64,
}

impl RealVectorGenome {
    pub fn new(genes: Vec<f64>, mutation_rate: f64, sigma: f64) -> Self {
        Self {
            genes,
            mutation_rate,
            sigma,
        }
    }

    /// Gènes tirés uniformément dans `[low, high)`.
    pub fn new_random(
        dimension: usize,
        low: f64,
        high: f64,
        mutation_rate: f64,
        sigma: f64,
        rng: &mut SeededRandom,
    ) -> Result<Self> {
        let genes = (0..dimension)
            .map(|_| rng.next_range(low, high))
            .collect::<Result<Vec<f64>>>()?;
        Ok(Self::new(genes, mutation_rate, sigma))
    }

    pub fn dimension(&self) -> usize {
        self.genes.len()
    }
}

impl Genome for RealVectorGenome {
    fn crossover(&self, other: &Self, rng: &mut SeededRandom) -> Result<Self> {
        Ok(Self {
            genes: crossover::uniform_crossover(&self.genes, &other.genes, rng)?,
            mutation_rate: self.mutation_rate,
            sigma: self.sigma,
        })
    }

    fn mutate(&mut self, rng: &mut SeededRandom) -> Result<()> {
        mutation::gaussian_mutation(&mut self.genes, self.mutation_rate, self.sigma, rng)
    }

    /// Distance euclidienne
    fn distance(&self, other: &Self) -> f64 {
        self.genes
            .iter()
            .zip(other.genes.iter())
            .map(|(a, b)| (a - b).powi(2))
            .sum::<f64>()
            .sqrt()
    }
}
