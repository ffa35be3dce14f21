use crate::genetics::operators::{crossover, mutation};
use crate::genetics::random::SeededRandom;
use crate::genetics::traits::Genome;
use crate::utils::prelude::*;

/// Réseau feed-forward dense (activation tanh) dont les poids forment le génome.
/// La topologie (`layer_sizes`) est fixe : seuls les poids et biais évoluent.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct NeuralNetworkGenome {
    pub weights: Vec<f64>,
    pub layer_sizes: Vec<usize>,
    pub mutation_rate: f64,
    pub sigma: f64,
}

impl NeuralNetworkGenome {
    /// Réseau aux poids nuls.
    pub fn zeros(layer_sizes: Vec<usize>, mutation_rate: f64, sigma: f64) -> Result<Self> {
        let total_weights = Self::calculate_total_weights(&layer_sizes)?;
        Ok(Self {
            weights: vec![0.0; total_weights],
            layer_sizes,
            mutation_rate,
            sigma,
        })
    }

    /// Poids tirés uniformément dans `[-1, 1)`.
    pub fn new_random(
        layer_sizes: Vec<usize>,
        mutation_rate: f64,
        sigma: f64,
        rng: &mut SeededRandom,
    ) -> Result<Self> {
        let mut genome = Self::zeros(layer_sizes, mutation_rate, sigma)?;
        for w in genome.weights.iter_mut() {
            *w = rng.next_range(-1.0, 1.0)?;
        }
        Ok(genome)
    }

    /// (n_in * n_out) poids + n_out biais par couche.
    fn calculate_total_weights(sizes: &[usize]) -> Result<usize> {
        if sizes.len() < 2 || sizes.contains(&0) {
            return Err(AppError::InvalidArgument(format!(
                "Topologie invalide {:?} : au moins deux couches non vides",
                sizes
            )));
        }
        Ok(sizes
            .windows(2)
            .map(|pair| pair[0] * pair[1] + pair[1])
            .sum())
    }

    /// Vérifie que le nombre de poids correspond à la topologie
    /// (les champs sont publics et le génome peut venir d'un JSON).
    pub fn check_consistency(&self) -> Result<()> {
        let expected = Self::calculate_total_weights(&self.layer_sizes)?;
        if self.weights.len() != expected {
            return Err(AppError::InvalidArgument(format!(
                "{} poids pour la topologie {:?}, {} attendus",
                self.weights.len(),
                self.layer_sizes,
                expected
            )));
        }
        Ok(())
    }

    pub fn inputs(&self) -> usize {
        self.layer_sizes.first().copied().unwrap_or(0)
    }

    pub fn outputs(&self) -> usize {
        self.layer_sizes.last().copied().unwrap_or(0)
    }

    pub fn predict(&self, inputs: &[f64]) -> Result<Vec<f64>> {
        self.check_consistency()?;
        if inputs.len() != self.inputs() {
            return Err(AppError::InvalidArgument(format!(
                "Taille d'entrée {} attendue, {} reçue",
                self.inputs(),
                inputs.len()
            )));
        }

        let mut current_activations = inputs.to_vec();
        let mut weight_idx = 0;

        for pair in self.layer_sizes.windows(2) {
            let n_out = pair[1];
            let mut next_activations = vec![0.0; n_out];

            for activation in next_activations.iter_mut() {
                let mut sum = 0.0;
                for &input_val in current_activations.iter() {
                    sum += input_val * self.weights[weight_idx];
                    weight_idx += 1;
                }

                sum += self.weights[weight_idx];
                weight_idx += 1;
                *activation = sum.tanh();
            }
            current_activations = next_activations;
        }

        Ok(current_activations)
    }
}

impl Genome for NeuralNetworkGenome {
    fn crossover(&self, other: &Self, rng: &mut SeededRandom) -> Result<Self> {
        if self.layer_sizes != other.layer_sizes {
            return Err(AppError::InvalidArgument(format!(
                "Topologies incompatibles : {:?} vs {:?}",
                self.layer_sizes, other.layer_sizes
            )));
        }
        self.check_consistency()?;
        other.check_consistency()?;
        let new_weights = crossover::uniform_crossover(&self.weights, &other.weights, rng)?;

        Ok(Self {
            weights: new_weights,
            layer_sizes: self.layer_sizes.clone(),
            mutation_rate: self.mutation_rate,
            sigma: self.sigma,
        })
    }

    fn mutate(&mut self, rng: &mut SeededRandom) -> Result<()> {
        mutation::gaussian_mutation(&mut self.weights, self.mutation_rate, self.sigma, rng)
    }

    fn distance(&self, other: &Self) -> f64 {
        self.weights
            .iter()
            .zip(other.weights.iter())
            .map(|(a, b)| (a - b).powi(2))
            .sum::<f64>()
            .sqrt()
    }
}
