use crate::genetics::genomes::RealVectorGenome;
use crate::genetics::traits::Evaluator;
use crate::utils::prelude::*;

/// Fonction sphère, inversée pour la maximisation : `-Σ(x - c)²`.
/// Optimum 0 atteint en `x = c`.
#[derive(Debug, Clone, Default)]
pub struct SphereEvaluator {
    /// Centre de la sphère (origine si vide)
    pub center: Vec<f64>,
}

impl SphereEvaluator {
    pub fn centered_at(center: Vec<f64>) -> Self {
        Self { center }
    }
}

impl Evaluator<RealVectorGenome> for SphereEvaluator {
    fn name(&self) -> String {
        "sphere".to_string()
    }

    fn evaluate(&self, genome: &RealVectorGenome) -> Result<f64> {
        if !self.center.is_empty() && self.center.len() != genome.dimension() {
            return Err(AppError::plugin(
                self.name(),
                format!(
                    "dimension {} attendue, {} reçue",
                    self.center.len(),
                    genome.dimension()
                ),
            ));
        }

        let sum: f64 = genome
            .genes
            .iter()
            .enumerate()
            .map(|(i, x)| {
                let c = self.center.get(i).copied().unwrap_or(0.0);
                (x - c).powi(2)
            })
            .sum();
        Ok(-sum)
    }
}
