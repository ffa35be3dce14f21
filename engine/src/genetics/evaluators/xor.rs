use crate::genetics::genomes::NeuralNetworkGenome;
use crate::genetics::traits::Evaluator;
use crate::utils::prelude::*;

/// Table de vérité XOR (sorties codées -1 / 1 pour tanh).
pub const XOR_CASES: [([f64; 2], f64); 4] = [
    ([0.0, 0.0], -1.0),
    ([0.0, 1.0], 1.0),
    ([1.0, 0.0], 1.0),
    ([1.0, 1.0], -1.0),
];

/// Fitness = 4 - Σ(erreur²)/4, dans `[0, 4]` : 4 pour un réseau parfait.
#[derive(Debug, Clone, Copy, Default)]
pub struct XorEvaluator;

impl XorEvaluator {
    pub const MAX_FITNESS: f64 = 4.0;
}

impl Evaluator<NeuralNetworkGenome> for XorEvaluator {
    fn name(&self) -> String {
        "xor".to_string()
    }

    fn evaluate(&self, genome: &NeuralNetworkGenome) -> Result<f64> {
        if genome.inputs() != 2 || genome.outputs() != 1 {
            return Err(AppError::plugin(
                self.name(),
                format!("topologie 2 -> ... -> 1 attendue, reçu {:?}", genome.layer_sizes),
            ));
        }

        let mut squared_error = 0.0;
        for (inputs, target) in XOR_CASES.iter() {
            let output = genome
                .predict(inputs)
                .map_err(|e| AppError::plugin(self.name(), e.to_string()))?;
            squared_error += (output[0] - target).powi(2);
        }
        // Erreur max par cas : (1 - (-1))² = 4
        Ok(Self::MAX_FITNESS - squared_error / 4.0)
    }
}
