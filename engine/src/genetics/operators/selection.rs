use crate::genetics::traits::Agent;

/// Fraction de la population éliminée à chaque génération.
/// Constante de politique : la moitié la moins adaptée disparaît.
pub const DEFAULT_ELIMINATION_RATIO: f64 = 0.5;

/// Sélection par troncature : on garde exactement le haut du classement.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TruncationSelection {
    pub elimination_ratio: f64,
}

impl Default for TruncationSelection {
    fn default() -> Self {
        Self::new(DEFAULT_ELIMINATION_RATIO)
    }
}

impl TruncationSelection {
    pub fn new(elimination_ratio: f64) -> Self {
        Self { elimination_ratio }
    }

    /// Nombre de survivants pour une population de `len` agents :
    /// `floor(len * (1 - ratio))`, soit `len / 2` par défaut ; jamais zéro si `len > 0`.
    pub fn survivor_count(&self, len: usize) -> usize {
        if len == 0 {
            return 0;
        }
        let kept = (len as f64 * (1.0 - self.elimination_ratio)).floor() as usize;
        kept.clamp(1, len)
    }

    /// Trie du plus adapté au moins adapté (tri stable : à fitness égale,
    /// l'ordre d'entrée est conservé), puis coupe la queue.
    /// Retourne le nombre de survivants.
    pub fn select<A: Agent>(&self, agents: &mut Vec<A>) -> usize {
        rank_descending(agents);
        let kept = self.survivor_count(agents.len());
        agents.truncate(kept);
        kept
    }
}

/// Classement décroissant par fitness, stable.
pub fn rank_descending<A: Agent>(agents: &mut [A]) {
    agents.sort_by(|a, b| b.compare_fitness(a));
}
