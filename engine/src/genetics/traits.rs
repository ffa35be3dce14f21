// FICHIER : engine/src/genetics/traits.rs

use super::random::SeededRandom;
use crate::utils::prelude::*;
use std::fmt::Debug;

/// Le trait Genome définit le matériel héréditaire manipulé par l'AG.
/// Aucune forme imposée (vecteur, arbre, graphe...), mais le croisement est fermé :
/// deux génomes compatibles produisent un génome du même type.
pub trait Genome: Clone + Send + Sync + Debug {
    /// Croise deux génomes pour en produire un nouveau (les parents restent intacts).
    fn crossover(&self, other: &Self, rng: &mut SeededRandom) -> Result<Self>;

    /// Applique une mutation sur le génome (modification in-place, forme préservée).
    fn mutate(&mut self, rng: &mut SeededRandom) -> Result<()>;

    /// (Optionnel) Distance génétique entre deux génomes (pour la diversité)
    fn distance(&self, _other: &Self) -> f64 {
        0.0
    }
}

/// Le trait Evaluator fait le lien avec le métier : il note un génome.
/// Convention : plus la valeur est haute, plus l'individu est adapté.
pub trait Evaluator<G: Genome>: Send + Sync {
    /// Nom de l'objectif (pour les logs et les erreurs de plug-in)
    fn name(&self) -> String;

    fn evaluate(&self, genome: &G) -> Result<f64>;
}

/// Un candidat : un génome plus une fitness, ordonné par fitness croissante.
///
/// `copy`, `crossover` et `mutate` reçoivent la source aléatoire de la population
/// quand ils en ont besoin ; un agent ne doit jamais tirer sur une source à lui.
pub trait Agent: Send + Sync + Debug + Sized {
    type Genome: Genome;

    fn genome(&self) -> &Self::Genome;

    /// Clone profond et indépendant (aucun état génétique partagé).
    fn copy(&self) -> Self;

    /// Évalue le génome courant et mémorise le score.
    fn compute_fitness(&mut self) -> Result<()>;

    /// Dernière fitness calculée, `None` avant tout `compute_fitness`.
    fn fitness(&self) -> Option<f64>;

    fn try_fitness(&self) -> Result<f64> {
        self.fitness().ok_or(AppError::FitnessUnset)
    }

    /// Produit un enfant à partir de `self` et `other`, sans modifier les parents.
    fn crossover(&self, other: &Self, rng: &mut SeededRandom) -> Result<Self>;

    fn mutate(&mut self, rng: &mut SeededRandom) -> Result<()>;

    fn compare_fitness(&self, other: &Self) -> Ordering {
        compare_fitness(self.fitness(), other.fitness())
    }
}

/// Ordre total sur les fitness : croissant, une fitness absente passe sous toutes les autres.
pub fn compare_fitness(a: Option<f64>, b: Option<f64>) -> Ordering {
    match (a, b) {
        (Some(x), Some(y)) => x.total_cmp(&y),
        (Some(_), None) => Ordering::Greater,
        (None, Some(_)) => Ordering::Less,
        (None, None) => Ordering::Equal,
    }
}
