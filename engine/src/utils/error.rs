// FICHIER : engine/src/utils/error.rs

use serde::Serialize;
use std::io;

// --- RE-EXPORTS ANYHOW (Pour la flexibilité du CLI et des plug-ins) ---
pub use anyhow::{anyhow, Context};
// On renomme le Result de anyhow pour ne pas qu'il écrase le nôtre
pub use anyhow::Result as AnyResult;

/// Type de résultat standard du moteur d'évolution.
pub type Result<T> = std::result::Result<T, AppError>;

/// Enumération centrale des erreurs du moteur.
/// Elle dérive `thiserror::Error` pour faciliter la conversion automatique.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Erreur de configuration : {0}")]
    Config(String),

    #[error("Erreur d'entrée/sortie : {0}")]
    Io(#[from] io::Error),

    #[error("Erreur de sérialisation : {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Argument invalide : {0}")]
    InvalidArgument(String),

    /// `step_generation` appelé avant `populate`.
    #[error("Population vide : appeler populate() avant la première génération")]
    EmptyPopulation,

    /// Moins de deux survivants : l'appariement de parents distincts est impossible.
    #[error("Population dégénérée : {survivors} survivant(s), au moins 2 requis pour le croisement")]
    DegeneratePopulation { survivors: usize },

    #[error("Fitness non calculée : compute_fitness() n'a pas encore été appelé")]
    FitnessUnset,

    /// Erreur remontée par un génome, un agent ou un évaluateur fourni par l'appelant.
    #[error("Erreur du plug-in '{source_name}' : {message}")]
    Plugin {
        source_name: String,
        message: String,
    },

    #[error("Erreur Système : {0}")]
    System(#[from] anyhow::Error),
}

impl AppError {
    pub fn plugin(source_name: impl Into<String>, message: impl Into<String>) -> Self {
        AppError::Plugin {
            source_name: source_name.into(),
            message: message.into(),
        }
    }
}

// Sérialisation en simple chaîne (rapports JSON du CLI)
impl Serialize for AppError {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::ser::Serializer,
    {
        serializer.serialize_str(self.to_string().as_ref())
    }
}

// Permet de faire : return Err(format!("...").into());
impl From<String> for AppError {
    fn from(s: String) -> Self {
        AppError::System(anyhow::anyhow!(s))
    }
}

// Permet de faire : return Err("Mon erreur literal".into());
impl From<&str> for AppError {
    fn from(s: &str) -> Self {
        AppError::System(anyhow::anyhow!(s.to_string()))
    }
}
