// FICHIER : engine/src/genetics/population.rs

use super::operators::selection::TruncationSelection;
use super::random::SeededRandom;
use super::traits::{Agent, Genome};
use super::types::{DegeneratePolicy, GenerationStats};
use crate::utils::prelude::*;
use rayon::prelude::*;

/// Une population de taille fixe, sa source aléatoire et ses agents.
///
/// Chaque génération se déroule en deux phases, toujours dans cet ordre :
/// 1. [`compute_new_fitness`](Self::compute_new_fitness) : évaluation, tri, troncature ;
/// 2. [`replenish`](Self::replenish) : croisement + mutation jusqu'à retrouver `size` agents.
///
/// Entre les deux, la liste ne contient que les survivants. La condition d'arrêt
/// appartient à l'appelant.
#[derive(Debug)]
pub struct Population<A: Agent> {
    size: usize,
    random: SeededRandom,
    agents: Vec<A>,
    selection: TruncationSelection,
    config: EvolutionConfig,
    generation: usize,
    last_stats: Option<GenerationStats>,
}

impl<A: Agent> Population<A> {
    pub fn new(size: usize, seed: u64) -> Result<Self> {
        Self::with_config(EvolutionConfig::new(size, seed))
    }

    pub fn with_config(config: EvolutionConfig) -> Result<Self> {
        if config.population_size == 0 {
            return Err(AppError::InvalidArgument(
                "La taille de population doit être strictement positive".to_string(),
            ));
        }
        config.validate()?;

        Ok(Self {
            size: config.population_size,
            random: SeededRandom::new(config.seed),
            agents: Vec::new(),
            selection: TruncationSelection::new(config.elimination_ratio),
            config,
            generation: 0,
            last_stats: None,
        })
    }

    /// Remplit la population avec `size` copies indépendantes du prototype.
    /// Un nouvel appel écrase la population courante (le flux aléatoire continue).
    pub fn populate(&mut self, prototype: &A) {
        if !self.agents.is_empty() {
            debug!(discarded = self.agents.len(), "Réinitialisation de la population");
        }
        self.agents = (0..self.size).map(|_| prototype.copy()).collect();
        self.generation = 0;
        self.last_stats = None;
    }

    /// Phase A : évalue chaque agent, classe, ne garde que les meilleurs.
    /// Retourne la fitness du meilleur survivant.
    pub fn compute_new_fitness(&mut self) -> Result<f64> {
        if self.agents.is_empty() {
            return Err(AppError::EmptyPopulation);
        }

        self.evaluate_all()?;

        let fitnesses = self
            .agents
            .iter()
            .map(|a| a.try_fitness())
            .collect::<Result<Vec<f64>>>()?;

        // L'ordre compte : évaluer d'abord, éliminer ensuite
        let survivors = self.selection.select(&mut self.agents);
        self.generation += 1;

        let stats = GenerationStats::from_fitnesses(self.generation, &fitnesses, survivors)
            .ok_or(AppError::EmptyPopulation)?;
        let best = self
            .agents
            .first()
            .ok_or(AppError::EmptyPopulation)?
            .try_fitness()?;

        debug!(
            generation = stats.generation,
            best = stats.best,
            mean = stats.mean,
            worst = stats.worst,
            survivors,
            "Évaluation et troncature terminées"
        );
        self.last_stats = Some(stats);
        Ok(best)
    }

    /// Phase B : complète la population par croisement de deux survivants distincts
    /// puis mutation de l'enfant. Les survivants ne sont ni modifiés ni retirés.
    /// Retourne le nombre d'enfants ajoutés.
    ///
    /// En cas d'erreur d'un plug-in, aucun enfant n'est ajouté.
    pub fn replenish(&mut self) -> Result<usize> {
        let remaining = self.agents.len();
        if remaining == 0 {
            return Err(AppError::EmptyPopulation);
        }
        let deficit = self.size.saturating_sub(remaining);
        if deficit == 0 {
            return Ok(0);
        }

        let children = if remaining < 2 {
            match self.config.degenerate_policy {
                DegeneratePolicy::Fail => {
                    return Err(AppError::DegeneratePopulation {
                        survivors: remaining,
                    })
                }
                DegeneratePolicy::CloneSurvivor => {
                    warn!(
                        deficit,
                        "Un seul survivant : reproduction asexuée (copie + mutation)"
                    );
                    self.breed_asexual(deficit)?
                }
            }
        } else if self.config.parallel_breeding {
            self.breed_parallel(deficit)?
        } else {
            self.breed_sequential(deficit)?
        };

        self.agents.extend(children);
        debug!(children = deficit, size = self.agents.len(), "Population complétée");
        Ok(deficit)
    }

    /// Une génération complète : phase A puis phase B.
    /// Retourne la meilleure fitness observée en phase A.
    #[instrument(level = "debug", skip(self), fields(size = self.size))]
    pub fn step_generation(&mut self) -> Result<f64> {
        let best = self.compute_new_fitness()?;
        self.replenish()?;

        if let Some(stats) = &self.last_stats {
            info!(
                generation = stats.generation,
                best = stats.best,
                mean = stats.mean,
                "Génération terminée"
            );
        }
        Ok(best)
    }

    fn evaluate_all(&mut self) -> Result<()> {
        if self.config.parallel_evaluation {
            // Tous les agents sont évalués ; l'erreur remontée est celle de plus petit index
            let results: Vec<Result<()>> = self
                .agents
                .par_iter_mut()
                .map(|agent| agent.compute_fitness())
                .collect();
            results.into_iter().collect()
        } else {
            self.agents
                .iter_mut()
                .try_for_each(|agent| agent.compute_fitness())
        }
    }

    fn breed_sequential(&mut self, deficit: usize) -> Result<Vec<A>> {
        let remaining = self.agents.len();
        let mut children = Vec::with_capacity(deficit);

        for _ in 0..deficit {
            let (index1, index2) = draw_parents(&mut self.random, remaining)?;
            let mut child = self.agents[index1].crossover(&self.agents[index2], &mut self.random)?;
            child.mutate(&mut self.random)?;
            children.push(child);
        }
        Ok(children)
    }

    /// Les tirages (parents + graine de chaque enfant) restent séquentiels sur la
    /// source de la population ; seuls croisement et mutation sont parallélisés.
    fn breed_parallel(&mut self, deficit: usize) -> Result<Vec<A>> {
        let remaining = self.agents.len();
        let plans = (0..deficit)
            .map(|_| -> Result<(usize, usize, SeededRandom)> {
                let (index1, index2) = draw_parents(&mut self.random, remaining)?;
                Ok((index1, index2, self.random.derive_stream()))
            })
            .collect::<Result<Vec<(usize, usize, SeededRandom)>>>()?;

        let survivors = &self.agents;
        let children: Vec<Result<A>> = plans
            .into_par_iter()
            .map(|(index1, index2, mut rng)| -> Result<A> {
                let mut child = survivors[index1].crossover(&survivors[index2], &mut rng)?;
                child.mutate(&mut rng)?;
                Ok(child)
            })
            .collect();
        children.into_iter().collect()
    }

    fn breed_asexual(&mut self, deficit: usize) -> Result<Vec<A>> {
        let mut children = Vec::with_capacity(deficit);
        for _ in 0..deficit {
            let mut child = self.agents[0].copy();
            child.mutate(&mut self.random)?;
            children.push(child);
        }
        Ok(children)
    }

    // --- Accesseurs ---

    /// Vue en lecture seule, valide jusqu'à la prochaine modification de la population.
    pub fn agents(&self) -> &[A] {
        &self.agents
    }

    pub fn len(&self) -> usize {
        self.agents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.agents.is_empty()
    }

    /// Taille cible, fixe pour toute la vie de la population.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Nombre de phases d'évaluation effectuées depuis le dernier `populate`.
    pub fn generation(&self) -> usize {
        self.generation
    }

    pub fn seed(&self) -> u64 {
        self.random.seed()
    }

    pub fn config(&self) -> &EvolutionConfig {
        &self.config
    }

    pub fn last_stats(&self) -> Option<&GenerationStats> {
        self.last_stats.as_ref()
    }

    /// Agent évalué de meilleure fitness (le premier en cas d'égalité).
    pub fn best_agent(&self) -> Option<&A> {
        self.agents
            .iter()
            .filter(|a| a.fitness().is_some())
            .reduce(|best, a| {
                if a.compare_fitness(best).is_gt() {
                    a
                } else {
                    best
                }
            })
    }

    /// Distance génétique moyenne au meilleur agent évalué (0 si aucun).
    pub fn diversity(&self) -> f64 {
        let Some(best) = self.best_agent() else {
            return 0.0;
        };
        let total: f64 = self
            .agents
            .iter()
            .map(|a| best.genome().distance(a.genome()))
            .sum();
        total / self.agents.len() as f64
    }
}

/// Deux index distincts dans `[0, remaining)` : le second est retiré tant qu'il égale le premier.
/// `remaining >= 2` est garanti par l'appelant.
fn draw_parents(random: &mut SeededRandom, remaining: usize) -> Result<(usize, usize)> {
    let index1 = random.next_int(remaining)?;
    let mut index2 = random.next_int(remaining)?;
    while index2 == index1 {
        index2 = random.next_int(remaining)?;
    }
    Ok((index1, index2))
}
