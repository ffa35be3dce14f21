use anyhow::{Context, Result};
use clap::{Args, ValueEnum};
use evolve::genetics::dto::{GenerationReport, RunSummary, StopReason};
use evolve::genetics::evaluators::{OneMaxEvaluator, SphereEvaluator, XorEvaluator};
use evolve::genetics::genomes::{BitStringGenome, NeuralNetworkGenome, RealVectorGenome};
use evolve::genetics::{Agent, Evaluator, Genome, Individual, Population, SeededRandom};
use evolve::utils::{init_logging, EvolutionConfig};
use serde::Serialize;
use std::io::Write;
use std::path::PathBuf;
use std::time::Instant;

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Problem {
    /// Maximiser le nombre de bits à 1
    OneMax,
    /// Rejoindre l'origine dans R^n
    Sphere,
    /// Apprendre XOR avec un petit réseau 2-3-1
    Xor,
}

impl Problem {
    fn label(&self) -> &'static str {
        match self {
            Problem::OneMax => "one-max",
            Problem::Sphere => "sphere",
            Problem::Xor => "xor",
        }
    }
}

#[derive(Args, Clone, Debug)]
pub struct RunArgs {
    /// Problème de référence à optimiser
    #[arg(short, long, value_enum, default_value_t = Problem::OneMax)]
    pub problem: Problem,

    /// Fichier de configuration JSON (surchargé par EVOLVE_* puis par les options)
    #[arg(short, long, env = "EVOLVE_CONFIG")]
    pub config: Option<PathBuf>,

    /// Taille de la population
    #[arg(long)]
    pub size: Option<usize>,

    /// Graine aléatoire
    #[arg(long)]
    pub seed: Option<u64>,

    /// Nombre maximal de générations
    #[arg(short, long, default_value = "50")]
    pub generations: usize,

    /// Arrêt anticipé dès que la meilleure fitness atteint cette valeur
    #[arg(short, long)]
    pub target: Option<f64>,

    /// Évaluation parallèle de la fitness
    #[arg(long)]
    pub parallel: bool,

    /// Longueur du génome (bits pour one-max, dimension pour sphere)
    #[arg(long, default_value = "32")]
    pub genome_size: usize,

    /// Rapports en lignes JSON
    #[arg(long)]
    pub json: bool,
}

pub fn handle(args: RunArgs, out: &mut dyn Write) -> Result<RunSummary> {
    let mut config = EvolutionConfig::load(args.config.as_deref())
        .context("Chargement de la configuration")?;
    if let Some(size) = args.size {
        config.population_size = size;
    }
    if let Some(seed) = args.seed {
        config.seed = seed;
    }
    if args.parallel {
        config.parallel_evaluation = true;
    }
    config.validate()?;

    init_logging(&config.log);
    tracing::info!(
        problem = args.problem.label(),
        size = config.population_size,
        seed = config.seed,
        "Démarrage de l'évolution"
    );

    // Prototype déterministe : dérivé de la graine de la population
    let mut rng = SeededRandom::new(config.seed);
    let summary = match args.problem {
        Problem::OneMax => {
            let len = args.genome_size.max(1);
            let genome = BitStringGenome::zeros(len, 1.0 / len as f64);
            evolve_with(Individual::new(genome, OneMaxEvaluator), config, &args, out)?
        }
        Problem::Sphere => {
            let genome = RealVectorGenome::new_random(args.genome_size, -5.0, 5.0, 0.3, 0.3, &mut rng)?;
            evolve_with(Individual::new(genome, SphereEvaluator::default()), config, &args, out)?
        }
        Problem::Xor => {
            let genome = NeuralNetworkGenome::new_random(vec![2, 3, 1], 0.3, 0.4, &mut rng)?;
            evolve_with(Individual::new(genome, XorEvaluator), config, &args, out)?
        }
    };

    if args.json {
        writeln!(out, "{}", serde_json::to_string(&summary)?)?;
    } else {
        let best = summary
            .best_fitness
            .map_or_else(|| "-".to_string(), |f| format!("{:.4}", f));
        writeln!(
            out,
            "✅ {} : meilleure fitness {} après {} génération(s) ({:?}, {} ms)",
            summary.problem,
            best,
            summary.generations,
            summary.stop_reason,
            summary.duration_ms
        )?;
    }
    Ok(summary)
}

/// Boucle d'évolution : la condition d'arrêt (générations, cible) vit ici, pas dans le moteur.
fn evolve_with<G, E>(
    prototype: Individual<G, E>,
    config: EvolutionConfig,
    args: &RunArgs,
    out: &mut dyn Write,
) -> Result<RunSummary>
where
    G: Genome + Serialize,
    E: Evaluator<G>,
{
    let seed = config.seed;
    let mut population = Population::with_config(config)?;
    population.populate(&prototype);

    let started = Instant::now();
    let mut best_fitness = None;
    let mut stop_reason = StopReason::MaxGenerations;

    for _ in 0..args.generations {
        let generation_started = Instant::now();
        let best = population.step_generation()?;
        best_fitness = Some(best);

        if let Some(stats) = population.last_stats() {
            let report = GenerationReport::from_stats(
                stats,
                population.len(),
                population.diversity(),
                generation_started.elapsed().as_millis(),
            );
            write_report(out, &report, args.json)?;
        }

        if args.target.is_some_and(|target| best >= target) {
            stop_reason = StopReason::TargetReached;
            break;
        }
    }

    let champion = match population.best_agent() {
        Some(agent) => serde_json::to_value(agent.genome())?,
        None => serde_json::Value::Null,
    };

    Ok(RunSummary {
        problem: args.problem.label().to_string(),
        seed,
        generations: population.generation(),
        best_fitness,
        stop_reason,
        duration_ms: started.elapsed().as_millis(),
        champion,
    })
}

fn write_report(out: &mut dyn Write, report: &GenerationReport, json: bool) -> Result<()> {
    if json {
        writeln!(out, "{}", serde_json::to_string(report)?)?;
    } else {
        writeln!(
            out,
            "Génération {:>4} | best {:>10.4} | mean {:>10.4} | worst {:>10.4} | diversité {:.3}",
            report.generation,
            report.best_fitness,
            report.mean_fitness,
            report.worst_fitness,
            report.diversity
        )?;
    }
    Ok(())
}
