// FICHIER : engine/tests/genetics_suite/problems_test.rs

use crate::common::{init_test_logging, one_max_prototype, sphere_prototype};
use evolve::genetics::evaluators::XorEvaluator;
use evolve::genetics::genomes::NeuralNetworkGenome;
use evolve::genetics::{Agent, Individual, SeededRandom};
use evolve::{DegeneratePolicy, EvolutionConfig, Population};

#[test]
fn test_one_max_climbs_from_zero() {
    init_test_logging();
    let mut pop = Population::new(40, 7).unwrap();
    pop.populate(&one_max_prototype(32));

    let first = pop.step_generation().unwrap();
    let mut last = first;
    for _ in 0..29 {
        let best = pop.step_generation().unwrap();
        assert!(best >= last);
        last = best;
    }

    assert_eq!(first, 0.0);
    assert!(last > first);
    assert!(last <= 32.0);
}

#[test]
fn test_sphere_best_never_degrades() {
    let mut pop = Population::new(30, 3).unwrap();
    pop.populate(&sphere_prototype(4));

    let mut previous = f64::NEG_INFINITY;
    for _ in 0..20 {
        let best = pop.step_generation().unwrap();
        assert!(best >= previous);
        assert!(best <= 0.0);
        previous = best;
    }
    assert!(pop.diversity() >= 0.0);
}

#[test]
fn test_xor_networks_evolve_with_custom_ratio() {
    let mut rng = SeededRandom::new(99);
    let genome = NeuralNetworkGenome::new_random(vec![2, 3, 1], 0.3, 0.4, &mut rng).unwrap();
    let prototype = Individual::new(genome, XorEvaluator);

    let mut config = EvolutionConfig::new(30, 99);
    config.elimination_ratio = 0.7;
    config.degenerate_policy = DegeneratePolicy::CloneSurvivor;
    let mut pop = Population::with_config(config).unwrap();
    pop.populate(&prototype);

    let first = pop.step_generation().unwrap();
    assert_eq!(pop.last_stats().unwrap().survivors, 9);

    let mut last = first;
    for _ in 0..15 {
        last = pop.step_generation().unwrap();
        assert_eq!(pop.len(), 30);
    }
    assert!(last >= first);
    assert!(last <= XorEvaluator::MAX_FITNESS);

    let champion = pop.best_agent().unwrap();
    assert_eq!(champion.genome().layer_sizes, vec![2, 3, 1]);
}

#[test]
fn test_inconsistent_network_fails_without_panicking() {
    let broken: NeuralNetworkGenome = serde_json::from_str(
        r#"{"weights":[0.1,0.2],"layer_sizes":[2,3,1],"mutation_rate":0.1,"sigma":0.1}"#,
    )
    .unwrap();

    for parallel in [false, true] {
        let mut config = EvolutionConfig::new(4, 1);
        config.parallel_evaluation = parallel;
        let mut pop = Population::with_config(config).unwrap();
        pop.populate(&Individual::new(broken.clone(), XorEvaluator));

        let outcome = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| pop.step_generation()));
        match outcome {
            Ok(Err(evolve::AppError::Plugin { source_name, .. })) => assert_eq!(source_name, "xor"),
            Ok(other) => panic!("Erreur de plug-in attendue, obtenu {:?}", other),
            Err(_) => panic!("Le génome incohérent ne doit pas faire paniquer (parallel={})", parallel),
        }
    }
}
