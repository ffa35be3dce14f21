// FICHIER : engine/tests/genetics_suite/population_test.rs

use crate::common::{init_test_logging, ladder_prototype, one_max_prototype, LadderAgent};
use evolve::genetics::Agent;
use evolve::{AppError, Population};

#[test]
fn test_ladder_scenario_size_stays_fixed_and_best_never_drops() {
    init_test_logging();
    let mut pop: Population<LadderAgent> = Population::new(10, 42).unwrap();
    pop.populate(&ladder_prototype());

    let mut history = Vec::new();
    for _ in 0..5 {
        history.push(pop.step_generation().unwrap());
        assert_eq!(pop.agents().len(), 10);
    }

    assert_eq!(history[0], 0.0, "Le prototype n'a jamais muté");
    for pair in history.windows(2) {
        assert!(pair[1] >= pair[0], "Régression de la meilleure fitness : {:?}", history);
    }
    assert_eq!(pop.generation(), 5);
}

#[test]
fn test_size_three_raises_degenerate_population() {
    let mut pop: Population<LadderAgent> = Population::new(3, 42).unwrap();
    pop.populate(&ladder_prototype());

    match pop.step_generation() {
        Err(AppError::DegeneratePopulation { survivors }) => assert_eq!(survivors, 1),
        other => panic!("DegeneratePopulation attendu, obtenu {:?}", other),
    }
}

#[test]
fn test_truncation_keeps_exactly_the_top_half() {
    let mut pop = Population::new(12, 9).unwrap();
    pop.populate(&one_max_prototype(24));
    // Une génération pour diversifier les génomes
    pop.step_generation().unwrap();

    // Phase A seule, en observant l'ensemble avant troncature
    let mut before: Vec<f64> = pop
        .agents()
        .iter()
        .map(|a| a.genome().ones() as f64)
        .collect();
    before.sort_by(|a, b| b.total_cmp(a));

    let best = pop.compute_new_fitness().unwrap();
    assert_eq!(pop.len(), 6);
    assert_eq!(best, before[0]);

    let survivors: Vec<f64> = pop.agents().iter().map(|a| a.fitness().unwrap()).collect();
    assert_eq!(survivors, before[..6].to_vec());
    let weakest_survivor = survivors.last().copied().unwrap();
    assert!(before[6..].iter().all(|&f| f <= weakest_survivor));
}

#[test]
fn test_elite_survives_replenishment_unchanged() {
    let mut pop = Population::new(16, 5).unwrap();
    pop.populate(&one_max_prototype(20));
    pop.step_generation().unwrap();
    pop.step_generation().unwrap();

    pop.compute_new_fitness().unwrap();
    let elite = pop.agents()[0].clone();

    pop.replenish().unwrap();

    assert_eq!(pop.len(), 16);
    let still_there = pop
        .agents()
        .iter()
        .any(|a| a.genome == elite.genome && a.fitness() == elite.fitness());
    assert!(still_there, "L'élite doit rester présente, intacte");
    assert_eq!(pop.agents()[0].genome, elite.genome);
}

#[test]
fn test_populate_twice_resets_state() {
    let mut pop = Population::new(8, 1).unwrap();
    pop.populate(&one_max_prototype(8));
    pop.step_generation().unwrap();
    assert!(pop.last_stats().is_some());

    pop.populate(&one_max_prototype(8));
    assert_eq!(pop.generation(), 0);
    assert!(pop.last_stats().is_none());
    assert!(pop.agents().iter().all(|a| a.genome().ones() == 0));
}
