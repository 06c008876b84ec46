//! End-to-end tests for the service facade.

use std::sync::Arc;
use std::thread;

use mtg_sim::service::{AiService, ServiceConfig};

fn seeded_service() -> AiService {
    AiService::new(ServiceConfig {
        seed: Some(42),
        ..ServiceConfig::default()
    })
}

// =============================================================================
// Endpoint Semantics
// =============================================================================

#[test]
fn test_stats_starts_empty() {
    let service = seeded_service();
    let report = service.stats().unwrap();

    assert_eq!(report.total_games, 0);
    assert_eq!(report.total_wins, 0);
    assert_eq!(report.win_rate, 0.0);
    assert!(report.favorite_cards.is_empty());
}

#[test]
fn test_simulate_then_stats_round_trip() {
    let service = seeded_service();

    let report = service.simulate(200).unwrap();
    assert_eq!(report.games_simulated, 200);
    assert_eq!(report.status, "completed");

    let stats = service.stats().unwrap();
    assert_eq!(stats.total_games, 200);
    assert_eq!(
        stats.win_rate,
        stats.total_wins as f64 / stats.total_games as f64
    );
}

#[test]
fn test_repeated_simulate_accumulates() {
    let service = seeded_service();

    service.simulate(50).unwrap();
    service.simulate(70).unwrap();

    assert_eq!(service.stats().unwrap().total_games, 120);
}

#[test]
fn test_invalid_games_surfaces_safe_message() {
    let service = seeded_service();

    let err = service.simulate(-5).unwrap_err();
    assert!(err.is_invalid_argument());
    assert!(err.public_message().contains("positive"));
}

#[test]
fn test_fixed_seed_gives_reproducible_stats() {
    let a = seeded_service();
    let b = seeded_service();

    a.simulate(100).unwrap();
    b.simulate(100).unwrap();

    let stats_a = a.stats().unwrap();
    let stats_b = b.stats().unwrap();
    assert_eq!(stats_a.total_wins, stats_b.total_wins);
    assert_eq!(stats_a.favorite_cards, stats_b.favorite_cards);
}

// =============================================================================
// Concurrency
// =============================================================================

#[test]
fn test_concurrent_simulate_calls_converge() {
    let service = Arc::new(AiService::new(ServiceConfig::default()));

    let mut handles = Vec::new();
    for _ in 0..2 {
        let service = Arc::clone(&service);
        handles.push(thread::spawn(move || {
            service.simulate(500).unwrap();
        }));
    }
    for handle in handles {
        handle.join().unwrap();
    }

    // No lost updates: both batches land in full.
    let stats = service.stats().unwrap();
    assert_eq!(stats.total_games, 1000);
    assert!(stats.total_wins <= 1000);
}

#[test]
fn test_snapshots_never_tear() {
    let service = Arc::new(AiService::new(ServiceConfig::default()));

    let writer = {
        let service = Arc::clone(&service);
        thread::spawn(move || {
            for _ in 0..10 {
                service.simulate(20).unwrap();
            }
        })
    };

    // Readers must always see whole batches: a win count that implies
    // more games than the snapshot contains would be a torn read.
    for _ in 0..50 {
        let stats = service.stats().unwrap();
        assert!(stats.total_wins <= stats.total_games);
        assert_eq!(stats.total_games % 20, 0);
    }

    writer.join().unwrap();
    assert_eq!(service.stats().unwrap().total_games, 200);
}
