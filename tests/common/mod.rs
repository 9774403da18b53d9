//! Shared helpers for the integration test suites.
//!
//! Import via `#[path = "../common/mod.rs"] mod common;` from a suite's main.rs.

#![allow(dead_code)]

use std::sync::Once;

pub use gamelog::bedwars::{self, BedBreakEvent, ChatEvent, DeathEvent, KillEvent};
pub use gamelog::{ContainerConfig, Error, GameLogCreator, GameLogSequence, Limits, TimedEvent};

static INIT_TRACING: Once = Once::new();

/// Route `tracing` output through the test harness (`RUST_LOG` controls it).
pub fn init_tracing() {
    INIT_TRACING.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    });
}

/// Bedwars creator with the default configuration.
pub fn bedwars_creator() -> GameLogCreator {
    init_tracing();
    bedwars::creator(ContainerConfig::default()).unwrap()
}

/// Bedwars creator with small decode limits.
pub fn small_limits_creator() -> GameLogCreator {
    init_tracing();
    bedwars::creator(ContainerConfig::for_testing()).unwrap()
}

/// Short match: bed break, chat, death, kill.
pub fn short_match() -> GameLogSequence {
    let mut sequence = GameLogSequence::new();
    sequence.push_at(1_700_000_000, BedBreakEvent::new("SomeRandomPlayer", "Red"));
    sequence.push_at(1_700_000_004, ChatEvent::new("JvstMatt", "Hello everyone!"));
    sequence.push_at(1_700_000_009, DeathEvent::new("JvstMatt", "FALL"));
    sequence.push_at(1_700_000_013, KillEvent::new("JvstMatt", "Gargant", "DIAMOND_SWORD"));
    sequence
}

/// Field-level comparison of two bedwars events.
pub fn same_event(a: &TimedEvent, b: &TimedEvent) -> bool {
    if a.timestamp != b.timestamp {
        return false;
    }
    let (a, b) = (a.event.as_ref(), b.event.as_ref());
    if let Some(x) = a.downcast_ref::<ChatEvent>() {
        return b.downcast_ref::<ChatEvent>() == Some(x);
    }
    if let Some(x) = a.downcast_ref::<BedBreakEvent>() {
        return b.downcast_ref::<BedBreakEvent>() == Some(x);
    }
    if let Some(x) = a.downcast_ref::<KillEvent>() {
        return b.downcast_ref::<KillEvent>() == Some(x);
    }
    if let Some(x) = a.downcast_ref::<DeathEvent>() {
        return b.downcast_ref::<DeathEvent>() == Some(x);
    }
    false
}

/// Assert two sequences hold the same events in the same order.
pub fn assert_same_sequence(expected: &GameLogSequence, actual: &GameLogSequence) {
    assert_eq!(expected.len(), actual.len(), "event count differs");
    for (i, (a, b)) in expected.iter().zip(actual.iter()).enumerate() {
        assert!(same_event(a, b), "event {} differs: {:?} vs {:?}", i, a, b);
    }
}
