//! Bedwars game log format
//!
//! | Tag | Variant           |
//! |-----|-------------------|
//! | 1   | [`ChatEvent`]     |
//! | 2   | [`BedBreakEvent`] |
//! | 3   | [`KillEvent`]     |
//! | 4   | [`DeathEvent`]    |
//!
//! Tags follow registration order and are part of the stored format, so new
//! variants may only be appended.

mod events;

pub use events::{BedBreakEvent, ChatEvent, DeathEvent, KillEvent};

use std::sync::Arc;

use gamelog_codec::{ContainerConfig, GameLogCreator};
use gamelog_core::{EventRegistry, Result};

/// Registry name for this format.
pub const FORMAT_NAME: &str = "bedwars";

/// Build the bedwars registry.
pub fn registry() -> Result<EventRegistry> {
    Ok(EventRegistry::builder(FORMAT_NAME)
        .register::<ChatEvent>()?
        .register::<BedBreakEvent>()?
        .register::<KillEvent>()?
        .register::<DeathEvent>()?
        .build())
}

/// A creator for bedwars logs using `config`.
pub fn creator(config: ContainerConfig) -> Result<GameLogCreator> {
    let registry = Arc::new(registry()?);
    Ok(GameLogCreator::new(registry, config)?)
}
