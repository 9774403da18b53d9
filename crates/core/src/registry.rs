//! Event registry
//!
//! Maps each event variant of a log format to a small positive tag. Tags
//! are handed out in registration order starting at 1; tag 0 is never
//! assigned. A registry is built once per format and then shared read-only
//! (it is `Send + Sync`) by every encode and decode call.
//!
//! ```
//! # use gamelog_core::{EventRegistry, Result};
//! # fn build() -> Result<EventRegistry> {
//! let registry = EventRegistry::builder("empty").build();
//! assert!(registry.is_empty());
//! # Ok(registry)
//! # }
//! # build().unwrap();
//! ```

use crate::error::{Error, Result};
use crate::event::{default_factory, EventFactory, GameLogEvent};
use rustc_hash::FxHashMap;
use std::any::{type_name, TypeId};
use tracing::debug;

/// Tag written for a variant that is not registered.
///
/// Encoding is permissive: the record is still written with this tag.
/// Decoding is strict and rejects it as [`Error::UnknownEventId`].
pub const UNREGISTERED_TAG: i32 = -1;

#[derive(Debug, Clone)]
struct RegistryEntry {
    tag: i32,
    name: &'static str,
    factory: EventFactory,
}

/// Immutable variant <-> tag mapping for one log format
#[derive(Debug, Clone)]
pub struct EventRegistry {
    name: String,
    entries: Vec<RegistryEntry>,
    by_tag: FxHashMap<i32, usize>,
    by_type: FxHashMap<TypeId, i32>,
}

impl EventRegistry {
    /// Start building a registry for the format `name`
    pub fn builder(name: impl Into<String>) -> EventRegistryBuilder {
        EventRegistryBuilder {
            registry: EventRegistry {
                name: name.into(),
                entries: Vec::new(),
                by_tag: FxHashMap::default(),
                by_type: FxHashMap::default(),
            },
        }
    }

    fn insert<E: GameLogEvent>(&mut self, factory: EventFactory) -> Result<i32> {
        let type_id = TypeId::of::<E>();
        let variant = type_name::<E>();

        if self.by_type.contains_key(&type_id) {
            return Err(Error::registration(variant, "variant is already registered"));
        }

        let sample = factory();
        if sample.event_type_id() != type_id {
            return Err(Error::registration(
                variant,
                format!("factory builds `{}` instead", sample.event_name()),
            ));
        }

        let tag = (1..=i32::MAX)
            .find(|tag| !self.by_tag.contains_key(tag))
            .ok_or_else(|| Error::registration(variant, "no free tags left"))?;

        self.by_tag.insert(tag, self.entries.len());
        self.by_type.insert(type_id, tag);
        self.entries.push(RegistryEntry {
            tag,
            name: sample.event_name(),
            factory,
        });
        Ok(tag)
    }

    /// Build an empty instance of the variant registered under `tag`
    pub fn decode_factory(&self, tag: i32) -> Result<Box<dyn GameLogEvent>> {
        self.by_tag
            .get(&tag)
            .map(|&i| (self.entries[i].factory)())
            .ok_or(Error::UnknownEventId(tag))
    }

    /// Tag for a variant type, or [`UNREGISTERED_TAG`]
    pub fn encode_tag(&self, type_id: TypeId) -> i32 {
        self.by_type
            .get(&type_id)
            .copied()
            .unwrap_or(UNREGISTERED_TAG)
    }

    /// Tag for `event`'s concrete variant, or [`UNREGISTERED_TAG`]
    pub fn tag_for(&self, event: &dyn GameLogEvent) -> i32 {
        self.encode_tag(event.event_type_id())
    }

    /// Tag assigned to `E`, if registered
    pub fn tag_of<E: GameLogEvent>(&self) -> Option<i32> {
        self.by_type.get(&TypeId::of::<E>()).copied()
    }

    /// Format name, e.g. `"bedwars"`
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Number of registered variants
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True if no variant is registered
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate `(tag, variant name)` in registration order
    pub fn iter(&self) -> impl Iterator<Item = (i32, &'static str)> + '_ {
        self.entries.iter().map(|e| (e.tag, e.name))
    }
}

/// Builder that registers variants in order and freezes the registry
#[derive(Debug)]
pub struct EventRegistryBuilder {
    registry: EventRegistry,
}

impl EventRegistryBuilder {
    /// Register `E`, using `E::default()` as its empty instance
    pub fn register<E: GameLogEvent + Default>(self) -> Result<Self> {
        self.register_with::<E>(default_factory::<E>)
    }

    /// Register `E` with an explicit empty-instance factory.
    ///
    /// Fails if `E` is already registered or `factory` builds some other
    /// variant.
    pub fn register_with<E: GameLogEvent>(mut self, factory: EventFactory) -> Result<Self> {
        let tag = self.registry.insert::<E>(factory)?;
        debug!(
            registry = %self.registry.name,
            variant = type_name::<E>(),
            tag,
            "Registered event variant"
        );
        Ok(self)
    }

    /// Freeze the registry
    pub fn build(self) -> EventRegistry {
        self.registry
    }
}
