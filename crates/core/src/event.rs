//! Event variant contract
//!
//! A game-log format is a set of event variants (chat, kill, ...). Each
//! variant is a plain struct implementing [`GameLogEvent`]: it writes its
//! fields through a [`LogWriter`] and reads them back, in the same order,
//! through a [`LogReader`]. The field order is part of the wire format.

use crate::error::Result;
use crate::stream::{LogReader, LogWriter};
use std::any::{Any, TypeId};
use std::fmt;

/// A concrete event variant that can be stored in a game log.
///
/// Implementations must be symmetric: `read_from` consumes exactly the
/// bytes `write_to` produced.
///
/// # Example
///
/// ```
/// use std::any::Any;
/// use gamelog_core::{GameLogEvent, LogReader, LogWriter, Result};
///
/// #[derive(Debug, Default)]
/// struct Respawn {
///     player: String,
///     lives_left: i16,
/// }
///
/// impl GameLogEvent for Respawn {
///     fn event_name(&self) -> &'static str {
///         "respawn"
///     }
///
///     fn write_to(&self, writer: &mut LogWriter<'_>) -> Result<()> {
///         writer.write_pooled_string(&self.player)?;
///         writer.write_i16(self.lives_left)
///     }
///
///     fn read_from(&mut self, reader: &mut LogReader<'_>) -> Result<()> {
///         self.player = reader.read_pooled_string()?;
///         self.lives_left = reader.read_i16()?;
///         Ok(())
///     }
///
///     fn as_any(&self) -> &dyn Any {
///         self
///     }
/// }
/// ```
pub trait GameLogEvent: Any + fmt::Debug + Send + Sync {
    /// Short stable name of the variant, used in logs and errors
    fn event_name(&self) -> &'static str;

    /// Write this event's payload
    fn write_to(&self, writer: &mut LogWriter<'_>) -> Result<()>;

    /// Fill an empty instance from the payload
    fn read_from(&mut self, reader: &mut LogReader<'_>) -> Result<()>;

    /// Upcast for type identity and downcasting
    fn as_any(&self) -> &dyn Any;
}

impl dyn GameLogEvent {
    /// Type identity of the concrete variant behind this trait object
    pub fn event_type_id(&self) -> TypeId {
        self.as_any().type_id()
    }

    /// True if the concrete variant is `E`
    pub fn is<E: GameLogEvent>(&self) -> bool {
        self.as_any().is::<E>()
    }

    /// Downcast to a concrete variant
    pub fn downcast_ref<E: GameLogEvent>(&self) -> Option<&E> {
        self.as_any().downcast_ref::<E>()
    }
}

/// Builds an empty instance of one variant, ready for `read_from`
pub type EventFactory = fn() -> Box<dyn GameLogEvent>;

/// Factory for any variant with a `Default` empty shape
pub fn default_factory<E: GameLogEvent + Default>() -> Box<dyn GameLogEvent> {
    Box::new(E::default())
}
