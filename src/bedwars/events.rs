//! Bedwars event variants.
//!
//! Every field is a pooled string, written in declaration order.

use gamelog_core::{GameLogEvent, LogReader, LogWriter, Result};
use std::any::Any;

/// A player sent a chat message.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ChatEvent {
    /// Sender
    pub username: String,
    /// Message text
    pub message: String,
}

impl ChatEvent {
    /// Create a chat event.
    pub fn new(username: impl Into<String>, message: impl Into<String>) -> Self {
        ChatEvent {
            username: username.into(),
            message: message.into(),
        }
    }
}

impl GameLogEvent for ChatEvent {
    fn event_name(&self) -> &'static str {
        "chat"
    }

    fn write_to(&self, writer: &mut LogWriter<'_>) -> Result<()> {
        writer.write_pooled_string(&self.username)?;
        writer.write_pooled_string(&self.message)?;
        Ok(())
    }

    fn read_from(&mut self, reader: &mut LogReader<'_>) -> Result<()> {
        self.username = reader.read_pooled_string()?;
        self.message = reader.read_pooled_string()?;
        Ok(())
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

/// A team's bed was destroyed.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct BedBreakEvent {
    /// Player who broke the bed
    pub destroyer: String,
    /// Team that lost its bed
    pub team: String,
}

impl BedBreakEvent {
    /// Create a bed-break event.
    pub fn new(destroyer: impl Into<String>, team: impl Into<String>) -> Self {
        BedBreakEvent {
            destroyer: destroyer.into(),
            team: team.into(),
        }
    }
}

impl GameLogEvent for BedBreakEvent {
    fn event_name(&self) -> &'static str {
        "bed_break"
    }

    fn write_to(&self, writer: &mut LogWriter<'_>) -> Result<()> {
        writer.write_pooled_string(&self.destroyer)?;
        writer.write_pooled_string(&self.team)?;
        Ok(())
    }

    fn read_from(&mut self, reader: &mut LogReader<'_>) -> Result<()> {
        self.destroyer = reader.read_pooled_string()?;
        self.team = reader.read_pooled_string()?;
        Ok(())
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

/// One player killed another.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct KillEvent {
    /// Attacker
    pub killer: String,
    /// Victim
    pub killed: String,
    /// Item used, e.g. `"Iron Sword"`
    pub weapon: String,
}

impl KillEvent {
    /// Create a kill event.
    pub fn new(
        killer: impl Into<String>,
        killed: impl Into<String>,
        weapon: impl Into<String>,
    ) -> Self {
        KillEvent {
            killer: killer.into(),
            killed: killed.into(),
            weapon: weapon.into(),
        }
    }
}

impl GameLogEvent for KillEvent {
    fn event_name(&self) -> &'static str {
        "kill"
    }

    fn write_to(&self, writer: &mut LogWriter<'_>) -> Result<()> {
        writer.write_pooled_string(&self.killer)?;
        writer.write_pooled_string(&self.killed)?;
        writer.write_pooled_string(&self.weapon)?;
        Ok(())
    }

    fn read_from(&mut self, reader: &mut LogReader<'_>) -> Result<()> {
        self.killer = reader.read_pooled_string()?;
        self.killed = reader.read_pooled_string()?;
        self.weapon = reader.read_pooled_string()?;
        Ok(())
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

/// A player died without a killer (void, fall damage, ...).
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct DeathEvent {
    /// Player who died
    pub player: String,
    /// Cause of death, e.g. `"VOID"`
    pub cause: String,
}

impl DeathEvent {
    /// Create a death event.
    pub fn new(player: impl Into<String>, cause: impl Into<String>) -> Self {
        DeathEvent {
            player: player.into(),
            cause: cause.into(),
        }
    }
}

impl GameLogEvent for DeathEvent {
    fn event_name(&self) -> &'static str {
        "death"
    }

    fn write_to(&self, writer: &mut LogWriter<'_>) -> Result<()> {
        writer.write_pooled_string(&self.player)?;
        writer.write_pooled_string(&self.cause)?;
        Ok(())
    }

    fn read_from(&mut self, reader: &mut LogReader<'_>) -> Result<()> {
        self.player = reader.read_pooled_string()?;
        self.cause = reader.read_pooled_string()?;
        Ok(())
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}
