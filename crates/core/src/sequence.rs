//! Ordered, timestamped event sequences
//!
//! A sequence is what a game server accumulates during a match. Events may
//! be appended in any order; the container sorts the sequence
//! chronologically before encoding it.

use crate::event::GameLogEvent;
use chrono::Utc;

/// One event with the time it happened (seconds since the Unix epoch by
/// convention, but any signed 64-bit clock works)
#[derive(Debug)]
pub struct TimedEvent {
    /// When the event happened
    pub timestamp: i64,
    /// The event payload
    pub event: Box<dyn GameLogEvent>,
}

impl TimedEvent {
    /// Pair an event with a timestamp
    pub fn new(timestamp: i64, event: Box<dyn GameLogEvent>) -> Self {
        TimedEvent { timestamp, event }
    }
}

/// Ordered list of timestamped events
#[derive(Debug, Default)]
pub struct GameLogSequence {
    events: Vec<TimedEvent>,
}

impl GameLogSequence {
    /// Create an empty sequence
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty sequence with room for `capacity` events
    pub fn with_capacity(capacity: usize) -> Self {
        GameLogSequence {
            events: Vec::with_capacity(capacity),
        }
    }

    /// Append an event.
    ///
    /// Without a timestamp the current wall-clock time in whole seconds is
    /// used.
    pub fn append(&mut self, event: Box<dyn GameLogEvent>, timestamp: Option<i64>) {
        let timestamp = timestamp.unwrap_or_else(now_secs);
        self.events.push(TimedEvent { timestamp, event });
    }

    /// Append an event stamped with the current time
    pub fn push<E: GameLogEvent>(&mut self, event: E) {
        self.append(Box::new(event), None);
    }

    /// Append an event with an explicit timestamp
    pub fn push_at<E: GameLogEvent>(&mut self, timestamp: i64, event: E) {
        self.append(Box::new(event), Some(timestamp));
    }

    /// Stable sort ascending by timestamp; equal timestamps keep their
    /// insertion order.
    pub fn sort_chronologically(&mut self) {
        self.events.sort_by_key(|e| e.timestamp);
    }

    /// True if timestamps never decrease
    pub fn is_chronological(&self) -> bool {
        self.events
            .windows(2)
            .all(|pair| pair[0].timestamp <= pair[1].timestamp)
    }

    /// Events in current order
    pub fn events(&self) -> &[TimedEvent] {
        &self.events
    }

    /// Iterate events in current order
    pub fn iter(&self) -> std::slice::Iter<'_, TimedEvent> {
        self.events.iter()
    }

    /// Number of events
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// True if the sequence holds no events
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Take ownership of the events
    pub fn into_events(self) -> Vec<TimedEvent> {
        self.events
    }
}

impl<'a> IntoIterator for &'a GameLogSequence {
    type Item = &'a TimedEvent;
    type IntoIter = std::slice::Iter<'a, TimedEvent>;

    fn into_iter(self) -> Self::IntoIter {
        self.events.iter()
    }
}

impl FromIterator<TimedEvent> for GameLogSequence {
    fn from_iter<I: IntoIterator<Item = TimedEvent>>(iter: I) -> Self {
        GameLogSequence {
            events: iter.into_iter().collect(),
        }
    }
}

impl Extend<TimedEvent> for GameLogSequence {
    fn extend<I: IntoIterator<Item = TimedEvent>>(&mut self, iter: I) {
        self.events.extend(iter);
    }
}

/// Current wall-clock time in whole seconds since the Unix epoch
pub fn now_secs() -> i64 {
    Utc::now().timestamp()
}
