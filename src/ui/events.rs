//! Event/notification feed backing the header bell popover

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::core::types::{EventSeverity, Round};
use crate::game::summary::RoundSummary;

/// A special event captured into the notification feed
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Event {
    pub title: String,
    pub message: String,
    pub severity: EventSeverity,
    /// Round the event was surfaced in
    pub round: Round,
    /// When the feed captured it
    pub timestamp: DateTime<Utc>,
    pub read: bool,
}

/// Running list of captured events, newest first
///
/// Each round contributes at most `max_per_round` events; older rounds
/// are retained without any overall cap, so the list only shrinks via
/// `clear` or `reset`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventFeed {
    events: Vec<Event>,
    unread: usize,
    /// Latch so a round's summary is ingested exactly once even though
    /// inputs are re-supplied every frame
    last_ingested_round: Option<Round>,
    max_per_round: usize,
}

impl EventFeed {
    pub fn new(max_per_round: usize) -> Self {
        Self {
            events: Vec::new(),
            unread: 0,
            last_ingested_round: None,
            max_per_round,
        }
    }

    /// Capture a round summary's special events into the feed
    ///
    /// Takes at most `max_per_round` events, stamps them with `round`
    /// and the capture time, marks them unread, and prepends them to the
    /// list. Returns how many were added; a round already ingested adds
    /// nothing.
    pub fn ingest(&mut self, summary: &RoundSummary, round: Round) -> usize {
        if self.last_ingested_round == Some(round) {
            return 0;
        }
        self.last_ingested_round = Some(round);

        if summary.special_events.is_empty() {
            return 0;
        }

        let now = Utc::now();
        let captured: Vec<Event> = summary
            .special_events
            .iter()
            .take(self.max_per_round)
            .map(|special| Event {
                title: special.title.clone(),
                message: special.message.clone(),
                severity: special.severity,
                round,
                timestamp: now,
                read: false,
            })
            .collect();

        let added = captured.len();
        self.unread += added;
        self.events.splice(0..0, captured);
        added
    }

    /// Mark every event read and zero the unread counter
    ///
    /// Called when the notification surface opens.
    pub fn open(&mut self) {
        self.unread = 0;
        for event in &mut self.events {
            event.read = true;
        }
    }

    /// Empty the list and zero the counter, keeping the round latch
    pub fn clear(&mut self) {
        self.events.clear();
        self.unread = 0;
    }

    /// Wholesale reset for a fresh game: clears events, counters, and
    /// the ingest latch
    pub fn reset(&mut self) {
        self.clear();
        self.last_ingested_round = None;
    }

    pub fn unread(&self) -> usize {
        self.unread
    }

    pub fn events(&self) -> &[Event] {
        &self.events
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}
