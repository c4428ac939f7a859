//! Diagnostic hook for the word search.
//!
//! Every step of the search produces a [`TraceRecord`]. Records go to a
//! [`TraceSink`]; the default [`NoopSink`] drops them, so the search itself
//! stays free of output.

use crate::board::Position;
use crate::search::Visited;
use serde::{Deserialize, Serialize};
use std::fmt;

/// What a single search step concluded
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Outcome {
    /// Letter matched, continuing into the neighbours
    Ok,
    /// Letter does not match
    No,
    /// Tile already used on this path
    Seen,
    /// Last letter matched
    Win,
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Ok => f.pad("OK"),
            Outcome::No => f.pad("NO"),
            Outcome::Seen => f.pad("SEEN"),
            Outcome::Win => f.pad("WIN"),
        }
    }
}

/// One step of the search
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TraceRecord {
    pub outcome: Outcome,
    pub position: Position,
    /// Letter on the tile being examined
    pub letter: char,
    /// Word still to be matched, starting with the letter wanted here
    pub remaining: String,
    /// Tiles used by the path leading up to this step
    pub visited: Visited,
}

impl TraceRecord {
    /// Column titles matching the layout of the `Display` impl
    pub fn header() -> String {
        format!("{:<6}{},{}  {:<3}{:<8}{}", "out", "y", "x", "bd", "word", "seen")
    }
}

impl fmt::Display for TraceRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:<6}{},{}  {:<3}{:<8}{}",
            self.outcome,
            self.position.row,
            self.position.col,
            self.letter,
            self.remaining,
            self.visited
        )
    }
}

/// Receiver for search steps
pub trait TraceSink {
    fn record(&mut self, record: &TraceRecord);

    /// Whether records should be built at all. Sinks that discard everything
    /// return false so the search can skip the allocation.
    fn enabled(&self) -> bool {
        true
    }
}

/// Discards every record
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopSink;

impl TraceSink for NoopSink {
    fn record(&mut self, _record: &TraceRecord) {}

    fn enabled(&self) -> bool {
        false
    }
}

/// Forwards each record as a `tracing` event at TRACE level
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl TraceSink for TracingSink {
    fn record(&mut self, record: &TraceRecord) {
        tracing::trace!(
            outcome = %record.outcome,
            row = record.position.row,
            col = record.position.col,
            letter = %record.letter,
            remaining = %record.remaining,
            visited = %record.visited,
            "search step"
        );
    }

    fn enabled(&self) -> bool {
        tracing::enabled!(tracing::Level::TRACE)
    }
}

/// Keeps every record in order
#[derive(Debug, Clone, Default)]
pub struct RecordingSink {
    records: Vec<TraceRecord>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn records(&self) -> &[TraceRecord] {
        &self.records
    }

    pub fn into_records(self) -> Vec<TraceRecord> {
        self.records
    }

    pub fn clear(&mut self) {
        self.records.clear();
    }
}

impl TraceSink for RecordingSink {
    fn record(&mut self, record: &TraceRecord) {
        self.records.push(record.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_outcome_display() {
        assert_eq!(Outcome::Ok.to_string(), "OK");
        assert_eq!(Outcome::Seen.to_string(), "SEEN");
        assert_eq!(format!("{:<6}|", Outcome::Win), "WIN   |");
    }

    #[test]
    fn test_outcome_serde_tags() {
        assert_eq!(serde_json::to_string(&Outcome::Seen).unwrap(), "\"SEEN\"");
        assert_eq!(serde_json::to_string(&Outcome::Ok).unwrap(), "\"OK\"");
        let win: Outcome = serde_json::from_str("\"WIN\"").unwrap();
        assert_eq!(win, Outcome::Win);
    }

    #[test]
    fn test_record_layout() {
        let record = TraceRecord {
            outcome: Outcome::Ok,
            position: Position::new(0, 3),
            letter: 'N',
            remaining: "NOON".to_string(),
            visited: Visited::new().with(Position::new(1, 3)),
        };
        assert_eq!(record.to_string(), "OK    0,3  N  NOON    {(1, 3)}");
        assert_eq!(TraceRecord::header(), "out   y,x  bd word    seen");
    }

    #[test]
    fn test_recording_sink_keeps_order() {
        let mut sink = RecordingSink::new();
        for (i, outcome) in [Outcome::No, Outcome::Ok, Outcome::Win].into_iter().enumerate() {
            sink.record(&TraceRecord {
                outcome,
                position: Position::new(i, i),
                letter: 'A',
                remaining: "A".to_string(),
                visited: Visited::new(),
            });
        }
        let outcomes: Vec<Outcome> = sink.records().iter().map(|r| r.outcome).collect();
        assert_eq!(outcomes, vec![Outcome::No, Outcome::Ok, Outcome::Win]);

        sink.clear();
        assert!(sink.records().is_empty());
    }

    #[test]
    fn test_noop_sink_disabled() {
        assert!(!NoopSink.enabled());
        assert!(RecordingSink::new().enabled());
    }
}
