//! Boggle word search.
//!
//! A word is found when it can be traced through orthogonally adjacent
//! tiles, starting anywhere, without stepping on the same tile twice. Two
//! different tiles with the same letter may both be used.

use crate::board::{Board, Position, BOARD_SIZE, CELL_COUNT};
use crate::trace::{NoopSink, Outcome, TraceRecord, TraceSink};
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Tiles used by one candidate path, as a bitset over row-major indices.
///
/// The set is `Copy` and only grows through [`Visited::with`], which returns
/// a new set. Each recursive step owns its copy, so a branch that fails deep
/// in the search leaves its siblings' view untouched.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Visited(u32);

impl Visited {
    pub const fn new() -> Self {
        Self(0)
    }

    /// A copy of this set with `pos` added
    #[must_use]
    pub fn with(self, pos: Position) -> Self {
        Self(self.0 | (1 << pos.index()))
    }

    pub fn contains(self, pos: Position) -> bool {
        (self.0 >> pos.index()) & 1 != 0
    }

    pub fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Members in row-major order
    pub fn iter(self) -> impl Iterator<Item = Position> {
        Board::positions().filter(move |&pos| self.contains(pos))
    }
}

/// Serialized as the list of member positions, row-major
impl Serialize for Visited {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.iter())
    }
}

impl<'de> Deserialize<'de> for Visited {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let members = Vec::<Position>::deserialize(deserializer)?;
        let mut visited = Visited::new();
        for pos in members {
            if pos.row >= BOARD_SIZE || pos.col >= BOARD_SIZE {
                return Err(D::Error::custom(format!("position {} is off the board", pos)));
            }
            visited = visited.with(pos);
        }
        Ok(visited)
    }
}

impl fmt::Display for Visited {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let members: Vec<String> = self.iter().map(|pos| pos.to_string()).collect();
        write!(f, "{{{}}}", members.join(", "))
    }
}

/// Word searcher reporting each step to a [`TraceSink`]
#[derive(Debug, Clone, Default)]
pub struct Finder<S = NoopSink> {
    sink: S,
}

impl Finder<NoopSink> {
    /// Create a finder that discards trace records
    pub fn new() -> Self {
        Self { sink: NoopSink }
    }
}

impl<S: TraceSink> Finder<S> {
    /// Create a finder reporting to `sink`
    pub fn with_sink(sink: S) -> Self {
        Self { sink }
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }

    pub fn into_sink(self) -> S {
        self.sink
    }

    /// Check whether `word` can be traced on the board
    pub fn find(&mut self, board: &Board, word: &str) -> bool {
        self.find_path(board, word).is_some()
    }

    /// Find the first path spelling `word`.
    ///
    /// Start tiles are tried row-major and neighbours in the order up, down,
    /// left, right, so the result is the first path in that order. The empty
    /// word is found by the empty path.
    pub fn find_path(&mut self, board: &Board, word: &str) -> Option<Vec<Position>> {
        let letters: Vec<char> = word.chars().collect();
        tracing::debug!(word, len = letters.len(), "searching board");

        if letters.is_empty() {
            return Some(Vec::new());
        }
        // A path can't be longer than the number of tiles
        if letters.len() > CELL_COUNT {
            tracing::debug!(word, "word longer than the board, not searching");
            return None;
        }

        for start in Board::positions() {
            if let Some(mut path) = self.search_from(board, &letters, start, Visited::new()) {
                path.reverse();
                tracing::debug!(word, start = %start, "word found");
                return Some(path);
            }
        }

        tracing::debug!(word, "word not found");
        None
    }

    /// Search for `word` starting on `pos`. On success returns the path in
    /// reverse, last tile first.
    fn search_from(
        &mut self,
        board: &Board,
        word: &[char],
        pos: Position,
        visited: Visited,
    ) -> Option<Vec<Position>> {
        let letter = board.get(pos);

        if letter != word[0] {
            self.emit(Outcome::No, pos, letter, word, visited);
            return None;
        }

        if visited.contains(pos) {
            self.emit(Outcome::Seen, pos, letter, word, visited);
            return None;
        }

        if word.len() == 1 {
            self.emit(Outcome::Win, pos, letter, word, visited);
            return Some(vec![pos]);
        }

        self.emit(Outcome::Ok, pos, letter, word, visited);

        let visited = visited.with(pos);
        for next in pos.neighbors() {
            if let Some(mut path) = self.search_from(board, &word[1..], next, visited) {
                path.push(pos);
                return Some(path);
            }
        }

        None
    }

    fn emit(
        &mut self,
        outcome: Outcome,
        position: Position,
        letter: char,
        word: &[char],
        visited: Visited,
    ) {
        if !self.sink.enabled() {
            return;
        }
        self.sink.record(&TraceRecord {
            outcome,
            position,
            letter,
            remaining: word.iter().collect(),
            visited,
        });
    }
}

/// Check whether `word` can be traced on `board`
pub fn find(board: &Board, word: &str) -> bool {
    Finder::new().find(board, word)
}

/// First path spelling `word` on `board`, if any
pub fn find_path(board: &Board, word: &str) -> Option<Vec<Position>> {
    Finder::new().find_path(board, word)
}
