//! Two small recursive algorithms.
//!
//! - [`search`]: Boggle-style word search on a fixed 5x5 board. Moves are
//!   orthogonal (north, east, west, south) and a tile may only be used once
//!   per path.
//! - [`quad`]: merges two "split squares" (quad trees of filled and empty
//!   regions) by logical OR.

pub mod board;
pub mod error;
pub mod quad;
pub mod search;
pub mod trace;

pub use board::{Board, Position, BOARD_SIZE, CELL_COUNT};
pub use error::{BoardError, BoardResult, QuadError, QuadResult};
pub use quad::{add, Quad};
pub use search::{find, find_path, Finder, Visited};
pub use trace::{NoopSink, Outcome, RecordingSink, TraceRecord, TraceSink, TracingSink};
