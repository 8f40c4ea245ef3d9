//! Falling-block puzzle engine.
//!
//! The crate is split in two layers:
//!
//! - [`core`] - value types: shape geometries, pieces, and the field grid
//! - [`engine`] - the game controller that drives gravity, input, locking and game over
//!
//! The engine never draws anything and never reads the keyboard. A front end injects a
//! [`Presenter`] to receive display frames and feeds [`GameController::on_tick`] and
//! [`GameController::on_input`] from its own timer and input source.

pub use self::{core::*, engine::*};

pub mod core;
pub mod engine;

/// Error returned when a [`ShapeSeed`] cannot be parsed from text.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum SeedParseError {
    #[display("seed must be 32 hex characters, got {_0}")]
    InvalidLength(#[error(not(source))] usize),
    #[display("seed contains a non-hex character")]
    InvalidDigit,
}

/// Error returned when a [`Grid`] cannot be parsed from its text form.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum GridParseError {
    #[display("expected {expected} rows, got {actual}")]
    RowCount { expected: usize, actual: usize },
    #[display("row {row}: expected {expected} cells, got {actual}")]
    RowWidth {
        row: usize,
        expected: usize,
        actual: usize,
    },
    #[display("row {row}: invalid cell character {ch:?}")]
    InvalidCell { row: usize, ch: char },
}
