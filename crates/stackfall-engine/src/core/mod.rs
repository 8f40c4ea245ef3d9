//! Field and piece value types.

pub use self::{geometry::*, grid::*, piece::*, shape::*};

pub(crate) mod geometry;
pub(crate) mod grid;
pub(crate) mod piece;
pub(crate) mod shape;

/// Number of columns in the field.
pub const FIELD_WIDTH: usize = 10;
/// Number of rows in the field.
pub const FIELD_HEIGHT: usize = 20;
