use super::{FIELD_WIDTH, geometry::Geometry, grid::Grid, shape::ShapeKind};

/// Horizontal bias added to every piece's `x` so that `x = 0` spawns centered.
#[expect(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
pub const X_OFFSET: i32 = (FIELD_WIDTH / 2) as i32 - 1;

/// A single discrete change to a piece's position or rotation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::IsVariant)]
pub enum Move {
    Left,
    Right,
    Down,
    RotateCw,
    RotateCcw,
}

/// A falling piece: a geometry set placed at a position with a rotation index.
///
/// Pieces are immutable values. [`Piece::moved`] returns a new candidate and never changes
/// the receiver, so a caller can validate the candidate before committing it. A `Piece` does
/// not guarantee that it lies inside the field or avoids locked cells; check with
/// [`Piece::is_within_field`] and [`Grid::overlaps`] first.
///
/// # Coordinate System
///
/// - `(x, y)` is the top-left corner of the active geometry
/// - the field column of that corner is `x + X_OFFSET`, so `x = 0` is centered
/// - `rotation` may be any integer and selects `geometries[rotation mod len]`
///
/// # Example
///
/// ```
/// use stackfall_engine::{Grid, Move, Piece, ShapeKind};
///
/// let piece = Piece::new(ShapeKind::T);
/// let candidate = piece.moved(Move::Down).moved(Move::RotateCw);
///
/// assert!(candidate.is_within_field());
/// assert!(!Grid::overlaps(&Grid::EMPTY, &candidate.rasterize()));
/// assert_eq!(candidate.y(), 1);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Piece {
    geometries: &'static [Geometry],
    x: i32,
    y: i32,
    rotation: i32,
}

impl Piece {
    /// Creates a piece of the given shape at the spawn position with rotation 0.
    #[must_use]
    pub const fn new(kind: ShapeKind) -> Self {
        Self::from_geometries(kind.geometries())
    }

    /// Creates a piece from an arbitrary geometry set at the spawn position.
    ///
    /// # Panics
    ///
    /// Panics if `geometries` is empty.
    #[must_use]
    pub const fn from_geometries(geometries: &'static [Geometry]) -> Self {
        assert!(!geometries.is_empty(), "a piece needs at least one geometry");
        Self {
            geometries,
            x: 0,
            y: 0,
            rotation: 0,
        }
    }

    #[must_use]
    pub const fn with_position(self, x: i32, y: i32) -> Self {
        Self { x, y, ..self }
    }

    #[must_use]
    pub const fn with_rotation(self, rotation: i32) -> Self {
        Self { rotation, ..self }
    }

    #[must_use]
    pub const fn x(&self) -> i32 {
        self.x
    }

    #[must_use]
    pub const fn y(&self) -> i32 {
        self.y
    }

    #[must_use]
    pub const fn rotation(&self) -> i32 {
        self.rotation
    }

    #[must_use]
    pub const fn geometries(&self) -> &'static [Geometry] {
        self.geometries
    }

    /// Returns the rotation index reduced into `0..geometries.len()`.
    #[must_use]
    pub fn rotation_index(&self) -> usize {
        let count = i32::try_from(self.geometries.len()).unwrap_or(i32::MAX);
        usize::try_from(self.rotation.rem_euclid(count)).unwrap_or_default()
    }

    /// Returns the active geometry.
    #[must_use]
    pub fn geometry(&self) -> Geometry {
        self.geometries[self.rotation_index()]
    }

    /// Returns the field coordinates `(x, y)` of the filled cells.
    ///
    /// Coordinates may lie outside the field.
    pub fn cells(&self) -> impl Iterator<Item = (i32, i32)> + use<> {
        let x0 = self.x + X_OFFSET;
        let y0 = self.y;
        self.geometry()
            .filled_cells()
            .map(move |(dx, dy)| (x0 + dx, y0 + dy))
    }

    /// Returns a field-sized footprint with this piece's cells filled.
    ///
    /// Cells outside the field are dropped; validate with [`Self::is_within_field`] first.
    #[must_use]
    pub fn rasterize(&self) -> Grid {
        let mut grid = Grid::EMPTY;
        for (x, y) in self.cells() {
            grid.fill_at(x, y);
        }
        grid
    }

    /// Returns whether every filled cell lies inside the field.
    ///
    /// Empty rows and columns of the geometry may hang over the edge.
    #[must_use]
    pub fn is_within_field(&self) -> bool {
        self.cells().all(|(x, y)| Grid::contains(x, y))
    }

    /// Returns the candidate piece after applying `mv`.
    #[must_use]
    pub const fn moved(&self, mv: Move) -> Self {
        let Self { x, y, rotation, .. } = *self;
        match mv {
            Move::Left => self.with_position(x - 1, y),
            Move::Right => self.with_position(x + 1, y),
            Move::Down => self.with_position(x, y + 1),
            Move::RotateCw => self.with_rotation(rotation - 1),
            Move::RotateCcw => self.with_rotation(rotation + 1),
        }
    }
}
