/// One rotation state of a piece type.
///
/// A geometry is a small rectangular 0/1 pattern. Rows are listed top to bottom and every row
/// has the same length. Nonzero entries are the filled cells of the piece.
///
/// ```
/// use stackfall_engine::Geometry;
///
/// const FLAT_T: Geometry = Geometry::new(&[&[0, 1, 0], &[1, 1, 1]]);
/// assert_eq!(FLAT_T.width(), 3);
/// assert_eq!(FLAT_T.height(), 2);
/// assert_eq!(FLAT_T.filled_count(), 4);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Geometry {
    rows: &'static [&'static [u8]],
}

impl Geometry {
    #[must_use]
    pub const fn new(rows: &'static [&'static [u8]]) -> Self {
        Self { rows }
    }

    #[must_use]
    pub const fn height(&self) -> usize {
        self.rows.len()
    }

    #[must_use]
    pub fn width(&self) -> usize {
        self.rows.first().map_or(0, |row| row.len())
    }

    /// Returns the `(dx, dy)` offsets of the filled cells, row by row.
    #[expect(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
    pub fn filled_cells(&self) -> impl Iterator<Item = (i32, i32)> + use<> {
        let rows = self.rows;
        rows.iter().enumerate().flat_map(|(dy, row)| {
            row.iter()
                .enumerate()
                .filter(|&(_, &cell)| cell != 0)
                .map(move |(dx, _)| (dx as i32, dy as i32))
        })
    }

    #[must_use]
    pub fn filled_count(&self) -> usize {
        self.rows
            .iter()
            .map(|row| row.iter().filter(|&&cell| cell != 0).count())
            .sum()
    }
}
