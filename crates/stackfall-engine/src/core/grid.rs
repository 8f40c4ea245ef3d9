use std::{fmt, str::FromStr};

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::GridParseError;

use super::{FIELD_HEIGHT, FIELD_WIDTH};

/// A single cell of a [`Grid`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, derive_more::IsVariant)]
pub enum Cell {
    #[default]
    Empty,
    Filled,
}

impl Cell {
    const fn as_char(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::Filled => '#',
        }
    }

    const fn from_char(c: char) -> Option<Self> {
        match c {
            '.' => Some(Cell::Empty),
            '#' => Some(Cell::Filled),
            _ => None,
        }
    }
}

type Row = [Cell; FIELD_WIDTH];

const EMPTY_ROW: Row = [Cell::Empty; FIELD_WIDTH];

/// A field-sized grid of cells.
///
/// The same type serves three roles:
///
/// - the **locked field**, holding cells that have settled
/// - a piece **footprint**, produced by [`Piece::rasterize`](super::Piece::rasterize)
/// - the **display grid**, the union of the two handed to the presentation layer
///
/// Coordinates are `(x, y)` with `x` growing rightward across columns and `y` growing downward
/// across rows. Row 0 is the top of the field.
///
/// # Example
///
/// ```
/// use stackfall_engine::{Cell, Grid};
///
/// let mut locked = Grid::EMPTY;
/// locked.set(0, 19, Cell::Filled);
///
/// let mut footprint = Grid::EMPTY;
/// footprint.set(1, 19, Cell::Filled);
///
/// assert!(!Grid::overlaps(&locked, &footprint));
/// let display = Grid::merge(&locked, &footprint);
/// assert_eq!(display.filled_count(), 2);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    rows: [Row; FIELD_HEIGHT],
}

impl Default for Grid {
    fn default() -> Self {
        Self::EMPTY
    }
}

impl Grid {
    pub const EMPTY: Self = Self {
        rows: [EMPTY_ROW; FIELD_HEIGHT],
    };

    /// Returns whether `(x, y)` lies inside the field.
    #[must_use]
    pub fn contains(x: i32, y: i32) -> bool {
        Self::index(x, y).is_some()
    }

    fn index(x: i32, y: i32) -> Option<(usize, usize)> {
        let x = usize::try_from(x).ok().filter(|&x| x < FIELD_WIDTH)?;
        let y = usize::try_from(y).ok().filter(|&y| y < FIELD_HEIGHT)?;
        Some((x, y))
    }

    #[must_use]
    pub fn cell(&self, x: usize, y: usize) -> Cell {
        self.rows[y][x]
    }

    pub fn set(&mut self, x: usize, y: usize, cell: Cell) {
        self.rows[y][x] = cell;
    }

    /// Fills the cell at signed coordinates, ignoring positions outside the field.
    pub(crate) fn fill_at(&mut self, x: i32, y: i32) {
        if let Some((x, y)) = Self::index(x, y) {
            self.rows[y][x] = Cell::Filled;
        }
    }

    /// Fills every cell of row `y`.
    pub fn fill_row(&mut self, y: usize) {
        self.rows[y] = [Cell::Filled; FIELD_WIDTH];
    }

    /// Returns an iterator over the rows, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Cell; FIELD_WIDTH]> {
        self.rows.iter()
    }

    #[must_use]
    pub fn filled_count(&self) -> usize {
        self.rows
            .iter()
            .flatten()
            .filter(|cell| cell.is_filled())
            .count()
    }

    #[must_use]
    pub fn is_row_completed(&self, y: usize) -> bool {
        self.rows[y].iter().all(|cell| cell.is_filled())
    }

    /// Combines two grids cell by cell.
    ///
    /// Each result cell is `first`'s cell when it is filled, otherwise `second`'s. Pass the
    /// locked field as `first` so that locked cells always survive.
    #[must_use]
    pub fn merge(first: &Self, second: &Self) -> Self {
        let mut merged = first.clone();
        for (dst, src) in merged.rows.iter_mut().flatten().zip(second.rows.iter().flatten()) {
            if dst.is_empty() {
                *dst = *src;
            }
        }
        merged
    }

    /// Returns whether any cell is filled in both grids.
    #[must_use]
    pub fn overlaps(a: &Self, b: &Self) -> bool {
        a.rows
            .iter()
            .flatten()
            .zip(b.rows.iter().flatten())
            .any(|(a, b)| a.is_filled() && b.is_filled())
    }

    /// Removes completed rows and returns how many distinct completed rows there were.
    ///
    /// Rows are scanned bottom to top, stopping before row 0, which is never cleared. When a
    /// completed row is found, every row above it moves down by one and the same index is
    /// examined again. Row 0 keeps its contents, so after a shift it duplicates row 1.
    ///
    /// ```
    /// use stackfall_engine::{Cell, Grid};
    ///
    /// let mut grid = Grid::EMPTY;
    /// grid.fill_row(19);
    /// grid.set(3, 18, Cell::Filled);
    ///
    /// assert_eq!(grid.delete_completed_rows(), 1);
    /// assert_eq!(grid.cell(3, 19), Cell::Filled);
    /// assert_eq!(grid.filled_count(), 1);
    /// ```
    pub fn delete_completed_rows(&mut self) -> usize {
        let completed = (1..FIELD_HEIGHT)
            .filter(|&y| self.is_row_completed(y))
            .count();
        let mut shifts = 0;
        let mut y = FIELD_HEIGHT - 1;
        // A completed row 0 refills the rows below it on every shift, so those copies are
        // not counted and the number of shifts is bounded.
        while y > 0 && shifts < FIELD_HEIGHT {
            if self.is_row_completed(y) {
                self.rows.copy_within(0..y, 1);
                shifts += 1;
            } else {
                y -= 1;
            }
        }
        completed
    }

    pub fn reset(&mut self) {
        *self = Self::EMPTY;
    }
}

/// Draws each filled cell as `[]` and each empty cell as two spaces.
impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (y, row) in self.rows.iter().enumerate() {
            if y > 0 {
                writeln!(f)?;
            }
            for cell in row {
                f.write_str(if cell.is_filled() { "[]" } else { "  " })?;
            }
        }
        Ok(())
    }
}

impl Grid {
    /// Returns the compact text form: `#` for filled, `.` for empty, rows joined by `/`.
    #[must_use]
    pub fn to_compact_string(&self) -> String {
        let mut s = String::with_capacity(FIELD_HEIGHT * (FIELD_WIDTH + 1));
        for (y, row) in self.rows.iter().enumerate() {
            if y > 0 {
                s.push('/');
            }
            s.extend(row.iter().map(|cell| cell.as_char()));
        }
        s
    }
}

impl FromStr for Grid {
    type Err = GridParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lines: Vec<&str> = s.split('/').collect();
        if lines.len() != FIELD_HEIGHT {
            return Err(GridParseError::RowCount {
                expected: FIELD_HEIGHT,
                actual: lines.len(),
            });
        }

        let mut grid = Self::EMPTY;
        for (y, line) in lines.iter().enumerate() {
            let width = line.chars().count();
            if width != FIELD_WIDTH {
                return Err(GridParseError::RowWidth {
                    row: y,
                    expected: FIELD_WIDTH,
                    actual: width,
                });
            }
            for (x, ch) in line.chars().enumerate() {
                grid.rows[y][x] =
                    Cell::from_char(ch).ok_or(GridParseError::InvalidCell { row: y, ch })?;
            }
        }
        Ok(grid)
    }
}

impl Serialize for Grid {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_compact_string())
    }
}

impl<'de> Deserialize<'de> for Grid {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn patterned_row(seed: usize) -> Row {
        let mut row = EMPTY_ROW;
        for (x, cell) in row.iter_mut().enumerate() {
            if (x + seed) % 3 == 0 {
                *cell = Cell::Filled;
            }
        }
        row
    }

    fn checkerboard(parity: usize) -> Grid {
        let mut grid = Grid::EMPTY;
        for y in 0..FIELD_HEIGHT {
            for x in 0..FIELD_WIDTH {
                if (x + y) % 2 == parity {
                    grid.set(x, y, Cell::Filled);
                }
            }
        }
        grid
    }

    #[test]
    fn test_contains_bounds() {
        assert!(Grid::contains(0, 0));
        assert!(Grid::contains(9, 19));
        assert!(!Grid::contains(-1, 0));
        assert!(!Grid::contains(0, -1));
        assert!(!Grid::contains(10, 0));
        assert!(!Grid::contains(0, 20));
    }

    #[test]
    fn test_fill_at_ignores_outside_cells() {
        let mut grid = Grid::EMPTY;
        grid.fill_at(-1, 5);
        grid.fill_at(10, 5);
        grid.fill_at(5, 20);
        assert_eq!(grid, Grid::EMPTY);

        grid.fill_at(5, 19);
        assert_eq!(grid.cell(5, 19), Cell::Filled);
    }

    #[test]
    fn test_merge_prefers_first_grid() {
        let a = checkerboard(0);
        let mut b = Grid::EMPTY;
        b.fill_row(0);
        b.fill_row(1);

        let merged = Grid::merge(&a, &b);
        for y in 0..FIELD_HEIGHT {
            for x in 0..FIELD_WIDTH {
                let expected = if a.cell(x, y).is_filled() {
                    a.cell(x, y)
                } else {
                    b.cell(x, y)
                };
                assert_eq!(merged.cell(x, y), expected, "at ({x}, {y})");
            }
        }
    }

    #[test]
    fn test_merge_with_empty_is_identity() {
        let a = checkerboard(1);
        assert_eq!(Grid::merge(&Grid::EMPTY, &a), a);
        assert_eq!(Grid::merge(&a, &Grid::EMPTY), a);
    }

    #[test]
    fn test_overlaps_is_symmetric() {
        let even = checkerboard(0);
        let odd = checkerboard(1);
        let mut row = Grid::EMPTY;
        row.fill_row(4);

        assert!(!Grid::overlaps(&even, &odd));
        assert!(!Grid::overlaps(&odd, &even));
        assert!(Grid::overlaps(&even, &row));
        assert!(Grid::overlaps(&row, &even));
        assert!(!Grid::overlaps(&even, &Grid::EMPTY));
        assert!(!Grid::overlaps(&Grid::EMPTY, &even));
    }

    #[test]
    fn test_delete_single_completed_row_shifts_rows_above() {
        let mut grid = Grid::EMPTY;
        for y in 1..FIELD_HEIGHT - 1 {
            grid.rows[y] = patterned_row(y);
        }
        grid.fill_row(FIELD_HEIGHT - 1);
        let before = grid.clone();

        assert_eq!(grid.delete_completed_rows(), 1);
        for y in 1..FIELD_HEIGHT {
            assert_eq!(grid.rows[y], before.rows[y - 1], "row {y}");
        }
    }

    #[test]
    fn test_delete_middle_row_keeps_rows_below() {
        let mut grid = Grid::EMPTY;
        grid.rows[19] = patterned_row(0);
        grid.rows[18] = patterned_row(1);
        grid.fill_row(17);
        grid.rows[16] = patterned_row(2);
        let before = grid.clone();

        assert_eq!(grid.delete_completed_rows(), 1);
        assert_eq!(grid.rows[19], before.rows[19]);
        assert_eq!(grid.rows[18], before.rows[18]);
        assert_eq!(grid.rows[17], before.rows[16]);
        assert_eq!(grid.rows[16], EMPTY_ROW);
    }

    #[test]
    fn test_delete_adjacent_completed_rows_cascades() {
        let mut grid = Grid::EMPTY;
        grid.rows[17] = patterned_row(1);
        grid.rows[16] = patterned_row(2);
        grid.fill_row(18);
        grid.fill_row(19);

        assert_eq!(grid.delete_completed_rows(), 2);
        assert_eq!(grid.rows[19], patterned_row(1));
        assert_eq!(grid.rows[18], patterned_row(2));
        assert_eq!(grid.rows[17], EMPTY_ROW);
    }

    #[test]
    fn test_delete_separated_completed_rows() {
        let mut grid = Grid::EMPTY;
        grid.fill_row(19);
        grid.rows[18] = patterned_row(0);
        grid.fill_row(17);
        grid.rows[16] = patterned_row(1);

        assert_eq!(grid.delete_completed_rows(), 2);
        assert_eq!(grid.rows[19], patterned_row(0));
        assert_eq!(grid.rows[18], patterned_row(1));
        assert!(grid.rows[..18].iter().all(|row| *row == EMPTY_ROW));
    }

    #[test]
    fn test_delete_leaves_top_row_as_duplicate() {
        let mut grid = Grid::EMPTY;
        grid.rows[0] = patterned_row(0);
        grid.rows[1] = patterned_row(1);
        grid.fill_row(19);

        assert_eq!(grid.delete_completed_rows(), 1);
        assert_eq!(grid.rows[2], patterned_row(1));
        assert_eq!(grid.rows[1], patterned_row(0));
        assert_eq!(grid.rows[0], patterned_row(0));
    }

    #[test]
    fn test_top_row_is_never_cleared() {
        let mut grid = Grid::EMPTY;
        grid.fill_row(0);

        assert_eq!(grid.delete_completed_rows(), 0);
        assert!(grid.is_row_completed(0));
    }

    #[test]
    fn test_completed_top_row_does_not_loop_forever() {
        let mut grid = Grid::EMPTY;
        grid.fill_row(0);
        grid.fill_row(19);

        assert_eq!(grid.delete_completed_rows(), 1);
    }

    #[test]
    fn test_completed_top_row_copies_are_not_counted() {
        let mut grid = Grid::EMPTY;
        grid.fill_row(0);
        grid.fill_row(17);
        grid.fill_row(19);
        grid.set(4, 18, Cell::Filled);

        assert_eq!(grid.delete_completed_rows(), 2);
        assert!(grid.is_row_completed(0));
    }

    #[test]
    fn test_reset_empties_every_cell() {
        let mut grid = checkerboard(0);
        grid.reset();
        assert_eq!(grid, Grid::EMPTY);
        assert_eq!(grid.filled_count(), 0);
    }

    #[test]
    fn test_display_uses_two_columns_per_cell() {
        let mut grid = Grid::EMPTY;
        grid.set(0, 0, Cell::Filled);
        let text = grid.to_string();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), FIELD_HEIGHT);
        assert_eq!(lines[0], format!("[]{}", "  ".repeat(FIELD_WIDTH - 1)));
        assert_eq!(lines[1], "  ".repeat(FIELD_WIDTH));
    }

    #[test]
    fn test_compact_string_roundtrip() {
        let grid = checkerboard(1);
        let text = grid.to_compact_string();
        assert_eq!(&text[..FIELD_WIDTH], ".#.#.#.#.#");
        assert_eq!(text.parse::<Grid>().unwrap(), grid);
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(
            "..........".parse::<Grid>(),
            Err(GridParseError::RowCount {
                expected: FIELD_HEIGHT,
                actual: 1
            })
        );

        let mut text = Grid::EMPTY.to_compact_string();
        text.replace_range(0..1, "x");
        assert_eq!(
            text.parse::<Grid>(),
            Err(GridParseError::InvalidCell { row: 0, ch: 'x' })
        );

        let text = Grid::EMPTY.to_compact_string().replacen("..........", ".........", 1);
        assert_eq!(
            text.parse::<Grid>(),
            Err(GridParseError::RowWidth {
                row: 0,
                expected: FIELD_WIDTH,
                actual: FIELD_WIDTH - 1
            })
        );
    }

    #[test]
    fn test_serde_uses_compact_string() {
        let mut grid = Grid::EMPTY;
        grid.fill_row(19);
        let json = serde_json::to_string(&grid).unwrap();
        assert_eq!(json, format!("\"{}\"", grid.to_compact_string()));
        assert!(json.ends_with("##########\""));

        let back: Grid = serde_json::from_str(&json).unwrap();
        assert_eq!(back, grid);
        assert!(serde_json::from_str::<Grid>("\"#/#\"").is_err());
    }
}
