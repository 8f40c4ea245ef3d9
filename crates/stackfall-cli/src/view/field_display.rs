use std::iter;

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Flex, Layout, Rect},
    widgets::{Block as BlockWidget, BlockExt, Widget},
};
use stackfall_engine::{FIELD_HEIGHT, FIELD_WIDTH, Grid};

use crate::view::CellDisplay;

/// Draws a display grid.
#[derive(Debug)]
pub struct FieldDisplay<'a> {
    grid: &'a Grid,
    show_dots: bool,
    block: Option<BlockWidget<'a>>,
}

impl<'a> FieldDisplay<'a> {
    pub fn new(grid: &'a Grid) -> Self {
        Self {
            grid,
            show_dots: true,
            block: None,
        }
    }

    pub fn show_dots(self, show_dots: bool) -> Self {
        Self { show_dots, ..self }
    }

    pub fn block(self, block: BlockWidget<'a>) -> Self {
        Self {
            block: Some(block),
            ..self
        }
    }

    #[expect(clippy::cast_possible_truncation)]
    pub fn width(&self) -> u16 {
        FIELD_WIDTH as u16 * CellDisplay::width()
            + super::block_horizontal_margin(self.block.as_ref())
    }

    #[expect(clippy::cast_possible_truncation)]
    pub fn height(&self) -> u16 {
        FIELD_HEIGHT as u16 * CellDisplay::height()
            + super::block_vertical_margin(self.block.as_ref())
    }
}

impl Widget for FieldDisplay<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        self.block.as_ref().render(area, buf);
        let area = self.block.inner_if_some(area);

        let col_constraints = (0..FIELD_WIDTH).map(|_| Constraint::Length(CellDisplay::width()));
        let row_constraints = (0..FIELD_HEIGHT).map(|_| Constraint::Length(CellDisplay::height()));
        let horizontal = Layout::horizontal(col_constraints).flex(Flex::Center);
        let vertical = Layout::vertical(row_constraints);

        let grid_cells = area
            .layout::<FIELD_HEIGHT>(&vertical)
            .into_iter()
            .map(|row| row.layout::<FIELD_WIDTH>(&horizontal));

        for (grid_row, row) in iter::zip(grid_cells, self.grid.rows()) {
            for (grid_cell, cell) in iter::zip(grid_row, row) {
                CellDisplay::from_cell(*cell, self.show_dots).render(grid_cell, buf);
            }
        }
    }
}
