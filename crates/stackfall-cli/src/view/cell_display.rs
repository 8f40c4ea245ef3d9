use ratatui::{
    prelude::{Buffer, Rect},
    style::Style,
    widgets::{Paragraph, Widget},
};
use stackfall_engine::Cell;

use crate::view::style;

/// One field cell, two terminal columns wide.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellDisplay {
    style: Style,
    symbol: &'static str,
}

impl CellDisplay {
    pub const fn new(style: Style, symbol: &'static str) -> Self {
        Self { style, symbol }
    }

    pub const fn width() -> u16 {
        2
    }

    pub const fn height() -> u16 {
        1
    }

    pub const fn from_cell(cell: Cell, show_dots: bool) -> Self {
        match cell {
            Cell::Empty if show_dots => Self::new(style::EMPTY_DOT, "."),
            Cell::Empty => Self::new(style::EMPTY, ""),
            Cell::Filled => Self::new(style::FILLED, "[]"),
        }
    }
}

impl Widget for CellDisplay {
    fn render(self, area: Rect, buf: &mut Buffer) {
        // Paragraph fills the whole area, not just the cells under the symbol
        Paragraph::new(self.symbol)
            .style(self.style)
            .centered()
            .render(area, buf);
    }
}
