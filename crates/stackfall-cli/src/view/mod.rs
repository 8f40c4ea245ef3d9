//! Widgets that draw the game.

use ratatui::{layout::Rect, widgets::Block as BlockWidget};

pub use self::{
    cell_display::*, field_display::*, key_binding_display::*, prompt_display::*,
    status_display::*,
};

mod cell_display;
mod field_display;
mod key_binding_display;
mod prompt_display;
mod status_display;

mod color {
    use ratatui::style::Color;

    pub const CYAN: Color = Color::Rgb(0, 255, 255);
    pub const RED: Color = Color::Rgb(255, 0, 0);
    pub const GRAY: Color = Color::Rgb(127, 127, 127);
    pub const BLACK: Color = Color::Rgb(0, 0, 0);
    pub const WHITE: Color = Color::Rgb(255, 255, 255);
}

pub mod style {
    use ratatui::style::{Color, Modifier, Style};

    use crate::view::color;

    const fn fg_bg(fg: Color, bg: Color) -> Style {
        Style::new().fg(fg).bg(bg)
    }

    const fn bg_only(color: Color) -> Style {
        Style::new().fg(color).bg(color)
    }

    pub const DEFAULT: Style = fg_bg(color::WHITE, color::BLACK);
    pub const EMPTY: Style = bg_only(color::BLACK);
    pub const EMPTY_DOT: Style = fg_bg(color::GRAY, color::BLACK);
    pub const FILLED: Style = bg_only(color::CYAN);
    pub const BORDER: Style = Style::new().fg(color::GRAY);
    pub const BORDER_REJECTED: Style = Style::new().fg(color::RED);
    pub const PROMPT: Style = fg_bg(color::WHITE, color::BLACK).add_modifier(Modifier::BOLD);
    pub const GAME_OVER: Style = fg_bg(color::RED, color::BLACK).add_modifier(Modifier::BOLD);
}

fn block_vertical_margin(block: Option<&BlockWidget>) -> u16 {
    let dummy_rect = Rect::new(0, 0, 100, 100);
    let inner_rect = block.map_or(dummy_rect, |block| block.inner(dummy_rect));
    dummy_rect.height - inner_rect.height
}

fn block_horizontal_margin(block: Option<&BlockWidget>) -> u16 {
    let dummy_rect = Rect::new(0, 0, 100, 100);
    let inner_rect = block.map_or(dummy_rect, |block| block.inner(dummy_rect));
    dummy_rect.width - inner_rect.width
}
