use ratatui::{
    layout::{Constraint, Flex, Layout},
    prelude::{Buffer, Rect},
    style::Style,
    text::{Line, Text},
    widgets::{Clear, Widget},
};

use crate::view::style;

/// A short centered message drawn over the field.
#[derive(Debug, Clone, Copy)]
pub struct PromptDisplay {
    title: &'static str,
    hint: &'static str,
    title_style: Style,
}

impl PromptDisplay {
    pub fn welcome() -> Self {
        Self {
            title: "STACKFALL",
            hint: "press space to start",
            title_style: style::PROMPT,
        }
    }

    pub fn game_over() -> Self {
        Self {
            title: "GAME OVER",
            hint: "space: restart  q: quit",
            title_style: style::GAME_OVER,
        }
    }

    fn text(self) -> Text<'static> {
        Text::from(vec![
            Line::styled(self.title, self.title_style),
            Line::default(),
            Line::styled(self.hint, style::DEFAULT),
        ])
        .centered()
    }
}

impl Widget for PromptDisplay {
    #[expect(clippy::cast_possible_truncation)]
    fn render(self, area: Rect, buf: &mut Buffer) {
        let text = self.text();
        let width = text.width() as u16 + 2;
        let height = text.height() as u16 + 2;
        let [area] = Layout::horizontal([Constraint::Length(width)])
            .flex(Flex::Center)
            .areas(area);
        let [area] = Layout::vertical([Constraint::Length(height)])
            .flex(Flex::Center)
            .areas(area);

        Clear.render(area, buf);
        buf.set_style(area, style::DEFAULT);
        let [inner] = Layout::vertical([Constraint::Length(height - 2)])
            .flex(Flex::Center)
            .areas(area);
        text.render(inner, buf);
    }
}
