use ratatui::{
    prelude::{Buffer, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::Widget,
};
use stackfall_engine::GameState;

const LABEL_STYLE: Style = Style::new().fg(Color::DarkGray);
const VALUE_STYLE: Style = Style::new().fg(Color::White);
const REJECTED_STYLE: Style = Style::new().fg(Color::Red);

/// Status line: game state and session counters.
#[derive(Debug, Clone, Copy)]
pub struct StatusDisplay {
    state: GameState,
    locked_pieces: usize,
    cleared_rows: usize,
    rejected: bool,
}

impl StatusDisplay {
    pub fn new(state: GameState, locked_pieces: usize, cleared_rows: usize) -> Self {
        Self {
            state,
            locked_pieces,
            cleared_rows,
            rejected: false,
        }
    }

    pub fn rejected(self, rejected: bool) -> Self {
        Self { rejected, ..self }
    }

    fn state_label(self) -> &'static str {
        match self.state {
            GameState::NotStarted => "Ready",
            GameState::Running => "Playing",
            GameState::GameOver => "Game over",
        }
    }

    fn line(self) -> Line<'static> {
        let mut spans = vec![
            Span::styled(self.state_label(), VALUE_STYLE),
            Span::styled("  Pieces ", LABEL_STYLE),
            Span::styled(self.locked_pieces.to_string(), VALUE_STYLE),
            Span::styled("  Rows ", LABEL_STYLE),
            Span::styled(self.cleared_rows.to_string(), VALUE_STYLE),
        ];
        if self.rejected {
            spans.push(Span::styled("  blocked", REJECTED_STYLE));
        }
        Line::from(spans).centered()
    }
}

impl Widget for StatusDisplay {
    fn render(self, area: Rect, buf: &mut Buffer) {
        self.line().render(area, buf);
    }
}
