use std::{
    io::{self, Write},
    time::Duration,
};

use crossterm::{event::Event, style::Print};
use ratatui::{
    Frame,
    layout::{Constraint, Flex, Layout},
    widgets::{Block as BlockWidget, Borders},
};
use stackfall_engine::{GameController, GameState, PieceSource, ShapeGenerator};

use crate::{
    play::{
        input::{self, Action},
        presenter::TerminalPresenter,
    },
    tui::{App, Runtime},
    view::{FieldDisplay, KeyBindingDisplay, PromptDisplay, StatusDisplay, style},
};

/// The interactive game: routes ticks and keys into the controller and draws its frames.
#[derive(Debug)]
pub struct PlayApp<S = ShapeGenerator, W = io::Stdout> {
    game: GameController<TerminalPresenter, S>,
    tick_interval: Duration,
    show_dots: bool,
    bell: W,
    is_exiting: bool,
}

impl<S> PlayApp<S>
where
    S: PieceSource,
{
    pub fn new(source: S, tick_interval: Duration, show_dots: bool) -> Self {
        Self::with_bell(source, tick_interval, show_dots, io::stdout())
    }
}

impl<S, W> PlayApp<S, W>
where
    S: PieceSource,
    W: Write,
{
    pub fn with_bell(source: S, tick_interval: Duration, show_dots: bool, bell: W) -> Self {
        Self {
            game: GameController::new(TerminalPresenter::new(), source),
            tick_interval,
            show_dots,
            bell,
            is_exiting: false,
        }
    }

    pub fn game(&self) -> &GameController<TerminalPresenter, S> {
        &self.game
    }

    fn apply(&mut self, action: Action) {
        match action {
            Action::Play(intent) => _ = self.game.on_input(intent),
            Action::Start if !self.game.state().is_running() => _ = self.game.restart(),
            Action::Start => {}
            Action::Quit => self.is_exiting = true,
        }
    }

    fn ring_bell_if_requested(&mut self) {
        if self.game.presenter_mut().take_bell() {
            // Write errors are ignored; the bell is optional.
            _ = crossterm::execute!(self.bell, Print('\x07'));
        }
    }
}

impl<S, W> App for PlayApp<S, W>
where
    S: PieceSource,
    W: Write,
{
    fn init(&mut self, runtime: &mut Runtime) {
        runtime.set_tick_interval(Some(self.tick_interval));
    }

    fn should_exit(&self) -> bool {
        self.is_exiting
    }

    fn handle_event(&mut self, _runtime: &mut Runtime, event: Event) {
        if let Some(key) = event.as_key_press_event()
            && let Some(action) = input::action_for_key(key)
        {
            self.apply(action);
            self.ring_bell_if_requested();
        }
    }

    fn draw(&self, frame: &mut Frame) {
        let presenter = self.game.presenter();
        let state = self.game.state();

        let border_style = if presenter.is_rejected() {
            style::BORDER_REJECTED
        } else {
            style::BORDER
        };
        let field = FieldDisplay::new(presenter.frame())
            .show_dots(self.show_dots)
            .block(
                BlockWidget::new()
                    .borders(Borders::ALL)
                    .border_style(border_style),
            );
        let status = StatusDisplay::new(
            state,
            self.game.locked_pieces(),
            self.game.cleared_rows(),
        )
        .rejected(presenter.is_rejected());
        let help = KeyBindingDisplay::new(input::KEY_BINDINGS);

        let [field_area, status_area, help_area] = Layout::vertical([
            Constraint::Length(field.height()),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .flex(Flex::Center)
        .areas(frame.area());
        let [field_area] = Layout::horizontal([Constraint::Length(field.width())])
            .flex(Flex::Center)
            .areas(field_area);

        frame.render_widget(field, field_area);
        frame.render_widget(status, status_area);
        frame.render_widget(help, help_area);

        match state {
            GameState::NotStarted => frame.render_widget(PromptDisplay::welcome(), field_area),
            GameState::GameOver => frame.render_widget(PromptDisplay::game_over(), field_area),
            GameState::Running => {}
        }
    }

    fn update(&mut self, _runtime: &mut Runtime) {
        self.game.on_tick();
        self.ring_bell_if_requested();
    }
}
