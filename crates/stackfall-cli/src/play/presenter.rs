use stackfall_engine::{Grid, Presenter};

/// Keeps what the terminal needs to draw the next frame.
///
/// The controller pushes frames here; the app reads them back when the runtime asks for a
/// draw. The bell is only requested here and rung by the app.
#[derive(Debug, Clone, Default)]
pub struct TerminalPresenter {
    frame: Grid,
    rejected: bool,
    bell: bool,
}

impl TerminalPresenter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn frame(&self) -> &Grid {
        &self.frame
    }

    /// Whether the last input was rejected and no frame has been drawn since.
    pub fn is_rejected(&self) -> bool {
        self.rejected
    }

    /// Returns whether a bell was requested, and clears the request.
    pub fn take_bell(&mut self) -> bool {
        std::mem::take(&mut self.bell)
    }
}

impl Presenter for TerminalPresenter {
    fn render(&mut self, display: &Grid) {
        self.frame.clone_from(display);
        self.rejected = false;
    }

    fn rejected(&mut self) {
        self.rejected = true;
        self.bell = true;
    }

    fn game_over(&mut self) {
        self.bell = true;
    }
}

#[cfg(test)]
mod tests {
    use stackfall_engine::Cell;

    use super::*;

    #[test]
    fn test_render_keeps_latest_frame() {
        let mut presenter = TerminalPresenter::new();
        let mut grid = Grid::EMPTY;
        grid.set(3, 4, Cell::Filled);
        presenter.render(&grid);
        assert_eq!(presenter.frame(), &grid);
    }

    #[test]
    fn test_rejected_flashes_until_next_frame() {
        let mut presenter = TerminalPresenter::new();
        presenter.rejected();
        assert!(presenter.is_rejected());
        assert!(presenter.take_bell());
        assert!(!presenter.take_bell());

        presenter.render(&Grid::EMPTY);
        assert!(!presenter.is_rejected());
    }

    #[test]
    fn test_game_over_rings_bell() {
        let mut presenter = TerminalPresenter::new();
        presenter.game_over();
        assert!(presenter.take_bell());
        assert!(!presenter.is_rejected());
    }
}
