use crate::core::{Grid, Move, Piece, ShapeKind};

use super::spawner::{PieceSource, ShapeGenerator};

/// Lifecycle of a game.
///
/// ```text
/// NotStarted ──restart──▶ Running ──spawn collision──▶ GameOver
///                            ▲                            │
///                            └──────────restart───────────┘
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::IsVariant)]
pub enum GameState {
    NotStarted,
    Running,
    GameOver,
}

/// A player intent delivered by the input source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::IsVariant)]
pub enum Intent {
    MoveLeft,
    MoveRight,
    RotateCw,
    RotateCcw,
    SoftDrop,
}

impl Intent {
    #[must_use]
    pub const fn to_move(self) -> Move {
        match self {
            Intent::MoveLeft => Move::Left,
            Intent::MoveRight => Move::Right,
            Intent::RotateCw => Move::RotateCw,
            Intent::RotateCcw => Move::RotateCcw,
            Intent::SoftDrop => Move::Down,
        }
    }
}

/// What a tick or an input did to the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::IsVariant)]
pub enum Outcome {
    /// The game is not running; nothing happened.
    Ignored,
    /// The active piece moved or rotated.
    Moved,
    /// The move was invalid and nothing changed.
    Rejected,
    /// The active piece was locked and a new piece spawned.
    Locked { cleared_rows: usize },
    /// The active piece was locked and the new piece collided with the locked field.
    GameOver { cleared_rows: usize },
}

/// Receives output from the [`GameController`].
///
/// The presentation layer implements this trait and is injected into the controller.
pub trait Presenter {
    /// Called with the display grid after every committed state change.
    fn render(&mut self, display: &Grid);

    /// Called when an input was rejected because the resulting piece would be invalid.
    fn rejected(&mut self) {}

    /// Called when a freshly spawned piece overlaps the locked field.
    ///
    /// The game stays over until [`GameController::restart`] is called.
    fn game_over(&mut self) {}
}

impl Presenter for () {
    fn render(&mut self, _display: &Grid) {}
}

/// Drives a single game: gravity, player input, locking, spawning and game over.
///
/// The controller is advanced only by two entry points, [`Self::on_tick`] and
/// [`Self::on_input`], which must be called one at a time. Every candidate move goes through
/// the same check: the piece must lie within the field and must not overlap the locked field.
///
/// # Example
///
/// ```
/// use stackfall_engine::{GameController, GameState, Intent, ShapeGenerator};
///
/// let mut game = GameController::new((), ShapeGenerator::new());
/// assert_eq!(game.state(), GameState::NotStarted);
///
/// game.restart();
/// assert!(game.state().is_running());
///
/// game.on_input(Intent::RotateCcw);
/// while !game.on_tick().is_locked() {}
/// assert_eq!(game.locked_pieces(), 1);
/// ```
#[derive(Debug, Clone)]
pub struct GameController<P, S = ShapeGenerator> {
    field: Grid,
    active: Piece,
    state: GameState,
    source: S,
    presenter: P,
    locked_pieces: usize,
    cleared_rows: usize,
}

impl<P, S> GameController<P, S>
where
    P: Presenter,
    S: PieceSource,
{
    /// Creates a controller that has not started yet.
    ///
    /// No piece is taken from `source` until the game starts.
    pub fn new(presenter: P, source: S) -> Self {
        Self {
            field: Grid::EMPTY,
            // Replaced by the first spawn.
            active: Piece::new(ShapeKind::O),
            state: GameState::NotStarted,
            source,
            presenter,
            locked_pieces: 0,
            cleared_rows: 0,
        }
    }

    /// Starts a new game on an empty field.
    pub fn restart(&mut self) -> GameState {
        self.start_with_field(Grid::EMPTY)
    }

    /// Starts a new game on a prepared locked field.
    ///
    /// If the first piece already overlaps the field, the game is over immediately.
    pub fn start_with_field(&mut self, field: Grid) -> GameState {
        self.field = field;
        self.locked_pieces = 0;
        self.cleared_rows = 0;
        if self.spawn_next() {
            self.state = GameState::Running;
            self.render();
        } else {
            self.enter_game_over();
        }
        self.state
    }

    /// Applies gravity: moves the active piece down one row, or locks it.
    pub fn on_tick(&mut self) -> Outcome {
        if !self.state.is_running() {
            return Outcome::Ignored;
        }
        let candidate = self.active.moved(Move::Down);
        if self.try_commit(candidate) {
            return Outcome::Moved;
        }
        self.lock_and_spawn()
    }

    /// Applies a player intent.
    ///
    /// An invalid soft drop locks the piece like a tick would. Other invalid intents are
    /// rejected without changing state.
    pub fn on_input(&mut self, intent: Intent) -> Outcome {
        if !self.state.is_running() {
            return Outcome::Ignored;
        }
        let candidate = self.active.moved(intent.to_move());
        if self.try_commit(candidate) {
            return Outcome::Moved;
        }
        if intent.is_soft_drop() {
            return self.lock_and_spawn();
        }
        self.presenter.rejected();
        Outcome::Rejected
    }

    #[must_use]
    pub fn state(&self) -> GameState {
        self.state
    }

    #[must_use]
    pub fn locked_field(&self) -> &Grid {
        &self.field
    }

    #[must_use]
    pub fn active_piece(&self) -> Piece {
        self.active
    }

    /// Number of pieces locked since the game started.
    #[must_use]
    pub fn locked_pieces(&self) -> usize {
        self.locked_pieces
    }

    /// Number of completed rows removed since the game started.
    #[must_use]
    pub fn cleared_rows(&self) -> usize {
        self.cleared_rows
    }

    #[must_use]
    pub fn presenter(&self) -> &P {
        &self.presenter
    }

    pub fn presenter_mut(&mut self) -> &mut P {
        &mut self.presenter
    }

    #[must_use]
    pub fn source(&self) -> &S {
        &self.source
    }

    /// Returns the locked field merged with the active piece.
    #[must_use]
    pub fn display(&self) -> Grid {
        Grid::merge(&self.field, &self.active.rasterize())
    }

    fn is_valid(&self, piece: Piece) -> bool {
        piece.is_within_field() && !Grid::overlaps(&self.field, &piece.rasterize())
    }

    fn try_commit(&mut self, candidate: Piece) -> bool {
        if !self.is_valid(candidate) {
            return false;
        }
        self.active = candidate;
        self.render();
        true
    }

    fn lock_and_spawn(&mut self) -> Outcome {
        self.field = Grid::merge(&self.field, &self.active.rasterize());
        let cleared_rows = self.field.delete_completed_rows();
        self.locked_pieces += 1;
        self.cleared_rows += cleared_rows;

        if !self.spawn_next() {
            self.enter_game_over();
            return Outcome::GameOver { cleared_rows };
        }
        self.render();
        Outcome::Locked { cleared_rows }
    }

    /// Replaces the active piece and returns whether it fits the locked field.
    fn spawn_next(&mut self) -> bool {
        self.active = self.source.next_piece();
        !Grid::overlaps(&self.field, &self.active.rasterize())
    }

    fn enter_game_over(&mut self) {
        self.state = GameState::GameOver;
        self.render();
        self.presenter.game_over();
    }

    fn render(&mut self) {
        assert!(
            self.active.is_within_field(),
            "active piece left the field: {:?}",
            self.active
        );
        let display = self.display();
        self.presenter.render(&display);
    }
}
