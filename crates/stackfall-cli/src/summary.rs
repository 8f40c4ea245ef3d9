use std::{
    fs::File,
    io::{BufWriter, Write as _},
    path::Path,
};

use anyhow::Context;
use serde::{Deserialize, Serialize};
use stackfall_engine::{GameController, GameState, Grid, Presenter, ShapeGenerator, ShapeSeed};

/// How the session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FinalState {
    NotStarted,
    Running,
    GameOver,
}

impl From<GameState> for FinalState {
    fn from(state: GameState) -> Self {
        match state {
            GameState::NotStarted => Self::NotStarted,
            GameState::Running => Self::Running,
            GameState::GameOver => Self::GameOver,
        }
    }
}

/// Session summary written on exit with `--save-summary`.
///
/// The seed is enough to replay the same piece sequence with `--seed`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionSummary {
    pub seed: ShapeSeed,
    pub state: FinalState,
    pub locked_pieces: usize,
    pub cleared_rows: usize,
    pub field: Grid,
}

impl SessionSummary {
    pub fn from_game<P>(game: &GameController<P, ShapeGenerator>) -> Self
    where
        P: Presenter,
    {
        Self {
            seed: game.source().seed(),
            state: game.state().into(),
            locked_pieces: game.locked_pieces(),
            cleared_rows: game.cleared_rows(),
            field: game.locked_field().clone(),
        }
    }

    pub fn save(&self, path: &Path) -> anyhow::Result<()> {
        let file = File::create(path)
            .with_context(|| format!("failed to create {}", path.display()))?;
        let mut writer = BufWriter::new(file);
        serde_json::to_writer_pretty(&mut writer, self)
            .with_context(|| format!("failed to write summary to {}", path.display()))?;
        writeln!(writer)?;
        writer
            .flush()
            .with_context(|| format!("failed to flush {}", path.display()))?;
        Ok(())
    }
}
