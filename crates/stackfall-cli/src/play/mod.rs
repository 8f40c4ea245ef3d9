use std::{path::PathBuf, time::Duration};

use stackfall_engine::{ShapeGenerator, ShapeSeed};

use crate::{summary::SessionSummary, tui::Runtime};

use self::app::PlayApp;

mod app;
mod input;
mod presenter;

#[derive(Debug, Clone, clap::Args)]
pub(crate) struct PlayArg {
    /// Milliseconds between gravity ticks
    #[clap(long, default_value_t = 500, value_parser = clap::value_parser!(u64).range(1..))]
    tick_ms: u64,
    /// Seed for the piece sequence (32 hex characters); random when omitted
    #[clap(long)]
    seed: Option<ShapeSeed>,
    /// Write a JSON summary of the session to this file on exit
    #[clap(long, value_name = "FILE")]
    save_summary: Option<PathBuf>,
    /// Draw empty cells as blanks instead of dots
    #[clap(long)]
    no_dots: bool,
}

pub(crate) fn run(arg: &PlayArg) -> anyhow::Result<()> {
    let PlayArg {
        tick_ms,
        seed,
        save_summary,
        no_dots,
    } = arg;

    let generator = seed.map_or_else(ShapeGenerator::new, ShapeGenerator::with_seed);
    let mut app = PlayApp::new(generator, Duration::from_millis(*tick_ms), !no_dots);
    Runtime::new().run(&mut app)?;

    if let Some(path) = save_summary {
        SessionSummary::from_game(app.game()).save(path)?;
        println!("Summary saved to {}", path.display());
    }
    Ok(())
}
