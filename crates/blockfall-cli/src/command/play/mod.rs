use std::time::Duration;

use blockfall_engine::{Engine, PieceSeed};

use crate::{command::play::app::PlayApp, tui::Runtime};

mod app;

/// Gravity interval of the fixed rules.
const TICK_INTERVAL: Duration = Duration::from_millis(200);

#[derive(Debug, Clone, clap::Args)]
pub(crate) struct PlayArg {
    /// Seed for the piece sequence (random when omitted)
    ///
    /// Replays the same sequence of pieces for debugging or reproducing a
    /// game. The rules of play are not affected.
    #[clap(long)]
    pub(super) seed: Option<u64>,
}

pub(crate) fn run(arg: &PlayArg) -> anyhow::Result<()> {
    let PlayArg { seed } = arg;

    let engine = match seed {
        Some(seed) => Engine::with_seed(PieceSeed::from(*seed)),
        None => Engine::new(),
    };
    let mut app = PlayApp::new(engine, TICK_INTERVAL);

    Runtime::new().run(&mut app)?;

    if let Some(score) = app.final_score() {
        println!("Game Over! Your Score is {score}");
    }
    Ok(())
}
