//! Queen's Game GUI
//!
//! Click the queen, then click a destination on the same row, column or
//! diagonal to move it towards the goal.

use anyhow::Context;
use clap::Parser;
use queens::ui::QueensApp;
use queens::{GameConfig, Session};

#[derive(Parser, Debug)]
#[command(author, version, about = "Move the queen to the goal before your points run out")]
struct Cli {
    #[command(flatten)]
    game: GameConfig,
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Stderr)
        .init();

    let cli = Cli::parse();
    let session = Session::new(cli.game).context("invalid game parameters")?;

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([760.0, 560.0])
            .with_min_inner_size([600.0, 420.0])
            .with_title("Queen's Game"),
        ..Default::default()
    };

    eframe::run_native(
        "Queen's Game",
        options,
        Box::new(|cc| Ok(Box::new(QueensApp::new(cc, session)))),
    )
    .map_err(|err| anyhow::anyhow!("failed to start the window: {err}"))
}
