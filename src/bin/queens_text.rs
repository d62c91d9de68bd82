//! Queen's Game in the terminal
//!
//! Enter destination coordinates at the prompt to move the queen.

use std::io;

use anyhow::{Context, Result};
use clap::Parser;
use queens::console::Console;
use queens::{GameConfig, Session};

#[derive(Parser, Debug)]
#[command(author, version, about = "Move the queen to the goal before your points run out")]
struct Cli {
    #[command(flatten)]
    game: GameConfig,

    /// Skip the parameter prompt and use the command-line values
    #[arg(long)]
    no_prompt: bool,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .target(env_logger::Target::Stderr)
        .init();

    let cli = Cli::parse();
    let stdin = io::stdin();
    let mut console = Console::new(stdin.lock(), io::stdout());

    let config = if cli.no_prompt {
        cli.game
    } else {
        match console.ask_config(&cli.game)? {
            Some(config) => config,
            None => return Ok(()),
        }
    };

    let mut session = Session::new(config).context("invalid game parameters")?;
    console.run(&mut session)?;
    Ok(())
}
