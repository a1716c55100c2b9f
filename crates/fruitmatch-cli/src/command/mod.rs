use std::{io, path::PathBuf};

use clap::{Parser, Subcommand};
use fruitmatch_engine::{BoardSeed, SessionConfig};
use tracing_subscriber::EnvFilter;

use crate::util;

use self::{auto_play::AutoPlayArg, show::ShowArg};

mod auto_play;
mod show;

#[derive(Debug, Clone, Parser)]
#[command(author, version, about, long_about = None)]
pub struct CommandArgs {
    /// What mode to run the program in
    #[command(subcommand)]
    mode: Option<Mode>,
}

#[derive(Debug, Clone, Subcommand)]
enum Mode {
    /// Deal a board and print it
    Show(#[clap(flatten)] ShowArg),
    /// Play timed games with a scripted player and record the results
    AutoPlay(#[clap(flatten)] AutoPlayArg),
}

/// Options shared by every mode that deals a board.
#[derive(Default, Debug, Clone, clap::Args)]
pub(crate) struct BoardArg {
    /// Seed for fruit generation, as 16 hex digits (random if omitted)
    #[arg(long)]
    seed: Option<BoardSeed>,
    /// Board edge, clamped into 6..=8 (defaults to the configured size)
    #[arg(long)]
    grid_size: Option<usize>,
    /// Session configuration file (JSON)
    #[arg(long)]
    config: Option<PathBuf>,
}

impl BoardArg {
    fn load_config(&self) -> anyhow::Result<SessionConfig> {
        let Some(path) = &self.config else {
            return Ok(SessionConfig::default());
        };
        let config: SessionConfig = util::read_json_file("config", path)?;
        config.validate()?;
        Ok(config)
    }

    fn seed(&self) -> BoardSeed {
        self.seed.unwrap_or_else(rand::random)
    }
}

pub fn run() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(io::stderr)
        .init();

    let args = CommandArgs::parse();
    match args.mode.unwrap_or(Mode::Show(ShowArg::default())) {
        Mode::Show(arg) => show::run(&arg)?,
        Mode::AutoPlay(arg) => auto_play::run(&arg)?,
    }
    Ok(())
}
