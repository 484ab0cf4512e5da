use crate::config::Config;
use aockit_core::Grid;
use aockit_providers::session::SESSION_ENV_VAR;
use aockit_providers::{PuzzleClient, PuzzleId, Session};
use clap::{Parser, Subcommand};
use color_eyre::eyre::{Result, WrapErr};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "aockit", about = "Fetch, parse and check Advent of Code puzzles")]
pub struct Args {
    /// File holding the session token
    #[arg(long, global = true)]
    pub session: Option<PathBuf>,

    /// Root directory of the download cache
    #[arg(long, global = true)]
    pub cache_dir: Option<PathBuf>,

    /// Log debug output to the terminal
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(clap::Args, Debug, Clone, Copy)]
pub struct PuzzleArgs {
    /// Event year, defaults to the most recent event
    #[arg(short, long)]
    pub year: Option<u16>,

    /// Day of the puzzle (1-25)
    pub day: u8,
}

impl PuzzleArgs {
    pub fn puzzle_id(&self) -> Result<PuzzleId> {
        let year = self.year.unwrap_or_else(PuzzleId::latest_year);
        Ok(PuzzleId::new(year, self.day)?)
    }
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Download puzzle input and instructions into the cache
    Fetch {
        #[command(flatten)]
        puzzle: PuzzleArgs,

        /// Download again even when cached
        #[arg(long)]
        overwrite: bool,
    },
    /// Print the code block that follows some text in the instructions
    Extract {
        #[command(flatten)]
        puzzle: PuzzleArgs,

        /// Text preceding the wanted block, e.g. "For example:"
        #[arg(long)]
        after: String,
    },
    /// Summarise the puzzle input as a character grid
    Grid {
        #[command(flatten)]
        puzzle: PuzzleArgs,
    },
}

/// Session precedence: `--session`, then `AOC_SESSION`, then the config
/// file's `session_file`, then the default session file.
pub fn resolve_session(args: &Args, config: &Config) -> Result<Session> {
    if let Some(path) = &args.session {
        return Session::from_file(Some(path.as_path()))
            .wrap_err_with(|| format!("Could not read session from {}", path.display()));
    }
    if let Ok(session) = Session::from_env() {
        log::debug!("Using session from {}", SESSION_ENV_VAR);
        return Ok(session);
    }
    Session::from_file(config.session_file.as_deref())
        .wrap_err("Could not load a session token; pass --session or set AOC_SESSION")
}

pub fn build_client(args: &Args, config: &Config) -> Result<PuzzleClient> {
    let cache_dir = args
        .cache_dir
        .clone()
        .unwrap_or_else(|| config.cache_dir.clone());
    let mut client = PuzzleClient::new(resolve_session(args, config)?).with_cache_root(cache_dir);
    if let Some(base_url) = &config.base_url {
        client = client.with_base_url(base_url.as_str());
    }
    Ok(client)
}

pub async fn run(args: Args, config: Config) -> Result<()> {
    let client = build_client(&args, &config)?;

    match args.command {
        Command::Fetch { puzzle, overwrite } => {
            let id = puzzle.puzzle_id()?;
            client.download_input(id, overwrite).await?;
            client.download_instructions(id, overwrite).await?;
            println!("{}", client.input_path(id).display());
            println!("{}", client.instructions_path(id).display());
        }
        Command::Extract { puzzle, after } => {
            let id = puzzle.puzzle_id()?;
            let value = client.value_after(id, &after).await?;
            println!("{}", value);
        }
        Command::Grid { puzzle } => {
            let id = puzzle.puzzle_id()?;
            let grid = client.input(id).await?.char_grid();
            print!("{}", summarize(&grid));
        }
    }

    Ok(())
}

/// Shape, then one line per distinct cell: value, count, first position.
pub fn summarize(grid: &Grid<char>) -> String {
    let (width, height) = grid.shape();
    let mut out = format!("{}x{}\n", width, height);
    let positions = grid.element_positions();
    for (value, count) in grid.value_counts() {
        let first = positions
            .get(&value)
            .and_then(|p| p.first())
            .map(|(x, y)| format!("({}, {})", x, y))
            .unwrap_or_default();
        out.push_str(&format!("{:?}\t{}\t{}\n", value, count, first));
    }
    out
}
