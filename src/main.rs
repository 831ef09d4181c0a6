//! Othello engine CLI
//!
//! Plays one match against a referee speaking the line protocol on
//! stdin/stdout. Logs go to stderr.

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;

use othello::{parse_colour, Coordinator, EngineConfig, GameSession, LineTransport, Strategy};

#[derive(Parser, Debug)]
#[command(name = "othello")]
#[command(about = "Othello engine with distributed alpha-beta search")]
struct Cli {
    /// Colour assigned by the referee (black/white); blank means black
    #[arg(long, env = "OTHELLO_COLOUR")]
    colour: Option<String>,

    /// Worker threads (0 = search on the coordinator only); defaults to cores - 1
    #[arg(long, env = "OTHELLO_WORKERS")]
    workers: Option<usize>,

    /// Move selection strategy
    #[arg(long, value_enum, default_value_t = Strategy::AlphaBeta)]
    strategy: Strategy,

    /// Ceiling on the adaptive search depth
    #[arg(long, env = "OTHELLO_MAX_DEPTH")]
    max_depth: Option<u8>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, env = "OTHELLO_LOG_LEVEL", default_value = "info")]
    log_level: String,
}

fn init_tracing(level: &str) {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(&cli.log_level);

    let colour = parse_colour(cli.colour.as_deref()).context("bad colour assignment")?;

    let mut config = EngineConfig::default()
        .with_strategy(cli.strategy)
        .with_max_depth(cli.max_depth);
    if let Some(workers) = cli.workers {
        config = config.with_workers(workers);
    }

    let coordinator =
        Coordinator::with_config(colour, config).context("failed to start the engine")?;

    let stdin = std::io::stdin().lock();
    let stdout = std::io::stdout();
    let session = GameSession::new(coordinator, LineTransport::new(stdin, stdout));

    let summary = session.run()?;
    info!(
        own_moves = summary.own_moves,
        opponent_moves = summary.opponent_moves,
        black = summary.black_discs,
        white = summary.white_discs,
        "done"
    );
    Ok(())
}
