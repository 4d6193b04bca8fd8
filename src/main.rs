use std::{
    io::{self, BufRead, Write},
    sync::Arc,
};

use acquire_engine::{
    logic::{
        acquire_request::AcquireRequest, acquire_response::AcquireResponse, errors::Rejection,
        game_config::GameConfig,
    },
    session::{
        identity::{TokenEntry, TokenTable},
        lobby::Lobby,
    },
};
use anyhow::{Context, Result};
use log::{info, warn, LevelFilter};
use structopt::StructOpt;

/// Serves Acquire games over newline-delimited JSON on stdin and stdout.
#[derive(Debug, structopt::StructOpt)]
struct Opt {
    /// Accepted identity, as token=user_id:Display Name. Repeatable.
    #[structopt(short = "-i", long = "identity")]
    identities: Vec<TokenEntry>,

    /// Seed for tile draws. Random when omitted.
    #[structopt(short = "-s", long)]
    seed: Option<u64>,

    #[structopt(short = "-l", long, default_value = "info")]
    log_level: LevelFilter,

    /// Tiles held by each player.
    #[structopt(long)]
    tiles_per_hand: Option<usize>,

    /// Do not place a starting tile per player.
    #[structopt(long)]
    no_seed_board: bool,

    /// Do not award a share to whoever founds a chain.
    #[structopt(long)]
    no_founder_share: bool,
}

impl Opt {
    fn game_config(&self) -> GameConfig {
        let defaults = GameConfig::default();
        GameConfig::builder()
            .tiles_per_hand(self.tiles_per_hand.unwrap_or(defaults.tiles_per_hand))
            .seed_board(!self.no_seed_board)
            .founder_share(!self.no_founder_share)
            .build()
    }
}

fn init_logging(level: LevelFilter) -> Result<()> {
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(LevelFilter::Off)
        .set_target_level(LevelFilter::Off)
        .set_thread_level(LevelFilter::Off)
        .build();
    simplelog::TermLogger::init(
        level,
        config,
        simplelog::TerminalMode::Stderr,
        simplelog::ColorChoice::Auto,
    )
    .context("initialize logger")
}

fn main() -> Result<()> {
    let opt = Opt::from_args();
    init_logging(opt.log_level)?;

    let config = opt.game_config();
    config.validate().context("rule overrides")?;
    let seed = opt.seed.unwrap_or_else(rand::random);
    let tokens: TokenTable = opt.identities.into_iter().collect();
    if tokens.is_empty() {
        warn!("no identities configured, every mutating request will be refused");
    }
    info!("serving with seed {} and {} identities", seed, tokens.len());

    let lobby = Lobby::new(Arc::new(tokens), seed, config);

    let stdin = io::stdin();
    let mut stdout = io::stdout().lock();
    for line in stdin.lock().lines() {
        let line = line.context("read request")?;
        if line.trim().is_empty() {
            continue;
        }

        let response = match serde_json::from_str::<AcquireRequest>(&line) {
            Ok(request) => lobby.dispatch(request),
            Err(err) => AcquireResponse::from(Rejection::Malformed(err.to_string())),
        };

        serde_json::to_writer(&mut stdout, &response).context("write response")?;
        writeln!(stdout).context("write response")?;
        stdout.flush().context("flush response")?;
    }

    Ok(())
}
