use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::{brand::Brand, player::PlayerId, tile::Tile};

/// Coarse classification of a rejection, as reported to the caller.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Serialize, Deserialize)]
pub enum ErrorKind {
    ValidationError,
    TurnViolation,
    RuleViolation,
    ResourceExhausted,
    ConcurrencyConflict,
    InvariantViolation,
}

/// Why an action was refused. A rejected action never changes the game.
#[derive(Debug, PartialEq, Eq, Clone, Error)]
pub enum Rejection {
    #[error("tile {0} is off the board")]
    OutOfBounds(Tile),
    #[error("malformed request: {0}")]
    Malformed(String),
    #[error("no game with id {0}")]
    UnknownGame(String),
    #[error("identity token could not be verified")]
    Unauthenticated,

    #[error("it is not {0}'s turn to act")]
    NotYourTurn(PlayerId),
    #[error("it is your turn, but it is not time to {0}")]
    WrongPhase(&'static str),
    #[error("the game has not started yet")]
    GameNotStarted,
    #[error("the game has already started")]
    GameAlreadyStarted,
    #[error("the game is over")]
    GameOver,
    #[error("{0} is already seated in this game")]
    AlreadySeated(PlayerId),
    #[error("{0} is not seated in this game")]
    NotSeated(PlayerId),
    #[error("cannot start a game with {0} players")]
    PlayerCount(usize),

    #[error("tile {0} is not in your rack")]
    TileNotOwned(Tile),
    #[error("space {0} already has a tile on it")]
    SpaceOccupied(Tile),
    #[error("a brand must be chosen from {options:?}")]
    BrandRequired { options: Vec<Brand> },
    #[error("{0} cannot be chosen for this placement")]
    InvalidBrand(Brand),
    #[error("placing at {0} would merge locked chains")]
    IllegalMerge(Tile),
    #[error("you still hold a playable tile and cannot skip")]
    SkipNotAllowed,

    #[error("{0} has no tiles on the board")]
    BrandInactive(Brand),
    #[error("order exceeds the limit of {limit} shares")]
    OverLimit { limit: u32 },
    #[error("order costs ${needed} but only ${available} is available")]
    InsufficientFunds { needed: u32, available: u32 },
    #[error("only {available} {brand} shares are available")]
    InsufficientShares { brand: Brand, available: u32 },
    #[error("shares must be traded in pairs, got {0}")]
    OddTrade(u32),

    #[error("state changed since revision {expected} (now {actual})")]
    StaleRevision { expected: u64, actual: u64 },
    #[error("internal invariant violated: {0}")]
    Invariant(String),
}

impl Rejection {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Rejection::OutOfBounds(_)
            | Rejection::Malformed(_)
            | Rejection::UnknownGame(_)
            | Rejection::Unauthenticated => ErrorKind::ValidationError,

            Rejection::NotYourTurn(_)
            | Rejection::WrongPhase(_)
            | Rejection::GameNotStarted
            | Rejection::GameAlreadyStarted
            | Rejection::GameOver
            | Rejection::AlreadySeated(_)
            | Rejection::NotSeated(_)
            | Rejection::PlayerCount(_) => ErrorKind::TurnViolation,

            Rejection::TileNotOwned(_)
            | Rejection::SpaceOccupied(_)
            | Rejection::BrandRequired { .. }
            | Rejection::InvalidBrand(_)
            | Rejection::IllegalMerge(_)
            | Rejection::SkipNotAllowed
            | Rejection::BrandInactive(_)
            | Rejection::OddTrade(_) => ErrorKind::RuleViolation,

            Rejection::OverLimit { .. }
            | Rejection::InsufficientFunds { .. }
            | Rejection::InsufficientShares { .. } => ErrorKind::ResourceExhausted,

            Rejection::StaleRevision { .. } => ErrorKind::ConcurrencyConflict,
            Rejection::Invariant(_) => ErrorKind::InvariantViolation,
        }
    }

    /// Machine readable name of the failure.
    pub fn code(&self) -> &'static str {
        match self {
            Rejection::OutOfBounds(_) => "OutOfBounds",
            Rejection::Malformed(_) => "Malformed",
            Rejection::UnknownGame(_) => "UnknownGame",
            Rejection::Unauthenticated => "Unauthenticated",
            Rejection::NotYourTurn(_) => "NotYourTurn",
            Rejection::WrongPhase(_) => "WrongPhase",
            Rejection::GameNotStarted => "GameNotStarted",
            Rejection::GameAlreadyStarted => "GameAlreadyStarted",
            Rejection::GameOver => "GameOver",
            Rejection::AlreadySeated(_) => "AlreadySeated",
            Rejection::NotSeated(_) => "NotSeated",
            Rejection::PlayerCount(_) => "PlayerCount",
            Rejection::TileNotOwned(_) => "TileNotOwned",
            Rejection::SpaceOccupied(_) => "SpaceOccupied",
            Rejection::BrandRequired { .. } => "BrandRequired",
            Rejection::InvalidBrand(_) => "InvalidBrand",
            Rejection::IllegalMerge(_) => "IllegalMerge",
            Rejection::SkipNotAllowed => "SkipNotAllowed",
            Rejection::BrandInactive(_) => "BrandInactive",
            Rejection::OverLimit { .. } => "OverLimit",
            Rejection::InsufficientFunds { .. } => "InsufficientFunds",
            Rejection::InsufficientShares { .. } => "InsufficientShares",
            Rejection::OddTrade(_) => "OddTrade",
            Rejection::StaleRevision { .. } => "StaleRevision",
            Rejection::Invariant(_) => "Invariant",
        }
    }
}
