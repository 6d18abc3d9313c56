use thiserror::Error;

/// Invalid controller configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("initial ship energy must not be negative, got {0}")]
    NegativeShipEnergy(i64),

    #[error("max strength {max_strength} is below the shield floor {floor}")]
    MaxStrengthBelowFloor { max_strength: i64, floor: i64 },
}

/// Errors raised while reading and dispatching console commands.
///
/// The shield itself never fails; these only cover the operator's input
/// and the terminal.
#[derive(Debug, Error)]
pub enum ConsoleError {
    #[error("unknown command: {0}")]
    UnknownCommand(String),

    #[error("{command} requires a value")]
    MissingArgument { command: &'static str },

    #[error("parse error: {0}")]
    ParseError(#[from] std::num::ParseIntError),

    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
}

/// Type alias for Results using ConsoleError
pub type ConsoleResult<T> = Result<T, ConsoleError>;
