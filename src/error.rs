use thiserror::Error;

/// Crate-wide result type alias.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised outside the arithmetic itself.
///
/// Non-finite forces from coincident particles are not errors; they are
/// carried through the particle field unchanged.
#[derive(Debug, Error)]
pub enum Error {
    /// Particle count rejected by the harness.
    #[error("{0}")]
    InvalidCount(String),

    /// Unknown or malformed command-line argument.
    #[error("{0}")]
    InvalidArgument(String),

    /// Two particles share a position while duplicates are being rejected.
    #[error("particles {first} and {second} share position ({x}, {y})")]
    DuplicatePosition {
        first: usize,
        second: usize,
        x: f32,
        y: f32,
    },

    /// The position source ran dry before the field was populated.
    #[error("position source exhausted: {requested} samples requested, {supplied} supplied")]
    SourceExhausted { requested: usize, supplied: usize },

    #[error("config parse error: {0}")]
    Config(#[from] toml::de::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("logger already installed: {0}")]
    Logger(#[from] log::SetLoggerError),
}
