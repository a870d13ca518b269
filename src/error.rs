use thiserror::Error;

#[derive(Debug, Error)]
/// Everything that can go wrong while setting up or running a simulation.
pub enum Error {
    /// A simulation parameter was out of range.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// A signed card code that doesn't map to any directive.
    #[error("unknown card code {0}")]
    UnknownCard(i8),

    /// A deck was built with the wrong number of cards.
    #[error("a deck holds exactly {expected} cards, got {found}")]
    DeckSize { expected: usize, found: usize },

    #[error("could not build the worker pool: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("could not start the logger: {0}")]
    Logger(#[from] flexi_logger::FlexiLoggerError),
}

/// Result type alias for convenience.
pub type Result<T> = std::result::Result<T, Error>;
