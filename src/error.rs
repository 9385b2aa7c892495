use thiserror::Error;

/// Errors surfaced by digest parsing and distance evaluation.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SynHashError {
    /// Input was not exactly 64 hexadecimal characters.
    #[error("invalid digest format: {0}")]
    InvalidDigestFormat(#[from] hex::FromHexError),
}

pub type Result<T> = std::result::Result<T, SynHashError>;
