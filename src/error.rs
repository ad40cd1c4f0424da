use thiserror::Error;

pub type Result<T> = std::result::Result<T, StashError>;

#[derive(Error, Debug)]
pub enum StashError {
    #[error("Expiration is outside the representable date range")]
    ExpirationOutOfRange,
    #[error("Clipboard error: {0}")]
    Clipboard(#[from] arboard::Error),
}
