use serenity::{all::MessageId, prelude::SerenityError};
use thiserror::Error as ThisError;

pub type GiveawayResult<T> = Result<T, GiveawayError>;

#[derive(Debug, Clone, Eq, PartialEq, ThisError)]
pub enum GiveawayError {
    /// Bad input from the organiser. Nothing was changed.
    #[error("{0}")]
    Validation(&'static str),
    #[error("No giveaway was found with the ID {0}")]
    NotFound(MessageId),
    /// The chat platform could not be reached or the message is gone.
    #[error("{0}")]
    Transport(String),
}

impl From<SerenityError> for GiveawayError {
    fn from(err: SerenityError) -> GiveawayError {
        GiveawayError::Transport(err.to_string())
    }
}
