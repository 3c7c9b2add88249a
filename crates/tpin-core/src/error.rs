use thiserror::Error;

/// Errors produced by the pinned-session engine and its collaborators.
#[derive(Debug, Error)]
pub enum PinError {
    #[error("tmux is not running: {0}")]
    Environment(String),

    #[error("tmux {command} failed: {message}")]
    Multiplexer { command: String, message: String },

    #[error("index {index} out of range (len {len})")]
    OutOfRange { index: usize, len: usize },

    #[error("cursor {cursor} does not address a session (total {total})")]
    IndexInvalid { cursor: usize, total: usize },

    #[error("Session with name '{0}' already existed")]
    NameCollision(String),

    #[error("Session #{slot} not found")]
    SlotOutOfRange { slot: usize },

    #[error("terminal error: {0}")]
    Terminal(String),

    #[error("persistence error: {0}")]
    Persistence(#[from] std::io::Error),
}

impl PinError {
    pub(crate) fn multiplexer(command: &str, message: impl Into<String>) -> Self {
        PinError::Multiplexer {
            command: command.to_string(),
            message: message.into(),
        }
    }
}

pub type PinResult<T> = Result<T, PinError>;
