use thiserror::Error;

#[derive(Error, Debug)]
pub enum AgendaError {
    #[error("Name must start with a letter of the alphabet: {0:?}")]
    InvalidName(String),

    #[error("Invalid phone number (expected 10 digits): {0:?}")]
    InvalidPhone(String),

    #[error("Invalid email: {0:?}")]
    InvalidEmail(String),

    #[error("No bucket for key: {0:?}")]
    InvalidKey(String),

    #[error("Name cannot be empty")]
    EmptyName,

    #[error("No contacts stored under letter {0}")]
    EmptyBucket(char),

    #[error("Contact not found: {0}")]
    NotFound(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Config error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, AgendaError>;
