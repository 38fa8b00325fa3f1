use thiserror::Error;

pub type Result<T> = std::result::Result<T, GitsumError>;

#[derive(Error, Debug)]
pub enum GitsumError {
    #[error("Not a git repository: {0}")]
    NotARepository(String),
    #[error("git command failed: {0}")]
    GitCommand(String),
    #[error("Invalid date on line {line}: {content:?}")]
    InvalidDate { line: usize, content: String },
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
