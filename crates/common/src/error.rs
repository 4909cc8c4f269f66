// crates/common/src/error.rs
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Enter all values.")]
    MissingInput,
    
    #[error("Invalid input: {0}")]
    InvalidInput(String),
    
    #[error("Panel already mounted")]
    AlreadyMounted,
    
    #[error("Configuration error: {0}")]
    Config(String),
}

impl Error {
    /// Errors caused by what the user typed, shown verbatim in the panel
    pub fn is_user_facing(&self) -> bool {
        matches!(self, Error::MissingInput | Error::InvalidInput(_))
    }
}
