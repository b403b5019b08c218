#[derive(Debug, thiserror::Error, Clone, PartialEq)]
pub enum Error {
    #[error("{0}")]
    ReqwestError(String),
    #[error("Unknown authentication scheme: {0}")]
    UnknownAuthScheme(String),
    #[error("Unknown content type: {0}")]
    UnknownContentType(String),
}

impl From<reqwest::Error> for Error {
    fn from(error: reqwest::Error) -> Self {
        Error::ReqwestError(error.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
