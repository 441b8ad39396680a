use thiserror::Error;

pub type Result<T> = std::result::Result<T, OpenCollectiveError>;

#[derive(Debug, Error)]
pub enum OpenCollectiveError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("{endpoint} returned status {status}: {message}")]
    Api {
        endpoint: String,
        status: u16,
        message: String,
    },

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("GraphQL error: {0}")]
    Graphql(String),
}

impl From<reqwest::Error> for OpenCollectiveError {
    fn from(err: reqwest::Error) -> Self {
        OpenCollectiveError::Network(err.to_string())
    }
}

impl From<serde_json::Error> for OpenCollectiveError {
    fn from(err: serde_json::Error) -> Self {
        OpenCollectiveError::Parse(err.to_string())
    }
}
