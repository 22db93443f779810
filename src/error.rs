use thiserror::Error;

#[derive(Error, Debug)]
pub enum MarqueeError {
    /// Input rejected locally, before any request is made
    #[error("{0}")]
    Validation(String),

    /// The service answered `Response: "False"`; carries its literal `Error` text
    #[error("{0}")]
    NotFound(String),

    /// Network, HTTP or decoding failure; carries the underlying message
    #[error("{0}")]
    Transport(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML parse error: {0}")]
    YamlParse(#[from] serde_yaml_ng::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("configuration error: {0}")]
    Config(String),
}

impl From<reqwest::Error> for MarqueeError {
    fn from(err: reqwest::Error) -> Self {
        // The request URL carries the API key
        MarqueeError::Transport(err.without_url().to_string())
    }
}

impl MarqueeError {
    /// Errors produced by the remote lookup client rather than local input or setup
    pub fn is_remote(&self) -> bool {
        matches!(self, MarqueeError::NotFound(_) | MarqueeError::Transport(_))
    }
}

pub type Result<T> = std::result::Result<T, MarqueeError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_remote_messages_are_literal() {
        let err = MarqueeError::NotFound("Movie not found!".to_string());
        assert_eq!(err.to_string(), "Movie not found!");

        let err = MarqueeError::Transport("connection refused".to_string());
        assert_eq!(err.to_string(), "connection refused");
    }

    #[test]
    fn test_is_remote() {
        assert!(MarqueeError::NotFound("x".to_string()).is_remote());
        assert!(MarqueeError::Transport("x".to_string()).is_remote());
        assert!(!MarqueeError::Validation("x".to_string()).is_remote());
        assert!(!MarqueeError::Config("x".to_string()).is_remote());
    }
}
