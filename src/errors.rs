use reqwest::StatusCode;
use thiserror::Error;

#[derive(Debug, Clone, Error)]
pub enum ApiError {
    #[error("{status} {status_text}")]
    RateLimited { status: u16, status_text: String },
    #[error("{detail}")]
    Transport { detail: String },
}

impl ApiError {
    pub fn rate_limited(status: StatusCode) -> Self {
        Self::RateLimited {
            status: status.as_u16(),
            status_text: status.canonical_reason().unwrap_or_default().to_string(),
        }
    }

    pub fn transport(detail: impl Into<String>) -> Self {
        Self::Transport {
            detail: detail.into(),
        }
    }

    pub fn unexpected_status(status: StatusCode) -> Self {
        Self::transport(format!("server responded with {status}"))
    }

    /// Text shown to the user when an increment does not go through.
    pub fn notice(&self) -> String {
        match self {
            Self::RateLimited {
                status,
                status_text,
            } => format!("No cheating is allowed!\n\n(Got response: {status} {status_text})"),
            Self::Transport { detail } => format!("Error during RPC call!\n\n{detail}"),
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid COUNTER_URL {value:?}: {reason}")]
    InvalidUrl { value: String, reason: String },
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        Self::transport(err.to_string())
    }
}
