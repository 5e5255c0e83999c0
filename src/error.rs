use std::fmt;

use crate::provider::ProviderError;

pub type Result<T> = std::result::Result<T, Error>;

// The HTTP layer maps each kind to a status code and a client message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    MissingInput,
    InvalidBody,
    BodyTooLarge,
    UpstreamFormat,
    UpstreamCall,
}

impl ErrorKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::MissingInput => "missing_input",
            Self::InvalidBody => "invalid_body",
            Self::BodyTooLarge => "body_too_large",
            Self::UpstreamFormat => "upstream_format",
            Self::UpstreamCall => "upstream_call",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("no file or topic provided")]
    MissingInput,

    #[error("invalid request body: {0}")]
    InvalidBody(String),

    #[error("request body too large: {0}")]
    BodyTooLarge(String),

    // raw is only ever logged
    #[error("model reply is not a JSON object: {source}")]
    UpstreamFormat {
        raw: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("completion call failed: {0}")]
    UpstreamCall(#[from] ProviderError),
}

impl Error {
    pub fn invalid_body(message: impl fmt::Display) -> Self {
        Self::InvalidBody(message.to_string())
    }

    pub fn body_too_large(message: impl fmt::Display) -> Self {
        Self::BodyTooLarge(message.to_string())
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::MissingInput => ErrorKind::MissingInput,
            Self::InvalidBody(_) => ErrorKind::InvalidBody,
            Self::BodyTooLarge(_) => ErrorKind::BodyTooLarge,
            Self::UpstreamFormat { .. } => ErrorKind::UpstreamFormat,
            Self::UpstreamCall(_) => ErrorKind::UpstreamCall,
        }
    }
}
