use serde::{Deserialize, Serialize};

/// Unified error type for all catalog and detail lookups.
///
/// Every variant is serializable for structured error reporting. Callers are
/// expected to recover locally: log the error, surface it to the user and keep
/// the previously presented data.
///
/// # Error Kinds
///
/// - transport: [`Network`](Self::Network), [`Timeout`](Self::Timeout),
///   [`HttpStatus`](Self::HttpStatus)
/// - decode: [`Decode`](Self::Decode)
/// - not found: [`NotFound`](Self::NotFound)
/// - configuration: [`InvalidConfig`](Self::InvalidConfig)
///
/// See [`FetchError::kind`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "code")]
pub enum FetchError {
    /// A network-level error occurred (DNS resolution failure, connection refused, etc.).
    Network {
        /// Error details.
        detail: String,
    },

    /// The HTTP request timed out at the transport layer.
    Timeout {
        /// Error details.
        detail: String,
    },

    /// The server answered with a non-success HTTP status.
    HttpStatus {
        /// HTTP status code.
        status: u16,
        /// Truncated response body.
        detail: String,
    },

    /// The response body could not be decoded into the expected records.
    Decode {
        /// Details about the decode failure.
        detail: String,
    },

    /// A detail lookup returned an empty result sequence.
    NotFound {
        /// Id that was looked up.
        id: String,
    },

    /// The client could not be constructed (bad base URL, TLS backend failure).
    InvalidConfig {
        /// Error details.
        detail: String,
    },
}

/// Coarse classification of a [`FetchError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchErrorKind {
    Transport,
    Decode,
    NotFound,
    Config,
}

impl FetchError {
    /// Classify the error into one of the coarse kinds.
    #[must_use]
    pub fn kind(&self) -> FetchErrorKind {
        match self {
            Self::Network { .. } | Self::Timeout { .. } | Self::HttpStatus { .. } => {
                FetchErrorKind::Transport
            }
            Self::Decode { .. } => FetchErrorKind::Decode,
            Self::NotFound { .. } => FetchErrorKind::NotFound,
            Self::InvalidConfig { .. } => FetchErrorKind::Config,
        }
    }

    /// Whether the error is an expected outcome (unknown id, flaky network),
    /// used to pick the log level.
    ///
    /// `true` should be logged at `warn`, `false` at `error`.
    /// **Keep in sync when adding variants.**
    #[must_use]
    pub fn is_expected(&self) -> bool {
        matches!(
            self,
            Self::Network { .. } | Self::Timeout { .. } | Self::NotFound { .. }
        )
    }
}

impl std::fmt::Display for FetchError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Network { detail } => write!(f, "Network error: {detail}"),
            Self::Timeout { detail } => write!(f, "Request timeout: {detail}"),
            Self::HttpStatus { status, detail } => {
                if detail.is_empty() {
                    write!(f, "HTTP {status}")
                } else {
                    write!(f, "HTTP {status}: {detail}")
                }
            }
            Self::Decode { detail } => write!(f, "Decode error: {detail}"),
            Self::NotFound { id } => write!(f, "Recipe '{id}' not found"),
            Self::InvalidConfig { detail } => write!(f, "Invalid client configuration: {detail}"),
        }
    }
}

impl std::error::Error for FetchError {}

/// Convenience type alias for `Result<T, FetchError>`.
pub type Result<T> = std::result::Result<T, FetchError>;
