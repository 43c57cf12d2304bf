use thiserror::Error;

/// Shown when `rank`, `category`, or `pool` is missing after trimming.
pub const REQUIRED_FIELDS_MESSAGE: &str =
    "Please fill in all required fields: Rank, Category, and Gender Pool.";

/// Shown when the rank is present but is not a positive base-10 integer.
pub const RANK_FORMAT_MESSAGE: &str = "Rank must be a positive whole number.";

/// Shown when the request never completed (DNS, refused connection, timeout).
pub const NETWORK_FAILURE_MESSAGE: &str =
    "A network error occurred. Please check your connection and try again.";

/// Terminal failure of one submission.
///
/// Every variant surfaces the same way, as a message in the error surface;
/// none propagate past the controller. The distinction matters for where
/// the submission stopped: `Validation` never reached the network,
/// `Transport` got a response it could not use, `Application` got a
/// well-formed response that explicitly signals failure, and `Network`
/// never got a response at all.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmitError {
    #[error("{0}")]
    Validation(String),
    #[error("{message}")]
    Transport { status: u16, message: String },
    #[error("{0}")]
    Application(String),
    #[error("{0}")]
    Network(String),
}

impl SubmitError {
    pub fn required_fields() -> Self {
        Self::Validation(REQUIRED_FIELDS_MESSAGE.to_string())
    }

    pub fn rank_format() -> Self {
        Self::Validation(RANK_FORMAT_MESSAGE.to_string())
    }

    pub fn network_failure() -> Self {
        Self::Network(NETWORK_FAILURE_MESSAGE.to_string())
    }

    /// Response body was not JSON, whatever the HTTP status said.
    pub fn non_json_response(status: u16) -> Self {
        Self::Transport {
            status,
            message: format!("Server returned a non-JSON response (status {status})."),
        }
    }

    /// HTTP failure status; prefers the body's own error text when present.
    pub fn http_failure(status: u16, body_error: Option<String>) -> Self {
        Self::Transport {
            status,
            message: body_error.unwrap_or_else(|| format!("Server error: {status}.")),
        }
    }
}
