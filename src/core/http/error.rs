//! Gateway error taxonomy and presentation policy
//!
//! Every backend call resolves to either a payload or an `ApiError`. The
//! mapping from HTTP status to variant and the user-facing message policy
//! both live here so the fetch layer stays mechanical.

use thiserror::Error;

/// Fixed copy for the 403 case. The server message is intentionally not shown.
pub const FORBIDDEN_MESSAGE: &str = "You are not authorized to perform this action.";

/// Fixed copy for the 500 case. The server message is intentionally not shown.
pub const SERVER_ERROR_MESSAGE: &str = "Something went wrong on our side. Please try again later.";

/// Fixed copy for transport failures with no response at all.
pub const OFFLINE_MESSAGE: &str = "Cannot reach the server. Check your connection and try again.";

/// Fixed copy for a 401 that survives the refresh cycle.
pub const SESSION_EXPIRED_MESSAGE: &str = "Your session has expired. Please sign in again.";

/// Error produced by the HTTP gateway.
///
/// Variants carry the most specific payload the response offered; callers
/// that want to show something use [`ApiError::user_message`] rather than
/// formatting variants themselves.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ApiError {
    /// No response was received at all (connectivity, DNS, aborted fetch).
    #[error("network error")]
    Network,

    /// HTTP 401. Recoverable exactly once per request via the refresh
    /// exchange; terminal when it is the refresh call itself that failed or
    /// the request was already retried.
    #[error("unauthorized")]
    Unauthorized { message: Option<String> },

    /// HTTP 403.
    #[error("forbidden")]
    Forbidden,

    /// HTTP 404. Presented as navigation, not as an inline message.
    #[error("not found")]
    NotFound,

    /// HTTP 400 with the server-supplied message.
    #[error("bad request: {0}")]
    BadRequest(String),

    /// HTTP 500.
    #[error("server error")]
    Server,

    /// A response body that could not be decoded into the expected shape.
    #[error("unexpected response body")]
    Decode,

    /// Any other status code.
    #[error("unexpected status {status}")]
    Unexpected {
        status: u16,
        message: Option<String>,
    },
}

impl ApiError {
    /// Map a non-success HTTP status to an error variant.
    ///
    /// `message` is whatever the response body carried (see
    /// `payload::server_message`); fixed-copy variants drop it on purpose.
    pub fn from_status(status: u16, message: Option<String>) -> Self {
        match status {
            400 => ApiError::BadRequest(
                message.unwrap_or_else(|| "The request was rejected.".to_string()),
            ),
            401 => ApiError::Unauthorized { message },
            403 => ApiError::Forbidden,
            404 => ApiError::NotFound,
            500 => ApiError::Server,
            status => ApiError::Unexpected { status, message },
        }
    }

    /// The toast text for this error, or `None` when the error is presented
    /// as navigation instead (404).
    pub fn user_message(&self) -> Option<String> {
        match self {
            ApiError::Network => Some(OFFLINE_MESSAGE.to_string()),
            ApiError::Unauthorized { message } => Some(
                message
                    .clone()
                    .unwrap_or_else(|| SESSION_EXPIRED_MESSAGE.to_string()),
            ),
            ApiError::Forbidden => Some(FORBIDDEN_MESSAGE.to_string()),
            ApiError::NotFound => None,
            ApiError::BadRequest(message) => Some(message.clone()),
            ApiError::Server => Some(SERVER_ERROR_MESSAGE.to_string()),
            ApiError::Decode => Some(SERVER_ERROR_MESSAGE.to_string()),
            ApiError::Unexpected { message, .. } => Some(
                message
                    .clone()
                    .unwrap_or_else(|| OFFLINE_MESSAGE.to_string()),
            ),
        }
    }

    /// True for the one status the gateway may transparently recover from.
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, ApiError::Unauthorized { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_400_with_server_message() {
        let err = ApiError::from_status(400, Some("Email already taken".to_string()));
        assert_eq!(err, ApiError::BadRequest("Email already taken".to_string()));
        assert_eq!(err.user_message(), Some("Email already taken".to_string()));
    }

    #[test]
    fn maps_400_without_message_to_fixed_copy() {
        let err = ApiError::from_status(400, None);
        assert_eq!(err.user_message(), Some("The request was rejected.".to_string()));
    }

    #[test]
    fn maps_403_and_ignores_server_message() {
        let err = ApiError::from_status(403, Some("you shall not pass".to_string()));
        assert_eq!(err, ApiError::Forbidden);
        assert_eq!(err.user_message(), Some(FORBIDDEN_MESSAGE.to_string()));
    }

    #[test]
    fn maps_404_to_navigation() {
        let err = ApiError::from_status(404, Some("gone".to_string()));
        assert_eq!(err, ApiError::NotFound);
        assert_eq!(err.user_message(), None);
    }

    #[test]
    fn maps_500_and_ignores_server_message() {
        let err = ApiError::from_status(500, Some("stack trace".to_string()));
        assert_eq!(err, ApiError::Server);
        assert_eq!(err.user_message(), Some(SERVER_ERROR_MESSAGE.to_string()));
    }

    #[test]
    fn maps_unknown_status_with_message() {
        let err = ApiError::from_status(418, Some("teapot".to_string()));
        assert_eq!(
            err,
            ApiError::Unexpected {
                status: 418,
                message: Some("teapot".to_string()),
            }
        );
        assert_eq!(err.user_message(), Some("teapot".to_string()));
    }

    #[test]
    fn network_error_uses_offline_copy() {
        assert_eq!(
            ApiError::Network.user_message(),
            Some(OFFLINE_MESSAGE.to_string())
        );
    }

    #[test]
    fn only_401_is_recoverable() {
        assert!(ApiError::from_status(401, None).is_unauthorized());
        assert!(!ApiError::from_status(403, None).is_unauthorized());
        assert!(!ApiError::Network.is_unauthorized());
    }
}
