use astra::Response;
use thiserror::Error;

/// Errors originating from either the server logic (routing, missing
/// resources, bad input) or downstream layers (state store, remote API).
///
/// `Clone` is required so an in-flight upstream result can be handed to
/// every request that coalesced onto it.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ServerError {
    #[error("Not Found")]
    NotFound,
    #[error("Bad Request: {0}")]
    BadRequest(String),
    #[error("Unauthorized: {0}")]
    Unauthorized(String),
    #[error("Forbidden: {0}")]
    Forbidden(String),
    /// Could not reach the remote API at all (connect, timeout, decode).
    #[error("Network Error: {0}")]
    Network(String),
    /// The remote API answered with a non-2xx status.
    #[error("Upstream Error ({status}): {message}")]
    Upstream { status: u16, message: String },
    #[error("Database Error: {0}")]
    DbError(String),
    #[error("Internal Server Error")]
    InternalError,
}

impl ServerError {
    /// Message from an upstream failure, or a generic fallback for
    /// everything the user cannot act on.
    pub fn user_message(&self) -> String {
        match self {
            ServerError::BadRequest(msg)
            | ServerError::Unauthorized(msg)
            | ServerError::Forbidden(msg)
            | ServerError::Upstream { message: msg, .. } => msg.clone(),
            ServerError::NotFound => "Not Found".to_string(),
            _ => "Something went wrong. Please try again later.".to_string(),
        }
    }
}

// Type alias commonly used by route handlers.
pub type ResultResp = Result<Response, ServerError>;
