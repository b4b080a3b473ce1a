//! HTTP adapter mapping for domain and remote errors.
//!
//! Purpose: keep the domain error type HTTP-agnostic while allowing Actix
//! handlers to turn failures into consistent JSON responses. Remote status
//! failures are relayed with the remote's own status and body; failures that
//! left nothing to relay answer `503`.

use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use tracing::{error, warn};

use crate::domain::{Error, ErrorCode, RemoteError, TRACE_ID_HEADER};
use crate::inbound::http::relay::relay_response;

/// Convenient result alias for handlers that only fail locally.
pub type ApiResult<T> = Result<T, Error>;

/// Result alias for handlers that call the remote authority.
pub type GatewayResult<T> = Result<T, GatewayError>;

fn status_for(code: ErrorCode) -> StatusCode {
    match code {
        ErrorCode::InvalidRequest => StatusCode::BAD_REQUEST,
        ErrorCode::NotFound => StatusCode::NOT_FOUND,
        ErrorCode::Conflict => StatusCode::CONFLICT,
        ErrorCode::ServiceUnavailable => StatusCode::SERVICE_UNAVAILABLE,
        ErrorCode::InternalError => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

fn redact_if_internal(error: &Error) -> Error {
    if matches!(error.code(), ErrorCode::InternalError) {
        let mut redacted = Error::internal("Internal server error");
        if let Some(id) = error.trace_id() {
            redacted = redacted.with_trace_id(id.to_owned());
        }
        redacted
    } else {
        error.clone()
    }
}

impl ResponseError for Error {
    fn status_code(&self) -> StatusCode {
        status_for(self.code())
    }

    fn error_response(&self) -> HttpResponse {
        let mut builder = HttpResponse::build(self.status_code());
        if let Some(id) = self.trace_id() {
            builder.insert_header((TRACE_ID_HEADER, id.to_owned()));
        }

        builder.json(redact_if_internal(self))
    }
}

impl From<actix_web::Error> for Error {
    fn from(err: actix_web::Error) -> Self {
        // Do not leak implementation details to clients.
        error!(error = %err, "actix error promoted to domain error");
        Error::internal("Internal server error")
    }
}

/// Failure of a handler that delegates to the remote authority.
#[derive(Debug, thiserror::Error)]
pub enum GatewayError {
    /// Local failure rendered with the domain error envelope.
    #[error(transparent)]
    Domain(#[from] Error),
    /// Remote failure, relayed or mapped to `503`.
    #[error(transparent)]
    Remote(#[from] RemoteError),
}

impl GatewayError {
    fn unavailable() -> Error {
        Error::service_unavailable("remote authority unavailable")
    }
}

impl ResponseError for GatewayError {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::Domain(err) => err.status_code(),
            Self::Remote(RemoteError::Status { status, .. }) => {
                StatusCode::from_u16(*status).unwrap_or(StatusCode::BAD_GATEWAY)
            }
            Self::Remote(RemoteError::Transport(_)) => StatusCode::SERVICE_UNAVAILABLE,
        }
    }

    fn error_response(&self) -> HttpResponse {
        match self {
            Self::Domain(err) => err.error_response(),
            Self::Remote(RemoteError::Status { body, .. }) => {
                relay_response(self.status_code(), body)
            }
            Self::Remote(RemoteError::Transport(err)) => {
                warn!(error = %err, retryable = err.is_retryable(), "remote authority unavailable");
                Self::unavailable()
                    .with_details(serde_json::json!({ "retryable": err.is_retryable() }))
                    .error_response()
            }
        }
    }
}

#[cfg(test)]
mod tests;
