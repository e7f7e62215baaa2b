//! GraphQL plumbing shared by workforce surfaces.

mod notice;

use std::sync::Arc;

use async_graphql::{Error, ErrorExtensions};
use thiserror::Error;

pub use notice::{Change, Notice, Tone};

/// Shared GraphQL result type.
pub type ApiResult<T> = Result<T, ApiError>;

#[derive(Debug, Error, Clone)]
pub enum ApiError {
    #[error("bad request: {0}")]
    InvalidInput(String),
    #[error("internal server error")]
    Internal(Arc<anyhow::Error>),
}

impl ApiError {
    fn code(&self) -> &'static str {
        match self {
            ApiError::InvalidInput(_) => "INVALID_INPUT",
            ApiError::Internal(_) => "INTERNAL",
        }
    }

    pub fn internal(err: anyhow::Error) -> Self {
        tracing::error!(error = %err, "internal error");
        Self::Internal(Arc::new(err))
    }

    pub fn invalid(message: impl Into<String>) -> Self {
        Self::InvalidInput(message.into())
    }
}

impl From<anyhow::Error> for ApiError {
    fn from(value: anyhow::Error) -> Self {
        Self::internal(value)
    }
}

impl ErrorExtensions for ApiError {
    fn extend(&self) -> Error {
        let mut err = Error::new(self.to_string());
        err = err.extend_with(|_err, e| {
            e.set("code", self.code());
        });
        if let ApiError::InvalidInput(_) = self {
            err = err.extend_with(|_err, e| {
                e.set("type", "BAD_REQUEST");
            });
        }
        err
    }
}

/// Convert any error into a GraphQL error payload while hiding internals.
pub fn internal_error(err: impl Into<anyhow::Error>) -> Error {
    ApiError::internal(err.into()).extend()
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_graphql::Value;

    #[test]
    fn internal_errors_are_masked() {
        let err = internal_error(anyhow::anyhow!("lock poisoned"));
        assert_eq!(err.message, "internal server error");
        let extra = err.extensions.as_ref().and_then(|map| map.get("code"));
        assert_eq!(extra.cloned(), Some(Value::from("INTERNAL")));
    }

    #[test]
    fn invalid_input_carries_bad_request_type() {
        let err = ApiError::invalid("level out of range").extend();
        assert_eq!(err.message, "bad request: level out of range");
        let ty = err.extensions.as_ref().and_then(|map| map.get("type"));
        assert_eq!(ty.cloned(), Some(Value::from("BAD_REQUEST")));
    }
}
