use axum::{Json, extract::rejection::BytesRejection, http::StatusCode, response::IntoResponse};
use insta_agent_core::ActionError;
use serde::{Deserialize, Serialize};

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Invalid action")]
    InvalidAction,

    #[error("{0}")]
    Internal(String),
}

impl Error {
    fn info(&self) -> (StatusCode, String) {
        tracing::info!("api request error: {}", self);
        match self {
            Self::InvalidAction => (StatusCode::BAD_REQUEST, self.to_string()),
            Self::Internal(_) => (StatusCode::INTERNAL_SERVER_ERROR, self.to_string()),
        }
    }
}

impl From<ActionError> for Error {
    fn from(err: ActionError) -> Self {
        match err {
            ActionError::InvalidAction(name) => {
                tracing::debug!(action = %name, "unrecognized action");
                Self::InvalidAction
            }
        }
    }
}

impl From<BytesRejection> for Error {
    fn from(rejection: BytesRejection) -> Self {
        Self::Internal(rejection.body_text())
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Self::Internal(err.to_string())
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> axum::response::Response {
        let (status_code, error) = self.info();
        (status_code, Json(ErrorResponse { error })).into_response()
    }
}

// response structure
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}
