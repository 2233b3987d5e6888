use axum::http::StatusCode;

#[derive(Debug, thiserror::Error)]
pub enum PlannerError {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

impl PlannerError {
    pub fn invalid(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }

    pub fn status(&self) -> StatusCode {
        match self {
            PlannerError::InvalidArgument(_) => StatusCode::BAD_REQUEST,
        }
    }
}

/// Rejection shape shared by the handlers.
pub fn rejection(e: PlannerError) -> (StatusCode, String) {
    (e.status(), e.to_string())
}
