use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

/// Every handler-visible failure of the quiz API.
///
/// `NoQuestions` and `NoActiveQuestion` are expected protocol outcomes
/// (wrong topic, answering without a session); `Input` and `Internal`
/// cover malformed requests and storage trouble.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppError {
    NoQuestions,
    NoActiveQuestion,
    Input(&'static str),
    Internal(&'static str),
}

impl AppError {
    fn status(self) -> StatusCode {
        match self {
            Self::NoQuestions => StatusCode::NOT_FOUND,
            Self::NoActiveQuestion | Self::Input(_) => StatusCode::BAD_REQUEST,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn message(self) -> &'static str {
        match self {
            Self::NoQuestions => "no questions available",
            Self::NoActiveQuestion => "no active question",
            Self::Input(msg) | Self::Internal(msg) => msg,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let body = Json(serde_json::json!({ "error": self.message() }));
        (self.status(), body).into_response()
    }
}

pub trait ResultExt<T> {
    /// Log the underlying error and reject with an internal server error.
    fn reject(self, msg: &'static str) -> Result<T, AppError>;

    /// Log the underlying error and reject as bad input.
    fn reject_input(self, msg: &'static str) -> Result<T, AppError>;
}

impl<T, E: std::fmt::Display> ResultExt<T> for Result<T, E> {
    fn reject(self, msg: &'static str) -> Result<T, AppError> {
        self.map_err(|e| {
            tracing::error!("{msg}: {e}");
            AppError::Internal(msg)
        })
    }

    fn reject_input(self, msg: &'static str) -> Result<T, AppError> {
        self.map_err(|e| {
            tracing::warn!("{msg}: {e}");
            AppError::Input(msg)
        })
    }
}
