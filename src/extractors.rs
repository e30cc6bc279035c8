use axum::{
    extract::FromRequestParts,
    http::request::Parts,
};
use axum_extra::extract::CookieJar;

use crate::{names, rejections::AppError};

/// Extracts the quiz session token from the `quiz_session` cookie.
/// A request without the cookie has no active question to answer.
pub struct QuizSession(pub String);

impl<S: Send + Sync> FromRequestParts<S> for QuizSession {
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let jar = CookieJar::from_headers(&parts.headers);
        let token = jar
            .get(names::QUIZ_SESSION_COOKIE_NAME)
            .map(|c| c.value().to_string())
            .ok_or(AppError::NoActiveQuestion)?;
        Ok(QuizSession(token))
    }
}
