use axum::{
    extract::State,
    http::{header::SET_COOKIE, HeaderMap},
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use axum_extra::extract::CookieJar;
use serde::Deserialize;

use crate::{
    db::SessionResultModel,
    extractors::QuizSession,
    models::AnswerKey,
    names,
    rejections::{AppError, ResultExt},
    utils, AppState,
};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route(names::TOPICS_URL, get(topics))
        .route(names::PLAY_URL, post(play))
        .route(names::ANSWER_URL, post(answer))
        .route(names::HISTORY_URL, get(history))
}

async fn topics(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let topics = state.db.topics().await.reject("could not list topics")?;
    Ok(Json(topics))
}

#[derive(Deserialize)]
struct PlayBody {
    #[serde(default = "default_topic")]
    topic: String,
}

fn default_topic() -> String {
    names::ALL_TOPICS.to_owned()
}

async fn play(
    State(state): State<AppState>,
    jar: CookieJar,
    Json(body): Json<PlayBody>,
) -> Result<axum::response::Response, AppError> {
    let prior = jar
        .get(names::QUIZ_SESSION_COOKIE_NAME)
        .map(|c| c.value().to_string());

    let (token, first) = state
        .quiz
        .start_session(prior.as_deref(), &body.topic)
        .await?;

    let cookie = utils::cookie(
        names::QUIZ_SESSION_COOKIE_NAME,
        &token,
        state.secure_cookies,
    )
    .reject("could not build session cookie")?;
    let mut headers = HeaderMap::new();
    headers.insert(SET_COOKIE, cookie);

    Ok((headers, Json(first)).into_response())
}

#[derive(Deserialize)]
struct AnswerBody {
    answer: AnswerKey,
}

async fn answer(
    State(state): State<AppState>,
    QuizSession(token): QuizSession,
    Json(body): Json<AnswerBody>,
) -> Result<axum::response::Response, AppError> {
    let outcome = state.quiz.submit_answer(&token, body.answer).await?;

    // The last answer retires the session cookie along with the session.
    if outcome.summary.is_some() {
        let cookie = utils::clear_cookie(names::QUIZ_SESSION_COOKIE_NAME, state.secure_cookies)
            .reject("could not build clear cookie")?;
        let mut headers = HeaderMap::new();
        headers.insert(SET_COOKIE, cookie);
        return Ok((headers, Json(outcome)).into_response());
    }

    Ok(Json(outcome).into_response())
}

async fn history(
    State(state): State<AppState>,
) -> Result<Json<Vec<SessionResultModel>>, AppError> {
    let results = state.quiz.history().await?;
    Ok(Json(results))
}
