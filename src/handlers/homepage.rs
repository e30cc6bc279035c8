use axum::{extract::State, routing::get, Router};
use maud::Markup;

use crate::{
    rejections::{AppError, ResultExt},
    views, AppState,
};

pub fn routes() -> Router<AppState> {
    Router::new().route("/", get(homepage))
}

async fn homepage(State(state): State<AppState>) -> Result<Markup, AppError> {
    let topics = state.db.topics().await.reject("could not list topics")?;
    Ok(views::page("Topics", views::homepage::topic_menu(&topics)))
}
