pub mod db;
pub mod engine;
pub mod extractors;
pub mod handlers;
pub mod models;
pub mod names;
pub mod rejections;
pub mod session;
pub mod utils;
pub mod views;

use axum::Router;

use engine::QuizSessionManager;
use session::SessionStore;

#[derive(Clone)]
pub struct AppState {
    pub db: db::Db,
    pub quiz: QuizSessionManager,
    pub secure_cookies: bool,
}

impl AppState {
    pub fn new(db: db::Db, secure_cookies: bool) -> Self {
        let quiz = QuizSessionManager::new(db.clone(), SessionStore::default());
        Self {
            db,
            quiz,
            secure_cookies,
        }
    }
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .merge(handlers::homepage::routes())
        .merge(handlers::quiz::routes())
        .with_state(state)
}
