pub const TOPICS_URL: &str = "/api/topics";
pub const PLAY_URL: &str = "/api/play";
pub const ANSWER_URL: &str = "/api/answer";
pub const HISTORY_URL: &str = "/api/history";

pub const QUIZ_SESSION_COOKIE_NAME: &str = "quiz_session";

/// Sentinel topic filter meaning "draw from every topic".
pub const ALL_TOPICS: &str = "all";

// Quiz session defaults
pub const SESSION_QUESTION_COUNT: usize = 10;
pub const HISTORY_LIMIT: i64 = 10;
