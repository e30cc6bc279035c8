// Quiz session manager - orchestrates the session state machine over
// the question store and the results log.

use serde::Serialize;
use ulid::Ulid;

use crate::db::models::NewSessionResult;
use crate::db::{Db, SessionResultModel};
use crate::models::AnswerKey;
use crate::names;
use crate::rejections::{AppError, ResultExt};
use crate::session::{QuestionView, SessionState, SessionStore};

/// Outcome of one submitted answer. Exactly one of `next` and `summary`
/// is present: `next` while the session continues, `summary` once the
/// last question has been answered.
#[derive(Serialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct AnswerOutcome {
    pub correct: bool,
    pub correct_answer: AnswerKey,
    pub explanation: String,
    pub running_correct: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next: Option<QuestionView>,
    #[serde(rename = "final", skip_serializing_if = "Option::is_none")]
    pub summary: Option<FinalSummary>,
}

#[derive(Serialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct FinalSummary {
    pub correct: usize,
    pub total: usize,
    pub percentage: f64,
    /// False when the results log refused the write; the score above is
    /// still authoritative for this response.
    pub persisted: bool,
}

/// Stateless orchestrator: all session data lives in the injected
/// `SessionStore`, keyed by the opaque token the client carries in its
/// cookie, and everything durable lives in `Db`.
#[derive(Clone)]
pub struct QuizSessionManager {
    db: Db,
    sessions: SessionStore,
}

impl QuizSessionManager {
    pub fn new(db: Db, sessions: SessionStore) -> Self {
        Self { db, sessions }
    }

    /// Start a fresh session for the given topic filter and return its
    /// token together with the first question.
    ///
    /// `prior` is the caller's previous session token, if it still
    /// carries one; that state is evicted so a player slot never
    /// accumulates abandoned sessions. On `NoQuestions` nothing is
    /// installed and the prior session (if any) stays live.
    pub async fn start_session(
        &self,
        prior: Option<&str>,
        topic_filter: &str,
    ) -> Result<(String, QuestionView), AppError> {
        let filter = (topic_filter != names::ALL_TOPICS).then_some(topic_filter);
        let questions = self
            .db
            .random_questions(filter, names::SESSION_QUESTION_COUNT)
            .await
            .reject("could not select questions")?;

        if questions.is_empty() {
            tracing::info!("no questions for topic {topic_filter:?}");
            return Err(AppError::NoQuestions);
        }

        let state = SessionState::new(topic_filter.to_owned(), questions);
        let first = state
            .current_view()
            .ok_or(AppError::Internal("session started without a question"))?;

        if let Some(prior) = prior {
            self.sessions.evict(prior);
        }
        let token = Ulid::new().to_string();
        self.sessions.insert(token.clone(), state);

        tracing::info!(
            "session started: topic={topic_filter}, questions={}",
            first.total
        );
        Ok((token, first))
    }

    /// Grade the player's answer against the current question of the
    /// session under `token` and advance it.
    ///
    /// Fails with `NoActiveQuestion` when no session is live under the
    /// token - never started, already completed, or superseded. On the
    /// last question the session becomes terminal and its result is
    /// appended to the history exactly once.
    pub async fn submit_answer(
        &self,
        token: &str,
        selected: AnswerKey,
    ) -> Result<AnswerOutcome, AppError> {
        let mut state = self
            .sessions
            .take(token)
            .ok_or(AppError::NoActiveQuestion)?;

        let Some(grade) = state.grade(selected) else {
            // A completed state should never be in the store; treat it
            // as the same ordering violation and leave it out.
            return Err(AppError::NoActiveQuestion);
        };

        let outcome = if let Some(next) = state.current_view() {
            self.sessions.insert(token.to_owned(), state);
            AnswerOutcome {
                correct: grade.correct,
                correct_answer: grade.correct_answer,
                explanation: grade.explanation,
                running_correct: grade.running_correct,
                next: Some(next),
                summary: None,
            }
        } else {
            let summary = self.finalize(&state).await;
            AnswerOutcome {
                correct: grade.correct,
                correct_answer: grade.correct_answer,
                explanation: grade.explanation,
                running_correct: grade.running_correct,
                next: None,
                summary: Some(summary),
            }
        };

        Ok(outcome)
    }

    /// Persist the finished session. A storage failure is logged and
    /// flagged on the summary; the player still gets their score.
    async fn finalize(&self, state: &SessionState) -> FinalSummary {
        let result = NewSessionResult {
            topic: state.topic().to_owned(),
            correct: state.correct_count() as i64,
            total: state.total() as i64,
            percentage: state.percentage(),
        };

        let persisted = match self.db.append_result(&result).await {
            Ok(()) => true,
            Err(e) => {
                tracing::error!("could not persist session result: {e}");
                false
            }
        };

        tracing::info!(
            "session completed: topic={}, score={}/{}",
            state.topic(),
            state.correct_count(),
            state.total()
        );

        FinalSummary {
            correct: state.correct_count(),
            total: state.total(),
            percentage: state.percentage(),
            persisted,
        }
    }

    /// The most recent finished rounds, newest first.
    pub async fn history(&self) -> Result<Vec<SessionResultModel>, AppError> {
        self.db
            .recent_results(names::HISTORY_LIMIT)
            .await
            .reject("could not load history")
    }
}
