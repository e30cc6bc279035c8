// Database model structs

use chrono::NaiveDateTime;
use serde::Serialize;

use crate::models::AnswerKey;

#[derive(Clone, Serialize, sqlx::FromRow)]
pub struct TopicModel {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub icon: String,
}

/// A question row as stored, before the answer letter is validated.
#[derive(sqlx::FromRow)]
pub struct QuestionRow {
    pub id: i64,
    pub prompt: String,
    pub option_a: String,
    pub option_b: String,
    pub option_c: String,
    pub correct: String,
    pub explanation: String,
}

/// A validated question: the answer letter is a known `AnswerKey`.
#[derive(Clone)]
pub struct QuestionModel {
    pub id: i64,
    pub prompt: String,
    pub option_a: String,
    pub option_b: String,
    pub option_c: String,
    pub correct: AnswerKey,
    pub explanation: String,
}

impl QuestionRow {
    /// Store-boundary validation: rows whose answer letter is not one
    /// of a/b/c never become a `QuestionModel`.
    pub fn validate(self) -> Option<QuestionModel> {
        let Some(correct) = AnswerKey::parse(&self.correct) else {
            tracing::warn!(
                "dropping question {}: invalid answer letter {:?}",
                self.id,
                self.correct
            );
            return None;
        };
        Some(QuestionModel {
            id: self.id,
            prompt: self.prompt,
            option_a: self.option_a,
            option_b: self.option_b,
            option_c: self.option_c,
            correct,
            explanation: self.explanation,
        })
    }
}

/// One finished round, as persisted to the results log.
#[derive(Serialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct SessionResultModel {
    pub id: i64,
    pub finished_at: NaiveDateTime,
    pub topic: String,
    pub correct: i64,
    pub total: i64,
    pub percentage: f64,
}

/// A round outcome about to be appended; `finished_at` is set at write.
pub struct NewSessionResult {
    pub topic: String,
    pub correct: i64,
    pub total: i64,
    pub percentage: f64,
}
