// Session core: the per-player quiz state machine and the store that
// holds live sessions between requests.

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::Mutex;
use serde::Serialize;

use crate::db::models::QuestionModel;
use crate::models::AnswerKey;

/// One player's run through a fixed, randomly chosen question list.
///
/// The question list is frozen at creation. `cursor` points at the next
/// unanswered question and only ever moves forward; `correct_count` can
/// grow at most once per cursor step, so `correct_count <= cursor <=
/// questions.len()` holds after every mutation.
pub struct SessionState {
    questions: Vec<QuestionModel>,
    cursor: usize,
    correct_count: usize,
    topic: String,
}

/// What grading one answer produced. The explanation and the correct
/// letter are only revealed here, never in a `QuestionView`.
pub struct Grade {
    pub correct: bool,
    pub correct_answer: AnswerKey,
    pub explanation: String,
    pub running_correct: usize,
}

/// The player-facing slice of one question: position, prompt and the
/// three options. The answer and explanation are withheld.
#[derive(Serialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct QuestionView {
    pub question_number: usize,
    pub total: usize,
    pub prompt: String,
    pub options: OptionSet,
}

#[derive(Serialize, Debug)]
pub struct OptionSet {
    pub a: String,
    pub b: String,
    pub c: String,
}

impl SessionState {
    pub fn new(topic: String, questions: Vec<QuestionModel>) -> Self {
        Self {
            questions,
            cursor: 0,
            correct_count: 0,
            topic,
        }
    }

    pub fn topic(&self) -> &str {
        &self.topic
    }

    pub fn total(&self) -> usize {
        self.questions.len()
    }

    pub fn correct_count(&self) -> usize {
        self.correct_count
    }

    pub fn is_complete(&self) -> bool {
        self.cursor >= self.questions.len()
    }

    /// View of the question the cursor points at, or `None` once every
    /// question has been answered.
    pub fn current_view(&self) -> Option<QuestionView> {
        let question = self.questions.get(self.cursor)?;
        Some(QuestionView {
            question_number: self.cursor + 1,
            total: self.questions.len(),
            prompt: question.prompt.clone(),
            options: OptionSet {
                a: question.option_a.clone(),
                b: question.option_b.clone(),
                c: question.option_c.clone(),
            },
        })
    }

    /// Grade `selected` against the current question and advance the
    /// cursor. The cursor advances whether or not the answer was right;
    /// returns `None` when the session is already complete.
    pub fn grade(&mut self, selected: AnswerKey) -> Option<Grade> {
        let question = self.questions.get(self.cursor)?;
        let correct = selected == question.correct;
        let grade = Grade {
            correct,
            correct_answer: question.correct,
            explanation: question.explanation.clone(),
            running_correct: self.correct_count + usize::from(correct),
        };
        if correct {
            self.correct_count += 1;
        }
        self.cursor += 1;
        Some(grade)
    }

    /// Score as a percentage, rounded to two decimals. Zero for an empty
    /// question list.
    pub fn percentage(&self) -> f64 {
        if self.questions.is_empty() {
            return 0.0;
        }
        let raw = self.correct_count as f64 / self.questions.len() as f64 * 100.0;
        (raw * 100.0).round() / 100.0
    }
}

/// Live sessions keyed by their opaque token.
///
/// An operation takes the state out, mutates it without the lock held,
/// and puts it back unless the session finished. Of two racing submits
/// for one token, exactly one finds the state; the other observes an
/// absent session and fails with the ordering-violation error.
#[derive(Clone, Default)]
pub struct SessionStore {
    inner: Arc<Mutex<HashMap<String, SessionState>>>,
}

impl SessionStore {
    /// Install a session under `token`, dropping any prior state there.
    pub fn insert(&self, token: String, state: SessionState) {
        self.inner.lock().insert(token, state);
    }

    /// Remove and return the session under `token`, if one is live.
    pub fn take(&self, token: &str) -> Option<SessionState> {
        self.inner.lock().remove(token)
    }

    /// Drop the session under `token`, if any.
    pub fn evict(&self, token: &str) {
        self.inner.lock().remove(token);
    }
}
