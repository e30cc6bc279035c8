use color_eyre::Result;
use rand::seq::SliceRandom;

use super::models::{QuestionModel, QuestionRow};
use super::Db;

impl Db {
    /// Up to `count` questions sampled uniformly without replacement
    /// from the matching population: every topic when `topic` is `None`,
    /// else only questions whose topic name matches exactly. Fewer than
    /// `count` when the population is smaller; empty for an unknown or
    /// empty topic.
    ///
    /// The shuffle is an explicit Fisher-Yates over the loaded rows, so
    /// the sampling does not depend on any storage-engine ordering
    /// primitive. Fresh randomness per call, no reproducibility.
    pub async fn random_questions(
        &self,
        topic: Option<&str>,
        count: usize,
    ) -> Result<Vec<QuestionModel>> {
        let rows = match topic {
            None => {
                sqlx::query_as::<_, QuestionRow>(
                    r#"
                    SELECT id, prompt, option_a, option_b, option_c, correct, explanation
                    FROM questions
                    "#,
                )
                .fetch_all(&self.pool)
                .await?
            }
            Some(name) => {
                sqlx::query_as::<_, QuestionRow>(
                    r#"
                    SELECT q.id, q.prompt, q.option_a, q.option_b, q.option_c, q.correct, q.explanation
                    FROM questions q
                    JOIN topics t ON t.id = q.topic_id
                    WHERE t.name = ?1
                    "#,
                )
                .bind(name)
                .fetch_all(&self.pool)
                .await?
            }
        };

        let mut questions: Vec<QuestionModel> =
            rows.into_iter().filter_map(QuestionRow::validate).collect();

        questions.shuffle(&mut rand::thread_rng());
        questions.truncate(count);

        Ok(questions)
    }

    pub async fn questions_count(&self) -> Result<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM questions")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }
}
