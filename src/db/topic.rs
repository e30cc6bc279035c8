use color_eyre::Result;

use super::models::TopicModel;
use super::Db;
use crate::models::Bank;

impl Db {
    /// Insert a bank of topics with all their questions atomically in a
    /// transaction. Meant to run once, against an empty store.
    pub async fn load_bank(&self, bank: Bank) -> Result<()> {
        let mut tx = self.pool.begin().await?;

        for topic in &bank.topics {
            let topic_id: i64 = sqlx::query_scalar(
                "INSERT INTO topics (name, description, icon) VALUES (?1, ?2, ?3) RETURNING id",
            )
            .bind(&topic.name)
            .bind(&topic.description)
            .bind(&topic.icon)
            .fetch_one(&mut *tx)
            .await?;

            for question in &topic.questions {
                sqlx::query(
                    r#"
                    INSERT INTO questions (topic_id, prompt, option_a, option_b, option_c, correct, explanation)
                    VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)
                    "#,
                )
                .bind(topic_id)
                .bind(&question.prompt)
                .bind(&question.option_a)
                .bind(&question.option_b)
                .bind(&question.option_c)
                .bind(question.answer.as_str())
                .bind(&question.explanation)
                .execute(&mut *tx)
                .await?;
            }
        }

        tx.commit().await?;

        tracing::info!("question bank loaded: {} topics", bank.topics.len());
        Ok(())
    }

    pub async fn topics(&self) -> Result<Vec<TopicModel>> {
        let topics = sqlx::query_as::<_, TopicModel>(
            "SELECT id, name, description, icon FROM topics ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(topics)
    }

    /// True when either table has no rows yet, i.e. the bank still needs
    /// to be loaded.
    pub async fn bank_is_empty(&self) -> Result<bool> {
        let topics: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM topics")
            .fetch_one(&self.pool)
            .await?;
        let questions: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM questions")
            .fetch_one(&self.pool)
            .await?;

        Ok(topics == 0 || questions == 0)
    }

    /// Question totals per topic, topics without questions included.
    pub async fn topic_question_counts(&self) -> Result<Vec<(String, i64)>> {
        let counts = sqlx::query_as::<_, (String, i64)>(
            r#"
            SELECT t.name, COUNT(q.id)
            FROM topics t
            LEFT JOIN questions q ON q.topic_id = t.id
            GROUP BY t.id
            ORDER BY t.id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(counts)
    }
}
