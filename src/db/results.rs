use color_eyre::Result;

use super::models::{NewSessionResult, SessionResultModel};
use super::Db;

impl Db {
    /// Append one finished round to the results log. The timestamp is
    /// assigned by the database at write time.
    pub async fn append_result(&self, result: &NewSessionResult) -> Result<()> {
        sqlx::query(
            "INSERT INTO results (topic, correct, total, percentage) VALUES (?1, ?2, ?3, ?4)",
        )
        .bind(&result.topic)
        .bind(result.correct)
        .bind(result.total)
        .bind(result.percentage)
        .execute(&self.pool)
        .await?;

        tracing::info!(
            "result recorded: topic={}, score={}/{}",
            result.topic,
            result.correct,
            result.total
        );
        Ok(())
    }

    /// The most recent `limit` results, newest first.
    pub async fn recent_results(&self, limit: i64) -> Result<Vec<SessionResultModel>> {
        let results = sqlx::query_as::<_, SessionResultModel>(
            r#"
            SELECT id, finished_at, topic, correct, total, percentage
            FROM results
            ORDER BY id DESC
            LIMIT ?1
            "#,
        )
        .bind(limit)
        .fetch_all(&self.pool)
        .await?;

        Ok(results)
    }
}
