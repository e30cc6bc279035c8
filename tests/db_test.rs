mod common;

use std::collections::HashSet;

use common::{bank_of, create_test_db, topic_answering};
use quizdrill::db::models::NewSessionResult;
use quizdrill::models::AnswerKey;

#[tokio::test]
async fn test_db_connection() {
    let db = create_test_db().await;
    assert!(db.bank_is_empty().await.unwrap());
}

#[tokio::test]
async fn test_bank_loading() {
    let db = create_test_db().await;
    let bank = bank_of(vec![
        topic_answering("NumPy", 12, AnswerKey::A),
        topic_answering("Pandas", 12, AnswerKey::B),
    ]);
    db.load_bank(bank).await.unwrap();

    assert!(!db.bank_is_empty().await.unwrap());
    assert_eq!(db.questions_count().await.unwrap(), 24);

    let topics = db.topics().await.unwrap();
    assert_eq!(topics.len(), 2);
    assert_eq!(topics[0].name, "NumPy");
    assert_eq!(topics[1].name, "Pandas");
    assert_eq!(topics[0].icon, "🧪");

    let counts = db.topic_question_counts().await.unwrap();
    assert_eq!(counts, vec![("NumPy".to_owned(), 12), ("Pandas".to_owned(), 12)]);
}

#[tokio::test]
async fn test_random_sampling_caps_at_count_without_duplicates() {
    let db = create_test_db().await;
    db.load_bank(bank_of(vec![
        topic_answering("NumPy", 12, AnswerKey::A),
        topic_answering("Pandas", 12, AnswerKey::B),
    ]))
    .await
    .unwrap();

    let questions = db.random_questions(None, 10).await.unwrap();
    assert_eq!(questions.len(), 10);

    let ids: HashSet<i64> = questions.iter().map(|q| q.id).collect();
    assert_eq!(ids.len(), 10);
}

#[tokio::test]
async fn test_random_sampling_returns_whole_small_population() {
    let db = create_test_db().await;
    db.load_bank(bank_of(vec![topic_answering("Tiny", 3, AnswerKey::C)]))
        .await
        .unwrap();

    let questions = db.random_questions(Some("Tiny"), 10).await.unwrap();
    assert_eq!(questions.len(), 3);
}

#[tokio::test]
async fn test_random_sampling_respects_topic_filter() {
    let db = create_test_db().await;
    db.load_bank(bank_of(vec![
        topic_answering("NumPy", 12, AnswerKey::A),
        topic_answering("Pandas", 12, AnswerKey::B),
    ]))
    .await
    .unwrap();

    let questions = db.random_questions(Some("Pandas"), 10).await.unwrap();
    assert_eq!(questions.len(), 10);
    for question in &questions {
        assert!(question.prompt.starts_with("Pandas question"));
        assert_eq!(question.correct, AnswerKey::B);
    }
}

#[tokio::test]
async fn test_unknown_topic_yields_nothing() {
    let db = create_test_db().await;
    db.load_bank(bank_of(vec![topic_answering("NumPy", 12, AnswerKey::A)]))
        .await
        .unwrap();

    let questions = db.random_questions(Some("Fortran"), 10).await.unwrap();
    assert!(questions.is_empty());
}

#[tokio::test]
async fn test_invalid_answer_letter_never_reaches_a_session() {
    let db = create_test_db().await;
    db.load_bank(bank_of(vec![topic_answering("NumPy", 2, AnswerKey::A)]))
        .await
        .unwrap();

    let topic_id = db.topics().await.unwrap()[0].id;

    // Sneak a malformed row past the CHECK constraint, as a hand-edited
    // database could.
    let mut conn = db.pool().acquire().await.unwrap();
    sqlx::query("PRAGMA ignore_check_constraints = ON")
        .execute(&mut *conn)
        .await
        .unwrap();
    sqlx::query(
        "INSERT INTO questions (topic_id, prompt, option_a, option_b, option_c, correct) \
         VALUES (?1, 'broken', 'x', 'y', 'z', 'q')",
    )
    .bind(topic_id)
    .execute(&mut *conn)
    .await
    .unwrap();
    drop(conn);

    assert_eq!(db.questions_count().await.unwrap(), 3);

    let questions = db.random_questions(None, 10).await.unwrap();
    assert_eq!(questions.len(), 2);
    assert!(questions.iter().all(|q| q.prompt != "broken"));
}

#[tokio::test]
async fn test_results_log_orders_newest_first_and_caps() {
    let db = create_test_db().await;

    for i in 1..=12i64 {
        db.append_result(&NewSessionResult {
            topic: format!("round-{i}"),
            correct: i,
            total: 12,
            percentage: i as f64 / 12.0 * 100.0,
        })
        .await
        .unwrap();
    }

    let recent = db.recent_results(10).await.unwrap();
    assert_eq!(recent.len(), 10);
    assert_eq!(recent[0].topic, "round-12");
    assert_eq!(recent[9].topic, "round-3");
    assert_eq!(recent[0].correct, 12);
    assert_eq!(recent[0].total, 12);
}

#[tokio::test]
async fn test_results_log_starts_empty() {
    let db = create_test_db().await;
    let recent = db.recent_results(10).await.unwrap();
    assert!(recent.is_empty());
}
