use quizdrill::db::Db;
use quizdrill::models::{AnswerKey, Bank, BankQuestion, BankTopic};

pub async fn create_test_db() -> Db {
    use std::sync::atomic::{AtomicU32, Ordering};
    static COUNTER: AtomicU32 = AtomicU32::new(0);
    let id = COUNTER.fetch_add(1, Ordering::SeqCst);
    let path =
        std::env::temp_dir().join(format!("quizdrill_test_{}_{}.db", std::process::id(), id));
    // Clean up leftover file from previous runs
    let _ = std::fs::remove_file(&path);
    let url = format!("sqlite://{}?mode=rwc", path.display());
    Db::new(&url).await.expect("failed to create test database")
}

/// A topic whose questions all share the same correct answer, so tests
/// can score deterministically no matter how the round was shuffled.
pub fn topic_answering(name: &str, questions: usize, answer: AnswerKey) -> BankTopic {
    BankTopic {
        name: name.to_owned(),
        description: format!("{name} test topic"),
        icon: "🧪".to_owned(),
        questions: (0..questions)
            .map(|i| BankQuestion {
                prompt: format!("{name} question {}", i + 1),
                option_a: "first".to_owned(),
                option_b: "second".to_owned(),
                option_c: "third".to_owned(),
                answer,
                explanation: format!("{name} explanation {}", i + 1),
            })
            .collect(),
    }
}

pub fn bank_of(topics: Vec<BankTopic>) -> Bank {
    Bank { topics }
}
