// Question bank documents - the seed data deserialized from bank.json

use serde::{Deserialize, Serialize};

/// One of the three answer slots of a question.
///
/// This is the only representation of an answer letter in the crate: the
/// bank, the store boundary and the wire all parse into it, so a stray
/// letter can never travel past the place it was read.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AnswerKey {
    A,
    B,
    C,
}

impl AnswerKey {
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "a" => Some(Self::A),
            "b" => Some(Self::B),
            "c" => Some(Self::C),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::A => "a",
            Self::B => "b",
            Self::C => "c",
        }
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Bank {
    pub topics: Vec<BankTopic>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BankTopic {
    pub name: String,
    pub description: String,
    #[serde(default = "default_icon")]
    pub icon: String,
    pub questions: Vec<BankQuestion>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BankQuestion {
    pub prompt: String,
    pub option_a: String,
    pub option_b: String,
    pub option_c: String,
    pub answer: AnswerKey,
    #[serde(default)]
    pub explanation: String,
}

fn default_icon() -> String {
    "📚".to_owned()
}

/// The question bank shipped with the binary, loaded on first start.
pub fn builtin_bank() -> color_eyre::Result<Bank> {
    let bank = serde_json::from_str(include_str!("../bank.json"))?;
    Ok(bank)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn answer_key_round_trips() {
        for (letter, key) in [("a", AnswerKey::A), ("b", AnswerKey::B), ("c", AnswerKey::C)] {
            assert_eq!(AnswerKey::parse(letter), Some(key));
            assert_eq!(key.as_str(), letter);
        }
        assert_eq!(AnswerKey::parse("d"), None);
        assert_eq!(AnswerKey::parse(""), None);
    }

    #[test]
    fn builtin_bank_is_well_formed() {
        let bank = builtin_bank().unwrap();
        assert!(!bank.topics.is_empty());
        for topic in &bank.topics {
            assert!(!topic.name.is_empty());
            assert!(!topic.questions.is_empty());
        }
    }
}
