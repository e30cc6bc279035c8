use maud::{html, Markup};

use crate::db::models::TopicModel;
use crate::names;

/// The topic menu: one card per topic plus the all-topics round. The
/// actual game round-trips run over the JSON API.
pub fn topic_menu(topics: &[TopicModel]) -> Markup {
    html! {
        h1 { "Pick a topic" }
        section {
            @for topic in topics {
                article {
                    header {
                        span { (topic.icon) } " "
                        strong { (topic.name) }
                    }
                    p { (topic.description) }
                }
            }
            article {
                header {
                    span { "🎲" } " "
                    strong { "Everything" }
                }
                p { "Ten random questions across every topic." }
            }
        }
        footer {
            p {
                "Play via " code { "POST " (names::PLAY_URL) } ", answer via "
                code { "POST " (names::ANSWER_URL) } ", review via "
                code { "GET " (names::HISTORY_URL) } "."
            }
        }
    }
}
