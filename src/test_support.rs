//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use crate::core::catalog::{Catalog, Lesson, QuizQuestion, Topic};
use crate::core::state::App;

/// A small two-lesson, three-question fixture topic. Every question has
/// three options with answer index 1, 2, 1 so tests can pick right and
/// wrong answers deliberately.
pub fn test_topic() -> Topic {
    Topic {
        id: "fixture",
        title: "Fixture Topic".to_string(),
        color: (0x3b, 0x82, 0xf6),
        lessons: vec![
            Lesson {
                title: "First slide".to_string(),
                body: "Some **markdown** body".to_string(),
                example: "An example sentence.".to_string(),
            },
            Lesson {
                title: "Second slide".to_string(),
                body: "More body text".to_string(),
                example: "Another example.".to_string(),
            },
        ],
        quiz: vec![
            question(vec!["a", "b", "c"], 1),
            question(vec!["a", "b", "c"], 2),
            question(vec!["a", "b", "c"], 1),
        ],
    }
}

/// A fixture topic with a custom quiz: one `(options, answer)` pair per
/// question. Lessons are a single placeholder slide.
pub fn topic_with_quiz(quiz: Vec<(Vec<&str>, usize)>) -> Topic {
    Topic {
        id: "fixture",
        title: "Fixture Topic".to_string(),
        color: (0x10, 0xb9, 0x81),
        lessons: vec![Lesson {
            title: "Only slide".to_string(),
            body: "body".to_string(),
            example: "example".to_string(),
        }],
        quiz: quiz.into_iter().map(|(options, answer)| question(options, answer)).collect(),
    }
}

fn question(options: Vec<&str>, answer: usize) -> QuizQuestion {
    QuizQuestion {
        prompt: "Pick one".to_string(),
        options: options.into_iter().map(|s| s.to_string()).collect(),
        answer,
        explanation: "Because.".to_string(),
    }
}

/// Creates a test App over a two-topic fixture catalog.
pub fn test_app() -> App {
    let second = Topic { id: "fixture-b", ..test_topic() };
    let catalog = Catalog::new(vec![test_topic(), second]).unwrap();
    App::new(catalog)
}
