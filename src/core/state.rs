//! # Application State
//!
//! Core business state for Drillbook. This module contains domain logic
//! only - no TUI-specific types. Presentation state (cursors, scroll
//! offsets, animation) lives in the `tui` module.
//!
//! ```text
//! App
//! ├── catalog: Catalog          // immutable topic content
//! ├── view: View                // Home, or an open Topic
//! └── status_message: String    // status bar text
//!
//! View::Topic
//! ├── index: usize              // which catalog topic is open
//! ├── mode: Mode                // Learn or Quiz (which controller renders)
//! ├── learn: LearnState         // slide position
//! └── quiz: QuizState           // quiz progress
//! ```
//!
//! State changes only happen through `update(app, action)` in action.rs.
//! This keeps things predictable, so no surprise mutations.

use crate::core::catalog::{Catalog, Topic};
use crate::core::learn::LearnState;
use crate::core::quiz::QuizState;

/// Which controller a topic view is showing. Switching mode never resets
/// either controller's state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Learn,
    Quiz,
}

/// Top-level view router.
///
/// Both controllers live inside the `Topic` variant, so leaving a topic
/// discards them by construction; there is no way to carry quiz progress
/// across topics.
#[derive(Debug)]
pub enum View {
    Home,
    Topic {
        index: usize,
        mode: Mode,
        learn: LearnState,
        quiz: QuizState,
    },
}

impl View {
    /// Fresh controllers for the given topic, starting in learn mode.
    pub fn open_topic(index: usize, topic: &Topic) -> Self {
        View::Topic {
            index,
            mode: Mode::Learn,
            learn: LearnState::new(topic.lessons.len()),
            quiz: QuizState::new(topic.quiz.len()),
        }
    }
}

pub struct App {
    pub catalog: Catalog,
    pub view: View,
    pub status_message: String,
}

impl App {
    pub fn new(catalog: Catalog) -> Self {
        Self {
            catalog,
            view: View::Home,
            status_message: String::from("Pick a topic to start"),
        }
    }

    /// The currently open topic, if any.
    pub fn open_topic(&self) -> Option<&Topic> {
        match self.view {
            View::Home => None,
            View::Topic { index, .. } => Some(self.catalog.topic(index)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::test_app;

    #[test]
    fn app_starts_at_home() {
        let app = test_app();
        assert!(matches!(app.view, View::Home));
        assert!(app.open_topic().is_none());
        assert_eq!(app.status_message, "Pick a topic to start");
    }

    #[test]
    fn open_topic_starts_in_learn_mode_with_fresh_controllers() {
        let app = test_app();
        let view = View::open_topic(0, app.catalog.topic(0));
        match view {
            View::Topic { index, mode, learn, quiz } => {
                assert_eq!(index, 0);
                assert_eq!(mode, Mode::Learn);
                assert_eq!(learn.slide(), 0);
                assert_eq!(quiz.score(), 0);
            }
            View::Home => panic!("expected a topic view"),
        }
    }
}
