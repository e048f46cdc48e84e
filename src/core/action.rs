//! # Actions
//!
//! Everything that can happen in Drillbook becomes an `Action`.
//! User presses Enter on a topic? That's `Action::OpenTopic(i)`.
//! User answers a question? That's `Action::SelectOption(i)`.
//!
//! The `update()` function takes the current state and an action,
//! then mutates the state. No side effects here. I/O happens elsewhere.
//!
//! ```text
//! State + Action  →  update()  →  New State
//! ```
//!
//! This makes everything testable: drive a whole quiz session through
//! `update()` and assert on the resulting state, no terminal needed.
//! Every transition is total. An action that doesn't apply to the
//! current view is a no-op, never a panic.

use log::debug;

use crate::core::state::{App, Mode, View};

/// Every user interaction, as data.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Home → Topic(index, Learn) with fresh controllers.
    OpenTopic(usize),
    /// Any topic view → Home, discarding both controllers.
    GoHome,
    /// Switch which controller renders. Preserves both controllers' state.
    SetMode(Mode),
    /// Learn mode: next slide (clamped).
    NextSlide,
    /// Learn mode: previous slide (clamped).
    PrevSlide,
    /// Quiz mode: commit an answer for the current question.
    SelectOption(usize),
    /// Quiz mode: leave the current reveal (next question or finish).
    AdvanceQuestion,
    /// Quiz mode: back to question 0 with score cleared.
    ResetQuiz,
    Quit,
}

/// What the event loop should do after an update. The reducer stays pure;
/// anything beyond state mutation is signalled here.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    None,
    Quit,
}

/// Apply one action to the app state.
pub fn update(app: &mut App, action: Action) -> Effect {
    debug!("update: {:?}", action);
    match action {
        Action::Quit => return Effect::Quit,

        Action::OpenTopic(index) => {
            if index < app.catalog.len() {
                app.view = View::open_topic(index, app.catalog.topic(index));
                app.status_message = format!("Learning: {}", app.catalog.topic(index).title);
            } else {
                log::warn!("OpenTopic({index}) out of range, catalog has {}", app.catalog.len());
            }
        }

        Action::GoHome => {
            app.view = View::Home;
            app.status_message = String::from("Pick a topic to start");
        }

        Action::SetMode(new_mode) => {
            if let View::Topic { mode, .. } = &mut app.view {
                *mode = new_mode;
            }
        }

        Action::NextSlide => {
            if let View::Topic { mode: Mode::Learn, learn, .. } = &mut app.view {
                learn.advance();
            }
        }

        Action::PrevSlide => {
            if let View::Topic { mode: Mode::Learn, learn, .. } = &mut app.view {
                learn.retreat();
            }
        }

        Action::SelectOption(option) => {
            if let View::Topic { index, mode: Mode::Quiz, quiz, .. } = &mut app.view {
                quiz.select(app.catalog.topic(*index), option);
            }
        }

        Action::AdvanceQuestion => {
            if let View::Topic { mode: Mode::Quiz, quiz, .. } = &mut app.view {
                quiz.advance();
                if quiz.finished() {
                    app.status_message =
                        format!("Score: {} / {}", quiz.score(), quiz.question_count());
                }
            }
        }

        Action::ResetQuiz => {
            if let View::Topic { mode: Mode::Quiz, quiz, .. } = &mut app.view {
                quiz.reset();
                app.status_message = String::from("Quiz restarted");
            }
        }
    }
    Effect::None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::test_app;

    fn open_quiz(app: &mut App) {
        update(app, Action::OpenTopic(0));
        update(app, Action::SetMode(Mode::Quiz));
    }

    #[test]
    fn quit_returns_quit_effect() {
        let mut app = test_app();
        assert_eq!(update(&mut app, Action::Quit), Effect::Quit);
    }

    #[test]
    fn open_topic_out_of_range_stays_home() {
        let mut app = test_app();
        update(&mut app, Action::OpenTopic(99));
        assert!(matches!(app.view, View::Home));
    }

    #[test]
    fn go_home_discards_controllers() {
        let mut app = test_app();
        open_quiz(&mut app);
        update(&mut app, Action::SelectOption(1));
        update(&mut app, Action::GoHome);
        assert!(matches!(app.view, View::Home));

        // Reopening the same topic starts from scratch.
        open_quiz(&mut app);
        match &app.view {
            View::Topic { quiz, .. } => {
                assert_eq!(quiz.score(), 0);
                assert_eq!(quiz.question(), 0);
            }
            View::Home => panic!("expected a topic view"),
        }
    }

    #[test]
    fn mode_switch_preserves_quiz_progress() {
        let mut app = test_app();
        open_quiz(&mut app);
        update(&mut app, Action::SelectOption(1));
        update(&mut app, Action::AdvanceQuestion);
        update(&mut app, Action::SetMode(Mode::Learn));
        update(&mut app, Action::SetMode(Mode::Quiz));
        match &app.view {
            View::Topic { quiz, .. } => {
                assert_eq!(quiz.question(), 1);
                assert_eq!(quiz.score(), 1);
            }
            View::Home => panic!("expected a topic view"),
        }
    }

    #[test]
    fn slide_actions_ignored_in_quiz_mode() {
        let mut app = test_app();
        open_quiz(&mut app);
        update(&mut app, Action::NextSlide);
        update(&mut app, Action::SetMode(Mode::Learn));
        match &app.view {
            View::Topic { learn, .. } => assert_eq!(learn.slide(), 0),
            View::Home => panic!("expected a topic view"),
        }
    }

    #[test]
    fn quiz_actions_ignored_in_learn_mode() {
        let mut app = test_app();
        update(&mut app, Action::OpenTopic(0));
        update(&mut app, Action::SelectOption(1));
        update(&mut app, Action::SetMode(Mode::Quiz));
        match &app.view {
            View::Topic { quiz, .. } => {
                assert_eq!(quiz.score(), 0);
                assert!(!quiz.revealed());
            }
            View::Home => panic!("expected a topic view"),
        }
    }

    #[test]
    fn quiz_actions_ignored_at_home() {
        let mut app = test_app();
        assert_eq!(update(&mut app, Action::SelectOption(0)), Effect::None);
        assert_eq!(update(&mut app, Action::AdvanceQuestion), Effect::None);
        assert_eq!(update(&mut app, Action::NextSlide), Effect::None);
        assert!(matches!(app.view, View::Home));
    }

    #[test]
    fn finishing_quiz_reports_score_in_status() {
        let mut app = test_app();
        open_quiz(&mut app);
        let answers: Vec<usize> = match &app.view {
            View::Topic { index, .. } => {
                app.catalog.topic(*index).quiz.iter().map(|q| q.answer).collect()
            }
            View::Home => panic!("expected a topic view"),
        };
        let total = answers.len();
        for answer in answers {
            update(&mut app, Action::SelectOption(answer));
            update(&mut app, Action::AdvanceQuestion);
        }
        assert_eq!(app.status_message, format!("Score: {total} / {total}"));
    }

    #[test]
    fn switching_topics_resets_quiz_state() {
        let mut app = test_app();
        open_quiz(&mut app);
        update(&mut app, Action::SelectOption(1));
        update(&mut app, Action::AdvanceQuestion);
        update(&mut app, Action::SelectOption(2));
        update(&mut app, Action::AdvanceQuestion);

        // Open a different topic while the first quiz is mid-progress.
        update(&mut app, Action::OpenTopic(1));
        match &app.view {
            View::Topic { index, mode, quiz, .. } => {
                assert_eq!(*index, 1);
                assert_eq!(*mode, Mode::Learn);
                assert_eq!(quiz.score(), 0);
                assert_eq!(quiz.question(), 0);
            }
            View::Home => panic!("expected a topic view"),
        }
    }
}
