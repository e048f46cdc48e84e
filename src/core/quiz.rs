//! Quiz-mode state machine.
//!
//! ```text
//! Answering ──select──▶ Revealed ──advance──▶ Answering (next question)
//!     ▲                     │
//!     │                     └──advance (last question)──▶ Finished
//!     └───────────────────────reset────────────────────────────┘
//! ```
//!
//! The score is incremented exactly once per question, at selection time.
//! It is never recomputed later from history, so a reveal that was scored
//! stays scored even though `selected` is cleared on advance.

use crate::core::catalog::Topic;
use log::warn;

/// Per-topic quiz progress.
///
/// Created fresh when a topic's quiz mode is entered; [`reset`](Self::reset)
/// reinitializes to the same fresh values without leaving the mode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizState {
    question: usize,
    score: usize,
    selected: Option<usize>,
    revealed: bool,
    finished: bool,
    question_count: usize,
}

impl QuizState {
    /// `question_count` is the topic's quiz length; the catalog guarantees
    /// it is at least 1.
    pub fn new(question_count: usize) -> Self {
        Self {
            question: 0,
            score: 0,
            selected: None,
            revealed: false,
            finished: false,
            question_count,
        }
    }

    pub fn question(&self) -> usize {
        self.question
    }

    pub fn score(&self) -> usize {
        self.score
    }

    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    pub fn revealed(&self) -> bool {
        self.revealed
    }

    pub fn finished(&self) -> bool {
        self.finished
    }

    pub fn question_count(&self) -> usize {
        self.question_count
    }

    pub fn on_last_question(&self) -> bool {
        self.question + 1 == self.question_count
    }

    /// Commit an answer for the current question and reveal feedback.
    ///
    /// No-op once the question is revealed (the Answering → Revealed
    /// transition is one-way per question, which is what keeps the score
    /// from double-counting) and no-op in Finished. An index outside the
    /// current question's option list is a caller error and is rejected.
    pub fn select(&mut self, topic: &Topic, index: usize) {
        if self.revealed || self.finished {
            return;
        }
        let q = &topic.quiz[self.question];
        if index >= q.options.len() {
            warn!(
                "rejecting option {} for question {} of '{}' ({} options)",
                index,
                self.question,
                topic.id,
                q.options.len()
            );
            return;
        }
        self.selected = Some(index);
        self.revealed = true;
        if index == q.answer {
            self.score += 1;
        }
    }

    /// Leave the current reveal: step to the next question, or finish
    /// after the last one. Meaningless outside Revealed, so a no-op there.
    pub fn advance(&mut self) {
        if !self.revealed || self.finished {
            return;
        }
        if self.on_last_question() {
            self.finished = true;
        } else {
            self.question += 1;
            self.selected = None;
            self.revealed = false;
        }
    }

    /// Back to Answering at question 0 with everything cleared. Valid from
    /// any state, including Finished.
    pub fn reset(&mut self) {
        *self = Self::new(self.question_count);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::topic_with_quiz;

    fn four_question_topic() -> Topic {
        topic_with_quiz(vec![
            (vec!["a", "b", "c"], 1),
            (vec!["a", "b", "c"], 2),
            (vec!["a", "b", "c"], 1),
            (vec!["a", "b", "c"], 2),
        ])
    }

    #[test]
    fn fresh_state() {
        let quiz = QuizState::new(4);
        assert_eq!(quiz.question(), 0);
        assert_eq!(quiz.score(), 0);
        assert_eq!(quiz.selected(), None);
        assert!(!quiz.revealed());
        assert!(!quiz.finished());
    }

    #[test]
    fn correct_selection_scores_and_reveals() {
        let topic = four_question_topic();
        let mut quiz = QuizState::new(topic.quiz.len());
        quiz.select(&topic, 1);
        assert_eq!(quiz.selected(), Some(1));
        assert!(quiz.revealed());
        assert_eq!(quiz.score(), 1);
    }

    #[test]
    fn wrong_selection_reveals_without_scoring() {
        let topic = four_question_topic();
        let mut quiz = QuizState::new(topic.quiz.len());
        quiz.select(&topic, 0);
        assert_eq!(quiz.selected(), Some(0));
        assert!(quiz.revealed());
        assert_eq!(quiz.score(), 0);
    }

    #[test]
    fn second_select_on_same_question_is_noop() {
        let topic = four_question_topic();
        let mut quiz = QuizState::new(topic.quiz.len());
        quiz.select(&topic, 1);
        quiz.select(&topic, 1);
        assert_eq!(quiz.score(), 1, "score must not double-count");
        quiz.select(&topic, 0);
        assert_eq!(quiz.selected(), Some(1), "selection locked after reveal");
    }

    #[test]
    fn out_of_range_selection_rejected() {
        let topic = four_question_topic();
        let mut quiz = QuizState::new(topic.quiz.len());
        quiz.select(&topic, 3);
        assert_eq!(quiz.selected(), None);
        assert!(!quiz.revealed());
    }

    #[test]
    fn advance_before_reveal_is_noop() {
        let topic = four_question_topic();
        let mut quiz = QuizState::new(topic.quiz.len());
        quiz.advance();
        assert_eq!(quiz.question(), 0);
        assert!(!quiz.finished());
    }

    #[test]
    fn advance_clears_selection_for_next_question() {
        let topic = four_question_topic();
        let mut quiz = QuizState::new(topic.quiz.len());
        quiz.select(&topic, 1);
        quiz.advance();
        assert_eq!(quiz.question(), 1);
        assert_eq!(quiz.selected(), None);
        assert!(!quiz.revealed());
        assert_eq!(quiz.score(), 1);
    }

    #[test]
    fn perfect_run_scores_full_and_finishes() {
        let topic = four_question_topic();
        let mut quiz = QuizState::new(topic.quiz.len());
        for q in &topic.quiz {
            quiz.select(&topic, q.answer);
            quiz.advance();
        }
        assert_eq!(quiz.score(), 4);
        assert!(quiz.finished());
    }

    #[test]
    fn mixed_run_scores_correct_count() {
        // answers [1,2,1,2], user picks [1,2,0,2] → 3 points
        let topic = four_question_topic();
        let mut quiz = QuizState::new(topic.quiz.len());
        for pick in [1, 2, 0, 2] {
            quiz.select(&topic, pick);
            quiz.advance();
        }
        assert_eq!(quiz.score(), 3);
        assert!(quiz.finished());
    }

    #[test]
    fn finished_is_terminal_until_reset() {
        let topic = four_question_topic();
        let mut quiz = QuizState::new(topic.quiz.len());
        for pick in [1, 2, 0, 2] {
            quiz.select(&topic, pick);
            quiz.advance();
        }
        let question_before = quiz.question();
        quiz.select(&topic, 1);
        quiz.advance();
        assert!(quiz.finished());
        assert_eq!(quiz.question(), question_before);
        assert_eq!(quiz.score(), 3);
    }

    #[test]
    fn reset_from_finished_equals_fresh_state() {
        let topic = four_question_topic();
        let mut quiz = QuizState::new(topic.quiz.len());
        for q in &topic.quiz {
            quiz.select(&topic, q.answer);
            quiz.advance();
        }
        assert!(quiz.finished());
        quiz.reset();
        assert_eq!(quiz, QuizState::new(topic.quiz.len()));
    }

    #[test]
    fn reset_mid_quiz_clears_progress() {
        let topic = four_question_topic();
        let mut quiz = QuizState::new(topic.quiz.len());
        quiz.select(&topic, 1);
        quiz.advance();
        quiz.select(&topic, 2);
        quiz.reset();
        assert_eq!(quiz, QuizState::new(topic.quiz.len()));
    }

    #[test]
    fn duplicate_option_text_judged_by_index() {
        let topic = topic_with_quiz(vec![(vec!["same", "same"], 1)]);
        let mut quiz = QuizState::new(1);
        quiz.select(&topic, 0);
        assert_eq!(quiz.score(), 0, "index 0 is wrong even with identical text");
    }
}
