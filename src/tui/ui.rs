//! Top-level frame layout: picks the component tree for the current view.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout};

use crate::core::state::{App, Mode, View};
use crate::tui::TuiState;
use crate::tui::component::Component;
use crate::tui::components::{HomeMenu, LessonCard, QuizCard, TopicHeader, accent};

pub fn draw_ui(frame: &mut Frame, app: &App, tui: &mut TuiState) {
    match &app.view {
        View::Home => {
            HomeMenu::new(app.catalog.topics(), tui.topic_cursor, tui.pulse_value)
                .render(frame, frame.area());
        }
        View::Topic { index, mode, learn, quiz } => {
            let topic = app.catalog.topic(*index);
            let layout = Layout::vertical([Constraint::Length(3), Constraint::Min(0)]);
            let [header_area, content_area] = layout.areas(frame.area());

            TopicHeader::new(&topic.title, *mode, &app.status_message, accent(topic.color))
                .render(frame, header_area);

            match mode {
                Mode::Learn => {
                    LessonCard::new(topic, learn, &mut tui.lesson_scroll)
                        .render(frame, content_area);
                }
                Mode::Quiz => {
                    QuizCard::new(topic, quiz, tui.option_cursor, tui.pulse_value)
                        .render(frame, content_area);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::action::{Action, update};
    use crate::test_support::test_app;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn buffer_text(terminal: &Terminal<TestBackend>) -> String {
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect()
    }

    #[test]
    fn draws_home_view() {
        let app = test_app();
        let mut tui = TuiState::new();
        let backend = TestBackend::new(80, 24);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|f| draw_ui(f, &app, &mut tui)).unwrap();
        assert!(buffer_text(&terminal).contains("Fixture Topic"));
    }

    #[test]
    fn draws_learn_view_after_opening_topic() {
        let mut app = test_app();
        update(&mut app, Action::OpenTopic(0));
        let mut tui = TuiState::new();
        let backend = TestBackend::new(80, 24);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|f| draw_ui(f, &app, &mut tui)).unwrap();
        let text = buffer_text(&terminal);
        assert!(text.contains("First slide"));
        assert!(text.contains("Learn"));
    }

    #[test]
    fn draws_quiz_view_after_mode_switch() {
        let mut app = test_app();
        update(&mut app, Action::OpenTopic(0));
        update(&mut app, Action::SetMode(Mode::Quiz));
        let mut tui = TuiState::new();
        let backend = TestBackend::new(80, 24);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|f| draw_ui(f, &app, &mut tui)).unwrap();
        assert!(buffer_text(&terminal).contains("Pick one"));
    }
}
