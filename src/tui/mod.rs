//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the UI,
//! and translates keyboard events into core::Action values.
//!
//! This is the only module that knows about ratatui and crossterm.
//! The core never imports from here, so the state machine stays testable
//! without a terminal.
//!
//! ## Redraw Strategy
//!
//! The event loop uses conditional redraw to avoid unnecessary work:
//!
//! - **Animating** (home menu, finished screen): draws every ~80ms so the
//!   pulse effect stays smooth.
//! - **Idle** (reading a lesson, answering): sleeps up to 500ms, only
//!   redraws on events or terminal resize.

mod component;
mod components;
mod event;
pub mod markdown;
mod ui;

use log::info;
use std::io::stdout;

use crossterm::cursor::Hide;
use crossterm::execute;
use tui_scrollview::ScrollViewState;

use crate::core::action::{Action, Effect, update};
use crate::core::catalog::Catalog;
use crate::core::config::ResolvedConfig;
use crate::core::state::{App, Mode, View};
use crate::tui::event::{TuiEvent, poll_event_immediate, poll_event_timeout};

/// TUI-specific presentation state (not part of core business logic).
///
/// Cursors live here, not in the core: moving the highlight over an option
/// commits nothing. Only Enter or a digit key produces an `Action`.
pub struct TuiState {
    /// Highlighted row on the home menu.
    pub topic_cursor: usize,
    /// Highlighted option row while answering a question.
    pub option_cursor: usize,
    /// Scroll position of the lesson body.
    pub lesson_scroll: ScrollViewState,
    /// Animation state
    pub pulse_value: f32,
}

impl TuiState {
    pub fn new() -> Self {
        Self {
            topic_cursor: 0,
            option_cursor: 0,
            lesson_scroll: ScrollViewState::default(),
            pulse_value: 0.0,
        }
    }

    /// Fresh per-topic presentation state (after opening or leaving a topic).
    fn reset_topic_state(&mut self) {
        self.option_cursor = 0;
        self.lesson_scroll = ScrollViewState::default();
    }
}

impl Default for TuiState {
    fn default() -> Self {
        Self::new()
    }
}

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> std::io::Result<Self> {
        execute!(stdout(), Hide)?;
        info!("Terminal modes enabled (cursor hidden)");
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(stdout(), crossterm::cursor::Show);
    }
}

pub fn run(catalog: Catalog, config: &ResolvedConfig) -> std::io::Result<()> {
    let mut app = App::new(catalog);
    let mut tui = TuiState::new();

    // --topic / DRILLBOOK_TOPIC / config default_topic: jump straight in.
    if let Some(id) = &config.start_topic {
        match app.catalog.position(id) {
            Some(index) => {
                update(&mut app, Action::OpenTopic(index));
                tui.topic_cursor = index;
            }
            None => {
                log::warn!("Unknown start topic '{}', staying on the home menu", id);
                app.status_message = format!("Unknown topic '{id}'");
            }
        }
    }

    let mut terminal = ratatui::init();
    let _terminal_mode_guard = TerminalModeGuard::new();

    // Animation timer
    let start_time = std::time::Instant::now();
    let mut needs_redraw = true; // Force first frame

    loop {
        // Pulse animation runs where something breathes: the home menu
        // cursor and the finished screen trophy.
        let animating = match &app.view {
            View::Home => true,
            View::Topic { quiz, .. } => quiz.finished(),
        };
        if animating {
            needs_redraw = true;
        }

        // Only draw when something changed
        if needs_redraw {
            let elapsed = start_time.elapsed().as_secs_f32();
            tui.pulse_value = (elapsed * 5.0).sin() * 0.5 + 0.5;
            terminal.draw(|f| ui::draw_ui(f, &app, &mut tui))?;
            needs_redraw = false;
        }

        // Dynamic poll timeout: short when animating (~12fps), long when idle
        let timeout = if animating {
            std::time::Duration::from_millis(80)
        } else {
            std::time::Duration::from_millis(500)
        };
        let first_event = poll_event_timeout(timeout);

        // Process first event + drain ALL pending events before next draw
        let mut should_quit = false;
        if first_event.is_some() {
            needs_redraw = true;
        }
        for event in first_event
            .into_iter()
            .chain(std::iter::from_fn(poll_event_immediate))
        {
            // Resize just needs a redraw (already flagged above)
            if matches!(event, TuiEvent::Resize) {
                continue;
            }

            // Ctrl+C and 'q' always quit regardless of view
            if matches!(event, TuiEvent::ForceQuit | TuiEvent::Quit) {
                if update(&mut app, Action::Quit) == Effect::Quit {
                    should_quit = true;
                }
                continue;
            }

            if let Some(action) = dispatch(&event, &app, &mut tui) {
                let effect = update(&mut app, action);
                if effect == Effect::Quit {
                    should_quit = true;
                }
                // Per-topic presentation state follows the core transitions.
                match action {
                    Action::OpenTopic(_) | Action::GoHome | Action::ResetQuiz => {
                        tui.reset_topic_state()
                    }
                    Action::AdvanceQuestion => tui.option_cursor = 0,
                    Action::NextSlide | Action::PrevSlide => {
                        tui.lesson_scroll = ScrollViewState::default()
                    }
                    _ => {}
                }
            }
        }

        if should_quit {
            break;
        }
    }

    ratatui::restore();
    Ok(())
}

/// Map a key event to an `Action` given the current view, or handle it as
/// pure presentation (cursor movement, scrolling) and return `None`.
fn dispatch(event: &TuiEvent, app: &App, tui: &mut TuiState) -> Option<Action> {
    match &app.view {
        View::Home => match event {
            TuiEvent::Up => {
                tui.topic_cursor = tui.topic_cursor.saturating_sub(1);
                None
            }
            TuiEvent::Down => {
                tui.topic_cursor = (tui.topic_cursor + 1).min(app.catalog.len() - 1);
                None
            }
            TuiEvent::Submit => Some(Action::OpenTopic(tui.topic_cursor)),
            TuiEvent::Digit(d) => {
                let index = (*d as usize) - 1;
                (index < app.catalog.len()).then(|| {
                    tui.topic_cursor = index;
                    Action::OpenTopic(index)
                })
            }
            _ => None,
        },

        View::Topic { mode: Mode::Learn, .. } => match event {
            TuiEvent::Escape => Some(Action::GoHome),
            TuiEvent::SwitchMode => Some(Action::SetMode(Mode::Quiz)),
            TuiEvent::Left => Some(Action::PrevSlide),
            TuiEvent::Right => Some(Action::NextSlide),
            TuiEvent::Up => {
                tui.lesson_scroll.scroll_up();
                None
            }
            TuiEvent::Down => {
                tui.lesson_scroll.scroll_down();
                None
            }
            _ => None,
        },

        View::Topic { mode: Mode::Quiz, index, quiz, .. } => {
            let option_count = app.catalog.topic(*index).quiz[quiz.question()].options.len();
            match event {
                TuiEvent::Escape => Some(Action::GoHome),
                TuiEvent::SwitchMode => Some(Action::SetMode(Mode::Learn)),
                TuiEvent::Reset => Some(Action::ResetQuiz),
                TuiEvent::Submit => {
                    if quiz.finished() {
                        // "Play again" on the results screen.
                        Some(Action::ResetQuiz)
                    } else if quiz.revealed() {
                        Some(Action::AdvanceQuestion)
                    } else {
                        Some(Action::SelectOption(tui.option_cursor))
                    }
                }
                TuiEvent::Digit(d) if !quiz.finished() && !quiz.revealed() => {
                    let index = (*d as usize) - 1;
                    (index < option_count).then(|| {
                        tui.option_cursor = index;
                        Action::SelectOption(index)
                    })
                }
                TuiEvent::Up if !quiz.finished() && !quiz.revealed() => {
                    tui.option_cursor = tui.option_cursor.saturating_sub(1);
                    None
                }
                TuiEvent::Down if !quiz.finished() && !quiz.revealed() => {
                    tui.option_cursor = (tui.option_cursor + 1).min(option_count - 1);
                    None
                }
                _ => None,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::test_app;

    #[test]
    fn home_cursor_clamps_at_both_ends() {
        let app = test_app();
        let mut tui = TuiState::new();
        assert!(dispatch(&TuiEvent::Up, &app, &mut tui).is_none());
        assert_eq!(tui.topic_cursor, 0);
        dispatch(&TuiEvent::Down, &app, &mut tui);
        dispatch(&TuiEvent::Down, &app, &mut tui);
        dispatch(&TuiEvent::Down, &app, &mut tui);
        assert_eq!(tui.topic_cursor, app.catalog.len() - 1);
    }

    #[test]
    fn home_submit_opens_highlighted_topic() {
        let app = test_app();
        let mut tui = TuiState::new();
        dispatch(&TuiEvent::Down, &app, &mut tui);
        assert_eq!(dispatch(&TuiEvent::Submit, &app, &mut tui), Some(Action::OpenTopic(1)));
    }

    #[test]
    fn home_digit_out_of_range_is_ignored() {
        let app = test_app();
        let mut tui = TuiState::new();
        assert_eq!(dispatch(&TuiEvent::Digit(9), &app, &mut tui), None);
        assert_eq!(dispatch(&TuiEvent::Digit(1), &app, &mut tui), Some(Action::OpenTopic(0)));
    }

    #[test]
    fn learn_keys_map_to_slide_actions() {
        let mut app = test_app();
        update(&mut app, Action::OpenTopic(0));
        let mut tui = TuiState::new();
        assert_eq!(dispatch(&TuiEvent::Right, &app, &mut tui), Some(Action::NextSlide));
        assert_eq!(dispatch(&TuiEvent::Left, &app, &mut tui), Some(Action::PrevSlide));
        assert_eq!(
            dispatch(&TuiEvent::SwitchMode, &app, &mut tui),
            Some(Action::SetMode(Mode::Quiz))
        );
        assert_eq!(dispatch(&TuiEvent::Escape, &app, &mut tui), Some(Action::GoHome));
    }

    #[test]
    fn quiz_submit_commits_then_advances() {
        let mut app = test_app();
        update(&mut app, Action::OpenTopic(0));
        update(&mut app, Action::SetMode(Mode::Quiz));
        let mut tui = TuiState::new();

        dispatch(&TuiEvent::Down, &app, &mut tui);
        assert_eq!(tui.option_cursor, 1);
        assert_eq!(
            dispatch(&TuiEvent::Submit, &app, &mut tui),
            Some(Action::SelectOption(1))
        );

        update(&mut app, Action::SelectOption(1));
        assert_eq!(
            dispatch(&TuiEvent::Submit, &app, &mut tui),
            Some(Action::AdvanceQuestion)
        );
    }

    #[test]
    fn quiz_cursor_keys_ignored_after_reveal() {
        let mut app = test_app();
        update(&mut app, Action::OpenTopic(0));
        update(&mut app, Action::SetMode(Mode::Quiz));
        update(&mut app, Action::SelectOption(1));
        let mut tui = TuiState::new();
        assert!(dispatch(&TuiEvent::Down, &app, &mut tui).is_none());
        assert_eq!(tui.option_cursor, 0);
        assert!(dispatch(&TuiEvent::Digit(1), &app, &mut tui).is_none());
    }
}
