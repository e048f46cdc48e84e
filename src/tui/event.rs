use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers};

/// TUI-specific input events, one step above raw crossterm.
///
/// The mapping is mode-agnostic: what `Up` or `Submit` *means* depends on
/// the active view and is decided in the event loop, not here.
pub enum TuiEvent {
    /// Ctrl+C always quits, regardless of view.
    ForceQuit,
    Quit,
    /// Enter: open topic, commit answer, or advance a reveal.
    Submit,
    Escape,
    Up,
    Down,
    Left,
    Right,
    /// Tab toggles Learn/Quiz inside a topic.
    SwitchMode,
    Reset,
    /// '1'..='9' as typed (1-based).
    Digit(u8),
    Resize,
}

/// Poll for an event, blocking up to `timeout`.
pub fn poll_event_timeout(timeout: std::time::Duration) -> Option<TuiEvent> {
    if !event::poll(timeout).ok()? {
        return None;
    }
    match event::read().ok()? {
        Event::Key(key) if key.kind != KeyEventKind::Release => {
            log::debug!("Key event: {:?} with modifiers {:?}", key.code, key.modifiers);
            match (key.modifiers, key.code) {
                (KeyModifiers::CONTROL, KeyCode::Char('c')) => Some(TuiEvent::ForceQuit),
                (_, KeyCode::Char('q')) => Some(TuiEvent::Quit),
                (_, KeyCode::Enter) => Some(TuiEvent::Submit),
                (_, KeyCode::Esc) => Some(TuiEvent::Escape),
                (_, KeyCode::Up | KeyCode::Char('k')) => Some(TuiEvent::Up),
                (_, KeyCode::Down | KeyCode::Char('j')) => Some(TuiEvent::Down),
                (_, KeyCode::Left | KeyCode::Char('h')) => Some(TuiEvent::Left),
                (_, KeyCode::Right | KeyCode::Char('l')) => Some(TuiEvent::Right),
                (_, KeyCode::Tab) => Some(TuiEvent::SwitchMode),
                (_, KeyCode::Char('r')) => Some(TuiEvent::Reset),
                (_, KeyCode::Char(c @ '1'..='9')) => Some(TuiEvent::Digit(c as u8 - b'0')),
                _ => None,
            }
        }
        Event::Resize(_, _) => Some(TuiEvent::Resize),
        _ => None,
    }
}

/// Poll for an event without blocking (returns immediately).
pub fn poll_event_immediate() -> Option<TuiEvent> {
    poll_event_timeout(std::time::Duration::ZERO)
}
