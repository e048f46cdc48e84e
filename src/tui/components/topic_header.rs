//! # Topic Header Component
//!
//! The colored bar at the top of an open topic: topic title, Learn/Quiz
//! mode tabs, and the transient status message. Purely presentational;
//! all props come from core state.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph};

use crate::core::state::Mode;
use crate::tui::component::Component;

pub struct TopicHeader<'a> {
    pub title: &'a str,
    pub mode: Mode,
    pub status: &'a str,
    pub color: Color,
}

impl<'a> TopicHeader<'a> {
    pub fn new(title: &'a str, mode: Mode, status: &'a str, color: Color) -> Self {
        Self { title, mode, status, color }
    }

    fn tab(&self, label: &'static str, tab_mode: Mode) -> Span<'static> {
        if self.mode == tab_mode {
            Span::styled(
                format!(" {label} "),
                Style::default()
                    .fg(Color::Black)
                    .bg(self.color)
                    .add_modifier(Modifier::BOLD),
            )
        } else {
            Span::styled(format!(" {label} "), Style::default().fg(Color::DarkGray))
        }
    }
}

impl Component for TopicHeader<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let tabs = Line::from(vec![
            self.tab("學習區 Learn", Mode::Learn),
            Span::raw(" "),
            self.tab("挑戰區 Quiz", Mode::Quiz),
            Span::raw("   "),
            Span::styled(self.status.to_string(), Style::default().fg(Color::DarkGray)),
            Span::raw("   "),
            Span::styled(
                "Tab switch · Esc home",
                Style::default().fg(Color::DarkGray).add_modifier(Modifier::DIM),
            ),
        ]);

        let header = Paragraph::new(tabs).block(
            Block::bordered()
                .title(format!(" {} ", self.title))
                .title_style(Style::default().fg(self.color).add_modifier(Modifier::BOLD))
                .border_style(Style::default().fg(self.color)),
        );
        frame.render_widget(header, area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    #[test]
    fn shows_title_tabs_and_status() {
        let backend = TestBackend::new(80, 3);
        let mut terminal = Terminal::new(backend).unwrap();
        let mut header =
            TopicHeader::new("交通工具趴趴走", Mode::Learn, "Learning", Color::Blue);
        terminal.draw(|f| header.render(f, f.area())).unwrap();

        let text: String = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect();
        assert!(text.contains("交通工具趴趴走"));
        assert!(text.contains("Learn"));
        assert!(text.contains("Quiz"));
        assert!(text.contains("Learning"));
    }
}
