//! # Home Menu Component
//!
//! The topic picker: app title, tagline, one tinted row per topic, and a
//! footer crediting the curriculum. The selection cursor is presentation
//! state owned by `TuiState` and passed in as a prop.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Flex, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Padding, Paragraph};

use crate::core::catalog::Topic;
use crate::tui::component::Component;
use crate::tui::components::accent;

pub struct HomeMenu<'a> {
    pub topics: &'a [Topic],
    /// Index of the highlighted row.
    pub cursor: usize,
    /// Animation value in `0.0..=1.0`; drives the cursor arrow emphasis.
    pub pulse: f32,
}

impl<'a> HomeMenu<'a> {
    pub fn new(topics: &'a [Topic], cursor: usize, pulse: f32) -> Self {
        Self { topics, cursor, pulse }
    }
}

impl Component for HomeMenu<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        // Title block, one row per topic, footer.
        let rows: u16 = self.topics.len() as u16 * 3;
        let layout = Layout::vertical([
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(rows),
            Constraint::Length(2),
        ])
        .flex(Flex::Center);
        let [title_area, _, menu_area, footer_area] = layout.areas(area);

        let title = Paragraph::new(vec![
            Line::from(Span::styled(
                crate::content::APP_TITLE,
                Style::default()
                    .fg(Color::Magenta)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                crate::content::APP_TAGLINE,
                Style::default().fg(Color::DarkGray),
            )),
        ])
        .alignment(Alignment::Center);
        frame.render_widget(title, title_area);

        let row_layout =
            Layout::vertical(vec![Constraint::Length(3); self.topics.len()]).split(menu_area);
        for (i, topic) in self.topics.iter().enumerate() {
            self.render_row(frame, row_layout[i], i, topic);
        }

        let footer = Paragraph::new(vec![
            Line::from(Span::styled(
                "↑/↓ choose · Enter open · q quit",
                Style::default().fg(Color::DarkGray),
            )),
            Line::from(Span::styled(
                crate::content::APP_CREDIT,
                Style::default().fg(Color::DarkGray).add_modifier(Modifier::DIM),
            )),
        ])
        .alignment(Alignment::Center);
        frame.render_widget(footer, footer_area);
    }
}

impl HomeMenu<'_> {
    fn render_row(&self, frame: &mut Frame, area: Rect, index: usize, topic: &Topic) {
        let color = accent(topic.color);
        let selected = index == self.cursor;

        let border_style = if selected {
            // Pulse between plain and bold so the active row breathes.
            if self.pulse > 0.5 {
                Style::default().fg(color).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(color)
            }
        } else {
            Style::default().fg(color).add_modifier(Modifier::DIM)
        };

        let marker = if selected { "▸ " } else { "  " };
        let line = Line::from(vec![
            Span::styled(marker, border_style),
            Span::styled(
                format!("{}. {}", index + 1, topic.title),
                if selected {
                    Style::default().fg(color).add_modifier(Modifier::BOLD)
                } else {
                    Style::default().fg(color)
                },
            ),
            Span::styled(
                format!(
                    "  ({} lessons · {} questions)",
                    topic.lessons.len(),
                    topic.quiz.len()
                ),
                Style::default().fg(Color::DarkGray),
            ),
        ]);

        let row = Paragraph::new(line).block(
            Block::bordered()
                .border_style(border_style)
                .padding(Padding::horizontal(1)),
        );
        frame.render_widget(row, area);
    }
}
