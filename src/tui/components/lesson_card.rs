//! # Lesson Card Component
//!
//! One learn-mode slide: a progress bar in the topic color, the lesson
//! title, the markdown body (scrollable when taller than the card), the
//! example footer, and the prev/next controls with boundary dimming.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect, Size};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Padding, Paragraph, Wrap};
use tui_scrollview::{ScrollView, ScrollViewState, ScrollbarVisibility};

use crate::core::catalog::Topic;
use crate::core::learn::LearnState;
use crate::tui::component::Component;
use crate::tui::components::accent;
use crate::tui::markdown;

pub struct LessonCard<'a> {
    pub topic: &'a Topic,
    pub learn: &'a LearnState,
    /// Body scroll position, owned by `TuiState` so it survives redraws.
    pub scroll: &'a mut ScrollViewState,
}

impl<'a> LessonCard<'a> {
    pub fn new(topic: &'a Topic, learn: &'a LearnState, scroll: &'a mut ScrollViewState) -> Self {
        Self { topic, learn, scroll }
    }
}

impl Component for LessonCard<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let color = accent(self.topic.color);
        let lesson = &self.topic.lessons[self.learn.slide()];

        // The example footer grows with its wrapped text.
        let example_width = area.width.saturating_sub(4).max(1);
        let example_lines = textwrap::wrap(&lesson.example, example_width as usize).len() as u16;

        let layout = Layout::vertical([
            Constraint::Length(1),                 // progress bar
            Constraint::Min(3),                    // body card
            Constraint::Length(example_lines + 2), // example footer
            Constraint::Length(1),                 // controls
        ]);
        let [progress_area, body_area, example_area, controls_area] = layout.areas(area);

        self.render_progress(frame, progress_area, color);
        self.render_body(frame, body_area, color, lesson);
        self.render_example(frame, example_area, lesson);
        self.render_controls(frame, controls_area, color);
    }
}

impl LessonCard<'_> {
    fn render_progress(&self, frame: &mut Frame, area: Rect, color: Color) {
        let total = self.learn.slide_count() as u32;
        let filled = (area.width as u32 * (self.learn.slide() as u32 + 1) / total.max(1)) as usize;
        let rest = (area.width as usize).saturating_sub(filled);
        let bar = Line::from(vec![
            Span::styled("━".repeat(filled), Style::default().fg(color)),
            Span::styled("━".repeat(rest), Style::default().fg(Color::DarkGray).add_modifier(Modifier::DIM)),
        ]);
        frame.render_widget(Paragraph::new(bar), area);
    }

    fn render_body(
        &mut self,
        frame: &mut Frame,
        area: Rect,
        color: Color,
        lesson: &crate::core::catalog::Lesson,
    ) {
        let block = Block::bordered()
            .title(format!(" {} ", lesson.title))
            .title_style(Style::default().fg(color).add_modifier(Modifier::BOLD))
            .border_style(Style::default().fg(color))
            .padding(Padding::horizontal(1));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let body = markdown::render(&lesson.body, Color::White);
        let paragraph = Paragraph::new(body).wrap(Wrap { trim: false });

        // Render through a scroll view sized to the full text so long
        // lessons can be scrolled with Up/Down.
        let content_width = inner.width.saturating_sub(1).max(1);
        let content_height = paragraph.line_count(content_width) as u16;
        let mut scroll_view = ScrollView::new(Size::new(content_width, content_height))
            .vertical_scrollbar_visibility(ScrollbarVisibility::Automatic)
            .horizontal_scrollbar_visibility(ScrollbarVisibility::Never);
        scroll_view.render_widget(
            paragraph,
            Rect::new(0, 0, content_width, content_height),
        );
        frame.render_stateful_widget(scroll_view, inner, self.scroll);
    }

    fn render_example(&self, frame: &mut Frame, area: Rect, lesson: &crate::core::catalog::Lesson) {
        let example = Paragraph::new(Line::from(Span::styled(
            format!("\"{}\"", lesson.example),
            Style::default().add_modifier(Modifier::ITALIC),
        )))
        .wrap(Wrap { trim: true })
        .block(
            Block::bordered()
                .title(" EXAMPLE ")
                .title_style(Style::default().fg(Color::DarkGray))
                .border_style(Style::default().fg(Color::DarkGray))
                .padding(Padding::horizontal(1)),
        );
        frame.render_widget(example, area);
    }

    fn render_controls(&self, frame: &mut Frame, area: Rect, color: Color) {
        let prev_style = if self.learn.at_first() {
            Style::default().fg(Color::DarkGray).add_modifier(Modifier::DIM)
        } else {
            Style::default().fg(color)
        };
        let next_style = if self.learn.at_last() {
            Style::default().fg(Color::DarkGray).add_modifier(Modifier::DIM)
        } else {
            Style::default().fg(color)
        };

        let controls = Line::from(vec![
            Span::styled("◀ prev", prev_style),
            Span::styled(
                format!("   {} / {}   ", self.learn.slide() + 1, self.learn.slide_count()),
                Style::default().fg(Color::DarkGray),
            ),
            Span::styled("next ▶", next_style),
        ]);
        frame.render_widget(
            Paragraph::new(controls).alignment(Alignment::Center),
            area,
        );
    }
}
