//! # Quiz Card Component
//!
//! Quiz mode rendering: per-question progress dots, the prompt, the option
//! rows, and (once the answer is revealed) correctness feedback plus the
//! explanation panel. When the quiz is finished it renders the results
//! screen instead.
//!
//! The Up/Down highlight (`cursor`) is presentation state; the committed
//! answer lives in `QuizState` and wins once present.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Flex, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Padding, Paragraph, Wrap};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::core::catalog::Topic;
use crate::core::quiz::QuizState;
use crate::tui::component::Component;
use crate::tui::components::accent;

pub struct QuizCard<'a> {
    pub topic: &'a Topic,
    pub quiz: &'a QuizState,
    /// Highlighted option row while answering.
    pub cursor: usize,
    /// Animation value in `0.0..=1.0` for the finished screen.
    pub pulse: f32,
}

impl<'a> QuizCard<'a> {
    pub fn new(topic: &'a Topic, quiz: &'a QuizState, cursor: usize, pulse: f32) -> Self {
        Self { topic, quiz, cursor, pulse }
    }
}

impl Component for QuizCard<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        if self.quiz.finished() {
            self.render_results(frame, area);
        } else {
            self.render_question(frame, area);
        }
    }
}

impl QuizCard<'_> {
    fn render_question(&self, frame: &mut Frame, area: Rect) {
        let color = accent(self.topic.color);
        let question = &self.topic.quiz[self.quiz.question()];

        let prompt = Paragraph::new(question.prompt.as_str())
            .wrap(Wrap { trim: true })
            .alignment(Alignment::Center);
        let prompt_height = prompt.line_count(area.width.saturating_sub(4).max(1)) as u16 + 2;

        let options_height = question.options.len() as u16;
        let layout = Layout::vertical([
            Constraint::Length(1),              // progress dots
            Constraint::Length(prompt_height),  // prompt card
            Constraint::Length(options_height), // option rows
            Constraint::Min(0),                 // feedback / hint
        ]);
        let [dots_area, prompt_area, options_area, feedback_area] = layout.areas(area);

        self.render_dots(frame, dots_area, color);
        frame.render_widget(
            prompt.block(
                Block::bordered()
                    .border_style(Style::default().fg(color))
                    .padding(Padding::horizontal(1)),
            ),
            prompt_area,
        );
        self.render_options(frame, options_area, question);
        self.render_feedback(frame, feedback_area, question);
    }

    /// One dot per question: answered filled, current highlighted, rest dim.
    fn render_dots(&self, frame: &mut Frame, area: Rect, color: Color) {
        let current = self.quiz.question();
        let spans: Vec<Span> = (0..self.quiz.question_count())
            .map(|i| {
                if i < current {
                    Span::styled("● ", Style::default().fg(color))
                } else if i == current {
                    Span::styled("◉ ", Style::default().fg(color).add_modifier(Modifier::BOLD))
                } else {
                    Span::styled("○ ", Style::default().fg(Color::DarkGray))
                }
            })
            .collect();
        frame.render_widget(
            Paragraph::new(Line::from(spans)).alignment(Alignment::Center),
            area,
        );
    }

    fn render_options(
        &self,
        frame: &mut Frame,
        area: Rect,
        question: &crate::core::catalog::QuizQuestion,
    ) {
        let revealed = self.quiz.revealed();
        let width = area.width.saturating_sub(6) as usize;

        let lines: Vec<Line> = question
            .options
            .iter()
            .enumerate()
            .map(|(i, option)| {
                let text = format!("{}. {}", i + 1, fit_width(option, width));
                if revealed {
                    // Feedback: the correct row is green with a check, a
                    // wrong selection red with a cross, the rest fade out.
                    if i == question.answer {
                        Line::from(Span::styled(
                            format!("  ✓ {text}"),
                            Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
                        ))
                    } else if Some(i) == self.quiz.selected() {
                        Line::from(Span::styled(
                            format!("  ✗ {text}"),
                            Style::default().fg(Color::Red),
                        ))
                    } else {
                        Line::from(Span::styled(
                            format!("    {text}"),
                            Style::default().fg(Color::DarkGray).add_modifier(Modifier::DIM),
                        ))
                    }
                } else if i == self.cursor {
                    Line::from(Span::styled(
                        format!("  ▸ {text}"),
                        Style::default().add_modifier(Modifier::BOLD),
                    ))
                } else {
                    Line::from(Span::raw(format!("    {text}")))
                }
            })
            .collect();

        frame.render_widget(Paragraph::new(lines), area);
    }

    fn render_feedback(
        &self,
        frame: &mut Frame,
        area: Rect,
        question: &crate::core::catalog::QuizQuestion,
    ) {
        if !self.quiz.revealed() {
            let hint = Paragraph::new(Line::from(Span::styled(
                "↑/↓ choose · Enter answer · r restart",
                Style::default().fg(Color::DarkGray),
            )))
            .alignment(Alignment::Center);
            frame.render_widget(hint, area);
            return;
        }

        let advance_label = if self.quiz.on_last_question() {
            "Enter → 查看成績"
        } else {
            "Enter → 下一題"
        };

        let explanation = Paragraph::new(vec![
            Line::from(vec![
                Span::styled("💡 詳解：", Style::default().add_modifier(Modifier::BOLD)),
                Span::raw(question.explanation.clone()),
            ]),
            Line::default(),
            Line::from(Span::styled(
                advance_label,
                Style::default().fg(Color::DarkGray),
            )),
        ])
        .wrap(Wrap { trim: true })
        .block(
            Block::bordered()
                .border_style(Style::default().fg(Color::Blue))
                .padding(Padding::horizontal(1)),
        );
        frame.render_widget(explanation, area);
    }

    fn render_results(&self, frame: &mut Frame, area: Rect) {
        let color = accent(self.topic.color);
        let trophy_style = if self.pulse > 0.5 {
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Yellow)
        };

        let lines = vec![
            Line::from(Span::styled("🏆", trophy_style)),
            Line::default(),
            Line::from(Span::styled(
                "恭喜完成!",
                Style::default().add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                format!("你完成了 {} 的挑戰", self.topic.title),
                Style::default().fg(Color::DarkGray),
            )),
            Line::default(),
            Line::from(Span::styled(
                format!("{} / {}", self.quiz.score(), self.quiz.question_count()),
                Style::default().fg(color).add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled("SCORE", Style::default().fg(Color::DarkGray))),
            Line::default(),
            Line::from(Span::styled(
                "r 再玩一次 · Esc 回首頁",
                Style::default().fg(Color::DarkGray),
            )),
        ];

        let height = lines.len() as u16;
        let [centered] = Layout::vertical([Constraint::Length(height)])
            .flex(Flex::Center)
            .areas(area);
        frame.render_widget(
            Paragraph::new(lines).alignment(Alignment::Center),
            centered,
        );
    }
}

/// Truncate to a display width, CJK-aware, appending `…` when cut.
fn fit_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }
    let mut out = String::new();
    let mut used = 0;
    for c in s.chars() {
        let w = c.width().unwrap_or(0);
        if used + w + 1 > max_width {
            break;
        }
        out.push(c);
        used += w;
    }
    out.push('…');
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::test_topic;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn draw(topic: &Topic, quiz: &QuizState, cursor: usize) -> String {
        let backend = TestBackend::new(70, 24);
        let mut terminal = Terminal::new(backend).unwrap();
        let mut card = QuizCard::new(topic, quiz, cursor, 0.0);
        terminal.draw(|f| card.render(f, f.area())).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect()
    }

    #[test]
    fn answering_shows_prompt_options_and_cursor() {
        let topic = test_topic();
        let quiz = QuizState::new(topic.quiz.len());
        let text = draw(&topic, &quiz, 1);
        assert!(text.contains("Pick one"));
        assert!(text.contains("1. a"));
        assert!(text.contains("▸ 2. b"));
        assert!(!text.contains("詳解"));
    }

    #[test]
    fn reveal_shows_feedback_and_explanation() {
        let topic = test_topic();
        let mut quiz = QuizState::new(topic.quiz.len());
        quiz.select(&topic, 0); // wrong; answer is 1
        let text = draw(&topic, &quiz, 0);
        assert!(text.contains("✓ 2. b"));
        assert!(text.contains("✗ 1. a"));
        assert!(text.contains("詳解"));
        assert!(text.contains("下一題"));
    }

    #[test]
    fn last_question_reveal_offers_results() {
        let topic = test_topic();
        let mut quiz = QuizState::new(topic.quiz.len());
        for _ in 0..2 {
            quiz.select(&topic, 0);
            quiz.advance();
        }
        quiz.select(&topic, 1);
        let text = draw(&topic, &quiz, 0);
        assert!(text.contains("查看成績"));
    }

    #[test]
    fn finished_quiz_renders_score_screen() {
        let topic = test_topic();
        let mut quiz = QuizState::new(topic.quiz.len());
        for q in &topic.quiz {
            quiz.select(&topic, q.answer);
            quiz.advance();
        }
        let text = draw(&topic, &quiz, 0);
        assert!(text.contains("恭喜完成!"));
        assert!(text.contains("3 / 3"));
        assert!(text.contains("再玩一次"));
    }

    #[test]
    fn fit_width_truncates_cjk_safely() {
        assert_eq!(fit_width("short", 10), "short");
        let cut = fit_width("交通工具趴趴走", 6);
        assert!(cut.ends_with('…'));
        assert!(cut.width() <= 6);
    }
}
