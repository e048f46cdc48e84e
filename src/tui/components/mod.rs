//! # TUI Components
//!
//! All UI components for the terminal interface. Components follow the
//! React pattern: they receive data via props (struct fields), render into
//! a `Frame`, and keep no state of their own. Persistent presentation
//! state (cursors, scroll offsets, the pulse value) lives in `TuiState`
//! and is passed in per frame.
//!
//! ```text
//! components/
//! ├── mod.rs          (this file)
//! ├── home.rs         (topic menu)
//! ├── topic_header.rs (colored title bar + mode tabs + status)
//! ├── lesson_card.rs  (learn mode slide)
//! └── quiz_card.rs    (quiz mode question + finished screen)
//! ```

pub mod home;
pub mod lesson_card;
pub mod quiz_card;
pub mod topic_header;

pub use home::HomeMenu;
pub use lesson_card::LessonCard;
pub use quiz_card::QuizCard;
pub use topic_header::TopicHeader;

use ratatui::style::Color;

/// Map a catalog RGB accent to a terminal color.
pub fn accent(color: (u8, u8, u8)) -> Color {
    Color::Rgb(color.0, color.1, color.2)
}
