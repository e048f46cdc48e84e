//! # Core Application Logic
//!
//! This module contains Drillbook's business logic.
//! It knows nothing about any specific UI technology.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • Catalog (content)    │
//!                    │  • State (view router)  │
//!                    │  • Action (events)      │
//!                    │  • update() (reducer)   │
//!                    │                         │
//!                    │  No I/O. No UI. Pure.   │
//!                    └───────────┬─────────────┘
//!                                │
//!                                ▼
//!                         ┌────────────┐
//!                         │    TUI     │
//!                         │  Adapter   │
//!                         │ (ratatui)  │
//!                         └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`catalog`]: immutable topic/lesson/question content types
//! - [`learn`]: slide navigation for learn mode
//! - [`quiz`]: the answer/reveal/advance state machine for quiz mode
//! - [`state`]: the `App` struct and the `View` router
//! - [`action`]: the `Action` enum and the `update()` reducer
//! - [`config`]: layered configuration (file, env, CLI)

pub mod action;
pub mod catalog;
pub mod config;
pub mod learn;
pub mod quiz;
pub mod state;
