//! # Core Application Logic
//!
//! The curriculum and the navigation rules over it.
//! It knows nothing about any specific UI technology.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • Catalog (content)    │
//!                    │  • Navigation (state)   │
//!                    │  • Action + update()    │
//!                    │                         │
//!                    │  No terminal. No UI.    │
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
//! - [`catalog`]: `Catalog`, `Level`, `Lesson`, loading and validation
//! - [`navigation`]: `NavigationState`, the level/lesson state machine
//! - [`state`]: the `App` struct, all core state in one place
//! - [`action`]: the `Action` enum and the `update()` reducer
//! - [`config`]: `~/.zerohero/config.toml` and override resolution

pub mod action;
pub mod catalog;
pub mod config;
pub mod navigation;
pub mod state;
