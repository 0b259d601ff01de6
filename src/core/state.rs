//! # Application State
//!
//! Core state for zerohero. Domain logic only, no TUI-specific types.
//! Presentation state (menu overlay, scroll offsets) lives in the `tui` module.
//!
//! ```text
//! App
//! ├── catalog: Arc<Catalog>         // read-only curriculum
//! ├── navigation: NavigationState   // level + per-level lesson position
//! └── status_message: String        // title bar text
//! ```
//!
//! State changes only happen through `update(state, action)` in action.rs.

use std::sync::Arc;

use crate::core::catalog::{Catalog, Lesson, Level};
use crate::core::navigation::NavigationState;

pub struct App {
    pub catalog: Arc<Catalog>,
    pub navigation: NavigationState,
    pub status_message: String,
}

impl App {
    pub fn new(catalog: Arc<Catalog>) -> Self {
        let navigation = NavigationState::new(&catalog);
        Self {
            catalog,
            navigation,
            status_message: String::new(),
        }
    }

    /// Level on screen. `None` only after an out-of-range `GoToLevel`.
    pub fn current_level(&self) -> Option<&Level> {
        self.catalog.level(self.navigation.current_level())
    }

    pub fn current_lesson(&self) -> Option<&Lesson> {
        let (level, lesson) = self.navigation.position();
        self.catalog.lesson(level, lesson)
    }

    /// "Lesson X of Y" for the level on screen.
    pub fn lesson_readout(&self) -> String {
        let (level, lesson) = self.navigation.position();
        format!(
            "Lesson {} of {}",
            lesson + 1,
            self.navigation.lesson_count(level)
        )
    }

    /// "Level X of Y".
    pub fn level_readout(&self) -> String {
        format!(
            "Level {} of {}",
            self.navigation.current_level() + 1,
            self.navigation.level_count()
        )
    }
}
