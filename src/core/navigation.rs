//! # Navigation State
//!
//! Tracks which level is on screen and, independently for every level, which
//! lesson within it. Revisiting a level shows the lesson it was left on.
//!
//! ```text
//! NavigationState
//! ├── current_level: usize
//! ├── lesson_by_level: HashMap<usize, usize>   // lazily populated, missing = 0
//! └── lesson_counts: Vec<usize>                // bounds snapshot of the catalog
//! ```
//!
//! Every transition is total. Stepping past a boundary is a no-op rather than
//! an error, since the view disables those controls anyway.
//!
//! The direct setters (`go_to_level`, `go_to_lesson`, `set_lesson_index`) do
//! not clamp. Callers must only pass indices drawn from the catalog's range.

use std::collections::HashMap;

use crate::core::catalog::Catalog;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationState {
    current_level: usize,
    lesson_by_level: HashMap<usize, usize>,
    lesson_counts: Vec<usize>,
}

impl NavigationState {
    /// Start at the first lesson of the first level.
    pub fn new(catalog: &Catalog) -> Self {
        Self {
            current_level: 0,
            lesson_by_level: HashMap::new(),
            lesson_counts: catalog.levels().iter().map(|l| l.lessons.len()).collect(),
        }
    }

    // ── Queries ─────────────────────────────────────────────────────────

    pub fn current_level(&self) -> usize {
        self.current_level
    }

    pub fn level_count(&self) -> usize {
        self.lesson_counts.len()
    }

    /// 0 for a level outside the catalog.
    pub fn lesson_count(&self, level: usize) -> usize {
        self.lesson_counts.get(level).copied().unwrap_or(0)
    }

    /// Stored lesson for `level`, or 0 if it was never visited.
    pub fn lesson_index(&self, level: usize) -> usize {
        self.lesson_by_level.get(&level).copied().unwrap_or(0)
    }

    /// `(current level, lesson within it)`.
    pub fn position(&self) -> (usize, usize) {
        (self.current_level, self.lesson_index(self.current_level))
    }

    pub fn is_first_level(&self) -> bool {
        self.current_level == 0
    }

    pub fn is_last_level(&self) -> bool {
        self.level_count().checked_sub(1) == Some(self.current_level)
    }

    pub fn is_first_lesson(&self, level: usize) -> bool {
        self.lesson_index(level) == 0
    }

    pub fn is_last_lesson(&self, level: usize) -> bool {
        self.lesson_count(level).checked_sub(1) == Some(self.lesson_index(level))
    }

    // ── Transitions ─────────────────────────────────────────────────────

    pub fn set_lesson_index(&mut self, level: usize, lesson: usize) {
        self.lesson_by_level.insert(level, lesson);
    }

    pub fn previous_level(&mut self) {
        if self.current_level > 0 {
            self.current_level -= 1;
        }
    }

    pub fn next_level(&mut self) {
        if self.current_level + 1 < self.level_count() {
            self.current_level += 1;
        }
    }

    pub fn go_to_level(&mut self, index: usize) {
        self.current_level = index;
    }

    pub fn previous_lesson(&mut self, level: usize) {
        let current = self.lesson_index(level);
        if current > 0 {
            self.set_lesson_index(level, current - 1);
        }
    }

    pub fn next_lesson(&mut self, level: usize) {
        let current = self.lesson_index(level);
        if current + 1 < self.lesson_count(level) {
            self.set_lesson_index(level, current + 1);
        }
    }

    pub fn go_to_lesson(&mut self, level: usize, lesson: usize) {
        self.set_lesson_index(level, lesson);
    }
}
