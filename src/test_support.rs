//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use std::sync::Arc;

use crate::core::catalog::{Catalog, Lesson, Level};
use crate::core::state::App;

/// A lesson whose fields are all derived from `title`.
pub fn lesson(title: &str) -> Lesson {
    Lesson {
        title: title.to_string(),
        content: format!("About {title}."),
        code: format!("console.log('{title}');"),
    }
}

/// Builds a catalog with one level per entry in `shape`, each holding that
/// many lessons. Titles are "Level N" / "Lesson N.M" (1-based).
pub fn catalog_with_shape(shape: &[usize]) -> Catalog {
    let levels = shape
        .iter()
        .enumerate()
        .map(|(i, &count)| Level {
            title: format!("Level {}", i + 1),
            description: format!("Description {}", i + 1),
            lessons: (0..count)
                .map(|j| lesson(&format!("Lesson {}.{}", i + 1, j + 1)))
                .collect(),
        })
        .collect();
    Catalog::new(levels).expect("test catalog shape must be non-empty")
}

/// Creates a test App over a catalog of the given shape.
pub fn test_app(shape: &[usize]) -> App {
    App::new(Arc::new(catalog_with_shape(shape)))
}
