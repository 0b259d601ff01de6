//! # Catalog
//!
//! The curriculum: an ordered list of levels, each an ordered list of lessons.
//! Loaded once at startup and never mutated afterwards.
//!
//! A `Catalog` can only be built through validation, so every value of this
//! type has at least one level and every level has at least one lesson. The
//! navigation state relies on that and never re-checks it.
//!
//! ```text
//! Catalog
//! ├── title
//! └── levels: Vec<Level>
//!     ├── title, description
//!     └── lessons: Vec<Lesson>
//!         └── title, content, code
//! ```

use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::io::{self, Write};
use std::path::Path;

/// The curriculum compiled into the binary.
const BUILTIN_CATALOG: &str = include_str!("../../assets/catalog.toml");

/// Shown in the title bar when a catalog file has no `title`.
pub const DEFAULT_TITLE: &str = "Tutorial";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Lesson {
    pub title: String,
    /// Prose explanation. Backticks mark inline code.
    pub content: String,
    pub code: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Level {
    pub title: String,
    pub description: String,
    pub lessons: Vec<Lesson>,
}

/// On-disk shape shared by the TOML and JSON formats.
#[derive(Debug, Deserialize)]
struct CatalogFile {
    title: Option<String>,
    #[serde(default)]
    levels: Vec<Level>,
}

impl CatalogFile {
    fn into_catalog(self) -> Result<Catalog, CatalogError> {
        let catalog = Catalog::new(self.levels)?;
        Ok(match self.title {
            Some(title) => catalog.with_title(title),
            None => catalog,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    title: String,
    levels: Vec<Level>,
}

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug)]
pub enum CatalogError {
    Io(std::io::Error),
    Toml(toml::de::Error),
    Json(serde_json::Error),
    /// File extension is neither `.toml` nor `.json`.
    UnsupportedFormat(String),
    /// The catalog has no levels.
    Empty,
    /// A level has no lessons.
    EmptyLevel { index: usize, title: String },
}

impl fmt::Display for CatalogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CatalogError::Io(e) => write!(f, "catalog I/O error: {e}"),
            CatalogError::Toml(e) => write!(f, "catalog parse error: {e}"),
            CatalogError::Json(e) => write!(f, "catalog parse error: {e}"),
            CatalogError::UnsupportedFormat(ext) => {
                write!(f, "unsupported catalog format {ext:?} (expected .toml or .json)")
            }
            CatalogError::Empty => write!(f, "catalog has no levels"),
            CatalogError::EmptyLevel { index, title } => {
                write!(f, "level {} ({title:?}) has no lessons", index + 1)
            }
        }
    }
}

impl std::error::Error for CatalogError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CatalogError::Io(e) => Some(e),
            CatalogError::Toml(e) => Some(e),
            CatalogError::Json(e) => Some(e),
            _ => None,
        }
    }
}

// ============================================================================
// Construction
// ============================================================================

impl Catalog {
    /// Validate and wrap a list of levels.
    pub fn new(levels: Vec<Level>) -> Result<Self, CatalogError> {
        if levels.is_empty() {
            return Err(CatalogError::Empty);
        }
        if let Some((index, level)) = levels
            .iter()
            .enumerate()
            .find(|(_, level)| level.lessons.is_empty())
        {
            return Err(CatalogError::EmptyLevel {
                index,
                title: level.title.clone(),
            });
        }
        Ok(Self {
            title: DEFAULT_TITLE.to_string(),
            levels,
        })
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// The bundled JavaScript curriculum.
    pub fn builtin() -> Result<Self, CatalogError> {
        Self::from_toml_str(BUILTIN_CATALOG)
    }

    pub fn from_toml_str(contents: &str) -> Result<Self, CatalogError> {
        let file: CatalogFile = toml::from_str(contents).map_err(CatalogError::Toml)?;
        file.into_catalog()
    }

    pub fn from_json_str(contents: &str) -> Result<Self, CatalogError> {
        let file: CatalogFile = serde_json::from_str(contents).map_err(CatalogError::Json)?;
        file.into_catalog()
    }

    /// Load a catalog file, picking the parser from the file extension.
    pub fn load(path: &Path) -> Result<Self, CatalogError> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or_default()
            .to_ascii_lowercase();

        let parse: fn(&str) -> Result<Self, CatalogError> = match ext.as_str() {
            "toml" => Self::from_toml_str,
            "json" => Self::from_json_str,
            _ => return Err(CatalogError::UnsupportedFormat(ext)),
        };

        let contents = fs::read_to_string(path).map_err(CatalogError::Io)?;
        let catalog = parse(&contents)?;
        info!(
            "Loaded catalog from {} ({} levels, {} lessons)",
            path.display(),
            catalog.level_count(),
            catalog.total_lessons()
        );
        Ok(catalog)
    }

    /// Load from `path` if given, otherwise fall back to the bundled catalog.
    pub fn load_or_builtin(path: Option<&Path>) -> Result<Self, CatalogError> {
        match path {
            Some(path) => Self::load(path),
            None => {
                debug!("Using bundled catalog");
                Self::builtin()
            }
        }
    }
}

// ============================================================================
// Lookup
// ============================================================================

impl Catalog {
    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn levels(&self) -> &[Level] {
        &self.levels
    }

    pub fn level(&self, index: usize) -> Option<&Level> {
        self.levels.get(index)
    }

    pub fn lesson(&self, level: usize, lesson: usize) -> Option<&Lesson> {
        self.level(level).and_then(|l| l.lessons.get(lesson))
    }

    /// Always at least 1.
    pub fn level_count(&self) -> usize {
        self.levels.len()
    }

    /// Lesson count of a level, or 0 for an index outside the catalog.
    pub fn lesson_count(&self, level: usize) -> usize {
        self.level(level).map_or(0, |l| l.lessons.len())
    }

    pub fn total_lessons(&self) -> usize {
        self.levels.iter().map(|l| l.lessons.len()).sum()
    }

    /// Plain-text outline: a summary line, then each level and its lessons.
    pub fn write_outline(&self, out: &mut impl Write) -> io::Result<()> {
        writeln!(
            out,
            "{}: {} levels, {} lessons",
            self.title,
            self.level_count(),
            self.total_lessons()
        )?;
        for (i, level) in self.levels.iter().enumerate() {
            writeln!(out, "{:>3}. {} ({} lessons)", i + 1, level.title, level.lessons.len())?;
            for lesson in &level.lessons {
                writeln!(out, "       - {}", lesson.title)?;
            }
        }
        Ok(())
    }
}
