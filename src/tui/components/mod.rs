//! # TUI Components
//!
//! All UI components for the terminal interface.
//!
//! ## Component Architecture
//!
//! ### Stateless Components (Props-Based Rendering)
//!
//! Display components that receive all data as struct fields:
//! - `TitleBar`: course title, level readout, status, menu button
//! - `LevelNav`: previous/next level buttons
//! - `Button`: one clickable label, dimmed when disabled
//!
//! ### Stateful Components (Event-Driven)
//!
//! Components with persistent state in `TuiState` and a transient wrapper
//! created each frame:
//! - `LessonCard` / `LessonCardState`: the level card and its body scroll
//! - `LevelMenu` / `LevelMenuState`: the level picker overlay
//!
//! ## Props-Based Data Flow
//!
//! Components receive external data as props, not by reaching into `App`.
//! The parent (`ui::draw_ui`) reads the navigation state once per frame and
//! hands each component exactly what it shows:
//!
//! ```rust,ignore
//! let mut nav = LevelNav {
//!     is_first_level: app.navigation.is_first_level(),
//!     is_last_level: app.navigation.is_last_level(),
//! };
//! nav.render_with_hits(frame, area, &mut tui.hits);
//! ```
//!
//! ## Module Structure
//!
//! ```text
//! components/
//! ├── mod.rs           (this file)
//! ├── button.rs        (Clickable label)
//! ├── title_bar.rs     (Top status line)
//! ├── lesson_card.rs   (Level card with scrollable lesson body)
//! ├── level_nav.rs     (Bottom level buttons)
//! └── level_menu.rs    (Level picker overlay)
//! ```

pub mod button;
pub mod lesson_card;
pub mod level_menu;
pub mod level_nav;
mod title_bar;

pub use lesson_card::{CodeStyle, LessonCard, LessonCardState};
pub use level_menu::{LevelMenu, LevelMenuEvent, LevelMenuState};
pub use level_nav::LevelNav;
pub use title_bar::TitleBar;
