//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the UI,
//! and translates keyboard and mouse events into core::Action values.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Redraw Strategy
//!
//! Nothing on screen animates, so the loop blocks on input and only
//! redraws after an event (including a terminal resize). All pending events
//! are drained before the next frame.
//!
//! ## Event Routing
//!
//! ```text
//! TuiEvent ──► level menu open? ──yes──► LevelMenuState::handle_event
//!                   │no
//!                   ▼
//!              key map / hit map ──► Action ──► update()
//! ```
//!
//! Mouse clicks are resolved against the `HitMap` built by the last frame.

mod component;
mod components;
mod event;
mod hit;
pub mod markdown;
mod ui;

use log::{debug, info};
use std::io::stdout;
use std::time::Duration;

use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use crossterm::execute;

use crate::core::action::{Action, Effect, update};
use crate::core::config::ResolvedConfig;
use crate::core::state::App;
use crate::tui::component::EventHandler;
use crate::tui::components::{CodeStyle, LessonCardState, LevelMenuEvent, LevelMenuState};
use crate::tui::event::{TuiEvent, poll_event_immediate, poll_event_timeout};
use crate::tui::hit::{HitMap, HitTarget};

/// TUI-specific presentation state (not part of core business logic)
pub struct TuiState {
    // Level menu overlay (None = hidden)
    pub level_menu: Option<LevelMenuState>,
    // Persistent component state
    pub lesson_card: LessonCardState,
    // Clickable regions of the last frame
    pub hits: HitMap,
    pub code_style: CodeStyle,
}

impl TuiState {
    pub fn new(code_style: CodeStyle) -> Self {
        Self {
            level_menu: None,
            lesson_card: LessonCardState::new(),
            hits: HitMap::new(),
            code_style,
        }
    }
}

/// RAII guard that enables mouse capture on creation and restores on drop.
struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> std::io::Result<Self> {
        execute!(stdout(), EnableMouseCapture)?;
        info!("Terminal modes enabled (mouse capture)");
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(stdout(), DisableMouseCapture);
    }
}

pub fn run(mut app: App, config: &ResolvedConfig) -> std::io::Result<()> {
    let mut tui = TuiState::new(CodeStyle::from_config(config));

    let mut terminal = ratatui::init();
    let _terminal_mode_guard = TerminalModeGuard::new();

    let mut needs_redraw = true; // Force first frame

    let result = loop {
        if needs_redraw {
            if let Err(e) = terminal.draw(|f| ui::draw_ui(f, &app, &mut tui)) {
                break Err(e);
            }
            needs_redraw = false;
        }

        let first_event = poll_event_timeout(Duration::from_millis(500));
        if first_event.is_some() {
            needs_redraw = true;
        }

        // Process first event + drain ALL pending events before next draw
        let mut should_quit = false;
        for event in first_event
            .into_iter()
            .chain(std::iter::from_fn(poll_event_immediate))
        {
            if handle_event(&mut app, &mut tui, event) == Effect::Quit {
                should_quit = true;
                break;
            }
        }

        if should_quit {
            info!("Quit requested at {:?}", app.navigation.position());
            break Ok(());
        }
    };

    ratatui::restore();
    result
}

/// Apply one input event to the app and presentation state.
pub fn handle_event(app: &mut App, tui: &mut TuiState, event: TuiEvent) -> Effect {
    match event {
        // Resize just needs a redraw
        TuiEvent::Resize => return Effect::None,
        // Ctrl+C always quits, menu or not
        TuiEvent::ForceQuit => return update(app, Action::Quit),
        TuiEvent::MouseClick(column, row) => return handle_click(app, tui, column, row),
        _ => {}
    }

    // When the level menu is open, route all keys to it
    if let Some(menu) = tui.level_menu.as_mut() {
        return match menu.handle_event(&event) {
            Some(LevelMenuEvent::Select(index)) => {
                tui.level_menu = None;
                update(app, Action::GoToLevel(index))
            }
            Some(LevelMenuEvent::Dismiss) => {
                tui.level_menu = None;
                Effect::None
            }
            None => Effect::None,
        };
    }

    let level = app.navigation.current_level();
    let lesson_count = app.navigation.lesson_count(level);

    let action = match event {
        TuiEvent::Left => Some(Action::PreviousLesson(level)),
        TuiEvent::Right => Some(Action::NextLesson(level)),
        TuiEvent::PreviousLevel => Some(Action::PreviousLevel),
        TuiEvent::NextLevel => Some(Action::NextLevel),
        TuiEvent::Home if lesson_count > 0 => Some(Action::GoToLesson { level, lesson: 0 }),
        TuiEvent::End if lesson_count > 0 => Some(Action::GoToLesson {
            level,
            lesson: lesson_count - 1,
        }),
        TuiEvent::JumpToLesson(lesson) if lesson < lesson_count => {
            Some(Action::GoToLesson { level, lesson })
        }
        TuiEvent::ToggleMenu => {
            open_menu(app, tui);
            None
        }
        TuiEvent::CursorUp
        | TuiEvent::CursorDown
        | TuiEvent::ScrollUp
        | TuiEvent::ScrollDown => {
            tui.lesson_card.handle_event(&event);
            None
        }
        TuiEvent::Quit | TuiEvent::Escape => Some(Action::Quit),
        _ => None,
    };

    match action {
        Some(action) => update(app, action),
        None => Effect::None,
    }
}

fn handle_click(app: &mut App, tui: &mut TuiState, column: u16, row: u16) -> Effect {
    let target = tui.hits.hit(column, row);
    debug!("Click at ({}, {}) -> {:?}", column, row, target);

    // With the menu open, anything but a menu entry closes it
    if tui.level_menu.is_some() {
        tui.level_menu = None;
        return match target {
            Some(HitTarget::MenuEntry(index)) => update(app, Action::GoToLevel(index)),
            _ => Effect::None,
        };
    }

    let level = app.navigation.current_level();
    let action = match target {
        Some(HitTarget::PreviousLevel) => Action::PreviousLevel,
        Some(HitTarget::NextLevel) => Action::NextLevel,
        Some(HitTarget::PreviousLesson) => Action::PreviousLesson(level),
        Some(HitTarget::NextLesson) => Action::NextLesson(level),
        Some(HitTarget::LessonDot(lesson)) => Action::GoToLesson { level, lesson },
        Some(HitTarget::MenuToggle) => {
            open_menu(app, tui);
            return Effect::None;
        }
        Some(HitTarget::MenuEntry(_)) | None => return Effect::None,
    };
    update(app, action)
}

fn open_menu(app: &App, tui: &mut TuiState) {
    tui.level_menu = Some(LevelMenuState::new(
        &app.catalog,
        app.navigation.current_level(),
    ));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::test_app;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;
    use ratatui::layout::Rect;

    fn tui_state() -> TuiState {
        TuiState::new(CodeStyle::default())
    }

    /// Render once so the hit map reflects the screen.
    fn draw(app: &App, tui: &mut TuiState) {
        let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
        terminal.draw(|f| ui::draw_ui(f, app, tui)).unwrap();
    }

    fn click_on(app: &mut App, tui: &mut TuiState, target: HitTarget) -> Effect {
        let hits = std::mem::take(&mut tui.hits);
        let column_row = (0..24u16)
            .flat_map(|row| (0..80u16).map(move |col| (col, row)))
            .find(|&(col, row)| hits.hit(col, row) == Some(target));
        tui.hits = hits;
        let (col, row) = column_row.unwrap_or_else(|| panic!("{target:?} not on screen"));
        handle_event(app, tui, TuiEvent::MouseClick(col, row))
    }

    #[test]
    fn test_arrow_keys_move_lessons_within_level() {
        let mut app = test_app(&[3, 2]);
        let mut tui = tui_state();

        handle_event(&mut app, &mut tui, TuiEvent::Right);
        handle_event(&mut app, &mut tui, TuiEvent::Right);
        handle_event(&mut app, &mut tui, TuiEvent::Right);
        assert_eq!(app.navigation.position(), (0, 2));
        assert_eq!(app.status_message, "Already at the last lesson");

        handle_event(&mut app, &mut tui, TuiEvent::Left);
        assert_eq!(app.navigation.position(), (0, 1));
    }

    #[test]
    fn test_level_keys_keep_lesson_memory() {
        let mut app = test_app(&[3, 2]);
        let mut tui = tui_state();

        handle_event(&mut app, &mut tui, TuiEvent::Right);
        handle_event(&mut app, &mut tui, TuiEvent::NextLevel);
        assert_eq!(app.navigation.position(), (1, 0));
        handle_event(&mut app, &mut tui, TuiEvent::PreviousLevel);
        assert_eq!(app.navigation.position(), (0, 1));
    }

    #[test]
    fn test_home_end_and_digit_jumps() {
        let mut app = test_app(&[4]);
        let mut tui = tui_state();

        handle_event(&mut app, &mut tui, TuiEvent::End);
        assert_eq!(app.navigation.position(), (0, 3));
        handle_event(&mut app, &mut tui, TuiEvent::Home);
        assert_eq!(app.navigation.position(), (0, 0));
        handle_event(&mut app, &mut tui, TuiEvent::JumpToLesson(2));
        assert_eq!(app.navigation.position(), (0, 2));

        // Digits past the last lesson are ignored
        handle_event(&mut app, &mut tui, TuiEvent::JumpToLesson(7));
        assert_eq!(app.navigation.position(), (0, 2));
    }

    #[test]
    fn test_quit_keys() {
        let mut app = test_app(&[1]);
        let mut tui = tui_state();
        assert_eq!(handle_event(&mut app, &mut tui, TuiEvent::Quit), Effect::Quit);
        assert_eq!(handle_event(&mut app, &mut tui, TuiEvent::Escape), Effect::Quit);
        assert_eq!(
            handle_event(&mut app, &mut tui, TuiEvent::ForceQuit),
            Effect::Quit
        );
    }

    #[test]
    fn test_menu_captures_keys_until_closed() {
        let mut app = test_app(&[1, 1, 1]);
        let mut tui = tui_state();

        handle_event(&mut app, &mut tui, TuiEvent::ToggleMenu);
        assert!(tui.level_menu.is_some());

        // Esc closes the menu instead of quitting
        assert_eq!(handle_event(&mut app, &mut tui, TuiEvent::Escape), Effect::None);
        assert!(tui.level_menu.is_none());

        handle_event(&mut app, &mut tui, TuiEvent::ToggleMenu);
        handle_event(&mut app, &mut tui, TuiEvent::CursorDown);
        handle_event(&mut app, &mut tui, TuiEvent::CursorDown);
        // Right is ignored while the menu is open
        handle_event(&mut app, &mut tui, TuiEvent::Right);
        handle_event(&mut app, &mut tui, TuiEvent::Submit);

        assert!(tui.level_menu.is_none());
        assert_eq!(app.navigation.position(), (2, 0));
        assert_eq!(app.status_message, "Level 3");
    }

    #[test]
    fn test_force_quit_with_menu_open() {
        let mut app = test_app(&[1]);
        let mut tui = tui_state();
        handle_event(&mut app, &mut tui, TuiEvent::ToggleMenu);
        assert_eq!(
            handle_event(&mut app, &mut tui, TuiEvent::ForceQuit),
            Effect::Quit
        );
    }

    #[test]
    fn test_click_buttons() {
        let mut app = test_app(&[3, 2]);
        let mut tui = tui_state();

        draw(&app, &mut tui);
        click_on(&mut app, &mut tui, HitTarget::NextLesson);
        assert_eq!(app.navigation.position(), (0, 1));

        draw(&app, &mut tui);
        click_on(&mut app, &mut tui, HitTarget::NextLevel);
        assert_eq!(app.navigation.position(), (1, 0));

        draw(&app, &mut tui);
        click_on(&mut app, &mut tui, HitTarget::PreviousLevel);
        assert_eq!(app.navigation.position(), (0, 1));

        draw(&app, &mut tui);
        click_on(&mut app, &mut tui, HitTarget::LessonDot(2));
        assert_eq!(app.navigation.position(), (0, 2));
    }

    #[test]
    fn test_click_menu_entry_jumps_to_level() {
        let mut app = test_app(&[1, 2, 3]);
        let mut tui = tui_state();

        draw(&app, &mut tui);
        click_on(&mut app, &mut tui, HitTarget::MenuToggle);
        assert!(tui.level_menu.is_some());

        draw(&app, &mut tui);
        click_on(&mut app, &mut tui, HitTarget::MenuEntry(1));
        assert!(tui.level_menu.is_none());
        assert_eq!(app.navigation.position(), (1, 0));
    }

    #[test]
    fn test_click_outside_menu_closes_it() {
        let mut app = test_app(&[1, 1]);
        let mut tui = tui_state();
        handle_event(&mut app, &mut tui, TuiEvent::ToggleMenu);

        tui.hits.clear();
        tui.hits.register(Rect::new(0, 23, 10, 1), HitTarget::NextLevel);
        handle_event(&mut app, &mut tui, TuiEvent::MouseClick(1, 23));

        assert!(tui.level_menu.is_none());
        assert_eq!(app.navigation.position(), (0, 0));
    }

    #[test]
    fn test_click_on_nothing_is_ignored() {
        let mut app = test_app(&[2]);
        let mut tui = tui_state();
        assert_eq!(
            handle_event(&mut app, &mut tui, TuiEvent::MouseClick(5, 5)),
            Effect::None
        );
        assert_eq!(app.navigation.position(), (0, 0));
    }
}
