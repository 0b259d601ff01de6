//! # Actions
//!
//! Everything the user can ask for becomes an `Action`.
//! Pressing `→`? That's `Action::NextLesson(level)`.
//! Picking "Level 4" from the menu? That's `Action::GoToLevel(3)`.
//!
//! The `update()` function applies an action to the state and returns an
//! `Effect` telling the event loop what to do next. No I/O happens here.
//!
//! ```text
//! State + Action  →  update()  →  New State + Effect
//! ```

use log::debug;

use crate::core::state::App;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    PreviousLevel,
    NextLevel,
    /// Jump from the level menu. The index must come from the catalog's range.
    GoToLevel(usize),
    PreviousLesson(usize),
    NextLesson(usize),
    /// Jump from a lesson dot. The index must come from that level's range.
    GoToLesson { level: usize, lesson: usize },
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    None,
    Quit,
}

pub fn update(app: &mut App, action: Action) -> Effect {
    debug!("Action: {:?} at {:?}", action, app.navigation.position());
    let nav = &mut app.navigation;

    match action {
        Action::PreviousLevel => {
            if nav.is_first_level() {
                app.status_message = "Already at the first level".to_string();
            } else {
                nav.previous_level();
                app.status_message = level_title(app);
            }
        }
        Action::NextLevel => {
            if nav.is_last_level() {
                app.status_message = "Already at the last level".to_string();
            } else {
                nav.next_level();
                app.status_message = level_title(app);
            }
        }
        Action::GoToLevel(index) => {
            nav.go_to_level(index);
            app.status_message = level_title(app);
        }
        Action::PreviousLesson(level) => {
            if nav.is_first_lesson(level) {
                app.status_message = "Already at the first lesson".to_string();
            } else {
                nav.previous_lesson(level);
                app.status_message.clear();
            }
        }
        Action::NextLesson(level) => {
            if nav.is_last_lesson(level) {
                app.status_message = "Already at the last lesson".to_string();
            } else {
                nav.next_lesson(level);
                app.status_message.clear();
            }
        }
        Action::GoToLesson { level, lesson } => {
            nav.go_to_lesson(level, lesson);
            app.status_message.clear();
        }
        Action::Quit => return Effect::Quit,
    }

    Effect::None
}

fn level_title(app: &App) -> String {
    app.current_level()
        .map(|l| l.title.clone())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::test_app;

    #[test]
    fn test_quit_returns_quit_effect() {
        let mut app = test_app(&[1]);
        assert_eq!(update(&mut app, Action::Quit), Effect::Quit);
    }

    #[test]
    fn test_next_level_sets_title_status() {
        let mut app = test_app(&[1, 1]);
        assert_eq!(update(&mut app, Action::NextLevel), Effect::None);
        assert_eq!(app.navigation.current_level(), 1);
        assert_eq!(app.status_message, "Level 2");
    }

    #[test]
    fn test_boundary_level_moves_report_status() {
        let mut app = test_app(&[1, 1]);
        update(&mut app, Action::PreviousLevel);
        assert_eq!(app.navigation.current_level(), 0);
        assert_eq!(app.status_message, "Already at the first level");

        update(&mut app, Action::GoToLevel(1));
        update(&mut app, Action::NextLevel);
        assert_eq!(app.navigation.current_level(), 1);
        assert_eq!(app.status_message, "Already at the last level");
    }

    #[test]
    fn test_boundary_lesson_moves_report_status() {
        let mut app = test_app(&[2]);
        update(&mut app, Action::PreviousLesson(0));
        assert_eq!(app.status_message, "Already at the first lesson");

        update(&mut app, Action::NextLesson(0));
        assert_eq!(app.navigation.lesson_index(0), 1);
        assert!(app.status_message.is_empty());

        update(&mut app, Action::NextLesson(0));
        assert_eq!(app.navigation.lesson_index(0), 1);
        assert_eq!(app.status_message, "Already at the last lesson");
    }

    #[test]
    fn test_go_to_lesson_targets_given_level() {
        let mut app = test_app(&[3, 3]);
        update(&mut app, Action::GoToLesson { level: 1, lesson: 2 });
        assert_eq!(app.navigation.lesson_index(1), 2);
        assert_eq!(app.navigation.lesson_index(0), 0);
        assert_eq!(app.navigation.current_level(), 0);
    }

    #[test]
    fn test_lesson_position_survives_level_round_trip() {
        let mut app = test_app(&[3, 3]);
        update(&mut app, Action::NextLesson(0));
        update(&mut app, Action::NextLevel);
        update(&mut app, Action::PreviousLevel);
        assert_eq!(app.navigation.position(), (0, 1));
    }
}
