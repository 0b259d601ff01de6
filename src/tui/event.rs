use crossterm::event::{
    self, Event, KeyCode, KeyEventKind, KeyModifiers, MouseButton, MouseEventKind,
};
use std::time::Duration;

/// TUI-specific input events
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TuiEvent {
    // Leave the app
    Quit,
    ForceQuit, // Ctrl+C, works everywhere
    Escape,

    // Navigation keys, interpreted by the active mode
    Left,
    Right,
    CursorUp,
    CursorDown,
    PreviousLevel,
    NextLevel,
    Home,
    End,
    Submit,
    ToggleMenu,
    /// Digit 1-9, already converted to a zero-based lesson index.
    JumpToLesson(usize),

    // Mouse
    ScrollUp,
    ScrollDown,
    MouseClick(u16, u16),

    Resize,
}

/// Poll for an event without blocking (returns immediately)
pub fn poll_event_immediate() -> Option<TuiEvent> {
    poll_event_timeout(Duration::ZERO)
}

/// Poll for an event, blocking up to `timeout`.
pub fn poll_event_timeout(timeout: Duration) -> Option<TuiEvent> {
    if !event::poll(timeout).ok()? {
        return None;
    }
    translate(event::read().ok()?)
}

fn translate(event: Event) -> Option<TuiEvent> {
    match event {
        Event::Key(key_event) => {
            if key_event.kind != KeyEventKind::Press {
                return None;
            }
            log::debug!("Key event: {:?} with modifiers {:?}", key_event.code, key_event.modifiers);
            match (key_event.modifiers, key_event.code) {
                (KeyModifiers::CONTROL, KeyCode::Char('c')) => Some(TuiEvent::ForceQuit),
                (_, KeyCode::Char('q')) => Some(TuiEvent::Quit),
                (_, KeyCode::Esc) => Some(TuiEvent::Escape),
                (_, KeyCode::Left | KeyCode::Char('h')) => Some(TuiEvent::Left),
                (_, KeyCode::Right | KeyCode::Char('l')) => Some(TuiEvent::Right),
                (_, KeyCode::Up | KeyCode::Char('k')) => Some(TuiEvent::CursorUp),
                (_, KeyCode::Down | KeyCode::Char('j')) => Some(TuiEvent::CursorDown),
                (_, KeyCode::PageUp | KeyCode::Char('[')) => Some(TuiEvent::PreviousLevel),
                (_, KeyCode::PageDown | KeyCode::Char(']')) => Some(TuiEvent::NextLevel),
                (_, KeyCode::Home) => Some(TuiEvent::Home),
                (_, KeyCode::End) => Some(TuiEvent::End),
                (_, KeyCode::Enter) => Some(TuiEvent::Submit),
                (_, KeyCode::Tab | KeyCode::Char('m')) => Some(TuiEvent::ToggleMenu),
                (_, KeyCode::Char(c @ '1'..='9')) => {
                    c.to_digit(10).map(|d| TuiEvent::JumpToLesson(d as usize - 1))
                }
                _ => None,
            }
        }
        Event::Mouse(mouse_event) => match mouse_event.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                Some(TuiEvent::MouseClick(mouse_event.column, mouse_event.row))
            }
            MouseEventKind::ScrollUp => Some(TuiEvent::ScrollUp),
            MouseEventKind::ScrollDown => Some(TuiEvent::ScrollDown),
            _ => None,
        },
        Event::Resize(_, _) => Some(TuiEvent::Resize),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyEvent, MouseEvent};

    fn key(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    #[test]
    fn test_arrow_and_vim_keys_match() {
        assert_eq!(translate(key(KeyCode::Left)), Some(TuiEvent::Left));
        assert_eq!(translate(key(KeyCode::Char('h'))), Some(TuiEvent::Left));
        assert_eq!(translate(key(KeyCode::Right)), Some(TuiEvent::Right));
        assert_eq!(translate(key(KeyCode::Char('j'))), Some(TuiEvent::CursorDown));
    }

    #[test]
    fn test_digits_are_zero_based() {
        assert_eq!(translate(key(KeyCode::Char('1'))), Some(TuiEvent::JumpToLesson(0)));
        assert_eq!(translate(key(KeyCode::Char('9'))), Some(TuiEvent::JumpToLesson(8)));
        assert_eq!(translate(key(KeyCode::Char('0'))), None);
    }

    #[test]
    fn test_ctrl_c_is_force_quit() {
        let event = Event::Key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert_eq!(translate(event), Some(TuiEvent::ForceQuit));
    }

    #[test]
    fn test_key_release_ignored() {
        let mut release = KeyEvent::new(KeyCode::Right, KeyModifiers::NONE);
        release.kind = KeyEventKind::Release;
        assert_eq!(translate(Event::Key(release)), None);
    }

    #[test]
    fn test_left_click_carries_position() {
        let event = Event::Mouse(MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column: 12,
            row: 4,
            modifiers: KeyModifiers::NONE,
        });
        assert_eq!(translate(event), Some(TuiEvent::MouseClick(12, 4)));
    }
}
