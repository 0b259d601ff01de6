//! # Level Menu Component
//!
//! Overlay listing every level of the catalog. Opened with `m`/`Tab` or the
//! title bar button; picking a level jumps to it and closes the menu.
//!
//! Follows the persistent state + transient wrapper pattern:
//! - `LevelMenuState` lives in `TuiState` (None = hidden)
//! - `LevelMenu` is created each frame with borrowed state
//!
//! Entries are built from the catalog, so every index the menu emits is in
//! range for `Action::GoToLevel`.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, List, ListItem, ListState, Padding};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::core::catalog::Catalog;
use crate::tui::component::{Clickable, EventHandler};
use crate::tui::event::TuiEvent;
use crate::tui::hit::{HitMap, HitTarget};

/// Persistent state for the level menu overlay.
pub struct LevelMenuState {
    pub titles: Vec<String>,
    /// Level on screen when the menu opened
    pub current: usize,
    pub selected: usize,
    pub list_state: ListState,
}

impl LevelMenuState {
    pub fn new(catalog: &Catalog, current: usize) -> Self {
        let titles: Vec<String> = catalog.levels().iter().map(|l| l.title.clone()).collect();
        let selected = current.min(titles.len().saturating_sub(1));
        let mut list_state = ListState::default();
        list_state.select(Some(selected));
        Self {
            titles,
            current,
            selected,
            list_state,
        }
    }

    fn select(&mut self, index: usize) {
        self.selected = index;
        self.list_state.select(Some(index));
    }
}

/// Events emitted by the level menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LevelMenuEvent {
    Select(usize),
    Dismiss,
}

impl EventHandler for LevelMenuState {
    type Event = LevelMenuEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<LevelMenuEvent> {
        let last = self.titles.len().saturating_sub(1);
        match event {
            TuiEvent::Escape | TuiEvent::Quit | TuiEvent::ToggleMenu => {
                Some(LevelMenuEvent::Dismiss)
            }
            TuiEvent::CursorUp | TuiEvent::ScrollUp => {
                self.select(self.selected.saturating_sub(1));
                None
            }
            TuiEvent::CursorDown | TuiEvent::ScrollDown => {
                self.select((self.selected + 1).min(last));
                None
            }
            TuiEvent::Home => {
                self.select(0);
                None
            }
            TuiEvent::End => {
                self.select(last);
                None
            }
            TuiEvent::Submit => (self.selected < self.titles.len())
                .then_some(LevelMenuEvent::Select(self.selected)),
            _ => None,
        }
    }
}

/// Transient render wrapper for the level menu overlay.
pub struct LevelMenu<'a> {
    state: &'a mut LevelMenuState,
}

impl<'a> LevelMenu<'a> {
    pub fn new(state: &'a mut LevelMenuState) -> Self {
        Self { state }
    }
}

impl<'a> Clickable for LevelMenu<'a> {
    fn render_with_hits(&mut self, frame: &mut Frame, area: Rect, hits: &mut HitMap) {
        let overlay = centered_rect(70, 70, area);
        frame.render_widget(Clear, overlay);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Magenta))
            .title(" Levels ")
            .title_alignment(Alignment::Left)
            .title_bottom(Line::from(" ↑↓ Move  Enter Open  Esc Back ").centered())
            .padding(Padding::horizontal(1));
        let inner = block.inner(overlay);

        let label_width = format!("Level {}", self.state.titles.len()).len();
        let title_width = (inner.width as usize).saturating_sub(label_width + 4);

        let items: Vec<ListItem> = self
            .state
            .titles
            .iter()
            .enumerate()
            .map(|(i, title)| {
                let is_current = i == self.state.current;
                let style = if i == self.state.selected {
                    Style::default()
                        .fg(Color::White)
                        .add_modifier(Modifier::BOLD | Modifier::REVERSED)
                } else if is_current {
                    Style::default().fg(Color::Magenta)
                } else {
                    Style::default().fg(Color::Gray)
                };
                let label = format!("{:<label_width$}", format!("Level {}", i + 1));
                let marker = if is_current { " *" } else { "" };
                ListItem::new(Line::from(vec![
                    Span::styled(label, style),
                    Span::styled("  ", style),
                    Span::styled(truncate_str(title, title_width), style),
                    Span::styled(marker, style),
                ]))
            })
            .collect();

        frame.render_stateful_widget(List::new(items).block(block), overlay, &mut self.state.list_state);

        // One hit row per visible entry
        let offset = self.state.list_state.offset();
        let visible = (self.state.titles.len().saturating_sub(offset)).min(inner.height as usize);
        for row in 0..visible {
            let rect = Rect::new(inner.x, inner.y + row as u16, inner.width, 1);
            hits.register(rect, HitTarget::MenuEntry(offset + row));
        }
    }
}

/// Truncate a string to fit within `max_width` columns, adding "..." if needed.
fn truncate_str(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }
    if max_width <= 3 {
        return ".".repeat(max_width);
    }
    let mut out = String::new();
    let mut used = 0;
    for c in s.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > max_width - 3 {
            break;
        }
        out.push(c);
        used += w;
    }
    out.push_str("...");
    out
}

/// Compute a centered rect using percentage of the outer rect.
fn centered_rect(percent_x: u16, percent_y: u16, outer: Rect) -> Rect {
    let [_, center_v, _] = Layout::vertical([
        Constraint::Percentage((100 - percent_y) / 2),
        Constraint::Percentage(percent_y),
        Constraint::Percentage((100 - percent_y) / 2),
    ])
    .areas(outer);
    let [_, center, _] = Layout::horizontal([
        Constraint::Percentage((100 - percent_x) / 2),
        Constraint::Percentage(percent_x),
        Constraint::Percentage((100 - percent_x) / 2),
    ])
    .areas(center_v);
    center
}
