//! # LessonCard Component
//!
//! The card for the level on screen, showing the lesson that level is on.
//!
//! ```text
//! ┌ Level 1: Basics ───────────────────────────────────────────┐
//! │ JavaScript fundamentals and core concepts                  │
//! │                        ● ○ ○ ○ ○                           │  ← lesson dots
//! │                                                            │
//! │                   What is JavaScript?                      │  ┐
//! │                    ▶ Lesson 1 of 5                         │  │ scrollable
//! │ JavaScript is one of the core technologies of the web...   │  │ body
//! │ ┌ ● ● ●  JavaScript ─────────────────────────────────────┐ │  │
//! │ │ console.log('Welcome to JavaScript!');                 │ │  │
//! │ └────────────────────────────────────────────────────────┘ │  ┘
//! │  ◀ Previous Lesson              1 / 5          Next Lesson ▶  │
//! │ Level 1 of 37                          ●○○○○○○○○○○○○○○○○○○○○○ │
//! └────────────────────────────────────────────────────────────┘
//! ```
//!
//! Follows the persistent state + transient wrapper pattern:
//! - `LessonCardState` (scroll position) lives in `TuiState`
//! - `LessonCard` is created each frame with borrowed props and state
//!
//! The body scroll resets whenever the displayed position changes.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Position, Rect, Size};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph, Wrap};
use tui_scrollview::{ScrollView, ScrollViewState, ScrollbarVisibility};
use unicode_width::UnicodeWidthStr;

use crate::core::catalog::Level;
use crate::core::config::{
    DEFAULT_CODE_LABEL, DEFAULT_CODE_LANGUAGE, DEFAULT_SYNTAX_THEME, ResolvedConfig,
};
use crate::tui::component::{Clickable, EventHandler};
use crate::tui::components::button::Button;
use crate::tui::event::TuiEvent;
use crate::tui::hit::{HitMap, HitTarget};
use crate::tui::markdown;

/// How code samples are highlighted and labelled.
#[derive(Debug, Clone)]
pub struct CodeStyle {
    pub language: String,
    pub theme: String,
    pub label: String,
}

impl CodeStyle {
    pub fn from_config(config: &ResolvedConfig) -> Self {
        Self {
            language: config.code_language.clone(),
            theme: config.syntax_theme.clone(),
            label: config.code_label.clone(),
        }
    }
}

impl Default for CodeStyle {
    fn default() -> Self {
        Self {
            language: DEFAULT_CODE_LANGUAGE.to_string(),
            theme: DEFAULT_SYNTAX_THEME.to_string(),
            label: DEFAULT_CODE_LABEL.to_string(),
        }
    }
}

/// Scroll state for the card body. Must be persisted in the parent TuiState.
#[derive(Default)]
pub struct LessonCardState {
    pub scroll_state: ScrollViewState,
    /// Height of the scrollable body content from the last render
    pub content_height: u16,
    /// Height of the body viewport from the last render
    pub viewport_height: u16,
    /// `(level, lesson)` rendered last frame
    shown: Option<(usize, usize)>,
}

impl LessonCardState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Keep the offset inside the content.
    pub fn clamp_scroll(&mut self) {
        let max_y = self.content_height.saturating_sub(self.viewport_height);
        let current = self.scroll_state.offset();
        if current.y > max_y {
            self.scroll_state.set_offset(Position { x: 0, y: max_y });
        }
    }

    fn sync_position(&mut self, position: (usize, usize)) {
        if self.shown != Some(position) {
            self.scroll_state.scroll_to_top();
            self.shown = Some(position);
        }
    }
}

impl EventHandler for LessonCardState {
    type Event = ();

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Self::Event> {
        match event {
            TuiEvent::CursorUp | TuiEvent::ScrollUp => self.scroll_state.scroll_up(),
            TuiEvent::CursorDown | TuiEvent::ScrollDown => {
                self.scroll_state.scroll_down();
                self.clamp_scroll();
            }
            _ => {}
        }
        None
    }
}

pub struct LessonCard<'a> {
    pub level: &'a Level,
    pub level_index: usize,
    pub level_count: usize,
    pub lesson_index: usize,
    pub is_first_lesson: bool,
    pub is_last_lesson: bool,
    pub code_style: &'a CodeStyle,
    pub state: &'a mut LessonCardState,
}

impl<'a> LessonCard<'a> {
    fn render_dots(&self, frame: &mut Frame, area: Rect, hits: &mut HitMap) {
        let count = self.level.lessons.len();
        let spaced = (count * 2).saturating_sub(1);
        // Drop the gaps when the spaced row would not fit
        let step: u16 = if spaced <= area.width as usize { 2 } else { 1 };
        let total = ((count as u16).saturating_sub(1)) * step + 1;
        let x0 = area.x + area.width.saturating_sub(total) / 2;

        for i in 0..count {
            let x = x0 + i as u16 * step;
            if x >= area.x + area.width {
                break;
            }
            let (symbol, style) = if i == self.lesson_index {
                ("●", Style::default().fg(Color::Magenta).add_modifier(Modifier::BOLD))
            } else {
                ("○", Style::default().fg(Color::DarkGray))
            };
            let rect = Rect::new(x, area.y, 1, 1);
            frame.render_widget(Span::styled(symbol, style), rect);
            hits.register(rect, HitTarget::LessonDot(i));
        }
    }

    fn render_body(&mut self, frame: &mut Frame, area: Rect) {
        let Some(lesson) = self.level.lessons.get(self.lesson_index) else {
            return;
        };
        let width = area.width.saturating_sub(1); // scrollbar column

        let title = Paragraph::new(lesson.title.clone())
            .style(Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD))
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true });
        let readout = Paragraph::new(format!(
            "▶ Lesson {} of {}",
            self.lesson_index + 1,
            self.level.lessons.len()
        ))
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
        let prose = Paragraph::new(markdown::render_prose(&lesson.content, Color::Gray))
            .wrap(Wrap { trim: false });

        let header = Line::from(vec![
            Span::styled(" ●", Style::default().fg(Color::Red)),
            Span::styled(" ●", Style::default().fg(Color::Yellow)),
            Span::styled(" ● ", Style::default().fg(Color::Green)),
            Span::styled(
                format!(" {} ", self.code_style.label),
                Style::default().fg(Color::DarkGray),
            ),
        ]);
        let code = Paragraph::new(markdown::highlight_code(
            &lesson.code,
            &self.code_style.language,
            &self.code_style.theme,
        ))
        .block(
            Block::bordered()
                .title(header)
                .border_style(Style::default().fg(Color::DarkGray)),
        )
        .wrap(Wrap { trim: false });

        let pieces: [(Paragraph, u16); 6] = [
            (title.clone(), title.line_count(width) as u16),
            (readout.clone(), 1),
            (Paragraph::default(), 1),
            (prose.clone(), prose.line_count(width) as u16),
            (Paragraph::default(), 1),
            (code.clone(), code.line_count(width) as u16),
        ];

        let total: u16 = pieces.iter().map(|(_, h)| *h).sum();
        self.state.content_height = total;
        self.state.viewport_height = area.height;
        self.state.clamp_scroll();

        let mut scroll_view = ScrollView::new(Size::new(width, total))
            .vertical_scrollbar_visibility(ScrollbarVisibility::Automatic)
            .horizontal_scrollbar_visibility(ScrollbarVisibility::Never);
        let mut y = 0;
        for (paragraph, height) in pieces {
            scroll_view.render_widget(paragraph, Rect::new(0, y, width, height));
            y += height;
        }
        frame.render_stateful_widget(scroll_view, area, &mut self.state.scroll_state);
    }

    fn render_lesson_nav(&self, frame: &mut Frame, area: Rect, hits: &mut HitMap) {
        let previous = Button::new(
            "◀ Previous Lesson",
            !self.is_first_lesson,
            HitTarget::PreviousLesson,
        );
        let next = Button::new("Next Lesson ▶", !self.is_last_lesson, HitTarget::NextLesson);

        let [left, middle, right] = Layout::horizontal([
            Constraint::Length(previous.width()),
            Constraint::Min(0),
            Constraint::Length(next.width()),
        ])
        .areas(area);

        previous.render(frame, left, hits);
        frame.render_widget(
            Paragraph::new(format!(
                "{} / {}",
                self.lesson_index + 1,
                self.level.lessons.len()
            ))
            .style(Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Center),
            middle,
        );
        next.render(frame, right, hits);
    }

    fn render_footer(&self, frame: &mut Frame, area: Rect) {
        let readout = format!("Level {} of {}", self.level_index + 1, self.level_count);
        let [readout_area, _, dots_area] = Layout::horizontal([
            Constraint::Length(readout.width() as u16),
            Constraint::Length(1),
            Constraint::Min(0),
        ])
        .areas(area);

        let spaced = (self.level_count * 2).saturating_sub(1);
        let gap = if spaced <= dots_area.width as usize { " " } else { "" };

        let dots: Vec<Span> = (0..self.level_count)
            .flat_map(|i| {
                let style = if i == self.level_index {
                    Style::default().fg(Color::Magenta)
                } else {
                    Style::default().fg(Color::DarkGray)
                };
                let sep = if i + 1 < self.level_count { gap } else { "" };
                [Span::styled("●", style), Span::raw(sep)]
            })
            .collect();

        frame.render_widget(
            Paragraph::new(readout).style(Style::default().fg(Color::DarkGray)),
            readout_area,
        );
        frame.render_widget(
            Paragraph::new(Line::from(dots)).alignment(Alignment::Right),
            dots_area,
        );
    }
}

impl<'a> Clickable for LessonCard<'a> {
    fn render_with_hits(&mut self, frame: &mut Frame, area: Rect, hits: &mut HitMap) {
        self.state
            .sync_position((self.level_index, self.lesson_index));

        let block = Block::bordered()
            .title(Span::styled(
                format!(" {} ", self.level.title),
                Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
            ))
            .border_style(Style::default().fg(Color::DarkGray));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let description = Paragraph::new(self.level.description.clone())
            .style(Style::default().fg(Color::Gray))
            .wrap(Wrap { trim: true });
        let description_height = (description.line_count(inner.width) as u16).min(3);

        let [desc_area, dots_area, _, body_area, nav_area, footer_area] = Layout::vertical([
            Constraint::Length(description_height),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(0),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .areas(inner);

        frame.render_widget(description, desc_area);
        self.render_dots(frame, dots_area, hits);
        self.render_body(frame, body_area);
        self.render_lesson_nav(frame, nav_area, hits);
        self.render_footer(frame, footer_area);
    }
}
