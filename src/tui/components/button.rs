//! # Button
//!
//! A one-line clickable label. Disabled buttons render dimmed and do not
//! register a hit region.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Span;
use unicode_width::UnicodeWidthStr;

use crate::tui::hit::{HitMap, HitTarget};

pub struct Button<'a> {
    pub label: &'a str,
    pub enabled: bool,
    pub target: HitTarget,
}

impl<'a> Button<'a> {
    pub fn new(label: &'a str, enabled: bool, target: HitTarget) -> Self {
        Self {
            label,
            enabled,
            target,
        }
    }

    /// Display width including the one-cell padding on each side.
    pub fn width(&self) -> u16 {
        (self.label.width() + 2) as u16
    }

    fn style(&self) -> Style {
        if self.enabled {
            Style::default().fg(Color::White).bg(Color::DarkGray)
        } else {
            Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::DIM)
        }
    }

    /// Draw at the left edge of `area` and return the rect actually used.
    pub fn render(&self, frame: &mut Frame, area: Rect, hits: &mut HitMap) -> Rect {
        let rect = Rect {
            width: self.width().min(area.width),
            height: area.height.min(1),
            ..area
        };
        frame.render_widget(Span::styled(format!(" {} ", self.label), self.style()), rect);
        if self.enabled {
            hits.register(rect, self.target);
        }
        rect
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    #[test]
    fn test_width_counts_padding() {
        let button = Button::new("Next", true, HitTarget::NextLesson);
        assert_eq!(button.width(), 6);
    }

    #[test]
    fn test_disabled_button_not_clickable() {
        let mut terminal = Terminal::new(TestBackend::new(20, 1)).unwrap();
        let mut hits = HitMap::new();
        terminal
            .draw(|f| {
                let area = f.area();
                Button::new("Prev", false, HitTarget::PreviousLesson).render(f, area, &mut hits);
            })
            .unwrap();
        assert_eq!(hits.targets().count(), 0);
    }

    #[test]
    fn test_enabled_button_registers_its_rect() {
        let mut terminal = Terminal::new(TestBackend::new(20, 1)).unwrap();
        let mut hits = HitMap::new();
        let mut used = Rect::default();
        terminal
            .draw(|f| {
                let area = Rect::new(4, 0, 16, 1);
                used = Button::new("Next", true, HitTarget::NextLesson).render(f, area, &mut hits);
            })
            .unwrap();
        assert_eq!(used, Rect::new(4, 0, 6, 1));
        assert_eq!(hits.hit(9, 0), Some(HitTarget::NextLesson));
        assert_eq!(hits.hit(10, 0), None);
    }
}
