//! # TitleBar Component
//!
//! Top line of the screen: course title, level readout, status message and
//! the button that opens the level menu.
//!
//! ```text
//! ▤ JS From Zero to Hero │ Level 3 of 37 │ Already at the last lesson   [ ≡ Levels ]
//! ```
//!
//! Purely presentational. All data arrives as props, and the only output is
//! the `MenuToggle` hit region.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};

use crate::tui::component::Clickable;
use crate::tui::components::button::Button;
use crate::tui::hit::{HitMap, HitTarget};

pub struct TitleBar {
    pub course_title: String,
    pub level_readout: String,
    pub status_message: String,
    pub menu_open: bool,
}

impl TitleBar {
    pub fn new(
        course_title: String,
        level_readout: String,
        status_message: String,
        menu_open: bool,
    ) -> Self {
        Self {
            course_title,
            level_readout,
            status_message,
            menu_open,
        }
    }
}

impl Clickable for TitleBar {
    fn render_with_hits(&mut self, frame: &mut Frame, area: Rect, hits: &mut HitMap) {
        let label = if self.menu_open { "× Close" } else { "≡ Levels" };
        let button = Button::new(label, true, HitTarget::MenuToggle);
        let button_width = button.width().min(area.width);
        let text_area = Rect {
            width: area.width.saturating_sub(button_width + 1),
            ..area
        };

        let separator = Span::styled(" │ ", Style::default().fg(Color::DarkGray));
        let mut spans = vec![
            Span::styled("▤ ", Style::default().fg(Color::Magenta)),
            Span::styled(
                self.course_title.clone(),
                Style::default()
                    .fg(Color::Magenta)
                    .add_modifier(Modifier::BOLD),
            ),
            separator.clone(),
            Span::styled(self.level_readout.clone(), Style::default().fg(Color::Gray)),
        ];
        if !self.status_message.is_empty() {
            spans.push(separator);
            spans.push(Span::styled(
                self.status_message.clone(),
                Style::default().fg(Color::Yellow),
            ));
        }
        frame.render_widget(Line::from(spans), text_area);

        let button_area = Rect {
            x: area.x + area.width - button_width,
            width: button_width,
            ..area
        };
        button.render(frame, button_area, hits);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn render(title_bar: &mut TitleBar) -> (String, HitMap) {
        let mut terminal = Terminal::new(TestBackend::new(80, 1)).unwrap();
        let mut hits = HitMap::new();
        terminal
            .draw(|f| {
                let area = f.area();
                title_bar.render_with_hits(f, area, &mut hits);
            })
            .unwrap();
        let text = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect::<String>();
        (text, hits)
    }

    #[test]
    fn test_title_bar_shows_course_and_readout() {
        let mut title_bar = TitleBar::new(
            "JS From Zero to Hero".to_string(),
            "Level 1 of 37".to_string(),
            String::new(),
            false,
        );
        let (text, _) = render(&mut title_bar);
        assert!(text.contains("JS From Zero to Hero"));
        assert!(text.contains("Level 1 of 37"));
        assert!(text.contains("≡ Levels"));
        assert_eq!(text.matches('│').count(), 1);
    }

    #[test]
    fn test_title_bar_with_status_message() {
        let mut title_bar = TitleBar::new(
            "Course".to_string(),
            "Level 2 of 3".to_string(),
            "Already at the last lesson".to_string(),
            true,
        );
        let (text, _) = render(&mut title_bar);
        assert!(text.contains("Already at the last lesson"));
        assert!(text.contains("× Close"));
    }

    #[test]
    fn test_menu_button_is_at_right_edge() {
        let mut title_bar =
            TitleBar::new("Course".to_string(), "Level 1 of 1".to_string(), String::new(), false);
        let (_, hits) = render(&mut title_bar);
        assert_eq!(hits.hit(79, 0), Some(HitTarget::MenuToggle));
        assert_eq!(hits.hit(0, 0), None);
    }
}
