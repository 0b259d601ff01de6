//! # LevelNav Component
//!
//! Bottom bar with the previous/next level buttons and a key hint.
//! Buttons are disabled at the first and last level.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Color, Style};
use ratatui::widgets::Paragraph;

use crate::tui::component::Clickable;
use crate::tui::components::button::Button;
use crate::tui::hit::{HitMap, HitTarget};

const HINT: &str = "←/→ lesson  [/] level  1-9 jump  m menu  q quit";

pub struct LevelNav {
    pub is_first_level: bool,
    pub is_last_level: bool,
}

impl Clickable for LevelNav {
    fn render_with_hits(&mut self, frame: &mut Frame, area: Rect, hits: &mut HitMap) {
        let previous = Button::new(
            "◀ Previous Level",
            !self.is_first_level,
            HitTarget::PreviousLevel,
        );
        let next = Button::new("Next Level ▶", !self.is_last_level, HitTarget::NextLevel);

        let [left, middle, right] = Layout::horizontal([
            Constraint::Length(previous.width()),
            Constraint::Min(0),
            Constraint::Length(next.width()),
        ])
        .areas(area);

        previous.render(frame, left, hits);
        frame.render_widget(
            Paragraph::new(HINT)
                .style(Style::default().fg(Color::DarkGray))
                .alignment(Alignment::Center),
            middle,
        );
        next.render(frame, right, hits);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn targets(nav: &mut LevelNav) -> Vec<HitTarget> {
        let mut terminal = Terminal::new(TestBackend::new(100, 1)).unwrap();
        let mut hits = HitMap::new();
        terminal
            .draw(|f| {
                let area = f.area();
                nav.render_with_hits(f, area, &mut hits);
            })
            .unwrap();
        hits.targets().collect()
    }

    #[test]
    fn test_middle_level_enables_both() {
        let mut nav = LevelNav {
            is_first_level: false,
            is_last_level: false,
        };
        assert_eq!(
            targets(&mut nav),
            vec![HitTarget::PreviousLevel, HitTarget::NextLevel]
        );
    }

    #[test]
    fn test_boundaries_disable_buttons() {
        let mut first = LevelNav {
            is_first_level: true,
            is_last_level: false,
        };
        assert_eq!(targets(&mut first), vec![HitTarget::NextLevel]);

        let mut only = LevelNav {
            is_first_level: true,
            is_last_level: true,
        };
        assert!(targets(&mut only).is_empty());
    }
}
