//! # Hit Testing
//!
//! Components register the screen rectangles of their clickable controls
//! while rendering. A mouse click is then resolved against the regions of
//! the last frame.
//!
//! Disabled controls are never registered, so clicking them does nothing.
//! Later registrations win, which lets overlays shadow what is beneath them.

use ratatui::layout::{Position, Rect};

/// Something a click can land on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HitTarget {
    PreviousLevel,
    NextLevel,
    PreviousLesson,
    NextLesson,
    LessonDot(usize),
    MenuToggle,
    MenuEntry(usize),
}

#[derive(Debug, Default)]
pub struct HitMap {
    regions: Vec<(Rect, HitTarget)>,
}

impl HitMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Forget the previous frame's regions.
    pub fn clear(&mut self) {
        self.regions.clear();
    }

    pub fn register(&mut self, area: Rect, target: HitTarget) {
        if area.width > 0 && area.height > 0 {
            self.regions.push((area, target));
        }
    }

    /// Topmost target under the given cell.
    pub fn hit(&self, column: u16, row: u16) -> Option<HitTarget> {
        let pos = Position::new(column, row);
        self.regions
            .iter()
            .rev()
            .find(|(area, _)| area.contains(pos))
            .map(|(_, target)| *target)
    }

    pub fn targets(&self) -> impl Iterator<Item = HitTarget> + '_ {
        self.regions.iter().map(|(_, target)| *target)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hit_inside_and_outside() {
        let mut hits = HitMap::new();
        hits.register(Rect::new(2, 1, 4, 1), HitTarget::NextLesson);
        assert_eq!(hits.hit(2, 1), Some(HitTarget::NextLesson));
        assert_eq!(hits.hit(5, 1), Some(HitTarget::NextLesson));
        assert_eq!(hits.hit(6, 1), None);
        assert_eq!(hits.hit(3, 0), None);
    }

    #[test]
    fn test_later_registration_wins() {
        let mut hits = HitMap::new();
        hits.register(Rect::new(0, 0, 10, 10), HitTarget::PreviousLevel);
        hits.register(Rect::new(3, 3, 2, 1), HitTarget::MenuEntry(4));
        assert_eq!(hits.hit(3, 3), Some(HitTarget::MenuEntry(4)));
        assert_eq!(hits.hit(0, 0), Some(HitTarget::PreviousLevel));
    }

    #[test]
    fn test_empty_rect_not_registered() {
        let mut hits = HitMap::new();
        hits.register(Rect::new(0, 0, 0, 1), HitTarget::MenuToggle);
        assert_eq!(hits.targets().count(), 0);
    }

    #[test]
    fn test_clear_forgets_regions() {
        let mut hits = HitMap::new();
        hits.register(Rect::new(0, 0, 1, 1), HitTarget::LessonDot(0));
        assert_eq!(hits.targets().count(), 1);
        hits.clear();
        assert_eq!(hits.targets().count(), 0);
        assert_eq!(hits.hit(0, 0), None);
    }
}
