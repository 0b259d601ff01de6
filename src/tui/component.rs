use ratatui::Frame;
use ratatui::layout::Rect;

use crate::tui::hit::HitMap;

/// A reusable UI component with clickable regions.
///
/// Components follow the React pattern:
/// - They receive data via props (struct fields).
/// - They may hold internal state (via `&mut State` fields).
/// - They render to a `Frame` within a given `Rect`.
///
/// Rendering and hit registration happen in the same pass so the regions
/// always match what is on screen. `&mut self` lets components update
/// presentation state (scroll offsets, cached heights) while rendering,
/// as Ratatui's `StatefulWidget` does.
pub trait Clickable {
    fn render_with_hits(&mut self, frame: &mut Frame, area: Rect, hits: &mut HitMap);
}

/// A component that handles terminal events.
pub trait EventHandler {
    /// The type of high-level event this component emits.
    type Event;

    /// Handle a low-level `TuiEvent` and optionally return a high-level event.
    fn handle_event(&mut self, event: &super::event::TuiEvent) -> Option<Self::Event>;
}
