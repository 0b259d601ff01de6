use crate::core::state::App;
use crate::tui::TuiState;
use crate::tui::component::Clickable;
use crate::tui::components::{LessonCard, LevelMenu, LevelNav, TitleBar};

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Color, Style};
use ratatui::widgets::{Block, Paragraph, Wrap};

/// Draw one frame and rebuild the hit map to match it.
pub fn draw_ui(frame: &mut Frame, app: &App, tui: &mut TuiState) {
    use Constraint::{Length, Min};
    let layout = Layout::vertical([Length(1), Min(0), Length(1)]);
    let [title_area, main_area, nav_area] = layout.areas(frame.area());

    tui.hits.clear();
    let nav = &app.navigation;

    TitleBar::new(
        app.catalog.title().to_string(),
        app.level_readout(),
        app.status_message.clone(),
        tui.level_menu.is_some(),
    )
    .render_with_hits(frame, title_area, &mut tui.hits);

    // Main area: the level card, or an error if the position left the catalog
    let (level_index, lesson_index) = nav.position();
    match app.current_level() {
        Some(level) if lesson_index < level.lessons.len() => {
            LessonCard {
                level,
                level_index,
                level_count: nav.level_count(),
                lesson_index,
                is_first_lesson: nav.is_first_lesson(level_index),
                is_last_lesson: nav.is_last_lesson(level_index),
                code_style: &tui.code_style,
                state: &mut tui.lesson_card,
            }
            .render_with_hits(frame, main_area, &mut tui.hits);
        }
        _ => draw_error_view(
            frame,
            main_area,
            &format!(
                "No lesson at level {}, lesson {}",
                level_index + 1,
                lesson_index + 1
            ),
        ),
    }

    LevelNav {
        is_first_level: nav.is_first_level(),
        is_last_level: nav.is_last_level(),
    }
    .render_with_hits(frame, nav_area, &mut tui.hits);

    if let Some(menu) = tui.level_menu.as_mut() {
        LevelMenu::new(menu).render_with_hits(frame, main_area, &mut tui.hits);
    }
}

fn draw_error_view(frame: &mut Frame, area: Rect, error_msg: &str) {
    let error_paragraph = Paragraph::new(error_msg)
        .block(Block::bordered().title("ERROR"))
        .style(Style::default().fg(Color::Red))
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });

    frame.render_widget(error_paragraph, area);
}
