//! Main render/view function (View in TEA pattern)

use lissnify_app::state::AppState;
use lissnify_app::HitArea;
use lissnify_core::CarouselId;
use ratatui::{layout::Rect, Frame};

use crate::layout;
use crate::widgets::{self, CarouselView};

/// Render the complete UI
///
/// Records each carousel's screen area on the state so mouse moves can be
/// hit-tested against what was actually drawn.
pub fn view(frame: &mut Frame, state: &mut AppState) {
    let area = frame.area();
    let areas = layout::create(area, state.settings.ui.show_status_bar);

    frame.render_widget(
        widgets::MainHeader::new(&state.source_label, &state.content),
        areas.header,
    );

    for id in CarouselId::ALL {
        let rect = areas.carousel(id);
        let focused = state.focus == id;
        let deck = &state.deck;
        match id {
            CarouselId::Categories => frame.render_widget(
                CarouselView::new(&deck.categories).focused(focused),
                rect,
            ),
            CarouselId::Testimonials => frame.render_widget(
                CarouselView::new(&deck.testimonials).focused(focused),
                rect,
            ),
            CarouselId::Steps => {
                frame.render_widget(CarouselView::new(&deck.steps).focused(focused), rect)
            }
            CarouselId::Listeners => frame.render_widget(
                CarouselView::new(&deck.listeners).focused(focused),
                rect,
            ),
        }
        state.deck.get_mut(id).set_hit_area(hit_area(rect));
    }

    if areas.status.height > 0 {
        if area.width < widgets::COMPACT_WIDTH {
            frame.render_widget(widgets::StatusBarCompact::new(state), areas.status);
        } else {
            frame.render_widget(widgets::StatusBar::new(state), areas.status);
        }
    }
}

fn hit_area(rect: Rect) -> Option<HitArea> {
    if rect.is_empty() {
        None
    } else {
        Some(HitArea::new(rect.x, rect.y, rect.width, rect.height))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{buffer_text, loaded_state};
    use lissnify_app::state::ContentStatus;
    use lissnify_app::CarouselControl;
    use ratatui::{backend::TestBackend, Terminal};

    fn draw(state: &mut AppState, width: u16, height: u16) -> String {
        let backend = TestBackend::new(width, height);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|f| view(f, state)).unwrap();
        buffer_text(terminal.backend().buffer())
    }

    #[test]
    fn test_view_renders_every_section() {
        let mut state = loaded_state(130);
        state.source_label = "offline".to_string();
        state.content = ContentStatus::Loaded { items: 33 };

        let content = draw(&mut state, 130, 45);

        assert!(content.contains("Lissnify / offline"));
        for id in CarouselId::ALL {
            assert!(content.contains(id.title()), "missing {}", id.title());
        }
        assert!(content.contains("page 1/3"));
    }

    #[test]
    fn test_view_records_hit_areas() {
        let mut state = loaded_state(130);
        draw(&mut state, 130, 45);

        let categories = state.deck.get(CarouselId::Categories).hit_area().unwrap();
        assert_eq!(categories, HitArea::new(0, 3, 130, 10));
        assert_eq!(state.deck.hit_test(5, 4), Some(CarouselId::Categories));
        assert_eq!(state.deck.hit_test(5, 40), Some(CarouselId::Listeners));
        assert_eq!(state.deck.hit_test(5, 1), None);
    }

    #[test]
    fn test_view_without_status_bar() {
        let mut state = loaded_state(130);
        state.settings.ui.show_status_bar = false;

        let content = draw(&mut state, 130, 43);
        assert!(!content.contains("Quit"));
        let listeners = state.deck.get(CarouselId::Listeners).hit_area().unwrap();
        assert_eq!(listeners.y + listeners.height, 43);
    }

    #[test]
    fn test_view_narrow_terminal_uses_compact_bar() {
        let mut state = loaded_state(40);
        let content = draw(&mut state, 40, 30);
        assert!(content.contains("Support Categories 1/12"));
    }

    #[test]
    fn test_view_tiny_terminal_clears_hit_areas() {
        let mut state = loaded_state(130);
        // Header and status bar take every row
        draw(&mut state, 20, 5);
        assert!(CarouselId::ALL
            .iter()
            .all(|id| state.deck.get(*id).hit_area().is_none()));
        assert!(state.deck.hit_test(1, 3).is_none());
    }
}
