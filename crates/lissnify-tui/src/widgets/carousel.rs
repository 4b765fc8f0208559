//! Carousel view
//!
//! Pure rendering of a [`Carousel`]: the visible slice as equal-width cards
//! between prev/next arrows, a dot row for every reachable position, and the
//! auto-play indicator in the block title.

use lissnify_app::{Carousel, CarouselControl};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use super::{Card, CardContent, Dots};
use crate::theme::styles;

const ARROW_WIDTH: u16 = 3;

pub struct CarouselView<'a, T> {
    carousel: &'a Carousel<T>,
    focused: bool,
}

impl<'a, T: CardContent> CarouselView<'a, T> {
    pub fn new(carousel: &'a Carousel<T>) -> Self {
        Self {
            carousel,
            focused: false,
        }
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    fn render_arrow(glyph: &'static str, enabled: bool, area: Rect, buf: &mut Buffer) {
        if area.is_empty() {
            return;
        }
        let row = Rect::new(area.x, area.y + area.height / 2, area.width, 1);
        Line::styled(glyph, styles::arrow(enabled))
            .centered()
            .render(row, buf);
    }
}

impl<T: CardContent> Widget for CarouselView<'_, T> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let status = self.carousel.status();
        let (glyph, label, indicator_style) = styles::autoplay_indicator(status.is_auto_playing);

        let title_style = if self.focused {
            styles::accent_bold()
        } else {
            styles::title()
        };
        let block = styles::glass_block(self.focused)
            .title(Line::from(vec![
                Span::raw(" "),
                Span::styled(status.id.title(), title_style),
                Span::raw(" "),
            ]))
            .title_top(
                Line::from(Span::styled(format!(" {} {} ", glyph, label), indicator_style))
                    .right_aligned(),
            );

        let inner = block.inner(area);
        block.render(area, buf);
        if inner.is_empty() {
            return;
        }

        if status.item_count == 0 {
            let row = Rect::new(inner.x, inner.y + inner.height / 2, inner.width, 1);
            Paragraph::new(Line::styled("Nothing to show yet", styles::text_muted()))
                .centered()
                .render(row, buf);
            return;
        }

        let [track, dots_row] =
            Layout::vertical([Constraint::Min(0), Constraint::Length(1)]).areas(inner);
        let [prev, cards, next] = Layout::horizontal([
            Constraint::Length(ARROW_WIDTH),
            Constraint::Min(0),
            Constraint::Length(ARROW_WIDTH),
        ])
        .areas(track);

        let enabled = status.can_navigate();
        Self::render_arrow("◀", enabled, prev, buf);
        Self::render_arrow("▶", enabled, next, buf);

        // Slots are sized for a full page so a short last page keeps card widths
        let per_view = status.items_per_view.max(1);
        let slots = Layout::horizontal(vec![Constraint::Ratio(1, per_view as u32); per_view])
            .split(cards);
        for (item, slot) in self.carousel.visible_items().iter().zip(slots.iter()) {
            Card::new(item).render(*slot, buf);
        }

        Dots::new(status.current_index, status.stop_count).render(dots_row, buf);
    }
}
