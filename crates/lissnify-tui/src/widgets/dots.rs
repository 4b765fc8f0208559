//! Dot indicators, one per reachable carousel position

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::Widget,
};

use crate::theme::styles;

/// `● ○ ○` style stop indicator, compact `x/y` when the dots don't fit
pub struct Dots {
    current: usize,
    stops: usize,
}

impl Dots {
    pub fn new(current: usize, stops: usize) -> Self {
        Self { current, stops }
    }

    /// Width the full dot row needs
    pub fn full_width(&self) -> usize {
        (self.stops * 2).saturating_sub(1)
    }

    fn line(&self, width: u16) -> Line<'static> {
        if self.full_width() <= width as usize {
            let spans: Vec<Span> = (0..self.stops)
                .flat_map(|i| {
                    let active = i == self.current;
                    let dot = Span::styled(if active { "●" } else { "○" }, styles::dot(active));
                    if i + 1 < self.stops {
                        vec![dot, Span::raw(" ")]
                    } else {
                        vec![dot]
                    }
                })
                .collect();
            Line::from(spans)
        } else {
            Line::styled(
                format!("{}/{}", self.current + 1, self.stops),
                styles::accent(),
            )
        }
    }
}

impl Widget for Dots {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if self.stops == 0 || area.is_empty() {
            return;
        }
        self.line(area.width).centered().render(area, buf);
    }
}
