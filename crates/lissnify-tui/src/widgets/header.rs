//! Header bar widget
//!
//! Title, content source and loading state.

use lissnify_app::state::ContentStatus;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Widget,
};

use crate::theme::{palette, styles};

/// Main header showing the app title, the content source and loading state
pub struct MainHeader<'a> {
    source_label: &'a str,
    content: &'a ContentStatus,
}

impl<'a> MainHeader<'a> {
    pub fn new(source_label: &'a str, content: &'a ContentStatus) -> Self {
        Self {
            source_label,
            content,
        }
    }

    fn content_label(&self) -> String {
        match self.content {
            ContentStatus::Idle => "Idle".to_string(),
            ContentStatus::Loading => "Loading…".to_string(),
            ContentStatus::Loaded { items } => format!("{} items", items),
            ContentStatus::Failed { .. } => "Load failed".to_string(),
        }
    }
}

impl Widget for MainHeader<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(false).style(Style::default().bg(palette::CARD_BG));
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        let (icon, icon_style) = styles::content_indicator(self.content);
        let source = if self.source_label.is_empty() {
            "no source"
        } else {
            self.source_label
        };

        let left_line = Line::from(vec![
            Span::raw(" "),
            Span::styled("Lissnify", styles::accent_bold()),
            Span::raw(" "),
            Span::styled("/", styles::text_muted()),
            Span::raw(" "),
            Span::styled(source, styles::text_secondary()),
        ]);
        let left_width = left_line.width() as u16;

        let right_line = Line::from(vec![
            Span::styled(icon, icon_style),
            Span::raw(" "),
            Span::styled(self.content_label(), icon_style),
            Span::raw(" "),
        ]);
        let right_width = right_line.width() as u16;

        buf.set_line(inner.x, inner.y, &left_line, inner.width);

        // Right-align the loading state when it fits next to the title
        if left_width + right_width + 2 <= inner.width {
            let right_x = inner.x + inner.width - right_width;
            buf.set_line(right_x, inner.y, &right_line, right_width);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::buffer_text;
    use ratatui::{backend::TestBackend, Terminal};

    fn render(header: MainHeader<'_>, width: u16) -> String {
        let backend = TestBackend::new(width, 3);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|f| f.render_widget(header, f.area()))
            .unwrap();
        buffer_text(terminal.backend().buffer())
    }

    #[test]
    fn test_header_shows_source_and_state() {
        let status = ContentStatus::Loaded { items: 33 };
        let content = render(MainHeader::new("localhost:8000", &status), 80);

        assert!(content.contains("Lissnify / localhost:8000"));
        assert!(content.contains("✓ 33 items"));
    }

    #[test]
    fn test_header_loading() {
        let content = render(MainHeader::new("offline", &ContentStatus::Loading), 60);
        assert!(content.contains("⟳ Loading…"));
    }

    #[test]
    fn test_header_drops_state_when_narrow() {
        let status = ContentStatus::Failed {
            error: "boom".to_string(),
        };
        let content = render(MainHeader::new("api.lissnify.com", &status), 30);
        assert!(content.contains("Lissnify"));
        assert!(!content.contains("Load failed"));
    }
}
