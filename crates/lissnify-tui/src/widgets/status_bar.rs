//! Status bar widget
//!
//! Focused carousel, its position, auto-play state, the last content error
//! and key hints.

use lissnify_app::state::{AppState, ContentStatus};
use lissnify_app::CarouselStatus;
use lissnify_core::StepPolicy;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

use super::truncate_to_width;
use crate::theme::styles;

/// Terminals narrower than this get [`StatusBarCompact`]
pub const COMPACT_WIDTH: u16 = 60;

const MAX_ERROR_WIDTH: usize = 48;

fn position_label(status: &CarouselStatus) -> String {
    let unit = match status.policy {
        StepPolicy::Page => "page",
        StepPolicy::Item => "item",
    };
    format!("{} {}/{}", unit, status.current_index + 1, status.stop_count)
}

fn separator() -> Span<'static> {
    Span::styled(" │ ", styles::border_inactive())
}

fn top_rule() -> Block<'static> {
    Block::default()
        .borders(Borders::TOP)
        .border_style(styles::border_inactive())
}

/// Status bar widget showing the focused carousel
pub struct StatusBar<'a> {
    state: &'a AppState,
}

impl<'a> StatusBar<'a> {
    pub fn new(state: &'a AppState) -> Self {
        Self { state }
    }

    fn key_hints() -> Vec<Span<'static>> {
        [
            ("←/→", "Move"),
            ("Tab", "Focus"),
            ("Space", "Play"),
            ("r", "Reload"),
            ("q", "Quit"),
        ]
        .into_iter()
        .flat_map(|(key, label)| {
            [
                Span::styled(key, styles::keybinding()),
                Span::styled(format!(" {}  ", label), styles::text_muted()),
            ]
        })
        .collect()
    }

    fn build_segments(&self) -> Vec<Span<'static>> {
        let status = self.state.deck.get(self.state.focus).status();
        let (glyph, label, style) = styles::autoplay_indicator(status.is_auto_playing);

        let mut segments = vec![
            Span::raw(" "),
            Span::styled(status.id.title(), styles::accent_bold()),
            separator(),
            Span::styled(position_label(&status), styles::text_secondary()),
            separator(),
            Span::styled(format!("{} {}", glyph, label), style),
        ];

        if let ContentStatus::Failed { error } = &self.state.content {
            segments.push(separator());
            segments.push(Span::styled(
                format!("✗ {}", truncate_to_width(error, MAX_ERROR_WIDTH)),
                styles::status_red(),
            ));
        }

        segments.push(separator());
        segments.extend(Self::key_hints());
        segments
    }
}

impl Widget for StatusBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = top_rule();
        let inner = block.inner(area);
        block.render(area, buf);

        Paragraph::new(Line::from(self.build_segments())).render(inner, buf);
    }
}

/// Compact status bar for narrow terminals
pub struct StatusBarCompact<'a> {
    state: &'a AppState,
}

impl<'a> StatusBarCompact<'a> {
    pub fn new(state: &'a AppState) -> Self {
        Self { state }
    }
}

impl Widget for StatusBarCompact<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = top_rule();
        let inner = block.inner(area);
        block.render(area, buf);

        let status = self.state.deck.get(self.state.focus).status();
        let (glyph, _label, style) = styles::autoplay_indicator(status.is_auto_playing);

        let mut spans = vec![
            Span::raw(" "),
            Span::styled(glyph, style),
            Span::raw(" "),
            Span::styled(status.id.title(), styles::accent_bold()),
            Span::raw(" "),
            Span::styled(
                format!("{}/{}", status.current_index + 1, status.stop_count),
                styles::text_secondary(),
            ),
        ];
        if matches!(self.state.content, ContentStatus::Failed { .. }) {
            spans.push(Span::styled(" ✗", styles::status_red()));
        }

        Paragraph::new(Line::from(spans)).render(inner, buf);
    }
}
