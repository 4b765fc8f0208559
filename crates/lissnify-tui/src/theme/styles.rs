//! Semantic style builders.

use lissnify_app::state::ContentStatus;
use ratatui::style::{Modifier, Style};
use ratatui::widgets::{Block, BorderType, Borders};

use super::palette;

// --- Text styles ---
pub fn text_primary() -> Style {
    Style::default().fg(palette::TEXT_PRIMARY)
}

pub fn text_secondary() -> Style {
    Style::default().fg(palette::TEXT_SECONDARY)
}

pub fn text_muted() -> Style {
    Style::default().fg(palette::TEXT_MUTED)
}

pub fn title() -> Style {
    Style::default()
        .fg(palette::TEXT_PRIMARY)
        .add_modifier(Modifier::BOLD)
}

// --- Border styles ---
pub fn border_inactive() -> Style {
    Style::default().fg(palette::BORDER_DIM)
}

pub fn border_active() -> Style {
    Style::default().fg(palette::BORDER_ACTIVE)
}

// --- Accent styles ---
pub fn accent() -> Style {
    Style::default().fg(palette::ACCENT)
}

pub fn accent_bold() -> Style {
    accent().add_modifier(Modifier::BOLD)
}

pub fn avatar() -> Style {
    Style::default()
        .fg(palette::ACCENT_SOFT)
        .add_modifier(Modifier::BOLD)
}

pub fn stars() -> Style {
    Style::default().fg(palette::STAR)
}

// --- Status styles ---
pub fn status_green() -> Style {
    Style::default().fg(palette::STATUS_GREEN)
}

pub fn status_red() -> Style {
    Style::default().fg(palette::STATUS_RED)
}

pub fn status_yellow() -> Style {
    Style::default().fg(palette::STATUS_YELLOW)
}

pub fn keybinding() -> Style {
    Style::default().fg(palette::STATUS_YELLOW)
}

// --- Navigation ---

/// Prev/next arrows, dimmed when there is nowhere to go
pub fn arrow(enabled: bool) -> Style {
    if enabled {
        accent_bold()
    } else {
        text_muted()
    }
}

pub fn dot(active: bool) -> Style {
    if active {
        accent()
    } else {
        text_muted()
    }
}

/// Auto-play indicator: (glyph, label, style)
pub fn autoplay_indicator(playing: bool) -> (&'static str, &'static str, Style) {
    if playing {
        ("●", "Auto-playing", status_green())
    } else {
        ("○", "Paused", text_muted())
    }
}

/// Content loading indicator: (glyph, style)
pub fn content_indicator(status: &ContentStatus) -> (&'static str, Style) {
    match status {
        ContentStatus::Idle => ("○", text_muted()),
        ContentStatus::Loading => ("⟳", status_yellow()),
        ContentStatus::Loaded { .. } => ("✓", status_green()),
        ContentStatus::Failed { .. } => ("✗", status_red()),
    }
}

// --- Block builders ---
pub fn glass_block(focused: bool) -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(if focused {
            border_active()
        } else {
            border_inactive()
        })
}

pub fn card_block() -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Plain)
        .border_style(border_inactive())
        .style(Style::default().bg(palette::CARD_BG))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_arrow_dims_when_disabled() {
        assert_eq!(arrow(false).fg, Some(palette::TEXT_MUTED));
        assert_eq!(arrow(true).fg, Some(palette::ACCENT));
    }

    #[test]
    fn test_autoplay_indicator() {
        assert_eq!(autoplay_indicator(true).1, "Auto-playing");
        assert_eq!(autoplay_indicator(false).0, "○");
    }

    #[test]
    fn test_content_indicator() {
        let failed = ContentStatus::Failed {
            error: "boom".into(),
        };
        assert_eq!(content_indicator(&failed).0, "✗");
        assert_eq!(content_indicator(&ContentStatus::Loading).0, "⟳");
    }
}
