//! Cards shown inside a carousel
//!
//! [`CardContent`] adapts each domain item to the same card layout: an
//! avatar and title row, an optional subtitle, a wrapped body and a badge
//! pinned to the bottom row.

use lissnify_core::{initials, rating_stars, Category, Listener, Step, Testimonial};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{Paragraph, Widget, Wrap},
};
use unicode_width::UnicodeWidthStr;

use super::truncate_to_width;
use crate::theme::styles;

/// Avatar shown before a card title
#[derive(Debug, Clone, PartialEq)]
pub enum Avatar {
    /// Initials or an emoji icon
    Text(String),
    /// The item has an image; terminals get a placeholder glyph
    Image,
}

impl Avatar {
    /// Image when `image` is a non-empty reference, initials of `name` otherwise
    pub fn with_fallback(image: Option<&str>, name: &str) -> Self {
        match image {
            Some(src) if !src.trim().is_empty() => Avatar::Image,
            _ => Avatar::Text(initials(name)),
        }
    }

    pub fn label(&self) -> String {
        match self {
            Avatar::Text(text) => text.clone(),
            Avatar::Image => "◉".to_string(),
        }
    }
}

/// Footer of a card
#[derive(Debug, Clone, PartialEq)]
pub enum Badge {
    Rating(f32),
    Text(String),
}

/// Anything that can be drawn as a card
pub trait CardContent {
    fn title(&self) -> String;

    fn subtitle(&self) -> Option<String> {
        None
    }

    fn body(&self) -> String;

    fn badge(&self) -> Option<Badge> {
        None
    }

    fn avatar(&self) -> Option<Avatar> {
        None
    }
}

impl CardContent for Category {
    fn title(&self) -> String {
        self.name.clone()
    }

    fn subtitle(&self) -> Option<String> {
        Some(self.support_text.clone()).filter(|s| !s.is_empty())
    }

    fn body(&self) -> String {
        self.description.clone()
    }

    fn avatar(&self) -> Option<Avatar> {
        // URLs and paths can't be shown; short icons (emoji) can
        self.icon
            .as_deref()
            .map(str::trim)
            .filter(|icon| !icon.is_empty() && !icon.contains('/') && icon.width() <= 2)
            .map(|icon| Avatar::Text(icon.to_string()))
    }
}

impl CardContent for Testimonial {
    fn title(&self) -> String {
        self.name.clone()
    }

    fn subtitle(&self) -> Option<String> {
        self.role.clone().filter(|r| !r.is_empty())
    }

    fn body(&self) -> String {
        format!("“{}”", self.feedback)
    }

    fn badge(&self) -> Option<Badge> {
        Some(Badge::Rating(self.rating as f32))
    }

    fn avatar(&self) -> Option<Avatar> {
        Some(Avatar::with_fallback(self.image.as_deref(), &self.name))
    }
}

impl CardContent for Step {
    fn title(&self) -> String {
        format!("{}. {}", self.number, self.title)
    }

    fn body(&self) -> String {
        self.description.clone()
    }

    fn badge(&self) -> Option<Badge> {
        self.benefit
            .as_ref()
            .map(|benefit| Badge::Text(format!("✓ {}", benefit)))
    }
}

impl CardContent for Listener {
    fn title(&self) -> String {
        self.full_name.clone()
    }

    fn subtitle(&self) -> Option<String> {
        Some(self.language.clone())
    }

    fn body(&self) -> String {
        self.description.clone()
    }

    fn badge(&self) -> Option<Badge> {
        Some(Badge::Rating(self.rating))
    }

    fn avatar(&self) -> Option<Avatar> {
        Some(Avatar::with_fallback(Listener::avatar(self), &self.full_name))
    }
}

/// A single bordered card
pub struct Card<'a, T> {
    item: &'a T,
}

impl<'a, T: CardContent> Card<'a, T> {
    pub fn new(item: &'a T) -> Self {
        Self { item }
    }

    fn heading(&self, width: usize) -> Line<'static> {
        let mut spans = Vec::new();
        let mut remaining = width;

        if let Some(avatar) = self.item.avatar() {
            let label = format!("({}) ", avatar.label());
            remaining = remaining.saturating_sub(label.width());
            spans.push(Span::styled(label, styles::avatar()));
        }
        spans.push(Span::styled(
            truncate_to_width(&self.item.title(), remaining),
            styles::title(),
        ));
        Line::from(spans)
    }

    fn badge_line(badge: Badge, width: usize) -> Line<'static> {
        match badge {
            Badge::Rating(rating) => Line::from(vec![
                Span::styled(rating_stars(rating), styles::stars()),
                Span::styled(format!(" {:.1}", rating), styles::text_muted()),
            ]),
            Badge::Text(text) => Line::styled(truncate_to_width(&text, width), styles::accent()),
        }
    }
}

impl<T: CardContent> Widget for Card<'_, T> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::card_block();
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.is_empty() {
            return;
        }

        let width = inner.width as usize;
        let badge = self.item.badge();
        let badge_height = u16::from(badge.is_some() && inner.height > 2);
        let [text_area, badge_area] =
            Layout::vertical([Constraint::Min(0), Constraint::Length(badge_height)]).areas(inner);

        let mut lines = vec![self.heading(width)];
        if let Some(subtitle) = self.item.subtitle() {
            lines.push(Line::styled(
                truncate_to_width(&subtitle, width),
                styles::text_secondary(),
            ));
        }
        lines.push(Line::default());
        lines.push(Line::styled(self.item.body(), styles::text_primary()));

        Paragraph::new(lines)
            .wrap(Wrap { trim: true })
            .render(text_area, buf);

        if let Some(badge) = badge.filter(|_| badge_height > 0) {
            Self::badge_line(badge, width).render(badge_area, buf);
        }
    }
}
