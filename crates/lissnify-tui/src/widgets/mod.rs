//! Custom widgets for the Lissnify Deck TUI

mod card;
mod carousel;
mod dots;
mod header;
mod status_bar;

pub use card::{Avatar, Badge, Card, CardContent};
pub use carousel::CarouselView;
pub use dots::Dots;
pub use header::MainHeader;
pub use status_bar::{StatusBar, StatusBarCompact, COMPACT_WIDTH};

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Cut `text` to at most `max_width` display columns, marking the cut with `…`
pub(crate) fn truncate_to_width(text: &str, max_width: usize) -> String {
    if text.width() <= max_width {
        return text.to_string();
    }
    if max_width == 0 {
        return String::new();
    }

    let mut out = String::new();
    let mut used = 0;
    for ch in text.chars() {
        let w = ch.width().unwrap_or(0);
        if used + w + 1 > max_width {
            break;
        }
        out.push(ch);
        used += w;
    }
    out.push('…');
    out
}
