//! Color palette, warm tones matching the Lissnify web brand.

use ratatui::style::Color;

// --- Background layers ---
pub const DEEPEST_BG: Color = Color::Reset;
pub const CARD_BG: Color = Color::Reset;

// --- Borders ---
pub const BORDER_DIM: Color = Color::DarkGray;
pub const BORDER_ACTIVE: Color = Color::Rgb(255, 159, 104);

// --- Accent ---
pub const ACCENT: Color = Color::Rgb(255, 159, 104);
pub const ACCENT_SOFT: Color = Color::Rgb(255, 205, 170);

// --- Text ---
pub const TEXT_PRIMARY: Color = Color::White;
pub const TEXT_SECONDARY: Color = Color::Gray;
pub const TEXT_MUTED: Color = Color::DarkGray;

// --- Status ---
pub const STATUS_GREEN: Color = Color::Green;
pub const STATUS_RED: Color = Color::Red;
pub const STATUS_YELLOW: Color = Color::Yellow;

// --- Ratings ---
pub const STAR: Color = Color::Rgb(250, 204, 21);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accent_is_rgb() {
        assert!(matches!(ACCENT, Color::Rgb(_, _, _)));
        assert_eq!(ACCENT, BORDER_ACTIVE);
    }
}
