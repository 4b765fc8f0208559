//! Message types for the application (TEA pattern)

use lissnify_core::CarouselId;

use crate::carousel::Nav;
use crate::input_key::InputKey;
use crate::services::DeckContent;
use crate::signals::ShutdownSignal;

/// All possible messages/actions in the application
#[derive(Debug, Clone)]
pub enum Message {
    /// Keyboard event from terminal
    Key(InputKey),

    /// Tick event, polls the auto-advance scheduler
    Tick,

    /// Terminal was resized
    Resize { width: u16, height: u16 },

    /// Mouse moved to a cell
    MouseMove { column: u16, row: u16 },

    /// Quit from the keyboard (q, Esc, Ctrl+C in raw mode)
    Quit,

    /// OS termination signal forwarded by the signal task
    Shutdown(ShutdownSignal),

    // ─────────────────────────────────────────────────────────
    // Carousel Messages
    // ─────────────────────────────────────────────────────────
    FocusNext,
    FocusPrev,
    Focus(CarouselId),

    /// Manual navigation of one carousel
    Navigate { id: CarouselId, nav: Nav },

    ToggleAutoPlay(CarouselId),

    HoverEnter(CarouselId),
    HoverLeave(CarouselId),

    // ─────────────────────────────────────────────────────────
    // Content Messages
    // ─────────────────────────────────────────────────────────
    /// Fetch content again from the configured source
    ReloadContent,

    /// Background load finished
    ContentLoaded(Box<DeckContent>),

    /// Background load failed
    ContentLoadFailed { error: String },
}
