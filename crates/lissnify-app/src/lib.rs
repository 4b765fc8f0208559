//! lissnify-app - Application state and orchestration for Lissnify Deck
//!
//! This crate implements the TEA (The Elm Architecture) pattern for state management,
//! the responsive auto-advancing carousel controller, configuration loading and the
//! content services behind the carousels.

pub mod actions;
pub mod carousel;
pub mod clock;
pub mod config;
pub mod handler;
pub mod input_key;
pub mod message;
pub mod process;
pub mod services;
pub mod signals;
pub mod state;

// Re-export primary types
pub use carousel::{
    Carousel, CarouselControl, CarouselIndex, CarouselStatus, FixedViewport, HitArea,
    IntervalScheduler, Nav, TimerHost, TimerToken, ViewportProvider,
};
pub use clock::{Clock, ManualClock, SystemClock};
pub use handler::{UpdateAction, UpdateResult};
pub use input_key::InputKey;
pub use message::Message;
pub use services::{ContentSource, DeckContent};
pub use state::{AppPhase, AppState, ContentStatus, Deck};
