//! # lissnify-core - Core Domain Types
//!
//! Foundation crate for Lissnify Deck. Provides domain types, responsive
//! breakpoint tables, error handling and logging setup.
//!
//! This crate has **zero internal dependencies** -- it only depends on external
//! crates (serde, chrono, thiserror, toml, tracing).
//!
//! ## Public API
//!
//! ### Domain Types (`types`)
//! - [`Category`], [`Testimonial`], [`Listener`], [`Step`] - Items shown in carousels
//! - [`CarouselId`] - Which home-page carousel a value belongs to
//! - [`StepPolicy`] - Page-granular vs item-granular stepping
//!
//! ### Breakpoints (`breakpoints`)
//! - [`BreakpointTable`] - Maps viewport width to items per view
//!
//! ### Error Handling (`error`)
//! - [`Error`] - Custom error enum with `fatal` vs `recoverable` classification
//! - [`Result`] - Type alias for `std::result::Result<T, Error>`
//! - [`ResultExt`] - Extension trait for adding error context
//!
//! ## Prelude
//!
//! Import commonly used types with:
//! ```rust
//! use lissnify_core::prelude::*;
//! ```

pub mod breakpoints;
pub mod error;
pub mod logging;
pub mod prelude;
pub mod types;

// Re-export commonly used types at crate root for convenience
pub use breakpoints::{Breakpoint, BreakpointTable};
pub use error::{Error, Result, ResultExt};
pub use types::{
    initials, rating_stars, CarouselId, Category, Listener, Step, StepPolicy, Testimonial,
    UserSummary,
};
