//! Service layer for content loading
//!
//! - [`DataSource`] - async trait implemented by every content source
//! - [`RestDataSource`] - the Lissnify REST backend (reqwest)
//! - [`StaticDataSource`] - built-in content for `--offline`
//! - [`AuthTokenProvider`] - optional bearer token

pub mod auth;
pub mod data_source;
pub mod fixtures;
pub mod loader;
pub mod rest;

pub use auth::AuthTokenProvider;
pub use data_source::{DataSource, DeckContent};
pub use fixtures::StaticDataSource;
pub use loader::{load_deck, ContentSource};
pub use rest::RestDataSource;
