//! Concurrent deck loading
//!
//! The TEA loop never talks to the network directly: `UpdateAction::LoadContent`
//! spawns [`load_deck`] against a [`ContentSource`], and the result comes back as
//! `Message::ContentLoaded` / `Message::ContentLoadFailed`.

use lissnify_core::prelude::*;
use lissnify_core::{Category, Listener, Step, Testimonial};

use super::auth::AuthTokenProvider;
use super::data_source::{DataSource, DeckContent};
use super::fixtures::StaticDataSource;
use super::rest::RestDataSource;
use crate::config::ApiSettings;

/// Fetch all four collections concurrently. The first failure wins.
pub async fn load_deck<S: DataSource + Sync>(source: &S) -> Result<DeckContent> {
    let (categories, testimonials, listeners, steps) = tokio::try_join!(
        source.categories(),
        source.testimonials(),
        source.listeners(),
        source.steps(),
    )?;

    let content = DeckContent {
        categories,
        testimonials,
        steps,
        listeners,
    };
    info!(
        "Loaded {} items from {} ({} categories, {} testimonials, {} steps, {} listeners)",
        content.total(),
        source.label(),
        content.categories.len(),
        content.testimonials.len(),
        content.steps.len(),
        content.listeners.len()
    );
    Ok(content)
}

/// The concrete sources the binary can be configured with
#[derive(Debug, Clone)]
pub enum ContentSource {
    Rest(RestDataSource),
    Static(StaticDataSource),
}

impl ContentSource {
    /// Built-in content when `offline`, otherwise the REST API described by `api`
    pub fn from_settings(api: &ApiSettings, offline: bool) -> Result<Self> {
        if offline {
            info!("Using built-in offline content");
            return Ok(ContentSource::Static(StaticDataSource));
        }

        let auth = AuthTokenProvider::from_env(api.token_env.clone());
        if auth.token().is_none() {
            debug!("No token in ${}, requests go out unauthenticated", api.token_env);
        }
        let rest = RestDataSource::new(api, auth)
            .with_context(|| format!("Configuring REST source for {:?}", api.base_url))?;
        info!("Using REST content source at {}", rest.base_url());
        Ok(ContentSource::Rest(rest))
    }

    pub fn is_offline(&self) -> bool {
        matches!(self, ContentSource::Static(_))
    }
}

impl DataSource for ContentSource {
    fn label(&self) -> String {
        match self {
            ContentSource::Rest(s) => s.label(),
            ContentSource::Static(s) => s.label(),
        }
    }

    async fn categories(&self) -> Result<Vec<Category>> {
        match self {
            ContentSource::Rest(s) => s.categories().await,
            ContentSource::Static(s) => s.categories().await,
        }
    }

    async fn testimonials(&self) -> Result<Vec<Testimonial>> {
        match self {
            ContentSource::Rest(s) => s.testimonials().await,
            ContentSource::Static(s) => s.testimonials().await,
        }
    }

    async fn listeners(&self) -> Result<Vec<Listener>> {
        match self {
            ContentSource::Rest(s) => s.listeners().await,
            ContentSource::Static(s) => s.listeners().await,
        }
    }

    async fn steps(&self) -> Result<Vec<Step>> {
        match self {
            ContentSource::Rest(s) => s.steps().await,
            ContentSource::Static(s) => s.steps().await,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct BrokenListeners;

    impl DataSource for BrokenListeners {
        fn label(&self) -> String {
            "broken".to_string()
        }

        async fn categories(&self) -> Result<Vec<Category>> {
            StaticDataSource.categories().await
        }

        async fn testimonials(&self) -> Result<Vec<Testimonial>> {
            Ok(Vec::new())
        }

        async fn listeners(&self) -> Result<Vec<Listener>> {
            Err(Error::http(503, "http://localhost:8000/api/listenerList/"))
        }

        async fn steps(&self) -> Result<Vec<Step>> {
            Ok(Vec::new())
        }
    }

    #[tokio::test]
    async fn test_load_deck_from_static_source() {
        let content = load_deck(&StaticDataSource).await.unwrap();
        assert!(!content.categories.is_empty());
        assert_eq!(content.testimonials.len(), 6);
        assert_eq!(content.steps.len(), 6);
        assert!(!content.listeners.is_empty());
        assert_eq!(
            content.total(),
            content.categories.len() + 12 + content.listeners.len()
        );
    }

    #[tokio::test]
    async fn test_load_deck_propagates_first_error() {
        let err = load_deck(&BrokenListeners).await.unwrap_err();
        assert!(matches!(err, Error::Http { status: 503, .. }));
        assert!(err.is_recoverable());
    }

    #[tokio::test]
    async fn test_content_source_delegates() {
        let source = ContentSource::Static(StaticDataSource);
        assert!(source.is_offline());
        assert_eq!(source.label(), "offline");
        assert_eq!(source.steps().await.unwrap().len(), 6);
    }

    #[test]
    fn test_from_settings_offline() {
        let api = ApiSettings {
            base_url: "not a url".to_string(),
            ..Default::default()
        };
        // The base URL is never parsed when offline
        let source = ContentSource::from_settings(&api, true).unwrap();
        assert!(source.is_offline());
    }

    #[test]
    fn test_from_settings_rest() {
        let api = ApiSettings {
            base_url: "http://127.0.0.1:9000".to_string(),
            ..Default::default()
        };
        let source = ContentSource::from_settings(&api, false).unwrap();
        assert!(!source.is_offline());
        assert_eq!(source.label(), "127.0.0.1:9000");
    }

    #[test]
    fn test_from_settings_rejects_bad_url() {
        let api = ApiSettings {
            base_url: "ftp://example.com".to_string(),
            ..Default::default()
        };
        assert!(ContentSource::from_settings(&api, false).is_err());
    }
}
