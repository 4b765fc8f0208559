//! Bearer token lookup for the REST backend

use lissnify_core::prelude::*;

/// Where the API token comes from
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum AuthTokenProvider {
    /// Read from an environment variable when requests are built
    Env { var: String },
    /// Fixed token (tests, `--token` style overrides)
    Static(String),
    /// Anonymous access
    #[default]
    None,
}

impl AuthTokenProvider {
    pub fn from_env(var: impl Into<String>) -> Self {
        Self::Env { var: var.into() }
    }

    /// The token, if one is available. Empty values count as absent.
    pub fn token(&self) -> Option<String> {
        let token = match self {
            AuthTokenProvider::Env { var } => std::env::var(var).ok(),
            AuthTokenProvider::Static(token) => Some(token.clone()),
            AuthTokenProvider::None => None,
        };
        token.filter(|t| !t.trim().is_empty())
    }

    /// Like [`token`](Self::token) but fails when no token is set
    pub fn require(&self) -> Result<String> {
        self.token().ok_or_else(|| match self {
            AuthTokenProvider::Env { var } => Error::missing_token(var.clone()),
            _ => Error::missing_token("<static>"),
        })
    }
}
