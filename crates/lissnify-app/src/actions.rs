//! Action handlers: UpdateAction dispatch and background task spawning

use tokio::sync::mpsc;
use lissnify_core::prelude::*;

use crate::handler::UpdateAction;
use crate::message::Message;
use crate::services::{load_deck, ContentSource, DataSource};

/// Execute an action by spawning a background task
pub fn handle_action(action: UpdateAction, msg_tx: mpsc::Sender<Message>, source: &ContentSource) {
    match action {
        UpdateAction::LoadContent => {
            spawn_content_load(source.clone(), msg_tx);
        }
    }
}

/// Load the deck in the background and post the outcome to the TEA loop
pub fn spawn_content_load(
    source: ContentSource,
    msg_tx: mpsc::Sender<Message>,
) -> tokio::task::JoinHandle<()> {
    tokio::spawn(async move {
        let label = source.label();
        debug!("Loading content from {}", label);
        let loaded = load_deck(&source)
            .await
            .with_context(|| format!("Content load from {}", label));
        let message = match loaded {
            Ok(content) => Message::ContentLoaded(Box::new(content)),
            Err(e) => Message::ContentLoadFailed {
                error: e.to_string(),
            },
        };
        if msg_tx.send(message).await.is_err() {
            warn!("Content loaded after the event loop closed");
        }
    })
}
