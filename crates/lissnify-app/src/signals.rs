//! OS signal handling for graceful shutdown
//!
//! The signal task never touches state: it posts `Message::Shutdown` and the
//! TEA loop stops the deck, so timers are cleared on the same path as `q`.

use std::fmt;

use tokio::sync::mpsc;

use crate::message::Message;
use lissnify_core::prelude::*;

/// Which OS request ended the session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShutdownSignal {
    Interrupt,
    Terminate,
}

impl fmt::Display for ShutdownSignal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            #[cfg(unix)]
            ShutdownSignal::Interrupt => write!(f, "SIGINT"),
            #[cfg(not(unix))]
            ShutdownSignal::Interrupt => write!(f, "Ctrl+C"),
            ShutdownSignal::Terminate => write!(f, "SIGTERM"),
        }
    }
}

/// Spawn a task that forwards the first termination signal to the event loop
pub fn spawn_signal_handler(tx: mpsc::Sender<Message>) {
    tokio::spawn(async move {
        let signal = match wait_for_signal().await {
            Ok(signal) => signal,
            Err(e) => {
                error!("Signal handler error: {}", e);
                return;
            }
        };

        debug!("Forwarding {} to the event loop", signal);
        if tx.send(Message::Shutdown(signal)).await.is_err() {
            debug!("{} arrived after the event loop closed", signal);
        }
    });
}

async fn wait_for_signal() -> Result<ShutdownSignal> {
    #[cfg(unix)]
    {
        use tokio::signal::unix::{signal, SignalKind};

        let mut sigint = signal(SignalKind::interrupt())
            .map_err(|e| Error::terminal(format!("Failed to create SIGINT handler: {}", e)))?;
        let mut sigterm = signal(SignalKind::terminate())
            .map_err(|e| Error::terminal(format!("Failed to create SIGTERM handler: {}", e)))?;

        let received = tokio::select! {
            _ = sigint.recv() => ShutdownSignal::Interrupt,
            _ = sigterm.recv() => ShutdownSignal::Terminate,
        };
        Ok(received)
    }

    #[cfg(not(unix))]
    {
        tokio::signal::ctrl_c()
            .await
            .map_err(|e| Error::terminal(format!("Failed to listen for Ctrl+C: {}", e)))?;
        Ok(ShutdownSignal::Interrupt)
    }
}
