// SPDX-License-Identifier: MIT
// Copyright (c) 2026 ForgeGuard, Inc.

//! WebSocket event channel — subscribes to the backend's build event stream
//! and fans frames out to per-project subscribers.
//!
//! The read task owns the connection and reconnects with capped exponential
//! backoff; subscribers receive parsed [`BuildEvent`]s over a broadcast
//! channel, so a slow consumer lags (and is told so) instead of stalling
//! the stream.

use fg_core::{BuildEvent, ProjectId};
use futures_util::StreamExt;
use std::time::Duration;
use tokio::sync::broadcast;
use tokio_tungstenite::connect_async;
use tokio_tungstenite::tungstenite::Message;
use tokio_util::sync::CancellationToken;

/// Initial reconnect delay after a dropped connection.
const BACKOFF_INITIAL: Duration = Duration::from_millis(500);
/// Ceiling on the reconnect delay.
const BACKOFF_MAX: Duration = Duration::from_secs(30);
/// Broadcast buffer; lagging subscribers skip ahead rather than block.
const CHANNEL_CAPACITY: usize = 1024;

/// What a subscriber sees on each poll.
#[derive(Debug)]
pub enum ChannelItem {
    /// The next event for the subscribed project.
    Event(Box<BuildEvent>),
    /// The subscriber fell behind and `skipped` events were dropped. The
    /// caller should reload a snapshot rather than trust its folded state.
    Lagged { skipped: u64 },
    /// The channel shut down; no more events will arrive.
    Closed,
}

/// Handle to the shared event stream.
#[derive(Debug)]
pub struct EventChannel {
    sender: broadcast::Sender<BuildEvent>,
    shutdown: CancellationToken,
}

impl EventChannel {
    /// Spawn the read task against `ws_url` and return the channel handle.
    ///
    /// The connection is established lazily inside the task; a backend that
    /// is down at startup is just the first reconnect iteration.
    pub fn connect(ws_url: impl Into<String>, token: impl Into<String>) -> Self {
        let (sender, _) = broadcast::channel(CHANNEL_CAPACITY);
        let shutdown = CancellationToken::new();
        tokio::spawn(read_loop(
            ws_url.into(),
            token.into(),
            sender.clone(),
            shutdown.clone(),
        ));
        Self { sender, shutdown }
    }

    /// Subscribe to events for one project. Events for other projects on the
    /// shared stream are filtered out before the caller sees them.
    pub fn subscribe(&self, project: ProjectId) -> ProjectEvents {
        ProjectEvents { project, receiver: self.sender.subscribe() }
    }

    /// Stop the read task. Existing subscribers drain and then see `Closed`.
    pub fn shutdown(&self) {
        self.shutdown.cancel();
    }
}

impl Drop for EventChannel {
    fn drop(&mut self) {
        self.shutdown.cancel();
    }
}

/// A per-project subscription on the shared stream.
#[derive(Debug)]
pub struct ProjectEvents {
    project: ProjectId,
    receiver: broadcast::Receiver<BuildEvent>,
}

impl ProjectEvents {
    /// Next item for this project. Skips events addressed to other projects.
    pub async fn next(&mut self) -> ChannelItem {
        loop {
            match self.receiver.recv().await {
                Ok(event) => {
                    if event.project_id().is_some_and(|id| *id == self.project) {
                        return ChannelItem::Event(Box::new(event));
                    }
                }
                Err(broadcast::error::RecvError::Lagged(skipped)) => {
                    return ChannelItem::Lagged { skipped };
                }
                Err(broadcast::error::RecvError::Closed) => return ChannelItem::Closed,
            }
        }
    }
}

/// Connection owner: connect, pump frames, reconnect on drop.
async fn read_loop(
    ws_url: String,
    token: String,
    sender: broadcast::Sender<BuildEvent>,
    shutdown: CancellationToken,
) {
    let url = if token.is_empty() {
        ws_url
    } else {
        // The WS handshake carries no Authorization header from browsers, so
        // the backend accepts the bearer token as a query parameter.
        let sep = if ws_url.contains('?') { '&' } else { '?' };
        format!("{ws_url}{sep}token={token}")
    };

    let mut backoff = BACKOFF_INITIAL;
    loop {
        if shutdown.is_cancelled() {
            return;
        }

        let connect = tokio::select! {
            result = connect_async(url.as_str()) => result,
            _ = shutdown.cancelled() => return,
        };

        let mut read = match connect {
            Ok((stream, _)) => {
                tracing::info!("event channel connected");
                backoff = BACKOFF_INITIAL;
                let (_, read) = stream.split();
                read
            }
            Err(e) => {
                tracing::warn!(error = %e, delay_ms = backoff.as_millis() as u64, "event channel: connect failed");
                tokio::select! {
                    _ = tokio::time::sleep(backoff) => {}
                    _ = shutdown.cancelled() => return,
                }
                backoff = (backoff * 2).min(BACKOFF_MAX);
                continue;
            }
        };

        loop {
            let msg = tokio::select! {
                msg = read.next() => msg,
                _ = shutdown.cancelled() => return,
            };
            match msg {
                Some(Ok(Message::Text(text))) => {
                    if let Some(event) = parse_frame(&text) {
                        let _ = sender.send(event);
                    }
                }
                Some(Ok(Message::Close(frame))) => {
                    tracing::info!(?frame, "event channel: close frame");
                    break;
                }
                Some(Err(e)) => {
                    tracing::warn!(error = %e, "event channel: read error");
                    break;
                }
                None => {
                    tracing::info!("event channel: stream ended");
                    break;
                }
                _ => {} // Ping/Pong/Binary
            }
        }

        tokio::select! {
            _ = tokio::time::sleep(backoff) => {}
            _ = shutdown.cancelled() => return,
        }
        backoff = (backoff * 2).min(BACKOFF_MAX);
    }
}

/// Parse one text frame into an event.
///
/// Malformed JSON and frames with an unrecognized tag are dropped here; the
/// reducer never sees them, so a newer backend cannot corrupt the view.
pub fn parse_frame(text: &str) -> Option<BuildEvent> {
    match serde_json::from_str::<BuildEvent>(text) {
        Ok(BuildEvent::Unknown) => {
            tracing::debug!("event channel: dropping frame with unknown type");
            None
        }
        Ok(event) => Some(event),
        Err(e) => {
            tracing::debug!(error = %e, "event channel: dropping malformed frame");
            None
        }
    }
}

#[cfg(test)]
#[path = "channel_tests.rs"]
mod tests;
