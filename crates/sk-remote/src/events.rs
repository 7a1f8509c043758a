// Copyright 2025 Schelling Point Labs Inc
// SPDX-License-Identifier: AGPL-3.0-only

//! Event bus for side-channel notifications
//!
//! The bus is injected into the orchestrator at construction rather than
//! living as a process-wide global, but keeps the broadcast property: any
//! number of independent subscribers observe every published event,
//! regardless of what later happens on the per-call result channel.

use tokio::sync::broadcast;

/// Events published by the remote core outside the per-call channel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RemoteEvent {
    /// A gateway-tier response classified as a request timeout
    JetpackTimeout,
}

/// Fire-and-forget broadcast channel for [`RemoteEvent`]s
#[derive(Debug, Clone)]
pub struct EventBus {
    sender: broadcast::Sender<RemoteEvent>,
}

impl EventBus {
    pub fn new() -> Self {
        Self::with_capacity(16)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity);
        Self { sender }
    }

    /// Register an independent listener. Events published before the call
    /// are not replayed.
    pub fn subscribe(&self) -> broadcast::Receiver<RemoteEvent> {
        self.sender.subscribe()
    }

    /// Publish synchronously. A send with no live subscribers is not an
    /// error.
    pub fn publish(&self, event: RemoteEvent) {
        let _ = self.sender.send(event);
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}
