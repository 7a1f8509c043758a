// Copyright 2025 Schelling Point Labs Inc
// SPDX-License-Identifier: AGPL-3.0-only

//! The remote orchestrator
//!
//! `Remote` composes the authenticator, the transport, the error
//! classifier, and a caller-supplied response mapper into one dispatch
//! pipeline, and exposes that pipeline through four delivery forms:
//! suspending, result-callback, split-callback, and a cold single-value
//! stream. The pipeline exists exactly once; the delivery forms are thin
//! adapters over [`Remote::dispatch`].

use futures::Stream;
use std::sync::Arc;

use crate::auth::Authenticator;
use crate::classify::classify;
use crate::error::{RemoteError, RemoteResult};
use crate::events::{EventBus, RemoteEvent};
use crate::mapper::Mapper;
use crate::network::Network;
use crate::request::RemoteRequest;

/// Long-lived, per-call-stateless dispatcher for remote requests
///
/// Cloning is cheap; clones share the transport, the credentials, and the
/// event bus. Concurrent `enqueue` calls are safe as long as the injected
/// transport is reentrant.
#[derive(Clone)]
pub struct Remote {
    network: Arc<dyn Network>,
    authenticator: Arc<Authenticator>,
    events: EventBus,
}

impl Remote {
    pub fn new(network: Arc<dyn Network>, authenticator: Authenticator, events: EventBus) -> Self {
        Self {
            network,
            authenticator: Arc::new(authenticator),
            events,
        }
    }

    /// The side-channel event bus; subscribe here to observe
    /// timeout-classified failures independently of per-call results.
    pub fn events(&self) -> &EventBus {
        &self.events
    }

    /// Suspending form: resolves with the mapped payload or raises the
    /// classified/mapping error.
    pub async fn enqueue<M: Mapper>(
        &self,
        request: impl Into<RemoteRequest>,
        mapper: &M,
    ) -> RemoteResult<M::Output> {
        self.dispatch(request.into(), mapper).await
    }

    /// Result-callback form. The completion runs on the ambient runtime,
    /// never synchronously inside the caller's stack frame, and fires
    /// exactly once.
    pub fn enqueue_with<M, F>(&self, request: impl Into<RemoteRequest>, mapper: M, completion: F)
    where
        M: Mapper + 'static,
        M::Output: Send,
        F: FnOnce(RemoteResult<M::Output>) + Send + 'static,
    {
        let remote = self.clone();
        let request = request.into();
        tokio::spawn(async move {
            completion(remote.dispatch(request, &mapper).await);
        });
    }

    /// Split-callback form: exactly one of `(payload, error)` is `Some`.
    pub fn enqueue_split<M, F>(&self, request: impl Into<RemoteRequest>, mapper: M, completion: F)
    where
        M: Mapper + 'static,
        M::Output: Send,
        F: FnOnce(Option<M::Output>, Option<RemoteError>) + Send + 'static,
    {
        self.enqueue_with(request, mapper, |result| match result {
            Ok(payload) => completion(Some(payload), None),
            Err(error) => completion(None, Some(error)),
        });
    }

    /// Push-stream form: a cold stream that dispatches on first poll,
    /// yields the single terminal outcome, then ends. Dropping the stream
    /// before the terminal outcome suppresses delivery; it does not
    /// revoke a timeout notification that classification already
    /// published.
    pub fn enqueue_stream<M>(
        &self,
        request: impl Into<RemoteRequest>,
        mapper: M,
    ) -> impl Stream<Item = RemoteResult<M::Output>> + Send
    where
        M: Mapper + 'static,
        M::Output: Send,
    {
        let remote = self.clone();
        let request = request.into();
        async_stream::stream! {
            yield remote.dispatch(request, &mapper).await;
        }
    }

    /// The shared pipeline behind all four delivery forms.
    async fn dispatch<M: Mapper>(
        &self,
        request: RemoteRequest,
        mapper: &M,
    ) -> RemoteResult<M::Output> {
        let transport_request = self.authenticator.authenticate(&request)?;
        tracing::debug!(
            method = %transport_request.method,
            url = %transport_request.url,
            "dispatching remote request"
        );

        let payload = self.network.send(transport_request).await?;

        if let Some(error) = classify(&payload, request.error_dialect()) {
            tracing::warn!(%error, path = request.path(), "backend returned a structured error");
            if error.is_timeout() {
                // Published before the result channel resolves, so
                // independent listeners observe the timeout even if the
                // caller abandons the result.
                self.events.publish(RemoteEvent::JetpackTimeout);
            }
            return Err(error);
        }

        Ok(mapper.map(&payload)?)
    }
}
