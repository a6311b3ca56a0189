// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use anyhow::{Context, Result};
use jobdash_api::Client;
use jobdash_app::{
    ApiError, ApiReply, Application, ApplicationDraft, ApplicationId, ApplicationStatus,
    StatusChange,
};
use jobdash_tui::{ApiCompletion, AppRuntime, InternalEvent, send_completion};
use std::sync::mpsc::Sender;
use std::thread;
use tracing::debug;

/// Talks to the backend over HTTP. Every request runs on its own worker
/// thread so the dashboard keeps drawing while it is in flight.
pub struct HttpRuntime {
    client: Client,
}

impl HttpRuntime {
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    fn spawn_worker<F>(&self, name: &str, tx: Sender<InternalEvent>, work: F) -> Result<()>
    where
        F: FnOnce(&Client) -> ApiCompletion + Send + 'static,
    {
        let client = self.client.clone();
        let label = name.to_owned();
        thread::Builder::new()
            .name(format!("jobdash-{name}"))
            .spawn(move || {
                let completion = work(&client);
                if let Err(error) = send_completion(&tx, completion) {
                    // The UI loop has exited; nothing is waiting for this reply.
                    debug!(worker = %label, %error, "dropping completion");
                }
            })
            .with_context(|| format!("spawn {name} worker"))?;
        Ok(())
    }
}

impl AppRuntime for HttpRuntime {
    fn list_applications(&mut self) -> Result<Vec<Application>, ApiError> {
        self.client.list()
    }

    fn create_application(
        &mut self,
        draft: &ApplicationDraft,
    ) -> Result<ApiReply<Application>, ApiError> {
        self.client.create(draft)
    }

    fn update_status(
        &mut self,
        id: ApplicationId,
        status: ApplicationStatus,
    ) -> Result<ApiReply<Application>, ApiError> {
        self.client.set_status(id, status)
    }

    fn delete_application(&mut self, id: ApplicationId) -> Result<(), ApiError> {
        self.client.remove(id)
    }

    fn spawn_fetch(&mut self, generation: u64, tx: Sender<InternalEvent>) -> Result<()> {
        self.spawn_worker("fetch", tx, move |client| ApiCompletion::Fetched {
            generation,
            result: client.list(),
        })
    }

    fn spawn_create(&mut self, draft: ApplicationDraft, tx: Sender<InternalEvent>) -> Result<()> {
        self.spawn_worker("create", tx, move |client| {
            ApiCompletion::Created(client.create(&draft))
        })
    }

    fn spawn_status_change(
        &mut self,
        change: StatusChange,
        tx: Sender<InternalEvent>,
    ) -> Result<()> {
        self.spawn_worker("status", tx, move |client| {
            let result = client.set_status(change.id, change.requested);
            ApiCompletion::StatusChanged { change, result }
        })
    }

    fn spawn_delete(&mut self, id: ApplicationId, tx: Sender<InternalEvent>) -> Result<()> {
        self.spawn_worker("delete", tx, move |client| ApiCompletion::Deleted {
            id,
            result: client.remove(id),
        })
    }
}
