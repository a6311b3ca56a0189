// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use std::collections::BTreeSet;
use std::time::Duration;
use tracing::{debug, warn};

use crate::{ApiError, ApiReply, Application, ApplicationId, ApplicationStatus};

/// How long a status-change or delete failure stays on screen.
pub const LIST_ERROR_TTL: Duration = Duration::from_secs(5);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusChange {
    pub id: ApplicationId,
    pub previous: ApplicationStatus,
    pub requested: ApplicationStatus,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusChangeRejection {
    UnknownRow,
    Unchanged,
    InFlight,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteOutcome {
    Removed,
    Failed { token: u64 },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransientError {
    pub message: String,
    pub token: u64,
}

/// Row-level mutation bookkeeping for the applications table. The collection
/// itself belongs to the dashboard; every operation borrows it.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ListState {
    updating: BTreeSet<ApplicationId>,
    deleting: BTreeSet<ApplicationId>,
    error: Option<TransientError>,
    error_token: u64,
}

impl ListState {
    pub fn error(&self) -> Option<&TransientError> {
        self.error.as_ref()
    }

    pub fn is_updating(&self, id: ApplicationId) -> bool {
        self.updating.contains(&id)
    }

    pub fn is_deleting(&self, id: ApplicationId) -> bool {
        self.deleting.contains(&id)
    }

    /// Applies `status` to the row right away and returns the snapshot needed to
    /// undo it if the backend refuses.
    pub fn begin_status_change(
        &mut self,
        applications: &mut [Application],
        id: ApplicationId,
        status: ApplicationStatus,
    ) -> Result<StatusChange, StatusChangeRejection> {
        if self.updating.contains(&id) {
            return Err(StatusChangeRejection::InFlight);
        }
        let Some(row) = applications.iter_mut().find(|app| app.id == id) else {
            return Err(StatusChangeRejection::UnknownRow);
        };
        if row.status == status {
            return Err(StatusChangeRejection::Unchanged);
        }

        let change = StatusChange {
            id,
            previous: row.status,
            requested: status,
        };
        row.status = status;
        self.updating.insert(id);
        Ok(change)
    }

    /// Settles a status change. Returns the transient-error token when the
    /// change was rolled back.
    pub fn finish_status_change(
        &mut self,
        applications: &mut [Application],
        change: StatusChange,
        result: Result<ApiReply<Application>, ApiError>,
    ) -> Option<u64> {
        self.updating.remove(&change.id);
        match result {
            Ok(ApiReply::Record(record)) => {
                if record.id == change.id
                    && let Some(row) = applications.iter_mut().find(|app| app.id == change.id)
                {
                    *row = record;
                }
                None
            }
            Ok(ApiReply::Ack(_)) => None,
            Err(error) => {
                warn!(id = %change.id, %error, "status change failed; rolling back");
                if let Some(row) = applications.iter_mut().find(|app| app.id == change.id)
                    && row.status == change.requested
                {
                    row.status = change.previous;
                }
                Some(self.raise_error(format!("Failed to update status: {error}")))
            }
        }
    }

    /// Marks `id` as being deleted. Returns `false` when a delete for that row
    /// is already in flight.
    pub fn begin_delete(&mut self, id: ApplicationId) -> bool {
        self.deleting.insert(id)
    }

    pub fn finish_delete(
        &mut self,
        applications: &mut Vec<Application>,
        id: ApplicationId,
        result: Result<(), ApiError>,
    ) -> DeleteOutcome {
        self.deleting.remove(&id);
        match result {
            Ok(()) => {
                applications.retain(|app| app.id != id);
                DeleteOutcome::Removed
            }
            Err(error) => {
                warn!(%id, %error, "delete failed");
                let token = self.raise_error(format!("Failed to delete application: {error}"));
                DeleteOutcome::Failed { token }
            }
        }
    }

    /// Clears the transient error only if `token` still names it.
    pub fn clear_error(&mut self, token: u64) -> bool {
        match &self.error {
            Some(error) if error.token == token => {
                self.error = None;
                true
            }
            Some(_) => {
                debug!(token, "skipping clear for superseded list error");
                false
            }
            None => false,
        }
    }

    fn raise_error(&mut self, message: String) -> u64 {
        self.error_token = self.error_token.saturating_add(1);
        self.error = Some(TransientError {
            message,
            token: self.error_token,
        });
        self.error_token
    }
}
