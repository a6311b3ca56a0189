// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use tracing::{debug, info, warn};

use crate::{
    ApiError, ApiReply, AppMode, Application, ApplicationDraft, ApplicationForm, ApplicationId,
    ApplicationStatus, Connection, DashboardCounts, DeleteOutcome, ListState, StatusChange,
    StatusChangeRejection, StatusFilter, SubmitRejection,
};

pub const FETCH_ERROR_MESSAGE: &str =
    "Failed to fetch applications. Ensure the backend is running.";
pub const DELETE_CONFIRM_PROMPT: &str = "Are you sure you want to delete this application?";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppState {
    pub mode: AppMode,
    pub filter: StatusFilter,
    pub status_line: Option<String>,
    applications: Vec<Application>,
    loading: bool,
    load_error: Option<String>,
    refresh_counter: u64,
    fetch_generation: u64,
    form: ApplicationForm,
    list: ListState,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            mode: AppMode::Nav,
            filter: StatusFilter::All,
            status_line: None,
            applications: Vec::new(),
            loading: true,
            load_error: None,
            refresh_counter: 0,
            fetch_generation: 0,
            form: ApplicationForm::default(),
            list: ListState::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppCommand {
    Mount,
    Retry,
    Refresh,
    FetchFinished {
        generation: u64,
        result: Result<Vec<Application>, ApiError>,
    },
    NextFilter,
    PrevFilter,
    SetFilter(StatusFilter),
    FocusForm,
    LeaveForm,
    FormInput(char),
    FormBackspace,
    FormClearField,
    FormNextField,
    FormPrevField,
    SubmitForm,
    CreateFinished(Result<ApiReply<Application>, ApiError>),
    ChangeStatus {
        id: ApplicationId,
        status: ApplicationStatus,
    },
    StatusChangeFinished {
        change: StatusChange,
        result: Result<ApiReply<Application>, ApiError>,
    },
    RequestDelete(ApplicationId),
    ConfirmDelete,
    CancelDelete,
    DeleteFinished {
        id: ApplicationId,
        result: Result<(), ApiError>,
    },
    ClearListError {
        token: u64,
    },
    SetStatus(String),
    ClearStatus,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppEvent {
    FetchRequested { generation: u64 },
    FetchApplied { count: usize },
    FetchFailed,
    FetchDiscarded { generation: u64 },
    FilterChanged(StatusFilter),
    ModeChanged(AppMode),
    FormEdited,
    CreateRequested(ApplicationDraft),
    Created,
    CreateFailed,
    StatusChangeRequested(StatusChange),
    StatusChangeSettled(ApplicationId),
    DeleteRequested(ApplicationId),
    Deleted(ApplicationId),
    ListErrorRaised { token: u64 },
    ListErrorCleared,
    StatusUpdated(String),
    StatusCleared,
}

impl AppState {
    pub fn with_filter(filter: StatusFilter) -> Self {
        Self {
            filter,
            ..Self::default()
        }
    }

    pub fn applications(&self) -> &[Application] {
        &self.applications
    }

    /// The collection as the table shows it: everything under `ALL`, otherwise
    /// only rows with the selected status, in collection order.
    pub fn visible_applications(&self) -> Vec<&Application> {
        self.applications
            .iter()
            .filter(|app| self.filter.matches(app.status))
            .collect()
    }

    pub fn counts(&self) -> DashboardCounts {
        DashboardCounts::from_applications(&self.applications)
    }

    /// Counts are not meaningful yet: the first load is still running.
    pub fn counts_pending(&self) -> bool {
        self.loading && self.applications.is_empty()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn load_error(&self) -> Option<&str> {
        self.load_error.as_deref()
    }

    pub fn connection(&self) -> Connection {
        if self.load_error.is_some() {
            Connection::Disconnected
        } else {
            Connection::Connected
        }
    }

    pub fn refresh_counter(&self) -> u64 {
        self.refresh_counter
    }

    pub fn form(&self) -> &ApplicationForm {
        &self.form
    }

    pub fn list(&self) -> &ListState {
        &self.list
    }

    pub fn dispatch(&mut self, command: AppCommand) -> Vec<AppEvent> {
        match command {
            AppCommand::Mount | AppCommand::Retry => vec![self.begin_fetch()],
            AppCommand::Refresh => self.bump_refresh(),
            AppCommand::FetchFinished { generation, result } => {
                vec![self.finish_fetch(generation, result)]
            }
            AppCommand::NextFilter => self.set_filter(self.filter.rotate(1)),
            AppCommand::PrevFilter => self.set_filter(self.filter.rotate(-1)),
            AppCommand::SetFilter(filter) => self.set_filter(filter),
            AppCommand::FocusForm => self.set_mode(AppMode::Form),
            AppCommand::LeaveForm => self.set_mode(AppMode::Nav),
            AppCommand::FormInput(ch) => {
                self.form.insert_char(ch);
                vec![AppEvent::FormEdited]
            }
            AppCommand::FormBackspace => {
                self.form.backspace();
                vec![AppEvent::FormEdited]
            }
            AppCommand::FormClearField => {
                self.form.clear_focused();
                vec![AppEvent::FormEdited]
            }
            AppCommand::FormNextField => {
                self.form.move_focus(1);
                vec![AppEvent::FormEdited]
            }
            AppCommand::FormPrevField => {
                self.form.move_focus(-1);
                vec![AppEvent::FormEdited]
            }
            AppCommand::SubmitForm => self.submit_form(),
            AppCommand::CreateFinished(result) => self.finish_create(result),
            AppCommand::ChangeStatus { id, status } => self.change_status(id, status),
            AppCommand::StatusChangeFinished { change, result } => {
                let mut events = vec![AppEvent::StatusChangeSettled(change.id)];
                if let Some(token) =
                    self.list
                        .finish_status_change(&mut self.applications, change, result)
                {
                    events.push(AppEvent::ListErrorRaised { token });
                }
                events
            }
            AppCommand::RequestDelete(id) => self.request_delete(id),
            AppCommand::ConfirmDelete => self.confirm_delete(),
            AppCommand::CancelDelete => self.set_mode(AppMode::Nav),
            AppCommand::DeleteFinished { id, result } => self.finish_delete(id, result),
            AppCommand::ClearListError { token } => {
                if self.list.clear_error(token) {
                    vec![AppEvent::ListErrorCleared]
                } else {
                    Vec::new()
                }
            }
            AppCommand::SetStatus(message) => vec![self.set_status(&message)],
            AppCommand::ClearStatus => {
                self.status_line = None;
                vec![AppEvent::StatusCleared]
            }
        }
    }

    fn begin_fetch(&mut self) -> AppEvent {
        self.loading = true;
        self.load_error = None;
        self.fetch_generation = self.fetch_generation.saturating_add(1);
        debug!(generation = self.fetch_generation, "fetch requested");
        AppEvent::FetchRequested {
            generation: self.fetch_generation,
        }
    }

    fn bump_refresh(&mut self) -> Vec<AppEvent> {
        self.refresh_counter = self.refresh_counter.wrapping_add(1);
        vec![self.begin_fetch()]
    }

    fn finish_fetch(
        &mut self,
        generation: u64,
        result: Result<Vec<Application>, ApiError>,
    ) -> AppEvent {
        if generation != self.fetch_generation {
            info!(
                generation,
                latest = self.fetch_generation,
                "discarding stale fetch result"
            );
            return AppEvent::FetchDiscarded { generation };
        }

        self.loading = false;
        match result {
            Ok(applications) => {
                let count = applications.len();
                self.applications = applications;
                AppEvent::FetchApplied { count }
            }
            Err(error) => {
                warn!(%error, "fetch failed");
                self.load_error = Some(FETCH_ERROR_MESSAGE.to_owned());
                AppEvent::FetchFailed
            }
        }
    }

    fn set_filter(&mut self, filter: StatusFilter) -> Vec<AppEvent> {
        self.filter = filter;
        vec![AppEvent::FilterChanged(filter)]
    }

    fn set_mode(&mut self, mode: AppMode) -> Vec<AppEvent> {
        self.mode = mode;
        vec![AppEvent::ModeChanged(mode)]
    }

    fn submit_form(&mut self) -> Vec<AppEvent> {
        match self.form.begin_submit() {
            Ok(draft) => vec![AppEvent::CreateRequested(draft)],
            Err(SubmitRejection::InFlight) => vec![self.set_status("submit already in flight")],
            Err(SubmitRejection::MissingFields(_)) => vec![AppEvent::CreateFailed],
        }
    }

    fn finish_create(&mut self, result: Result<ApiReply<Application>, ApiError>) -> Vec<AppEvent> {
        if self.form.finish_submit(result) {
            let mut events = vec![AppEvent::Created];
            events.extend(self.bump_refresh());
            events
        } else {
            vec![AppEvent::CreateFailed]
        }
    }

    fn change_status(&mut self, id: ApplicationId, status: ApplicationStatus) -> Vec<AppEvent> {
        match self
            .list
            .begin_status_change(&mut self.applications, id, status)
        {
            Ok(change) => vec![AppEvent::StatusChangeRequested(change)],
            Err(StatusChangeRejection::InFlight) => {
                vec![self.set_status("status update already in flight")]
            }
            Err(StatusChangeRejection::Unchanged | StatusChangeRejection::UnknownRow) => {
                Vec::new()
            }
        }
    }

    fn request_delete(&mut self, id: ApplicationId) -> Vec<AppEvent> {
        if self.list.is_deleting(id) {
            return vec![self.set_status("delete already in flight")];
        }
        if !self.applications.iter().any(|app| app.id == id) {
            return Vec::new();
        }
        self.set_mode(AppMode::ConfirmDelete(id))
    }

    fn confirm_delete(&mut self) -> Vec<AppEvent> {
        let AppMode::ConfirmDelete(id) = self.mode else {
            return Vec::new();
        };
        let mut events = self.set_mode(AppMode::Nav);
        if self.list.begin_delete(id) {
            events.push(AppEvent::DeleteRequested(id));
        }
        events
    }

    fn finish_delete(&mut self, id: ApplicationId, result: Result<(), ApiError>) -> Vec<AppEvent> {
        match self.list.finish_delete(&mut self.applications, id, result) {
            DeleteOutcome::Removed => {
                let mut events = vec![AppEvent::Deleted(id)];
                events.extend(self.bump_refresh());
                events
            }
            DeleteOutcome::Failed { token } => vec![AppEvent::ListErrorRaised { token }],
        }
    }

    fn set_status(&mut self, message: &str) -> AppEvent {
        self.status_line = Some(message.to_owned());
        AppEvent::StatusUpdated(message.to_owned())
    }
}
