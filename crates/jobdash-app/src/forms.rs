// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use tracing::debug;

use crate::{ApiError, ApiReply, Application, ApplicationDraft, DraftField};

pub const SUBMIT_FALLBACK_MESSAGE: &str = "Failed to submit application. Please try again.";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitRejection {
    InFlight,
    MissingFields(Vec<DraftField>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApplicationForm {
    draft: ApplicationDraft,
    focus: DraftField,
    submitting: bool,
    error: Option<String>,
}

impl Default for ApplicationForm {
    fn default() -> Self {
        Self {
            draft: ApplicationDraft::default(),
            focus: DraftField::CompanyName,
            submitting: false,
            error: None,
        }
    }
}

impl ApplicationForm {
    pub fn draft(&self) -> &ApplicationDraft {
        &self.draft
    }

    pub fn focus(&self) -> DraftField {
        self.focus
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn set_field(&mut self, field: DraftField, value: impl Into<String>) {
        *self.draft.value_mut(field) = value.into();
    }

    pub fn insert_char(&mut self, ch: char) {
        self.draft.value_mut(self.focus).push(ch);
    }

    pub fn backspace(&mut self) {
        self.draft.value_mut(self.focus).pop();
    }

    pub fn clear_focused(&mut self) {
        self.draft.value_mut(self.focus).clear();
    }

    pub fn move_focus(&mut self, delta: isize) {
        let fields = DraftField::ALL;
        let current = fields
            .iter()
            .position(|field| *field == self.focus)
            .unwrap_or(0) as isize;
        let len = fields.len() as isize;
        self.focus = fields[(current + delta).rem_euclid(len) as usize];
    }

    /// Starts a create request. On success the returned draft is what should be
    /// sent; the form stays locked until [`Self::finish_submit`] runs.
    pub fn begin_submit(&mut self) -> Result<ApplicationDraft, SubmitRejection> {
        if self.submitting {
            return Err(SubmitRejection::InFlight);
        }

        let missing = self.draft.missing_fields();
        if !missing.is_empty() {
            let labels = missing
                .iter()
                .map(|field| field.label())
                .collect::<Vec<_>>()
                .join(", ");
            self.error = Some(format!("Please fill out: {labels}"));
            if let Some(first) = missing.first() {
                self.focus = *first;
            }
            return Err(SubmitRejection::MissingFields(missing));
        }

        self.submitting = true;
        self.error = None;
        Ok(self.draft.clone())
    }

    /// Applies a create completion. Returns `true` when the create succeeded and
    /// the caller should refresh.
    pub fn finish_submit(&mut self, result: Result<ApiReply<Application>, ApiError>) -> bool {
        if !self.submitting {
            debug!("ignoring create completion with no submit in flight");
            return false;
        }
        self.submitting = false;

        match result {
            Ok(_) => {
                self.draft = ApplicationDraft::default();
                self.focus = DraftField::CompanyName;
                true
            }
            Err(error) => {
                self.error = Some(submit_error_message(&error));
                false
            }
        }
    }
}

pub fn submit_error_message(error: &ApiError) -> String {
    error
        .body_message()
        .filter(|message| !message.is_empty())
        .unwrap_or_else(|| SUBMIT_FALLBACK_MESSAGE.to_owned())
}

#[cfg(test)]
mod tests {
    use super::{ApplicationForm, SUBMIT_FALLBACK_MESSAGE, SubmitRejection};
    use crate::{
        ApiError, ApiReply, Application, ApplicationDraft, ApplicationId, ApplicationStatus,
        DraftField,
    };

    fn filled_form() -> ApplicationForm {
        let mut form = ApplicationForm::default();
        form.set_field(DraftField::CompanyName, "Acme");
        form.set_field(DraftField::Role, "Platform Engineer");
        form.set_field(DraftField::Source, "Referral");
        form
    }

    fn created() -> Application {
        Application {
            id: ApplicationId::new(1),
            company_name: "Acme".to_owned(),
            role: "Platform Engineer".to_owned(),
            source: "Referral".to_owned(),
            status: ApplicationStatus::Applied,
        }
    }

    #[test]
    fn valid_submit_returns_draft_and_locks_form() {
        let mut form = filled_form();
        let draft = form.begin_submit().expect("valid draft should submit");
        assert_eq!(draft.company_name, "Acme");
        assert!(form.is_submitting());
    }

    #[test]
    fn second_submit_while_in_flight_is_rejected() {
        let mut form = filled_form();
        assert!(form.begin_submit().is_ok());
        assert_eq!(form.begin_submit(), Err(SubmitRejection::InFlight));
    }

    #[test]
    fn success_resets_draft_to_empty_strings() {
        let mut form = filled_form();
        form.begin_submit().expect("valid draft should submit");

        assert!(form.finish_submit(Ok(ApiReply::Record(created()))));
        assert_eq!(form.draft(), &ApplicationDraft::default());
        assert!(!form.is_submitting());
        assert_eq!(form.error(), None);
    }

    #[test]
    fn raw_success_payload_also_counts_as_success() {
        let mut form = filled_form();
        form.begin_submit().expect("valid draft should submit");
        assert!(form.finish_submit(Ok(ApiReply::Ack("Saved".to_owned()))));
        assert!(form.draft().is_blank());
    }

    #[test]
    fn failure_keeps_draft_and_surfaces_message_field() {
        let mut form = filled_form();
        form.begin_submit().expect("valid draft should submit");

        let refreshed = form.finish_submit(Err(ApiError::from_response(400, r#"{"message":"X"}"#)));
        assert!(!refreshed);
        assert_eq!(form.error(), Some("X"));
        assert_eq!(form.draft().company_name, "Acme");
        assert!(!form.is_submitting());
    }

    #[test]
    fn failure_joins_errors_array() {
        let mut form = filled_form();
        form.begin_submit().expect("valid draft should submit");
        form.finish_submit(Err(ApiError::from_response(
            422,
            r#"{"errors":["a","b"]}"#,
        )));
        assert_eq!(form.error(), Some("a, b"));
    }

    #[test]
    fn failure_prefers_plain_string_body() {
        let mut form = filled_form();
        form.begin_submit().expect("valid draft should submit");
        form.finish_submit(Err(ApiError::from_response(409, "duplicate application")));
        assert_eq!(form.error(), Some("duplicate application"));
    }

    #[test]
    fn network_failure_uses_fallback_text() {
        let mut form = filled_form();
        form.begin_submit().expect("valid draft should submit");
        form.finish_submit(Err(ApiError::Network("connection refused".to_owned())));
        assert_eq!(form.error(), Some(SUBMIT_FALLBACK_MESSAGE));
    }

    #[test]
    fn missing_fields_block_submit_and_focus_first_gap() {
        let mut form = ApplicationForm::default();
        form.set_field(DraftField::CompanyName, "Acme");

        let rejection = form.begin_submit().expect_err("blank fields should block");
        assert_eq!(
            rejection,
            SubmitRejection::MissingFields(vec![DraftField::Role, DraftField::Source])
        );
        assert!(!form.is_submitting());
        assert_eq!(form.focus(), DraftField::Role);
        assert_eq!(form.error(), Some("Please fill out: Role, Source"));
    }

    #[test]
    fn new_submit_clears_previous_error() {
        let mut form = filled_form();
        form.begin_submit().expect("valid draft should submit");
        form.finish_submit(Err(ApiError::Network("down".to_owned())));
        assert!(form.error().is_some());

        form.begin_submit().expect("retry should submit");
        assert_eq!(form.error(), None);
    }

    #[test]
    fn stray_completion_is_ignored() {
        let mut form = filled_form();
        assert!(!form.finish_submit(Ok(ApiReply::Record(created()))));
        assert_eq!(form.draft().company_name, "Acme");
    }

    #[test]
    fn typing_edits_focused_field_and_focus_wraps() {
        let mut form = ApplicationForm::default();
        form.insert_char('A');
        form.insert_char('x');
        form.backspace();
        assert_eq!(form.draft().company_name, "A");

        form.move_focus(-1);
        assert_eq!(form.focus(), DraftField::Source);
        form.insert_char('L');
        assert_eq!(form.draft().source, "L");

        form.move_focus(1);
        assert_eq!(form.focus(), DraftField::CompanyName);
        form.clear_focused();
        assert_eq!(form.draft().company_name, "");
    }
}
