// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use serde::{Deserialize, Serialize};

use crate::ids::ApplicationId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ApplicationStatus {
    Applied,
    Interview,
    Offer,
    Rejected,
}

impl ApplicationStatus {
    pub const ALL: [Self; 4] = [Self::Applied, Self::Interview, Self::Offer, Self::Rejected];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Applied => "APPLIED",
            Self::Interview => "INTERVIEW",
            Self::Offer => "OFFER",
            Self::Rejected => "REJECTED",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Applied => "Applied",
            Self::Interview => "Interview",
            Self::Offer => "Offer",
            Self::Rejected => "Rejected",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "APPLIED" => Some(Self::Applied),
            "INTERVIEW" => Some(Self::Interview),
            "OFFER" => Some(Self::Offer),
            "REJECTED" => Some(Self::Rejected),
            _ => None,
        }
    }

    pub fn rotate(self, delta: isize) -> Self {
        let current = Self::ALL
            .iter()
            .position(|status| *status == self)
            .unwrap_or(0) as isize;
        let len = Self::ALL.len() as isize;
        Self::ALL[(current + delta).rem_euclid(len) as usize]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusFilter {
    #[default]
    All,
    Only(ApplicationStatus),
}

impl StatusFilter {
    pub const ALL: [Self; 5] = [
        Self::All,
        Self::Only(ApplicationStatus::Applied),
        Self::Only(ApplicationStatus::Interview),
        Self::Only(ApplicationStatus::Offer),
        Self::Only(ApplicationStatus::Rejected),
    ];

    pub fn matches(self, status: ApplicationStatus) -> bool {
        match self {
            Self::All => true,
            Self::Only(wanted) => wanted == status,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::All => "All Statuses",
            Self::Only(status) => status.label(),
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "ALL" => Some(Self::All),
            other => ApplicationStatus::parse(other).map(Self::Only),
        }
    }

    pub fn rotate(self, delta: isize) -> Self {
        let current = Self::ALL
            .iter()
            .position(|filter| *filter == self)
            .unwrap_or(0) as isize;
        let len = Self::ALL.len() as isize;
        Self::ALL[(current + delta).rem_euclid(len) as usize]
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Application {
    pub id: ApplicationId,
    pub company_name: String,
    pub role: String,
    pub source: String,
    pub status: ApplicationStatus,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplicationDraft {
    pub company_name: String,
    pub role: String,
    pub source: String,
}

impl ApplicationDraft {
    pub fn is_blank(&self) -> bool {
        self.company_name.is_empty() && self.role.is_empty() && self.source.is_empty()
    }

    pub fn missing_fields(&self) -> Vec<DraftField> {
        DraftField::ALL
            .into_iter()
            .filter(|field| self.value(*field).trim().is_empty())
            .collect()
    }

    pub fn value(&self, field: DraftField) -> &str {
        match field {
            DraftField::CompanyName => &self.company_name,
            DraftField::Role => &self.role,
            DraftField::Source => &self.source,
        }
    }

    pub fn value_mut(&mut self, field: DraftField) -> &mut String {
        match field {
            DraftField::CompanyName => &mut self.company_name,
            DraftField::Role => &mut self.role,
            DraftField::Source => &mut self.source,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DraftField {
    CompanyName,
    Role,
    Source,
}

impl DraftField {
    pub const ALL: [Self; 3] = [Self::CompanyName, Self::Role, Self::Source];

    pub const fn label(self) -> &'static str {
        match self {
            Self::CompanyName => "Company Name",
            Self::Role => "Role",
            Self::Source => "Source",
        }
    }

    pub const fn placeholder(self) -> &'static str {
        match self {
            Self::CompanyName => "e.g. Google",
            Self::Role => "e.g. Software Engineer",
            Self::Source => "e.g. LinkedIn",
        }
    }
}

/// A successful mutation reply. The backend answers either with the affected
/// record or with an acknowledgement body that does not decode as one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiReply<T> {
    Record(T),
    Ack(String),
}

impl<T> ApiReply<T> {
    pub fn record(self) -> Option<T> {
        match self {
            Self::Record(record) => Some(record),
            Self::Ack(_) => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DashboardCounts {
    pub total: usize,
    pub interviews: usize,
    pub offers: usize,
}

impl DashboardCounts {
    pub fn from_applications(applications: &[Application]) -> Self {
        applications.iter().fold(Self::default(), |mut counts, app| {
            counts.total += 1;
            match app.status {
                ApplicationStatus::Interview => counts.interviews += 1,
                ApplicationStatus::Offer => counts.offers += 1,
                ApplicationStatus::Applied | ApplicationStatus::Rejected => {}
            }
            counts
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppMode {
    Nav,
    Form,
    ConfirmDelete(ApplicationId),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Connection {
    Connected,
    Disconnected,
}

impl Connection {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Connected => "Connected",
            Self::Disconnected => "Disconnected",
        }
    }
}
