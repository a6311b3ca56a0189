// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use anyhow::{Context, Result};
use jobdash_app::{Application, ApplicationDraft, ApplicationId, ApplicationStatus};
use std::path::PathBuf;

const COMPANY_PREFIXES: [&str; 14] = [
    "Northwind",
    "Blue Harbor",
    "Summit",
    "Ironclad",
    "Brightline",
    "Cedar",
    "Quantum",
    "Redwood",
    "Lakeshore",
    "Polar",
    "Evergreen",
    "Copperleaf",
    "Meridian",
    "Halcyon",
];

const COMPANY_SUFFIXES: [&str; 8] = [
    "Labs",
    "Systems",
    "Analytics",
    "Software",
    "Robotics",
    "Health",
    "Logistics",
    "Networks",
];

const ROLE_LEVELS: [&str; 5] = ["Junior", "", "Senior", "Staff", "Principal"];

const ROLE_TITLES: [&str; 10] = [
    "Software Engineer",
    "Backend Engineer",
    "Frontend Engineer",
    "Data Engineer",
    "Site Reliability Engineer",
    "Platform Engineer",
    "Product Manager",
    "QA Engineer",
    "Security Engineer",
    "Engineering Manager",
];

const SOURCES: [&str; 9] = [
    "LinkedIn",
    "Referral",
    "Company Website",
    "Indeed",
    "Hacker News",
    "Recruiter",
    "Job Fair",
    "AngelList",
    "Glassdoor",
];

#[derive(Debug, Clone)]
struct DeterministicRng {
    state: u64,
}

impl DeterministicRng {
    fn new(seed: u64) -> Self {
        let mut state = seed ^ 0x9E37_79B9_7F4A_7C15;
        if state == 0 {
            state = 0xA409_3822_299F_31D0;
        }
        Self { state }
    }

    fn next_u64(&mut self) -> u64 {
        self.state = self
            .state
            .wrapping_mul(6_364_136_223_846_793_005)
            .wrapping_add(1_442_695_040_888_963_407);

        let mut x = self.state;
        x ^= x >> 13;
        x ^= x << 7;
        x ^= x >> 17;
        x
    }

    fn int_n(&mut self, n: usize) -> usize {
        if n <= 1 {
            return 0;
        }
        (self.next_u64() % (n as u64)) as usize
    }
}

/// Seeded generator for application fixtures. The same seed always produces
/// the same sequence.
#[derive(Debug, Clone)]
pub struct ApplicationFaker {
    rng: DeterministicRng,
    seed: u64,
}

impl ApplicationFaker {
    pub fn new(seed: u64) -> Self {
        let normalized = if seed == 0 { 1 } else { seed };
        Self {
            rng: DeterministicRng::new(normalized),
            seed: normalized,
        }
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn company_name(&mut self) -> String {
        let prefix = self.pick(&COMPANY_PREFIXES);
        let suffix = self.pick(&COMPANY_SUFFIXES);
        format!("{prefix} {suffix}")
    }

    pub fn role(&mut self) -> String {
        let level = self.pick(&ROLE_LEVELS);
        let title = self.pick(&ROLE_TITLES);
        if level.is_empty() {
            title.to_owned()
        } else {
            format!("{level} {title}")
        }
    }

    pub fn source(&mut self) -> String {
        self.pick(&SOURCES).to_owned()
    }

    pub fn status(&mut self) -> ApplicationStatus {
        ApplicationStatus::ALL[self.rng.int_n(ApplicationStatus::ALL.len())]
    }

    pub fn draft(&mut self) -> ApplicationDraft {
        ApplicationDraft {
            company_name: self.company_name(),
            role: self.role(),
            source: self.source(),
        }
    }

    pub fn application(&mut self, id: i64) -> Application {
        let status = self.status();
        self.application_with_status(id, status)
    }

    pub fn application_with_status(&mut self, id: i64, status: ApplicationStatus) -> Application {
        let draft = self.draft();
        Application {
            id: ApplicationId::new(id),
            company_name: draft.company_name,
            role: draft.role,
            source: draft.source,
            status,
        }
    }

    /// `count` applications with ids `1..=count`, in id order.
    pub fn applications(&mut self, count: usize) -> Vec<Application> {
        (1..=count as i64).map(|id| self.application(id)).collect()
    }

    /// One application per status in `statuses`, ids assigned from 1.
    pub fn applications_with_statuses(
        &mut self,
        statuses: &[ApplicationStatus],
    ) -> Vec<Application> {
        statuses
            .iter()
            .zip(1_i64..)
            .map(|(status, id)| self.application_with_status(id, *status))
            .collect()
    }

    fn pick<'a>(&mut self, items: &'a [&'a str]) -> &'a str {
        items[self.rng.int_n(items.len())]
    }
}

pub fn temp_config_path() -> Result<(tempfile::TempDir, PathBuf)> {
    let dir = tempfile::tempdir().context("create temp dir")?;
    let path = dir.path().join("config.toml");
    Ok((dir, path))
}
