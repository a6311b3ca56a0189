// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use anyhow::{Context, Result, anyhow, bail};
use jobdash_app::{
    ApiError, ApiReply, Application, ApplicationDraft, ApplicationId, ApplicationStatus,
    ErrorKind,
};
use reqwest::blocking::{Client as HttpClient, RequestBuilder};
use std::time::Duration;
use tracing::{debug, warn};
use url::Url;

/// Blocking client for the job application backend. Cheap to clone; clones
/// share the underlying connection pool.
#[derive(Debug, Clone)]
pub struct Client {
    base_url: String,
    timeout: Option<Duration>,
    http: HttpClient,
}

impl Client {
    pub fn new(base_url: &str, timeout: Option<Duration>) -> Result<Self> {
        let base_url = base_url.trim().trim_end_matches('/').to_owned();
        validate_base_url(&base_url)?;

        let mut builder = HttpClient::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let http = builder.build().context("build HTTP client")?;

        Ok(Self {
            base_url,
            timeout,
            http,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout
    }

    pub fn list(&self) -> Result<Vec<Application>, ApiError> {
        let path = "/applications".to_owned();
        let body = self.execute("GET", &path, self.http.get(self.url(&path)))?;
        serde_json::from_str(&body).map_err(|error| {
            warn!(%error, "application list did not decode");
            ApiError::unexpected(format!("decode application list: {error}"))
        })
    }

    pub fn create(&self, draft: &ApplicationDraft) -> Result<ApiReply<Application>, ApiError> {
        let path = "/applications".to_owned();
        let body = self.execute("POST", &path, self.http.post(self.url(&path)).json(draft))?;
        Ok(decode_reply(body))
    }

    pub fn set_status(
        &self,
        id: ApplicationId,
        status: ApplicationStatus,
    ) -> Result<ApiReply<Application>, ApiError> {
        let path = format!("/applications/{id}/status");
        let request = self
            .http
            .put(self.url(&path))
            .query(&[("status", status.as_str())]);
        let body = self.execute("PUT", &path, request)?;
        Ok(decode_reply(body))
    }

    pub fn remove(&self, id: ApplicationId) -> Result<(), ApiError> {
        let path = format!("/applications/{id}");
        self.execute("DELETE", &path, self.http.delete(self.url(&path)))?;
        Ok(())
    }

    /// Lists once and reports how many applications the backend holds.
    pub fn ping(&self) -> Result<usize> {
        match self.list() {
            Ok(applications) => Ok(applications.len()),
            Err(error) if error.kind() == ErrorKind::Network => Err(anyhow!(
                "cannot reach {} -- is the job tracker backend running? ({error})",
                self.base_url
            )),
            Err(error) => Err(anyhow!("backend at {} answered badly: {error}", self.base_url)),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    fn execute(
        &self,
        method: &'static str,
        path: &str,
        request: RequestBuilder,
    ) -> Result<String, ApiError> {
        debug!(method, path, "sending request");
        let response = request
            .send()
            .map_err(|error| connection_error(&self.base_url, method, path, error))?;

        let status = response.status();
        debug!(method, path, status = status.as_u16(), "received response");
        if !status.is_success() {
            let body = response.text().unwrap_or_default();
            let error = ApiError::from_response(status.as_u16(), &body);
            warn!(method, path, kind = ?error.kind(), %error, "request failed");
            return Err(error);
        }

        response.text().map_err(|error| {
            warn!(method, path, %error, "response body unreadable");
            ApiError::unexpected(format!("read response body: {error}"))
        })
    }
}

/// Accepts only non-empty absolute `http` or `https` addresses.
pub fn validate_base_url(base_url: &str) -> Result<()> {
    if base_url.is_empty() {
        bail!("server.base_url must not be empty");
    }
    let parsed = Url::parse(base_url)
        .with_context(|| format!("server.base_url {base_url:?} is not a valid URL"))?;
    match parsed.scheme() {
        "http" | "https" => Ok(()),
        other => bail!("server.base_url must use http or https, got {other:?}"),
    }
}

/// Mutation replies are the affected record when the body decodes as one and
/// an acknowledgement otherwise.
fn decode_reply(body: String) -> ApiReply<Application> {
    match serde_json::from_str::<Application>(&body) {
        Ok(record) => ApiReply::Record(record),
        Err(_) => ApiReply::Ack(body),
    }
}

fn connection_error(
    base_url: &str,
    method: &str,
    path: &str,
    error: reqwest::Error,
) -> ApiError {
    warn!(method, path, %error, "backend unreachable");
    ApiError::Network(format!("cannot reach {base_url} ({error})"))
}
