// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use anyhow::{Context, Result, anyhow, bail};
use jobdash_app::StatusFilter;
use serde::Deserialize;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::logging;

const CONFIG_VERSION: i64 = 1;
const APP_NAME: &str = "jobdash";
const DEFAULT_BASE_URL: &str = "http://localhost:8080";
const DEFAULT_LOG_LEVEL: &str = "info";
const BASE_URL_ENV: &str = "JOBDASH_BASE_URL";
const CONFIG_PATH_ENV: &str = "JOBDASH_CONFIG_PATH";

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub version: i64,
    #[serde(default)]
    pub server: Server,
    #[serde(default)]
    pub ui: Ui,
    #[serde(default)]
    pub log: Log,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            version: CONFIG_VERSION,
            server: Server::default(),
            ui: Ui::default(),
            log: Log::default(),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Server {
    pub base_url: Option<String>,
    pub timeout: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Ui {
    pub default_filter: Option<String>,
}

impl Default for Ui {
    fn default() -> Self {
        Self {
            default_filter: Some("ALL".to_owned()),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct Log {
    pub level: Option<String>,
    pub path: Option<String>,
}

impl Default for Log {
    fn default() -> Self {
        Self {
            level: Some(DEFAULT_LOG_LEVEL.to_owned()),
            path: None,
        }
    }
}

impl Config {
    pub fn default_path() -> Result<PathBuf> {
        if let Some(path) = env::var_os(CONFIG_PATH_ENV) {
            return Ok(PathBuf::from(path));
        }

        let config_root = dirs::config_dir().ok_or_else(|| {
            anyhow!("cannot resolve config directory; set {CONFIG_PATH_ENV} to the config file")
        })?;

        let app_dir = config_root.join(APP_NAME);
        fs::create_dir_all(&app_dir)
            .with_context(|| format!("create config directory {}", app_dir.display()))?;
        Ok(app_dir.join("config.toml"))
    }

    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let raw = fs::read_to_string(path)
            .with_context(|| format!("read config file {}", path.display()))?;
        let value: toml::Value = toml::from_str(&raw)
            .with_context(|| format!("parse TOML config {}", path.display()))?;

        let version = value
            .get("version")
            .and_then(toml::Value::as_integer)
            .ok_or_else(|| {
                anyhow!(
                    "config file {} is missing `version = 1`. Add it at the top and keep values under [server], [ui], and [log]",
                    path.display()
                )
            })?;

        if version != CONFIG_VERSION {
            bail!(
                "unsupported config version {} in {}; expected version = 1",
                version,
                path.display()
            );
        }

        let config: Config = value
            .try_into()
            .with_context(|| format!("decode config {}", path.display()))?;
        config.validate(path)?;
        Ok(config)
    }

    fn validate(&self, path: &Path) -> Result<()> {
        if let Some(base_url) = &self.server.base_url {
            jobdash_api::validate_base_url(base_url)
                .with_context(|| format!("server.base_url in {}", path.display()))?;
        }

        if let Some(timeout) = &self.server.timeout {
            let parsed = parse_duration(timeout)?;
            if parsed <= Duration::ZERO {
                bail!(
                    "server.timeout in {} must be positive, got {}",
                    path.display(),
                    timeout
                );
            }
        }

        if let Some(filter) = &self.ui.default_filter
            && StatusFilter::parse(filter).is_none()
        {
            bail!(
                "ui.default_filter in {} must be one of ALL, APPLIED, INTERVIEW, OFFER, REJECTED; got {:?}",
                path.display(),
                filter
            );
        }

        if let Some(level) = &self.log.level {
            logging::parse_filter(level)
                .with_context(|| format!("log.level in {}", path.display()))?;
        }

        if let Some(log_path) = &self.log.path
            && log_path.trim().is_empty()
        {
            bail!("log.path in {} must not be empty", path.display());
        }

        Ok(())
    }

    /// `--base-url`, then `[server].base_url`, then `JOBDASH_BASE_URL`, then
    /// the local default.
    pub fn resolve_base_url(&self, cli_override: Option<&str>) -> String {
        if let Some(value) = cli_override {
            return value.to_owned();
        }
        if let Some(value) = &self.server.base_url {
            return value.clone();
        }
        match env::var(BASE_URL_ENV) {
            Ok(value) if !value.trim().is_empty() => value,
            _ => DEFAULT_BASE_URL.to_owned(),
        }
    }

    pub fn timeout(&self) -> Result<Option<Duration>> {
        self.server
            .timeout
            .as_deref()
            .map(parse_duration)
            .transpose()
    }

    pub fn default_filter(&self) -> StatusFilter {
        self.ui
            .default_filter
            .as_deref()
            .and_then(StatusFilter::parse)
            .unwrap_or_default()
    }

    pub fn log_level(&self) -> &str {
        self.log.level.as_deref().unwrap_or(DEFAULT_LOG_LEVEL)
    }

    pub fn log_path(&self) -> Result<PathBuf> {
        if let Some(path) = &self.log.path {
            return Ok(PathBuf::from(path));
        }
        let data_root = dirs::data_local_dir().ok_or_else(|| {
            anyhow!("cannot resolve data directory; set [log].path in the config file")
        })?;
        Ok(data_root.join(APP_NAME).join("jobdash.log"))
    }

    pub fn example_config(path: &Path) -> String {
        format!(
            "# jobdash config\n# Place this file at: {}\n\nversion = 1\n\n[server]\n# Overridden by --base-url; JOBDASH_BASE_URL applies when unset here.\nbase_url = \"{}\"\n# Optional. <N>ms, <N>s or <N>m; unset uses the HTTP client default.\n# timeout = \"10s\"\n\n[ui]\n# ALL, APPLIED, INTERVIEW, OFFER or REJECTED\ndefault_filter = \"ALL\"\n\n[log]\n# RUST_LOG takes precedence when set.\nlevel = \"{}\"\n# Optional. Default is the platform data dir (for example ~/.local/share/jobdash/jobdash.log)\n# path = \"/absolute/path/to/jobdash.log\"\n",
            path.display(),
            DEFAULT_BASE_URL,
            DEFAULT_LOG_LEVEL,
        )
    }
}

fn parse_duration(raw: &str) -> Result<Duration> {
    let (value, millis_per_unit) = if let Some(value) = raw.strip_suffix("ms") {
        (value, 1)
    } else if let Some(value) = raw.strip_suffix('s') {
        (value, 1_000)
    } else if let Some(value) = raw.strip_suffix('m') {
        (value, 60_000)
    } else {
        bail!("{}", duration_hint(raw));
    };

    let count: u64 = value.parse().with_context(|| duration_hint(raw))?;
    let millis = count
        .checked_mul(millis_per_unit)
        .ok_or_else(|| anyhow!("invalid duration {raw:?}; value is too large"))?;
    Ok(Duration::from_millis(millis))
}

fn duration_hint(raw: &str) -> String {
    format!("invalid duration {raw:?}; use one of: <N>ms, <N>s, <N>m (for example 500ms or 10s)")
}
