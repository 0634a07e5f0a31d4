use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{bail, Context};
use clap::Parser;
use serde::Deserialize;
use url::Url;

pub const CONFIG_FILE_NAME: &str = "recommendations.toml";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub base_url: String,
    pub log_filter: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8000".into(),
            log_filter: "info".into(),
        }
    }
}

#[derive(Debug, Default, Parser)]
#[command(name = "recommendations")]
#[command(about = "Desktop form client for the recommendations service")]
pub struct StartupArgs {
    /// Root url of the recommendations service.
    #[arg(long)]
    pub base_url: Option<String>,
    /// tracing filter directive, e.g. `debug` or `client_core=debug`.
    #[arg(long)]
    pub log_filter: Option<String>,
    /// Settings file; defaults to ./recommendations.toml, then the user config dir.
    #[arg(long)]
    pub config: Option<PathBuf>,
}

#[derive(Debug, Default, Deserialize)]
struct FileSettings {
    base_url: Option<String>,
    log_filter: Option<String>,
}

/// Layers defaults, the settings file, environment and startup flags, in
/// that order.
pub fn load_settings(args: &StartupArgs) -> Settings {
    let mut settings = Settings::default();

    let file = match &args.config {
        Some(path) => Some(path.clone()),
        None => default_config_path(),
    };
    if let Some(path) = file {
        apply_file_overrides(&mut settings, &path);
    }

    apply_env_overrides(&mut settings, |name| std::env::var(name).ok());

    if let Some(v) = &args.base_url {
        settings.base_url = v.clone();
    }
    if let Some(v) = &args.log_filter {
        settings.log_filter = v.clone();
    }

    settings
}

fn default_config_path() -> Option<PathBuf> {
    let local = PathBuf::from(CONFIG_FILE_NAME);
    if local.exists() {
        return Some(local);
    }
    let user = dirs::config_dir()?
        .join("recommendations")
        .join(CONFIG_FILE_NAME);
    user.exists().then_some(user)
}

fn apply_file_overrides(settings: &mut Settings, path: &Path) {
    let raw = match fs::read_to_string(path) {
        Ok(raw) => raw,
        Err(err) => {
            tracing::warn!(path = %path.display(), %err, "settings file unreadable; using defaults");
            return;
        }
    };
    match toml::from_str::<FileSettings>(&raw) {
        Ok(file_cfg) => {
            if let Some(v) = file_cfg.base_url {
                settings.base_url = v;
            }
            if let Some(v) = file_cfg.log_filter {
                settings.log_filter = v;
            }
        }
        Err(err) => {
            tracing::warn!(path = %path.display(), %err, "settings file is not valid toml; ignoring it");
        }
    }
}

fn apply_env_overrides(settings: &mut Settings, lookup: impl Fn(&str) -> Option<String>) {
    if let Some(port) = lookup("PORT") {
        settings.base_url = format!("http://localhost:{port}");
    }
    if let Some(v) = lookup("BASE_URL") {
        settings.base_url = v;
    }
    if let Some(v) = lookup("APP__BASE_URL") {
        settings.base_url = v;
    }
    if let Some(v) = lookup("APP__LOG_FILTER") {
        settings.log_filter = v;
    }
}

pub fn prepare_base_url(raw_base_url: &str) -> anyhow::Result<String> {
    let base_url = normalize_base_url(raw_base_url);
    let parsed =
        Url::parse(&base_url).with_context(|| format!("invalid service url '{base_url}'"))?;
    if !matches!(parsed.scheme(), "http" | "https") {
        bail!("service url '{base_url}' must use http or https");
    }
    if parsed.host_str().is_none() {
        bail!("service url '{base_url}' has no host");
    }
    Ok(base_url)
}

fn normalize_base_url(raw_base_url: &str) -> String {
    let raw_base_url = raw_base_url.trim();

    if raw_base_url.is_empty() {
        return Settings::default().base_url;
    }

    let with_scheme = if raw_base_url.contains("://") {
        raw_base_url.to_string()
    } else {
        format!("http://{raw_base_url}")
    };

    with_scheme.trim_end_matches('/').to_string()
}

#[cfg(test)]
#[path = "tests/config_tests.rs"]
mod tests;
