#![forbid(unsafe_code)]

use std::path::PathBuf;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

pub const STORAGE_DIR_ENV: &str = "CW_PREFS_STORAGE_DIR";
pub const USER_ENV: &str = "CW_PREFS_USER";
pub const LOG_ENV: &str = "CW_PREFS_LOG";

const DEFAULT_STORAGE_DIR: &str = ".cw_prefs";
const DEFAULT_LOG_FILTER: &str = "warn";

/// Flags win over environment, environment over defaults.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PrefsConfig {
    pub storage_dir: PathBuf,
    pub user: Option<String>,
    pub log_filter: String,
}

impl PrefsConfig {
    pub fn from_env(args: &[String]) -> Self {
        Self::resolve(args, |key| std::env::var(key).ok())
    }

    pub fn resolve(args: &[String], env: impl Fn(&str) -> Option<String>) -> Self {
        let storage_dir = flag_value(args, "--storage-dir")
            .or_else(|| env(STORAGE_DIR_ENV))
            .filter(|value| !value.trim().is_empty())
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_STORAGE_DIR));
        let user = flag_value(args, "--user")
            .or_else(|| env(USER_ENV))
            .filter(|value| !value.trim().is_empty());
        let log_filter = env(LOG_ENV)
            .filter(|value| !value.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string());
        Self {
            storage_dir,
            user,
            log_filter,
        }
    }
}

/// Last occurrence wins.
pub fn flag_value(args: &[String], flag: &str) -> Option<String> {
    let mut iter = args.iter();
    let mut found = None;
    while let Some(arg) = iter.next() {
        if arg.as_str() == flag
            && let Some(value) = iter.next()
        {
            found = Some(value.clone());
        }
    }
    found
}

/// Logs go to stderr; stdout carries the JSON response.
pub fn install_tracing(filter: &str) {
    let env_filter =
        EnvFilter::try_new(filter).unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    let _ = tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .try_init();
}
