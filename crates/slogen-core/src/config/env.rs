use std::path::{Path, PathBuf};

pub const CONFIG_PATH_ENV: &str = "SLOGEN_CONFIG";
pub const DEFAULT_CONFIG_PATH: &str = "prometheus-slo.yaml";

/// Explicit path, then `SLOGEN_CONFIG`, then `prometheus-slo.yaml`.
#[must_use]
pub fn resolve_config_path(explicit: Option<&Path>) -> PathBuf {
    resolve_with_env(explicit, read_non_empty_env(CONFIG_PATH_ENV))
}

fn resolve_with_env(explicit: Option<&Path>, from_env: Option<String>) -> PathBuf {
    explicit
        .map(Path::to_path_buf)
        .or_else(|| from_env.map(PathBuf::from))
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_PATH))
}

#[must_use]
fn read_non_empty_env(name: &str) -> Option<String> {
    std::env::var(name)
        .ok()
        .map(|raw| raw.trim().to_string())
        .filter(|value| !value.is_empty())
}
