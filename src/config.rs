use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

pub const CONFIG_ENV: &str = "MYCLI_CONFIG";

#[derive(Debug, Deserialize, Clone, Default)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub http: HttpConfig,
    #[serde(default)]
    pub log: LogConfig,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(deny_unknown_fields)]
pub struct HttpConfig {
    /// Sent as the User-Agent header; reqwest sends none by default.
    #[serde(default)]
    pub user_agent: Option<String>,
    #[serde(default = "default_follow_redirects")]
    pub follow_redirects: bool,
}

#[derive(Debug, Deserialize, Clone, Default)]
#[serde(deny_unknown_fields)]
pub struct LogConfig {
    /// tracing EnvFilter directive, e.g. "mycli=debug"
    #[serde(default)]
    pub filter: Option<String>,
}

fn default_follow_redirects() -> bool {
    true
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            user_agent: None,
            follow_redirects: default_follow_redirects(),
        }
    }
}

impl Config {
    /// Load from `$MYCLI_CONFIG`, else `<config dir>/mycli/config.toml`.
    /// A missing file yields defaults.
    pub fn load() -> Result<Self> {
        match default_path() {
            Some(path) => Self::load_from(&path),
            None => Ok(Self::default()),
        }
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let data = fs_err::read_to_string(path)?;
        Self::parse(&data).with_context(|| format!("parsing {}", path.display()))
    }

    pub fn parse(data: &str) -> Result<Self> {
        Ok(toml::from_str(data)?)
    }
}

fn default_path() -> Option<PathBuf> {
    if let Some(p) = std::env::var_os(CONFIG_ENV).filter(|p| !p.is_empty()) {
        return Some(PathBuf::from(p));
    }
    dirs::config_dir().map(|d| d.join("mycli").join("config.toml"))
}
