use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::rule::RowRule;
use crate::source::{ConfigError, SpreadConfig};

/// HTTP client settings (optional `[http]` section in config.toml).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HttpConfig {
    /// Connect timeout in seconds. Unset means libcurl's default.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub connect_timeout_secs: Option<u64>,
    /// Custom User-Agent header.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_agent: Option<String>,
}

/// One named data source (`[[source]]` in config.toml).
///
/// Index fields stay untyped until [`SourceEntry::to_spread_config`] so a
/// malformed file reports the same messages as the typed constructor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SourceEntry {
    pub name: String,
    #[serde(default)]
    pub url: String,
    pub key_column_index: toml::Value,
    pub spread_column_indexes: toml::Value,
    #[serde(default)]
    pub rule: RowRule,
}

impl SourceEntry {
    pub fn new(
        name: &str,
        url: &str,
        key_column_index: usize,
        spread_column_indexes: (usize, usize),
        rule: RowRule,
    ) -> Self {
        Self {
            name: name.to_string(),
            url: url.to_string(),
            key_column_index: toml::Value::Integer(key_column_index as i64),
            spread_column_indexes: toml::Value::Array(vec![
                toml::Value::Integer(spread_column_indexes.0 as i64),
                toml::Value::Integer(spread_column_indexes.1 as i64),
            ]),
            rule,
        }
    }

    /// Entry from command-line text: `key` like `"1"`, `spread` like `"6,8"`.
    /// Values that do not look like integers are kept as strings so that
    /// validation reports them.
    pub fn from_args(name: &str, url: &str, key: &str, spread: &str, rule: RowRule) -> Self {
        Self {
            name: name.to_string(),
            url: url.to_string(),
            key_column_index: loose_integer(key),
            spread_column_indexes: toml::Value::Array(spread.split(',').map(loose_integer).collect()),
            rule,
        }
    }

    /// Validate and turn this entry into a scan configuration.
    pub fn to_spread_config(&self) -> Result<SpreadConfig, ConfigError> {
        SpreadConfig::from_values(
            &self.url,
            &self.key_column_index,
            &self.spread_column_indexes,
            self.rule.clone().into_predicate(),
        )
    }
}

/// Global configuration loaded from `~/.config/minspread/config.toml`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub http: HttpConfig,
    /// Named sources; an entry shadows a built-in preset with the same name.
    #[serde(default, rename = "source")]
    pub sources: Vec<SourceEntry>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            http: HttpConfig::default(),
            sources: presets(),
        }
    }
}

impl AppConfig {
    /// Find a source by name: config entries first, then built-in presets.
    pub fn find_source(&self, name: &str) -> Option<SourceEntry> {
        self.sources
            .iter()
            .find(|s| s.name == name)
            .cloned()
            .or_else(|| presets().into_iter().find(|s| s.name == name))
    }

    /// All source names: config entries, then presets not shadowed by them.
    pub fn source_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.sources.iter().map(|s| s.name.clone()).collect();
        for preset in presets() {
            if !names.contains(&preset.name) {
                names.push(preset.name);
            }
        }
        names
    }
}

/// Built-in sources: the classic football league and weather tables.
pub fn presets() -> Vec<SourceEntry> {
    vec![
        SourceEntry::new(
            "football",
            "http://codekata.com/data/04/football.dat",
            1,
            (6, 8),
            RowRule {
                token_count: Some(10),
                ..Default::default()
            },
        ),
        SourceEntry::new(
            "weather",
            "http://codekata.com/data/04/weather.dat",
            0,
            (1, 2),
            RowRule {
                min_tokens: Some(4),
                numeric_column: Some(0),
                ..Default::default()
            },
        ),
    ]
}

fn loose_integer(text: &str) -> toml::Value {
    let text = text.trim();
    text.parse::<i64>()
        .map(toml::Value::Integer)
        .unwrap_or_else(|_| toml::Value::String(text.to_string()))
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("minspread")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<AppConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = AppConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }
    load_from(&path)
}

/// Load configuration from an explicit path.
pub fn load_from(path: &Path) -> Result<AppConfig> {
    let data =
        fs::read_to_string(path).with_context(|| format!("read config {}", path.display()))?;
    let cfg: AppConfig =
        toml::from_str(&data).with_context(|| format!("parse config {}", path.display()))?;
    Ok(cfg)
}
