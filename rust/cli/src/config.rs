use serde::{Deserialize, Serialize};
use std::fs;

use oxo_ai::Strategy;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    pub strategy: String,
    pub delay_ms: u64,
    pub games: u32,
    pub seed: Option<u64>,
}

#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueSource {
    Default,
    File,
    Env,
}

#[derive(Debug, Clone, Copy)]
pub struct ConfigSources {
    pub strategy: ValueSource,
    pub delay_ms: ValueSource,
    pub games: ValueSource,
    pub seed: ValueSource,
}

impl Default for ConfigSources {
    fn default() -> Self {
        Self {
            strategy: ValueSource::Default,
            delay_ms: ValueSource::Default,
            games: ValueSource::Default,
            seed: ValueSource::Default,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ConfigResolved {
    pub config: Config,
    pub sources: ConfigSources,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            strategy: Strategy::Heuristic.as_str().into(),
            delay_ms: 300,
            games: 1,
            seed: None,
        }
    }
}

/// Upper bound for the thinking pause; anything longer is a config mistake.
pub const MAX_DELAY_MS: u64 = 10_000;

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
    Invalid(String),
}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        ConfigError::Io(e)
    }
}
impl From<toml::de::Error> for ConfigError {
    fn from(e: toml::de::Error) -> Self {
        ConfigError::Parse(e)
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

pub fn load() -> Result<Config, ConfigError> {
    load_with_sources().map(|resolved| resolved.config)
}

pub fn load_with_sources() -> Result<ConfigResolved, ConfigError> {
    let mut cfg = Config::default();
    let mut sources = ConfigSources::default();

    if let Ok(path) = std::env::var("OXO_CONFIG") {
        let s = fs::read_to_string(path)?;
        let f: FileConfig = toml::from_str(&s)?;
        if let Some(v) = f.strategy {
            cfg.strategy = v;
            sources.strategy = ValueSource::File;
        }
        if let Some(v) = f.delay_ms {
            cfg.delay_ms = v;
            sources.delay_ms = ValueSource::File;
        }
        if let Some(v) = f.games {
            cfg.games = v;
            sources.games = ValueSource::File;
        }
        if let Some(v) = f.seed {
            cfg.seed = Some(v);
            sources.seed = ValueSource::File;
        }
    }

    if let Ok(strategy) = std::env::var("OXO_STRATEGY")
        && !strategy.is_empty()
    {
        cfg.strategy = strategy;
        sources.strategy = ValueSource::Env;
    }
    if let Ok(delay) = std::env::var("OXO_DELAY_MS")
        && !delay.is_empty()
    {
        cfg.delay_ms = delay
            .parse()
            .map_err(|_| ConfigError::Invalid("Invalid delay_ms".into()))?;
        sources.delay_ms = ValueSource::Env;
    }
    if let Ok(seed) = std::env::var("OXO_SEED")
        && !seed.is_empty()
    {
        cfg.seed = Some(
            seed.parse()
                .map_err(|_| ConfigError::Invalid("Invalid seed".into()))?,
        );
        sources.seed = ValueSource::Env;
    }

    validate(&cfg)?;
    Ok(ConfigResolved {
        config: cfg,
        sources,
    })
}

#[derive(Debug, Deserialize)]
struct FileConfig {
    #[serde(default)]
    strategy: Option<String>,
    #[serde(default)]
    delay_ms: Option<u64>,
    #[serde(default)]
    games: Option<u32>,
    #[serde(default)]
    seed: Option<u64>,
}

fn validate(cfg: &Config) -> Result<(), ConfigError> {
    if Strategy::from_name(&cfg.strategy).is_none() {
        return Err(ConfigError::Invalid(format!(
            "Invalid configuration: unknown strategy '{}'",
            cfg.strategy
        )));
    }
    if cfg.delay_ms > MAX_DELAY_MS {
        return Err(ConfigError::Invalid(format!(
            "Invalid configuration: delay_ms must be <= {}",
            MAX_DELAY_MS
        )));
    }
    if cfg.games == 0 {
        return Err(ConfigError::Invalid(
            "Invalid configuration: games must be >= 1".into(),
        ));
    }
    Ok(())
}
