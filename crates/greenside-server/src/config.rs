use serde::Deserialize;

use greenside_core::validate::Limits;

/// Default config file, read from the working directory.
const CONFIG_FILE: &str = "greenside.toml";

/// Top-level server configuration, loaded from `greenside.toml`.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub listen_addr: String,
    /// Directory holding `courses.json` and `games.json`.
    pub data_dir: String,
    /// Write the built-in courses when the store has never saved any.
    pub seed_default_courses: bool,
    /// Emit logs as JSON lines instead of human-readable text.
    pub log_json: bool,
    pub limits: LimitsConfig,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            listen_addr: "0.0.0.0:8080".to_string(),
            data_dir: "data".to_string(),
            seed_default_courses: true,
            log_json: false,
            limits: LimitsConfig::default(),
        }
    }
}

/// Size limits on records accepted over the API.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LimitsConfig {
    pub max_players: usize,
    pub max_holes: usize,
}

impl Default for LimitsConfig {
    fn default() -> Self {
        let limits = Limits::default();
        Self {
            max_players: limits.max_players,
            max_holes: limits.max_holes,
        }
    }
}

impl LimitsConfig {
    pub fn record_limits(&self) -> Limits {
        Limits {
            max_players: self.max_players,
            max_holes: self.max_holes,
        }
    }
}

/// A configuration value that cannot be used.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    InvalidListenAddr(String),
    EmptyDataDir,
    ZeroLimit(&'static str),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidListenAddr(addr) => {
                write!(f, "listen_addr {addr:?} is not a valid socket address")
            },
            Self::EmptyDataDir => write!(f, "data_dir must not be empty"),
            Self::ZeroLimit(name) => write!(f, "limits.{name} must be > 0"),
        }
    }
}

impl std::error::Error for ConfigError {}

/// Where the loaded config came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    File(String),
    Missing(String),
    /// The file exists but failed to parse; defaults were used.
    Invalid { path: String, error: String },
}

impl ConfigSource {
    pub fn log(&self) {
        match self {
            Self::File(path) => tracing::info!("Loaded configuration from {path}"),
            Self::Missing(path) => tracing::info!("No {path} found, using defaults"),
            Self::Invalid { path, error } => {
                tracing::warn!("Failed to parse {path}: {error}, using defaults");
            },
        }
    }
}

impl ServerConfig {
    /// Check values that would make the server unusable.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.listen_addr.parse::<std::net::SocketAddr>().is_err() {
            return Err(ConfigError::InvalidListenAddr(self.listen_addr.clone()));
        }
        if self.data_dir.trim().is_empty() {
            return Err(ConfigError::EmptyDataDir);
        }
        if self.limits.max_players == 0 {
            return Err(ConfigError::ZeroLimit("max_players"));
        }
        if self.limits.max_holes == 0 {
            return Err(ConfigError::ZeroLimit("max_holes"));
        }
        Ok(())
    }

    /// Load config from `greenside.toml` (or the file named by
    /// `GREENSIDE_CONFIG`) if it exists, then apply env var overrides.
    ///
    /// Nothing is logged here since the subscriber depends on the loaded
    /// config; call [`ConfigSource::log`] once logging is installed.
    pub fn load() -> (Self, ConfigSource) {
        let path = std::env::var("GREENSIDE_CONFIG").unwrap_or_else(|_| CONFIG_FILE.to_string());
        Self::load_from(&path, |key| std::env::var(key).ok())
    }

    /// Load from `path`, reading overrides through `lookup`. An unreadable
    /// or unparsable file falls back to defaults.
    pub fn load_from(path: &str, lookup: impl Fn(&str) -> Option<String>) -> (Self, ConfigSource) {
        let (mut config, source) = match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str::<ServerConfig>(&content) {
                Ok(cfg) => (cfg, ConfigSource::File(path.to_string())),
                Err(e) => (
                    ServerConfig::default(),
                    ConfigSource::Invalid {
                        path: path.to_string(),
                        error: e.to_string(),
                    },
                ),
            },
            Err(_) => (ServerConfig::default(), ConfigSource::Missing(path.to_string())),
        };
        config.apply_overrides(lookup);
        (config, source)
    }

    /// Apply `GREENSIDE_*` overrides, reading values through `lookup`.
    /// Empty or unparsable values are ignored.
    pub fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(addr) = lookup("GREENSIDE_LISTEN_ADDR")
            && !addr.is_empty()
        {
            self.listen_addr = addr;
        }
        if let Some(dir) = lookup("GREENSIDE_DATA_DIR")
            && !dir.is_empty()
        {
            self.data_dir = dir;
        }
        if let Some(val) = lookup("GREENSIDE_SEED_DEFAULTS")
            && let Ok(seed) = val.parse::<bool>()
        {
            self.seed_default_courses = seed;
        }
        if let Some(val) = lookup("GREENSIDE_LOG_JSON")
            && let Ok(json) = val.parse::<bool>()
        {
            self.log_json = json;
        }
        if let Some(val) = lookup("GREENSIDE_MAX_PLAYERS")
            && let Ok(n) = val.parse::<usize>()
        {
            self.limits.max_players = n;
        }
    }
}
