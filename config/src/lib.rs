//! Configuration loading for provkit.
//!
//! Raw TOML structs keep `Option` fields and stay private; they resolve into
//! [`ProvkitConfig`], whose values are already validated.
//!
//! ```toml
//! [expand]
//! on_decode_failure = "reject"
//! ```

use std::path::{Path, PathBuf};
use std::{env, fs, io};

use provkit_types::DecodePolicy;
use serde::Deserialize;
use thiserror::Error;
use toml::de;

/// Overrides `expand.on_decode_failure` when set to a recognised policy.
pub const DECODE_POLICY_ENV: &str = "PROVKIT_DECODE_POLICY";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config at {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to parse config: {0}")]
    Parse(#[from] de::Error),
    #[error("unknown decode failure policy `{0}` (expected `omit` or `reject`)")]
    UnknownDecodePolicy(String),
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawConfig {
    expand: Option<RawExpandConfig>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawExpandConfig {
    on_decode_failure: Option<String>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ProvkitConfig {
    decode_policy: DecodePolicy,
}

impl TryFrom<RawConfig> for ProvkitConfig {
    type Error = ConfigError;

    fn try_from(raw: RawConfig) -> Result<Self, Self::Error> {
        let decode_policy = match raw.expand.and_then(|expand| expand.on_decode_failure) {
            Some(value) => match DecodePolicy::parse(&value) {
                Some(policy) => policy,
                None => return Err(ConfigError::UnknownDecodePolicy(value)),
            },
            None => DecodePolicy::default(),
        };
        Ok(Self { decode_policy })
    }
}

impl ProvkitConfig {
    #[must_use]
    pub fn new(decode_policy: DecodePolicy) -> Self {
        Self { decode_policy }
    }

    #[must_use]
    pub fn decode_policy(&self) -> DecodePolicy {
        self.decode_policy
    }

    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        let raw: RawConfig = toml::from_str(content)?;
        Self::try_from(raw)
    }

    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&content)
    }

    /// Load `~/.provkit/config.toml`. Missing, unreadable and invalid files yield `None`.
    pub fn load() -> Option<Self> {
        let path = config_path()?;
        if !path.exists() {
            return None;
        }

        match Self::load_from(&path) {
            Ok(config) => {
                tracing::debug!(
                    decode_policy = config.decode_policy.as_str(),
                    "Loaded config from {:?}",
                    path
                );
                Some(config)
            }
            Err(err) => {
                tracing::warn!("Ignoring config at {:?}: {}", path, err);
                None
            }
        }
    }

    /// The config file (or defaults), with the environment override applied.
    #[must_use]
    pub fn resolve() -> Self {
        let override_value = env::var(DECODE_POLICY_ENV).ok();
        Self::load()
            .unwrap_or_default()
            .with_override(override_value.as_deref())
    }

    fn with_override(self, value: Option<&str>) -> Self {
        let Some(value) = value else {
            return self;
        };
        match DecodePolicy::parse(value) {
            Some(decode_policy) => Self { decode_policy },
            None => {
                tracing::warn!(
                    "Ignoring {DECODE_POLICY_ENV}={value:?}: expected `omit` or `reject`"
                );
                self
            }
        }
    }

    #[must_use]
    pub fn path() -> Option<PathBuf> {
        config_path()
    }
}

fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(".provkit").join("config.toml"))
}
