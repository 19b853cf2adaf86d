use crate::name::DomainName;
use crate::record::{RecordData, RecordType, ResourceRecord};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default)]
    pub logging: LoggingConfig,

    /// Statically configured answers installed into the record cache at
    /// startup. Population is administrative: the decode path only reads.
    #[serde(default)]
    pub records: Vec<LocalRecord>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    #[serde(default = "default_port")]
    pub port: u16,

    #[serde(default = "default_bind_address")]
    pub bind_address: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: default_port(),
            bind_address: default_bind_address(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

/// One statically configured answer.
///
/// `value` is the address (A/AAAA) or target name (CNAME/NS). When omitted
/// for an A or AAAA record, the canned placeholder answer of that type is
/// installed instead.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LocalRecord {
    pub name: String,

    pub record_type: String,

    #[serde(default)]
    pub value: Option<String>,

    #[serde(default)]
    pub ttl: Option<u32>,
}

impl LocalRecord {
    /// Canonical cache-key form of the record's owner name.
    pub fn canonical_name(&self) -> Result<String, ConfigError> {
        let name: DomainName = self
            .name
            .parse()
            .map_err(|e| ConfigError::Validation(format!("Record '{}': {}", self.name, e)))?;
        Ok(name.canonical())
    }

    /// Builds the resource record this entry describes.
    pub fn resource_record(&self) -> Result<ResourceRecord, ConfigError> {
        let record_type: RecordType = self.record_type.parse().map_err(ConfigError::Validation)?;
        let ttl = self.ttl.unwrap_or(DEFAULT_RECORD_TTL);

        let data = match (record_type, self.value.as_deref()) {
            (RecordType::A, Some(value)) => RecordData::A(value.parse().map_err(|_| {
                ConfigError::Validation(format!("Record '{}': invalid IPv4 '{}'", self.name, value))
            })?),
            (RecordType::A, None) => return Ok(ResourceRecord::default_a()),
            (RecordType::AAAA, Some(value)) => RecordData::Aaaa(value.parse().map_err(|_| {
                ConfigError::Validation(format!("Record '{}': invalid IPv6 '{}'", self.name, value))
            })?),
            (RecordType::AAAA, None) => return Ok(ResourceRecord::default_aaaa()),
            (RecordType::CNAME, Some(value)) => {
                RecordData::Cname(value.parse().map_err(|e| {
                    ConfigError::Validation(format!("Record '{}': {}", self.name, e))
                })?)
            }
            (RecordType::NS, Some(value)) => RecordData::Ns(value.parse().map_err(|e| {
                ConfigError::Validation(format!("Record '{}': {}", self.name, e))
            })?),
            (RecordType::TXT, _) => {
                return Err(ConfigError::Validation(format!(
                    "Record '{}': TXT records cannot be served",
                    self.name
                )))
            }
            (record_type, None) => {
                return Err(ConfigError::Validation(format!(
                    "Record '{}': {} requires a value",
                    self.name, record_type
                )))
            }
        };

        Ok(ResourceRecord::new(data, ttl))
    }
}

/// Matches the TTL of the canned placeholder answers.
const DEFAULT_RECORD_TTL: u32 = 17800;

fn default_port() -> u16 {
    5443
}

fn default_bind_address() -> String {
    // IPv6 any-address; dual-stack hosts accept IPv4 queries on it too.
    "::".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Config {
    /// Load configuration from file or use defaults.
    ///
    /// Priority order:
    /// 1. Explicitly provided path
    /// 2. lynx-dns.toml in current directory
    /// 3. /etc/lynx-dns/config.toml
    /// 4. Default configuration
    pub fn load(path: Option<&str>, cli_overrides: CliOverrides) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = path {
            Self::from_file(path)?
        } else if std::path::Path::new("lynx-dns.toml").exists() {
            Self::from_file("lynx-dns.toml")?
        } else if std::path::Path::new("/etc/lynx-dns/config.toml").exists() {
            Self::from_file("/etc/lynx-dns/config.toml")?
        } else {
            Self::default()
        };

        config.apply_cli_overrides(cli_overrides);
        Ok(config)
    }

    fn from_file(path: &str) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::FileRead(path.to_string(), e.to_string()))?;
        toml::from_str(&contents).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    fn apply_cli_overrides(&mut self, overrides: CliOverrides) {
        if let Some(port) = overrides.port {
            self.server.port = port;
        }
        if let Some(bind) = overrides.bind_address {
            self.server.bind_address = bind;
        }
        if let Some(level) = overrides.log_level {
            self.logging.level = level;
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.server.port == 0 {
            return Err(ConfigError::Validation("DNS port cannot be 0".to_string()));
        }
        for record in &self.records {
            record.canonical_name()?;
            record.resource_record()?;
        }
        Ok(())
    }
}

#[derive(Debug, Default)]
pub struct CliOverrides {
    pub port: Option<u16>,
    pub bind_address: Option<String>,
    pub log_level: Option<String>,
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {0}: {1}")]
    FileRead(String, String),

    #[error("Failed to parse config: {0}")]
    Parse(String),

    #[error("Configuration validation error: {0}")]
    Validation(String),
}
