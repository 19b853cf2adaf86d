use lynx_dns_domain::{CliOverrides, Config, ConfigError};
use tracing_subscriber::EnvFilter;

/// Load configuration from file (or defaults) and apply CLI overrides.
pub fn load_config(path: Option<&str>, overrides: CliOverrides) -> Result<Config, ConfigError> {
    let config = Config::load(path, overrides)?;
    config.validate()?;
    Ok(config)
}

/// Initialize the tracing subscriber. `RUST_LOG` wins over the configured
/// log level when set.
pub fn init_logging(config: &Config) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.logging.level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}

/// Render the socket address to bind. IPv6 literals need brackets before
/// the port can be appended.
pub fn listen_addr(config: &Config) -> String {
    let bind = &config.server.bind_address;
    if bind.contains(':') {
        format!("[{}]:{}", bind, config.server.port)
    } else {
        format!("{}:{}", bind, config.server.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_listen_addr_brackets_ipv6() {
        let mut config = Config::default();
        config.server.bind_address = "::".to_string();
        config.server.port = 5443;
        assert_eq!(listen_addr(&config), "[::]:5443");
    }

    #[test]
    fn test_listen_addr_plain_ipv4() {
        let mut config = Config::default();
        config.server.bind_address = "0.0.0.0".to_string();
        config.server.port = 53;
        assert_eq!(listen_addr(&config), "0.0.0.0:53");
    }
}
