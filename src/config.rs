//! Server configuration from environment variables

use std::net::SocketAddr;

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub bind: SocketAddr,
}

impl ServerConfig {
    /// Load the bind address from ARCANUM_ADDR, falling back to the
    /// default when unset or unparseable.
    pub fn from_env() -> Self {
        let bind = std::env::var("ARCANUM_ADDR")
            .ok()
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .and_then(|s| match s.parse() {
                Ok(addr) => Some(addr),
                Err(e) => {
                    tracing::warn!("Ignoring invalid ARCANUM_ADDR '{}': {}", s, e);
                    None
                }
            })
            .unwrap_or_else(default_addr);

        Self { bind }
    }
}

fn default_addr() -> SocketAddr {
    // 1587: the year the Roanoke colony was last seen
    SocketAddr::from(([0, 0, 0, 0], 1587))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    #[serial]
    fn test_default_when_unset() {
        std::env::remove_var("ARCANUM_ADDR");
        let config = ServerConfig::from_env();
        assert_eq!(config.bind, default_addr());
    }

    #[test]
    #[serial]
    fn test_reads_addr_from_env() {
        std::env::set_var("ARCANUM_ADDR", "127.0.0.1:9000");
        let config = ServerConfig::from_env();
        assert_eq!(config.bind, "127.0.0.1:9000".parse::<SocketAddr>().unwrap());
        std::env::remove_var("ARCANUM_ADDR");
    }

    #[test]
    #[serial]
    fn test_invalid_addr_falls_back_to_default() {
        std::env::set_var("ARCANUM_ADDR", "not-an-address");
        let config = ServerConfig::from_env();
        assert_eq!(config.bind, default_addr());
        std::env::remove_var("ARCANUM_ADDR");
    }
}
