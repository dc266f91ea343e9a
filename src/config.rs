use anyhow::{Context, Result};

/// Server settings, read once at startup (a `.env` file is honored).
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// When set, logs also go to a daily-rolling file under this directory.
    pub log_dir: Option<String>,
}

impl ServerConfig {
    pub fn from_env() -> Result<Self> {
        let host = std::env::var("PANDAK8S_HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
        let port = std::env::var("PANDAK8S_PORT")
            .unwrap_or_else(|_| "8080".to_string())
            .parse::<u16>()
            .context("PANDAK8S_PORT must be a valid port number")?;
        let log_dir = std::env::var("PANDAK8S_LOG_DIR").ok();

        Ok(Self {
            host,
            port,
            log_dir,
        })
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bind_addr_joins_host_and_port() {
        let config = ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 3000,
            log_dir: None,
        };
        assert_eq!(config.bind_addr(), "127.0.0.1:3000");
    }

    // Single test for env handling so parallel tests never race on the vars.
    #[test]
    fn from_env_defaults_then_honors_overrides() {
        let config = ServerConfig::from_env().unwrap();
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 8080);
        assert_eq!(config.log_dir, None);

        std::env::set_var("PANDAK8S_HOST", "10.0.0.1");
        std::env::set_var("PANDAK8S_PORT", "9090");
        std::env::set_var("PANDAK8S_LOG_DIR", "/var/log/pandak8s");

        let config = ServerConfig::from_env().unwrap();
        assert_eq!(config.host, "10.0.0.1");
        assert_eq!(config.port, 9090);
        assert_eq!(config.log_dir.as_deref(), Some("/var/log/pandak8s"));

        std::env::set_var("PANDAK8S_PORT", "not-a-port");
        assert!(ServerConfig::from_env().is_err());

        std::env::remove_var("PANDAK8S_HOST");
        std::env::remove_var("PANDAK8S_PORT");
        std::env::remove_var("PANDAK8S_LOG_DIR");
    }
}
