use std::env;
use std::time::Duration;

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 5500;
const DEFAULT_FETCH_TIMEOUT_SECS: u64 = 3;

#[derive(Clone, Debug)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub fetch_timeout: Duration,
}

impl Config {
    /// Load configuration from the environment (and a `.env` file when
    /// present). Unset or unparsable values fall back to defaults.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        Self::from_vars(
            env::var("HOST").ok(),
            env::var("PORT").ok(),
            env::var("FETCH_TIMEOUT_SECS").ok(),
        )
    }

    fn from_vars(host: Option<String>, port: Option<String>, timeout_secs: Option<String>) -> Self {
        Config {
            host: host.unwrap_or_else(|| DEFAULT_HOST.to_string()),
            port: parse_or_default(port, DEFAULT_PORT),
            fetch_timeout: Duration::from_secs(parse_or_default(
                timeout_secs,
                DEFAULT_FETCH_TIMEOUT_SECS,
            )),
        }
    }

    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            fetch_timeout: Duration::from_secs(DEFAULT_FETCH_TIMEOUT_SECS),
        }
    }
}

fn parse_or_default<T: std::str::FromStr>(value: Option<String>, default: T) -> T {
    value.and_then(|v| v.parse().ok()).unwrap_or(default)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_addr_binds_all_interfaces() {
        assert_eq!(Config::default().server_addr(), "0.0.0.0:5500");
    }

    #[test]
    fn unset_vars_fall_back_to_defaults() {
        let config = Config::from_vars(None, None, None);
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 5500);
        assert_eq!(config.fetch_timeout, Duration::from_secs(3));
    }

    #[test]
    fn invalid_numeric_vars_fall_back_to_defaults() {
        let config = Config::from_vars(
            Some("127.0.0.1".into()),
            Some("not-a-port".into()),
            Some("soon".into()),
        );
        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.port, 5500);
        assert_eq!(config.fetch_timeout, Duration::from_secs(3));
    }

    #[test]
    fn valid_vars_are_applied() {
        let config = Config::from_vars(None, Some("8080".into()), Some("5".into()));
        assert_eq!(config.port, 8080);
        assert_eq!(config.fetch_timeout, Duration::from_secs(5));
    }
}
