use std::env;
use std::fmt;

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 8080;

#[derive(Debug)]
pub enum ConfigError {
    InvalidPort(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidPort(raw) => {
                write!(f, "invalid PORT value: {:?} (expected 1-65535)", raw)
            }
        }
    }
}

impl std::error::Error for ConfigError {}

/// # Server Configuration
///
/// Listening address for the HTTP server, resolved from the environment.
///
/// ## Variables
/// - `HOST`: bind host, defaults to `0.0.0.0`
/// - `PORT`: bind port, defaults to `8080`
///
/// A `PORT` that is present but not a valid port number fails startup with
/// [`ConfigError::InvalidPort`] rather than silently falling back.
#[derive(Debug, Clone, PartialEq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl ServerConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        let host = env::var("HOST").unwrap_or_else(|_| DEFAULT_HOST.to_string());

        let port = match env::var("PORT") {
            Ok(raw) => raw
                .trim()
                .parse::<u16>()
                .map_err(|_| ConfigError::InvalidPort(raw))?,
            Err(_) => DEFAULT_PORT,
        };

        Ok(Self { host, port })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    // Env vars are process-global, so these tests serialize on a lock and
    // restore the previous values before returning.
    static ENV_LOCK: Mutex<()> = Mutex::new(());

    fn with_env<R>(vars: &[(&str, Option<&str>)], f: impl FnOnce() -> R) -> R {
        let _guard = ENV_LOCK.lock().unwrap();
        let saved: Vec<(String, Option<String>)> = vars
            .iter()
            .map(|(k, _)| (k.to_string(), env::var(k).ok()))
            .collect();
        for (k, v) in vars {
            match v {
                Some(v) => unsafe { env::set_var(k, v) },
                None => unsafe { env::remove_var(k) },
            }
        }
        let out = f();
        for (k, v) in saved {
            match v {
                Some(v) => unsafe { env::set_var(&k, v) },
                None => unsafe { env::remove_var(&k) },
            }
        }
        out
    }

    #[test]
    fn test_defaults_when_unset() {
        let config = with_env(&[("HOST", None), ("PORT", None)], || {
            ServerConfig::from_env().expect("defaults should always resolve")
        });

        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 8080);
    }

    #[test]
    fn test_explicit_host_and_port() {
        let config = with_env(&[("HOST", Some("127.0.0.1")), ("PORT", Some("3000"))], || {
            ServerConfig::from_env().expect("valid values should resolve")
        });

        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.port, 3000);
    }

    #[test]
    fn test_unparseable_port_is_fatal() {
        let result = with_env(&[("PORT", Some("not-a-port"))], ServerConfig::from_env);

        let err = result.expect_err("garbage PORT must not fall back to the default");
        assert!(err.to_string().contains("not-a-port"));
    }
}
