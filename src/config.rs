use std::net::{SocketAddr, ToSocketAddrs};
use thiserror::Error;

pub const DEFAULT_BIND: &str = "127.0.0.1:8080";
pub const DEFAULT_LOG_FILTER: &str = "filmorate=debug,actix_web=info";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("FILMORATE_BIND={0:?} is not a socket address")]
    Bind(String),
    #[error("FILMORATE_WORKERS={0:?} is not a positive integer")]
    Workers(String),
}

impl From<ConfigError> for std::io::Error {
    fn from(err: ConfigError) -> Self {
        std::io::Error::new(std::io::ErrorKind::InvalidInput, err)
    }
}

/// Startup settings, read from `FILMORATE_*` environment variables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub bind: SocketAddr,
    pub workers: Option<usize>,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let bind_str = lookup("FILMORATE_BIND").unwrap_or_else(|| DEFAULT_BIND.to_owned());
        let bind = bind_str
            .to_socket_addrs()
            .ok()
            .and_then(|mut addrs| addrs.next())
            .ok_or_else(|| ConfigError::Bind(bind_str.clone()))?;
        let workers = match lookup("FILMORATE_WORKERS") {
            Some(raw) => match raw.trim().parse::<usize>() {
                Ok(n) if n > 0 => Some(n),
                _ => return Err(ConfigError::Workers(raw)),
            },
            None => None,
        };
        Ok(Config { bind, workers })
    }
}
