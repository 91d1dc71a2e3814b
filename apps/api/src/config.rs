use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::str::FromStr;

/// Runtime settings read from the environment
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub host: IpAddr,
    pub port: u16,
    /// Start with the demo teams loaded
    pub seed_teams: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port: 3000,
            seed_teams: true,
        }
    }
}

impl AppConfig {
    /// Loads `.env` (if present) and reads `HOST`, `PORT` and `SEED_TEAMS`
    pub fn from_env() -> Self {
        dotenv::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from any key lookup; unset or unparseable values
    /// keep their defaults
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        Self {
            host: parse_or(&lookup, "HOST", defaults.host),
            port: parse_or(&lookup, "PORT", defaults.port),
            seed_teams: parse_or(&lookup, "SEED_TEAMS", defaults.seed_teams),
        }
    }

    pub fn addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

fn parse_or<F, T>(lookup: &F, key: &str, default: T) -> T
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    match lookup(key) {
        Some(raw) => raw.trim().parse().unwrap_or_else(|_| {
            tracing::warn!(key, value = %raw, "invalid config value, using default");
            default
        }),
        None => default,
    }
}
