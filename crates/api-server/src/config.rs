//! Server configuration read from the environment at start-up

use std::net::{IpAddr, Ipv4Addr, SocketAddr};

const DEFAULT_PORT: u16 = 8081;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: IpAddr,
    pub port: u16,
    /// Load the demo tasks into the fresh store
    pub seed_demo: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port: DEFAULT_PORT,
            seed_demo: true,
        }
    }
}

impl ServerConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        let host = match lookup("TASKBOARD_HOST") {
            Some(raw) => raw.trim().parse().unwrap_or_else(|_| {
                tracing::warn!("Ignoring invalid TASKBOARD_HOST {:?}", raw);
                defaults.host
            }),
            None => defaults.host,
        };

        let port = match lookup("TASKBOARD_PORT") {
            Some(raw) => raw.trim().parse().unwrap_or_else(|_| {
                tracing::warn!("Ignoring invalid TASKBOARD_PORT {:?}", raw);
                defaults.port
            }),
            None => defaults.port,
        };

        let seed_demo = lookup("TASKBOARD_SEED_DEMO")
            .map(|raw| parse_flag(&raw, defaults.seed_demo))
            .unwrap_or(defaults.seed_demo);

        Self {
            host,
            port,
            seed_demo,
        }
    }

    pub fn addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

fn parse_flag(raw: &str, default: bool) -> bool {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => true,
        "0" | "false" | "no" | "off" => false,
        _ => default,
    }
}
