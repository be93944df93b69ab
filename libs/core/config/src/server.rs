use crate::{ConfigError, FromEnv, env_parse_or};
use std::net::{IpAddr, Ipv4Addr, SocketAddr};

/// Port the user service listens on when `PORT` is unset.
pub const DEFAULT_PORT: u16 = 5009;

/// Listen address for the HTTP API.
///
/// `HOST` must be a literal IP address; hostnames are rejected at startup
/// rather than at bind time.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: IpAddr,
    pub port: u16,
}

impl ServerConfig {
    pub fn new(host: IpAddr, port: u16) -> Self {
        Self { host, port }
    }

    /// Loopback on the given port, used by tests and local tooling.
    pub fn localhost(port: u16) -> Self {
        Self::new(IpAddr::V4(Ipv4Addr::LOCALHOST), port)
    }

    pub fn address(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

impl FromEnv for ServerConfig {
    /// `HOST` (default all interfaces) and `PORT` (default 5009).
    fn from_env() -> Result<Self, ConfigError> {
        let default = Self::default();
        Ok(Self {
            host: env_parse_or("HOST", &default.host.to_string())?,
            port: env_parse_or("PORT", &default.port.to_string())?,
        })
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self::new(IpAddr::V4(Ipv4Addr::UNSPECIFIED), DEFAULT_PORT)
    }
}
