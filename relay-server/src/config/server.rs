use serde::Deserialize;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};

/// Configuration for the HTTP listener
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct ServerConfig {
    /// Address to bind to (default: 0.0.0.0)
    #[serde(default = "default_host")]
    pub host: IpAddr,

    /// The port the relay will listen to (default: 8000)
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_host() -> IpAddr {
    IpAddr::V4(Ipv4Addr::UNSPECIFIED)
}

fn default_port() -> u16 {
    8000
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl ServerConfig {
    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_server_config() {
        let config = ServerConfig::default();
        assert_eq!(config.socket_addr(), SocketAddr::from(([0, 0, 0, 0], 8000)));
    }
}
