use anyhow::Context;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};

const DEFAULT_PORT: u16 = 3000;

/// Gateway settings read from the environment
///
/// - `HOST`: bind address, default `0.0.0.0`
/// - `PORT`: listen port, default `3000`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GatewayConfig {
    pub host: IpAddr,
    pub port: u16,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            host: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port: DEFAULT_PORT,
        }
    }
}

impl GatewayConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup; unset or empty keys keep their default
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let mut config = Self::default();
        let value = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        if let Some(host) = value("HOST") {
            config.host = host
                .trim()
                .parse()
                .with_context(|| format!("HOST is not an IP address: {host}"))?;
        }
        if let Some(port) = value("PORT") {
            config.port = port
                .trim()
                .parse()
                .with_context(|| format!("PORT is not a valid port: {port}"))?;
        }

        Ok(config)
    }

    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = GatewayConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config.socket_addr().to_string(), "0.0.0.0:3000");
    }

    #[test]
    fn test_overrides() {
        let config =
            GatewayConfig::from_lookup(lookup(&[("HOST", "127.0.0.1"), ("PORT", "8080")])).unwrap();
        assert_eq!(config.socket_addr().to_string(), "127.0.0.1:8080");
    }

    #[test]
    fn test_empty_value_keeps_default() {
        let config = GatewayConfig::from_lookup(lookup(&[("PORT", "")])).unwrap();
        assert_eq!(config.port, 3000);
    }

    #[test]
    fn test_invalid_port_is_error() {
        let err = GatewayConfig::from_lookup(lookup(&[("PORT", "99999")])).unwrap_err();
        assert!(err.to_string().contains("PORT"));
    }
}
