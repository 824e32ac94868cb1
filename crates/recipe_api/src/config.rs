//! API server configuration.

use std::net::{Ipv4Addr, SocketAddr};

pub const DEFAULT_APP_NAME: &str = "Recipe Explorer";
pub const DEFAULT_PORT: u16 = 8000;

/// Settings the API layer is served with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    /// Address to bind to.
    pub bind_addr: SocketAddr,
    /// Reported application name.
    pub app_name: String,
    /// Reported application version.
    pub version: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from((Ipv4Addr::LOCALHOST, DEFAULT_PORT)),
            app_name: DEFAULT_APP_NAME.to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}

impl ApiConfig {
    /// Default configuration bound to `bind_addr`.
    pub fn with_bind_addr(bind_addr: SocketAddr) -> Self {
        Self {
            bind_addr,
            ..Self::default()
        }
    }
}
