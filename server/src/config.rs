//! Server configuration

use std::net::SocketAddr;
use std::sync::Arc;

use crate::routes::SharedStore;
use crate::store::MemoryStore;

#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Address to bind to (default: 127.0.0.1:3000)
    pub bind_addr: SocketAddr,

    /// Start with the three seed records (default: true)
    pub seed: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([127, 0, 0, 1], 3000)),
            seed: true,
        }
    }
}

impl ServerConfig {
    /// Fresh in-memory store for this configuration.
    pub fn store(&self) -> SharedStore {
        if self.seed {
            Arc::new(MemoryStore::seeded())
        } else {
            Arc::new(MemoryStore::new())
        }
    }
}
