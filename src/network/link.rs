//! Network link abstraction

use crate::config::NetworkCredentials;
use anyhow::{anyhow, Result};
use async_trait::async_trait;
use std::net::{IpAddr, SocketAddr};
use tokio::net::UdpSocket;

/// Address used to pick the outbound interface; nothing is ever sent to it
pub const DEFAULT_PROBE_ADDRESS: &str = "1.1.1.1:53";

/// Something that can put the node on a network
#[async_trait]
pub trait NetworkLink: Send + Sync {
    /// Attempt to join, returning the assigned local address on success
    async fn join(&self, credentials: &NetworkCredentials) -> Result<IpAddr>;

    /// Human-readable name for this link
    fn name(&self) -> &'static str;
}

/// Link for hosts whose network is managed by the OS.
///
/// Joining means waiting until the OS has a route out; the local address is
/// the source address the kernel picks for that route.
pub struct HostNetworkLink {
    probe: SocketAddr,
}

impl HostNetworkLink {
    pub fn new(probe: SocketAddr) -> Self {
        Self { probe }
    }
}

impl Default for HostNetworkLink {
    fn default() -> Self {
        Self {
            probe: DEFAULT_PROBE_ADDRESS
                .parse()
                .unwrap_or_else(|_| SocketAddr::from(([1, 1, 1, 1], 53))),
        }
    }
}

#[async_trait]
impl NetworkLink for HostNetworkLink {
    async fn join(&self, _credentials: &NetworkCredentials) -> Result<IpAddr> {
        let bind: SocketAddr = if self.probe.is_ipv4() {
            SocketAddr::from(([0, 0, 0, 0], 0))
        } else {
            SocketAddr::from(([0u16; 8], 0))
        };
        let socket = UdpSocket::bind(bind).await?;
        socket.connect(self.probe).await?;

        let local = socket.local_addr()?.ip();
        if local.is_unspecified() {
            return Err(anyhow!("no address assigned yet"));
        }
        Ok(local)
    }

    fn name(&self) -> &'static str {
        "Host"
    }
}
