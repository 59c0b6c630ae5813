//! UDP transport implementation for the service socket

use crate::transport::traits::DatagramTransport;
use anyhow::{Context, Result};
use async_trait::async_trait;
use std::net::SocketAddr;
use tokio::net::UdpSocket;

/// Service socket wrapper implementing DatagramTransport
pub struct UdpTransport {
    inner: UdpSocket,
}

impl UdpTransport {
    fn new(socket: UdpSocket) -> Self {
        Self { inner: socket }
    }

    /// Bind the service socket with broadcast enabled
    pub async fn bind(address: SocketAddr) -> Result<Self> {
        let socket = UdpSocket::bind(address)
            .await
            .with_context(|| format!("failed to bind UDP socket on {}", address))?;
        socket
            .set_broadcast(true)
            .context("failed to enable SO_BROADCAST")?;
        Ok(Self::new(socket))
    }

    pub fn local_addr(&self) -> Result<SocketAddr> {
        Ok(self.inner.local_addr()?)
    }
}

#[async_trait]
impl DatagramTransport for UdpTransport {
    async fn recv_from(&self, buf: &mut [u8]) -> Result<(usize, SocketAddr)> {
        Ok(self.inner.recv_from(buf).await?)
    }

    async fn send_to(&self, payload: &[u8], target: SocketAddr) -> Result<usize> {
        Ok(self.inner.send_to(payload, target).await?)
    }

    async fn broadcast(&self, payload: &[u8], target: SocketAddr) -> Result<usize> {
        Ok(self.inner.send_to(payload, target).await?)
    }

    fn name(&self) -> &'static str {
        "UDP"
    }
}
