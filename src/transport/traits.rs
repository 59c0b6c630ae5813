//! Transport trait abstraction for datagram backends

use anyhow::Result;
use async_trait::async_trait;
use std::net::SocketAddr;

/// A connectionless transport that can receive and send whole datagrams
#[async_trait]
pub trait DatagramTransport: Send + Sync {
    /// Wait for the next datagram, copying it into `buf`.
    ///
    /// Must be cancel-safe: the event loop races it against the beacon timer.
    async fn recv_from(&self, buf: &mut [u8]) -> Result<(usize, SocketAddr)>;

    /// Send one datagram to a unicast destination
    async fn send_to(&self, payload: &[u8], target: SocketAddr) -> Result<usize>;

    /// Send one datagram to a broadcast destination
    async fn broadcast(&self, payload: &[u8], target: SocketAddr) -> Result<usize>;

    /// Human-readable name for this transport
    fn name(&self) -> &'static str;
}
