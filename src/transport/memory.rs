//! In-process datagram transport for driving the node without sockets

use crate::transport::traits::DatagramTransport;
use anyhow::{anyhow, Result};
use async_trait::async_trait;
use bytes::Bytes;
use std::net::SocketAddr;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tokio::sync::{mpsc, Mutex};

/// A datagram the node handed to the transport
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SentDatagram {
    pub payload: Bytes,
    pub target: SocketAddr,
    pub broadcast: bool,
}

/// Node side of the in-memory link
pub struct MemoryTransport {
    inbound_rx: Mutex<mpsc::UnboundedReceiver<(Bytes, SocketAddr)>>,
    sent_tx: mpsc::UnboundedSender<SentDatagram>,
    fail_sends: Arc<AtomicBool>,
}

/// Test side of the in-memory link
pub struct MemoryPeer {
    inbound_tx: mpsc::UnboundedSender<(Bytes, SocketAddr)>,
    sent_rx: mpsc::UnboundedReceiver<SentDatagram>,
    fail_sends: Arc<AtomicBool>,
}

impl MemoryTransport {
    /// Create a connected transport/peer pair
    pub fn pair() -> (MemoryTransport, MemoryPeer) {
        let (inbound_tx, inbound_rx) = mpsc::unbounded_channel();
        let (sent_tx, sent_rx) = mpsc::unbounded_channel();
        let fail_sends = Arc::new(AtomicBool::new(false));

        let transport = MemoryTransport {
            inbound_rx: Mutex::new(inbound_rx),
            sent_tx,
            fail_sends: fail_sends.clone(),
        };
        let peer = MemoryPeer {
            inbound_tx,
            sent_rx,
            fail_sends,
        };
        (transport, peer)
    }

    fn record(&self, payload: &[u8], target: SocketAddr, broadcast: bool) -> Result<usize> {
        if self.fail_sends.load(Ordering::SeqCst) {
            return Err(anyhow!("Network unreachable"));
        }
        self.sent_tx
            .send(SentDatagram {
                payload: Bytes::copy_from_slice(payload),
                target,
                broadcast,
            })
            .map_err(|_| anyhow!("Peer dropped"))?;
        Ok(payload.len())
    }
}

impl MemoryPeer {
    /// Deliver a datagram to the node as if it came from `from`
    pub fn inject(&self, payload: impl Into<Bytes>, from: SocketAddr) {
        let _ = self.inbound_tx.send((payload.into(), from));
    }

    /// Wait for the next datagram the node sent
    pub async fn next_sent(&mut self) -> Option<SentDatagram> {
        self.sent_rx.recv().await
    }

    /// Everything the node has sent so far, without waiting
    pub fn drain_sent(&mut self) -> Vec<SentDatagram> {
        let mut sent = Vec::new();
        while let Ok(datagram) = self.sent_rx.try_recv() {
            sent.push(datagram);
        }
        sent
    }

    /// Make every subsequent send fail
    pub fn set_send_failure(&self, fail: bool) {
        self.fail_sends.store(fail, Ordering::SeqCst);
    }
}

#[async_trait]
impl DatagramTransport for MemoryTransport {
    async fn recv_from(&self, buf: &mut [u8]) -> Result<(usize, SocketAddr)> {
        let mut inbound = self.inbound_rx.lock().await;
        match inbound.recv().await {
            Some((payload, from)) => {
                // Same truncation a UDP socket applies to a short buffer
                let n = payload.len().min(buf.len());
                buf[..n].copy_from_slice(&payload[..n]);
                Ok((n, from))
            }
            // A closed peer behaves like a silent network
            None => std::future::pending().await,
        }
    }

    async fn send_to(&self, payload: &[u8], target: SocketAddr) -> Result<usize> {
        self.record(payload, target, false)
    }

    async fn broadcast(&self, payload: &[u8], target: SocketAddr) -> Result<usize> {
        self.record(payload, target, true)
    }

    fn name(&self) -> &'static str {
        "Memory"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn addr(s: &str) -> SocketAddr {
        s.parse().unwrap()
    }

    #[tokio::test]
    async fn test_inject_and_record() {
        let (transport, mut peer) = MemoryTransport::pair();
        peer.inject(&b"OFF"[..], addr("10.0.0.9:4000"));

        let mut buf = [0u8; 8];
        let (n, from) = transport.recv_from(&mut buf).await.unwrap();
        assert_eq!(&buf[..n], b"OFF");
        assert_eq!(from, addr("10.0.0.9:4000"));

        transport.send_to(b"x", addr("10.0.0.9:1234")).await.unwrap();
        let sent = peer.next_sent().await.unwrap();
        assert_eq!(sent.payload, Bytes::from_static(b"x"));
        assert!(!sent.broadcast);
    }

    #[tokio::test]
    async fn test_short_buffer_truncates() {
        let (transport, peer) = MemoryTransport::pair();
        peer.inject(&b"ABCDEF"[..], addr("10.0.0.9:4000"));

        let mut buf = [0u8; 3];
        let (n, _) = transport.recv_from(&mut buf).await.unwrap();
        assert_eq!(&buf[..n], b"ABC");
    }

    #[tokio::test]
    async fn test_send_failure() {
        let (transport, mut peer) = MemoryTransport::pair();
        peer.set_send_failure(true);
        assert!(transport
            .broadcast(b"x", addr("255.255.255.255:1234"))
            .await
            .is_err());
        assert!(peer.drain_sent().is_empty());
    }
}
