//! Beacon Emitter
//!
//! The emitter does not own a task: the node polls its ticker next to the
//! receive path, so a pending beacon never delays a datagram.

use crate::transport::DatagramTransport;
use actuator_shared::BeaconMessage;
use std::net::SocketAddr;
use tokio::time::{interval_at, Duration, Instant, Interval, MissedTickBehavior};
use tracing::debug;

/// Sends the liveness beacon
#[derive(Debug, Clone)]
pub struct BeaconEmitter {
    message: BeaconMessage,
    destination: SocketAddr,
    period: Duration,
    emitted: u64,
}

impl BeaconEmitter {
    /// Create an emitter. `period` must be non-zero.
    pub fn new(message: BeaconMessage, destination: SocketAddr, period: Duration) -> Self {
        Self {
            message,
            destination,
            period,
            emitted: 0,
        }
    }

    /// Ticker whose first tick is one full period from now
    pub fn ticker(&self) -> Interval {
        let mut ticker = interval_at(Instant::now() + self.period, self.period);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
        ticker
    }

    /// Broadcast one beacon. Failures are ignored; the next tick retries.
    pub async fn emit<T: DatagramTransport + ?Sized>(&mut self, transport: &T) {
        self.emitted += 1;
        debug!("[BEACON] #{} -> {}", self.emitted, self.destination);
        let _ = transport
            .broadcast(self.message.as_bytes(), self.destination)
            .await;
    }

    /// Beacons attempted so far, delivered or not
    pub fn emitted(&self) -> u64 {
        self.emitted
    }

    pub fn destination(&self) -> SocketAddr {
        self.destination
    }

    pub fn period(&self) -> Duration {
        self.period
    }
}
