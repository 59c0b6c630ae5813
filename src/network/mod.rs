//! Network join
//!
//! The node needs an address before it can listen. Joining is delegated to a
//! [`NetworkLink`]; [`join_network`] keeps retrying until one is assigned.

mod link;

pub use link::{HostNetworkLink, NetworkLink, DEFAULT_PROBE_ADDRESS};

use crate::config::NetworkCredentials;
use std::net::IpAddr;
use std::time::Duration;
use tracing::{debug, info};

/// Join the network, retrying every `retry_delay` until an address is assigned
pub async fn join_network<L: NetworkLink + ?Sized>(
    link: &L,
    credentials: &NetworkCredentials,
    retry_delay: Duration,
) -> IpAddr {
    info!("Joining network '{}' via {}", credentials.ssid, link.name());

    let mut attempt: u64 = 0;
    loop {
        attempt += 1;
        match link.join(credentials).await {
            Ok(address) => {
                info!("[OK] Network joined after {} attempt(s)", attempt);
                info!("  Local address: {}", address);
                return address;
            }
            Err(e) => {
                debug!("  Join attempt {} pending: {}", attempt, e);
                tokio::time::sleep(retry_delay).await;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::{anyhow, Result};
    use async_trait::async_trait;
    use std::net::Ipv4Addr;
    use std::sync::atomic::{AtomicU32, Ordering};

    /// Fails a fixed number of times before handing out an address
    struct FlakyLink {
        failures_left: AtomicU32,
        attempts: AtomicU32,
    }

    #[async_trait]
    impl NetworkLink for FlakyLink {
        async fn join(&self, _credentials: &NetworkCredentials) -> Result<IpAddr> {
            self.attempts.fetch_add(1, Ordering::SeqCst);
            if self.failures_left.load(Ordering::SeqCst) > 0 {
                self.failures_left.fetch_sub(1, Ordering::SeqCst);
                return Err(anyhow!("not associated"));
            }
            Ok(IpAddr::V4(Ipv4Addr::new(10, 53, 242, 234)))
        }

        fn name(&self) -> &'static str {
            "Flaky"
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_join_retries_until_address() {
        let link = FlakyLink {
            failures_left: AtomicU32::new(3),
            attempts: AtomicU32::new(0),
        };
        let start = tokio::time::Instant::now();

        let address = join_network(
            &link,
            &NetworkCredentials::default(),
            Duration::from_millis(500),
        )
        .await;

        assert_eq!(address, IpAddr::V4(Ipv4Addr::new(10, 53, 242, 234)));
        assert_eq!(link.attempts.load(Ordering::SeqCst), 4);
        let waited = start.elapsed();
        assert!(waited >= Duration::from_millis(1500) && waited < Duration::from_millis(2000));
    }
}
