//! Node configuration
//!
//! There is no configuration file and there are no CLI flags: every value
//! comes from a compile-time constant through [`NodeConfig::default`].

use actuator_shared::protocol;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::time::Duration;
use thiserror::Error;

/// Network name the node joins at startup
pub const NETWORK_SSID: &str = "actuator-net";

/// Network passphrase
pub const NETWORK_PASSPHRASE: &str = "change-me-before-flashing";

/// Delay between network join attempts
pub const JOIN_RETRY_DELAY: Duration = Duration::from_millis(500);

/// GPIO line of the on-board LED (active low)
pub const DEFAULT_GPIO_PIN: u32 = 2;

/// Errors reported by [`NodeConfig::validate`]
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Service port must not be 0")]
    ZeroServicePort,

    #[error("Beacon interval must be greater than zero")]
    ZeroBeaconInterval,

    #[error("Beacon payload must not be empty")]
    EmptyBeaconPayload,

    #[error("Receive buffer must hold at least one byte")]
    EmptyReceiveBuffer,
}

/// Credentials handed to the network link
#[derive(Clone)]
pub struct NetworkCredentials {
    pub ssid: String,
    pub passphrase: String,
}

impl std::fmt::Debug for NetworkCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NetworkCredentials")
            .field("ssid", &self.ssid)
            .field("passphrase", &"<redacted>")
            .finish()
    }
}

impl Default for NetworkCredentials {
    fn default() -> Self {
        Self {
            ssid: NETWORK_SSID.into(),
            passphrase: NETWORK_PASSPHRASE.into(),
        }
    }
}

/// Which actuator output backs the node
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputConfig {
    /// In-memory output that only logs (for development)
    Simulated,
    /// Linux sysfs GPIO line
    SysfsGpio { pin: u32, active_low: bool },
}

impl OutputConfig {
    /// The on-board active-low LED
    pub const fn onboard_led() -> Self {
        OutputConfig::SysfsGpio {
            pin: DEFAULT_GPIO_PIN,
            active_low: true,
        }
    }
}

/// Output driven by the node: the on-board LED on Linux targets
#[cfg(target_os = "linux")]
pub const NODE_OUTPUT: OutputConfig = OutputConfig::onboard_led();

/// Output driven by the node: simulated where sysfs GPIO does not exist
#[cfg(not(target_os = "linux"))]
pub const NODE_OUTPUT: OutputConfig = OutputConfig::Simulated;

/// Configuration for the actuator node
#[derive(Debug, Clone)]
pub struct NodeConfig {
    /// Port for listening, replies and beacons
    pub service_port: u16,
    /// Local address the service socket binds to
    pub bind_address: IpAddr,
    /// Destination address of the beacon
    pub broadcast_address: IpAddr,
    /// Beacon period
    pub beacon_interval: Duration,
    /// Beacon payload
    pub beacon_payload: &'static str,
    /// Receive buffer size (datagrams longer than this are truncated by the OS)
    pub recv_buffer_size: usize,
    /// Network credentials
    pub credentials: NetworkCredentials,
    /// Delay between network join attempts
    pub join_retry_delay: Duration,
    /// Actuator output selection
    pub output: OutputConfig,
}

impl Default for NodeConfig {
    fn default() -> Self {
        Self {
            service_port: protocol::SERVICE_PORT,
            bind_address: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            broadcast_address: IpAddr::V4(Ipv4Addr::BROADCAST),
            beacon_interval: protocol::BEACON_INTERVAL,
            beacon_payload: protocol::BEACON_PAYLOAD,
            recv_buffer_size: protocol::MAX_DATAGRAM_SIZE,
            credentials: NetworkCredentials::default(),
            join_retry_delay: JOIN_RETRY_DELAY,
            output: NODE_OUTPUT,
        }
    }
}

impl NodeConfig {
    /// Check values that would otherwise panic or misroute at runtime
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.service_port == 0 {
            return Err(ConfigError::ZeroServicePort);
        }
        if self.beacon_interval.is_zero() {
            return Err(ConfigError::ZeroBeaconInterval);
        }
        if self.beacon_payload.is_empty() {
            return Err(ConfigError::EmptyBeaconPayload);
        }
        if self.recv_buffer_size == 0 {
            return Err(ConfigError::EmptyReceiveBuffer);
        }
        Ok(())
    }

    /// Address the service socket binds to
    pub fn listen_address(&self) -> SocketAddr {
        SocketAddr::new(self.bind_address, self.service_port)
    }

    /// Destination of every beacon
    pub fn beacon_destination(&self) -> SocketAddr {
        SocketAddr::new(self.broadcast_address, self.service_port)
    }
}
