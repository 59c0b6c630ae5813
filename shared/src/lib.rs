//! Actuator Node Shared Protocol Types
//!
//! This crate provides the wire constants, command classification and the
//! actuator state machine used by the node and by anything that talks to it.

pub mod command;
pub mod state_machine;
pub mod wire;

pub use command::{Command, InboundCommand};
pub use state_machine::{ActuatorLevel, ActuatorState, Transition};
pub use wire::{BeaconMessage, FeedbackMessage};

/// Protocol parameters for the node
pub mod protocol {
    use std::time::Duration;

    /// Port used for listening, for every reply and for the beacon
    pub const SERVICE_PORT: u16 = 1234;

    /// Beacon period in seconds
    pub const BEACON_INTERVAL_SECS: u64 = 10;

    /// Beacon period as a duration
    pub const BEACON_INTERVAL: Duration = Duration::from_secs(BEACON_INTERVAL_SECS);

    /// Liveness beacon payload
    pub const BEACON_PAYLOAD: &str = "SERVICE_BEACON : ESP-01_NOD_ACTIVE\n";

    /// Keyword that engages the actuator
    pub const KEYWORD_ON: &str = "ON";

    /// Keyword that disengages the actuator
    pub const KEYWORD_OFF: &str = "OFF";

    /// Reply to an accepted `ON`
    pub const FEEDBACK_ON: &str = ">> FEEDBACK : ACTION ALLUMAGE VALIDEE\n";

    /// Reply to an accepted `OFF`
    pub const FEEDBACK_OFF: &str = ">> FEEDBACK : ACTION EXTINCTION VALIDEE\n";

    /// Prefix of a rejection reply, followed by the trimmed input
    pub const REJECTION_PREFIX: &str = "!! ALERTE : COMMANDE [";

    /// Suffix of a rejection reply
    pub const REJECTION_SUFFIX: &str = "] REJETEE\n";

    /// Largest UDP payload; receive buffers of this size never truncate
    pub const MAX_DATAGRAM_SIZE: usize = 65_535;
}
