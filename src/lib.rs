//! UDP actuator node
//!
//! Listens for `ON`/`OFF` text commands on the service port, drives one binary
//! output, replies to the sender on the service port and broadcasts a liveness
//! beacon every ten seconds.

pub mod actuator;
pub mod beacon;
pub mod command;
pub mod config;
pub mod network;
pub mod node;
pub mod transport;

pub use config::{ConfigError, NodeConfig, OutputConfig};
pub use node::ActuatorNode;
