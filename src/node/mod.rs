//! Node event loop
//!
//! One cooperative loop owns the actuator state and multiplexes:
//! - inbound datagrams, each routed to completion before the next is read
//! - the beacon ticker

mod runner;

pub use runner::ActuatorNode;
