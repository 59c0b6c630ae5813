//! Command routing for the actuator node
//!
//! This module handles:
//! - Normalizing and classifying one inbound datagram
//! - Applying the resulting actuator transition
//! - Building the feedback reply and its destination

mod router;

pub use router::{CommandRouter, RouteOutcome};
