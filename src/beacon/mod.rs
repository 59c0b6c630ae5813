//! Beacon Module
//!
//! Periodically broadcasts a fixed liveness message on the service port.

mod emitter;

pub use emitter::BeaconEmitter;
