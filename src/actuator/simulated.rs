//! In-memory output for hosts without GPIO

use super::ActuatorOutput;
use actuator_shared::ActuatorLevel;
use tracing::info;

/// Tracks the driven level and logs every write
#[derive(Debug, Default)]
pub struct SimulatedOutput {
    level: Option<ActuatorLevel>,
    writes: Vec<ActuatorLevel>,
}

impl SimulatedOutput {
    pub fn new() -> Self {
        Self::default()
    }

    /// Last level written, `None` before the first write
    pub fn level(&self) -> Option<ActuatorLevel> {
        self.level
    }

    /// Every level written, oldest first
    pub fn writes(&self) -> &[ActuatorLevel] {
        &self.writes
    }
}

impl ActuatorOutput for SimulatedOutput {
    fn set(&mut self, level: ActuatorLevel) {
        info!("[OUTPUT] Simulated output -> {}", level);
        self.level = Some(level);
        self.writes.push(level);
    }

    fn name(&self) -> &'static str {
        "Simulated"
    }
}
