//! Actuator outputs
//!
//! The node drives exactly one binary output. Outputs are write-only: there is
//! no feedback path from the hardware back into the router.

mod simulated;
mod sysfs;

pub use simulated::SimulatedOutput;
pub use sysfs::{SysfsGpioOutput, SYSFS_GPIO_ROOT};

use crate::config::OutputConfig;
use actuator_shared::ActuatorLevel;
use anyhow::Result;

/// A binary output the node can drive
pub trait ActuatorOutput: Send {
    /// Drive the output to `level`. Called synchronously from the event loop.
    fn set(&mut self, level: ActuatorLevel);

    /// Human-readable name for this output
    fn name(&self) -> &'static str;
}

impl<T: ActuatorOutput + ?Sized> ActuatorOutput for Box<T> {
    fn set(&mut self, level: ActuatorLevel) {
        (**self).set(level)
    }

    fn name(&self) -> &'static str {
        (**self).name()
    }
}

/// Open the output selected by the configuration
pub fn open_output(config: OutputConfig) -> Result<Box<dyn ActuatorOutput>> {
    match config {
        OutputConfig::Simulated => Ok(Box::new(SimulatedOutput::new())),
        OutputConfig::SysfsGpio { pin, active_low } => {
            Ok(Box::new(SysfsGpioOutput::open(pin, active_low)?))
        }
    }
}
