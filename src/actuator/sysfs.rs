//! Linux sysfs GPIO output
//!
//! The pin is exported and switched to `out` when opened. With `active_low`
//! set (the on-board LED case) Engaged drives the line low.

use super::ActuatorOutput;
use actuator_shared::ActuatorLevel;
use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Root of the sysfs GPIO class
pub const SYSFS_GPIO_ROOT: &str = "/sys/class/gpio";

/// One exported GPIO line
#[derive(Debug)]
pub struct SysfsGpioOutput {
    pin: u32,
    active_low: bool,
    value_path: PathBuf,
}

impl SysfsGpioOutput {
    /// Export `pin` under the system sysfs root
    pub fn open(pin: u32, active_low: bool) -> Result<Self> {
        Self::open_at(Path::new(SYSFS_GPIO_ROOT), pin, active_low)
    }

    /// Export `pin` under an explicit sysfs root
    pub fn open_at(root: &Path, pin: u32, active_low: bool) -> Result<Self> {
        let pin_dir = root.join(format!("gpio{}", pin));

        if !pin_dir.exists() {
            fs::write(root.join("export"), pin.to_string())
                .with_context(|| format!("failed to export GPIO {}", pin))?;
        }

        fs::write(pin_dir.join("direction"), "out")
            .with_context(|| format!("failed to set GPIO {} direction", pin))?;

        debug!("[OUTPUT] GPIO {} ready (active_low={})", pin, active_low);

        Ok(Self {
            pin,
            active_low,
            value_path: pin_dir.join("value"),
        })
    }

    /// Raw line value for a logical level
    fn line_value(&self, level: ActuatorLevel) -> &'static str {
        if level.is_engaged() != self.active_low {
            "1"
        } else {
            "0"
        }
    }
}

impl ActuatorOutput for SysfsGpioOutput {
    fn set(&mut self, level: ActuatorLevel) {
        let value = self.line_value(level);
        if let Err(e) = fs::write(&self.value_path, value) {
            warn!("[OUTPUT] GPIO {} write failed: {}", self.pin, e);
        }
    }

    fn name(&self) -> &'static str {
        "SysfsGpio"
    }
}
