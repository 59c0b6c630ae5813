//! Actuator State Machine
//!
//! Two states, Disengaged and Engaged. `ON` forces Engaged, `OFF` forces
//! Disengaged, anything else is a self-loop.

use crate::Command;

/// Logical level of the actuator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ActuatorLevel {
    /// Circuit open ("off")
    #[default]
    Disengaged,
    /// Circuit closed ("on")
    Engaged,
}

impl ActuatorLevel {
    pub fn is_engaged(self) -> bool {
        matches!(self, ActuatorLevel::Engaged)
    }
}

impl std::fmt::Display for ActuatorLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ActuatorLevel::Disengaged => write!(f, "disengaged"),
            ActuatorLevel::Engaged => write!(f, "engaged"),
        }
    }
}

/// Result of applying a command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// The command set the level (possibly to the level it already had)
    Set { from: ActuatorLevel, to: ActuatorLevel },
    /// Rejected command, level untouched
    Unchanged(ActuatorLevel),
}

impl Transition {
    /// Level after the transition
    pub fn level(&self) -> ActuatorLevel {
        match *self {
            Transition::Set { to, .. } => to,
            Transition::Unchanged(level) => level,
        }
    }

    /// Level to drive onto the output, if any
    pub fn target(&self) -> Option<ActuatorLevel> {
        match *self {
            Transition::Set { to, .. } => Some(to),
            Transition::Unchanged(_) => None,
        }
    }
}

/// Process-wide actuator state, owned by the event loop
#[derive(Debug, Default)]
pub struct ActuatorState {
    level: ActuatorLevel,
}

impl ActuatorState {
    /// Create a new state in Disengaged
    pub fn new() -> Self {
        Self::default()
    }

    pub fn level(&self) -> ActuatorLevel {
        self.level
    }

    pub fn is_engaged(&self) -> bool {
        self.level.is_engaged()
    }

    /// Apply a classified command and return the transition
    pub fn apply(&mut self, command: &Command) -> Transition {
        let from = self.level;
        let to = match command {
            Command::On => ActuatorLevel::Engaged,
            Command::Off => ActuatorLevel::Disengaged,
            Command::Unrecognized(_) => return Transition::Unchanged(from),
        };
        self.level = to;
        Transition::Set { from, to }
    }
}
