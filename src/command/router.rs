//! Command router - classifies datagrams and routes the feedback

use actuator_shared::{
    ActuatorState, Command, FeedbackMessage, InboundCommand, Transition,
};
use std::net::SocketAddr;
use tracing::{info, warn};

/// Everything one datagram produced
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteOutcome {
    /// State change applied to the actuator flag
    pub transition: Transition,
    /// Reply text
    pub feedback: FeedbackMessage,
    /// Where the reply goes
    pub destination: SocketAddr,
}

/// Routes inbound commands. Pure apart from logging: the caller performs the
/// output write and the reply send.
#[derive(Debug, Clone)]
pub struct CommandRouter {
    reply_port: u16,
}

impl CommandRouter {
    /// Create a router replying on `reply_port`
    pub fn new(reply_port: u16) -> Self {
        Self { reply_port }
    }

    /// Classify one datagram, update `state` and build the reply
    pub fn handle(&self, state: &mut ActuatorState, command: &InboundCommand) -> RouteOutcome {
        let classified = command.classify();
        let transition = state.apply(&classified);

        match &classified {
            Command::On => info!("[EVENT] ON command executed"),
            Command::Off => info!("[EVENT] OFF command executed"),
            Command::Unrecognized(text) => warn!(
                "[WARN] Unknown command {:?} received from {}",
                text, command.sender_address
            ),
        }

        RouteOutcome {
            transition,
            feedback: FeedbackMessage::for_command(&classified),
            destination: self.reply_destination(command.sender_address),
        }
    }

    /// Sender's IP on the service port. The source port is ignored: mobile
    /// clients only listen on the port they bound, which is the service port.
    pub fn reply_destination(&self, sender: SocketAddr) -> SocketAddr {
        SocketAddr::new(sender.ip(), self.reply_port)
    }
}
