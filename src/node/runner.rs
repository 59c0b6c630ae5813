//! Actuator node with a single-threaded receive/beacon loop

use crate::actuator::ActuatorOutput;
use crate::beacon::BeaconEmitter;
use crate::command::{CommandRouter, RouteOutcome};
use crate::config::NodeConfig;
use crate::transport::DatagramTransport;
use actuator_shared::{ActuatorState, BeaconMessage, InboundCommand};
use bytes::Bytes;
use std::net::SocketAddr;
use tracing::{debug, info};

/// The node: transport, output, router, beacon and the actuator flag
pub struct ActuatorNode<T, A> {
    transport: T,
    output: A,
    router: CommandRouter,
    beacon: BeaconEmitter,
    state: ActuatorState,
    recv_buffer_size: usize,
}

impl<T, A> ActuatorNode<T, A>
where
    T: DatagramTransport,
    A: ActuatorOutput,
{
    /// Create a node and drive the output to the initial Disengaged level.
    ///
    /// `config` is expected to have passed [`NodeConfig::validate`].
    pub fn new(config: &NodeConfig, transport: T, mut output: A) -> Self {
        let state = ActuatorState::new();
        output.set(state.level());
        info!("Actuator output {} initialized: {}", output.name(), state.level());

        let beacon = BeaconEmitter::new(
            BeaconMessage::new(Bytes::from_static(config.beacon_payload.as_bytes())),
            config.beacon_destination(),
            config.beacon_interval,
        );

        Self {
            transport,
            output,
            router: CommandRouter::new(config.service_port),
            beacon,
            state,
            recv_buffer_size: config.recv_buffer_size,
        }
    }

    pub fn state(&self) -> &ActuatorState {
        &self.state
    }

    pub fn output(&self) -> &A {
        &self.output
    }

    pub fn beacon(&self) -> &BeaconEmitter {
        &self.beacon
    }

    /// Route one datagram: update the flag, drive the output, send the reply.
    ///
    /// A failed reply send is dropped silently.
    pub async fn handle_datagram(&mut self, payload: Bytes, sender: SocketAddr) -> RouteOutcome {
        let command = InboundCommand::new(payload, sender);
        let outcome = self.router.handle(&mut self.state, &command);

        if let Some(level) = outcome.transition.target() {
            self.output.set(level);
        }

        let _ = self
            .transport
            .send_to(outcome.feedback.as_bytes(), outcome.destination)
            .await;

        outcome
    }

    /// Run until the process is terminated
    pub async fn run(mut self) {
        info!(
            "Node running on {} (beacon every {:?} to {})",
            self.transport.name(),
            self.beacon.period(),
            self.beacon.destination()
        );

        let mut ticker = self.beacon.ticker();
        let mut read_buf = vec![0u8; self.recv_buffer_size];

        loop {
            tokio::select! {
                _ = ticker.tick() => {
                    self.beacon.emit(&self.transport).await;
                }

                result = self.transport.recv_from(&mut read_buf) => {
                    match result {
                        Ok((n, sender)) => {
                            debug!("Datagram: {} byte(s) from {}", n, sender);
                            let payload = Bytes::copy_from_slice(&read_buf[..n]);
                            self.handle_datagram(payload, sender).await;
                        }
                        Err(_) => {
                            // Receive errors (e.g. ICMP unreachable) are not reported
                        }
                    }
                }
            }
        }
    }
}
