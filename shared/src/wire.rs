//! Outbound wire messages
//!
//! Every outbound datagram is plain text, one byte per character:
//! ```text
//! >> FEEDBACK : ACTION ALLUMAGE VALIDEE\n
//! >> FEEDBACK : ACTION EXTINCTION VALIDEE\n
//! !! ALERTE : COMMANDE [<trimmed input>] REJETEE\n
//! SERVICE_BEACON : ESP-01_NOD_ACTIVE\n
//! ```

use crate::{protocol, Command};
use bytes::{BufMut, Bytes, BytesMut};

/// Reply to exactly one inbound command
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedbackMessage {
    bytes: Bytes,
}

impl FeedbackMessage {
    /// Build the reply for a classified command
    pub fn for_command(command: &Command) -> Self {
        let bytes = match command {
            Command::On => Bytes::from_static(protocol::FEEDBACK_ON.as_bytes()),
            Command::Off => Bytes::from_static(protocol::FEEDBACK_OFF.as_bytes()),
            Command::Unrecognized(text) => {
                let mut buf = BytesMut::with_capacity(
                    protocol::REJECTION_PREFIX.len()
                        + text.len()
                        + protocol::REJECTION_SUFFIX.len(),
                );
                buf.put_slice(protocol::REJECTION_PREFIX.as_bytes());
                encode_latin1(text, &mut buf);
                buf.put_slice(protocol::REJECTION_SUFFIX.as_bytes());
                buf.freeze()
            }
        };
        Self { bytes }
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }
}

/// Periodic liveness broadcast
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BeaconMessage {
    bytes: Bytes,
}

impl BeaconMessage {
    pub fn new(payload: impl Into<Bytes>) -> Self {
        Self {
            bytes: payload.into(),
        }
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }
}

impl Default for BeaconMessage {
    fn default() -> Self {
        Self::new(Bytes::from_static(protocol::BEACON_PAYLOAD.as_bytes()))
    }
}

/// Chars above U+00FF cannot come from a decoded datagram; they become `?`
fn encode_latin1(text: &str, buf: &mut BytesMut) {
    for c in text.chars() {
        buf.put_u8(u8::try_from(u32::from(c)).unwrap_or(b'?'));
    }
}
