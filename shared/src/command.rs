//! Inbound command decoding and classification
//!
//! Payloads are decoded one byte per character (Latin-1), trimmed of
//! surrounding ASCII whitespace and control characters, then matched
//! case-insensitively against the two keywords.

use crate::protocol;
use bytes::Bytes;
use std::net::SocketAddr;

/// One received datagram, consumed by the router and then dropped
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InboundCommand {
    pub raw_payload: Bytes,
    pub sender_address: SocketAddr,
}

impl InboundCommand {
    pub fn new(raw_payload: impl Into<Bytes>, sender_address: SocketAddr) -> Self {
        Self {
            raw_payload: raw_payload.into(),
            sender_address,
        }
    }

    /// Trimmed text with its original casing
    pub fn normalized_text(&self) -> String {
        normalize(&self.raw_payload)
    }

    /// Classify this datagram
    pub fn classify(&self) -> Command {
        Command::classify(&self.normalized_text())
    }
}

/// Classification of a normalized payload
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Engage the actuator
    On,
    /// Disengage the actuator
    Off,
    /// Anything else, holding the trimmed text for the rejection reply
    Unrecognized(String),
}

impl Command {
    /// Match already-normalized text against the keywords
    pub fn classify(text: &str) -> Self {
        if text.eq_ignore_ascii_case(protocol::KEYWORD_ON) {
            Command::On
        } else if text.eq_ignore_ascii_case(protocol::KEYWORD_OFF) {
            Command::Off
        } else {
            Command::Unrecognized(text.to_string())
        }
    }
}

/// Decode bytes as Latin-1 and trim ASCII whitespace and control characters.
///
/// Byte-wise, not locale-aware: 0xA0 (no-break space) is kept.
pub fn normalize(payload: &[u8]) -> String {
    let decoded: String = payload.iter().map(|&b| char::from(b)).collect();
    decoded
        .trim_matches(|c: char| c.is_ascii_whitespace() || c.is_control())
        .to_string()
}
