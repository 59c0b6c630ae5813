#[cfg(test)]
pub mod memory;
pub mod traits;
pub mod udp;

#[cfg(test)]
pub use memory::{MemoryPeer, MemoryTransport, SentDatagram};
pub use traits::DatagramTransport;
pub use udp::UdpTransport;
