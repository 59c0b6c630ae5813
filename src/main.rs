use actuator_node::actuator::open_output;
use actuator_node::network::{join_network, HostNetworkLink};
use actuator_node::transport::UdpTransport;
use actuator_node::{ActuatorNode, NodeConfig};
use anyhow::Context;

use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into()))
        .init();

    let config = NodeConfig::default();
    config.validate().context("invalid node configuration")?;

    let output = open_output(config.output).context("failed to open actuator output")?;

    info!("=== [ACTUATOR NODE {} READY] ===", env!("CARGO_PKG_VERSION"));

    let link = HostNetworkLink::default();
    join_network(&link, &config.credentials, config.join_retry_delay).await;

    let transport = UdpTransport::bind(config.listen_address()).await?;
    info!("[INFO] Listening on UDP port {}", config.service_port);

    ActuatorNode::new(&config, transport, output).run().await;

    Ok(())
}
