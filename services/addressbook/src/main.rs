use anyhow::Context;
use tracing::info;

use pim_addressbook::bus::server::serve;
use pim_addressbook::config::AddressBookConfig;
use pim_core::config::Config;
use pim_core::tracing::init_tracing;

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    init_tracing();

    let config = AddressBookConfig::from_env().context("failed to load configuration")?;

    let connection = serve(&config)
        .await
        .with_context(|| format!("failed to register {}", config.addressbook_bus_name))?;

    info!(
        unique_name = ?connection.unique_name(),
        "address book mock ready"
    );

    tokio::signal::ctrl_c()
        .await
        .context("failed to listen for shutdown signal")?;

    info!("address book mock stopping");
    drop(connection);
    Ok(())
}
