use tracing::info;
use zbus::Connection;
use zbus::connection::Builder;

use crate::bus::control::MockControl;
use crate::bus::interface::AddressBook;
use crate::config::{AddressBookConfig, BusKind};
use crate::error::AddressBookError;

/// Export the mock's objects on `object_path` of a connection under construction.
pub fn install<'a>(builder: Builder<'a>, object_path: &str) -> zbus::Result<Builder<'a>> {
    builder
        .serve_at(object_path.to_owned(), AddressBook::default())?
        .serve_at(object_path.to_owned(), MockControl)
}

/// Connect to the configured bus, export the mock and take its well-known name.
///
/// The name is held for as long as the returned connection lives.
pub async fn serve(config: &AddressBookConfig) -> Result<Connection, AddressBookError> {
    let builder = match config.addressbook_bus {
        BusKind::Session => Builder::session()?,
        BusKind::System => Builder::system()?,
    };

    let connection = install(builder, &config.addressbook_object_path)?
        .name(config.addressbook_bus_name.clone())?
        .build()
        .await?;

    info!(
        bus = ?config.addressbook_bus,
        name = %config.addressbook_bus_name,
        path = %config.addressbook_object_path,
        "address book mock registered"
    );
    Ok(connection)
}
