use zbus::message::Header;
use zbus::object_server::SignalEmitter;
use zbus::{ObjectServer, fdo, interface};

use crate::bus::interface::AddressBook;
use crate::bus::signals::ContactSignals;
use crate::domain::types::ContactChange;
use crate::error::AddressBookError;

/// Lets a test suite drive the mock over the bus: trigger the daemon's
/// signals and inspect which source ids are still known.
///
/// Exported next to [`AddressBook`] on the same object path; signals go out
/// on the main interface, not on this one.
#[derive(Debug, Default)]
pub struct MockControl;

impl MockControl {
    async fn emit(
        emitter: SignalEmitter<'_>,
        change: ContactChange,
        contacts: Vec<String>,
    ) -> fdo::Result<()> {
        ContactSignals::new(emitter)
            .contacts_changed(change, &contacts)
            .await
            .map_err(Into::into)
    }
}

#[interface(name = "com.canonical.pim.AddressBook.Mock")]
impl MockControl {
    async fn emit_ready_changed(
        &self,
        #[zbus(signal_emitter)] emitter: SignalEmitter<'_>,
    ) -> fdo::Result<()> {
        ContactSignals::new(emitter)
            .ready_changed()
            .await
            .map_err(Into::into)
    }

    async fn emit_contacts_added(
        &self,
        #[zbus(signal_emitter)] emitter: SignalEmitter<'_>,
        contacts: Vec<String>,
    ) -> fdo::Result<()> {
        Self::emit(emitter, ContactChange::Added, contacts).await
    }

    async fn emit_contacts_removed(
        &self,
        #[zbus(signal_emitter)] emitter: SignalEmitter<'_>,
        contacts: Vec<String>,
    ) -> fdo::Result<()> {
        Self::emit(emitter, ContactChange::Removed, contacts).await
    }

    async fn emit_contacts_updated(
        &self,
        #[zbus(signal_emitter)] emitter: SignalEmitter<'_>,
        contacts: Vec<String>,
    ) -> fdo::Result<()> {
        Self::emit(emitter, ContactChange::Updated, contacts).await
    }

    /// Source ids the main object still knows, sorted.
    async fn known_source_ids(
        &self,
        #[zbus(object_server)] server: &ObjectServer,
        #[zbus(header)] header: Header<'_>,
    ) -> fdo::Result<Vec<String>> {
        let path = header
            .path()
            .ok_or_else(|| fdo::Error::InvalidArgs("method call without object path".to_owned()))?;
        let book = server
            .interface::<_, AddressBook>(path.as_str())
            .await
            .map_err(AddressBookError::from)?;
        let ids = book
            .get()
            .await
            .registry()
            .source_ids()
            .map(str::to_owned)
            .collect();
        Ok(ids)
    }
}
