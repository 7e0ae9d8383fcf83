use tracing::info;
use zbus::Connection;
use zbus::object_server::SignalEmitter;

use crate::bus::interface::AddressBook;
use crate::domain::types::ContactChange;
use crate::error::AddressBookError;

/// Broadcasts the daemon's notification signals from one object path,
/// logging a diagnostic line before each emission.
pub struct ContactSignals<'s> {
    emitter: SignalEmitter<'s>,
}

impl<'s> ContactSignals<'s> {
    pub fn new(emitter: SignalEmitter<'s>) -> Self {
        Self { emitter }
    }

    pub fn for_object(
        connection: &Connection,
        object_path: &'s str,
    ) -> Result<Self, AddressBookError> {
        Ok(Self::new(SignalEmitter::new(connection, object_path)?))
    }

    pub async fn ready_changed(&self) -> Result<(), AddressBookError> {
        info!(signal = "readyChanged", "readyChanged called");
        AddressBook::ready_changed(&self.emitter).await?;
        Ok(())
    }

    pub async fn contacts_changed(
        &self,
        change: ContactChange,
        contacts: &[String],
    ) -> Result<(), AddressBookError> {
        let signal = change.signal_name();
        info!(signal, count = contacts.len(), "{signal} called");
        match change {
            ContactChange::Added => AddressBook::contacts_added(&self.emitter, contacts).await?,
            ContactChange::Removed => {
                AddressBook::contacts_removed(&self.emitter, contacts).await?
            }
            ContactChange::Updated => {
                AddressBook::contacts_updated(&self.emitter, contacts).await?
            }
        }
        Ok(())
    }
}
