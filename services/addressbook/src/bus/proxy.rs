//! Typed clients for the mock, for Rust test suites talking to it.

use zbus::proxy;

use crate::domain::types::SourceRecord;

#[proxy(
    interface = "com.canonical.pim.AddressBook",
    default_service = "com.canonical.pim",
    default_path = "/com/canonical/pim/AddressBook",
    gen_blocking = false
)]
pub trait AddressBook {
    #[zbus(name = "availableSources")]
    fn available_sources(&self) -> zbus::Result<Vec<SourceRecord>>;

    #[zbus(name = "removeSource")]
    fn remove_source(&self, source_id: &str) -> zbus::Result<bool>;

    #[zbus(property, name = "isReady")]
    fn is_ready(&self) -> zbus::Result<bool>;

    #[zbus(signal, name = "readyChanged")]
    fn ready_changed(&self) -> zbus::Result<()>;

    #[zbus(signal, name = "contactsAdded")]
    fn contacts_added(&self, contacts: Vec<String>) -> zbus::Result<()>;

    #[zbus(signal, name = "contactsRemoved")]
    fn contacts_removed(&self, contacts: Vec<String>) -> zbus::Result<()>;

    #[zbus(signal, name = "contactsUpdated")]
    fn contacts_updated(&self, contacts: Vec<String>) -> zbus::Result<()>;
}

#[proxy(
    interface = "com.canonical.pim.AddressBook.Mock",
    default_service = "com.canonical.pim",
    default_path = "/com/canonical/pim/AddressBook",
    gen_blocking = false
)]
pub trait MockControl {
    fn emit_ready_changed(&self) -> zbus::Result<()>;

    fn emit_contacts_added(&self, contacts: &[&str]) -> zbus::Result<()>;

    fn emit_contacts_removed(&self, contacts: &[&str]) -> zbus::Result<()>;

    fn emit_contacts_updated(&self, contacts: &[&str]) -> zbus::Result<()>;

    fn known_source_ids(&self) -> zbus::Result<Vec<String>>;
}
