use tracing::debug;
use zbus::interface;
use zbus::object_server::SignalEmitter;

use crate::bus::MAIN_INTERFACE;
use crate::domain::registry::SourceRegistry;
use crate::domain::types::SourceRecord;

/// The only property the daemon publishes.
pub const IS_READY: &str = "isReady";

/// Stand-in for the daemon's main object.
#[derive(Debug, Default)]
pub struct AddressBook {
    registry: SourceRegistry,
}

impl AddressBook {
    pub fn new(registry: SourceRegistry) -> Self {
        Self { registry }
    }

    pub fn registry(&self) -> &SourceRegistry {
        &self.registry
    }

    /// Property lookup as the daemon answers it: `isReady` on the main
    /// interface is always `true`, anything else is `None`.
    pub fn get_property(&self, interface_name: &str, property_name: &str) -> Option<bool> {
        (interface_name == MAIN_INTERFACE && property_name == IS_READY).then_some(true)
    }
}

#[interface(name = "com.canonical.pim.AddressBook")]
impl AddressBook {
    #[zbus(name = "availableSources")]
    async fn available_sources(&self) -> Vec<SourceRecord> {
        self.registry.available_sources().to_vec()
    }

    #[zbus(name = "removeSource")]
    async fn remove_source(&mut self, source_id: &str) -> bool {
        let removed = self.registry.remove_source(source_id);
        debug!(source_id, removed, "removeSource");
        removed
    }

    #[zbus(property, name = "isReady")]
    async fn is_ready(&self) -> bool {
        self.get_property(MAIN_INTERFACE, IS_READY).unwrap_or_default()
    }

    #[zbus(signal, name = "readyChanged")]
    pub async fn ready_changed(emitter: &SignalEmitter<'_>) -> zbus::Result<()>;

    #[zbus(signal, name = "contactsAdded")]
    pub async fn contacts_added(
        emitter: &SignalEmitter<'_>,
        contacts: &[String],
    ) -> zbus::Result<()>;

    #[zbus(signal, name = "contactsRemoved")]
    pub async fn contacts_removed(
        emitter: &SignalEmitter<'_>,
        contacts: &[String],
    ) -> zbus::Result<()>;

    #[zbus(signal, name = "contactsUpdated")]
    pub async fn contacts_updated(
        emitter: &SignalEmitter<'_>,
        contacts: &[String],
    ) -> zbus::Result<()>;
}
