use serde::{Deserialize, Serialize};
use zbus::zvariant::Type;

/// A configured contact-data origin, as reported by `availableSources`.
///
/// Field order is the wire order: `(ssssubb)`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Type)]
pub struct SourceRecord {
    pub source_id: String,
    pub display_name: String,
    pub provider_id: String,
    pub extra_info: String,
    pub priority: u32,
    pub read_only: bool,
    pub enabled: bool,
}

impl SourceRecord {
    /// A writable source with no extra info, named after its id.
    pub fn new(source_id: &str, provider_id: &str, priority: u32, enabled: bool) -> Self {
        Self {
            source_id: source_id.to_owned(),
            display_name: source_id.to_owned(),
            provider_id: provider_id.to_owned(),
            extra_info: String::new(),
            priority,
            read_only: false,
            enabled,
        }
    }
}

/// Which of the three contact-list signals to broadcast.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactChange {
    Added,
    Removed,
    Updated,
}

impl ContactChange {
    /// D-Bus member name of the signal carrying this change.
    pub fn signal_name(self) -> &'static str {
        match self {
            Self::Added => "contactsAdded",
            Self::Removed => "contactsRemoved",
            Self::Updated => "contactsUpdated",
        }
    }
}
