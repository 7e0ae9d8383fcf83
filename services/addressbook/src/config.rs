use serde::Deserialize;

use pim_core::config::Config;

use crate::bus::{BUS_NAME, MAIN_OBJECT_PATH};

/// Which message bus the mock registers on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BusKind {
    #[default]
    Session,
    System,
}

/// Mock service configuration loaded from environment variables.
#[derive(Debug, Clone, Deserialize)]
pub struct AddressBookConfig {
    /// Bus to register on (default `session`). Env var: `ADDRESSBOOK_BUS`.
    #[serde(default)]
    pub addressbook_bus: BusKind,
    /// Well-known name to own. Env var: `ADDRESSBOOK_BUS_NAME`.
    #[serde(default = "default_bus_name")]
    pub addressbook_bus_name: String,
    /// Path of the main object. Env var: `ADDRESSBOOK_OBJECT_PATH`.
    #[serde(default = "default_object_path")]
    pub addressbook_object_path: String,
}

fn default_bus_name() -> String {
    BUS_NAME.to_owned()
}

fn default_object_path() -> String {
    MAIN_OBJECT_PATH.to_owned()
}

impl Config for AddressBookConfig {}

impl Default for AddressBookConfig {
    fn default() -> Self {
        Self {
            addressbook_bus: BusKind::default(),
            addressbook_bus_name: default_bus_name(),
            addressbook_object_path: default_object_path(),
        }
    }
}
