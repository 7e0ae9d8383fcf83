//! Bus-facing side of the mock: exported interfaces, signal helpers, typed
//! client proxies and connection bootstrap.

pub mod control;
pub mod interface;
pub mod proxy;
pub mod server;
pub mod signals;

/// Well-known name owned by the address-book daemon.
pub const BUS_NAME: &str = "com.canonical.pim";
/// Path of the daemon's main object.
pub const MAIN_OBJECT_PATH: &str = "/com/canonical/pim/AddressBook";
/// Interface scoping every daemon method and signal.
pub const MAIN_INTERFACE: &str = "com.canonical.pim.AddressBook";
/// Test-only interface used to trigger signals from outside the process.
pub const CONTROL_INTERFACE: &str = "com.canonical.pim.AddressBook.Mock";
