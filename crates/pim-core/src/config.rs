/// Trait for loading service configuration from environment variables.
///
/// Implementors derive `serde::Deserialize` (with `#[serde(default)]` on
/// optional fields) and call `Config::from_env()` at startup. Field names map
/// to upper-case env vars, so `addressbook_bus_name` reads
/// `ADDRESSBOOK_BUS_NAME`.
pub trait Config: Sized + serde::de::DeserializeOwned {
    fn from_env() -> Result<Self, envy::Error> {
        envy::from_env()
    }

    /// Load from an explicit set of `(key, value)` pairs instead of the
    /// process environment.
    fn from_pairs<I>(pairs: I) -> Result<Self, envy::Error>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        envy::from_iter(pairs)
    }
}
