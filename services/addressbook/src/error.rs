/// Mock service infrastructure error variants.
///
/// Domain calls never fail; these only arise from the bus or configuration.
#[derive(Debug, thiserror::Error)]
pub enum AddressBookError {
    #[error("bus error: {0}")]
    Bus(#[from] zbus::Error),
    #[error("invalid configuration: {0}")]
    Config(#[from] envy::Error),
}

impl AddressBookError {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Bus(_) => "BUS",
            Self::Config(_) => "CONFIG",
        }
    }
}

impl From<AddressBookError> for zbus::fdo::Error {
    fn from(error: AddressBookError) -> Self {
        tracing::error!(error = %error, kind = error.kind(), "request failed");
        zbus::fdo::Error::Failed(format!("{}: {error}", error.kind()))
    }
}
