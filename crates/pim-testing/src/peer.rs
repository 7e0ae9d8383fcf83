//! Direct peer-to-peer connections over a socketpair.
//!
//! The service side acts as the D-Bus server of the pair; no well-known names
//! exist, so proxies may carry any destination.

use tokio::net::UnixStream;
use zbus::connection::Builder;
use zbus::{Connection, Guid};

/// Both ends of a peer-to-peer link.
pub struct PeerPair {
    /// Connection hosting the objects under test.
    pub service: Connection,
    /// Connection used by the test to call into `service`.
    pub client: Connection,
}

/// Build a connected pair, letting `configure` export objects on the service
/// side before the handshake completes.
pub async fn connect_peer<F>(configure: F) -> zbus::Result<PeerPair>
where
    F: FnOnce(Builder<'static>) -> zbus::Result<Builder<'static>>,
{
    let (service_socket, client_socket) = UnixStream::pair()?;

    let service = configure(
        Builder::unix_stream(service_socket)
            .server(Guid::generate())?
            .p2p(),
    )?
    .build();
    let client = Builder::unix_stream(client_socket).p2p().build();

    let (service, client) = futures::try_join!(service, client)?;
    Ok(PeerPair { service, client })
}
