//! Signal capture for assertions.

use std::time::Duration;

use futures::StreamExt;
use zbus::message::Type;
use zbus::{Connection, Message, MessageStream};

/// Default wait before a missing signal fails the test.
pub const SIGNAL_TIMEOUT: Duration = Duration::from_secs(5);

/// Records every incoming message on a connection from the moment it is
/// created; create it before triggering the emission.
pub struct SignalCollector {
    stream: MessageStream,
}

impl SignalCollector {
    pub fn new(connection: &Connection) -> Self {
        Self {
            stream: MessageStream::from(connection),
        }
    }

    /// Next signal named `member` on `interface`, skipping anything else.
    pub async fn next_signal(&mut self, interface: &str, member: &str) -> zbus::Result<Message> {
        while let Some(message) = self.stream.next().await {
            let message = message?;
            if message.message_type() != Type::Signal {
                continue;
            }
            let matches = {
                let header = message.header();
                header.interface().is_some_and(|i| i.as_str() == interface)
                    && header.member().is_some_and(|m| m.as_str() == member)
            };
            if matches {
                return Ok(message);
            }
        }
        Err(zbus::Error::Failure("message stream closed".to_owned()))
    }

    /// Like [`next_signal`](Self::next_signal) but gives up after [`SIGNAL_TIMEOUT`].
    pub async fn expect_signal(&mut self, interface: &str, member: &str) -> zbus::Result<Message> {
        tokio::time::timeout(SIGNAL_TIMEOUT, self.next_signal(interface, member))
            .await
            .map_err(|_| zbus::Error::Failure(format!("no {interface}.{member} signal received")))?
    }
}
