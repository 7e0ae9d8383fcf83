use pim_addressbook::bus::signals::ContactSignals;
use pim_addressbook::bus::{MAIN_INTERFACE, MAIN_OBJECT_PATH};
use pim_addressbook::domain::types::ContactChange;
use pim_testing::signals::SignalCollector;

use crate::helpers::{control, start_mock};

fn payload(message: &zbus::Message) -> Vec<String> {
    message.body().deserialize::<Vec<String>>().unwrap()
}

#[tokio::test]
async fn should_broadcast_contacts_added_payload() {
    let peers = start_mock().await;
    let control = control(&peers.client).await;
    let mut collector = SignalCollector::new(&peers.client);

    control.emit_contacts_added(&["c1", "c2"]).await.unwrap();

    let signal = collector
        .expect_signal(MAIN_INTERFACE, "contactsAdded")
        .await
        .unwrap();
    assert_eq!(payload(&signal), ["c1", "c2"]);
    assert_eq!(
        signal.header().path().map(|p| p.as_str()),
        Some(MAIN_OBJECT_PATH)
    );
}

#[tokio::test]
async fn should_broadcast_contacts_removed_payload() {
    let peers = start_mock().await;
    let control = control(&peers.client).await;
    let mut collector = SignalCollector::new(&peers.client);

    control.emit_contacts_removed(&["c3"]).await.unwrap();

    let signal = collector
        .expect_signal(MAIN_INTERFACE, "contactsRemoved")
        .await
        .unwrap();
    assert_eq!(payload(&signal), ["c3"]);
}

#[tokio::test]
async fn should_broadcast_empty_contacts_updated_payload() {
    let peers = start_mock().await;
    let control = control(&peers.client).await;
    let mut collector = SignalCollector::new(&peers.client);

    control.emit_contacts_updated(&[]).await.unwrap();

    let signal = collector
        .expect_signal(MAIN_INTERFACE, "contactsUpdated")
        .await
        .unwrap();
    assert!(payload(&signal).is_empty());
}

#[tokio::test]
async fn should_broadcast_ready_changed_without_payload() {
    let peers = start_mock().await;
    let control = control(&peers.client).await;
    let mut collector = SignalCollector::new(&peers.client);

    control.emit_ready_changed().await.unwrap();

    let signal = collector
        .expect_signal(MAIN_INTERFACE, "readyChanged")
        .await
        .unwrap();
    assert_eq!(
        signal.header().member().map(|m| m.as_str()),
        Some("readyChanged")
    );
}

#[tokio::test]
async fn should_emit_from_service_side_helper() {
    let peers = start_mock().await;
    let mut collector = SignalCollector::new(&peers.client);

    let signals = ContactSignals::for_object(&peers.service, MAIN_OBJECT_PATH).unwrap();
    let contacts = vec!["c9".to_owned()];
    signals
        .contacts_changed(ContactChange::Updated, &contacts)
        .await
        .unwrap();

    let signal = collector
        .expect_signal(MAIN_INTERFACE, "contactsUpdated")
        .await
        .unwrap();
    assert_eq!(payload(&signal), ["c9"]);
}
