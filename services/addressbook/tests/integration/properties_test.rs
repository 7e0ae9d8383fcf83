use zbus::fdo::PropertiesProxy;
use zbus::names::InterfaceName;

use pim_addressbook::bus::{BUS_NAME, MAIN_INTERFACE, MAIN_OBJECT_PATH};

use crate::helpers::{address_book, start_mock};

async fn properties(client: &zbus::Connection) -> PropertiesProxy<'static> {
    PropertiesProxy::builder(client)
        .destination(BUS_NAME)
        .unwrap()
        .path(MAIN_OBJECT_PATH)
        .unwrap()
        .build()
        .await
        .unwrap()
}

#[tokio::test]
async fn should_report_ready_through_properties_get() {
    let peers = start_mock().await;
    let props = properties(&peers.client).await;

    let value = props
        .get(InterfaceName::from_static_str_unchecked(MAIN_INTERFACE), "isReady")
        .await
        .unwrap();

    assert!(bool::try_from(value).unwrap());
}

#[tokio::test]
async fn should_report_ready_through_typed_proxy() {
    let peers = start_mock().await;
    let book = address_book(&peers.client).await;

    assert!(book.is_ready().await.unwrap());
}

#[tokio::test]
async fn should_answer_unknown_property_with_error_reply() {
    let peers = start_mock().await;
    let props = properties(&peers.client).await;

    let result = props
        .get(InterfaceName::from_static_str_unchecked(MAIN_INTERFACE), "someOtherProp")
        .await;

    assert!(result.is_err(), "expected error reply, got {result:?}");
}

#[tokio::test]
async fn should_answer_unknown_interface_with_error_reply() {
    let peers = start_mock().await;
    let props = properties(&peers.client).await;

    let result = props
        .get(InterfaceName::from_static_str_unchecked("org.example.Other"), "isReady")
        .await;

    assert!(result.is_err(), "expected error reply, got {result:?}");
}
