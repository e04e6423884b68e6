//! Cursor pagination through the listing helper and "get all" operations.

mod common;

use serde_json::{json, Value};

use common::{items, page, select, RecordingTransport};
use stripe_node::{handle_listing, Fields, Method, NodeError, Resource, StripeNode};

fn ids(values: &[Value]) -> Vec<&str> {
    values
        .iter()
        .map(|value| value["id"].as_str().unwrap())
        .collect()
}

#[tokio::test]
async fn follows_has_more_with_last_id() {
    let transport = RecordingTransport::new()
        .respond(page(&["ch_a", "ch_b"], true))
        .respond(page(&["ch_c"], false));

    let listed = handle_listing(&transport, None, Resource::Charge, Fields::new(), None)
        .await
        .unwrap();
    assert_eq!(ids(&listed), vec!["ch_a", "ch_b", "ch_c"]);

    let requests = transport.requests();
    assert_eq!(requests.len(), 2);
    assert_eq!(requests[0].spec.method, Method::Get);
    assert_eq!(requests[0].spec.path(), "/charges");
    assert!(requests[0].spec.query.get("starting_after").is_none());
    assert_eq!(requests[1].spec.query["starting_after"], json!("ch_b"));
}

#[tokio::test]
async fn missing_has_more_stops() {
    let transport = RecordingTransport::new()
        .respond(json!({"data": [{"id": "cus_1"}]}))
        .respond(page(&["cus_never"], false));

    let listed = handle_listing(&transport, None, Resource::Customer, Fields::new(), None)
        .await
        .unwrap();
    assert_eq!(ids(&listed), vec!["cus_1"]);
    assert_eq!(transport.requests().len(), 1);
}

#[tokio::test]
async fn empty_page_with_has_more_stops() {
    let transport = RecordingTransport::new()
        .respond(page(&["cpn_1"], true))
        .respond(page(&[], true))
        .respond(page(&["cpn_never"], false));

    let listed = handle_listing(&transport, None, Resource::Coupon, Fields::new(), None)
        .await
        .unwrap();
    assert_eq!(ids(&listed), vec!["cpn_1"]);
    assert_eq!(transport.requests().len(), 2);
}

#[tokio::test]
async fn extra_query_is_sent_with_every_page() {
    let transport = RecordingTransport::new()
        .respond(page(&["cus_1"], true))
        .respond(page(&["cus_2"], false));

    let mut query = Fields::new();
    query.insert("email".into(), json!("ada@example.com"));

    handle_listing(&transport, Some("eu"), Resource::Customer, query, None)
        .await
        .unwrap();

    for recorded in transport.requests() {
        assert_eq!(recorded.spec.query["email"], json!("ada@example.com"));
        assert_eq!(recorded.credential.as_deref(), Some("eu"));
    }
}

#[tokio::test]
async fn limit_truncates_and_stops_early() {
    let transport = RecordingTransport::new()
        .respond(page(&["po_1", "po_2"], true))
        .respond(page(&["po_3", "po_4"], true))
        .respond(page(&["po_never"], false));

    let listed = handle_listing(&transport, None, Resource::Payout, Fields::new(), Some(3))
        .await
        .unwrap();
    assert_eq!(ids(&listed), vec!["po_1", "po_2", "po_3"]);

    let requests = transport.requests();
    assert_eq!(requests.len(), 2);
    assert_eq!(requests[0].spec.query["limit"], json!(3));
}

#[tokio::test]
async fn malformed_page_is_an_error() {
    let transport = RecordingTransport::new().respond(json!({"object": "list"}));
    let err = handle_listing(&transport, None, Resource::Charge, Fields::new(), None)
        .await
        .unwrap_err();
    assert!(matches!(err, NodeError::UnexpectedResponse(_)));
}

#[tokio::test]
async fn resources_without_list_endpoint_are_rejected() {
    let transport = RecordingTransport::new();
    let err = handle_listing(&transport, None, Resource::Token, Fields::new(), None)
        .await
        .unwrap_err();
    assert!(matches!(err, NodeError::UnsupportedOperation { .. }));
    assert!(transport.requests().is_empty());
}

#[tokio::test]
async fn get_all_splices_every_object_into_output() {
    let transport = RecordingTransport::new()
        .respond(page(&["ch_a", "ch_b"], true))
        .respond(page(&["ch_c"], false));
    let node = StripeNode::new(transport);

    let output = node
        .execute(&items(1), &select("charge", "getAll"))
        .await
        .unwrap();
    assert_eq!(ids(&output[0]), vec!["ch_a", "ch_b", "ch_c"]);
}

#[tokio::test]
async fn get_all_honours_return_all_and_limit() {
    let transport = RecordingTransport::new().respond(page(&["cpn_1", "cpn_2", "cpn_3"], true));
    let node = StripeNode::new(transport);

    let params = select("coupon", "getAll")
        .set("returnAll", json!(false))
        .set("limit", json!(2));
    let output = node.execute(&items(1), &params).await.unwrap();

    assert_eq!(ids(&output[0]), vec!["cpn_1", "cpn_2"]);
    assert_eq!(node.transport().requests().len(), 1);
}

#[tokio::test]
async fn customer_get_all_filters_by_email() {
    let transport = RecordingTransport::new().respond(page(&["cus_1"], false));
    let node = StripeNode::new(transport);

    let params = select("customer", "getAll").set("filters", json!({"email": "ada@example.com"}));
    node.execute(&items(1), &params).await.unwrap();

    let recorded = node.transport().single_request();
    assert_eq!(recorded.spec.path(), "/customers");
    assert_eq!(
        Value::Object(recorded.spec.query),
        json!({"email": "ada@example.com"})
    );
}

#[tokio::test]
async fn payout_get_all_uses_listing() {
    let transport = RecordingTransport::new()
        .respond(page(&["po_1"], true))
        .respond(page(&["po_2"], false));
    let node = StripeNode::new(transport);

    let output = node
        .execute(&items(1), &select("payout", "getAll"))
        .await
        .unwrap();
    assert_eq!(ids(&output[0]), vec!["po_1", "po_2"]);
    assert_eq!(node.transport().requests()[1].spec.path(), "/payouts");
}

#[tokio::test]
async fn balance_transactions_do_not_paginate() {
    let list = page(&["txn_1", "txn_2"], true);
    let transport = RecordingTransport::new().respond(list.clone());
    let node = StripeNode::new(transport);

    let params = select("balanceTransactions", "getAll").set("payout", json!("po_1"));
    let output = node.execute(&items(1), &params).await.unwrap();

    assert_eq!(output, vec![vec![list]]);
    assert_eq!(node.transport().requests().len(), 1);
}
