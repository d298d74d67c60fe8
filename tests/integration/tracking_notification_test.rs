// Integration tests for the tracking HTTP client
//
// Sends notifications to a fake ingestion endpoint and checks the wire shape.

#[path = "../helpers/mod.rs"]
mod helpers;

use std::time::Duration;

use chrono::{TimeZone, Utc};
use serde_json::{json, Value};

use helpers::*;
use pix_relay::core::AppError;
use pix_relay::orders::GeneratePixRequest;
use pix_relay::tracking::{TrackingClient, TrackingContext, TrackingNotifier, TrackingStatus};

fn client_for(tracking: &FakeUpstream, is_test: bool) -> TrackingClient {
    TrackingClient::new(
        tracking.url(TRACKING_PATH),
        TRACKING_TOKEN.to_string(),
        TrackingContext {
            platform: "GhostsPay".to_string(),
            is_test,
        },
        Duration::from_secs(5),
    )
    .unwrap()
}

fn order() -> pix_relay::orders::Order {
    let request: GeneratePixRequest = serde_json::from_value(TestDataFactory::pix_request()).unwrap();
    request
        .into_order_at(Utc.with_ymd_and_hms(2025, 5, 20, 14, 0, 0).single().unwrap())
        .unwrap()
}

#[actix_web::test]
async fn test_approved_notification_wire_shape() {
    let tracking = FakeUpstream::start();
    let client = client_for(&tracking, false);
    let approved_at = Utc.with_ymd_and_hms(2025, 5, 20, 14, 3, 9).single().unwrap();

    client
        .notify("tx1", &order(), TrackingStatus::Approved, Some(approved_at))
        .await
        .unwrap();

    let sent = tracking.requests_to(TRACKING_PATH);
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].method, "POST");
    assert_eq!(sent[0].api_token.as_deref(), Some(TRACKING_TOKEN));
    assert_eq!(
        sent[0].body,
        json!({
            "orderId": "tx1",
            "platform": "GhostsPay",
            "paymentMethod": "pix",
            "status": "approved",
            "createdAt": "2025-05-20 14:00:00",
            "approvedDate": "2025-05-20 14:03:09",
            "refundedAt": null,
            "customer": {
                "name": "Maria Silva",
                "email": "maria@example.com",
                "phone": "11999998888",
                "document": "12345678909",
                "country": "BR"
            },
            "products": [{
                "id": "item-1",
                "name": "Taxa IOF",
                "planId": null,
                "planName": null,
                "quantity": 1,
                "priceInCents": 4990
            }],
            "trackingParameters": {
                "utm_source": "facebook",
                "utm_medium": null,
                "utm_campaign": "lancamento",
                "utm_term": null,
                "utm_content": null,
                "utm_id": null
            },
            "commission": {
                "totalPriceInCents": 4990,
                "gatewayFeeInCents": 0,
                "userCommissionInCents": 4990
            },
            "isTest": false
        })
    );
}

#[actix_web::test]
async fn test_waiting_payment_has_no_approval_date() {
    let tracking = FakeUpstream::start();
    let client = client_for(&tracking, true);

    client
        .notify("tx2", &order(), TrackingStatus::WaitingPayment, Some(Utc::now()))
        .await
        .unwrap();

    let sent = tracking.requests_to(TRACKING_PATH);
    assert_eq!(sent[0].body["status"], "waiting_payment");
    assert_eq!(sent[0].body["approvedDate"], Value::Null);
    assert_eq!(sent[0].body["isTest"], true);
}

#[actix_web::test]
async fn test_rejected_notification_is_an_error() {
    let tracking = FakeUpstream::start();
    tracking.respond_json(TRACKING_PATH, 401, json!({"message": "invalid token"}));
    let client = client_for(&tracking, false);

    let result = client
        .notify("tx1", &order(), TrackingStatus::Approved, Some(Utc::now()))
        .await;

    match result {
        Err(AppError::Tracking(msg)) => assert!(msg.contains("401")),
        other => panic!("Expected tracking error, got {:?}", other),
    }
    assert_eq!(tracking.requests_to(TRACKING_PATH).len(), 1);
}
