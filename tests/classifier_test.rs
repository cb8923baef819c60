//! Classification rules against realistic order payloads

use sla_rs::classify::{classify, FulfillmentCategory};
use sla_rs::order::{CustomerId, OrderRecord};

fn order_from_json(json: &str) -> OrderRecord {
    serde_json::from_str(json).expect("valid order document")
}

#[test]
fn test_classifier_priority_major_account_wins() {
    // A major-account customer on a hotshot route is still a major account
    let id = CustomerId::Numeric(10_000_000_064_356);
    assert_eq!(
        classify(Some(&id), Some("H")),
        FulfillmentCategory::MajorAccount
    );
}

#[test]
fn test_classifier_totality_over_route_codes() {
    // Any route code at all classifies to exactly one category
    for code in ["C", "H", "T", "R", "X", "Z", "??", "店"] {
        let category = classify(None, Some(code));
        assert!(FulfillmentCategory::ALL.contains(&category));
    }
    assert!(FulfillmentCategory::ALL.contains(&classify(None, None)));
}

#[test]
fn test_wire_payload_classification() {
    let order = order_from_json(
        r#"{
            "order_id": "ORD-77120",
            "customer_id": 4488121,
            "route_type": "T",
            "created_at": "2024-03-14T08:42:00"
        }"#,
    );
    assert_eq!(
        classify(order.customer_id.as_ref(), order.route_code()),
        FulfillmentCategory::Transfer
    );
}

#[test]
fn test_missing_route_is_ecommerce() {
    let order = order_from_json(
        r#"{
            "order_id": "ORD-77121",
            "customer_id": 4488121,
            "created_at": "2024-03-14T08:42:00"
        }"#,
    );
    assert_eq!(
        classify(order.customer_id.as_ref(), order.route_code()),
        FulfillmentCategory::Ecommerce
    );
}

#[test]
fn test_empty_route_string_is_ecommerce() {
    // Upstream feeds sometimes send "" instead of omitting the field
    let order = order_from_json(
        r#"{
            "order_id": "ORD-77122",
            "route_type": "",
            "created_at": "2024-03-14T08:42:00"
        }"#,
    );
    assert_eq!(
        classify(order.customer_id.as_ref(), order.route_code()),
        FulfillmentCategory::Ecommerce
    );
}

#[test]
fn test_string_customer_id_with_digits_hits_residue_rule() {
    let order = order_from_json(
        r#"{
            "order_id": "ORD-77123",
            "customer_id": "20000000064356",
            "route_type": "R",
            "created_at": "2024-03-14T08:42:00"
        }"#,
    );
    assert_eq!(
        classify(order.customer_id.as_ref(), order.route_code()),
        FulfillmentCategory::MajorAccount
    );
}

#[test]
fn test_alphanumeric_customer_id_falls_through() {
    let id = CustomerId::from("CUST-64356");
    assert_eq!(classify(Some(&id), Some("R")), FulfillmentCategory::Route);
}

#[test]
fn test_unknown_route_code_is_regular() {
    assert_eq!(classify(None, Some("Q")), FulfillmentCategory::Regular);
}
