use crate::collection::coin::{Coin, CoinDraft};
use crate::collection::helper_functions::{generate_id, now_millis};
use crate::test::helper_functions::peace_dollar;
use ntest::timeout;
use serde_json::json;
use std::collections::HashSet;
use uuid::Uuid;

#[test]
#[timeout(10000)]
fn test_generate_id_is_distinct() {
    let ids: HashSet<String> = (0..10_000).map(|_| generate_id()).collect();

    assert_eq!(ids.len(), 10_000);
}

#[test]
fn test_generate_id_is_uuid_v4() {
    let id = generate_id();
    let uuid = Uuid::parse_str(&id).unwrap();

    assert_eq!(uuid.get_version_num(), 4);
    assert_eq!(id, id.to_lowercase());
    assert_eq!(id.len(), 36);
}

#[test]
fn test_draft_into_coin_assigns_id_and_date_added() {
    let before = now_millis();
    let draft = CoinDraft {
        title: "Morgan Dollar".to_string(),
        country: "USA".to_string(),
        year: "1881".to_string(),
        description: "Carson City mint".to_string(),
        image: "data:image/jpeg;base64,/9j/4AAQ".to_string(),
        estimated_value: Some("$120".to_string()),
        composition: None,
    };

    let coin = draft.clone().into_coin();
    let after = now_millis();

    assert!(!coin.id.is_empty());
    assert!(coin.date_added >= before && coin.date_added <= after);
    assert_eq!(coin.title, draft.title);
    assert_eq!(coin.country, draft.country);
    assert_eq!(coin.year, draft.year);
    assert_eq!(coin.description, draft.description);
    assert_eq!(coin.image, draft.image);
    assert_eq!(coin.estimated_value, draft.estimated_value);
    assert_eq!(coin.composition, None);
}

#[test]
fn test_coin_serializes_camel_case_without_absent_optionals() {
    let value = serde_json::to_value(peace_dollar()).unwrap();
    let object = value.as_object().unwrap();

    assert_eq!(object.get("dateAdded"), Some(&json!(1_700_000_000_000i64)));
    assert!(object.get("date_added").is_none());
    assert!(object.get("estimatedValue").is_none());
    assert!(object.get("composition").is_none());
}

#[test]
fn test_coin_deserializes_null_optionals() {
    let value = json!({
        "id": "7",
        "title": "Thaler",
        "country": "Austria",
        "year": "1780",
        "description": "",
        "image": "",
        "dateAdded": 1,
        "estimatedValue": null,
        "composition": "Silver"
    });

    let coin: Coin = serde_json::from_value(value).unwrap();

    assert_eq!(coin.estimated_value, None);
    assert_eq!(coin.composition, Some("Silver".to_string()));
}
