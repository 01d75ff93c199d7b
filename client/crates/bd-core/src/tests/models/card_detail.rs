use crate::{CardDetail, CardType};

fn card_json() -> &'static str {
    r#"{
        "holder": "Mark Henry",
        "logo": "visa.svg",
        "number": "5647 3411 2413 2020",
        "expiry": "12/20",
        "cvv": "123",
        "year": "2020",
        "type": "visa"
    }"#
}

#[test]
fn test_card_detail_is_frozen_defaults_to_false() {
    let card: CardDetail = serde_json::from_str(card_json()).unwrap();
    assert!(!card.is_frozen);
    assert_eq!(card.card_type, CardType::Visa);
}

#[test]
fn test_card_detail_serializes_camel_case() {
    let mut card: CardDetail = serde_json::from_str(card_json()).unwrap();
    card.is_frozen = true;

    let value = serde_json::to_value(&card).unwrap();
    assert_eq!(value["isFrozen"], serde_json::json!(true));
    assert_eq!(value["type"], serde_json::json!("visa"));
}

#[test]
fn test_card_detail_masked_number() {
    let card: CardDetail = serde_json::from_str(card_json()).unwrap();
    assert_eq!(card.last_four(), "2020");
    assert_eq!(card.masked_number(), "**** **** **** 2020");
}
