use crate::{CardType, TransactionType};

use std::str::FromStr;

#[test]
fn test_card_type_as_str() {
    assert_eq!(CardType::Visa.as_str(), "visa");
    assert_eq!(CardType::Mastercard.as_str(), "mastercard");
}

#[test]
fn test_card_type_from_str_ignores_case() {
    assert_eq!(CardType::from_str("VISA").unwrap(), CardType::Visa);
    assert_eq!(
        CardType::from_str("MasterCard").unwrap(),
        CardType::Mastercard
    );
    assert!(CardType::from_str("amex").is_err());
}

#[test]
fn test_card_type_serializes_lowercase() {
    let json = serde_json::to_string(&CardType::Mastercard).unwrap();
    assert_eq!(json, "\"mastercard\"");
}

#[test]
fn test_transaction_type_from_str() {
    assert_eq!(
        TransactionType::from_str("refund").unwrap(),
        TransactionType::Refund
    );
    assert_eq!(
        TransactionType::from_str("charged").unwrap(),
        TransactionType::Charged
    );
    assert!(TransactionType::from_str("pending").is_err());
}
