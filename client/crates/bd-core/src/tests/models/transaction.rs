use crate::{Transaction, TransactionType};

#[test]
fn test_transaction_deserializes_optional_fields() {
    let transaction: Transaction = serde_json::from_str(
        r##"{
            "id": "t1",
            "title": "Hamleys",
            "date": "20 May 2020",
            "amount": 150,
            "icon": "file-storage",
            "iconColor": "#00D6B5",
            "type": "refund"
        }"##,
    )
    .unwrap();

    assert_eq!(transaction.icon_color.as_deref(), Some("#00D6B5"));
    assert!(transaction.background.is_none());
    assert!(transaction.note_key.is_none());
    assert_eq!(transaction.transaction_type, TransactionType::Refund);
    assert_eq!(transaction.signed_amount(), 150.0);
}

#[test]
fn test_charged_transaction_is_negative() {
    let transaction: Transaction = serde_json::from_str(
        r#"{"title":"Cab","date":"19 May 2020","amount":150,"icon":"flights","type":"charged"}"#,
    )
    .unwrap();

    assert_eq!(transaction.id, "");
    assert_eq!(transaction.signed_amount(), -150.0);
}
