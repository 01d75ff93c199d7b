use crate::{CardType, CoreError, NewCardForm};

fn valid_form() -> NewCardForm {
    NewCardForm {
        holder: "  Jane Doe ".to_string(),
        cvv: "321".to_string(),
        valid_thru: "09/27".to_string(),
        card_number: "4111111111111111".to_string(),
        card_provider: "visa".to_string(),
        bank: "Aspire".to_string(),
    }
}

fn field_of(err: CoreError) -> Option<String> {
    match err {
        CoreError::Validation { field, .. } => field,
        _ => None,
    }
}

#[test]
fn test_new_card_form_into_card_detail() {
    let card = valid_form().into_card_detail().unwrap();

    assert_eq!(card.holder, "Jane Doe");
    assert_eq!(card.number, "4111 1111 1111 1111");
    assert_eq!(card.expiry, "09/27");
    assert_eq!(card.year, "2027");
    assert_eq!(card.card_type, CardType::Visa);
    assert_eq!(card.logo, "visa.svg");
    assert!(!card.is_frozen);
}

#[test]
fn test_new_card_form_accepts_spaced_number() {
    let form = NewCardForm {
        card_number: "5555 4444 3333 2222".to_string(),
        card_provider: "Mastercard".to_string(),
        ..valid_form()
    };

    let card = form.into_card_detail().unwrap();
    assert_eq!(card.number, "5555 4444 3333 2222");
    assert_eq!(card.card_type, CardType::Mastercard);
}

#[test]
fn test_new_card_form_rejects_bad_fields() {
    let empty_holder = NewCardForm {
        holder: " ".to_string(),
        ..valid_form()
    };
    assert_eq!(
        field_of(empty_holder.into_card_detail().unwrap_err()).as_deref(),
        Some("holder")
    );

    let short_number = NewCardForm {
        card_number: "4111".to_string(),
        ..valid_form()
    };
    assert_eq!(
        field_of(short_number.into_card_detail().unwrap_err()).as_deref(),
        Some("card_number")
    );

    let bad_cvv = NewCardForm {
        cvv: "12a".to_string(),
        ..valid_form()
    };
    assert_eq!(
        field_of(bad_cvv.into_card_detail().unwrap_err()).as_deref(),
        Some("cvv")
    );

    for valid_thru in ["13/25", "1/25", "0925", "+1/25", "ab/cd"] {
        let form = NewCardForm {
            valid_thru: valid_thru.to_string(),
            ..valid_form()
        };
        assert_eq!(
            field_of(form.into_card_detail().unwrap_err()).as_deref(),
            Some("valid_thru"),
            "{valid_thru} should be rejected"
        );
    }
}

#[test]
fn test_new_card_form_rejects_unknown_provider() {
    let form = NewCardForm {
        card_provider: "amex".to_string(),
        ..valid_form()
    };

    assert!(matches!(
        form.into_card_detail(),
        Err(CoreError::InvalidCardType { .. })
    ));
}
