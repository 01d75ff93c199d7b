mod fake_cards_source;

use bd_core::{CardDetail, CardType, Transaction, TransactionType, UserData};

pub(crate) use fake_cards_source::FakeCardsSource;

pub(crate) fn card(holder: &str) -> CardDetail {
    CardDetail {
        holder: holder.to_string(),
        logo: "visa.svg".to_string(),
        number: "4111 1111 1111 1111".to_string(),
        expiry: "12/28".to_string(),
        cvv: "123".to_string(),
        year: "2028".to_string(),
        card_type: CardType::Visa,
        is_frozen: false,
    }
}

pub(crate) fn transaction(id: &str) -> Transaction {
    Transaction {
        id: id.to_string(),
        title: "Hamleys".to_string(),
        date: "20 May 2024".to_string(),
        amount: 150.0,
        icon: "file-storage.svg".to_string(),
        background: None,
        icon_color: Some("#009DFF".to_string()),
        note_key: None,
        transaction_type: TransactionType::Charged,
    }
}

pub(crate) fn user_data(currency_type: &str, balance_amount: f64) -> UserData {
    UserData {
        id: "user-001".to_string(),
        name: "Mark Henry".to_string(),
        email: "mark@example.com".to_string(),
        currency_type: currency_type.to_string(),
        balance_amount,
    }
}
