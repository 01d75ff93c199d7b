use crate::CardType;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CardDetail {
    pub holder: String,
    pub logo: String,
    pub number: String,
    pub expiry: String,
    pub cvv: String,
    pub year: String,
    #[serde(rename = "type")]
    pub card_type: CardType,
    #[serde(default)]
    pub is_frozen: bool,
}

impl CardDetail {
    /// Last four digits of the card number, ignoring spacing.
    pub fn last_four(&self) -> String {
        let digits: Vec<char> = self.number.chars().filter(char::is_ascii_digit).collect();
        let start = digits.len().saturating_sub(4);
        digits[start..].iter().collect()
    }

    pub fn masked_number(&self) -> String {
        format!("**** **** **** {}", self.last_four())
    }
}
