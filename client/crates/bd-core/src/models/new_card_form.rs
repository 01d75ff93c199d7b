use crate::{CardDetail, CardType, CoreError, CoreResult};

use std::str::FromStr;

use serde::{Deserialize, Serialize};

const CARD_NUMBER_DIGITS: usize = 16;

/// Raw input from the "add card" dialog.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewCardForm {
    pub holder: String,
    pub cvv: String,
    /// Expiry as `MM/YY`.
    pub valid_thru: String,
    pub card_number: String,
    pub card_provider: String,
    pub bank: String,
}

impl NewCardForm {
    /// Check every field and build the card the page store will hold.
    /// New cards always start unfrozen.
    #[track_caller]
    pub fn into_card_detail(self) -> CoreResult<CardDetail> {
        let holder = self.holder.trim();
        if holder.is_empty() {
            return Err(CoreError::validation("holder", "Card holder is required"));
        }

        let digits: String = self
            .card_number
            .chars()
            .filter(|c| !c.is_whitespace() && *c != '-')
            .collect();
        if digits.len() != CARD_NUMBER_DIGITS || !digits.chars().all(|c| c.is_ascii_digit()) {
            return Err(CoreError::validation(
                "card_number",
                format!("Card number must be {CARD_NUMBER_DIGITS} digits"),
            ));
        }

        if !(3..=4).contains(&self.cvv.len()) || !self.cvv.chars().all(|c| c.is_ascii_digit()) {
            return Err(CoreError::validation("cvv", "CVV must be 3 or 4 digits"));
        }

        let (month, year) = Self::parse_valid_thru(&self.valid_thru)?;
        let card_type = CardType::from_str(&self.card_provider)?;

        let number = digits
            .as_bytes()
            .chunks(4)
            .map(|chunk| String::from_utf8_lossy(chunk).into_owned())
            .collect::<Vec<_>>()
            .join(" ");

        Ok(CardDetail {
            holder: holder.to_string(),
            logo: format!("{}.svg", card_type.as_str()),
            number,
            expiry: format!("{month:02}/{year:02}"),
            cvv: self.cvv,
            year: format!("20{year:02}"),
            card_type,
            is_frozen: false,
        })
    }

    #[track_caller]
    fn parse_valid_thru(value: &str) -> CoreResult<(u8, u8)> {
        let invalid = || CoreError::validation("valid_thru", "Valid thru must be in MM/YY format");

        let (month, year) = value.trim().split_once('/').ok_or_else(invalid)?;
        let two_digits = |s: &str| s.len() == 2 && s.chars().all(|c| c.is_ascii_digit());
        if !two_digits(month) || !two_digits(year) {
            return Err(invalid());
        }
        let month: u8 = month.parse().map_err(|_| invalid())?;
        let year: u8 = year.parse().map_err(|_| invalid())?;
        if !(1..=12).contains(&month) {
            return Err(invalid());
        }
        Ok((month, year))
    }
}
