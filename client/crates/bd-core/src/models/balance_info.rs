use crate::UserData;

use serde::{Deserialize, Serialize};

pub const DEFAULT_CURRENCY_TYPE: &str = "S$";
pub const DEFAULT_BALANCE_AMOUNT: f64 = 0.0;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BalanceInfo {
    pub currency_type: String,
    pub amount: f64,
}

impl BalanceInfo {
    /// Balance view of an optional snapshot, falling back to the defaults
    /// when user data has not been fetched.
    pub fn from_user_data(user_data: Option<&UserData>) -> Self {
        user_data.map(Self::from).unwrap_or_default()
    }
}

impl Default for BalanceInfo {
    fn default() -> Self {
        Self {
            currency_type: DEFAULT_CURRENCY_TYPE.to_string(),
            amount: DEFAULT_BALANCE_AMOUNT,
        }
    }
}

/// A blank currency reads as the default symbol.
impl From<&UserData> for BalanceInfo {
    fn from(user_data: &UserData) -> Self {
        let currency_type = match user_data.currency_type.trim() {
            "" => DEFAULT_CURRENCY_TYPE.to_string(),
            _ => user_data.currency_type.clone(),
        };
        Self {
            currency_type,
            amount: user_data.balance_amount,
        }
    }
}
