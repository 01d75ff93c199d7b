use crate::TransactionType;

use serde::{Deserialize, Serialize};

/// Entry in the recent-transactions list. Read-only once fetched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    #[serde(default)]
    pub id: String,
    pub title: String,
    pub date: String,
    pub amount: f64,
    pub icon: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon_color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note_key: Option<String>,
    #[serde(rename = "type")]
    pub transaction_type: TransactionType,
}

impl Transaction {
    /// Amount as it affects the balance: refunds credit, charges debit.
    pub fn signed_amount(&self) -> f64 {
        match self.transaction_type {
            TransactionType::Refund => self.amount.abs(),
            TransactionType::Charged => -self.amount.abs(),
        }
    }
}
