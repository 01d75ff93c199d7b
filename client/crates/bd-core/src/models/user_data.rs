use serde::{Deserialize, Serialize};

/// Balance snapshot for the dashboard header.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserData {
    pub id: String,
    pub name: String,
    pub email: String,
    pub currency_type: String,
    pub balance_amount: f64,
}
