use crate::{CardEntry, LoadState};

use bd_core::{BalanceInfo, Transaction, UserData};

use serde::Serialize;

/// Read-only view of the cards page state.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageSnapshot {
    pub cards: Vec<CardEntry>,
    pub transactions: Vec<Transaction>,
    pub user_data: Option<UserData>,
    pub balance: BalanceInfo,
    pub cards_state: LoadState,
    pub transactions_state: LoadState,
    pub user_data_state: LoadState,
    pub is_loading: bool,
    pub has_errors: bool,
}
