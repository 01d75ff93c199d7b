use crate::CardsResult;

use bd_core::{CardDetail, Transaction, UserData};

use async_trait::async_trait;

/// Where the cards page gets its data from.
#[async_trait]
pub trait CardsDataSource: Send + Sync {
    async fn fetch_debit_cards(&self) -> CardsResult<Vec<CardDetail>>;

    async fn fetch_transactions(&self) -> CardsResult<Vec<Transaction>>;

    async fn fetch_user_data(&self) -> CardsResult<UserData>;
}
