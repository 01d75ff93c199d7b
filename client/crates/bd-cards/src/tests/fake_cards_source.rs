use crate::tests::{card, transaction, user_data};
use crate::{CardsDataSource, CardsError, CardsResult};

use bd_core::{CardDetail, Transaction, UserData};

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use tokio::sync::Notify;

type Canned<T> = Mutex<Result<T, &'static str>>;

fn reply<T: Clone>(slot: &Canned<T>) -> CardsResult<T> {
    slot.lock().unwrap().clone().map_err(CardsError::upstream)
}

/// Data source with canned replies. The cards fetch can be held open on a
/// gate to exercise interleavings.
pub(crate) struct FakeCardsSource {
    pub cards: Canned<Vec<CardDetail>>,
    pub transactions: Canned<Vec<Transaction>>,
    pub user_data: Canned<UserData>,
    cards_gate: Mutex<Option<Arc<Notify>>>,
}

impl Default for FakeCardsSource {
    fn default() -> Self {
        Self {
            cards: Mutex::new(Ok(vec![card("Ann"), card("Bob")])),
            transactions: Mutex::new(Ok(vec![transaction("txn-1")])),
            user_data: Mutex::new(Ok(user_data("S$", 3000.0))),
            cards_gate: Mutex::new(None),
        }
    }
}

impl FakeCardsSource {
    pub fn set<T>(slot: &Canned<T>, value: Result<T, &'static str>) {
        *slot.lock().unwrap() = value;
    }

    /// The next cards fetch captures its reply, then waits until the
    /// returned gate is notified. Later fetches are not held.
    pub fn hold_next_cards_fetch(&self) -> Arc<Notify> {
        let gate = Arc::new(Notify::new());
        *self.cards_gate.lock().unwrap() = Some(gate.clone());
        gate
    }
}

#[async_trait]
impl CardsDataSource for FakeCardsSource {
    async fn fetch_debit_cards(&self) -> CardsResult<Vec<CardDetail>> {
        let result = reply(&self.cards);
        let gate = self.cards_gate.lock().unwrap().take();
        if let Some(gate) = gate {
            gate.notified().await;
        }
        result
    }

    async fn fetch_transactions(&self) -> CardsResult<Vec<Transaction>> {
        reply(&self.transactions)
    }

    async fn fetch_user_data(&self) -> CardsResult<UserData> {
        reply(&self.user_data)
    }
}
