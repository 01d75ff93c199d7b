use crate::{
    CardCollection, CardEntry, CardsDataSource, CardsError, CardsResult, Collection, LoadState,
    PageSnapshot,
};

use bd_config::FetchConfig;
use bd_core::{
    BalanceInfo, CardDetail, CardId, DEFAULT_BALANCE_AMOUNT, NewCardForm,
    Transaction, UserData,
};

use std::sync::Arc;
use std::time::Duration;

use log::{debug, info, warn};
use tokio::sync::RwLock;

/// Fetch counters per collection. A fetch publishes only if the counter
/// still holds the value it started with.
#[derive(Debug, Default, Clone, Copy)]
struct Generations {
    cards: u64,
    transactions: u64,
    user_data: u64,
}

impl Generations {
    fn slot(&mut self, collection: Collection) -> &mut u64 {
        match collection {
            Collection::Cards => &mut self.cards,
            Collection::Transactions => &mut self.transactions,
            Collection::UserData => &mut self.user_data,
        }
    }

    fn advance(&mut self, collection: Collection) -> u64 {
        let slot = self.slot(collection);
        *slot = slot.wrapping_add(1);
        *slot
    }

    fn current(&self, collection: Collection) -> u64 {
        match collection {
            Collection::Cards => self.cards,
            Collection::Transactions => self.transactions,
            Collection::UserData => self.user_data,
        }
    }
}

#[derive(Debug, Default)]
struct PageState {
    cards: CardCollection,
    transactions: Vec<Transaction>,
    user_data: Option<UserData>,
    cards_state: LoadState,
    transactions_state: LoadState,
    user_data_state: LoadState,
    generations: Generations,
}

impl PageState {
    fn load_state(&self, collection: Collection) -> &LoadState {
        match collection {
            Collection::Cards => &self.cards_state,
            Collection::Transactions => &self.transactions_state,
            Collection::UserData => &self.user_data_state,
        }
    }

    fn load_state_mut(&mut self, collection: Collection) -> &mut LoadState {
        match collection {
            Collection::Cards => &mut self.cards_state,
            Collection::Transactions => &mut self.transactions_state,
            Collection::UserData => &mut self.user_data_state,
        }
    }

    fn is_loading(&self) -> bool {
        Collection::ALL
            .iter()
            .any(|&collection| self.load_state(collection).is_loading)
    }

    fn has_errors(&self) -> bool {
        Collection::ALL
            .iter()
            .any(|&collection| self.load_state(collection).has_error())
    }

    fn balance(&self) -> BalanceInfo {
        BalanceInfo::from_user_data(self.user_data.as_ref())
    }
}

/// Owns the cards page collections and their per-collection load states.
///
/// Fetches run without holding the lock. Each one takes a generation token
/// for its collection when it starts; a newer fetch of the same collection
/// or a `reset()` moves the token on, and the older result is dropped when
/// it finally arrives.
pub struct CardsPageStore {
    source: Arc<dyn CardsDataSource>,
    fetch_timeout: Duration,
    state: RwLock<PageState>,
}

impl CardsPageStore {
    pub fn new(source: Arc<dyn CardsDataSource>, fetch_timeout: Duration) -> Self {
        Self {
            source,
            fetch_timeout,
            state: RwLock::new(PageState::default()),
        }
    }

    pub fn from_config(source: Arc<dyn CardsDataSource>, config: &FetchConfig) -> Self {
        Self::new(source, config.timeout())
    }

    // =========================================================================
    // Getters
    // =========================================================================

    pub async fn cards(&self) -> Vec<CardEntry> {
        self.state.read().await.cards.entries().to_vec()
    }

    pub async fn card(&self, id: CardId) -> Option<CardDetail> {
        self.state.read().await.cards.get(id).cloned()
    }

    pub async fn card_count(&self) -> usize {
        self.state.read().await.cards.len()
    }

    /// Bridge from a UI-held position to the card's id.
    pub async fn card_at(&self, position: usize) -> Option<CardId> {
        self.state.read().await.cards.card_at(position)
    }

    pub async fn position_of(&self, id: CardId) -> Option<usize> {
        self.state.read().await.cards.position_of(id)
    }

    pub async fn transactions(&self) -> Vec<Transaction> {
        self.state.read().await.transactions.clone()
    }

    pub async fn user_data(&self) -> Option<UserData> {
        self.state.read().await.user_data.clone()
    }

    pub async fn load_state(&self, collection: Collection) -> LoadState {
        self.state.read().await.load_state(collection).clone()
    }

    pub async fn is_loading(&self) -> bool {
        self.state.read().await.is_loading()
    }

    pub async fn has_errors(&self) -> bool {
        self.state.read().await.has_errors()
    }

    pub async fn currency_type(&self) -> String {
        self.state.read().await.balance().currency_type
    }

    pub async fn balance_amount(&self) -> f64 {
        self.state
            .read()
            .await
            .user_data
            .as_ref()
            .map_or(DEFAULT_BALANCE_AMOUNT, |data| data.balance_amount)
    }

    pub async fn balance(&self) -> BalanceInfo {
        self.state.read().await.balance()
    }

    pub async fn snapshot(&self) -> PageSnapshot {
        let state = self.state.read().await;
        PageSnapshot {
            cards: state.cards.entries().to_vec(),
            transactions: state.transactions.clone(),
            user_data: state.user_data.clone(),
            balance: state.balance(),
            cards_state: state.cards_state.clone(),
            transactions_state: state.transactions_state.clone(),
            user_data_state: state.user_data_state.clone(),
            is_loading: state.is_loading(),
            has_errors: state.has_errors(),
        }
    }

    // =========================================================================
    // Fetching
    // =========================================================================

    pub async fn fetch_cards(&self) -> CardsResult<()> {
        self.run_fetch(
            Collection::Cards,
            self.source.fetch_debit_cards(),
            |state, cards: Vec<CardDetail>| state.cards.replace(cards),
        )
        .await
    }

    pub async fn fetch_transactions(&self) -> CardsResult<()> {
        self.run_fetch(
            Collection::Transactions,
            self.source.fetch_transactions(),
            |state, transactions| state.transactions = transactions,
        )
        .await
    }

    pub async fn fetch_user_data(&self) -> CardsResult<()> {
        self.run_fetch(
            Collection::UserData,
            self.source.fetch_user_data(),
            |state, user_data| state.user_data = Some(user_data),
        )
        .await
    }

    /// Fetches all three collections concurrently. Each settles on its own;
    /// one failing does not cancel or roll back the others.
    pub async fn fetch_all(&self) {
        let (cards, transactions, user_data) = tokio::join!(
            self.fetch_cards(),
            self.fetch_transactions(),
            self.fetch_user_data()
        );

        let failed = [cards, transactions, user_data]
            .iter()
            .filter(|result| result.is_err())
            .count();
        if failed > 0 {
            warn!("Cards page loaded with {} failed collection(s)", failed);
        } else {
            info!("Cards page loaded");
        }
    }

    async fn run_fetch<T, F>(
        &self,
        collection: Collection,
        fetch: F,
        apply: impl FnOnce(&mut PageState, T),
    ) -> CardsResult<()>
    where
        F: Future<Output = CardsResult<T>>,
    {
        let generation = {
            let mut state = self.state.write().await;
            *state.load_state_mut(collection) = LoadState::loading();
            state.generations.advance(collection)
        };

        let outcome = match tokio::time::timeout(self.fetch_timeout, fetch).await {
            Ok(result) => result,
            Err(_) => Err(CardsError::timeout(
                collection,
                u64::try_from(self.fetch_timeout.as_millis()).unwrap_or(u64::MAX),
            )),
        };

        let mut state = self.state.write().await;
        if state.generations.current(collection) != generation {
            debug!("Dropping superseded {} fetch", collection);
            return Err(CardsError::superseded(collection));
        }

        match outcome {
            Ok(value) => {
                apply(&mut *state, value);
                *state.load_state_mut(collection) = LoadState::default();
                debug!("Fetched {}", collection);
                Ok(())
            }
            Err(e) => {
                warn!("Error fetching {}: {}", collection, e);
                *state.load_state_mut(collection) = LoadState::failed(collection.failure_message());
                Err(e)
            }
        }
    }

    // =========================================================================
    // Local edits
    // =========================================================================

    pub async fn add_card(&self, card: CardDetail) -> CardId {
        let id = self.state.write().await.cards.push(card);
        debug!("Added card {}", id);
        id
    }

    /// Validates the add-card form and appends the resulting card.
    pub async fn add_card_from_form(&self, form: NewCardForm) -> CardsResult<CardId> {
        let card = form.into_card_detail()?;
        Ok(self.add_card(card).await)
    }

    pub async fn update_card(&self, id: CardId, card: CardDetail) -> CardsResult<()> {
        self.state.write().await.cards.update(id, card)
    }

    pub async fn remove_card(&self, id: CardId) -> CardsResult<()> {
        self.state.write().await.cards.remove(id)?;
        debug!("Removed card {}", id);
        Ok(())
    }

    /// Returns the card's new frozen state.
    pub async fn toggle_freeze(&self, id: CardId) -> CardsResult<bool> {
        self.state.write().await.cards.toggle_freeze(id)
    }

    /// Replaces every card. The replacements get fresh ids, returned in order.
    pub async fn replace_cards(&self, cards: Vec<CardDetail>) -> Vec<CardId> {
        let mut state = self.state.write().await;
        state.cards.replace(cards);
        state.cards.iter().map(|entry| entry.id).collect()
    }

    pub async fn clear_errors(&self) {
        let mut state = self.state.write().await;
        for collection in Collection::ALL {
            state.load_state_mut(collection).error = None;
        }
    }

    /// Back to the empty state. Fetches still in flight are superseded.
    pub async fn reset(&self) {
        let mut state = self.state.write().await;
        let mut generations = state.generations;
        for collection in Collection::ALL {
            generations.advance(collection);
        }
        *state = PageState {
            generations,
            ..PageState::default()
        };
        info!("Cards page reset");
    }
}
