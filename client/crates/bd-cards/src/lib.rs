mod card_collection;
mod card_entry;
mod cards_data_source;
mod cards_page_store;
mod collection;
mod error;
mod fixture_cards_service;
mod load_state;
mod page_snapshot;

pub use card_collection::CardCollection;
pub use card_entry::CardEntry;
pub use cards_data_source::CardsDataSource;
pub use cards_page_store::CardsPageStore;
pub use collection::Collection;
pub use error::{CardsError, CardsResult};
pub use fixture_cards_service::{
    DEBIT_CARDS_FIXTURE, FixtureCardsService, TRANSACTIONS_FIXTURE, USER_DATA_FIXTURE,
};
pub use load_state::LoadState;
pub use page_snapshot::PageSnapshot;

#[cfg(test)]
mod tests;
