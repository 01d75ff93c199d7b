use bd_core::{CardDetail, CardId};

use serde::Serialize;

/// A card as held by the page store, paired with its stable id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CardEntry {
    pub id: CardId,
    #[serde(flatten)]
    pub card: CardDetail,
}

impl CardEntry {
    pub fn new(card: CardDetail) -> Self {
        Self {
            id: CardId::new(),
            card,
        }
    }
}
