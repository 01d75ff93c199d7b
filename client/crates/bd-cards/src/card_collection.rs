use crate::{CardEntry, CardsError, CardsResult};

use bd_core::{CardDetail, CardId};

use std::collections::HashMap;

/// Ordered cards with an id → position index.
///
/// The sequence never has gaps and every id in the index points at the
/// entry carrying that id. Removal shifts later entries down by one and
/// re-indexes them.
#[derive(Debug, Clone, Default)]
pub struct CardCollection {
    entries: Vec<CardEntry>,
    positions: HashMap<CardId, usize>,
}

impl CardCollection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_cards(cards: impl IntoIterator<Item = CardDetail>) -> Self {
        let mut collection = Self::new();
        collection.replace(cards);
        collection
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[CardEntry] {
        &self.entries
    }

    pub fn iter(&self) -> impl Iterator<Item = &CardEntry> {
        self.entries.iter()
    }

    pub fn get(&self, id: CardId) -> Option<&CardDetail> {
        self.positions.get(&id).map(|&position| &self.entries[position].card)
    }

    pub fn position_of(&self, id: CardId) -> Option<usize> {
        self.positions.get(&id).copied()
    }

    pub fn card_at(&self, position: usize) -> Option<CardId> {
        self.entries.get(position).map(|entry| entry.id)
    }

    pub fn push(&mut self, card: CardDetail) -> CardId {
        let entry = CardEntry::new(card);
        let id = entry.id;
        self.positions.insert(id, self.entries.len());
        self.entries.push(entry);
        id
    }

    pub fn update(&mut self, id: CardId, card: CardDetail) -> CardsResult<()> {
        let position = self.require(id)?;
        self.entries[position].card = card;
        Ok(())
    }

    pub fn remove(&mut self, id: CardId) -> CardsResult<CardDetail> {
        let position = self.require(id)?;
        self.positions.remove(&id);
        let removed = self.entries.remove(position);

        for (offset, entry) in self.entries[position..].iter().enumerate() {
            self.positions.insert(entry.id, position + offset);
        }

        Ok(removed.card)
    }

    /// Flips the frozen flag and returns the new value.
    pub fn toggle_freeze(&mut self, id: CardId) -> CardsResult<bool> {
        let position = self.require(id)?;
        let card = &mut self.entries[position].card;
        card.is_frozen = !card.is_frozen;
        Ok(card.is_frozen)
    }

    /// Drops every card and assigns fresh ids to the replacements.
    pub fn replace(&mut self, cards: impl IntoIterator<Item = CardDetail>) {
        self.clear();
        for card in cards {
            self.push(card);
        }
    }

    pub fn clear(&mut self) {
        self.entries.clear();
        self.positions.clear();
    }

    #[track_caller]
    fn require(&self, id: CardId) -> CardsResult<usize> {
        self.position_of(id)
            .ok_or_else(|| CardsError::card_not_found(id))
    }

    #[cfg(test)]
    pub(crate) fn is_consistent(&self) -> bool {
        self.positions.len() == self.entries.len()
            && self
                .entries
                .iter()
                .enumerate()
                .all(|(position, entry)| self.positions.get(&entry.id) == Some(&position))
    }
}
