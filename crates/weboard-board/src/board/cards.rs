//! Card lifecycle and focus

use tracing::debug;

use super::Board;
use crate::card::{Card, CardCallbacks, CardConfig, CardId, CardRegion};
use crate::error::{GestureError, Result};
use crate::math::{Dimensions, Position};

impl Board {
    /// Mount a new card and bring it to the front
    pub fn create_card(&mut self, config: CardConfig, callbacks: CardCallbacks) -> CardId {
        self.create_card_with(config, |_| callbacks)
    }

    /// Mount a new card whose callbacks need its id
    pub fn create_card_with(
        &mut self,
        config: CardConfig,
        callbacks: impl FnOnce(CardId) -> CardCallbacks,
    ) -> CardId {
        let id = self.allocate_id();
        let callbacks = callbacks(id);

        // Cascade cards without a stored position
        let position = config.position.unwrap_or_else(|| {
            let offset = (id % 10) as f64 * 30.0;
            Position::new(100.0 + offset, 100.0 + offset)
        });
        let dimensions = config.size.unwrap_or(self.config.default_card_size);
        let min_size = config.min_size.unwrap_or(self.config.min_card_size);

        let card = Card::new(id, config.kind, config.title, position, dimensions, min_size, callbacks);
        self.cards.insert(id, card);
        self.focus_card(id);
        debug!(card = id, kind = config.kind.as_str(), "card mounted");

        id
    }

    /// Next unused id, wrapping past the top of the id space
    fn allocate_id(&mut self) -> CardId {
        let mut id = self.next_id;
        while id == 0 || self.cards.contains_key(&id) {
            id = id.wrapping_add(1);
        }
        self.next_id = id.wrapping_add(1);
        id
    }

    /// Unmount a card, releasing any gesture it holds
    ///
    /// Returns `false` if no such card exists.
    pub fn remove_card(&mut self, id: CardId) -> bool {
        match self.cards.remove(&id) {
            Some(mut card) => {
                card.teardown(&mut self.surface);
                debug!(card = id, "card unmounted");
                true
            }
            None => false,
        }
    }

    /// Get a card by ID
    #[inline]
    pub fn card(&self, id: CardId) -> Option<&Card> {
        self.cards.get(&id)
    }

    /// All cards, in id order
    pub fn cards(&self) -> impl Iterator<Item = &Card> {
        self.cards.values()
    }

    /// Number of mounted cards
    #[inline]
    pub fn card_count(&self) -> usize {
        self.cards.len()
    }

    /// Cards sorted by z-order (back to front)
    pub fn cards_by_z(&self) -> Vec<&Card> {
        let mut cards: Vec<&Card> = self.cards.values().collect();
        cards.sort_by_key(|card| card.z_order);
        cards
    }

    /// Bring a card to the front
    pub fn focus_card(&mut self, id: CardId) {
        if let Some(card) = self.cards.get_mut(&id) {
            card.z_order = self.next_z;
            self.next_z = self.next_z.saturating_add(1);
        }
    }

    /// Topmost card and region under a board position
    pub fn region_at(&self, pos: Position) -> Option<(CardId, CardRegion)> {
        let header_height = self.config.header_height;
        let handle_size = self.config.handle_size;

        self.cards_by_z()
            .into_iter()
            .rev()
            .find_map(|card| card.region_at(pos, header_height, handle_size).map(|region| (card.id, region)))
    }

    /// Apply a position reloaded from storage
    pub fn sync_card_position(&mut self, id: CardId, position: Position) -> Result<()> {
        let card = self.cards.get_mut(&id).ok_or(GestureError::UnknownCard(id))?;
        card.sync_position(position);
        Ok(())
    }

    /// Apply dimensions reloaded from storage
    pub fn sync_card_dimensions(&mut self, id: CardId, dimensions: Dimensions) -> Result<()> {
        let card = self.cards.get_mut(&id).ok_or(GestureError::UnknownCard(id))?;
        card.sync_dimensions(dimensions);
        Ok(())
    }
}
