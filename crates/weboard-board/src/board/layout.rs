//! Layout snapshot export and restore

use std::collections::BTreeSet;

use tracing::{debug, warn};

use super::Board;
use crate::card::{Card, CardCallbacks, CardId};
use crate::error::{GestureError, Result};
use crate::persistence::{BoardSnapshot, PersistedCard};

impl Board {
    /// Capture the layout of every card, back to front
    pub fn snapshot(&self) -> BoardSnapshot {
        let cards = self
            .cards_by_z()
            .into_iter()
            .map(|card| PersistedCard {
                id: card.id,
                kind: card.kind,
                title: card.title.clone(),
                position: card.position(),
                dimensions: card.dimensions(),
                z_order: card.z_order,
            })
            .collect();
        BoardSnapshot::new(cards)
    }

    /// Replace every card with the cards of a snapshot
    ///
    /// Current cards are unmounted first, so gestures in flight are torn
    /// down. `callbacks` supplies persistence callbacks per restored card.
    /// A snapshot with duplicate ids is rejected and the board is left
    /// untouched.
    pub fn restore(
        &mut self,
        mut snapshot: BoardSnapshot,
        mut callbacks: impl FnMut(CardId) -> CardCallbacks,
    ) -> Result<()> {
        if snapshot.needs_migration() {
            snapshot.migrate();
        }
        validate(&snapshot).inspect_err(|err| warn!(%err, "snapshot rejected"))?;

        let ids: Vec<CardId> = self.cards.keys().copied().collect();
        for id in ids {
            self.remove_card(id);
        }

        let min_size = self.config.min_card_size;
        for persisted in snapshot.cards {
            let mut card = Card::new(
                persisted.id,
                persisted.kind,
                persisted.title,
                persisted.position,
                persisted.dimensions,
                min_size,
                callbacks(persisted.id),
            );
            card.z_order = persisted.z_order;
            self.next_id = self.next_id.max(persisted.id.saturating_add(1));
            self.next_z = self.next_z.max(persisted.z_order.saturating_add(1));
            self.cards.insert(persisted.id, card);
        }
        debug!(cards = self.cards.len(), "layout restored");
        Ok(())
    }
}

/// Reject snapshots whose ids would collide on insert
fn validate(snapshot: &BoardSnapshot) -> Result<()> {
    let mut seen = BTreeSet::new();
    for card in &snapshot.cards {
        if !seen.insert(card.id) {
            return Err(GestureError::InvalidSnapshot(format!("duplicate card id {}", card.id)));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::{CardConfig, CardKind};
    use crate::math::{Dimensions, Position};

    #[test]
    fn test_snapshot_orders_back_to_front() {
        let mut board = Board::default();
        let a = board.create_card(CardConfig::default(), CardCallbacks::default());
        let b = board.create_card(CardConfig::default(), CardCallbacks::default());
        board.focus_card(a);

        let snapshot = board.snapshot();
        let ids: Vec<CardId> = snapshot.cards.iter().map(|card| card.id).collect();

        assert_eq!(ids, vec![b, a]);
        assert_eq!(snapshot.version, BoardSnapshot::CURRENT_VERSION);
    }

    #[test]
    fn test_restore_round_trip_and_id_allocation() {
        let mut source = Board::default();
        source.create_card(
            CardConfig {
                title: "Feeds".to_string(),
                kind: CardKind::Rss,
                position: Some(Position::new(40.0, 60.0)),
                size: Some(Dimensions::new(420.0, 380.0)),
                ..Default::default()
            },
            CardCallbacks::default(),
        );
        let snapshot = source.snapshot();

        let mut board = Board::default();
        board.create_card(CardConfig::default(), CardCallbacks::default());
        board.restore(snapshot.clone(), |_| CardCallbacks::default()).unwrap();

        assert_eq!(board.snapshot(), snapshot);
        let next = board.create_card(CardConfig::default(), CardCallbacks::default());
        assert_eq!(next, 2);
        assert_eq!(board.cards_by_z().last().map(|card| card.id), Some(next));
    }

    fn persisted(id: CardId, z_order: u32) -> PersistedCard {
        PersistedCard {
            id,
            kind: CardKind::Note,
            title: format!("Card {id}"),
            position: Position::new(100.0, 100.0),
            dimensions: Dimensions::new(300.0, 200.0),
            z_order,
        }
    }

    #[test]
    fn test_restore_rejects_duplicate_ids() {
        let mut board = Board::default();
        let kept = board.create_card(CardConfig::default(), CardCallbacks::default());
        let snapshot = BoardSnapshot::new(vec![persisted(3, 1), persisted(3, 2)]);

        let err = board.restore(snapshot, |_| CardCallbacks::default()).unwrap_err();

        assert!(matches!(err, GestureError::InvalidSnapshot(ref msg) if msg.contains("duplicate card id 3")));
        assert!(board.card(kept).is_some());
        assert_eq!(board.card_count(), 1);
    }

    #[test]
    fn test_restore_max_id_keeps_allocation_unique() {
        let json = r#"{"version":1,"cards":[{"id":18446744073709551615,"kind":"note","title":"Last",
            "position":{"x":0.0,"y":0.0},"dimensions":{"width":300.0,"height":200.0},"z_order":1}]}"#;
        let snapshot = BoardSnapshot::from_json(json).unwrap();
        let mut board = Board::default();

        board.restore(snapshot, |_| CardCallbacks::default()).unwrap();
        let a = board.create_card(CardConfig::default(), CardCallbacks::default());
        let b = board.create_card(CardConfig::default(), CardCallbacks::default());

        assert_eq!((a, b), (1, 2));
        assert_eq!(board.card_count(), 3);
        assert!(board.card(CardId::MAX).is_some());
    }

    #[test]
    fn test_restore_skips_taken_ids_on_create() {
        let mut board = Board::default();
        let snapshot = BoardSnapshot::new(vec![persisted(CardId::MAX - 1, 1)]);

        board.restore(snapshot, |_| CardCallbacks::default()).unwrap();
        let last = board.create_card(CardConfig::default(), CardCallbacks::default());
        let wrapped = board.create_card(CardConfig::default(), CardCallbacks::default());

        assert_eq!((last, wrapped), (CardId::MAX, 1));
        assert_eq!(board.card_count(), 3);
    }

    #[test]
    fn test_restore_saturates_extreme_z_order() {
        let json = r#"{"version":1,"cards":[{"id":7,"kind":"note","title":"Top",
            "position":{"x":0.0,"y":0.0},"dimensions":{"width":300.0,"height":200.0},
            "z_order":4294967295}]}"#;
        let snapshot = BoardSnapshot::from_json(json).unwrap();
        let mut board = Board::default();

        board.restore(snapshot, |_| CardCallbacks::default()).unwrap();
        let next = board.create_card(CardConfig::default(), CardCallbacks::default());

        assert_eq!(next, 8);
        assert_eq!(board.card(7).unwrap().z_order, u32::MAX);
        assert_eq!(board.card(next).unwrap().z_order, u32::MAX);
    }
}
