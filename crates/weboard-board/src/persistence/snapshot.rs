//! Snapshot serialization for board layout

use serde::{Deserialize, Serialize};

use crate::card::{CardId, CardKind};
use crate::error::{GestureError, Result};
use crate::math::{Dimensions, Position};

/// Persisted layout of one card
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PersistedCard {
    pub id: CardId,
    pub kind: CardKind,
    pub title: String,
    pub position: Position,
    pub dimensions: Dimensions,
    #[serde(default)]
    pub z_order: u32,
}

/// Snapshot of board layout for persistence
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct BoardSnapshot {
    /// Version for migration support
    pub version: u32,
    /// Card layouts, back to front
    pub cards: Vec<PersistedCard>,
}

impl BoardSnapshot {
    /// Current snapshot version
    pub const CURRENT_VERSION: u32 = 1;

    /// Create a new snapshot
    pub fn new(cards: Vec<PersistedCard>) -> Self {
        Self {
            version: Self::CURRENT_VERSION,
            cards,
        }
    }

    /// Check if snapshot needs migration
    pub fn needs_migration(&self) -> bool {
        self.version < Self::CURRENT_VERSION
    }

    /// Migrate snapshot to current version
    pub fn migrate(&mut self) {
        // Version 0 snapshots carried no z-order; stack them in list order.
        if self.version == 0 {
            for (index, card) in self.cards.iter_mut().enumerate() {
                if card.z_order == 0 {
                    card.z_order = index as u32 + 1;
                }
            }
        }
        self.version = Self::CURRENT_VERSION;
    }

    /// Serialize to JSON
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string(self).map_err(GestureError::Snapshot)
    }

    /// Parse from JSON, migrating older versions
    pub fn from_json(json: &str) -> Result<Self> {
        let mut snapshot: BoardSnapshot = serde_json::from_str(json).map_err(GestureError::Snapshot)?;
        if snapshot.needs_migration() {
            snapshot.migrate();
        }
        Ok(snapshot)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn note(id: CardId, z_order: u32) -> PersistedCard {
        PersistedCard {
            id,
            kind: CardKind::Note,
            title: format!("Note {id}"),
            position: Position::new(10.0 * id as f64, 20.0),
            dimensions: Dimensions::new(300.0, 200.0),
            z_order,
        }
    }

    #[test]
    fn test_snapshot_creation() {
        let snapshot = BoardSnapshot::new(vec![note(1, 1)]);

        assert_eq!(snapshot.version, BoardSnapshot::CURRENT_VERSION);
        assert_eq!(snapshot.cards.len(), 1);
        assert!(!snapshot.needs_migration());
    }

    #[test]
    fn test_snapshot_json_shape() {
        let json = BoardSnapshot::new(vec![note(1, 3)]).to_json().unwrap();
        assert_eq!(
            json,
            r#"{"version":1,"cards":[{"id":1,"kind":"note","title":"Note 1","position":{"x":10.0,"y":20.0},"dimensions":{"width":300.0,"height":200.0},"z_order":3}]}"#
        );
    }

    #[test]
    fn test_snapshot_serialization() {
        let snapshot = BoardSnapshot::new(vec![note(1, 1), note(2, 2)]);
        let restored = BoardSnapshot::from_json(&snapshot.to_json().unwrap()).unwrap();

        assert_eq!(restored, snapshot);
    }

    #[test]
    fn test_snapshot_default() {
        let snapshot = BoardSnapshot::default();

        assert_eq!(snapshot.version, 0); // Default doesn't set CURRENT_VERSION
        assert!(snapshot.cards.is_empty());
        assert!(snapshot.needs_migration());
    }

    #[test]
    fn test_version_zero_migrates_z_order() {
        let json = r#"{"version":0,"cards":[
            {"id":4,"kind":"rss","title":"News","position":{"x":0,"y":0},"dimensions":{"width":300,"height":200}},
            {"id":9,"kind":"kanban","title":"Sprint","position":{"x":5,"y":5},"dimensions":{"width":400,"height":300}}
        ]}"#;
        let snapshot = BoardSnapshot::from_json(json).unwrap();

        assert_eq!(snapshot.version, BoardSnapshot::CURRENT_VERSION);
        assert_eq!(snapshot.cards[0].z_order, 1);
        assert_eq!(snapshot.cards[1].z_order, 2);
        assert_eq!(snapshot.cards[1].kind, CardKind::Kanban);
    }

    #[test]
    fn test_malformed_snapshot() {
        assert!(matches!(BoardSnapshot::from_json("[1,2]"), Err(GestureError::Snapshot(_))));
    }
}
