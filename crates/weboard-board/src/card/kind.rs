//! Kinds of app a card can host

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::GestureError;

/// App hosted inside a card
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CardKind {
    /// Plain text note
    #[default]
    Note,
    /// Link note
    Link,
    /// Kanban board
    Kanban,
    /// Password manager
    Passwords,
    /// RSS reader
    Rss,
    /// Analytics dashboard
    Analytics,
    /// User-authored mini-app
    MiniApp,
    /// Embedded web page
    WebEmbed,
}

impl CardKind {
    /// Tag used in snapshots and by the host
    pub fn as_str(self) -> &'static str {
        match self {
            CardKind::Note => "note",
            CardKind::Link => "link",
            CardKind::Kanban => "kanban",
            CardKind::Passwords => "passwords",
            CardKind::Rss => "rss",
            CardKind::Analytics => "analytics",
            CardKind::MiniApp => "mini_app",
            CardKind::WebEmbed => "web_embed",
        }
    }
}

impl FromStr for CardKind {
    type Err = GestureError;

    fn from_str(tag: &str) -> Result<Self, Self::Err> {
        match tag {
            "note" => Ok(CardKind::Note),
            "link" => Ok(CardKind::Link),
            "kanban" => Ok(CardKind::Kanban),
            "passwords" => Ok(CardKind::Passwords),
            "rss" => Ok(CardKind::Rss),
            "analytics" => Ok(CardKind::Analytics),
            "mini_app" => Ok(CardKind::MiniApp),
            "web_embed" => Ok(CardKind::WebEmbed),
            other => Err(GestureError::UnknownKind(other.to_string())),
        }
    }
}
