//! Card model
//!
//! A card is the unit the board lays out: identity, hosted app, and the
//! pair of gesture controllers that own its position and dimensions.

#[allow(clippy::module_inception)]
mod card;
mod config;
mod kind;
mod region;

pub use card::Card;
pub use config::{CardCallbacks, CardConfig};
pub use kind::CardKind;
pub use region::{hit_test, CardRegion};

/// Unique card identifier
pub type CardId = u64;
