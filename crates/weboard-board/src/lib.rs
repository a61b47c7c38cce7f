//! Card Gesture Engine for WeBoard
//!
//! This crate provides the direct-manipulation core of the sticky note board:
//! - Drag-to-move with a fixed pointer anchor
//! - Corner-handle resize with minimum-size clamping
//! - Animation-frame coalescing of resize updates
//! - Scoped window-listener and cursor acquisition per gesture
//! - Board-level hit testing, focus and layout snapshots
//!
//! ## Architecture
//!
//! The crate is organized into focused modules:
//!
//! - [`math`]: Geometry types (`Position`, `Dimensions`, `Rect`)
//! - [`input`]: Drag and resize state machines and the input surface
//! - [`card`]: Card model composing one controller of each kind
//! - [`persistence`]: Layout snapshots for the storage backend
//!
//! ## Example
//!
//! ```rust
//! use weboard_board::{Board, CardCallbacks, CardConfig, Dimensions, PointerButton, Position};
//!
//! let mut board = Board::default();
//! let id = board.create_card(
//!     CardConfig {
//!         title: "Groceries".to_string(),
//!         position: Some(Position::new(100.0, 100.0)),
//!         size: Some(Dimensions::new(300.0, 200.0)),
//!         ..Default::default()
//!     },
//!     CardCallbacks::default().on_position_change(|p| println!("moved to {}, {}", p.x, p.y)),
//! );
//!
//! board.handle_pointer_down(Position::new(150.0, 110.0), PointerButton::Primary);
//! board.handle_pointer_move(Position::new(250.0, 210.0));
//! board.handle_pointer_up();
//!
//! assert_eq!(board.card(id).unwrap().position(), Position::new(200.0, 200.0));
//! ```
//!
//! ## Design Principles
//!
//! 1. **Pure Rust Core**: All gesture state is pure Rust, testable without a browser
//! 2. **Host-driven Time**: Frames advance only when the host calls [`Board::tick_frame`]
//! 3. **Explicit Release**: Every listener, cursor and frame acquired by a gesture
//!    is released on pointer-up or card teardown

pub mod card;
pub mod input;
pub mod math;
pub mod persistence;

mod board;
mod config;
mod error;

// WASM exports (only available with "wasm" feature)
#[cfg(feature = "wasm")]
mod wasm;
#[cfg(feature = "wasm")]
pub use wasm::*;

// Re-export core types for convenience
pub use board::Board;
pub use card::{Card, CardCallbacks, CardConfig, CardId, CardKind, CardRegion};
pub use config::BoardConfig;
pub use error::{GestureError, Result};
pub use input::{
    calculate_resize, AxisRule, DragController, InputResult, InputSurface, PointerButton,
    ResizeController, ResizeDirection,
};
pub use math::{Dimensions, Position, Rect};
pub use persistence::{BoardSnapshot, PersistedCard};
