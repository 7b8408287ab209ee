pub mod core;

// module re-exports
pub use crate::core::definitions::{Cell, Figure, MatchInterface, MoveRecord, RulesError};
pub use crate::core::engine::{Board, CastlingRights, CastlingSide, Color, PieceType, Square};
pub use crate::core::game::Game;
