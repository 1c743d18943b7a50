//! Engine-independent core of the cube game.
//!
//! The host scene owns the cube pieces and exposes their transforms through
//! [`turn::PieceTransforms`]. Everything here is driven by the host calling
//! [`scheduler::TurnScheduler::advance`] once per frame:
//!
//! caller -> [`notation`] -> [`queue::RotationQueue`] -> [`scheduler::TurnScheduler`]
//! -> [`turn::ActiveTurn`] (classify once, then step every tick until 90 degrees)
pub mod constants;
pub mod layout;
pub mod notation;
pub mod queue;
pub mod rotation;
pub mod scheduler;
pub mod turn;

pub use notation::NotationError;
pub use queue::RotationQueue;
pub use rotation::{Face, RotationId};
pub use scheduler::{TickOutcome, TurnScheduler};
pub use turn::{ActiveTurn, CubePieces, PieceTransforms, TurnSettings};
