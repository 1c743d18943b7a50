//! Serializes queued face turns: at most one turn animates at any time.
use std::fmt::Debug;

use log::info;

use crate::queue::RotationQueue;
use crate::rotation::RotationId;
use crate::turn::{ActiveTurn, CubePieces, PieceTransforms, TurnSettings};

/// What a call to [`TurnScheduler::advance`] did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TickOutcome {
    /// Nothing queued and nothing turning.
    Idle,
    /// A turn was dequeued and classified; no rotation applied yet.
    Started(RotationId),
    /// The active turn moved but has not reached 90 degrees.
    Turning(RotationId),
    /// The active turn completed its quarter turn on this tick.
    Finished(RotationId),
}

/// Drives queued turns one at a time over the bound cube pieces.
#[derive(Clone, Debug)]
pub struct TurnScheduler<H> {
    pieces: CubePieces<H>,
    settings: TurnSettings,
    active: Option<ActiveTurn<H>>,
}

impl<H: Copy + Eq + Debug> TurnScheduler<H> {
    pub fn new(pieces: CubePieces<H>, settings: TurnSettings) -> Self {
        Self {
            pieces,
            settings,
            active: None,
        }
    }

    /// Per-tick entry point.
    ///
    /// Continues the active turn if there is one, otherwise starts the next
    /// queued turn. A turn is never interrupted by newly queued ones.
    pub fn advance(
        &mut self,
        queue: &mut RotationQueue,
        dt: f32,
        transforms: &mut impl PieceTransforms<H>,
    ) -> TickOutcome {
        let dt = if dt.is_finite() { dt.max(0.0) } else { 0.0 };

        if let Some(turn) = &mut self.active {
            let rotation = turn.rotation();
            if turn.step(dt, transforms) {
                self.active = None;
                TickOutcome::Finished(rotation)
            } else {
                TickOutcome::Turning(rotation)
            }
        } else if let Some(rotation) = queue.pop() {
            info!("Perform rotation: {rotation}");
            self.active = Some(ActiveTurn::start(
                rotation,
                &self.pieces,
                transforms,
                &self.settings,
            ));
            TickOutcome::Started(rotation)
        } else {
            TickOutcome::Idle
        }
    }

    pub fn is_turning(&self) -> bool {
        self.active.is_some()
    }

    pub fn active(&self) -> Option<&ActiveTurn<H>> {
        self.active.as_ref()
    }

    pub fn pieces(&self) -> &CubePieces<H> {
        &self.pieces
    }
}
