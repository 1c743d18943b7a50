//! FIFO of face turns waiting to be animated.
use std::collections::VecDeque;

use log::info;

use crate::notation;
use crate::rotation::RotationId;

/// Pending face turns, executed strictly in enqueue order.
///
/// A turn leaves the queue when it starts animating, not when it finishes.
#[derive(Clone, Debug, Default)]
pub struct RotationQueue {
    pending: VecDeque<RotationId>,
}

impl RotationQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends one turn.
    pub fn enqueue(&mut self, rotation: RotationId) {
        info!("Enqueue rotation: {rotation}");
        self.pending.push_back(rotation);
    }

    /// Appends a sequence of turns. With `reverse`, the sequence is appended
    /// back to front with every turn inverted, undoing the original sequence.
    pub fn enqueue_all(&mut self, rotations: &[RotationId], reverse: bool) {
        if reverse {
            for rotation in notation::reversed(rotations) {
                self.enqueue(rotation);
            }
        } else {
            for &rotation in rotations {
                self.enqueue(rotation);
            }
        }
    }

    /// Parses `notation` leniently and appends the result, see [`Self::enqueue_all`].
    pub fn enqueue_notation(&mut self, notation: &str, reverse: bool) {
        let rotations = notation::parse(notation);
        self.enqueue_all(&rotations, reverse);
    }

    /// Removes the oldest pending turn.
    pub fn pop(&mut self) -> Option<RotationId> {
        self.pending.pop_front()
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = RotationId> + '_ {
        self.pending.iter().copied()
    }
}
