use std::collections::HashMap;

use crate::accumulator::Accumulator;
use crate::grid::Position;

/// Number of bins on the conveyor. Digit glyphs `0`..`9` address them.
pub const BINS: usize = 10;

/// What a digit glyph did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropAction {
    /// A value arrived at bin 0 and became the left operand.
    RetrievedLeft,
    /// A value arrived at bin 0 and became the right operand.
    RetrievedRight,
    /// The left operand was copied into the addressed bin.
    Stored,
    Idle,
}

/// A position-keyed delay line.
///
/// Values dropped into bin `n` ride the conveyor toward bin 0 one bin per
/// layer advance, and can only be picked up once they get there.
///
/// Stored as a ring of ten maps: advancing moves `head` instead of moving
/// the maps, so it costs the same no matter how much is stored.
#[derive(Debug, Clone, Default)]
pub struct Conveyor {
    bins: [HashMap<Position, String>; BINS],
    head: usize,
}

impl Conveyor {
    pub fn new() -> Self {
        Self::default()
    }

    fn bin(&self, n: usize) -> &HashMap<Position, String> {
        &self.bins[(self.head + n) % BINS]
    }

    fn bin_mut(&mut self, n: usize) -> &mut HashMap<Position, String> {
        &mut self.bins[(self.head + n) % BINS]
    }

    /// The value waiting in bin `n` at `pos`, if any.
    pub fn peek(&self, n: usize, pos: Position) -> Option<&str> {
        self.bin(n).get(&pos).map(String::as_str)
    }

    /// Total number of values on the conveyor.
    pub fn len(&self) -> usize {
        self.bins.iter().map(HashMap::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.bins.iter().all(HashMap::is_empty)
    }

    /// Discard bin 0 and append an empty bin at the tail.
    pub fn advance(&mut self) {
        self.bins[self.head].clear();
        self.head = (self.head + 1) % BINS;
    }

    /// Run digit glyph `n` at `pos` against `acc`.
    ///
    /// Retrieval always reads bin 0; storing targets bin `n`.
    pub fn operate(&mut self, n: usize, pos: Position, acc: &mut Accumulator) -> DropAction {
        debug_assert!(n < BINS);
        if self.bin(0).contains_key(&pos) {
            let slot = if acc.left().is_empty() {
                Some(DropAction::RetrievedLeft)
            } else if acc.right().is_empty() {
                Some(DropAction::RetrievedRight)
            } else {
                None
            };
            if let Some(action) = slot {
                if let Some(value) = self.bin_mut(0).remove(&pos) {
                    // The slot was checked free above.
                    let _ = acc.push_value(value);
                }
                return action;
            }
        }

        if !self.bin(n).contains_key(&pos) && !acc.left().is_empty() {
            let value = acc.left().to_string();
            self.bin_mut(n).insert(pos, value);
            return DropAction::Stored;
        }
        DropAction::Idle
    }
}
