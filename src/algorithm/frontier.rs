//! Set of empty positions eligible for the next placement
//!
//! Elements are kept in a dense vector with a per-cell slot index, so
//! membership tests and removals are O(1) and iteration order depends only on
//! the sequence of operations. The latter keeps runs reproducible for a fixed
//! seed, which a hashed set would not.

use crate::spatial::canvas::{Canvas, Position};
use crate::spatial::neighborhood::neighbors;

const NOT_PRESENT: usize = usize::MAX;

/// Frontier of growable positions
#[derive(Clone, Debug)]
pub struct FrontierSet {
    positions: Vec<Position>,
    slots: Vec<usize>,
    width: usize,
    height: usize,
}

impl FrontierSet {
    /// Create an empty frontier over a `width × height` domain
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            positions: Vec::new(),
            slots: vec![NOT_PRESENT; width.saturating_mul(height)],
            width,
            height,
        }
    }

    /// Create an empty frontier matching the canvas dimensions
    pub fn for_canvas(canvas: &Canvas) -> Self {
        Self::new(canvas.width(), canvas.height())
    }

    const fn cell_index(&self, pos: Position) -> Option<usize> {
        if pos.x < self.width && pos.y < self.height {
            Some(pos.y * self.width + pos.x)
        } else {
            None
        }
    }

    /// Seed the frontier with the positions that are in bounds and empty on `canvas`
    ///
    /// Returns the number of positions added.
    pub fn seed<I>(&mut self, canvas: &Canvas, positions: I) -> usize
    where
        I: IntoIterator<Item = Position>,
    {
        self.union(positions.into_iter().filter(|&pos| canvas.is_empty_at(pos)))
    }

    /// Insert a single position, returning whether it was newly added
    ///
    /// Out-of-bounds positions are ignored.
    pub fn insert(&mut self, pos: Position) -> bool {
        let Some(index) = self.cell_index(pos) else {
            return false;
        };
        let slot_count = self.positions.len();
        match self.slots.get_mut(index) {
            Some(slot) if *slot == NOT_PRESENT => {
                *slot = slot_count;
                self.positions.push(pos);
                true
            }
            _ => false,
        }
    }

    /// Insert every position, returning the number newly added
    pub fn union<I>(&mut self, positions: I) -> usize
    where
        I: IntoIterator<Item = Position>,
    {
        positions
            .into_iter()
            .filter(|&pos| self.insert(pos))
            .count()
    }

    /// Whether `pos` is in the frontier
    pub fn contains(&self, pos: Position) -> bool {
        self.cell_index(pos)
            .and_then(|index| self.slots.get(index))
            .is_some_and(|&slot| slot != NOT_PRESENT)
    }

    /// Remove `pos`, returning whether it was present
    pub fn remove(&mut self, pos: Position) -> bool {
        let Some(index) = self.cell_index(pos) else {
            return false;
        };
        let Some(slot) = self.slots.get_mut(index) else {
            return false;
        };
        if *slot == NOT_PRESENT {
            return false;
        }
        let removed_slot = std::mem::replace(slot, NOT_PRESENT);
        self.positions.swap_remove(removed_slot);

        // The former last element now occupies the vacated slot
        if let Some(&moved) = self.positions.get(removed_slot) {
            if let Some(moved_index) = self.cell_index(moved) {
                if let Some(moved_slot) = self.slots.get_mut(moved_index) {
                    *moved_slot = removed_slot;
                }
            }
        }
        true
    }

    /// Add the empty in-bounds neighbors of a freshly committed position
    ///
    /// Returns the number of positions newly added. Expanding from a position
    /// whose neighbors are all filled or already present adds nothing.
    pub fn expand_from(&mut self, canvas: &Canvas, pos: Position, radius: usize) -> usize {
        let (width, height) = canvas.dimensions();
        self.union(neighbors(pos, radius, width, height).filter(|&n| canvas.is_empty_at(n)))
    }

    /// Grid dimensions as `(width, height)`
    pub const fn dimensions(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    /// Number of positions in the frontier
    pub const fn len(&self) -> usize {
        self.positions.len()
    }

    /// Whether the frontier is empty
    pub const fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Positions in iteration order
    pub fn as_slice(&self) -> &[Position] {
        &self.positions
    }

    /// Iterate over the positions
    pub fn iter(&self) -> impl Iterator<Item = Position> + '_ {
        self.positions.iter().copied()
    }
}
