use super::types::Tile;
use crate::games::session_rng::SessionRng;

/// Row-major N x N arrangement of numbered tiles plus a single empty slot.
/// Mutated only through `swap_with_empty`, which preserves the tile multiset.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    slots: Vec<Tile>,
    size: usize,
}

impl Board {
    /// The canonical solved arrangement: 1..N²-1 ascending, empty last.
    pub fn solved(size: usize) -> Self {
        let slot_count = size * size;
        let mut slots: Vec<Tile> = (1..slot_count)
            .map(|label| Tile::Numbered(label as u8))
            .collect();
        slots.push(Tile::Empty);
        Self { slots, size }
    }

    /// Uniformly random permutation of the solved arrangement. Re-shuffles if
    /// the permutation happens to reproduce the solved order, so a fresh board
    /// always has moves left to make.
    pub fn shuffled(size: usize, rng: &mut SessionRng) -> Self {
        let mut board = Self::solved(size);
        loop {
            rng.shuffle(&mut board.slots);
            if !board.is_solved() {
                return board;
            }
        }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn slots(&self) -> &[Tile] {
        &self.slots
    }

    pub fn empty_index(&self) -> usize {
        self.slots
            .iter()
            .position(|&slot| slot == Tile::Empty)
            .unwrap_or(0)
    }

    pub fn is_solved(&self) -> bool {
        let last = self.slots.len() - 1;
        self.slots[..last]
            .iter()
            .enumerate()
            .all(|(i, &slot)| slot == Tile::Numbered((i + 1) as u8))
            && self.slots[last] == Tile::Empty
    }

    /// A position is movable iff it sits next to the empty slot: one column
    /// over within the same row, or one full row above or below. The same-row
    /// check stops the ±1 cases from wrapping across row boundaries; the ±N
    /// cases cannot wrap.
    pub fn is_legal_move(&self, position: usize) -> bool {
        if position >= self.slots.len() {
            return false;
        }
        let empty = self.empty_index();
        let same_row = position / self.size == empty / self.size;

        (same_row && (position + 1 == empty || position == empty + 1))
            || position + self.size == empty
            || position == empty + self.size
    }

    /// Swaps the tile at `position` into the empty slot. Caller checks
    /// legality first.
    pub fn swap_with_empty(&mut self, position: usize) {
        let empty = self.empty_index();
        self.slots.swap(position, empty);
    }

    #[cfg(test)]
    pub fn from_slots(size: usize, slots: Vec<Tile>) -> Self {
        assert_eq!(slots.len(), size * size);
        Self { slots, size }
    }
}
