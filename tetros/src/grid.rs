use crate::shape::Shape;

/// A square board of slots. Each slot is either empty or holds the marker of
/// the piece occupying it.
///
/// The packer mutates a single grid in lock-step with its recursion:
/// `place` and `remove` are exact inverses for the same arguments, so
/// unwinding a branch restores the grid cell-for-cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    size: usize,
    slots: Vec<Option<usize>>,
}

impl Grid {
    /// Creates an empty grid. Callers guarantee `size >= 2`.
    pub fn new(size: usize) -> Self {
        Self {
            size,
            slots: vec![None; size * size],
        }
    }

    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    #[inline]
    pub fn get(&self, row: usize, col: usize) -> Option<usize> {
        self.slots[row * self.size + col]
    }

    /// Whether every occupied cell of `shape`, offset by `(row, col)`, lands
    /// in bounds on an empty slot. Stops at the first violation.
    pub fn can_place(&self, shape: &Shape, row: usize, col: usize) -> bool {
        shape.cells().all(|(cell_row, cell_col)| {
            let row = row + cell_row;
            let col = col + cell_col;

            row < self.size && col < self.size && self.get(row, col).is_none()
        })
    }

    /// Writes `marker` into every occupied cell of `shape` at the offset.
    /// Callers must have checked `can_place` first.
    pub fn place(&mut self, shape: &Shape, row: usize, col: usize, marker: usize) {
        for (cell_row, cell_col) in shape.cells() {
            self.slots[(row + cell_row) * self.size + (col + cell_col)] = Some(marker);
        }
    }

    /// Resets the cells written by `place` with the same arguments.
    pub fn remove(&mut self, shape: &Shape, row: usize, col: usize) {
        for (cell_row, cell_col) in shape.cells() {
            self.slots[(row + cell_row) * self.size + (col + cell_col)] = None;
        }
    }

    /// The number of empty slots left on the board.
    pub fn count_empty(&self) -> usize {
        self.slots.iter().filter(|slot| slot.is_none()).count()
    }

    /// The board's rows of slots, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Option<usize>]> {
        self.slots.chunks(self.size)
    }
}
