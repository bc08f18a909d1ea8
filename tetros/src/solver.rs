use std::cmp::Reverse;

use thiserror::Error;

use crate::{grid::Grid, shape::Shape};

/// How many board sizes an unconfigured `Packer` will try before giving up.
const DEFAULT_MAX_ATTEMPTS: u32 = 3;

#[derive(Debug, Error)]
pub enum PackError {
    #[error("no packing found after {attempts} attempt(s)")]
    Exhausted { attempts: u32 },
}

/// Where one piece ended up: the index of the shape in the caller's slice
/// and the board offset of its bounding box.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
    pub shape: usize,
    pub row: usize,
    pub col: usize,
}

/// A solved packing: the filled board, one placement per input shape, and
/// the attempt number that produced it.
#[derive(Debug, Clone)]
pub struct Packing {
    grid: Grid,
    placements: Vec<Placement>,
    attempts: u32,
}

impl Packing {
    #[inline]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    #[inline]
    pub fn placements(&self) -> &[Placement] {
        &self.placements
    }

    /// The 1-based attempt that succeeded. Attempt 1 means the pieces fit
    /// the area lower bound exactly; each later attempt grew the board by
    /// one.
    #[inline]
    pub fn attempts(&self) -> u32 {
        self.attempts
    }
}

/// Packs tetromino pieces into the smallest square board it can find.
///
/// The board starts at the area lower bound from [`min_square_size`] and
/// grows by one per failed attempt, up to the configured attempt budget.
/// Within one attempt the search is exhaustive, so a failed attempt proves
/// that size unsolvable for the given pieces.
pub struct Packer {
    max_attempts: u32,
}

impl Packer {
    pub fn new() -> Self {
        Self {
            max_attempts: DEFAULT_MAX_ATTEMPTS,
        }
    }

    /// Sets how many board sizes to try before reporting failure.
    pub fn max_attempts(mut self, max_attempts: u32) -> Self {
        self.max_attempts = max_attempts;
        self
    }

    /// Computes a packing of `shapes`, or reports that the attempt budget
    /// ran out.
    ///
    /// Markers written into the returned grid are indices into `shapes`, so
    /// results map directly back to the caller's pieces. The search is
    /// deterministic: the same shapes in the same order always produce the
    /// same packing.
    pub fn pack(&self, shapes: &[Shape]) -> Result<Packing, PackError> {
        // Place large bounding boxes first; they have the fewest legal
        // positions. The sort is stable, so ties keep their input order.
        let mut order: Vec<usize> = (0..shapes.len()).collect();
        order.sort_by_key(|&index| Reverse(shapes[index].bounding_area()));

        let mut size = min_square_size(shapes.len());

        log::trace!("Packing {} pieces", shapes.len());

        for attempt in 1..=self.max_attempts {
            log::trace!("Attempt {}: trying a {}x{} board", attempt, size, size);

            let mut search = Search {
                shapes,
                order: &order,
                grid: Grid::new(size),
                placements: Vec::with_capacity(shapes.len()),
            };

            if search.place_from(0) {
                log::trace!(
                    "Packed {} pieces into a {}x{} board",
                    shapes.len(),
                    size,
                    size
                );

                return Ok(Packing {
                    grid: search.grid,
                    placements: search.placements,
                    attempts: attempt,
                });
            }

            size += 1;
        }

        Err(PackError::Exhausted {
            attempts: self.max_attempts,
        })
    }
}

/// The smallest board side whose area can hold `count` four-cell pieces.
///
/// This is a necessary bound, not a sufficient one: interlocking can force
/// the packer onto a larger board.
pub fn min_square_size(count: usize) -> usize {
    let mut side = 2;

    while side * side < count * Shape::CELL_COUNT {
        side += 1;
    }

    side
}

/// One backtracking attempt at a fixed board size. The grid and the
/// placement list are mutated and unwound in lock-step with the recursion;
/// nothing survives into the next attempt.
struct Search<'a> {
    shapes: &'a [Shape],
    order: &'a [usize],
    grid: Grid,
    placements: Vec<Placement>,
}

impl<'a> Search<'a> {
    fn place_from(&mut self, depth: usize) -> bool {
        if depth == self.order.len() {
            return true;
        }

        // Not enough free cells for the unplaced pieces; no arrangement can
        // work from here, regardless of geometry.
        let needed: usize = self.order[depth..]
            .iter()
            .map(|&index| self.shapes[index].cell_count())
            .sum();

        if self.grid.count_empty() < needed {
            return false;
        }

        let shape_index = self.order[depth];
        let shape = &self.shapes[shape_index];

        for row in 0..self.grid.size() {
            for col in 0..self.grid.size() {
                if self.grid.can_place(shape, row, col) {
                    self.grid.place(shape, row, col, shape_index);
                    self.placements.push(Placement {
                        shape: shape_index,
                        row,
                        col,
                    });

                    if self.place_from(depth + 1) {
                        return true;
                    }

                    self.placements.pop();
                    self.grid.remove(shape, row, col);
                }
            }
        }

        false
    }
}
