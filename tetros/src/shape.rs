use thiserror::Error;

/// A tetromino piece, stored as a boolean occupancy mask over its bounding
/// box.
///
/// `Shape::from_rows` is the only way to construct a `Shape`, and it refuses
/// anything that isn't a connected, four-cell piece. The stored mask is
/// always the tight bounding box: fully-empty border rows and columns are
/// trimmed during construction. Shapes are immutable afterwards; the packer
/// borrows them for the duration of a search and never takes ownership.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Shape {
    width: usize,
    height: usize,
    mask: Vec<bool>,
}

#[derive(Debug, Error)]
pub enum ShapeError {
    #[error("piece rows must all be the same width")]
    RaggedRows,

    #[error("piece must occupy exactly 4 cells, found {found}")]
    WrongCellCount { found: usize },

    #[error("piece cells must form one edge-connected group")]
    Disconnected,
}

impl Shape {
    /// The number of cells every piece occupies.
    pub const CELL_COUNT: usize = 4;

    /// Builds a shape from rows of booleans, where `true` marks an occupied
    /// cell.
    ///
    /// The input may carry empty padding around the piece; the constructed
    /// shape is trimmed to the occupied bounding box.
    pub fn from_rows(rows: &[Vec<bool>]) -> Result<Self, ShapeError> {
        let width = rows.first().map(Vec::len).unwrap_or(0);
        if rows.iter().any(|row| row.len() != width) {
            return Err(ShapeError::RaggedRows);
        }

        let coords: Vec<(usize, usize)> = rows
            .iter()
            .enumerate()
            .flat_map(|(row, cells)| {
                cells
                    .iter()
                    .enumerate()
                    .filter(|(_, &occupied)| occupied)
                    .map(move |(col, _)| (row, col))
            })
            .collect();

        if coords.len() != Self::CELL_COUNT {
            return Err(ShapeError::WrongCellCount {
                found: coords.len(),
            });
        }

        // Count edge-adjacent pairs, looking up and left from each cell so
        // every pair is counted once. Four cells need at least three links
        // to form one group; any split tops out at two.
        let links: usize = coords
            .iter()
            .map(|&(row, col)| {
                let up = (row > 0 && coords.contains(&(row - 1, col))) as usize;
                let left = (col > 0 && coords.contains(&(row, col - 1))) as usize;

                up + left
            })
            .sum();

        if links < Self::CELL_COUNT - 1 {
            return Err(ShapeError::Disconnected);
        }

        // Trim to the occupied bounding box.
        let min_row = coords.iter().map(|&(row, _)| row).min().unwrap_or(0);
        let max_row = coords.iter().map(|&(row, _)| row).max().unwrap_or(0);
        let min_col = coords.iter().map(|&(_, col)| col).min().unwrap_or(0);
        let max_col = coords.iter().map(|&(_, col)| col).max().unwrap_or(0);

        let width = max_col - min_col + 1;
        let height = max_row - min_row + 1;

        let mask = (min_row..=max_row)
            .flat_map(|row| (min_col..=max_col).map(move |col| (row, col)))
            .map(|cell| coords.contains(&cell))
            .collect();

        Ok(Self {
            width,
            height,
            mask,
        })
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// The area of the bounding box, used to order pieces before packing.
    #[inline]
    pub fn bounding_area(&self) -> usize {
        self.width * self.height
    }

    #[inline]
    pub fn cell_count(&self) -> usize {
        Self::CELL_COUNT
    }

    /// The occupied `(row, col)` offsets of this shape, in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        let width = self.width;

        self.mask
            .iter()
            .enumerate()
            .filter(|(_, &occupied)| occupied)
            .map(move |(index, _)| (index / width, index % width))
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn rows(text: &[&str]) -> Vec<Vec<bool>> {
        text.iter()
            .map(|row| row.chars().map(|ch| ch == '#').collect())
            .collect()
    }

    #[test]
    fn square() {
        let shape = Shape::from_rows(&rows(&["##", "##"])).unwrap();

        assert_eq!(shape.width(), 2);
        assert_eq!(shape.height(), 2);
        assert_eq!(shape.bounding_area(), 4);
        assert_eq!(
            shape.cells().collect::<Vec<_>>(),
            vec![(0, 0), (0, 1), (1, 0), (1, 1)]
        );
    }

    #[test]
    fn trims_empty_borders() {
        let padded = Shape::from_rows(&rows(&["....", ".##.", ".##.", "...."])).unwrap();
        let tight = Shape::from_rows(&rows(&["##", "##"])).unwrap();

        assert_eq!(padded, tight);
    }

    #[test]
    fn ell_cell_offsets() {
        let shape = Shape::from_rows(&rows(&["#.", "#.", "##"])).unwrap();

        assert_eq!(shape.width(), 2);
        assert_eq!(shape.height(), 3);
        assert_eq!(
            shape.cells().collect::<Vec<_>>(),
            vec![(0, 0), (1, 0), (2, 0), (2, 1)]
        );
    }

    #[test]
    fn rejects_wrong_cell_count() {
        match Shape::from_rows(&rows(&["##", "#."])) {
            Err(ShapeError::WrongCellCount { found: 3 }) => {}
            other => panic!("expected WrongCellCount, got {:?}", other),
        }

        match Shape::from_rows(&rows(&["###", "##."])) {
            Err(ShapeError::WrongCellCount { found: 5 }) => {}
            other => panic!("expected WrongCellCount, got {:?}", other),
        }
    }

    #[test]
    fn rejects_disconnected_cells() {
        // Two separated dominoes: four cells, but only two links.
        match Shape::from_rows(&rows(&["#.#", "#.#"])) {
            Err(ShapeError::Disconnected) => {}
            other => panic!("expected Disconnected, got {:?}", other),
        }

        // Diagonal contact doesn't count as a link.
        match Shape::from_rows(&rows(&["##..", "..##"])) {
            Err(ShapeError::Disconnected) => {}
            other => panic!("expected Disconnected, got {:?}", other),
        }
    }

    #[test]
    fn rejects_ragged_rows() {
        let ragged = vec![vec![true, true], vec![true, true, false]];

        match Shape::from_rows(&ragged) {
            Err(ShapeError::RaggedRows) => {}
            other => panic!("expected RaggedRows, got {:?}", other),
        }
    }
}
