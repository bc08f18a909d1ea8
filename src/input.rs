//! Reads piece files: blocks of `.`/`#` lines, one block per piece,
//! separated by blank lines.

use std::{io, path::Path};

use fs_err as fs;
use thiserror::Error;
use tetros::{Shape, ShapeError};

/// Piece lines are always this many characters wide.
const PIECE_COLS: usize = 4;

/// A piece block spans at most this many lines.
const PIECE_ROWS: usize = 4;

#[derive(Debug, Error)]
pub enum PieceFileError {
    #[error(transparent)]
    Io {
        #[from]
        source: io::Error,
    },

    #[error("line {line}: invalid character {found:?}; pieces may only contain '.' and '#'")]
    InvalidCharacter { line: usize, found: char },

    #[error("line {line}: piece lines must be exactly {expected} characters wide, found {found}")]
    BadWidth {
        line: usize,
        expected: usize,
        found: usize,
    },

    #[error("piece starting on line {line} has more than {max} rows")]
    TooManyRows { line: usize, max: usize },

    #[error("piece starting on line {line} is invalid: {source}")]
    InvalidPiece { line: usize, source: ShapeError },

    #[error("file contains no pieces")]
    Empty,
}

/// Reads and parses every piece in the file at `path`.
pub fn read_piece_file(path: &Path) -> Result<Vec<Shape>, PieceFileError> {
    let contents = fs::read_to_string(path)?;
    let shapes = parse_pieces(&contents)?;

    log::trace!("Read {} pieces from {}", shapes.len(), path.display());

    Ok(shapes)
}

fn parse_pieces(contents: &str) -> Result<Vec<Shape>, PieceFileError> {
    let mut shapes = Vec::new();
    let mut block: Vec<Vec<bool>> = Vec::new();
    let mut block_start = 0;

    for (index, line) in contents.lines().enumerate() {
        let line_number = index + 1;
        let line = line.trim_end_matches('\r');

        if line.is_empty() {
            if !block.is_empty() {
                shapes.push(finish_block(&block, block_start)?);
                block.clear();
            }

            continue;
        }

        if block.is_empty() {
            block_start = line_number;
        } else if block.len() == PIECE_ROWS {
            return Err(PieceFileError::TooManyRows {
                line: block_start,
                max: PIECE_ROWS,
            });
        }

        block.push(parse_line(line, line_number)?);
    }

    if !block.is_empty() {
        shapes.push(finish_block(&block, block_start)?);
    }

    if shapes.is_empty() {
        return Err(PieceFileError::Empty);
    }

    Ok(shapes)
}

fn parse_line(line: &str, line_number: usize) -> Result<Vec<bool>, PieceFileError> {
    let cells = line
        .chars()
        .map(|ch| match ch {
            '#' => Ok(true),
            '.' => Ok(false),
            found => Err(PieceFileError::InvalidCharacter {
                line: line_number,
                found,
            }),
        })
        .collect::<Result<Vec<bool>, _>>()?;

    if cells.len() != PIECE_COLS {
        return Err(PieceFileError::BadWidth {
            line: line_number,
            expected: PIECE_COLS,
            found: cells.len(),
        });
    }

    Ok(cells)
}

fn finish_block(block: &[Vec<bool>], block_start: usize) -> Result<Shape, PieceFileError> {
    Shape::from_rows(block).map_err(|source| PieceFileError::InvalidPiece {
        line: block_start,
        source,
    })
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn parses_two_pieces() {
        let contents = "#...\n#...\n#...\n#...\n\n.##.\n.##.\n....\n....\n";

        let shapes = parse_pieces(contents).unwrap();

        assert_eq!(shapes.len(), 2);
        assert_eq!(shapes[0].width(), 1);
        assert_eq!(shapes[0].height(), 4);
        assert_eq!(shapes[1].width(), 2);
        assert_eq!(shapes[1].height(), 2);
    }

    #[test]
    fn accepts_a_trailing_block_at_eof() {
        let shapes = parse_pieces("####\n....\n....\n....").unwrap();

        assert_eq!(shapes.len(), 1);
        assert_eq!(shapes[0].width(), 4);
        assert_eq!(shapes[0].height(), 1);
    }

    #[test]
    fn accepts_repeated_blank_separators() {
        let contents = "####\n....\n....\n....\n\n\n\n####\n....\n....\n....\n";

        assert_eq!(parse_pieces(contents).unwrap().len(), 2);
    }

    #[test]
    fn rejects_invalid_characters() {
        match parse_pieces("#x..\n###.\n....\n....\n") {
            Err(PieceFileError::InvalidCharacter {
                line: 1,
                found: 'x',
            }) => {}
            other => panic!("expected InvalidCharacter, got {:?}", other),
        }
    }

    #[test]
    fn rejects_bad_widths() {
        match parse_pieces("####\n.....\n....\n....\n") {
            Err(PieceFileError::BadWidth {
                line: 2, found: 5, ..
            }) => {}
            other => panic!("expected BadWidth, got {:?}", other),
        }
    }

    #[test]
    fn rejects_a_fifth_piece_line() {
        match parse_pieces("#...\n#...\n#...\n#...\n#...\n") {
            Err(PieceFileError::TooManyRows { line: 1, .. }) => {}
            other => panic!("expected TooManyRows, got {:?}", other),
        }
    }

    #[test]
    fn rejects_malformed_pieces() {
        // Five occupied cells.
        match parse_pieces("##..\n###.\n....\n....\n") {
            Err(PieceFileError::InvalidPiece { line: 1, .. }) => {}
            other => panic!("expected InvalidPiece, got {:?}", other),
        }

        // Four cells in two separated dominoes, reported against the
        // block's first line.
        match parse_pieces("####\n....\n....\n....\n\n#..#\n#..#\n....\n....\n") {
            Err(PieceFileError::InvalidPiece { line, .. }) => assert_eq!(line, 6),
            other => panic!("expected InvalidPiece, got {:?}", other),
        }
    }

    #[test]
    fn rejects_empty_files() {
        match parse_pieces("") {
            Err(PieceFileError::Empty) => {}
            other => panic!("expected Empty, got {:?}", other),
        }

        match parse_pieces("\n\n\n") {
            Err(PieceFileError::Empty) => {}
            other => panic!("expected Empty, got {:?}", other),
        }
    }
}
