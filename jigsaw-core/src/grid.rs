//! Rectangular grid of single-byte symbols

use crate::error::ParseError;
use crate::symmetry::{Orientations, Transform};
use std::fmt;

/// A rectangular grid of symbols stored row-major
///
/// Every row has the same length and there is at least one row and one
/// column.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Grid {
    rows: usize,
    cols: usize,
    cells: Vec<u8>,
}

impl Grid {
    /// Build a grid from text rows
    ///
    /// # Returns
    /// * `Err(ParseError::MissingData)` - no rows, or an empty row
    /// * `Err(ParseError::InvalidFormat)` - rows of different lengths
    pub fn from_rows<I, R>(rows: I) -> Result<Self, ParseError>
    where
        I: IntoIterator<Item = R>,
        R: AsRef<str>,
    {
        let mut cells = Vec::new();
        let mut cols = None;
        let mut row_count = 0;
        for row in rows {
            let row = row.as_ref().as_bytes();
            if row.is_empty() {
                return Err(ParseError::MissingData(format!(
                    "row {} is empty",
                    row_count + 1
                )));
            }
            match cols {
                None => cols = Some(row.len()),
                Some(expected) if expected != row.len() => {
                    return Err(ParseError::InvalidFormat(format!(
                        "row {} has {} cells, expected {}",
                        row_count + 1,
                        row.len(),
                        expected
                    )));
                }
                Some(_) => {}
            }
            cells.extend_from_slice(row);
            row_count += 1;
        }
        let cols = cols.ok_or_else(|| ParseError::MissingData("grid has no rows".into()))?;
        Ok(Self {
            rows: row_count,
            cols,
            cells,
        })
    }

    /// A `rows` x `cols` grid with every cell set to `symbol`
    ///
    /// # Panics
    /// If `rows` or `cols` is zero.
    pub fn filled(rows: usize, cols: usize, symbol: u8) -> Self {
        assert!(
            rows > 0 && cols > 0,
            "grid must have at least one row and one column, got {}x{}",
            rows,
            cols
        );
        Self {
            rows,
            cols,
            cells: vec![symbol; rows * cols],
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// `(rows, cols)`
    pub fn dimensions(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    pub fn get(&self, row: usize, col: usize) -> u8 {
        self.cells[row * self.cols + col]
    }

    pub fn set(&mut self, row: usize, col: usize, symbol: u8) {
        self.cells[row * self.cols + col] = symbol;
    }

    pub fn row(&self, row: usize) -> &[u8] {
        &self.cells[row * self.cols..(row + 1) * self.cols]
    }

    /// Cells of one column, top to bottom
    pub fn column(&self, col: usize) -> impl Iterator<Item = u8> + '_ {
        self.cells.iter().skip(col).step_by(self.cols).copied()
    }

    /// Number of cells holding `symbol`
    pub fn count(&self, symbol: u8) -> usize {
        self.cells.iter().filter(|&&c| c == symbol).count()
    }

    /// Rotate 90° counter-clockwise: `new[r][c] = old[c][cols - 1 - r]`
    ///
    /// The result has the dimensions swapped.
    pub fn rotate_ccw_90(&self) -> Grid {
        let (rows, cols) = (self.cols, self.rows);
        let mut cells = Vec::with_capacity(self.cells.len());
        for r in 0..rows {
            for c in 0..cols {
                cells.push(self.get(c, self.cols - 1 - r));
            }
        }
        Grid { rows, cols, cells }
    }

    /// Mirror top to bottom: `new[r][c] = old[rows - 1 - r][c]`
    pub fn flip_horizontal(&self) -> Grid {
        let cells = (0..self.rows)
            .rev()
            .flat_map(|r| self.row(r).iter().copied())
            .collect();
        Grid {
            rows: self.rows,
            cols: self.cols,
            cells,
        }
    }

    pub fn transform(&self, transform: Transform) -> Grid {
        match transform {
            Transform::RotateCcw90 => self.rotate_ccw_90(),
            Transform::FlipHorizontal => self.flip_horizontal(),
        }
    }

    /// Replace this grid with its transformed version
    pub fn apply(&mut self, transform: Transform) {
        *self = self.transform(transform);
    }

    /// The eight orientations of this grid in cycle order
    pub fn orientations(&self) -> Orientations {
        Orientations::new(self.clone())
    }

    /// The grid without its outermost row and column on all four sides
    ///
    /// Returns `None` if either dimension is smaller than 3.
    pub fn crop_borders(&self) -> Option<Grid> {
        if self.rows < 3 || self.cols < 3 {
            return None;
        }
        let cells = (1..self.rows - 1)
            .flat_map(|r| self.row(r)[1..self.cols - 1].iter().copied())
            .collect();
        Some(Grid {
            rows: self.rows - 2,
            cols: self.cols - 2,
            cells,
        })
    }

    /// Copy `other` into this grid with its top-left corner at `(row, col)`
    ///
    /// `other` must fit inside this grid from that offset.
    pub fn blit(&mut self, row: usize, col: usize, other: &Grid) {
        for r in 0..other.rows {
            let start = (row + r) * self.cols + col;
            self.cells[start..start + other.cols].copy_from_slice(other.row(r));
        }
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for r in 0..self.rows {
            writeln!(f, "{}", String::from_utf8_lossy(self.row(r)))?;
        }
        Ok(())
    }
}
