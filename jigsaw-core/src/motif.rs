//! Motif search over every orientation of an image

use crate::error::ParseError;
use crate::grid::Grid;
use crate::symmetry::Orientation;

/// A cell that can take part in a motif
pub const MARKED: u8 = b'#';
/// A marked cell that has been claimed by a motif instance
pub const MATCHED: u8 = b'O';

/// The sea monster, as `(row, col)` offsets from its top-left corner
///
/// ```text
///                   #
/// #    ##    ##    ###
///  #  #  #  #  #  #
/// ```
const SEA_MONSTER: [(usize, usize); 15] = [
    (0, 18),
    (1, 0),
    (1, 5),
    (1, 6),
    (1, 11),
    (1, 12),
    (1, 17),
    (1, 18),
    (1, 19),
    (2, 1),
    (2, 4),
    (2, 7),
    (2, 10),
    (2, 13),
    (2, 16),
];

/// A fixed set of cell offsets that must all be [`MARKED`] for an instance to exist
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Motif {
    offsets: Vec<(usize, usize)>,
    height: usize,
    width: usize,
}

impl Motif {
    /// Build a motif from `(row, col)` offsets; duplicates are merged
    pub fn new<I>(offsets: I) -> Result<Self, ParseError>
    where
        I: IntoIterator<Item = (usize, usize)>,
    {
        let mut offsets: Vec<_> = offsets.into_iter().collect();
        offsets.sort_unstable();
        offsets.dedup();
        let height = offsets.iter().map(|&(r, _)| r + 1).max();
        let width = offsets.iter().map(|&(_, c)| c + 1).max();
        match (height, width) {
            (Some(height), Some(width)) => Ok(Self {
                offsets,
                height,
                width,
            }),
            _ => Err(ParseError::MissingData("motif has no cells".into())),
        }
    }

    /// Build a motif from a text picture where every `#` is one offset
    pub fn from_pattern(pattern: &str) -> Result<Self, ParseError> {
        Self::new(pattern.lines().enumerate().flat_map(|(row, line)| {
            line.bytes()
                .enumerate()
                .filter(|&(_, b)| b == MARKED)
                .map(move |(col, _)| (row, col))
        }))
    }

    pub fn sea_monster() -> Self {
        Self {
            offsets: SEA_MONSTER.to_vec(),
            height: 3,
            width: 20,
        }
    }

    pub fn offsets(&self) -> &[(usize, usize)] {
        &self.offsets
    }

    /// Rows spanned by the motif footprint
    pub fn height(&self) -> usize {
        self.height
    }

    /// Columns spanned by the motif footprint
    pub fn width(&self) -> usize {
        self.width
    }

    /// Whether every offset from `(row, col)` is inside `grid` and marked
    pub fn matches_at(&self, grid: &Grid, row: usize, col: usize) -> bool {
        row + self.height <= grid.rows()
            && col + self.width <= grid.cols()
            && self
                .offsets
                .iter()
                .all(|&(dr, dc)| grid.get(row + dr, col + dc) == MARKED)
    }

    /// Set every offset from `(row, col)` to [`MATCHED`]
    pub fn mark_at(&self, grid: &mut Grid, row: usize, col: usize) {
        for &(dr, dc) in &self.offsets {
            grid.set(row + dr, col + dc, MATCHED);
        }
    }

    /// Mark all instances in the grid's current orientation, returning how many were found
    fn mark_all(&self, grid: &mut Grid) -> usize {
        if grid.rows() < self.height || grid.cols() < self.width {
            return 0;
        }
        let mut found = 0;
        for row in 0..=grid.rows() - self.height {
            for col in 0..=grid.cols() - self.width {
                if self.matches_at(grid, row, col) {
                    self.mark_at(grid, row, col);
                    found += 1;
                }
            }
        }
        found
    }
}

/// Outcome of [`overlay_motif`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OverlayReport {
    /// Motif instances found across all orientations
    pub instances: usize,
    /// Cells still [`MARKED`] after every instance was claimed
    pub unmatched: usize,
    /// First orientation of the image in which an instance was found
    pub orientation: Option<Orientation>,
}

/// Find and mark every instance of `motif` in all eight orientations of `image`
///
/// Origins are scanned row-major in each orientation; a cell claimed by one
/// instance is no longer [`MARKED`], so later instances cannot reuse it. The
/// image is stepped through the whole orientation cycle and ends in the
/// orientation it started in, with matched cells set to [`MATCHED`].
pub fn overlay_motif(image: &mut Grid, motif: &Motif) -> OverlayReport {
    let mut instances = 0;
    let mut first = None;
    for orientation in Orientation::ALL {
        let found = motif.mark_all(image);
        if found > 0 {
            instances += found;
            first.get_or_insert(orientation);
        }
        image.apply(orientation.step());
    }

    OverlayReport {
        instances,
        unmatched: image.count(MARKED),
        orientation: first,
    }
}
