//! Tile layout and the backtracking placement search

use crate::symmetry::Orientation;
use crate::tile::Tile;

/// A tile index (into the solver's tile list) together with the orientation it was placed in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Placement {
    pub tile: usize,
    pub orientation: Orientation,
}

/// An in-progress or solved assignment of tiles to a `rows` x `cols` grid
///
/// Each tile is placed at most once; `used` mirrors which tile indices
/// currently occupy a cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layout<'t> {
    tiles: &'t [Tile],
    rows: usize,
    cols: usize,
    cells: Vec<Option<Placement>>,
    used: Vec<bool>,
}

impl<'t> Layout<'t> {
    fn empty(tiles: &'t [Tile], rows: usize, cols: usize) -> Self {
        Self {
            tiles,
            rows,
            cols,
            cells: vec![None; rows * cols],
            used: vec![false; tiles.len()],
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// The tile list this layout indexes into
    pub fn tiles(&self) -> &'t [Tile] {
        self.tiles
    }

    pub fn get(&self, row: usize, col: usize) -> Option<Placement> {
        if row >= self.rows || col >= self.cols {
            return None;
        }
        self.cells[row * self.cols + col]
    }

    /// The tile at a position together with its placed orientation
    pub fn tile_at(&self, row: usize, col: usize) -> Option<(&'t Tile, Orientation)> {
        let tiles = self.tiles;
        self.get(row, col).map(|p| (&tiles[p.tile], p.orientation))
    }

    /// Every filled cell in row-major order as `(row, col, tile, orientation)`
    pub fn placements(&self) -> impl Iterator<Item = (usize, usize, &'t Tile, Orientation)> + '_ {
        let (tiles, cols) = (self.tiles, self.cols);
        self.cells.iter().enumerate().filter_map(move |(index, cell)| {
            cell.map(|p| (index / cols, index % cols, &tiles[p.tile], p.orientation))
        })
    }

    /// Whether every cell is filled
    pub fn is_complete(&self) -> bool {
        self.cells.iter().all(Option::is_some)
    }

    /// Ids of the corner tiles: top-left, top-right, bottom-left, bottom-right
    pub fn corner_ids(&self) -> Option<[u64; 4]> {
        let (last_row, last_col) = (self.rows.checked_sub(1)?, self.cols.checked_sub(1)?);
        let id = |row, col| self.tile_at(row, col).map(|(tile, _)| tile.id());
        Some([
            id(0, 0)?,
            id(0, last_col)?,
            id(last_row, 0)?,
            id(last_row, last_col)?,
        ])
    }

    fn place(&mut self, cell: usize, placement: Placement) {
        self.used[placement.tile] = true;
        self.cells[cell] = Some(placement);
    }

    fn remove(&mut self, cell: usize) {
        if let Some(placement) = self.cells[cell].take() {
            self.used[placement.tile] = false;
        }
    }

    /// Whether a tile in an orientation agrees with the neighbours already above and to the left
    fn fits(&self, row: usize, col: usize, tile: usize, orientation: Orientation) -> bool {
        let candidate = &self.tiles[tile];
        let above = row.checked_sub(1).and_then(|r| self.get(r, col));
        let left = col.checked_sub(1).and_then(|c| self.get(row, c));
        above.is_none_or(|p| {
            candidate.matches_top_in(orientation, &self.tiles[p.tile], p.orientation)
        }) && left.is_none_or(|p| {
            candidate.matches_left_in(orientation, &self.tiles[p.tile], p.orientation)
        })
    }

    /// Advance `cursor` to the next unused tile/orientation that fits `cell`
    ///
    /// Candidates are numbered `tile * 8 + orientation`, so tiles are tried in
    /// list order and each tile's orientations in cycle order.
    fn next_fit(&self, cell: usize, cursor: &mut usize) -> Option<Placement> {
        let (row, col) = (cell / self.cols, cell % self.cols);
        let candidates = self.tiles.len() * Orientation::COUNT;
        while *cursor < candidates {
            let candidate = *cursor;
            *cursor += 1;
            let tile = candidate / Orientation::COUNT;
            if self.used[tile] {
                continue;
            }
            let orientation = Orientation::ALL[candidate % Orientation::COUNT];
            if self.fits(row, col, tile, orientation) {
                return Some(Placement { tile, orientation });
            }
        }
        None
    }
}

/// Arrange `tiles` into a `rows` x `cols` layout with matching borders
///
/// Cells are filled in row-major order. At each cell every unused tile is
/// tried in list order, in each of its eight orientations, and the search
/// backtracks when nothing fits. The first complete layout under that order
/// is returned; `None` if the search is exhausted. A puzzle whose solution is
/// unique up to symmetry of the whole image therefore always yields the same
/// corner tiles, whatever order the tiles come in.
///
/// The search keeps one cursor per cell instead of recursing, so the depth
/// of the layout is not limited by the call stack.
pub fn solve(tiles: &[Tile], rows: usize, cols: usize) -> Option<Layout<'_>> {
    let cells = rows * cols;
    if cells > tiles.len() {
        return None;
    }

    let mut layout = Layout::empty(tiles, rows, cols);
    let mut cursors = vec![0usize; cells];
    let mut cell = 0;
    while cell < cells {
        match layout.next_fit(cell, &mut cursors[cell]) {
            Some(placement) => {
                layout.place(cell, placement);
                cell += 1;
                if let Some(cursor) = cursors.get_mut(cell) {
                    *cursor = 0;
                }
            }
            None => {
                // exhausted this cell; undo the previous one and resume after it
                cell = cell.checked_sub(1)?;
                layout.remove(cell);
            }
        }
    }
    Some(layout)
}
