//! Reorientable image tiles

use crate::error::ParseError;
use crate::grid::Grid;
use crate::motif::MARKED;
use crate::symmetry::Orientation;

/// One side of a tile
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Top,
    Bottom,
    Left,
    Right,
}

/// The four borders of one oriented grid, each read top-to-bottom or left-to-right
#[derive(Debug, Clone, PartialEq, Eq)]
struct Borders {
    top: Vec<u8>,
    bottom: Vec<u8>,
    left: Vec<u8>,
    right: Vec<u8>,
}

impl Borders {
    fn of(grid: &Grid) -> Self {
        Self {
            top: grid.row(0).to_vec(),
            bottom: grid.row(grid.rows() - 1).to_vec(),
            left: grid.column(0).collect(),
            right: grid.column(grid.cols() - 1).collect(),
        }
    }

    fn side(&self, side: Side) -> &[u8] {
        match side {
            Side::Top => &self.top,
            Side::Bottom => &self.bottom,
            Side::Left => &self.left,
            Side::Right => &self.right,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct View {
    grid: Grid,
    borders: Borders,
}

/// A grid with an id and a current orientation
///
/// All eight oriented views are derived once from the canonical grid, so
/// changing orientation is an index update and [`Tile::grid`] always reflects
/// the current orientation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tile {
    id: u64,
    orientation: Orientation,
    views: Vec<View>,
}

/// Build a tile from its id and text rows
pub fn load_tile<I, R>(id: u64, grid_rows: I) -> Result<Tile, ParseError>
where
    I: IntoIterator<Item = R>,
    R: AsRef<str>,
{
    Ok(Tile::new(id, Grid::from_rows(grid_rows)?))
}

impl Tile {
    pub fn new(id: u64, grid: Grid) -> Self {
        let views = grid
            .orientations()
            .map(|(_, grid)| View {
                borders: Borders::of(&grid),
                grid,
            })
            .collect();
        Self {
            id,
            orientation: Orientation::IDENTITY,
            views,
        }
    }

    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    pub fn set_orientation(&mut self, orientation: Orientation) {
        self.orientation = orientation;
    }

    /// Advance to the next orientation of the cycle
    pub fn next_orientation(&mut self) {
        self.orientation = self.orientation.next();
    }

    /// The grid in the current orientation
    pub fn grid(&self) -> &Grid {
        self.grid_in(self.orientation)
    }

    /// The grid in an arbitrary orientation, leaving the current one untouched
    pub fn grid_in(&self, orientation: Orientation) -> &Grid {
        &self.views[orientation.index()].grid
    }

    /// One border of the current orientation
    pub fn border(&self, side: Side) -> &[u8] {
        self.border_in(self.orientation, side)
    }

    pub(crate) fn border_in(&self, orientation: Orientation, side: Side) -> &[u8] {
        self.views[orientation.index()].borders.side(side)
    }

    /// Whether `other`, placed directly to the left, lines up with this tile
    ///
    /// Both tiles are compared in their current orientation. Tiles of
    /// different dimensions never match.
    pub fn matches_to_left(&self, other: &Tile) -> bool {
        self.matches_left_in(self.orientation, other, other.orientation)
    }

    /// Whether `other`, placed directly above, lines up with this tile
    pub fn matches_to_top(&self, other: &Tile) -> bool {
        self.matches_top_in(self.orientation, other, other.orientation)
    }

    pub(crate) fn matches_left_in(
        &self,
        orientation: Orientation,
        other: &Tile,
        other_orientation: Orientation,
    ) -> bool {
        self.grid_in(orientation).dimensions() == other.grid_in(other_orientation).dimensions()
            && self.border_in(orientation, Side::Left)
                == other.border_in(other_orientation, Side::Right)
    }

    pub(crate) fn matches_top_in(
        &self,
        orientation: Orientation,
        other: &Tile,
        other_orientation: Orientation,
    ) -> bool {
        self.grid_in(orientation).dimensions() == other.grid_in(other_orientation).dimensions()
            && self.border_in(orientation, Side::Top)
                == other.border_in(other_orientation, Side::Bottom)
    }

    /// The current orientation without its border; `None` below 3x3
    pub fn crop_borders(&self) -> Option<Grid> {
        self.grid().crop_borders()
    }

    /// Number of marked cells
    pub fn count_marked(&self) -> usize {
        self.grid().count(MARKED)
    }
}
