//! Dihedral orientations of a grid
//!
//! The eight orientations are visited in a fixed cycle. From orientations 3
//! and 7 the next step is a horizontal flip, from every other orientation it
//! is a 90° counter-clockwise rotation, so eight steps compose to the
//! identity:
//!
//! ```text
//! 0 -R-> 1 -R-> 2 -R-> 3 -F-> 4 -R-> 5 -R-> 6 -R-> 7 -F-> 0
//! ```

use crate::grid::Grid;
use std::fmt;

/// A primitive grid transformation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Transform {
    /// `new[r][c] = old[c][cols - 1 - r]`
    RotateCcw90,
    /// `new[r][c] = old[rows - 1 - r][c]`
    FlipHorizontal,
}

/// Position in the orientation cycle, always in `0..8`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Orientation(u8);

impl Orientation {
    /// Number of orientations in the cycle
    pub const COUNT: usize = 8;

    /// The untransformed grid
    pub const IDENTITY: Orientation = Orientation(0);

    /// Every orientation in cycle order
    pub const ALL: [Orientation; Self::COUNT] = [
        Orientation(0),
        Orientation(1),
        Orientation(2),
        Orientation(3),
        Orientation(4),
        Orientation(5),
        Orientation(6),
        Orientation(7),
    ];

    /// Create an orientation from an index, wrapping values above 7
    pub fn new(index: u8) -> Self {
        Orientation(index % Self::COUNT as u8)
    }

    /// Index of this orientation in the cycle
    pub fn index(self) -> usize {
        self.0 as usize
    }

    /// The transform that leads from this orientation to [`Orientation::next`]
    pub fn step(self) -> Transform {
        match self.0 {
            3 | 7 => Transform::FlipHorizontal,
            _ => Transform::RotateCcw90,
        }
    }

    /// The following orientation in the cycle
    pub fn next(self) -> Orientation {
        Orientation::new(self.0 + 1)
    }
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "orientation {}", self.0)
    }
}

/// Iterator over the eight orientations of a grid, starting with the grid itself
///
/// Created by [`Grid::orientations`].
#[derive(Debug, Clone)]
pub struct Orientations {
    current: Option<Grid>,
    orientation: Orientation,
    remaining: usize,
}

impl Orientations {
    pub(crate) fn new(grid: Grid) -> Self {
        Self {
            current: Some(grid),
            orientation: Orientation::IDENTITY,
            remaining: Orientation::COUNT,
        }
    }
}

impl Iterator for Orientations {
    type Item = (Orientation, Grid);

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let grid = self.current.take()?;
        let orientation = self.orientation;
        self.remaining -= 1;
        if self.remaining > 0 {
            self.current = Some(grid.transform(orientation.step()));
        }
        self.orientation = orientation.next();
        Some((orientation, grid))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for Orientations {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_schedule_flips_twice_per_cycle() {
        let flips = Orientation::ALL
            .iter()
            .filter(|o| o.step() == Transform::FlipHorizontal)
            .map(|o| o.index())
            .collect::<Vec<_>>();
        assert_eq!(flips, vec![3, 7]);
    }

    #[test]
    fn test_next_wraps_around() {
        assert_eq!(Orientation::ALL[7].next(), Orientation::IDENTITY);
        assert_eq!(Orientation::new(9), Orientation::ALL[1]);
    }

    #[test]
    fn test_orientations_yields_eight_distinct_views() {
        let grid = Grid::from_rows(["##.", "...", "..."]).unwrap();
        let views: Vec<Grid> = grid.orientations().map(|(_, g)| g).collect();
        assert_eq!(views.len(), 8);
        assert_eq!(views[0], grid);
        for (i, a) in views.iter().enumerate() {
            assert!(views[i + 1..].iter().all(|b| a != b), "views {i} repeats");
        }
    }
}
