//! The two-part tile-assembly puzzle
//!
//! Part 1 arranges the tiles and multiplies the ids of the four corner tiles.
//! Part 2 assembles the cropped tiles into one image, claims every sea
//! monster in any orientation and counts the `#` cells left over.

use crate::error::{ParseError, SolveError};
use crate::grid::Grid;
use crate::image::assemble;
use crate::layout::solve;
use crate::motif::{Motif, OverlayReport, overlay_motif};
use crate::parse::TileParser;
use crate::solver::{AocParser, PartSolver, Solver};
use crate::tile::Tile;

pub struct JurassicJigsaw;

#[derive(Debug)]
pub struct SharedData {
    tiles: Vec<Tile>,
    side: usize,
    arrangement: Option<Arrangement>,
    overlay: Option<(Grid, OverlayReport)>,
}

/// The solved puzzle, computed once and shared by both parts
#[derive(Debug, Clone)]
pub struct Arrangement {
    pub corner_ids: [u64; 4],
    pub image: Grid,
}

impl Arrangement {
    /// Product of the four corner ids
    ///
    /// # Returns
    /// * `Err(SolveError::CornerProductOverflow)` - the product exceeds `u64::MAX`
    pub fn corner_product(&self) -> Result<u64, SolveError> {
        self.corner_ids
            .iter()
            .try_fold(1u64, |product, &id| product.checked_mul(id))
            .ok_or(SolveError::CornerProductOverflow {
                ids: self.corner_ids,
            })
    }
}

impl SharedData {
    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    /// Tiles per side of the square layout
    pub fn side(&self) -> usize {
        self.side
    }

    pub fn arrangement(&self) -> Option<&Arrangement> {
        self.arrangement.as_ref()
    }

    /// The composite image with sea monsters marked, once part 2 has run
    pub fn render_marked_image(&self) -> Option<String> {
        self.overlay.as_ref().map(|(image, _)| image.to_string())
    }

    pub fn overlay_report(&self) -> Option<&OverlayReport> {
        self.overlay.as_ref().map(|(_, report)| report)
    }
}

impl AocParser for JurassicJigsaw {
    type SharedData<'a> = SharedData;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        let tiles = TileParser::new().parse(input)?;
        let side = tiles.len().isqrt();
        if side * side != tiles.len() {
            return Err(ParseError::InvalidFormat(format!(
                "{} tiles cannot form a square layout",
                tiles.len()
            )));
        }
        Ok(SharedData {
            tiles,
            side,
            arrangement: None,
            overlay: None,
        })
    }
}

impl PartSolver<1> for JurassicJigsaw {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(solve_arrangement(shared)?.corner_product()?.to_string())
    }
}

impl PartSolver<2> for JurassicJigsaw {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let mut image = solve_arrangement(shared)?.image.clone();
        let report = overlay_motif(&mut image, &Motif::sea_monster());
        shared.overlay = Some((image, report));
        Ok(report.unmatched.to_string())
    }
}

impl Solver for JurassicJigsaw {
    const PARTS: u8 = 2;

    fn solve_part(shared: &mut Self::SharedData<'_>, part: u8) -> Result<String, SolveError> {
        match part {
            1 => <Self as PartSolver<1>>::solve(shared),
            2 => <Self as PartSolver<2>>::solve(shared),
            _ => Err(SolveError::PartNotImplemented(part)),
        }
    }
}

fn solve_arrangement(shared: &mut SharedData) -> Result<&Arrangement, SolveError> {
    let arrangement = match shared.arrangement.take() {
        Some(arrangement) => arrangement,
        None => arrange(&shared.tiles, shared.side)?,
    };
    Ok(shared.arrangement.insert(arrangement))
}

fn arrange(tiles: &[Tile], side: usize) -> Result<Arrangement, SolveError> {
    let no_arrangement = || SolveError::NoArrangement {
        rows: side,
        cols: side,
    };
    let layout = solve(tiles, side, side).ok_or_else(no_arrangement)?;
    let corner_ids = layout.corner_ids().ok_or_else(no_arrangement)?;
    let image = assemble(&layout)?;
    Ok(Arrangement { corner_ids, image })
}
