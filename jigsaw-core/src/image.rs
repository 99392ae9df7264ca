//! Stitching a solved layout into one composite image

use crate::error::SolveError;
use crate::grid::Grid;
use crate::layout::Layout;

/// Crop every placed tile and concatenate the results in layout order
///
/// Each tile contributes its grid, in the orientation it was placed in, with
/// the outer ring removed. The tile at layout position `(row, col)` lands at
/// `(row * h, col * w)` where `h` x `w` is the cropped tile size.
///
/// # Returns
/// * `Err(SolveError::IncompleteLayout)` - the layout has no cells or an empty cell
/// * `Err(SolveError::TileTooSmall)` - a tile is smaller than 3x3
/// * `Err(SolveError::TileSizeMismatch)` - cropped tiles differ in size
pub fn assemble(layout: &Layout<'_>) -> Result<Grid, SolveError> {
    if layout.rows() == 0 || layout.cols() == 0 || !layout.is_complete() {
        return Err(SolveError::IncompleteLayout);
    }

    let cropped = layout
        .placements()
        .map(|(row, col, tile, orientation)| {
            tile.grid_in(orientation)
                .crop_borders()
                .map(|grid| (row, col, tile.id(), grid))
                .ok_or(SolveError::TileTooSmall { id: tile.id() })
        })
        .collect::<Result<Vec<_>, _>>()?;

    let (height, width) = match cropped.first() {
        Some((_, _, _, grid)) => grid.dimensions(),
        None => return Err(SolveError::IncompleteLayout),
    };

    let mut image = Grid::filled(height * layout.rows(), width * layout.cols(), b' ');
    for (row, col, id, grid) in &cropped {
        if grid.dimensions() != (height, width) {
            return Err(SolveError::TileSizeMismatch { id: *id });
        }
        image.blit(row * height, col * width, grid);
    }
    Ok(image)
}
