//! Puzzle generator shared by the integration tests
//!
//! Tiles are cut from a lattice where neighbouring tiles share their border
//! line. Every border segment carries a distinct code that starts with `#`
//! and ends with `.`, so a segment read backwards never equals any segment
//! read forwards and the only matching borders are the real seams.

#![allow(dead_code)]

use jigsaw_core::{Grid, MARKED, Motif};

/// A generated puzzle with its known answers
pub struct Fixture {
    pub input: String,
    pub side: usize,
    pub corner_ids: [u64; 4],
    /// The composite image in the orientation it was generated in
    pub image: Grid,
}

impl Fixture {
    pub fn corner_product(&self) -> u64 {
        self.corner_ids.iter().product()
    }
}

pub fn tile_id(index: usize) -> u64 {
    3001 + 2 * index as u64
}

/// Render tiles in the `Tile <id>:` input format
pub fn render(tiles: &[(u64, Grid)]) -> String {
    tiles
        .iter()
        .map(|(id, grid)| format!("Tile {}:\n{}\n", id, grid))
        .collect()
}

/// The `size` x `size` window of `grid` with its top-left corner at `(top, left)`
pub fn window(grid: &Grid, top: usize, left: usize, size: usize) -> Grid {
    let rows: Vec<String> = (top..top + size)
        .map(|r| String::from_utf8_lossy(&grid.row(r)[left..left + size]).into_owned())
        .collect();
    Grid::from_rows(rows).unwrap()
}

/// Cut a lattice into `side` x `side` overlapping tiles, row-major
pub fn cut(lattice: &Grid, side: usize, tile_size: usize) -> Vec<Grid> {
    let stride = tile_size - 1;
    assert_eq!(lattice.rows(), side * stride + 1);
    (0..side * side)
        .map(|index| {
            let (r, c) = (index / side, index % side);
            window(lattice, r * stride, c * stride, tile_size)
        })
        .collect()
}

fn seam_pattern(code: usize, len: usize) -> Vec<u8> {
    assert!(code < 1 << (len - 2), "tiles too small for this many seams");
    let mut pattern = vec![b'.'; len];
    pattern[0] = MARKED;
    for bit in 0..len - 2 {
        if (code >> bit) & 1 == 1 {
            pattern[bit + 1] = MARKED;
        }
    }
    pattern
}

/// Build a puzzle whose assembled image is `image`
///
/// `image` must be `side * (tile_size - 2)` cells square. The k-th tile of the
/// input is tile `order[k]` (row-major) advanced `turns[k]` orientations.
pub fn generate(
    image: &Grid,
    side: usize,
    tile_size: usize,
    order: &[usize],
    turns: &[usize],
) -> Fixture {
    let inner = tile_size - 2;
    let stride = tile_size - 1;
    assert_eq!(image.dimensions(), (side * inner, side * inner));
    assert_eq!(order.len(), side * side);
    assert_eq!(turns.len(), side * side);

    let extent = side * stride + 1;
    let mut lattice = Grid::filled(extent, extent, b'.');
    for r in 0..side * inner {
        for c in 0..side * inner {
            let lr = (r / inner) * stride + 1 + r % inner;
            let lc = (c / inner) * stride + 1 + c % inner;
            lattice.set(lr, lc, image.get(r, c));
        }
    }

    let mut code = 0;
    for line in 0..=side {
        for segment in 0..side {
            let across = seam_pattern(code, inner);
            let down = seam_pattern(code + 1, inner);
            code += 2;
            for i in 0..inner {
                lattice.set(line * stride, segment * stride + 1 + i, across[i]);
                lattice.set(segment * stride + 1 + i, line * stride, down[i]);
            }
        }
    }

    let tiles = cut(&lattice, side, tile_size);
    let scrambled: Vec<(u64, Grid)> = order
        .iter()
        .zip(turns)
        .map(|(&index, &turn)| {
            let (_, grid) = tiles[index].orientations().nth(turn % 8).unwrap();
            (tile_id(index), grid)
        })
        .collect();

    let last = side - 1;
    Fixture {
        input: render(&scrambled),
        side,
        corner_ids: [
            tile_id(0),
            tile_id(last),
            tile_id(last * side),
            tile_id(last * side + last),
        ],
        image: image.clone(),
    }
}

/// Write the sea monster into `image` with its top-left corner at `(row, col)`
pub fn plant_sea_monster(image: &mut Grid, row: usize, col: usize) {
    for &(dr, dc) in Motif::sea_monster().offsets() {
        image.set(row + dr, col + dc, MARKED);
    }
}

/// Input order `0..count` visited with a stride coprime to `count`
pub fn strided_order(count: usize, stride: usize) -> Vec<usize> {
    (0..count).map(|k| (k * stride) % count).collect()
}
