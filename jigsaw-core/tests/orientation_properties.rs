//! Property-based tests for grid orientations and tile border matching
//!
//! **Feature: tile-orientation**

use jigsaw_core::{Grid, Orientation, Side, Tile, Transform};
use proptest::prelude::*;

fn render_rows(cells: &[Vec<bool>]) -> Vec<String> {
    cells
        .iter()
        .map(|row| row.iter().map(|&on| if on { '#' } else { '.' }).collect())
        .collect()
}

fn grid_strategy(min: usize, max: usize) -> impl Strategy<Value = Grid> {
    (min..=max, min..=max).prop_flat_map(|(rows, cols)| {
        prop::collection::vec(prop::collection::vec(any::<bool>(), cols), rows)
            .prop_map(|cells| Grid::from_rows(render_rows(&cells)).unwrap())
    })
}

fn square_grid_strategy(min: usize, max: usize) -> impl Strategy<Value = Grid> {
    (min..=max).prop_flat_map(|side| {
        prop::collection::vec(prop::collection::vec(any::<bool>(), side), side)
            .prop_map(|cells| Grid::from_rows(render_rows(&cells)).unwrap())
    })
}

/// Mirror a grid left to right
fn mirror_columns(grid: &Grid) -> Grid {
    let rows: Vec<String> = (0..grid.rows())
        .map(|r| grid.row(r).iter().rev().map(|&b| b as char).collect())
        .collect();
    Grid::from_rows(rows).unwrap()
}

mod property_1_cycle_returns_to_identity {
    use super::*;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        /// **Feature: tile-orientation, Property 1: Cycle closure**
        /// *For any* grid, applying the eight scheduled steps of the
        /// orientation cycle yields the original grid.
        #[test]
        fn prop_eight_steps_are_identity(grid in grid_strategy(1, 7)) {
            let mut current = grid.clone();
            for orientation in Orientation::ALL {
                current.apply(orientation.step());
            }
            prop_assert_eq!(current, grid);
        }

        /// **Feature: tile-orientation, Property 1: Cycle closure**
        /// *For any* tile, eight calls to `next_orientation` restore the
        /// starting orientation and grid.
        #[test]
        fn prop_tile_cycle_restores_grid(grid in square_grid_strategy(1, 6), start in 0u8..8) {
            let mut tile = Tile::new(1, grid);
            tile.set_orientation(Orientation::new(start));
            let before = tile.grid().clone();
            for _ in 0..Orientation::COUNT {
                tile.next_orientation();
            }
            prop_assert_eq!(tile.orientation(), Orientation::new(start));
            prop_assert_eq!(tile.grid(), &before);
        }
    }
}

mod property_2_transform_involutions {
    use super::*;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        /// **Feature: tile-orientation, Property 2: Flip is an involution**
        #[test]
        fn prop_flip_twice_is_identity(grid in grid_strategy(1, 7)) {
            let flipped = grid.transform(Transform::FlipHorizontal);
            prop_assert_eq!(flipped.dimensions(), grid.dimensions());
            prop_assert_eq!(flipped.flip_horizontal(), grid);
        }

        /// **Feature: tile-orientation, Property 2: Four rotations are the identity**
        #[test]
        fn prop_four_rotations_are_identity(grid in grid_strategy(1, 7)) {
            let mut current = grid.clone();
            for turn in 1..=4 {
                current = current.rotate_ccw_90();
                if turn % 2 == 1 {
                    prop_assert_eq!(current.dimensions(), (grid.cols(), grid.rows()));
                }
            }
            prop_assert_eq!(current, grid);
        }

        /// **Feature: tile-orientation, Property 2: Views preserve content**
        /// *For any* grid, every orientation keeps the number of marked cells.
        #[test]
        fn prop_orientations_preserve_marked_count(grid in grid_strategy(1, 7)) {
            let marked = grid.count(b'#');
            let views: Vec<_> = grid.orientations().collect();
            prop_assert_eq!(views.len(), Orientation::COUNT);
            for (_, view) in views {
                prop_assert_eq!(view.count(b'#'), marked);
            }
        }
    }
}

mod property_3_crop_removes_one_ring {
    use super::*;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        /// **Feature: tile-orientation, Property 3: Crop dimensions**
        /// *For any* grid of at least 3x3, cropping reduces each dimension by
        /// two, and cropping again is only possible when 5x5 or larger.
        #[test]
        fn prop_crop_shrinks_by_two(grid in grid_strategy(3, 8)) {
            let (rows, cols) = grid.dimensions();
            let cropped = grid.crop_borders().unwrap();
            prop_assert_eq!(cropped.dimensions(), (rows - 2, cols - 2));
            for r in 0..rows - 2 {
                prop_assert_eq!(cropped.row(r), &grid.row(r + 1)[1..cols - 1]);
            }

            match cropped.crop_borders() {
                Some(twice) => {
                    prop_assert!(rows >= 5 && cols >= 5);
                    prop_assert_eq!(twice.dimensions(), (rows - 4, cols - 4));
                }
                None => prop_assert!(rows < 5 || cols < 5),
            }
        }

        /// *For any* grid thinner than 3 cells, cropping is refused.
        #[test]
        fn prop_crop_refuses_thin_grids(grid in grid_strategy(1, 2)) {
            prop_assert!(grid.crop_borders().is_none());
        }
    }
}

mod property_4_matching_symmetry {
    use super::*;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        /// **Feature: tile-orientation, Property 4: Border predicates**
        /// *For any* two tiles of equal size, `matches_to_left` holds exactly
        /// when the left border equals the neighbour's right border, and
        /// `matches_to_top` when the top border equals the neighbour's bottom.
        #[test]
        fn prop_matching_compares_facing_borders(
            (a, b) in (2usize..=6).prop_flat_map(|side| {
                (square_grid_strategy(side, side), square_grid_strategy(side, side))
            }),
            oa in 0u8..8,
            ob in 0u8..8,
        ) {
            let mut a = Tile::new(1, a);
            let mut b = Tile::new(2, b);
            a.set_orientation(Orientation::new(oa));
            b.set_orientation(Orientation::new(ob));
            prop_assert_eq!(a.matches_to_left(&b), a.border(Side::Left) == b.border(Side::Right));
            prop_assert_eq!(a.matches_to_top(&b), a.border(Side::Top) == b.border(Side::Bottom));
        }

        /// **Feature: tile-orientation, Property 4: Matching survives a half turn**
        /// *For any* tile and its left-right mirror placed to its right,
        /// turning both tiles half way round swaps them and they still match.
        #[test]
        fn prop_half_turn_swaps_neighbours(grid in square_grid_strategy(2, 6)) {
            let mut left = Tile::new(1, grid.clone());
            let mut right = Tile::new(2, mirror_columns(&grid));
            prop_assert!(right.matches_to_left(&left));

            let half_turn = Orientation::new(2);
            left.set_orientation(half_turn);
            right.set_orientation(half_turn);
            prop_assert!(left.matches_to_left(&right));
        }

        /// *For any* two tiles of different sizes, no orientation matches.
        #[test]
        fn prop_size_mismatch_never_matches(side in 2usize..=5, oa in 0u8..8, ob in 0u8..8) {
            let mut small = Tile::new(1, Grid::filled(side, side, b'#'));
            let mut large = Tile::new(2, Grid::filled(side + 1, side + 1, b'#'));
            small.set_orientation(Orientation::new(oa));
            large.set_orientation(Orientation::new(ob));
            prop_assert!(!small.matches_to_left(&large));
            prop_assert!(!small.matches_to_top(&large));
            prop_assert!(!large.matches_to_left(&small));
            prop_assert!(!large.matches_to_top(&small));
        }
    }
}
