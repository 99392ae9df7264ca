//! Two-part puzzle solver traits

use crate::error::{ParseError, SolveError};

/// Trait for parsing puzzle input into shared data
///
/// The shared data holds the parsed input together with any intermediate
/// result that more than one part needs, so expensive work (such as the
/// placement search) runs once per input.
///
/// # Example
///
/// ```
/// use jigsaw_core::{AocParser, ParseError};
///
/// struct TileCount;
///
/// impl AocParser for TileCount {
///     type SharedData<'a> = usize;
///
///     fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
///         Ok(input.lines().filter(|l| l.starts_with("Tile ")).count())
///     }
/// }
///
/// assert_eq!(TileCount::parse("Tile 1:\n#.\n\nTile 2:\n.#\n").unwrap(), 2);
/// ```
pub trait AocParser {
    /// The shared data structure that holds parsed input and intermediate results.
    type SharedData<'a>;

    /// Parse the input string into the shared data structure.
    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError>;
}

/// Trait for solving a specific part of a puzzle.
///
/// The const generic `N` represents the part number (1, 2).
pub trait PartSolver<const N: u8>: AocParser {
    /// Solve this part of the puzzle.
    ///
    /// # Returns
    /// * `Ok(String)` - The answer for this part
    /// * `Err(SolveError)` - An error occurred while solving
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError>;
}

/// Dispatch from a runtime part number to the part solvers.
///
/// # Example
///
/// ```
/// use jigsaw_core::{AocParser, ParseError, PartSolver, SolveError, Solver};
///
/// struct Rows;
///
/// impl AocParser for Rows {
///     type SharedData<'a> = Vec<&'a str>;
///
///     fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
///         Ok(input.lines().collect())
///     }
/// }
///
/// impl PartSolver<1> for Rows {
///     fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
///         Ok(shared.len().to_string())
///     }
/// }
///
/// impl Solver for Rows {
///     const PARTS: u8 = 1;
///
///     fn solve_part(shared: &mut Self::SharedData<'_>, part: u8) -> Result<String, SolveError> {
///         match part {
///             1 => <Self as PartSolver<1>>::solve(shared),
///             _ => Err(SolveError::PartNotImplemented(part)),
///         }
///     }
/// }
///
/// let mut shared = Rows::parse("#.#\n.#.").unwrap();
/// assert_eq!(Rows::solve_part(&mut shared, 1).unwrap(), "2");
/// ```
pub trait Solver: AocParser {
    /// Number of parts this solver implements
    const PARTS: u8;

    /// Solve a specific part of the problem
    ///
    /// # Returns
    /// * `Ok(String)` - The answer for this part
    /// * `Err(SolveError::PartNotImplemented)` - The part is not implemented
    fn solve_part(shared: &mut Self::SharedData<'_>, part: u8) -> Result<String, SolveError>;
}

pub trait SolverExt: Solver {
    fn solve_part_checked_range(
        shared: &mut Self::SharedData<'_>,
        part: u8,
    ) -> Result<String, SolveError> {
        if (1..=Self::PARTS).contains(&part) {
            Self::solve_part(shared, part)
        } else {
            Err(SolveError::PartOutOfRange(part))
        }
    }
}

impl<T: Solver + ?Sized> SolverExt for T {}
