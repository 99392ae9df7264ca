//! Parsing `Tile <id>:` blocks

use crate::error::ParseError;
use crate::tile::{Tile, load_tile};
use anyhow::{Context, anyhow, bail};
use regex::Regex;
use std::cell::OnceCell;
use std::collections::HashSet;

/// Parser for tile listings with a lazily compiled header pattern
///
/// The input is a sequence of blocks, each a `Tile <id>:` header followed by
/// the tile's rows and terminated by a blank line or the end of input.
#[derive(Clone, Debug, Default)]
pub struct TileParser {
    header_regex: OnceCell<Regex>,
}

impl TileParser {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get or compile the tile header regex
    fn header_regex(&self) -> &Regex {
        self.header_regex
            .get_or_init(|| Regex::new(r"^Tile (\d+):$").unwrap())
    }

    /// Extract the id from a `Tile <id>:` header line
    pub fn parse_header(&self, line: &str) -> anyhow::Result<u64> {
        let captures = self
            .header_regex()
            .captures(line)
            .ok_or_else(|| anyhow!("expected `Tile <id>:`, found {:?}", line))?;
        let id = &captures[1];
        id.parse()
            .with_context(|| format!("tile id {} does not fit in 64 bits", id))
    }

    /// Parse every tile block in `input`
    ///
    /// All tiles must be square, share the same size and have distinct ids;
    /// rows may only contain `#` and `.`. Any violation fails the whole parse.
    pub fn parse(&self, input: &str) -> Result<Vec<Tile>, ParseError> {
        let mut lines = input
            .lines()
            .enumerate()
            .map(|(index, line)| (index + 1, line.trim_end()))
            .peekable();
        let mut tiles: Vec<Tile> = Vec::new();
        let mut seen = HashSet::new();

        loop {
            while lines.next_if(|(_, line)| line.is_empty()).is_some() {}
            let Some((header_line, header)) = lines.next() else {
                break;
            };

            let id = self
                .parse_header(header)
                .map_err(|e| at_line(header_line, e))?;
            if !seen.insert(id) {
                return Err(at_line(header_line, anyhow!("duplicate tile id {}", id)));
            }

            let mut rows = Vec::new();
            while let Some((line_number, row)) = lines.next_if(|(_, line)| !line.is_empty()) {
                check_symbols(row).map_err(|e| at_line(line_number, e))?;
                rows.push(row);
            }

            let tile = load_tile(id, rows).map_err(|e| in_tile(id, header_line, e))?;
            let (height, width) = tile.grid().dimensions();
            if height != width {
                return Err(at_line(
                    header_line,
                    anyhow!("tile {} is {}x{}, tiles must be square", id, height, width),
                ));
            }
            if let Some(first) = tiles.first()
                && first.grid().dimensions() != (height, width)
            {
                return Err(at_line(
                    header_line,
                    anyhow!(
                        "tile {} is {}x{}, but tile {} is {}x{}",
                        id,
                        height,
                        width,
                        first.id(),
                        first.grid().rows(),
                        first.grid().cols()
                    ),
                ));
            }
            tiles.push(tile);
        }

        if tiles.is_empty() {
            return Err(ParseError::MissingData("input contains no tiles".into()));
        }
        Ok(tiles)
    }
}

/// Parse every tile block in `input` with a fresh [`TileParser`]
pub fn parse_tiles(input: &str) -> Result<Vec<Tile>, ParseError> {
    TileParser::new().parse(input)
}

fn check_symbols(row: &str) -> anyhow::Result<()> {
    if let Some(symbol) = row.chars().find(|&c| c != '#' && c != '.') {
        bail!("unexpected symbol {:?}, rows may only contain '#' and '.'", symbol);
    }
    Ok(())
}

fn at_line(line: usize, error: anyhow::Error) -> ParseError {
    ParseError::InvalidFormat(format!("(line {}) {:#}", line, error))
}

fn in_tile(id: u64, line: usize, error: ParseError) -> ParseError {
    match error {
        ParseError::InvalidFormat(msg) => {
            ParseError::InvalidFormat(format!("(line {}) tile {}: {}", line, id, msg))
        }
        ParseError::MissingData(msg) => {
            ParseError::MissingData(format!("(line {}) tile {}: {}", line, id, msg))
        }
        ParseError::Other(msg) => ParseError::Other(format!("(line {}) tile {}: {}", line, id, msg)),
    }
}
