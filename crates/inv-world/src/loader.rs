//! Text map loader.
//!
//! # Format
//!
//! One line per origin city: the city name, then any number of
//! `direction=destination` roads, separated by whitespace.
//!
//! ```text
//! Foo north=Bar west=Baz south=Qu-ux
//! Bar south=Foo west=Bee
//! ```
//!
//! Directions are case-insensitive.  Every city named anywhere in the file
//! exists in the resulting map, including a city listed alone on its line.
//!
//! A blank line, or a road token that is not exactly `direction=destination`
//! with both sides non-empty, is rejected as
//! [`WorldError::MalformedInput`] with its 1-based line number.

use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;

use crate::{WorldError, WorldMap, WorldResult};

/// Load a map from the file at `path`.
pub fn load_map(path: &Path, capacity: usize) -> WorldResult<WorldMap> {
    let file = File::open(path)?;
    load_map_reader(file, capacity)
}

/// Like [`load_map`] but accepts any `Read` source.
///
/// Useful for testing (pass a `std::io::Cursor`) or reading from stdin.
pub fn load_map_reader<R: Read>(reader: R, capacity: usize) -> WorldResult<WorldMap> {
    let mut world = WorldMap::new(capacity);
    for (i, line) in BufReader::new(reader).lines().enumerate() {
        parse_line(&mut world, &line?, i + 1)?;
    }
    Ok(world)
}

// ── Helpers ───────────────────────────────────────────────────────────────────

fn parse_line(world: &mut WorldMap, line: &str, line_no: usize) -> WorldResult<()> {
    let mut tokens = line.split_whitespace();
    let Some(city) = tokens.next() else {
        return Err(malformed(line_no, "expected a city name".to_owned()));
    };

    world.add_city(city);
    for token in tokens {
        let (direction, dest) = parse_road(token).ok_or_else(|| {
            malformed(line_no, format!("invalid road {token:?}: expected direction=city"))
        })?;
        world.add_link(city, direction, dest);
    }
    Ok(())
}

fn parse_road(token: &str) -> Option<(&str, &str)> {
    let (direction, dest) = token.split_once('=')?;
    if direction.is_empty() || dest.is_empty() || dest.contains('=') {
        return None;
    }
    Some((direction, dest))
}

fn malformed(line: usize, reason: String) -> WorldError {
    WorldError::MalformedInput { line, reason }
}
