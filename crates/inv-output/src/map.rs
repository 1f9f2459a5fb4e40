//! Surviving-map writer.
//!
//! Emits one line per live city that still has at least one road out, in the
//! loader's format:
//!
//! ```text
//! Foo north=Bar west=Baz
//! ```
//!
//! Cities with no roads out are omitted entirely, so a city that lost every
//! neighbour disappears from the output even though it survived.  Cities are
//! written in creation order and roads in direction order.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use inv_world::{City, WorldMap};

use crate::OutputResult;

/// Render `city` as one map line, or `None` if it has no roads out.
pub fn city_line(world: &WorldMap, city: &City) -> Option<String> {
    if city.out_degree() == 0 {
        return None;
    }
    let mut line = city.name().to_owned();
    for (direction, to) in city.out_links() {
        if let Some(dest) = world.city(to) {
            line.push(' ');
            line.push_str(direction);
            line.push('=');
            line.push_str(dest.name());
        }
    }
    Some(line)
}

/// Write the map to any `Write` sink.
pub fn write_map<W: Write>(world: &WorldMap, sink: W) -> OutputResult<()> {
    let mut out = BufWriter::new(sink);
    for (_, city) in world.cities() {
        if let Some(line) = city_line(world, city) {
            writeln!(out, "{line}")?;
        }
    }
    out.flush()?;
    Ok(())
}

/// Create (or truncate) the file at `path` and write the map to it.
pub fn write_map_file(world: &WorldMap, path: &Path) -> OutputResult<()> {
    write_map(world, File::create(path)?)
}
