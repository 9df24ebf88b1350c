use anyhow::{anyhow, Result};
use std::path::Path;

use crate::hexgraph::{bearing_between, classify_bearing, Compass};
use crate::store;

pub fn cmd_bearing_vector(dx: f64, dy: f64) -> Compass {
    let c = classify_bearing(dx, dy);
    println!("{}", c);
    c
}

/// Direction from the center of `from` to the center of `to`.
pub fn cmd_bearing_cells(cells_path: &Path, from: &str, to: &str) -> Result<Compass> {
    let cells = store::load_cells(cells_path)?;
    let find = |id: &str| {
        cells
            .iter()
            .find(|c| c.key == id)
            .ok_or_else(|| anyhow!("unknown cell '{}' in {}", id, cells_path.display()))
    };
    let c = bearing_between(find(from)?, find(to)?);
    println!("{}", c);
    Ok(c)
}
