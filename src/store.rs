use anyhow::{Context, Result};
use log::info;
use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

use crate::hexgraph::{AdjacencyGraph, Cell};

/// Read a JSON array of cells (`[{key, x, y, vertices: [{x, y}]}]`).
pub fn load_cells(path: &Path) -> Result<Vec<Cell>> {
    let file = File::open(path).with_context(|| format!("open cells file {}", path.display()))?;
    let cells: Vec<Cell> = serde_json::from_reader(BufReader::new(file))
        .with_context(|| format!("parse cells JSON {}", path.display()))?;
    info!("Loaded {} cells from {}", cells.len(), path.display());
    Ok(cells)
}

/// Read a precomputed adjacency object (`{id: [neighbor, ...]}`).
pub fn load_adjacency(path: &Path) -> Result<AdjacencyGraph> {
    let file = File::open(path).with_context(|| format!("open adjacency file {}", path.display()))?;
    let graph: AdjacencyGraph = serde_json::from_reader(BufReader::new(file))
        .with_context(|| format!("parse adjacency JSON {}", path.display()))?;
    info!("Loaded adjacency for {} cells from {}", graph.len(), path.display());
    Ok(graph)
}

pub fn save_adjacency(path: &Path, graph: &AdjacencyGraph) -> Result<()> {
    if let Some(dir) = path.parent() {
        if !dir.as_os_str().is_empty() {
            fs::create_dir_all(dir).with_context(|| format!("create directory {}", dir.display()))?;
        }
    }
    let file = File::create(path).with_context(|| format!("create {}", path.display()))?;
    let mut w = BufWriter::new(file);
    serde_json::to_writer(&mut w, graph).with_context(|| format!("write adjacency JSON {}", path.display()))?;
    w.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::{tempdir, NamedTempFile};

    #[test]
    fn adjacency_survives_save_and_load() -> Result<()> {
        let g: AdjacencyGraph = serde_json::from_str(r#"{"A":["B"],"B":["A","C"],"C":["B"]}"#)?;
        let dir = tempdir()?;
        let path = dir.path().join("nested").join("adj.json");
        save_adjacency(&path, &g)?;
        let back = load_adjacency(&path)?;
        assert_eq!(back, g);
        Ok(())
    }

    #[test]
    fn cells_load_with_missing_vertices() -> Result<()> {
        let mut tmp = NamedTempFile::new()?;
        write!(tmp, r#"[{{"key":"A","x":0,"y":0,"vertices":[{{"x":1,"y":0}}]}},{{"key":"B","x":2,"y":0}}]"#)?;
        let cells = load_cells(tmp.path())?;
        assert_eq!(cells.len(), 2);
        assert_eq!(cells[0].vertices.len(), 1);
        assert!(cells[1].vertices.is_empty());
        Ok(())
    }

    #[test]
    fn missing_file_reports_path() {
        let err = load_cells(Path::new("/nonexistent/cells.json")).unwrap_err();
        assert!(format!("{:#}", err).contains("/nonexistent/cells.json"));
    }
}
