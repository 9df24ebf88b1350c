use std::path::PathBuf;

pub const DATA_DIR: &str = "data";
pub const CELLS_FILE: &str = "cells.json";
pub const ADJACENCY_FILE: &str = "adjacency.json";

pub fn data_dir() -> PathBuf {
    PathBuf::from(DATA_DIR)
}

/// Default `(cells, adjacency)` file locations, relative to the working directory.
pub fn default_paths() -> (PathBuf, PathBuf) {
    let dir = data_dir();
    (dir.join(CELLS_FILE), dir.join(ADJACENCY_FILE))
}
