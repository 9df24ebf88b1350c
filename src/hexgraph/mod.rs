//! Hex map adjacency and routing.
//!
//! Cells are matched into an [`AdjacencyGraph`] by shared boundary vertices
//! ([`build_adjacency`]), routes are found by a layered breadth-first search
//! ([`find_route`]), and displacements are turned into compass labels
//! ([`classify_bearing`]). Everything here is pure and synchronous.

pub mod adjacency_builder;
pub mod bearing;
pub mod graph;
pub mod models;
pub mod route_finder;
pub mod vertex_key;

pub use adjacency_builder::{build_adjacency, BuildOptions, Strategy};
pub use bearing::{bearing_between, classify_bearing, Compass};
pub use graph::AdjacencyGraph;
pub use models::{Cell, CellId, Vertex};
pub use route_finder::{find_route, hop_distances, RouteError, TieBreak};
pub use vertex_key::{Precision, VertexKey};
