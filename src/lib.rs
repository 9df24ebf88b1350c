pub mod commands;
pub mod hexgraph;
pub mod store;
pub mod util;
