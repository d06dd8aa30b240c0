// error module
mod error;
// graph module
#[allow(clippy::module_inception)]
mod graph;
// loader module
mod loader;

//─────────────────────────────────────────────────────────────────────────────
// Public re-exports.
//─────────────────────────────────────────────────────────────────────────────
pub use error::ParseError;
pub use graph::{Cost, CostTable, Graph, NodeId};
pub use loader::{load_graph, parse_edge_line, EdgeRecord};
