// error module
mod error;
// explorer module
mod explorer;

// cost module
pub mod cost;
// ranking module
pub mod ranking;

//─────────────────────────────────────────────────────────────────────────────
// Public re-exports.
//─────────────────────────────────────────────────────────────────────────────
pub use cost::{bottleneck_cost, PathCost};
pub use error::PathError;
pub use explorer::{resolve_endpoints, Path, PathExplorer, SimplePaths};
pub use ranking::{rank_paths, write_table, RankedPath};
