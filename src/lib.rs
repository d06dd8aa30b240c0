//! Bottleneck (minimax) path ranking for small undirected weighted graphs.
//!
//! Every simple path between two nodes is enumerated and ranked by the cost
//! of its most expensive edge, with the node count as tie-break.

pub mod app;
pub mod graph;
pub mod path;
