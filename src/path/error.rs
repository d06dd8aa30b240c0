use crate::graph::NodeId;
use thiserror::Error;

// Error type for endpoint resolution and path evaluation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PathError {
    /// The graph has no nodes, so there is no smallest or largest node to default to.
    #[error("graph is empty, cannot pick a default start or end node")]
    EmptyGraph,

    /// A requested start or end node does not appear in the graph.
    #[error("node {0} not found in graph")]
    NodeNotFound(NodeId),

    /// A path with fewer than two nodes has no edge to take a bottleneck from.
    #[error("path of {0} node(s) has no edges to price")]
    TooShort(usize),

    /// A consecutive pair on an enumerated path has no entry in the cost table.
    #[error("no cost recorded for edge {from} -> {to}")]
    MissingEdgeCost { from: NodeId, to: NodeId },
}
