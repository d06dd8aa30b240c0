// graph.rs
// ──────────────────────────────────────────────────────────────────────────────
// Undirected weighted graph built from an edge list.  Adjacency and edge costs
// are kept in two separate tables: the adjacency drives path enumeration, the
// cost table is only consulted when a finished path is priced.
//
// Both tables are written symmetrically for every edge, so a→b and b→a always
// agree.  Adjacency uses ordered containers; neighbor iteration (and with it
// the order in which paths are discovered) is the same on every run.
// ──────────────────────────────────────────────────────────────────────────────
use std::collections::{BTreeMap, BTreeSet, HashMap};

/// Identifier of a node in the graph.
pub type NodeId = i64;

/// Cost of traversing a single edge.
pub type Cost = i64;

/// Adjacency structure: every node maps to the set of its neighbors.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Graph {
    adjacency: BTreeMap<NodeId, BTreeSet<NodeId>>,
}

impl Graph {
    pub fn new() -> Self {
        Self {
            adjacency: BTreeMap::new(),
        }
    }

    /// Inserts both endpoints (if absent) and links them in both directions.
    pub fn add_edge(&mut self, a: NodeId, b: NodeId) {
        self.adjacency.entry(a).or_default().insert(b);
        self.adjacency.entry(b).or_default().insert(a);
    }

    pub fn contains(&self, node: NodeId) -> bool {
        self.adjacency.contains_key(&node)
    }

    /// Returns the neighbors of `node`, or `None` if the node is unknown.
    pub fn neighbors(&self, node: NodeId) -> Option<&BTreeSet<NodeId>> {
        self.adjacency.get(&node)
    }

    /// Iterates over all nodes in ascending order.
    pub fn nodes(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.adjacency.keys().copied()
    }

    pub fn min_node(&self) -> Option<NodeId> {
        self.adjacency.keys().next().copied()
    }

    pub fn max_node(&self) -> Option<NodeId> {
        self.adjacency.keys().next_back().copied()
    }

    pub fn node_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Number of distinct undirected edges (a self-loop counts once).
    pub fn edge_count(&self) -> usize {
        self.adjacency
            .iter()
            .map(|(node, neighbors)| neighbors.iter().filter(|n| *n >= node).count())
            .sum()
    }

    pub fn is_empty(&self) -> bool {
        self.adjacency.is_empty()
    }
}

/// Cost of every edge, keyed by ordered node pair and stored for both directions.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CostTable {
    costs: HashMap<(NodeId, NodeId), Cost>,
}

impl CostTable {
    pub fn new() -> Self {
        Self {
            costs: HashMap::new(),
        }
    }

    /// Records `cost` for a→b and b→a, replacing any earlier cost for the pair.
    pub fn set(&mut self, a: NodeId, b: NodeId, cost: Cost) {
        self.costs.insert((a, b), cost);
        self.costs.insert((b, a), cost);
    }

    pub fn get(&self, a: NodeId, b: NodeId) -> Option<Cost> {
        self.costs.get(&(a, b)).copied()
    }

    /// Number of directed entries (two per non-loop edge).
    pub fn len(&self) -> usize {
        self.costs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.costs.is_empty()
    }
}
