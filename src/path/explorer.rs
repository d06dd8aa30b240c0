use std::fmt;
use std::rc::Rc;

use super::error::PathError;
use crate::graph::{Graph, NodeId};

/// A simple path: distinct nodes, each consecutive pair joined by an edge.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Path {
    nodes: Vec<NodeId>,
}

impl Path {
    pub fn new(nodes: Vec<NodeId>) -> Self {
        Self { nodes }
    }

    pub fn nodes(&self) -> &[NodeId] {
        &self.nodes
    }

    /// Number of nodes on the path.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Consecutive `(from, to)` pairs along the path.
    pub fn edges(&self) -> impl Iterator<Item = (NodeId, NodeId)> + '_ {
        self.nodes.windows(2).map(|pair| (pair[0], pair[1]))
    }
}

impl fmt::Display for Path {
    /// Renders as `(1, 2, 3)`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(")?;
        for (i, node) in self.nodes.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", node)?;
        }
        write!(f, ")")
    }
}

/// Resolves the endpoints of a search, defaulting to the smallest node for
/// `start` and the largest node for `end`.
///
/// # Errors
/// - `PathError::EmptyGraph` if a default is needed and the graph has no nodes.
/// - `PathError::NodeNotFound` if an explicit endpoint is not in the graph
///   (start is checked before end).
pub fn resolve_endpoints(
    graph: &Graph,
    start: Option<NodeId>,
    end: Option<NodeId>,
) -> Result<(NodeId, NodeId), PathError> {
    let start = match start {
        Some(node) => node,
        None => graph.min_node().ok_or(PathError::EmptyGraph)?,
    };
    let end = match end {
        Some(node) => node,
        None => graph.max_node().ok_or(PathError::EmptyGraph)?,
    };

    for node in [start, end] {
        if !graph.contains(node) {
            return Err(PathError::NodeNotFound(node));
        }
    }
    Ok((start, end))
}

/// `PathExplorer` finds every simple path between two nodes of a `Graph`.
pub struct PathExplorer;

impl PathExplorer {
    /// Returns a lazy iterator over all simple paths from `start` to `end`.
    ///
    /// Paths come out in discovery order, which is not meaningful on its own;
    /// rank them before presenting. A trivial one-node path (`start == end`)
    /// is never produced.
    ///
    /// # Errors
    /// Returns `PathError::NodeNotFound` if either endpoint is not in the graph.
    pub fn simple_paths(
        graph: &Graph,
        start: NodeId,
        end: NodeId,
    ) -> Result<SimplePaths<'_>, PathError> {
        for node in [start, end] {
            if !graph.contains(node) {
                return Err(PathError::NodeNotFound(node));
            }
        }
        Ok(SimplePaths {
            graph,
            end,
            stack: vec![(start, Rc::new(Vec::new()))],
        })
    }

    /// Collects every simple path from `start` to `end`.
    pub fn get_paths(graph: &Graph, start: NodeId, end: NodeId) -> Result<Vec<Path>, PathError> {
        Ok(Self::simple_paths(graph, start, end)?.collect())
    }
}

/// Explicit-stack depth-first search over simple paths.
///
/// Each frame pairs the node to visit with the path that led to it. Sibling
/// frames share that prefix through an `Rc`; popping a frame always builds a
/// fresh vector for the extended path, so the shared prefix is never written.
pub struct SimplePaths<'g> {
    graph: &'g Graph,
    end: NodeId,
    stack: Vec<(NodeId, Rc<Vec<NodeId>>)>,
}

impl Iterator for SimplePaths<'_> {
    type Item = Path;

    fn next(&mut self) -> Option<Path> {
        while let Some((current, prefix)) = self.stack.pop() {
            let mut extended = Vec::with_capacity(prefix.len() + 1);
            extended.extend_from_slice(&prefix);
            extended.push(current);
            let extended = Rc::new(extended);

            if let Some(neighbors) = self.graph.neighbors(current) {
                for &neighbor in neighbors {
                    if !extended.contains(&neighbor) {
                        self.stack.push((neighbor, Rc::clone(&extended)));
                    }
                }
            }

            if current == self.end && extended.len() > 1 {
                return Some(Path::new(extended.to_vec()));
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::load_graph;
    use std::collections::HashSet;

    fn graph_from(data: &str) -> Graph {
        load_graph(data).unwrap().0
    }

    fn sorted_paths(graph: &Graph, start: NodeId, end: NodeId) -> Vec<Vec<NodeId>> {
        let mut paths: Vec<Vec<NodeId>> = PathExplorer::simple_paths(graph, start, end)
            .unwrap()
            .map(|p| p.nodes().to_vec())
            .collect();
        paths.sort();
        paths
    }

    #[test]
    fn triangle_has_two_paths() {
        let graph = graph_from("1 2 5\n2 3 1\n1 3 9");
        assert_eq!(sorted_paths(&graph, 1, 3), vec![vec![1, 2, 3], vec![1, 3]]);
    }

    #[test]
    fn complete_graph_on_four_nodes() {
        // K4: 1 direct, 2 via one middle node, 2 via both middle nodes.
        let graph = graph_from("1 2 1\n1 3 1\n1 4 1\n2 3 1\n2 4 1\n3 4 1");
        assert_eq!(
            sorted_paths(&graph, 1, 4),
            vec![
                vec![1, 2, 3, 4],
                vec![1, 2, 4],
                vec![1, 3, 2, 4],
                vec![1, 3, 4],
                vec![1, 4],
            ]
        );
    }

    #[test]
    fn paths_are_simple_and_follow_edges() {
        let data = "1 2 1\n1 3 1\n1 4 1\n2 3 1\n2 4 1\n3 4 1\n4 5 1\n3 5 1\n5 6 1\n2 6 1";
        let graph = graph_from(data);
        let paths = PathExplorer::get_paths(&graph, 1, 6).unwrap();
        assert!(!paths.is_empty());

        let mut seen = HashSet::new();
        for path in &paths {
            assert_eq!(path.nodes().first(), Some(&1));
            assert_eq!(path.nodes().last(), Some(&6));
            let distinct: HashSet<_> = path.nodes().iter().collect();
            assert_eq!(distinct.len(), path.len(), "repeated node in {path}");
            for (a, b) in path.edges() {
                assert!(graph.neighbors(a).unwrap().contains(&b));
            }
            assert!(seen.insert(path.clone()), "duplicate path {path}");
        }
    }

    #[test]
    fn same_start_and_end_yields_nothing() {
        let graph = graph_from("1 1 0");
        assert_eq!(PathExplorer::simple_paths(&graph, 1, 1).unwrap().count(), 0);

        let graph = graph_from("1 2 3\n2 3 4\n3 1 5");
        assert_eq!(PathExplorer::simple_paths(&graph, 2, 2).unwrap().count(), 0);
    }

    #[test]
    fn disconnected_endpoints_yield_nothing() {
        let graph = graph_from("1 2 3\n3 4 5");
        assert_eq!(PathExplorer::simple_paths(&graph, 1, 4).unwrap().count(), 0);
    }

    #[test]
    fn unknown_endpoint_is_an_error() {
        let graph = graph_from("1 2 3");
        assert_eq!(
            PathExplorer::simple_paths(&graph, 9, 2).err(),
            Some(PathError::NodeNotFound(9))
        );
        assert_eq!(
            PathExplorer::simple_paths(&graph, 1, 8).err(),
            Some(PathError::NodeNotFound(8))
        );
    }

    #[test]
    fn endpoints_default_to_extremes() {
        let graph = graph_from("5 -3 1\n5 12 2");
        assert_eq!(resolve_endpoints(&graph, None, None), Ok((-3, 12)));
        assert_eq!(resolve_endpoints(&graph, Some(5), None), Ok((5, 12)));
        assert_eq!(resolve_endpoints(&graph, None, Some(5)), Ok((-3, 5)));
    }

    #[test]
    fn endpoint_resolution_errors() {
        let empty = Graph::new();
        assert_eq!(resolve_endpoints(&empty, None, None), Err(PathError::EmptyGraph));
        assert_eq!(
            resolve_endpoints(&empty, Some(1), Some(2)),
            Err(PathError::NodeNotFound(1))
        );

        let graph = graph_from("1 2 3");
        assert_eq!(
            resolve_endpoints(&graph, Some(4), Some(7)),
            Err(PathError::NodeNotFound(4))
        );
        assert_eq!(
            resolve_endpoints(&graph, None, Some(7)),
            Err(PathError::NodeNotFound(7))
        );
    }

    #[test]
    fn path_display() {
        assert_eq!(Path::new(vec![1, 2, 3]).to_string(), "(1, 2, 3)");
        assert_eq!(Path::new(vec![-4, 10]).to_string(), "(-4, 10)");
    }
}
