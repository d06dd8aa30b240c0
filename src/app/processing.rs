//! Runs the path-ranking pipeline on an edge list that is already in memory.
//!
//! Stages: build the graph, resolve the endpoints, enumerate simple paths,
//! price and rank them. Every stage either succeeds completely or returns
//! an error; no partial result leaves this module.

use super::error::AppError;
use super::verbose_println; // Macro for conditional logging.
use crate::graph::{self, NodeId};
use crate::path::{self, PathExplorer, RankedPath};

/// Outcome of one pipeline run.
#[derive(Debug)]
pub struct RankingReport {
    pub start: NodeId,
    pub end: NodeId,
    pub ranked: Vec<RankedPath>,
}

/// Parses `data`, enumerates every simple path between the resolved
/// endpoints and returns them ranked by `(bottleneck, length)`.
///
/// # Arguments
/// * `data` - Edge list text, one `source dest cost` per line.
/// * `start`, `end` - Optional endpoints; default to the smallest and largest node.
/// * `verbose` - Enables step logging.
///
/// # Errors
/// `AppError::Parse` for malformed input, `AppError::Path` for an empty
/// graph or an unknown endpoint.
pub fn rank_edge_list(
    data: &str,
    start: Option<NodeId>,
    end: Option<NodeId>,
    verbose: bool,
) -> Result<RankingReport, AppError> {
    verbose_println!(verbose, "[STEP 1] Building graph...");
    let (graph, costs) = graph::load_graph(data)?;
    verbose_println!(
        verbose,
        "   => {} node(s), {} edge(s).",
        graph.node_count(),
        graph.edge_count()
    );

    verbose_println!(verbose, "[STEP 2] Resolving endpoints...");
    let (start, end) = path::resolve_endpoints(&graph, start, end)?;
    verbose_println!(verbose, "   => start = {}, end = {}.", start, end);

    verbose_println!(verbose, "[STEP 3] Enumerating and ranking simple paths...");
    let paths = PathExplorer::simple_paths(&graph, start, end)?;
    let ranked = path::rank_paths(paths, &costs)?;
    match ranked.first() {
        Some(best) => verbose_println!(
            verbose,
            "   => Found {} path(s); best bottleneck {} via {}.",
            ranked.len(),
            best.cost.bottleneck,
            best.path
        ),
        None => verbose_println!(verbose, "   => No path from {} to {}.", start, end),
    }

    Ok(RankingReport { start, end, ranked })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::ParseError;
    use crate::path::PathError;

    #[test]
    fn defaults_to_extreme_nodes() {
        let report = rank_edge_list("1 2 5\n2 3 1\n1 3 9", None, None, false).unwrap();
        assert_eq!((report.start, report.end), (1, 3));
        let rows: Vec<(i64, String)> = report
            .ranked
            .iter()
            .map(|r| (r.cost.bottleneck, r.path.to_string()))
            .collect();
        assert_eq!(
            rows,
            vec![(5, "(1, 2, 3)".to_string()), (9, "(1, 3)".to_string())]
        );
    }

    #[test]
    fn explicit_endpoints() {
        let report = rank_edge_list("1 2 5\n2 3 1\n1 3 9", Some(3), Some(2), false).unwrap();
        assert_eq!(report.ranked[0].path.to_string(), "(3, 2)");
        assert_eq!(report.ranked[0].cost.bottleneck, 1);
        assert_eq!(report.ranked[1].path.to_string(), "(3, 1, 2)");
        assert_eq!(report.ranked[1].cost.bottleneck, 9);
    }

    #[test]
    fn single_node_graph_has_no_results() {
        let report = rank_edge_list("4 4 2", Some(4), Some(4), false).unwrap();
        assert!(report.ranked.is_empty());
    }

    #[test]
    fn empty_input_is_an_empty_graph_error() {
        let err = rank_edge_list("", None, None, false).unwrap_err();
        assert!(matches!(err, AppError::Path(PathError::EmptyGraph)));
    }

    #[test]
    fn unknown_start_is_reported() {
        let err = rank_edge_list("1 2 5", Some(7), None, false).unwrap_err();
        assert!(matches!(err, AppError::Path(PathError::NodeNotFound(7))));
    }

    #[test]
    fn malformed_line_is_reported() {
        let err = rank_edge_list("1 2 5\n1 2", None, None, false).unwrap_err();
        match err {
            AppError::Parse(parse) => assert_eq!(parse.line(), 2),
            other => panic!("unexpected error: {other:?}"),
        }
        assert!(matches!(
            rank_edge_list("a b c", None, None, false),
            Err(AppError::Parse(ParseError::InvalidInteger { line: 1, .. }))
        ));
    }
}
