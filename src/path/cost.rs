use super::error::PathError;
use super::explorer::Path;
use crate::graph::{Cost, CostTable};

/// Ranking key of a path: its most expensive edge, then its node count.
///
/// Field order matters, the derived `Ord` compares `bottleneck` first.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PathCost {
    pub bottleneck: Cost,
    pub length: usize,
}

/// Computes the bottleneck (maximum edge cost) of `path` together with its
/// node count.
///
/// # Errors
/// Both errors indicate a path that was not built along graph edges:
/// - `PathError::TooShort` for paths of fewer than two nodes.
/// - `PathError::MissingEdgeCost` if a consecutive pair has no cost entry.
pub fn bottleneck_cost(path: &Path, costs: &CostTable) -> Result<PathCost, PathError> {
    let mut bottleneck: Option<Cost> = None;
    for (from, to) in path.edges() {
        let cost = costs
            .get(from, to)
            .ok_or(PathError::MissingEdgeCost { from, to })?;
        bottleneck = Some(bottleneck.map_or(cost, |max| max.max(cost)));
    }

    let bottleneck = bottleneck.ok_or(PathError::TooShort(path.len()))?;
    Ok(PathCost {
        bottleneck,
        length: path.len(),
    })
}
