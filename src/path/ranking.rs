use std::io::Write;

use super::cost::{bottleneck_cost, PathCost};
use super::error::PathError;
use super::explorer::Path;
use crate::graph::CostTable;

/// A path paired with its ranking key.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RankedPath {
    pub cost: PathCost,
    pub path: Path,
}

/// Prices every path and sorts the results by `(bottleneck, length)`.
///
/// The sort is stable: paths with equal cost and length keep the order in
/// which `paths` produced them.
///
/// # Errors
/// Propagates the first `PathError` from `bottleneck_cost`; no partial
/// ranking is returned.
pub fn rank_paths<I>(paths: I, costs: &CostTable) -> Result<Vec<RankedPath>, PathError>
where
    I: IntoIterator<Item = Path>,
{
    let mut ranked = paths
        .into_iter()
        .map(|path| -> Result<RankedPath, PathError> {
            let cost = bottleneck_cost(&path, costs)?;
            Ok(RankedPath { cost, path })
        })
        .collect::<Result<Vec<_>, _>>()?;

    ranked.sort_by_key(|result| result.cost);
    Ok(ranked)
}

/// Writes ranked paths as a tab-separated table with a `cost\tpath` header.
pub fn write_table(writer: &mut dyn Write, ranked: &[RankedPath]) -> std::io::Result<()> {
    writeln!(writer, "cost\tpath")?;
    for result in ranked {
        writeln!(writer, "{}\t{}", result.cost.bottleneck, result.path)?;
    }
    Ok(())
}
