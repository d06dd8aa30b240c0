use super::error::ParseError;
use super::graph::{Cost, CostTable, Graph, NodeId};

//─────────────────────────────────────────────────────────────────────────────

/// One parsed line of the edge list.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EdgeRecord {
    pub source: NodeId,
    pub dest: NodeId,
    pub cost: Cost,
}

/// Builds the adjacency and cost tables from an edge-list string.
///
/// Each line must hold exactly three whitespace-separated integers,
/// `source dest cost`. A pair that shows up more than once keeps the cost of
/// its last occurrence. Self-loops are accepted as-is.
///
/// # Errors
/// Returns the `ParseError` for the first malformed line; nothing built so
/// far is returned in that case.
pub fn load_graph(data: &str) -> Result<(Graph, CostTable), ParseError> {
    let mut graph = Graph::new();
    let mut costs = CostTable::new();

    for (index, line) in data.lines().enumerate() {
        let edge = parse_edge_line(index + 1, line)?;
        graph.add_edge(edge.source, edge.dest);
        costs.set(edge.source, edge.dest, edge.cost);
    }

    Ok((graph, costs))
}

/// Parses a single `source dest cost` line. `line_number` is 1-based and is
/// only used for diagnostics.
pub fn parse_edge_line(line_number: usize, line: &str) -> Result<EdgeRecord, ParseError> {
    let fields: Vec<&str> = line.split_whitespace().collect();
    let [source, dest, cost] = fields.as_slice() else {
        return Err(ParseError::FieldCount {
            line: line_number,
            found: fields.len(),
            content: line.to_string(),
        });
    };

    let parse_field = |token: &str| {
        token
            .parse::<i64>()
            .map_err(|source| ParseError::InvalidInteger {
                line: line_number,
                token: token.to_string(),
                content: line.to_string(),
                source,
            })
    };

    Ok(EdgeRecord {
        source: parse_field(*source)?,
        dest: parse_field(*dest)?,
        cost: parse_field(*cost)?,
    })
}
