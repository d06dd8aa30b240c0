use clap::Parser;
use std::path::PathBuf;

use crate::graph::NodeId;

#[derive(Parser, Debug)]
#[clap(author, version, about = "Ranks every simple path between two nodes of an undirected weighted graph by its most expensive edge.", long_about = None)]
pub struct Cli {
    /// Edge list file, one `source dest cost` per line (use "-" to read from stdin)
    pub input: PathBuf,

    /// Start node in the graph (defaults to the smallest node)
    #[clap(short, long, allow_negative_numbers = true)]
    pub start: Option<NodeId>,

    /// End node in the graph (defaults to the largest node)
    #[clap(short, long, allow_negative_numbers = true)]
    pub end: Option<NodeId>,

    /// Show verbose output on stderr, or in the file given by --log-file.
    #[clap(short, long)]
    pub verbose: bool,

    /// Write the verbose log to this file instead of stderr.
    #[clap(long, value_name = "FILE", requires = "verbose")]
    pub log_file: Option<PathBuf>,
}
