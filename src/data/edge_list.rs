//! Edge-list text files
//!
//! One undirected edge per line: two whitespace-separated vertex ids.
//! Blank lines and lines starting with `#` or `%` are ignored, as are any
//! columns after the second.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use anyhow::{anyhow, Context, Result};
use log;

use crate::graph::{Graph, GraphBuilder, VertexId};

/// Load an undirected graph from an edge-list file
pub fn load_edge_list<P: AsRef<Path>>(path: P) -> Result<Graph> {
    let path = path.as_ref();
    log::info!("Reading edge list: {}", path.display());

    // Check if the file exists
    if !path.exists() {
        return Err(anyhow!("File not found: {}", path.display()));
    }

    let file = File::open(path).with_context(|| format!("opening {}", path.display()))?;
    let graph = parse_edge_list(BufReader::new(file))
        .with_context(|| format!("parsing {}", path.display()))?;

    log::info!(
        "Loaded graph with {} vertices and {} edges",
        graph.vertex_count(),
        graph.edge_count()
    );

    Ok(graph)
}

/// Parse an edge list from any buffered reader
pub fn parse_edge_list<R: BufRead>(reader: R) -> Result<Graph> {
    let mut builder = GraphBuilder::with_capacity(1024);

    for (line_idx, line) in reader.lines().enumerate() {
        let line_no = line_idx + 1;
        let line = line.with_context(|| format!("reading line {line_no}"))?;
        let trimmed = line.trim();

        if trimmed.is_empty() || trimmed.starts_with('#') || trimmed.starts_with('%') {
            continue;
        }

        let mut fields = trimmed.split_whitespace();
        let from = parse_id(fields.next(), line_no)?;
        let to = parse_id(fields.next(), line_no)?;

        if !builder.add_edge(from, to) {
            log::debug!("Skipping self-loop on vertex {} (line {})", from, line_no);
        }
    }

    if builder.self_loops() > 0 {
        log::warn!("Skipped {} self-loop(s)", builder.self_loops());
    }

    Ok(builder.build())
}

fn parse_id(field: Option<&str>, line_no: usize) -> Result<VertexId> {
    let field = field.ok_or_else(|| anyhow!("line {line_no}: expected two vertex ids"))?;
    field
        .parse::<VertexId>()
        .with_context(|| format!("line {line_no}: invalid vertex id '{field}'"))
}
