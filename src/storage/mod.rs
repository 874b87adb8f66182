//! Results persistence module

use anyhow::{Context, Result};
use crate::community::Community;
use crate::graph::{Graph, VertexId};
use std::fs::{self, File};
use std::io::Write;
use std::path::Path;
use serde_json::{json, to_string_pretty};

/// Everything produced by one analysis run
#[derive(Debug, Clone, Default)]
pub struct AnalysisReport {
    /// Community summaries, largest first
    pub communities: Vec<Community>,

    /// Minimum community size the detector ran with
    pub min_vertices: usize,

    /// Number of betweenness computations the detector needed
    pub betweenness_passes: usize,

    /// Influential users, if that analysis ran
    pub influential_users: Option<Vec<VertexId>>,

    /// Broadcast seed users, if that analysis ran
    pub broadcast_seeds: Option<Vec<VertexId>>,
}

/// Save analysis results to the specified directory
pub fn save_results(report: &AnalysisReport, graph: &Graph, output_dir: &Path) -> Result<()> {
    log::info!(
        "Saving {} communities to {}",
        report.communities.len(),
        output_dir.display()
    );

    // Ensure output directory exists
    fs::create_dir_all(output_dir)
        .with_context(|| format!("creating {}", output_dir.display()))?;

    save_summary(report, graph, output_dir)?;
    save_communities(&report.communities, output_dir)?;

    log::info!("Results saved successfully");

    Ok(())
}

/// Save summary information
fn save_summary(report: &AnalysisReport, graph: &Graph, output_dir: &Path) -> Result<()> {
    log::info!("Saving summary information");

    let communities = &report.communities;
    let count = communities.len();
    let clustered: usize = communities.iter().map(|c| c.size).sum();
    let avg_degree = if graph.is_empty() {
        0.0
    } else {
        graph.directed_edge_count() as f64 / graph.vertex_count() as f64
    };
    let total_density: f64 = communities.iter().map(|c| c.density as f64).sum();

    let summary = json!({
        "graph_stats": {
            "vertex_count": graph.vertex_count(),
            "edge_count": graph.edge_count(),
            "avg_degree": avg_degree,
        },
        "community_stats": {
            "min_vertices": report.min_vertices,
            "betweenness_passes": report.betweenness_passes,
            "community_count": count,
            "total_community_vertices": clustered,
            "largest_community_size": communities.iter().map(|c| c.size).max().unwrap_or(0),
            "smallest_community_size": communities.iter().map(|c| c.size).min().unwrap_or(0),
            "avg_community_size": clustered as f64 / count.max(1) as f64,
            "avg_density": total_density / count.max(1) as f64,
        },
        "influential_users": report.influential_users,
        "broadcast_seeds": report.broadcast_seeds,
    });

    write_json(&output_dir.join("summary.json"), &summary)
}

/// Save individual community information
fn save_communities(communities: &[Community], output_dir: &Path) -> Result<()> {
    log::info!("Saving individual community information");

    let communities_dir = output_dir.join("communities");
    fs::create_dir_all(&communities_dir)
        .with_context(|| format!("creating {}", communities_dir.display()))?;

    for community in communities {
        let path = communities_dir.join(format!("community_{}.json", community.id));
        write_json(&path, community)?;
    }

    let all = json!({
        "communities": communities.iter().map(|c| {
            json!({
                "id": c.id,
                "size": c.size,
                "edge_count": c.edge_count,
                "density": c.density,
                "central_nodes": c.central_nodes,
            })
        }).collect::<Vec<_>>()
    });

    write_json(&output_dir.join("all_communities.json"), &all)
}

fn write_json<T: serde::Serialize + ?Sized>(path: &Path, value: &T) -> Result<()> {
    let mut file = File::create(path).with_context(|| format!("creating {}", path.display()))?;
    file.write_all(to_string_pretty(value)?.as_bytes())?;
    Ok(())
}
