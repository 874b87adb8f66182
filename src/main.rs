use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use girvan_newman_analyzer::analysis;
use girvan_newman_analyzer::community::CommunityDetector;
use girvan_newman_analyzer::config::Config;
use girvan_newman_analyzer::data;
use girvan_newman_analyzer::storage::{self, AnalysisReport};

#[derive(Parser, Debug)]
#[clap(
    name = "girvan-newman-analyzer",
    about = "Community detection in social networks by edge betweenness"
)]
struct Cli {
    /// Path to input edge-list file (two vertex ids per line)
    #[clap(long)]
    input: PathBuf,

    /// Output directory for results
    #[clap(long, default_value = "community_results")]
    output_dir: PathBuf,

    /// Minimum number of users in a community
    #[clap(long, default_value = "3")]
    min_vertices: usize,

    /// Fraction of the network a user must know to count as influential
    #[clap(long, default_value = "0.05")]
    influence_ratio: f64,

    /// Fraction of friends that must have posted before a user re-shares
    #[clap(long, default_value = "0.10")]
    share_ratio: f64,

    /// Number of worker threads (0 = use all available cores)
    #[clap(long, default_value = "0")]
    threads: usize,

    /// Skip the influential-user and broadcast analyses
    #[clap(long)]
    skip_heuristics: bool,

    /// Verbose logging
    #[clap(long, short)]
    verbose: bool,
}

fn main() -> Result<()> {
    // Parse command line arguments
    let args = Cli::parse();

    // Configure logging
    let log_level = if args.verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };

    env_logger::Builder::new()
        .filter_level(log_level)
        .format_timestamp_millis()
        .init();

    let config = Config::new(
        args.min_vertices,
        args.influence_ratio,
        args.share_ratio,
        args.threads,
    );
    config.validate()?;

    let num_threads = config.worker_threads();
    log::info!("Using {} worker threads", num_threads);
    rayon::ThreadPoolBuilder::new()
        .num_threads(num_threads)
        .build_global()?;

    log::info!("Starting community analysis");
    log::info!("Input: {}", args.input.display());
    log::info!("Output: {}", args.output_dir.display());

    // 1. Load data
    let graph = data::load_edge_list(&args.input)?;

    // 2. Optional heuristics over the full graph
    let (influential_users, broadcast_seeds) = if args.skip_heuristics {
        (None, None)
    } else {
        let influential = analysis::influential_users(&graph, config.influence_ratio);
        log::info!("Found {} influential users", influential.len());
        let seeds = analysis::broadcast_seeds(&graph, config.share_ratio);
        (Some(influential), Some(seeds))
    };

    // 3. Detect communities on a copy; the original is kept for reporting
    let detector = CommunityDetector::new(graph.clone(), config.min_vertices)?;
    log::info!(
        "Found {} communities with minimum size {}",
        detector.len(),
        config.min_vertices
    );

    // 4. Save results
    let report = AnalysisReport {
        communities: detector.summaries(),
        min_vertices: config.min_vertices,
        betweenness_passes: detector.betweenness_passes(),
        influential_users,
        broadcast_seeds,
    };
    storage::save_results(&report, &graph, &args.output_dir)?;

    log::info!(
        "Analysis complete. Results saved to {}",
        args.output_dir.display()
    );

    Ok(())
}
