//! Configuration management for the community analyzer

use crate::error::{GraphError, Result};

/// Default configuration for the community analyzer
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Minimum number of users in a community
    pub min_vertices: usize,

    /// Fraction of the network a user must be friends with to count as influential
    pub influence_ratio: f64,

    /// Fraction of a user's friends that must have posted before the user re-shares
    pub share_ratio: f64,

    /// Number of worker threads (0 = use all available cores)
    pub threads: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            min_vertices: 3,
            influence_ratio: 0.05,
            share_ratio: 0.10,
            threads: 0,
        }
    }
}

impl Config {
    /// Create a new configuration with custom values
    pub fn new(min_vertices: usize, influence_ratio: f64, share_ratio: f64, threads: usize) -> Self {
        Self {
            min_vertices,
            influence_ratio,
            share_ratio,
            threads,
        }
    }

    /// Check that the community size threshold is usable
    pub fn validate(&self) -> Result<()> {
        if self.min_vertices == 0 {
            return Err(GraphError::InvalidMinVertices(self.min_vertices));
        }
        Ok(())
    }

    /// Worker threads to run with, resolving 0 to the core count
    pub fn worker_threads(&self) -> usize {
        if self.threads > 0 {
            self.threads
        } else {
            num_cpus::get()
        }
    }
}
