//! Core library functions for the Girvan-Newman community analyzer

pub mod analysis;
pub mod community;
pub mod config;
pub mod data;
pub mod error;
pub mod graph;
pub mod storage;

pub use anyhow::{Result, anyhow};
pub use community::{Community, CommunityDetector};
pub use error::GraphError;
pub use graph::{Edge, Graph, VertexId};
