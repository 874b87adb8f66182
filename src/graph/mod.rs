//! Graph representation and betweenness engine

pub mod adjacency;
pub mod betweenness;
pub mod builder;
pub mod dag;
pub mod edge;
pub mod vertex;

pub use adjacency::Graph;
pub use betweenness::MaxBetweenness;
pub use builder::GraphBuilder;
pub use dag::{BfsDag, DagCredit};
pub use edge::Edge;
pub use vertex::{Vertex, VertexId};
