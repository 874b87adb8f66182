//! Lightweight analyses over the same social graph
//!
//! Both are single-pass heuristics, independent of community detection.

pub mod broadcast;
pub mod influence;

pub use broadcast::broadcast_seeds;
pub use influence::influential_users;
