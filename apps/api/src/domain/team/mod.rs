// Team domain module
// Contains the team record, match value objects, and the rules service

#![allow(clippy::module_inception)]

pub mod service;
pub mod team;
pub mod value_objects;

// Re-export main types for convenience
pub use service::TeamService;
pub use team::{Team, TeamFilter, TeamId, TeamPatch};
pub use value_objects::{MatchFilter, MatchResult};
