// Repository contracts implemented by the infrastructure layer

pub mod team_repository;

pub use team_repository::TeamRepository;
