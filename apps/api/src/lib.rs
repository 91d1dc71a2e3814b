//! MyTeam API Library
//!
//! Team registry service: domain rules, the in-memory team store, and the
//! HTTP adapter exposing them.

pub mod api;
pub mod config;
pub mod domain;
pub mod infrastructure;
