//! Shared test utilities for the bedrock-addons workspace.
//!
//! Dev-dependency only, never published.
//!
//! # Modules
//!
//! - [`world`]: [`TestWorld`](world::TestWorld) builder for world folders,
//!   pack manifests, ledgers and addon archives

pub mod world;

pub use world::TestWorld;
