//! CLI command implementations.
//!
//! This module contains the implementations of all CLI commands:
//! - `resolve`: Canonicalize one or more paths
//! - `families`: List supported path families and their drive styles
//! - `completions`: Generate shell completion scripts

pub mod completions;
pub mod families;
pub mod resolve;

pub use completions::CompletionsCommand;
pub use families::FamiliesCommand;
pub use resolve::ResolveCommand;
