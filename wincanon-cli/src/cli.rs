//! CLI structure and command definitions.
//!
//! This module defines the main CLI structure using clap's derive macros,
//! including global options and subcommands.

use crate::commands::{CompletionsCommand, FamiliesCommand, ResolveCommand};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Command-line tool for canonicalizing Windows-family paths.
#[derive(Parser)]
#[command(name = "wincanon")]
#[command(version, about = "Canonicalize Windows-family paths", long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(long, global = true)]
    pub verbose: bool,

    /// Suppress non-essential output
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Target path family (windows, mingw32, mingw64, cygwin)
    #[arg(long, value_name = "FAMILY", global = true)]
    pub family: Option<String>,

    /// Home directory used for tilde expansion
    #[arg(long, value_name = "PATH", global = true)]
    pub home: Option<String>,

    /// Reject ambiguous backslash escapes instead of passing them through
    #[arg(long, global = true)]
    pub strict_escapes: bool,

    /// Refine results through the filesystem when paths exist
    #[arg(long, global = true)]
    pub resolve_symlinks: bool,

    /// Use an explicit configuration file
    #[arg(long, value_name = "PATH", global = true, env = "WINCANON_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

/// Available CLI commands.
#[derive(Subcommand)]
pub enum Command {
    /// Canonicalize one or more paths
    Resolve(ResolveCommand),

    /// List supported path families and their drive styles
    Families(FamiliesCommand),

    /// Generate shell completion scripts
    Completions(CompletionsCommand),
}
