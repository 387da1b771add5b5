#![deny(missing_docs, unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

//! # wincanon
//!
//! A library for canonicalizing filesystem paths across the Windows
//! family of environments: native Windows, MinGW32, MinGW64, and Cygwin.
//!
//! Paths arrive in whatever convention the caller's tooling produced
//! (`C:\Users\x`, `/c/Users/x`, `/cygdrive/c/Users/x`, mixed separators,
//! `~` prefixes, stray `.` and `..` segments) and leave in exactly one
//! canonical form for a chosen target family. Canonicalization is
//! lexical: it needs no filesystem access, so paths that do not exist
//! yet canonicalize the same as paths that do.
//!
//! ## Core Types
//!
//! - [`canonicalize`] and [`CanonicalPath`]: the canonicalization entry point
//! - [`PathFamily`]: the supported path conventions
//! - [`EnvironmentContext`]: per-call settings (family, home, mounts)
//! - [`MountTable`] and [`DriveStyle`]: drive-root rendering rules
//! - [`Error`] and [`Result`]: error handling types
//! - [`Logger`] and [`LogLevel`]: logging infrastructure
//!
//! ## Examples
//!
//! ```
//! use wincanon::{canonicalize, EnvironmentContext, PathFamily};
//!
//! let ctx = EnvironmentContext::new(PathFamily::Cygwin).with_home("/home/u");
//!
//! let path = canonicalize(r"C:\Temp\..\Users\x", &ctx).unwrap();
//! assert_eq!(path.as_str(), "/cygdrive/c/Users/x");
//!
//! let path = canonicalize("~/projects", &ctx).unwrap();
//! assert_eq!(path.as_str(), "/home/u/projects");
//! ```

pub mod canon;
pub mod config;
pub mod context;
pub mod error;
pub mod family;
pub mod logging;
pub mod mount;

// Re-export key types at crate root for convenience
pub use canon::{canonicalize, CanonicalPath};
pub use config::{Config, ConfigBuilder};
pub use context::EnvironmentContext;
pub use error::{Error, Result};
pub use family::PathFamily;
pub use logging::{init_logger, LogLevel, Logger};
pub use mount::{DriveStyle, MountTable};
