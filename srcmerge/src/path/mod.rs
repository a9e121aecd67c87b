//! Path handling for file identity.
//!
//! This module provides everything the merge needs to decide whether two
//! include targets name the same file.
//!
//! # Key Concepts
//!
//! ## Normalization
//!
//! Normalization converts paths to a clean absolute form by:
//! - Joining relative paths onto the resolver's base directory
//! - Resolving `.` and `..` components and redundant separators
//!
//! A [`NormalizedPath`] additionally guarantees the file existed when it was
//! built. It is the only key the visit history accepts.
//!
//! ## Identity
//!
//! [`identity::same_file`] compares resolved file identity (device and inode
//! on Unix), so differently spelled paths and symlinks compare equal.
//! [`NormalizedPath`] equality and hashing use the same identity.
//!
//! # Examples
//!
//! ```no_run
//! use srcmerge::path::PathResolver;
//! use std::path::Path;
//!
//! let (resolver, root) = PathResolver::for_root(Path::new("src/lib.h")).unwrap();
//! let header = resolver.normalize(Path::new("util/../lib.h")).unwrap();
//! assert_eq!(header, root);
//! ```

pub mod identity;
pub mod normalize;
pub mod resolver;
mod types;

// Re-export key types
pub use resolver::PathResolver;
pub use types::NormalizedPath;
