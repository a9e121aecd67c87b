#![deny(missing_docs, unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

//! # srcmerge
//!
//! A library for merging a C/C++ header and its transitive local includes
//! into a single self-contained source file.
//!
//! Starting from a root header, every `#include "..."` directive is replaced
//! by the contents of the named file, recursively, with each physical file
//! emitted at most once. The implementation files paired with every reached
//! header are then appended, yielding one translation unit that can be
//! dropped into another project.
//!
//! ## Core Types
//!
//! - [`Merger`] and [`MergeOutput`]: The two-pass merge and its result
//! - [`Amalgamator`] and [`VisitHistory`]: Recursive include replacement
//! - [`PathResolver`] and [`NormalizedPath`]: Path identity and pairing
//! - [`Config`] and [`ConfigBuilder`]: Layered configuration
//! - [`Error`] and [`Result`]: Error handling types
//! - [`Logger`] and [`LogLevel`]: Logging infrastructure
//!
//! ## Examples
//!
//! ```
//! use srcmerge::include::parse_include;
//!
//! assert_eq!(parse_include("#include \"eb_chan.h\""), Some("eb_chan.h"));
//! assert_eq!(parse_include("#include <stdio.h>"), None);
//! ```

pub mod amalgamate;
pub mod config;
pub mod error;
pub mod history;
pub mod include;
pub mod logging;
pub mod merge;
pub mod output;
pub mod path;

// Re-export key types at crate root for convenience
pub use amalgamate::{Amalgamation, Amalgamator};
pub use config::{Config, ConfigBuilder};
pub use error::{Error, Result};
pub use history::VisitHistory;
pub use include::{parse_include, OnceGuard};
pub use logging::{init_logger, LogLevel, Logger};
pub use merge::{MergeOutput, Merger};
pub use path::{NormalizedPath, PathResolver};
