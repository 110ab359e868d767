//! Weft: Theme Configuration Resolution and Content Scanning
//!
//! Resolves a user-authored theme configuration against built-in defaults
//! and enumerates the source files to scan for utility-class usage. The
//! output of a pass is a single immutable [`resolver::ResolvedConfig`],
//! handed to the downstream utility-class generator.

pub mod config;
pub mod content;
pub mod error;
pub mod logging;
pub mod merge;
pub mod plugin;
pub mod resolver;
pub mod theme;
pub mod token;
