//! Content file-set resolution.
//!
//! Expands the `content` glob patterns of a configuration into the
//! deduplicated set of source files the downstream generator scans for
//! utility-class usage.

mod pattern;
mod resolver;

pub use pattern::ContentPattern;
pub use resolver::GlobResolver;
