//! Configuration file sources.

pub mod workspace_file;
