//! rhc: layered configuration for the remote host configuration client
//!
//! Resolves one immutable configuration from embedded defaults, the main
//! configuration file, and an ordered set of drop-in files.

pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
