//! Shared pieces for the README Design Kit site binaries.

pub mod config;
