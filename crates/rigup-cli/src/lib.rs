//! rigup CLI library surface, split out so integration tests can reach the
//! command implementations directly.

pub mod cli;
pub mod commands;
pub mod error;
pub mod logger;
