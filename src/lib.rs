//! Records a nearcore dependency bump in a CHANGES.md style changelog and
//! turns the Unreleased section into a dated release section.
pub mod changelog;
pub mod cli;
pub mod config;
pub mod error;
pub mod orchestrator;
pub mod source;
pub mod version;

pub use cli::Args;
pub use config::Config;
pub use error::{ChangelogError, Result};
pub use orchestrator::{Outcome, render, run};

#[cfg(test)]
pub mod test_helpers;
