//! Talent-fit library: deterministic job-candidate fit scoring

pub mod cli;
pub mod config;
pub mod error;
pub mod extraction;
pub mod input;
pub mod output;
pub mod scoring;

pub use config::Config;
pub use error::{Result, TalentFitError};
