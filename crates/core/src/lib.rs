//! Core library for the HTML tool generator
//!
//! This crate contains the parts of a run that do not talk to the agent:
//! - The tool request and output artifact model
//! - Default filename generation
//! - Writing the extracted document to disk

pub mod error;
pub mod tool;

pub use error::Error;
pub type Result<T> = std::result::Result<T, Error>;
