//! Tool generation requests and their written artifacts

pub mod file_store;
pub mod filename;
pub mod model;

pub use file_store::write_document;
pub use filename::generate_filename;
pub use model::{OutputArtifact, ToolRequest};
