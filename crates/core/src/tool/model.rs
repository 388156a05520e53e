//! Tool request and artifact definitions

use std::path::{Path, PathBuf};

use super::filename::generate_filename;
use crate::{Error, Result};

/// A request to generate a single-file HTML tool
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolRequest {
    /// Free-text description passed to the agent
    pub description: String,
    /// Explicit output path, overrides the generated filename
    pub output: Option<PathBuf>,
    /// Open the written file in a browser
    pub preview: bool,
    /// Print the raw agent output before extraction
    pub verbose: bool,
}

impl ToolRequest {
    /// Build a request from the description words given on the command line.
    ///
    /// Words are joined with single spaces. A description with no visible
    /// characters is rejected.
    pub fn from_words<I, S>(words: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let description = words
            .into_iter()
            .map(|w| w.as_ref().to_string())
            .collect::<Vec<_>>()
            .join(" ");

        if description.trim().is_empty() {
            return Err(Error::InvalidInput(
                "Tool description must not be empty".to_string(),
            ));
        }

        Ok(Self {
            description,
            output: None,
            preview: false,
            verbose: false,
        })
    }

    pub fn with_output(mut self, output: Option<PathBuf>) -> Self {
        self.output = output;
        self
    }

    pub fn with_preview(mut self, preview: bool) -> Self {
        self.preview = preview;
        self
    }

    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    /// Path the document will be written to, as given or generated
    pub fn output_path(&self) -> PathBuf {
        match &self.output {
            Some(path) => path.clone(),
            None => PathBuf::from(generate_filename(&self.description)),
        }
    }
}

/// A document that has been written to disk
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputArtifact {
    /// Absolute path of the written file
    pub path: PathBuf,
    /// Size of the written document in bytes
    pub size: usize,
}

impl OutputArtifact {
    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_words_joins_with_single_spaces() {
        let request = ToolRequest::from_words(["JSON", "to", "YAML", "converter"]).unwrap();
        assert_eq!(request.description, "JSON to YAML converter");
        assert!(request.output.is_none());
        assert!(!request.preview);
        assert!(!request.verbose);
    }

    #[test]
    fn test_from_words_rejects_blank_description() {
        assert!(matches!(
            ToolRequest::from_words(["", " "]),
            Err(Error::InvalidInput(_))
        ));
        assert!(ToolRequest::from_words(Vec::<String>::new()).is_err());
    }

    #[test]
    fn test_output_path_prefers_explicit_output() {
        let request = ToolRequest::from_words(["color", "picker"])
            .unwrap()
            .with_output(Some(PathBuf::from("picker.html")));
        assert_eq!(request.output_path(), PathBuf::from("picker.html"));
    }

    #[test]
    fn test_output_path_falls_back_to_generated_name() {
        let request = ToolRequest::from_words(["JSON", "to", "YAML", "converter!"]).unwrap();
        assert_eq!(
            request.output_path(),
            PathBuf::from("json-to-yaml-converter.html")
        );
    }
}
