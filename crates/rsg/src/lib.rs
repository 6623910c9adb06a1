//! RSG - command-protocol generator
//!
//! Reads a `.spec` api description and emits one of four artifacts: the
//! command-record header, the client declaration header, the client
//! marshaling source, or the core playback source.
//!
//! # Example
//!
//! ```ignore
//! use rsg::{Artifact, EmitConfig, generate_source};
//!
//! let spec = "ContextFinish {\n\tsync\n}\n";
//! let code = generate_source(spec, Artifact::ApiSource, &EmitConfig::default())?;
//! ```

// Re-export from sub-crates
pub use rsg_api::{ApiEntry, ApiTable, BaseType, CommandId, SpecError, VarType, parse_spec};
pub use rsg_emit::{
    ApiEmitter, Artifact, ArtifactError, EmitConfig, InlinePlan, NotInlineReason,
    RecordLayout, record_layouts, render_artifact,
};

use std::io::Read;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Generator errors.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Spec error: {0}")]
    Spec(#[from] SpecError),
    #[error("{0}")]
    Artifact(#[from] ArtifactError),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

/// Where the api spec text comes from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SpecSource {
    /// Standard input (the build pipes the spec in).
    Stdin,
    File(PathBuf),
}

impl SpecSource {
    /// Read the whole spec text.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`] if the source cannot be read.
    pub fn read(&self) -> Result<String> {
        match self {
            Self::Stdin => {
                let mut text = String::new();
                std::io::stdin().read_to_string(&mut text)?;
                Ok(text)
            }
            Self::File(path) => Ok(std::fs::read_to_string(path)?),
        }
    }
}

/// Options for one generator run.
#[derive(Clone, Debug)]
pub struct GenerateOptions {
    pub spec: SpecSource,
    pub config: EmitConfig,
}

impl GenerateOptions {
    #[must_use]
    pub fn new() -> Self {
        Self {
            spec: SpecSource::Stdin,
            config: EmitConfig::default(),
        }
    }

    #[must_use]
    pub fn with_spec_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.spec = SpecSource::File(path.into());
        self
    }

    #[must_use]
    pub fn with_config(mut self, config: EmitConfig) -> Self {
        self.config = config;
        self
    }
}

impl Default for GenerateOptions {
    fn default() -> Self {
        Self::new()
    }
}

/// Decode the artifact named by the leading byte of `selector_path`.
///
/// # Errors
///
/// Returns [`Error::Io`] when the file cannot be read and
/// [`Error::Artifact`] when its first byte is not a known selector.
pub fn read_selector(selector_path: &Path) -> Result<Artifact> {
    let contents = std::fs::read(selector_path)?;
    Ok(Artifact::from_selector_file(&contents)?)
}

/// Parse spec text and render one artifact.
///
/// # Errors
///
/// Returns [`Error::Spec`] when the spec text is malformed.
pub fn generate_source(spec: &str, artifact: Artifact, config: &EmitConfig) -> Result<String> {
    let table = parse_spec(spec)?;
    Ok(render_artifact(&table, artifact, config))
}

/// Run the generator: decode the selector, parse the spec, and write the
/// artifact to `output_path`.
///
/// The output file is only created once everything rendered, so a bad
/// selector or spec leaves it untouched.
///
/// # Errors
///
/// Returns the first selector, spec or I/O error encountered.
pub fn generate(
    selector_path: &Path,
    output_path: &Path,
    options: &GenerateOptions,
) -> Result<Artifact> {
    let artifact = read_selector(selector_path)?;
    tracing::debug!(%artifact, selector = %artifact.selector(), "selected artifact");

    let spec = options.spec.read()?;
    let code = generate_source(&spec, artifact, &options.config)?;

    std::fs::write(output_path, code)?;
    tracing::debug!(%artifact, output = %output_path.display(), "generated");
    Ok(artifact)
}
