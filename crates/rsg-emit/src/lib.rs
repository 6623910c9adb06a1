//! Code emission for the rsg command protocol.
//!
//! Turns an [`ApiTable`](rsg_api::ApiTable) into the four generated
//! artifacts: the command-record header, the client declaration header, the
//! client marshaling source and the core playback source.

mod artifact;
mod config;
mod emitter;
mod inline;
mod signature;

pub use artifact::*;
pub use config::*;
pub use emitter::*;
pub use inline::*;
pub use signature::*;

use thiserror::Error;

/// Artifact selection errors.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ArtifactError {
    #[error("Unknown command: '{0}'")]
    UnknownSelector(char),
    #[error("Empty artifact selector")]
    EmptySelector,
}

pub type Result<T> = std::result::Result<T, ArtifactError>;
