//! Generated artifacts and their assembly.

use std::fmt;

use rsg_api::ApiTable;

use crate::config::EmitConfig;
use crate::emitter::ApiEmitter;
use crate::{ArtifactError, Result};

/// One generated file, chosen by a single selector character.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Artifact {
    /// `0`: command records, core declarations and dispatch table declaration.
    StructsHeader,
    /// `1`: client function declarations.
    FuncDeclHeader,
    /// `2`: client marshaling source.
    ApiSource,
    /// `3`: core playback source and dispatch table.
    PlaybackSource,
}

impl Artifact {
    pub const ALL: [Self; 4] = [
        Self::StructsHeader,
        Self::FuncDeclHeader,
        Self::ApiSource,
        Self::PlaybackSource,
    ];

    /// Decode a selector byte.
    ///
    /// # Errors
    ///
    /// Returns [`ArtifactError::UnknownSelector`] for anything outside `0`..=`3`.
    pub fn from_selector(byte: u8) -> Result<Self> {
        match byte {
            b'0' => Ok(Self::StructsHeader),
            b'1' => Ok(Self::FuncDeclHeader),
            b'2' => Ok(Self::ApiSource),
            b'3' => Ok(Self::PlaybackSource),
            other => Err(ArtifactError::UnknownSelector(char::from(other))),
        }
    }

    /// Decode the selector from the leading byte of a selector file.
    ///
    /// # Errors
    ///
    /// Returns [`ArtifactError::EmptySelector`] for empty input, otherwise as
    /// [`Artifact::from_selector`].
    pub fn from_selector_file(contents: &[u8]) -> Result<Self> {
        let &first = contents.first().ok_or(ArtifactError::EmptySelector)?;
        Self::from_selector(first)
    }

    #[must_use]
    pub const fn selector(self) -> char {
        match self {
            Self::StructsHeader => '0',
            Self::FuncDeclHeader => '1',
            Self::ApiSource => '2',
            Self::PlaybackSource => '3',
        }
    }

    /// Conventional output file name.
    #[must_use]
    pub const fn file_name(self) -> &'static str {
        match self {
            Self::StructsHeader => "rsgApiStructs.h",
            Self::FuncDeclHeader => "rsgApiFuncDecl.h",
            Self::ApiSource => "rsgApi.cpp",
            Self::PlaybackSource => "rsgApiReplay.cpp",
        }
    }
}

impl fmt::Display for Artifact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.file_name())
    }
}

/// Render one artifact, license header first.
#[must_use]
pub fn render_artifact(table: &ApiTable, artifact: Artifact, config: &EmitConfig) -> String {
    tracing::debug!(%artifact, apis = table.len(), "rendering artifact");

    let mut emitter = ApiEmitter::new(config, table);
    emitter.emit_license_header();
    match artifact {
        Artifact::StructsHeader => emitter.emit_structs_header(),
        Artifact::FuncDeclHeader => emitter.emit_func_decl_header(),
        Artifact::ApiSource => emitter.emit_api_source(),
        Artifact::PlaybackSource => emitter.emit_playback_source(),
    }
    emitter.take_output()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_selector_roundtrip() {
        for artifact in Artifact::ALL {
            let byte = u8::try_from(artifact.selector()).unwrap();
            assert_eq!(Artifact::from_selector(byte), Ok(artifact));
        }
    }

    #[test]
    fn test_unknown_selector() {
        let err = Artifact::from_selector(b'7').unwrap_err();
        assert_eq!(err, ArtifactError::UnknownSelector('7'));
        assert_eq!(err.to_string(), "Unknown command: '7'");
    }

    #[test]
    fn test_selector_file_uses_first_byte() {
        assert_eq!(
            Artifact::from_selector_file(b"2\n"),
            Ok(Artifact::ApiSource)
        );
        assert_eq!(
            Artifact::from_selector_file(b""),
            Err(ArtifactError::EmptySelector)
        );
        assert_eq!(
            Artifact::from_selector_file(b"x0"),
            Err(ArtifactError::UnknownSelector('x'))
        );
    }

    #[test]
    fn test_every_artifact_starts_with_license() {
        let table = ApiTable::default();
        let config = EmitConfig::default().with_license_header("/* L */\n");
        for artifact in Artifact::ALL {
            let out = render_artifact(&table, artifact, &config);
            assert!(out.starts_with("/* L */\n"), "{artifact}");
            assert_eq!(out.matches("/* L */").count(), 1, "{artifact}");
        }
    }
}
