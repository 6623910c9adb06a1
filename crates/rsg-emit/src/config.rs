//! Emit configuration.

/// Payloads strictly below this many bytes are copied into the command buffer.
pub const DEFAULT_INLINE_THRESHOLD: u32 = 1024;

/// License block written ahead of every generated artifact.
pub const DEFAULT_LICENSE_HEADER: &str = r#"/*
 * Licensed under the Apache License, Version 2.0 (the "License");
 * you may not use this file except in compliance with the License.
 * You may obtain a copy of the License at
 *
 *      http://www.apache.org/licenses/LICENSE-2.0
 *
 * Unless required by applicable law or agreed to in writing, software
 * distributed under the License is distributed on an "AS IS" BASIS,
 * WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
 * See the License for the specific language governing permissions and
 * limitations under the License.
 *
 * This file is generated by rsg. Do not edit.
 */

"#;

/// Code generation configuration.
///
/// `Default` reproduces the names the runtime's hand-written side expects
/// (`rs`/`rsi_`/`rsp_` prefixes, `RS_CMD_` records, a 1024-byte inline limit).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EmitConfig {
    /// Inline payload limit in bytes. The copy path is taken when the summed
    /// payload is strictly below it.
    pub inline_threshold: u32,
    /// Prefix of client-side marshaling functions (`rsContextFinish`).
    pub client_prefix: String,
    /// Prefix of core-side implementations (`rsi_ContextFinish`).
    pub impl_prefix: String,
    /// Prefix of playback functions (`rsp_ContextFinish`).
    pub playback_prefix: String,
    /// Prefix of hand-written marshaling trampolines (`rsHCAPI_ContextFinish`).
    pub handcode_prefix: String,
    /// Prefix of command record types and ids (`RS_CMD_`, `RS_CMD_ID_`).
    pub record_prefix: String,
    /// Name of the dispatch table array.
    pub dispatch_table: String,
    /// Enclosing C++ namespaces, outermost first.
    pub namespaces: Vec<String>,
    /// Runtime headers included by both generated sources.
    pub source_includes: Vec<String>,
    /// Header with hand-written trampolines, included after the namespaces open.
    pub handcode_include: String,
    /// Comment block emitted before everything else.
    pub license_header: String,
}

impl Default for EmitConfig {
    fn default() -> Self {
        Self {
            inline_threshold: DEFAULT_INLINE_THRESHOLD,
            client_prefix: "rs".to_string(),
            impl_prefix: "rsi_".to_string(),
            playback_prefix: "rsp_".to_string(),
            handcode_prefix: "rsHCAPI_".to_string(),
            record_prefix: "RS_CMD_".to_string(),
            dispatch_table: "gPlaybackFuncs".to_string(),
            namespaces: vec!["android".to_string(), "renderscript".to_string()],
            source_includes: vec![
                "rsDevice.h".to_string(),
                "rsContext.h".to_string(),
                "rsThreadIO.h".to_string(),
                "rsgApiFuncDecl.h".to_string(),
            ],
            handcode_include: "rsHandcode.h".to_string(),
            license_header: DEFAULT_LICENSE_HEADER.to_string(),
        }
    }
}

impl EmitConfig {
    #[must_use]
    pub const fn with_inline_threshold(mut self, bytes: u32) -> Self {
        self.inline_threshold = bytes;
        self
    }

    #[must_use]
    pub fn with_license_header(mut self, header: impl Into<String>) -> Self {
        self.license_header = header.into();
        self
    }

    #[must_use]
    pub fn with_namespaces<I, S>(mut self, namespaces: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.namespaces = namespaces.into_iter().map(Into::into).collect();
        self
    }

    /// `RS_CMD_<name>`
    #[must_use]
    pub fn record_name(&self, api: &str) -> String {
        format!("{}{api}", self.record_prefix)
    }

    /// `RS_CMD_ID_<name>`
    #[must_use]
    pub fn command_id_name(&self, api: &str) -> String {
        format!("{}ID_{api}", self.record_prefix)
    }
}
