//! C++ emitter for the command protocol.
//!
//! Generates, from one api table:
//! - command records and ids (`RS_CMD_<name>`, `RS_CMD_ID_<name>`)
//! - client and core declarations
//! - client marshaling functions that fill and commit records
//! - core playback functions and the dispatch table

use rsg_api::ApiTable;

use crate::config::EmitConfig;

/// C++ emitter over one api table.
pub struct ApiEmitter<'a> {
    pub config: &'a EmitConfig,
    pub table: &'a ApiTable,
    /// Output buffer.
    out: String,
}

impl<'a> ApiEmitter<'a> {
    /// Create a new emitter.
    #[must_use]
    pub fn new(config: &'a EmitConfig, table: &'a ApiTable) -> Self {
        Self {
            config,
            table,
            out: String::with_capacity(4096),
        }
    }

    /// Get output string.
    #[must_use]
    pub fn output(&self) -> &str {
        &self.out
    }

    /// Take output string, consuming the emitter.
    #[must_use]
    pub fn take_output(self) -> String {
        self.out
    }

    /// Write the configured license block.
    pub fn emit_license_header(&mut self) {
        let header = &self.config.license_header;
        self.out.push_str(header);
    }

    /// Write `#include "<file>"` for each header.
    pub(super) fn emit_includes(&mut self, files: &[String]) {
        for file in files {
            self.write(&format!("#include \"{file}\"\n"));
        }
    }

    pub(super) fn open_namespaces(&mut self) {
        for ns in &self.config.namespaces {
            self.out.push_str(&format!("namespace {ns} {{\n"));
        }
    }

    pub(super) fn close_namespaces(&mut self) {
        for _ in &self.config.namespaces {
            self.out.push_str("}\n");
        }
    }

    /// Write indented line.
    pub(super) fn writeln(&mut self, indent: usize, s: &str) {
        for _ in 0..indent {
            self.out.push_str("    ");
        }
        self.out.push_str(s);
        self.out.push('\n');
    }

    /// Write without indent.
    pub(super) fn write(&mut self, s: &str) {
        self.out.push_str(s);
    }
}

mod decls;
mod marshal;
mod playback;
mod records;

pub use records::*;
