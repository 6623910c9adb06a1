//! Forward declarations shared by the generated translation units.

use super::ApiEmitter;
use crate::signature::{ContextArg, fn_decl};

impl ApiEmitter<'_> {
    /// Declare every call's signature with the given prefix.
    pub fn emit_func_decls(&mut self, prefix: &str, ctx: ContextArg) {
        let table = self.table;
        for (_, api) in table.iter() {
            self.write(&format!("{};\n", fn_decl(api, prefix, ctx)));
        }
        self.write("\n\n");
    }

    /// Declare the playback function of every buffered call.
    pub fn emit_playback_decls(&mut self) {
        let table = self.table;
        let prefix = &self.config.playback_prefix;
        let decls: String = table
            .buffered()
            .map(|(_, api)| format!("void {prefix}{} (Context *, const void *, size_t);\n", api.name))
            .collect();
        self.write(&decls);
    }

    /// Declare the playback function type and the dispatch table.
    pub fn emit_dispatch_decl(&mut self) {
        let config = self.config;
        self.write(
            "\n\ntypedef void (*RsPlaybackFunc)(Context *, const void *, size_t sizeBytes);\n",
        );
        self.write(&format!(
            "extern RsPlaybackFunc {}[{}];\n",
            config.dispatch_table,
            self.table.dispatch_len()
        ));
    }

    /// Emit the client declaration header.
    pub fn emit_func_decl_header(&mut self) {
        let config = self.config;
        self.emit_func_decls(&config.client_prefix, ContextArg::Client);
    }
}
