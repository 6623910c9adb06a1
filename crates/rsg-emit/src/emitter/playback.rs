//! Core-side playback functions and the dispatch table.

use rsg_api::ApiEntry;

use super::ApiEmitter;

/// Continuation indent for playback call arguments.
const ARG_INDENT: &str = "           ";

impl ApiEmitter<'_> {
    /// Emit the core playback source.
    pub fn emit_playback_source(&mut self) {
        let config = self.config;
        let table = self.table;

        self.emit_includes(&config.source_includes);
        self.write("\n");
        self.open_namespaces();
        self.emit_includes(std::slice::from_ref(&config.handcode_include));
        self.write("\n");

        for (_, api) in table.buffered() {
            self.emit_playback_fn(api);
        }
        self.emit_dispatch_table();
        self.close_namespaces();
    }

    /// Emit one playback function: reinterpret the record, call the
    /// implementation, publish the result if there is one.
    pub fn emit_playback_fn(&mut self, api: &ApiEntry) {
        let config = self.config;
        let record = config.record_name(&api.name);
        tracing::debug!(api = %api.name, "emitting playback");

        self.write(&format!(
            "void {}{}(Context *con, const void *vp, size_t cmdSizeBytes)\n{{\n",
            config.playback_prefix, api.name
        ));
        self.writeln(
            1,
            &format!("const {record} *cmd = static_cast<const {record} *>(vp);"),
        );

        let mut args: Vec<String> = Vec::with_capacity(api.params.len() + 1);
        if !api.no_context {
            args.push("con".to_string());
        }
        args.extend(api.params.iter().map(|p| format!("cmd->{}", p.name)));

        let store = if api.returns_value() {
            "con->mIO.mToCoreRet = (intptr_t)"
        } else {
            ""
        };
        let call = format!(
            "{store}{}{}({});",
            config.impl_prefix,
            api.name,
            args.join(&format!(",\n{ARG_INDENT}"))
        );
        self.writeln(1, &call);
        self.write("}\n\n");
    }

    /// Emit the dispatch table: slot 0 and every direct call map to `NULL`.
    pub fn emit_dispatch_table(&mut self) {
        let config = self.config;
        let table = self.table;

        self.write(&format!(
            "RsPlaybackFunc {}[{}] = {{\n",
            config.dispatch_table,
            table.dispatch_len()
        ));
        self.writeln(1, "NULL,");
        for (_, api) in table.iter() {
            if api.direct {
                self.writeln(1, "NULL,");
            } else {
                self.writeln(1, &format!("{}{},", config.playback_prefix, api.name));
            }
        }
        self.write("};\n");
    }
}
