//! Command record layouts and the structures header.

use rsg_api::{ApiTable, CommandId, VarType};

use super::ApiEmitter;
use crate::config::EmitConfig;
use crate::signature::{ContextArg, c_type_and_name};

/// In-buffer representation of one buffered call.
///
/// Fields are exactly the call's parameters in declared order; there is no
/// header, the command id travels beside the record in the buffer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RecordLayout<'a> {
    /// Record type name, `RS_CMD_<name>`.
    pub name: String,
    pub id: CommandId,
    pub fields: &'a [VarType],
}

/// Record layouts for every call that goes through the command buffer.
#[must_use]
pub fn record_layouts<'a>(table: &'a ApiTable, config: &EmitConfig) -> Vec<RecordLayout<'a>> {
    table
        .buffered()
        .map(|(id, api)| RecordLayout {
            name: config.record_name(&api.name),
            id,
            fields: &api.params,
        })
        .collect()
}

impl ApiEmitter<'_> {
    /// Emit record typedefs, command ids and record structs.
    pub fn emit_structures(&mut self) {
        let config = self.config;
        let table = self.table;
        let layouts = record_layouts(table, config);

        for layout in &layouts {
            self.write(&format!("typedef struct {0}_rec {0};\n", layout.name));
        }
        self.write("\n");

        let mut layouts = layouts.iter().peekable();
        for (id, api) in table.iter() {
            self.write(&format!("#define {} {id}\n", config.command_id_name(&api.name)));
            let Some(layout) = layouts.next_if(|l| l.id == id) else {
                self.write("\n");
                continue;
            };
            self.write(&format!("struct {}_rec {{\n", layout.name));
            for field in layout.fields {
                self.writeln(1, &format!("{};", c_type_and_name(field)));
            }
            self.write("};\n\n");
        }
    }

    /// Emit the whole structures header: records, core declarations, playback
    /// declarations and the dispatch table declaration.
    pub fn emit_structs_header(&mut self) {
        let config = self.config;
        self.write("\n");
        self.emit_includes(&["rsContext.h".to_string()]);
        self.write("\n");
        self.open_namespaces();
        self.emit_structures();

        self.emit_func_decls(&config.impl_prefix, ContextArg::Core);
        self.emit_playback_decls();
        self.emit_dispatch_decl();
        self.close_namespaces();
    }
}
