//! Client-side marshaling functions.
//!
//! Each buffered call becomes a function with the public signature that
//! reserves its record in the to-core buffer, fills it, and commits it:
//! - inline-eligible calls copy pointer payloads behind the record when the
//!   summed `<name>_length` stays below the inline threshold, and commit
//!   asynchronously; otherwise they pass caller pointers and commit
//!   synchronously
//! - other calls commit synchronously when any argument is a pointer or when
//!   a result is expected; the `sync` flag alone does not block
//! - calls with a result read it back from the shared return slot

use rsg_api::{ApiEntry, CommandId};

use super::ApiEmitter;
use crate::inline::InlinePlan;
use crate::signature::{ContextArg, c_type, fn_decl, forward_args};

impl ApiEmitter<'_> {
    /// Emit the client marshaling source.
    pub fn emit_api_source(&mut self) {
        let config = self.config;
        let table = self.table;

        self.emit_includes(&config.source_includes);
        self.write("\n");
        let mut using = String::new();
        for depth in 1..=config.namespaces.len() {
            using.push_str(&format!(
                "using namespace {};\n",
                config.namespaces[..depth].join("::")
            ));
        }
        self.write(&using);
        self.emit_includes(std::slice::from_ref(&config.handcode_include));
        self.write("\n");

        for (id, api) in table.buffered() {
            self.emit_marshal_fn(id, api);
        }
    }

    /// Emit one client function.
    pub fn emit_marshal_fn(&mut self, id: CommandId, api: &ApiEntry) {
        let config = self.config;
        tracing::debug!(api = %api.name, id, "emitting marshaling");

        self.write(&fn_decl(api, &config.client_prefix, ContextArg::Client));
        self.write("\n{\n");
        if api.handcode_api {
            self.emit_handcode_forward(api);
        } else {
            self.emit_marshal_body(api);
        }
        self.write("}\n\n");
    }

    fn emit_handcode_forward(&mut self, api: &ApiEntry) {
        let config = self.config;
        let ret = if api.returns_value() { "return " } else { "" };
        self.writeln(
            1,
            &format!(
                "{ret}{}{}({});",
                config.handcode_prefix,
                api.name,
                forward_args(api, "rsc")
            ),
        );
    }

    fn emit_marshal_body(&mut self, api: &ApiEntry) {
        let config = self.config;
        let record = config.record_name(&api.name);
        let id_name = config.command_id_name(&api.name);
        let threshold = config.inline_threshold;
        let plan = InlinePlan::for_api(api);
        let inline = plan.is_inline();

        self.writeln(1, "ThreadIO *io = &((Context *)rsc)->mIO;");
        self.writeln(1, &format!("uint32_t size = sizeof({record});"));
        if inline {
            self.writeln(1, "uint32_t dataSize = 0;");
            for term in plan.length_terms() {
                self.writeln(1, &format!("dataSize += {term};"));
            }
        }

        // Inline payload bytes live right after the record, inside the reservation.
        let reserve = if inline {
            format!("dataSize < {threshold} ? size + dataSize : size")
        } else {
            format!("sizeof({record})")
        };
        self.writeln(
            1,
            &format!("{record} *cmd = static_cast<{record} *>(io->mToCore.reserve({reserve}));"),
        );
        if inline {
            self.writeln(1, "uint8_t *payload = (uint8_t *)&cmd[1];");
        }

        for param in &api.params {
            let name = &param.name;
            if inline && param.is_pointer() {
                let len = param.length_name();
                self.writeln(1, &format!("if (dataSize < {threshold}) {{"));
                self.writeln(2, &format!("memcpy(payload, {name}, {len});"));
                self.writeln(2, &format!("cmd->{name} = ({})payload;", c_type(param)));
                self.writeln(2, &format!("payload += {len};"));
                self.writeln(1, "} else {");
                self.writeln(2, &format!("cmd->{name} = {name};"));
                self.writeln(1, "}");
            } else {
                self.writeln(1, &format!("cmd->{name} = {name};"));
            }
        }

        if inline {
            self.writeln(1, &format!("if (dataSize < {threshold}) {{"));
            self.writeln(2, &format!("io->mToCore.commit({id_name}, size + dataSize);"));
            self.writeln(1, "} else {");
            self.writeln(2, &format!("io->mToCore.commitSync({id_name}, size);"));
            self.writeln(1, "}");
        } else {
            let commit = if api.has_pointer_params() || api.returns_value() {
                "commitSync"
            } else {
                "commit"
            };
            self.writeln(1, &format!("io->mToCore.{commit}({id_name}, size);"));
        }

        if api.returns_value() {
            self.writeln(
                1,
                &format!(
                    "return reinterpret_cast<{}>(io->mToCoreRet);",
                    c_type(&api.ret)
                ),
            );
        }
    }
}
