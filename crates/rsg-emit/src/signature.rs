//! C type and function signature rendering.
//!
//! Types render as `[const ]<base>[ *...]`, optionally followed by the
//! binding name: `const void * data`, `uint32_t count`, `RsAllocation`.

use rsg_api::{ApiEntry, BaseType, VarType};

/// Render a base type spelling.
#[must_use]
pub fn base_type_name(base: &BaseType) -> String {
    match base {
        BaseType::Void => "void".to_string(),
        BaseType::Int(bits) => format!("int{bits}_t"),
        BaseType::Uint(bits) => format!("uint{bits}_t"),
        BaseType::Float(32) => "float".to_string(),
        BaseType::Float(_) => "double".to_string(),
        BaseType::Named(name) => name.clone(),
    }
}

/// Render a type without its binding name.
#[must_use]
pub fn c_type(vt: &VarType) -> String {
    let mut s = String::new();
    if vt.is_const {
        s.push_str("const ");
    }
    s.push_str(&base_type_name(&vt.base));
    if vt.ptr_level > 0 {
        s.push(' ');
        for _ in 0..vt.ptr_level {
            s.push('*');
        }
    }
    s
}

/// Render a type followed by its binding name, if it has one.
#[must_use]
pub fn c_type_and_name(vt: &VarType) -> String {
    let mut s = c_type(vt);
    if !vt.name.is_empty() {
        s.push(' ');
        s.push_str(&vt.name);
    }
    s
}

/// Render a parameter list. With `after_context` every parameter, including
/// the first, is preceded by `", "`.
#[must_use]
pub fn arg_list(params: &[VarType], after_context: bool) -> String {
    let mut s = String::new();
    for (idx, param) in params.iter().enumerate() {
        if idx > 0 || after_context {
            s.push_str(", ");
        }
        s.push_str(&c_type_and_name(param));
    }
    s
}

/// How the implicit context argument is spelled in a declaration.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ContextArg {
    /// Client-facing handle: `RsContext rsc`.
    Client,
    /// Core-side object: `Context *`.
    Core,
}

impl ContextArg {
    #[must_use]
    pub const fn declaration(self) -> &'static str {
        match self {
            Self::Client => "RsContext rsc",
            Self::Core => "Context *",
        }
    }
}

/// Render a function prototype (no trailing `;`).
///
/// Example: `int32_t rsBar (RsContext rsc, int32_t x)`
#[must_use]
pub fn fn_decl(api: &ApiEntry, prefix: &str, ctx: ContextArg) -> String {
    let mut s = format!("{} {prefix}{} (", c_type_and_name(&api.ret), api.name);
    if !api.no_context {
        s.push_str(ctx.declaration());
    }
    s.push_str(&arg_list(&api.params, !api.no_context));
    s.push(')');
    s
}

/// Render a forwarding argument list: the context expression (unless the call
/// takes none) followed by each parameter name.
#[must_use]
pub fn forward_args(api: &ApiEntry, ctx: &str) -> String {
    let mut s = String::new();
    if !api.no_context {
        s.push_str(ctx);
    }
    for param in &api.params {
        if !s.is_empty() {
            s.push_str(", ");
        }
        s.push_str(&param.name);
    }
    s
}
