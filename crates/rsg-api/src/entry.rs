//! Call descriptors.

use crate::VarType;

/// One remote-callable operation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiEntry {
    /// Unique across the table.
    pub name: String,
    /// `void` means no return value.
    pub ret: VarType,
    /// Parameters in declared order, each with a binding name.
    pub params: Vec<VarType>,
    /// Call takes no implicit context handle.
    pub no_context: bool,
    /// Call bypasses the command buffer entirely.
    pub direct: bool,
    /// Call always blocks until the core completes it.
    pub sync: bool,
    /// Marshaling is hand-written; only a forwarding trampoline is generated.
    pub handcode_api: bool,
}

impl ApiEntry {
    /// Void call with no parameters and no flags set.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ret: VarType::void(),
            params: Vec::new(),
            no_context: false,
            direct: false,
            sync: false,
            handcode_api: false,
        }
    }

    #[must_use]
    pub fn param(mut self, param: VarType) -> Self {
        self.params.push(param);
        self
    }

    #[must_use]
    pub fn returns(mut self, ret: VarType) -> Self {
        self.ret = ret;
        self
    }

    #[must_use]
    pub const fn no_context(mut self) -> Self {
        self.no_context = true;
        self
    }

    #[must_use]
    pub const fn direct(mut self) -> Self {
        self.direct = true;
        self
    }

    #[must_use]
    pub const fn sync(mut self) -> Self {
        self.sync = true;
        self
    }

    #[must_use]
    pub const fn handcoded(mut self) -> Self {
        self.handcode_api = true;
        self
    }

    /// Whether the client must wait for a result.
    #[must_use]
    pub const fn returns_value(&self) -> bool {
        !self.ret.is_void()
    }

    /// Whether any parameter carries pointer indirection.
    #[must_use]
    pub fn has_pointer_params(&self) -> bool {
        self.params.iter().any(VarType::is_pointer)
    }

    /// Whether this call goes through the command buffer.
    #[must_use]
    pub const fn is_buffered(&self) -> bool {
        !self.direct
    }
}
