//! Inline payload eligibility.
//!
//! A call may copy the data behind its pointer arguments into the command
//! buffer (instead of passing caller addresses to the core thread) only when
//! the client would otherwise not block: void return, not `sync`, and every
//! pointer is a single-level const pointer the core only reads.

use rsg_api::{ApiEntry, VarType};

/// Why a call keeps passing pointers by address.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum NotInlineReason {
    /// Flagged `sync`; the client already waits for the core.
    Synchronous,
    /// Non-void return; the client already waits for the result.
    ReturnsValue,
    /// The core may write through this parameter.
    MutablePointer(String),
    /// Pointer-to-pointer payloads are not supported.
    MultiLevelPointer(String),
    /// Nothing to copy.
    NoPointers,
}

/// Payload strategy for one call.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum InlinePlan<'a> {
    /// The const pointer parameters whose `<name>_length` bytes may be copied.
    Inline { payload: Vec<&'a VarType> },
    NotInline(NotInlineReason),
}

impl<'a> InlinePlan<'a> {
    /// Classify a call.
    #[must_use]
    pub fn for_api(api: &'a ApiEntry) -> Self {
        let plan = Self::classify(api);
        tracing::trace!(api = %api.name, ?plan, "inline plan");
        plan
    }

    fn classify(api: &'a ApiEntry) -> Self {
        if api.sync {
            return Self::NotInline(NotInlineReason::Synchronous);
        }
        if api.returns_value() {
            return Self::NotInline(NotInlineReason::ReturnsValue);
        }

        let mut payload = Vec::new();
        for param in &api.params {
            if param.is_pointer() && !param.is_const {
                return Self::NotInline(NotInlineReason::MutablePointer(param.name.clone()));
            }
            if param.ptr_level > 1 {
                return Self::NotInline(NotInlineReason::MultiLevelPointer(param.name.clone()));
            }
            if param.is_const_pointer() {
                payload.push(param);
            }
        }

        if payload.is_empty() {
            Self::NotInline(NotInlineReason::NoPointers)
        } else {
            Self::Inline { payload }
        }
    }

    #[must_use]
    pub const fn is_inline(&self) -> bool {
        matches!(self, Self::Inline { .. })
    }

    /// Length expressions summed into the payload size, in parameter order.
    #[must_use]
    pub fn length_terms(&self) -> Vec<String> {
        match self {
            Self::Inline { payload } => payload.iter().map(|p| p.length_name()).collect(),
            Self::NotInline(_) => Vec::new(),
        }
    }
}

/// Whether a call's pointer payload may be copied into the command buffer.
#[must_use]
pub fn has_inline_data_pointers(api: &ApiEntry) -> bool {
    InlinePlan::for_api(api).is_inline()
}
