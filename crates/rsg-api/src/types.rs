//! Value type descriptors.

/// Base kind of a value, before pointer indirection.
///
/// Integer and float widths are in bits. A named record is emitted verbatim,
/// so it carries its identifier instead of a width.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum BaseType {
    Void,
    Int(u8),
    Uint(u8),
    Float(u8),
    Named(String),
}

impl BaseType {
    /// Classify a type identifier as written in a spec file.
    ///
    /// `intN_t`/`uintN_t` are only recognized for the standard widths; any
    /// other spelling (`size_t`, `RsAllocation`, ...) becomes a named record.
    #[must_use]
    pub fn from_ident(ident: &str) -> Self {
        match ident {
            "void" => return Self::Void,
            "float" => return Self::Float(32),
            "double" => return Self::Float(64),
            _ => {}
        }
        if let Some(bits) = int_width(ident, "uint") {
            return Self::Uint(bits);
        }
        if let Some(bits) = int_width(ident, "int") {
            return Self::Int(bits);
        }
        Self::Named(ident.to_string())
    }

    /// Width in bits, for integer and float kinds.
    #[must_use]
    pub const fn bits(&self) -> Option<u8> {
        match self {
            Self::Int(bits) | Self::Uint(bits) | Self::Float(bits) => Some(*bits),
            Self::Void | Self::Named(_) => None,
        }
    }
}

fn int_width(ident: &str, prefix: &str) -> Option<u8> {
    let bits: u8 = ident
        .strip_prefix(prefix)?
        .strip_suffix("_t")?
        .parse()
        .ok()?;
    matches!(bits, 8 | 16 | 32 | 64).then_some(bits)
}

/// A parameter, return slot, or bare type.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct VarType {
    pub base: BaseType,
    /// 0 = value, 1 = pointer, 2 = pointer-to-pointer, ...
    pub ptr_level: u8,
    /// Only pointer targets are ever qualified.
    pub is_const: bool,
    /// Binding name. Empty for a bare type (return slot, cast).
    pub name: String,
}

impl VarType {
    /// Unnamed value of the given base type.
    #[must_use]
    pub const fn new(base: BaseType) -> Self {
        Self {
            base,
            ptr_level: 0,
            is_const: false,
            name: String::new(),
        }
    }

    #[must_use]
    pub const fn void() -> Self {
        Self::new(BaseType::Void)
    }

    #[must_use]
    pub const fn int(bits: u8) -> Self {
        Self::new(BaseType::Int(bits))
    }

    #[must_use]
    pub const fn uint(bits: u8) -> Self {
        Self::new(BaseType::Uint(bits))
    }

    #[must_use]
    pub const fn float(bits: u8) -> Self {
        Self::new(BaseType::Float(bits))
    }

    #[must_use]
    pub fn named_type(ident: impl Into<String>) -> Self {
        Self::new(BaseType::Named(ident.into()))
    }

    /// Add one level of pointer indirection.
    #[must_use]
    pub const fn pointer(mut self) -> Self {
        self.ptr_level += 1;
        self
    }

    /// Mark the pointer target const.
    #[must_use]
    pub const fn constant(mut self) -> Self {
        self.is_const = true;
        self
    }

    /// Attach a binding name.
    #[must_use]
    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Same type with the binding name dropped, for casts.
    #[must_use]
    pub fn bare(&self) -> Self {
        Self {
            name: String::new(),
            ..self.clone()
        }
    }

    #[must_use]
    pub const fn is_pointer(&self) -> bool {
        self.ptr_level > 0
    }

    #[must_use]
    pub const fn is_const_pointer(&self) -> bool {
        self.is_const && self.ptr_level > 0
    }

    /// True for plain `void` (not `void *`).
    #[must_use]
    pub const fn is_void(&self) -> bool {
        matches!(self.base, BaseType::Void) && self.ptr_level == 0
    }

    /// Name of the caller-supplied byte count paired with a pointer parameter.
    #[must_use]
    pub fn length_name(&self) -> String {
        format!("{}_length", self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_ident_primitives() {
        assert_eq!(BaseType::from_ident("void"), BaseType::Void);
        assert_eq!(BaseType::from_ident("int32_t"), BaseType::Int(32));
        assert_eq!(BaseType::from_ident("uint8_t"), BaseType::Uint(8));
        assert_eq!(BaseType::from_ident("uint64_t"), BaseType::Uint(64));
        assert_eq!(BaseType::from_ident("float"), BaseType::Float(32));
        assert_eq!(BaseType::from_ident("double"), BaseType::Float(64));
    }

    #[test]
    fn test_from_ident_named() {
        assert_eq!(
            BaseType::from_ident("RsAllocation"),
            BaseType::Named("RsAllocation".into())
        );
        assert_eq!(BaseType::from_ident("size_t"), BaseType::Named("size_t".into()));
        // Non-standard widths are not integer kinds.
        assert_eq!(BaseType::from_ident("int24_t"), BaseType::Named("int24_t".into()));
        assert_eq!(BaseType::from_ident("uint_t"), BaseType::Named("uint_t".into()));
    }

    #[test]
    fn test_bits() {
        assert_eq!(BaseType::Int(16).bits(), Some(16));
        assert_eq!(BaseType::Float(64).bits(), Some(64));
        assert_eq!(BaseType::Void.bits(), None);
        assert_eq!(BaseType::Named("RsType".into()).bits(), None);
    }

    #[test]
    fn test_void_pointer_is_not_void() {
        assert!(VarType::void().is_void());
        assert!(!VarType::void().pointer().is_void());
        assert!(VarType::void().pointer().is_pointer());
    }

    #[test]
    fn test_const_pointer() {
        let data = VarType::uint(8).pointer().constant().named("data");
        assert!(data.is_const_pointer());
        assert_eq!(data.length_name(), "data_length");
        assert!(!VarType::uint(8).constant().is_const_pointer());
        assert!(data.bare().name.is_empty());
    }
}
