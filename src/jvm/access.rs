use super::{
    ClassAccessFlags, FieldAccessFlags, InnerClassAccessFlags, MethodAccessFlags,
    ModuleAccessFlags, ModuleExportsAccessFlags, ModuleRequiresAccessFlags, ParameterAccessFlags,
};

/// Symbolic access flag
///
/// The declaration order is the canonical order used whenever a set of flags gets listed: it
/// follows the bit values, which happens to also be conventional source order (visibility first,
/// then `static`, then `final`, ...).
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub enum Access {
    Public,
    Private,
    Protected,
    Static,
    Final,
    Super,
    Synchronized,
    Open,
    Transitive,
    Volatile,
    Bridge,
    StaticPhase,
    Varargs,
    Transient,
    Native,
    Interface,
    Abstract,
    Strict,
    Synthetic,
    Annotation,
    Enum,
    Mandated,
    Module,
    Record,
    Deprecated,
}

impl Access {
    pub const ALL: [Access; 25] = [
        Access::Public,
        Access::Private,
        Access::Protected,
        Access::Static,
        Access::Final,
        Access::Super,
        Access::Synchronized,
        Access::Open,
        Access::Transitive,
        Access::Volatile,
        Access::Bridge,
        Access::StaticPhase,
        Access::Varargs,
        Access::Transient,
        Access::Native,
        Access::Interface,
        Access::Abstract,
        Access::Strict,
        Access::Synthetic,
        Access::Annotation,
        Access::Enum,
        Access::Mandated,
        Access::Module,
        Access::Record,
        Access::Deprecated,
    ];

    /// Bit of this flag in an access mask
    pub const fn flag(self) -> u32 {
        match self {
            Access::Public => 0x0001,
            Access::Private => 0x0002,
            Access::Protected => 0x0004,
            Access::Static => 0x0008,
            Access::Final => 0x0010,
            Access::Super | Access::Synchronized | Access::Open | Access::Transitive => 0x0020,
            Access::Volatile | Access::Bridge | Access::StaticPhase => 0x0040,
            Access::Varargs | Access::Transient => 0x0080,
            Access::Native => 0x0100,
            Access::Interface => 0x0200,
            Access::Abstract => 0x0400,
            Access::Strict => 0x0800,
            Access::Synthetic => 0x1000,
            Access::Annotation => 0x2000,
            Access::Enum => 0x4000,
            Access::Mandated | Access::Module => 0x8000,
            Access::Record => 0x10000,
            Access::Deprecated => 0x20000,
        }
    }

    /// Lowercase name, which is the Java keyword for flags that have one
    pub const fn name(self) -> &'static str {
        match self {
            Access::Public => "public",
            Access::Private => "private",
            Access::Protected => "protected",
            Access::Static => "static",
            Access::Final => "final",
            Access::Super => "super",
            Access::Synchronized => "synchronized",
            Access::Open => "open",
            Access::Transitive => "transitive",
            Access::Volatile => "volatile",
            Access::Bridge => "bridge",
            Access::StaticPhase => "static_phase",
            Access::Varargs => "varargs",
            Access::Transient => "transient",
            Access::Native => "native",
            Access::Interface => "interface",
            Access::Abstract => "abstract",
            Access::Strict => "strict",
            Access::Synthetic => "synthetic",
            Access::Annotation => "annotation",
            Access::Enum => "enum",
            Access::Mandated => "mandated",
            Access::Module => "module",
            Access::Record => "record",
            Access::Deprecated => "deprecated",
        }
    }

    /// Check whether the flag is set in the mask
    pub const fn check(self, access: u32) -> bool {
        access & self.flag() != 0
    }
}

/// What an access mask is attached to
///
/// The same bit means different things depending on the kind (`0x0040` is `volatile` on a field
/// but `bridge` on a method), so an access mask is only meaningful together with its kind.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub enum AccessKind {
    Class,
    Field,
    Method,
    Parameter,
    InnerClass,
    Module,
    ModuleRequires,
    ModuleExports,
    ModuleOpens,
}

impl AccessKind {
    /// All of the bits which carry a meaning for this kind
    pub fn legal_mask(self) -> u32 {
        match self {
            AccessKind::Class => ClassAccessFlags::all().bits(),
            AccessKind::Field => FieldAccessFlags::all().bits(),
            AccessKind::Method => MethodAccessFlags::all().bits(),
            AccessKind::Parameter => ParameterAccessFlags::all().bits(),
            AccessKind::InnerClass => InnerClassAccessFlags::all().bits(),
            AccessKind::Module => ModuleAccessFlags::all().bits(),
            AccessKind::ModuleRequires => ModuleRequiresAccessFlags::all().bits(),
            AccessKind::ModuleExports | AccessKind::ModuleOpens => {
                ModuleExportsAccessFlags::all().bits()
            }
        }
    }

    /// Symbolic flags that are legal for this kind, in canonical order
    pub fn accesses(self) -> &'static [Access] {
        use Access::*;
        match self {
            AccessKind::Class => &[
                Public, Private, Protected, Final, Super, Interface, Abstract, Synthetic,
                Annotation, Enum, Module, Record, Deprecated,
            ],
            AccessKind::Field => &[
                Public, Private, Protected, Static, Final, Volatile, Transient, Synthetic, Enum,
                Deprecated,
            ],
            AccessKind::Method => &[
                Public,
                Private,
                Protected,
                Static,
                Final,
                Synchronized,
                Bridge,
                Varargs,
                Native,
                Abstract,
                Strict,
                Synthetic,
                Deprecated,
            ],
            AccessKind::Parameter => &[Final, Synthetic, Mandated],
            AccessKind::InnerClass => &[
                Public, Private, Protected, Static, Final, Interface, Abstract, Synthetic,
                Annotation, Enum,
            ],
            AccessKind::Module => &[Open, Synthetic, Mandated],
            AccessKind::ModuleRequires => &[Transitive, StaticPhase, Synthetic, Mandated],
            AccessKind::ModuleExports | AccessKind::ModuleOpens => &[Synthetic, Mandated],
        }
    }
}

/// Access mask together with the kind that gives it meaning
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub struct AccessNode {
    pub access: u32,
    pub kind: AccessKind,
}

impl AccessNode {
    pub const fn new(access: u32, kind: AccessKind) -> AccessNode {
        AccessNode { access, kind }
    }

    pub const fn for_class(access: u32) -> AccessNode {
        AccessNode::new(access, AccessKind::Class)
    }

    pub const fn for_field(access: u32) -> AccessNode {
        AccessNode::new(access, AccessKind::Field)
    }

    pub const fn for_method(access: u32) -> AccessNode {
        AccessNode::new(access, AccessKind::Method)
    }

    pub const fn for_parameter(access: u32) -> AccessNode {
        AccessNode::new(access, AccessKind::Parameter)
    }

    pub const fn for_inner_class(access: u32) -> AccessNode {
        AccessNode::new(access, AccessKind::InnerClass)
    }

    /// Flags set in the mask that are legal for the kind, in canonical order
    pub fn accesses(&self) -> Vec<Access> {
        self.kind
            .accesses()
            .iter()
            .copied()
            .filter(|access| access.check(self.access))
            .collect()
    }

    /// Names of the flags set in the mask that are legal for the kind, in canonical order
    ///
    /// A zero mask is just an empty list.
    pub fn symbolic_names(&self) -> Vec<&'static str> {
        self.accesses().into_iter().map(Access::name).collect()
    }

    /// Bits which are set but mean nothing for the kind
    pub fn irrelevant_bits(&self) -> u32 {
        self.access & !self.kind.legal_mask()
    }

    /// Kind of type declaration as written in Java source
    ///
    /// Only meaningful for class and inner class masks.
    pub fn class_kind(&self) -> &'static str {
        if Access::Enum.check(self.access) {
            "enum"
        } else if Access::Annotation.check(self.access) {
            "@interface"
        } else if Access::Interface.check(self.access) {
            "interface"
        } else if self.kind == AccessKind::Class && Access::Record.check(self.access) {
            "record"
        } else if self.kind == AccessKind::Class && Access::Module.check(self.access) {
            "module"
        } else {
            "class"
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn class_names() {
        let access = AccessNode::for_class(1025);
        assert_eq!(access.symbolic_names(), vec!["public", "abstract"]);
        let access = AccessNode::for_class(1040);
        assert_eq!(access.symbolic_names(), vec!["final", "abstract"]);
    }

    #[test]
    fn same_bit_means_different_things() {
        assert_eq!(AccessNode::for_field(0x0040).symbolic_names(), vec!["volatile"]);
        assert_eq!(AccessNode::for_method(0x0040).symbolic_names(), vec!["bridge"]);
        assert_eq!(AccessNode::for_parameter(0x8000).symbolic_names(), vec!["mandated"]);
        assert_eq!(AccessNode::for_class(0x8000).symbolic_names(), vec!["module"]);
    }

    #[test]
    fn irrelevant_bits_are_ignored() {
        // `0x0100` (native) means nothing on a field
        let access = AccessNode::for_field(0x0101);
        assert_eq!(access.symbolic_names(), vec!["public"]);
        assert_eq!(access.irrelevant_bits(), 0x0100);
    }

    #[test]
    fn zero_access() {
        assert!(AccessNode::for_method(0).symbolic_names().is_empty());
    }

    #[test]
    fn canonical_order_follows_bits() {
        for window in Access::ALL.windows(2) {
            assert!(window[0].flag() <= window[1].flag(), "{:?}", window);
        }
        for kind in [AccessKind::Class, AccessKind::Field, AccessKind::Method] {
            let mask = kind.accesses().iter().fold(0, |mask, access| mask | access.flag());
            assert_eq!(mask, kind.legal_mask(), "{:?}", kind);
        }
    }

    #[test]
    fn class_kinds() {
        assert_eq!(AccessNode::for_class(0x0001).class_kind(), "class");
        assert_eq!(AccessNode::for_class(0x0601).class_kind(), "interface");
        assert_eq!(AccessNode::for_class(0x2601).class_kind(), "@interface");
        assert_eq!(AccessNode::for_class(0x4011).class_kind(), "enum");
        assert_eq!(AccessNode::for_class(0x10011).class_kind(), "record");
    }
}
