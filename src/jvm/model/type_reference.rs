/// Packed type reference of a type annotation
///
/// The high byte is the sort (what kind of type use is annotated); the remaining bytes carry the
/// target info, whose layout depends on the sort.
///
/// [0]: https://docs.oracle.com/javase/specs/jvms/se15/html/jvms-4.html#jvms-4.7.20.1
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub struct TypeReference(pub u32);

impl TypeReference {
    pub const CLASS_TYPE_PARAMETER: u8 = 0x00;
    pub const METHOD_TYPE_PARAMETER: u8 = 0x01;
    pub const CLASS_EXTENDS: u8 = 0x10;
    pub const CLASS_TYPE_PARAMETER_BOUND: u8 = 0x11;
    pub const METHOD_TYPE_PARAMETER_BOUND: u8 = 0x12;
    pub const FIELD: u8 = 0x13;
    pub const METHOD_RETURN: u8 = 0x14;
    pub const METHOD_RECEIVER: u8 = 0x15;
    pub const METHOD_FORMAL_PARAMETER: u8 = 0x16;
    pub const THROWS: u8 = 0x17;
    pub const LOCAL_VARIABLE: u8 = 0x40;
    pub const RESOURCE_VARIABLE: u8 = 0x41;
    pub const EXCEPTION_PARAMETER: u8 = 0x42;
    pub const INSTANCEOF: u8 = 0x43;
    pub const NEW: u8 = 0x44;
    pub const CONSTRUCTOR_REFERENCE: u8 = 0x45;
    pub const METHOD_REFERENCE: u8 = 0x46;
    pub const CAST: u8 = 0x47;
    pub const CONSTRUCTOR_INVOCATION_TYPE_ARGUMENT: u8 = 0x48;
    pub const METHOD_INVOCATION_TYPE_ARGUMENT: u8 = 0x49;
    pub const CONSTRUCTOR_REFERENCE_TYPE_ARGUMENT: u8 = 0x4A;
    pub const METHOD_REFERENCE_TYPE_ARGUMENT: u8 = 0x4B;

    /// Reference of a sort which carries no target info (eg. [`TypeReference::FIELD`])
    pub const fn new(sort: u8) -> TypeReference {
        TypeReference((sort as u32) << 24)
    }

    pub const fn sort(self) -> u8 {
        (self.0 >> 24) as u8
    }

    /// For the type parameter sorts and their bounds
    pub const fn type_parameter_index(self) -> u8 {
        (self.0 >> 16) as u8
    }

    /// For the type parameter bound sorts
    pub const fn type_parameter_bound_index(self) -> u8 {
        (self.0 >> 8) as u8
    }

    /// For `CLASS_EXTENDS`, `-1` standing for the super class and everything else for an
    /// index into the interfaces
    pub const fn super_type_index(self) -> i16 {
        (self.0 >> 8) as u16 as i16
    }

    pub const fn formal_parameter_index(self) -> u8 {
        (self.0 >> 16) as u8
    }

    pub const fn exception_index(self) -> u16 {
        (self.0 >> 8) as u16
    }

    pub const fn try_catch_block_index(self) -> u16 {
        (self.0 >> 8) as u16
    }

    /// For `CAST` and the type argument sorts
    pub const fn type_argument_index(self) -> u8 {
        self.0 as u8
    }

    pub fn with_type_parameter(sort: u8, parameter: u8) -> TypeReference {
        TypeReference(TypeReference::new(sort).0 | (parameter as u32) << 16)
    }

    pub fn with_type_parameter_bound(sort: u8, parameter: u8, bound: u8) -> TypeReference {
        TypeReference(TypeReference::with_type_parameter(sort, parameter).0 | (bound as u32) << 8)
    }

    pub fn with_formal_parameter(parameter: u8) -> TypeReference {
        TypeReference::with_type_parameter(TypeReference::METHOD_FORMAL_PARAMETER, parameter)
    }

    pub fn with_exception(exception: u16) -> TypeReference {
        TypeReference(TypeReference::new(TypeReference::THROWS).0 | (exception as u32) << 8)
    }
}
