use super::{AnnotationNode, Attribute, FieldNode, MethodNode, TypeAnnotationNode};

/// Entry of the `InnerClasses` attribute
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct InnerClassNode {
    /// Internal name of the inner class
    pub name: String,

    /// Internal name of the enclosing class, `None` for local and anonymous classes
    pub outer_name: Option<String>,

    /// Simple name, `None` for anonymous classes
    pub inner_name: Option<String>,

    pub access: u32,
}

/// Semantic representation of a class file
#[derive(Clone, Debug, PartialEq)]
pub struct ClassNode {
    /// Class file version (major in the low 16 bits, minor in the high 16 bits)
    pub version: u32,
    pub access: u32,

    /// Internal name (eg. `me/alec/Point`)
    pub name: String,
    pub signature: Option<String>,

    /// Internal name of the super class, only `None` for `java/lang/Object` and modules
    pub super_name: Option<String>,
    pub interfaces: Vec<String>,

    pub source_file: Option<String>,

    /// `SourceDebugExtension` content
    pub source_debug: Option<String>,

    /// Enclosing class of a local or anonymous class
    pub outer_class: Option<String>,
    pub outer_method: Option<String>,
    pub outer_method_desc: Option<String>,

    pub visible_annotations: Option<Vec<AnnotationNode>>,
    pub invisible_annotations: Option<Vec<AnnotationNode>>,
    pub visible_type_annotations: Option<Vec<TypeAnnotationNode>>,
    pub invisible_type_annotations: Option<Vec<TypeAnnotationNode>>,
    pub attributes: Option<Vec<Attribute>>,

    pub inner_classes: Vec<InnerClassNode>,
    pub nest_host_class: Option<String>,
    pub nest_members: Option<Vec<String>>,
    pub permitted_subclasses: Option<Vec<String>>,

    pub fields: Vec<FieldNode>,
    pub methods: Vec<MethodNode>,
}

impl ClassNode {
    pub fn new(version: u32, access: u32, name: &str, super_name: Option<&str>) -> ClassNode {
        ClassNode {
            version,
            access,
            name: name.to_owned(),
            signature: None,
            super_name: super_name.map(str::to_owned),
            interfaces: vec![],
            source_file: None,
            source_debug: None,
            outer_class: None,
            outer_method: None,
            outer_method_desc: None,
            visible_annotations: None,
            invisible_annotations: None,
            visible_type_annotations: None,
            invisible_type_annotations: None,
            attributes: None,
            inner_classes: vec![],
            nest_host_class: None,
            nest_members: None,
            permitted_subclasses: None,
            fields: vec![],
            methods: vec![],
        }
    }
}

/// Class file versions
pub mod version {
    pub const JAVA8: u32 = 52;
    pub const JAVA11: u32 = 55;
    pub const JAVA17: u32 = 61;
}
