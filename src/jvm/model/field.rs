use super::{AnnotationNode, Attribute, ConstantValue, TypeAnnotationNode};

/// Field of a class
#[derive(Clone, Debug, PartialEq)]
pub struct FieldNode {
    pub access: u32,
    pub name: String,

    /// Field descriptor (eg. `Ljava/lang/String;`)
    pub desc: String,

    /// Generic field signature
    ///
    /// [Format](https://docs.oracle.com/javase/specs/jvms/se11/html/jvms-4.html#jvms-4.7.9.1)
    pub signature: Option<String>,

    /// `ConstantValue` attribute (only for static fields)
    pub value: Option<ConstantValue>,

    pub visible_annotations: Option<Vec<AnnotationNode>>,
    pub invisible_annotations: Option<Vec<AnnotationNode>>,
    pub visible_type_annotations: Option<Vec<TypeAnnotationNode>>,
    pub invisible_type_annotations: Option<Vec<TypeAnnotationNode>>,
    pub attributes: Option<Vec<Attribute>>,
}

impl FieldNode {
    pub fn new(access: u32, name: &str, desc: &str) -> FieldNode {
        FieldNode {
            access,
            name: name.to_owned(),
            desc: desc.to_owned(),
            signature: None,
            value: None,
            visible_annotations: None,
            invisible_annotations: None,
            visible_type_annotations: None,
            invisible_type_annotations: None,
            attributes: None,
        }
    }
}
