use super::TypeReference;
use crate::jvm::Label;

/// Annotation with its element values
#[derive(Clone, Debug, PartialEq)]
pub struct AnnotationNode {
    /// Descriptor of the annotation type
    pub desc: String,

    /// Element name and value pairs, in the order they were declared
    pub values: Vec<(String, AnnotationValue)>,
}

impl AnnotationNode {
    pub fn new(desc: &str) -> AnnotationNode {
        AnnotationNode {
            desc: desc.to_owned(),
            values: vec![],
        }
    }

    /// Add an element value
    pub fn with_value(mut self, name: &str, value: AnnotationValue) -> AnnotationNode {
        self.values.push((name.to_owned(), value));
        self
    }
}

/// Value of an annotation element (also used for annotation defaults)
#[derive(Clone, Debug, PartialEq)]
pub enum AnnotationValue {
    Byte(i8),
    Boolean(bool),
    Char(char),
    Short(i16),
    Int(i32),
    Long(i64),
    Float(f32),
    Double(f64),
    String(String),

    /// Class literal, as a descriptor
    Type(String),

    /// Enum constant
    Enum {
        desc: String,
        value: String,
    },

    Annotation(Box<AnnotationNode>),
    Array(Vec<AnnotationValue>),
}

impl AnnotationValue {
    pub(crate) fn variant_index(&self) -> u8 {
        match self {
            AnnotationValue::Byte(_) => 0,
            AnnotationValue::Boolean(_) => 1,
            AnnotationValue::Char(_) => 2,
            AnnotationValue::Short(_) => 3,
            AnnotationValue::Int(_) => 4,
            AnnotationValue::Long(_) => 5,
            AnnotationValue::Float(_) => 6,
            AnnotationValue::Double(_) => 7,
            AnnotationValue::String(_) => 8,
            AnnotationValue::Type(_) => 9,
            AnnotationValue::Enum { .. } => 10,
            AnnotationValue::Annotation(_) => 11,
            AnnotationValue::Array(_) => 12,
        }
    }
}

/// Annotation on a type use
#[derive(Clone, Debug, PartialEq)]
pub struct TypeAnnotationNode {
    pub type_ref: TypeReference,

    /// Path to the annotated part of the type, in the `TypePath` string form (eg. `0;*`)
    pub type_path: Option<String>,

    pub annotation: AnnotationNode,
}

impl TypeAnnotationNode {
    pub fn new(type_ref: u32, type_path: Option<&str>, desc: &str) -> TypeAnnotationNode {
        TypeAnnotationNode {
            type_ref: TypeReference(type_ref),
            type_path: type_path.map(str::to_owned),
            annotation: AnnotationNode::new(desc),
        }
    }
}

/// Type annotation on a local variable, which is live in several ranges
#[derive(Clone, Debug, PartialEq)]
pub struct LocalVariableAnnotationNode {
    pub type_annotation: TypeAnnotationNode,

    /// Range starts, parallel to `end` and `index`
    pub start: Vec<Label>,
    pub end: Vec<Label>,
    pub index: Vec<u16>,
}
