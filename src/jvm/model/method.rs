use super::{
    AnnotationNode, AnnotationValue, Attribute, Instruction, LocalVariableAnnotationNode,
    LocalVariableNode, TryCatchBlockNode, TypeAnnotationNode,
};

/// Entry of the `MethodParameters` attribute
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ParameterNode {
    pub name: Option<String>,
    pub access: u32,
}

impl ParameterNode {
    pub fn new(name: &str, access: u32) -> ParameterNode {
        ParameterNode {
            name: Some(name.to_owned()),
            access,
        }
    }
}

/// Method of a class, including its body
#[derive(Clone, Debug, PartialEq)]
pub struct MethodNode {
    pub access: u32,
    pub name: String,

    /// Method descriptor (eg. `(I)Ljava/lang/String;`)
    pub desc: String,

    /// Generic method signature
    pub signature: Option<String>,

    /// Internal names of the declared exceptions
    pub exceptions: Vec<String>,

    pub parameters: Option<Vec<ParameterNode>>,

    pub visible_annotations: Option<Vec<AnnotationNode>>,
    pub invisible_annotations: Option<Vec<AnnotationNode>>,
    pub visible_type_annotations: Option<Vec<TypeAnnotationNode>>,
    pub invisible_type_annotations: Option<Vec<TypeAnnotationNode>>,
    pub attributes: Option<Vec<Attribute>>,

    /// Default value of an annotation interface element
    pub annotation_default: Option<AnnotationValue>,

    /// Number of parameters that can have (visible) annotations
    ///
    /// This may be less than the number of parameters in the descriptor: `0` means "same as the
    /// descriptor".
    pub visible_annotable_parameter_count: u16,
    pub visible_parameter_annotations: Option<Vec<Option<Vec<AnnotationNode>>>>,
    pub invisible_annotable_parameter_count: u16,
    pub invisible_parameter_annotations: Option<Vec<Option<Vec<AnnotationNode>>>>,

    pub instructions: Vec<Instruction>,
    pub try_catch_blocks: Vec<TryCatchBlockNode>,
    pub max_stack: u16,
    pub max_locals: u16,
    pub local_variables: Option<Vec<LocalVariableNode>>,
    pub visible_local_variable_annotations: Option<Vec<LocalVariableAnnotationNode>>,
    pub invisible_local_variable_annotations: Option<Vec<LocalVariableAnnotationNode>>,
}

impl MethodNode {
    pub fn new(access: u32, name: &str, desc: &str) -> MethodNode {
        MethodNode {
            access,
            name: name.to_owned(),
            desc: desc.to_owned(),
            signature: None,
            exceptions: vec![],
            parameters: None,
            visible_annotations: None,
            invisible_annotations: None,
            visible_type_annotations: None,
            invisible_type_annotations: None,
            attributes: None,
            annotation_default: None,
            visible_annotable_parameter_count: 0,
            visible_parameter_annotations: None,
            invisible_annotable_parameter_count: 0,
            invisible_parameter_annotations: None,
            instructions: vec![],
            try_catch_blocks: vec![],
            max_stack: 0,
            max_locals: 0,
            local_variables: None,
            visible_local_variable_annotations: None,
            invisible_local_variable_annotations: None,
        }
    }

    /// Declaration key, name followed by descriptor (eg. `m()I`)
    pub fn declaration(&self) -> String {
        format!("{}{}", self.name, self.desc)
    }
}
