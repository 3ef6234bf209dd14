use super::{textify_constant, textify_instructions, Textify};
use crate::jvm::model::{
    AnnotationNode, AnnotationValue, Attribute, ClassNode, FieldNode, InnerClassNode,
    LocalVariableAnnotationNode, LocalVariableNode, MethodNode, ParameterNode, TryCatchBlockNode,
    TypeAnnotationNode, TypeReference,
};
use crate::jvm::{
    java_class_name, java_type_name, AccessNode, ClassName, Label, MethodDescriptor,
    ParseDescriptor, RenderJava,
};
use crate::labels::{label_indices, label_name, IndexedLabelNames, LabelIndexMap, LabelNameLookup};
use itertools::Itertools;

const INDENT: &str = "  ";

impl Textify for AccessNode {
    fn kind_name() -> &'static str {
        "Access"
    }

    /// `[1025: public, abstract]`, or `[0]` if no flag is set
    fn textify(&self, _names: &dyn LabelNameLookup) -> String {
        let names = self.symbolic_names();
        if names.is_empty() {
            format!("[{}]", self.access)
        } else {
            format!("[{}: {}]", self.access, names.join(", "))
        }
    }
}

impl Textify for String {
    fn kind_name() -> &'static str {
        "Value"
    }

    fn textify(&self, _names: &dyn LabelNameLookup) -> String {
        self.clone()
    }
}

impl Textify for Label {
    fn kind_name() -> &'static str {
        "Label"
    }

    fn textify(&self, names: &dyn LabelNameLookup) -> String {
        label_name(names, self)
    }
}

impl Textify for AnnotationValue {
    fn kind_name() -> &'static str {
        "Annotation value"
    }

    fn textify(&self, names: &dyn LabelNameLookup) -> String {
        match self {
            AnnotationValue::Byte(value) => format!("(byte){}", value),
            AnnotationValue::Boolean(value) => value.to_string(),
            AnnotationValue::Char(value) => format!("{:?}", value),
            AnnotationValue::Short(value) => format!("(short){}", value),
            AnnotationValue::Int(value) => value.to_string(),
            AnnotationValue::Long(value) => format!("{}L", value),
            AnnotationValue::Float(value) => format!("{:?}F", value),
            AnnotationValue::Double(value) => format!("{:?}D", value),
            AnnotationValue::String(value) => format!("{:?}", value),
            AnnotationValue::Type(desc) => format!("{}.class", java_type_name(desc)),
            AnnotationValue::Enum { desc, value } => format!("{}.{}", java_type_name(desc), value),
            AnnotationValue::Annotation(annotation) => annotation.textify(names),
            AnnotationValue::Array(values) => {
                format!("{{{}}}", values.iter().map(|value| value.textify(names)).join(", "))
            }
        }
    }
}

impl Textify for AnnotationNode {
    fn kind_name() -> &'static str {
        "Annotation"
    }

    /// `@java.lang.Deprecated` or `@a.B(value=1, names={"x"})`
    fn textify(&self, names: &dyn LabelNameLookup) -> String {
        let mut representation = self.textify_simplified(names);
        if !self.values.is_empty() {
            let values = self
                .values
                .iter()
                .map(|(name, value)| format!("{}={}", name, value.textify(names)))
                .join(", ");
            representation.push_str(&format!("({})", values));
        }
        representation
    }

    fn textify_simplified(&self, _names: &dyn LabelNameLookup) -> String {
        format!("@{}", java_type_name(&self.desc))
    }
}

impl Textify for TypeReference {
    fn kind_name() -> &'static str {
        "Type reference"
    }

    /// Sort name, followed by the target info if the sort has any (eg. `throws=1`)
    fn textify(&self, _names: &dyn LabelNameLookup) -> String {
        match self.sort() {
            Self::CLASS_TYPE_PARAMETER => {
                format!("class_type_parameter={}", self.type_parameter_index())
            }
            Self::METHOD_TYPE_PARAMETER => {
                format!("method_type_parameter={}", self.type_parameter_index())
            }
            Self::CLASS_EXTENDS => format!("class_extends={}", self.super_type_index()),
            Self::CLASS_TYPE_PARAMETER_BOUND => format!(
                "class_type_parameter_bound={},{}",
                self.type_parameter_index(),
                self.type_parameter_bound_index()
            ),
            Self::METHOD_TYPE_PARAMETER_BOUND => format!(
                "method_type_parameter_bound={},{}",
                self.type_parameter_index(),
                self.type_parameter_bound_index()
            ),
            Self::FIELD => String::from("field"),
            Self::METHOD_RETURN => String::from("method_return"),
            Self::METHOD_RECEIVER => String::from("method_receiver"),
            Self::METHOD_FORMAL_PARAMETER => {
                format!("method_formal_parameter={}", self.formal_parameter_index())
            }
            Self::THROWS => format!("throws={}", self.exception_index()),
            Self::LOCAL_VARIABLE => String::from("local_variable"),
            Self::RESOURCE_VARIABLE => String::from("resource_variable"),
            Self::EXCEPTION_PARAMETER => {
                format!("exception_parameter={}", self.try_catch_block_index())
            }
            Self::INSTANCEOF => String::from("instanceof"),
            Self::NEW => String::from("new"),
            Self::CONSTRUCTOR_REFERENCE => String::from("constructor_reference"),
            Self::METHOD_REFERENCE => String::from("method_reference"),
            Self::CAST => format!("cast={}", self.type_argument_index()),
            Self::CONSTRUCTOR_INVOCATION_TYPE_ARGUMENT => format!(
                "constructor_invocation_type_argument={}",
                self.type_argument_index()
            ),
            Self::METHOD_INVOCATION_TYPE_ARGUMENT => {
                format!("method_invocation_type_argument={}", self.type_argument_index())
            }
            Self::CONSTRUCTOR_REFERENCE_TYPE_ARGUMENT => format!(
                "constructor_reference_type_argument={}",
                self.type_argument_index()
            ),
            Self::METHOD_REFERENCE_TYPE_ARGUMENT => {
                format!("method_reference_type_argument={}", self.type_argument_index())
            }
            _ => format!("unknown=0x{:08x}", self.0),
        }
    }
}

fn type_reference_details(
    type_annotation: &TypeAnnotationNode,
    names: &dyn LabelNameLookup,
) -> String {
    let mut details = format!("reference: {}", type_annotation.type_ref.textify(names));
    if let Some(path) = &type_annotation.type_path {
        details.push_str(&format!("; path: {}", path));
    }
    details
}

impl Textify for TypeAnnotationNode {
    fn kind_name() -> &'static str {
        "Type annotation"
    }

    fn textify(&self, names: &dyn LabelNameLookup) -> String {
        format!("{} // {}", self.annotation.textify(names), type_reference_details(self, names))
    }

    fn textify_simplified(&self, names: &dyn LabelNameLookup) -> String {
        self.annotation.textify_simplified(names)
    }
}

impl Textify for LocalVariableAnnotationNode {
    fn kind_name() -> &'static str {
        "Local variable annotation"
    }

    fn textify(&self, names: &dyn LabelNameLookup) -> String {
        let ranges = self
            .start
            .iter()
            .zip(&self.end)
            .zip(&self.index)
            .map(|((start, end), index)| {
                format!("{}-{}@{}", label_name(names, start), label_name(names, end), index)
            })
            .join(", ");
        format!(
            "{} // range: {}; {}",
            self.type_annotation.annotation.textify(names),
            ranges,
            type_reference_details(&self.type_annotation, names)
        )
    }

    fn textify_simplified(&self, names: &dyn LabelNameLookup) -> String {
        self.type_annotation.annotation.textify_simplified(names)
    }
}

impl Textify for ParameterNode {
    fn kind_name() -> &'static str {
        "Parameter"
    }

    /// `final value`, access names first
    fn textify(&self, names: &dyn LabelNameLookup) -> String {
        let access = AccessNode::for_parameter(self.access).symbolic_names();
        let name = self.textify_simplified(names);
        if access.is_empty() {
            name
        } else {
            format!("{} {}", access.join(" "), name)
        }
    }

    fn textify_simplified(&self, _names: &dyn LabelNameLookup) -> String {
        self.name.clone().unwrap_or_else(|| String::from("null"))
    }
}

impl Textify for InnerClassNode {
    fn kind_name() -> &'static str {
        "Inner class"
    }

    fn textify(&self, names: &dyn LabelNameLookup) -> String {
        let mut representation = format!(
            "{} {}",
            AccessNode::for_inner_class(self.access).textify(names),
            self.textify_simplified(names)
        );
        if let Some(outer_name) = &self.outer_name {
            representation.push_str(&format!(" // outer name: {}", java_class_name(outer_name)));
        }
        if let Some(inner_name) = &self.inner_name {
            let separator = if self.outer_name.is_some() { ", " } else { " // " };
            representation.push_str(&format!("{}inner name: {}", separator, inner_name));
        }
        representation
    }

    fn textify_simplified(&self, _names: &dyn LabelNameLookup) -> String {
        java_class_name(&self.name)
    }
}

impl Textify for Attribute {
    fn kind_name() -> &'static str {
        "Attribute"
    }

    /// `Name: 0x0a0b`
    fn textify(&self, _names: &dyn LabelNameLookup) -> String {
        let content = self
            .content
            .iter()
            .map(|byte| format!("{:02x}", byte))
            .join("");
        format!("{}: 0x{}", self.kind, content)
    }

    fn textify_simplified(&self, _names: &dyn LabelNameLookup) -> String {
        self.kind.clone()
    }
}

impl Textify for TryCatchBlockNode {
    fn kind_name() -> &'static str {
        "Try catch block"
    }

    fn textify(&self, names: &dyn LabelNameLookup) -> String {
        let type_annotations = annotation_lines(
            self.visible_type_annotations.as_deref(),
            self.invisible_type_annotations.as_deref(),
            names,
        );
        let mut lines = type_annotations;
        lines.push(self.textify_simplified(names));
        lines.join("\n")
    }

    /// `java.io.IOException, L0 -> L1 handled in L2`
    fn textify_simplified(&self, names: &dyn LabelNameLookup) -> String {
        let catch_type = match &self.catch_type {
            Some(catch_type) => java_class_name(catch_type),
            None => String::from("finally"),
        };
        format!(
            "{}, {} -> {} handled in {}",
            catch_type,
            label_name(names, &self.start),
            label_name(names, &self.end),
            label_name(names, &self.handler)
        )
    }
}

impl Textify for LocalVariableNode {
    fn kind_name() -> &'static str {
        "Local variable"
    }

    fn textify(&self, names: &dyn LabelNameLookup) -> String {
        let mut representation = format!(
            "{} // range: {}-{}",
            self.textify_simplified(names),
            label_name(names, &self.start),
            label_name(names, &self.end)
        );
        if let Some(signature) = &self.signature {
            representation.push_str(&format!("; signature: {}", signature));
        }
        representation
    }

    /// `#1 int count`
    fn textify_simplified(&self, _names: &dyn LabelNameLookup) -> String {
        format!("#{} {} {}", self.index, java_type_name(&self.desc), self.name)
    }
}

/// One line per annotation, invisible ones marked with a trailing comment
fn annotation_lines<T: Textify>(
    visible: Option<&[T]>,
    invisible: Option<&[T]>,
    names: &dyn LabelNameLookup,
) -> Vec<String> {
    let visible = visible.unwrap_or_default().iter().map(|a| a.textify(names));
    let invisible = invisible
        .unwrap_or_default()
        .iter()
        .map(|a| format!("{} // invisible", a.textify(names)));
    visible.chain(invisible).collect()
}

fn attribute_lines(attributes: Option<&[Attribute]>, names: &dyn LabelNameLookup) -> Vec<String> {
    attributes
        .unwrap_or_default()
        .iter()
        .map(|attribute| format!("// Attribute: {}", attribute.textify(names)))
        .collect()
}

fn access_prefix(access: AccessNode, names: &dyn LabelNameLookup) -> String {
    format!("{} ", access.textify(names))
}

impl Textify for FieldNode {
    fn kind_name() -> &'static str {
        "Field"
    }

    fn textify(&self, names: &dyn LabelNameLookup) -> String {
        let mut lines = attribute_lines(self.attributes.as_deref(), names);
        lines.extend(annotation_lines(
            self.visible_annotations.as_deref(),
            self.invisible_annotations.as_deref(),
            names,
        ));
        lines.extend(annotation_lines(
            self.visible_type_annotations.as_deref(),
            self.invisible_type_annotations.as_deref(),
            names,
        ));

        let mut declaration = access_prefix(AccessNode::for_field(self.access), names);
        declaration.push_str(&self.textify_simplified(names));
        if let Some(value) = &self.value {
            declaration.push_str(&format!(" = {}", textify_constant(value)));
        }
        if let Some(signature) = &self.signature {
            declaration.push_str(&format!(" // signature: {}", signature));
        }
        lines.push(declaration);
        lines.join("\n")
    }

    /// `java.lang.String name`
    fn textify_simplified(&self, _names: &dyn LabelNameLookup) -> String {
        format!("{} {}", java_type_name(&self.desc), self.name)
    }
}

impl MethodNode {
    /// Java-like declaration
    ///
    /// For instance `[1: public] int m(java.lang.String var0) throws java.io.IOException`.
    pub fn declaration_text(&self, names: &dyn LabelNameLookup) -> String {
        let mut declaration = access_prefix(AccessNode::for_method(self.access), names);
        let descriptor = MethodDescriptor::<ClassName>::parse(&self.desc).ok();
        let is_initializer = self.name == "<init>" || self.name == "<clinit>";

        if let (Some(descriptor), false) = (&descriptor, is_initializer) {
            match &descriptor.return_type {
                Some(return_type) => declaration.push_str(&return_type.render_java()),
                None => declaration.push_str("void"),
            }
            declaration.push(' ');
        }
        declaration.push_str(&self.name);

        match &descriptor {
            Some(descriptor) => {
                let parameters = descriptor
                    .parameters
                    .iter()
                    .enumerate()
                    .map(|(i, parameter)| {
                        let parameter_node = self.parameters.as_ref().and_then(|p| p.get(i));
                        let name = parameter_node
                            .and_then(|p| p.name.clone())
                            .unwrap_or_else(|| format!("var{}", i));
                        let access = parameter_node
                            .map(|p| AccessNode::for_parameter(p.access).symbolic_names())
                            .unwrap_or_default();
                        let mut parameter_text = String::new();
                        for access in access {
                            parameter_text.push_str(access);
                            parameter_text.push(' ');
                        }
                        format!("{}{} {}", parameter_text, parameter.render_java(), name)
                    })
                    .join(", ");
                declaration.push_str(&format!("({})", parameters));
            }
            None => declaration.push_str(&self.desc),
        }

        if !self.exceptions.is_empty() {
            let exceptions = self.exceptions.iter().map(|e| java_class_name(e)).join(", ");
            declaration.push_str(&format!(" throws {}", exceptions));
        }
        if let Some(signature) = &self.signature {
            declaration.push_str(&format!(" // signature: {}", signature));
        }
        declaration
    }
}

impl Textify for MethodNode {
    fn kind_name() -> &'static str {
        "Method"
    }

    /// Declaration, then the body, then all other metadata as comments
    ///
    /// Labels not known to `names` are numbered by their position in this method.
    fn textify(&self, names: &dyn LabelNameLookup) -> String {
        let mut own_indices = LabelIndexMap::new();
        own_indices.put_all(label_indices(&self.instructions));
        let names = names.merge(IndexedLabelNames(&own_indices));
        let names: &dyn LabelNameLookup = &names;

        let mut lines = attribute_lines(self.attributes.as_deref(), names);
        lines.extend(annotation_lines(
            self.visible_annotations.as_deref(),
            self.invisible_annotations.as_deref(),
            names,
        ));
        lines.extend(annotation_lines(
            self.visible_type_annotations.as_deref(),
            self.invisible_type_annotations.as_deref(),
            names,
        ));
        lines.push(self.declaration_text(names));

        if !self.instructions.is_empty() {
            for line in textify_instructions(&self.instructions, names).lines() {
                lines.push(format!("{}{}", INDENT, line));
            }
        }

        let mut meta = vec![];
        if let Some(default) = &self.annotation_default {
            meta.push(format!("Annotation default: {}", default.textify(names)));
        }
        for (i, parameter) in self.parameters.iter().flatten().enumerate() {
            meta.push(format!("Parameter {}: {}", i, parameter.textify(names)));
        }
        let parameter_annotations = [
            (&self.visible_parameter_annotations, ""),
            (&self.invisible_parameter_annotations, " // invisible"),
        ];
        for (annotations, suffix) in parameter_annotations {
            for (i, annotations) in annotations.iter().flatten().enumerate() {
                for annotation in annotations.iter().flatten() {
                    meta.push(format!(
                        "Parameter annotation {}: {}{}",
                        i,
                        annotation.textify(names),
                        suffix
                    ));
                }
            }
        }
        for variable in self.local_variables.iter().flatten() {
            meta.push(format!("Local variable: {}", variable.textify(names)));
        }
        let local_variable_annotations = [
            (&self.visible_local_variable_annotations, ""),
            (&self.invisible_local_variable_annotations, " // invisible"),
        ];
        for (annotations, suffix) in local_variable_annotations {
            for annotation in annotations.iter().flatten() {
                meta.push(format!(
                    "Local variable annotation: {}{}",
                    annotation.textify(names),
                    suffix
                ));
            }
        }
        for block in &self.try_catch_blocks {
            meta.push(format!("Try catch block: {}", block.textify(names)));
        }
        meta.push(format!("Max locals: {}", self.max_locals));
        meta.push(format!("Max stack: {}", self.max_stack));

        for line in meta.iter().flat_map(|entry| entry.lines()) {
            lines.push(format!("{}// {}", INDENT, line));
        }
        lines.join("\n")
    }

    /// Name followed by descriptor, eg. `m()I`
    fn textify_simplified(&self, _names: &dyn LabelNameLookup) -> String {
        self.declaration()
    }
}

impl ClassNode {
    /// Java-like declaration, eg. `[33: public, super] class a.B extends java.lang.Object`
    pub fn declaration_text(&self, names: &dyn LabelNameLookup) -> String {
        let access = AccessNode::for_class(self.access);
        let mut declaration = access_prefix(access, names);
        declaration.push_str(&self.textify_simplified(names));

        let interfaces = self.interfaces.iter().map(|i| java_class_name(i)).join(", ");
        let is_interface = matches!(access.class_kind(), "interface" | "@interface");
        if let Some(super_name) = &self.super_name {
            if !is_interface {
                declaration.push_str(&format!(" extends {}", java_class_name(super_name)));
            }
        }
        if !interfaces.is_empty() {
            let keyword = if is_interface { "extends" } else { "implements" };
            declaration.push_str(&format!(" {} {}", keyword, interfaces));
        }
        if let Some(signature) = &self.signature {
            declaration.push_str(&format!(" // signature: {}", signature));
        }
        declaration
    }
}

impl Textify for ClassNode {
    fn kind_name() -> &'static str {
        "Class"
    }

    fn textify(&self, names: &dyn LabelNameLookup) -> String {
        let mut lines = vec![format!("// Class version: {}", self.version)];
        lines.extend(attribute_lines(self.attributes.as_deref(), names));
        lines.extend(annotation_lines(
            self.visible_annotations.as_deref(),
            self.invisible_annotations.as_deref(),
            names,
        ));
        lines.extend(annotation_lines(
            self.visible_type_annotations.as_deref(),
            self.invisible_type_annotations.as_deref(),
            names,
        ));
        lines.push(self.declaration_text(names));

        for field in &self.fields {
            lines.push(String::new());
            lines.extend(field.textify(names).lines().map(|l| format!("{}{}", INDENT, l)));
        }
        for method in &self.methods {
            lines.push(String::new());
            lines.extend(method.textify(names).lines().map(|l| format!("{}{}", INDENT, l)));
        }

        let mut meta = vec![];
        if let Some(source_file) = &self.source_file {
            meta.push(format!("Source file: {}", source_file));
        }
        if let Some(source_debug) = &self.source_debug {
            meta.push(format!("Source debug: {}", source_debug));
        }
        if let Some(outer_class) = &self.outer_class {
            meta.push(format!("Outer class: {}", java_class_name(outer_class)));
        }
        if self.outer_method.is_some() || self.outer_method_desc.is_some() {
            meta.push(format!(
                "Outer method: {}{}",
                self.outer_method.as_deref().unwrap_or("null"),
                self.outer_method_desc.as_deref().unwrap_or_default()
            ));
        }
        for inner_class in &self.inner_classes {
            meta.push(format!("Inner class: {}", inner_class.textify(names)));
        }
        if let Some(nest_host_class) = &self.nest_host_class {
            meta.push(format!("Nest host class: {}", java_class_name(nest_host_class)));
        }
        for nest_member in self.nest_members.iter().flatten() {
            meta.push(format!("Nest member: {}", java_class_name(nest_member)));
        }
        for permitted in self.permitted_subclasses.iter().flatten() {
            meta.push(format!("Permitted subclass: {}", java_class_name(permitted)));
        }
        if !meta.is_empty() {
            lines.push(String::new());
            lines.extend(meta.into_iter().map(|line| format!("// {}", line)));
        }
        lines.join("\n")
    }

    /// Kind and name, eg. `class a.B` or `@interface a.C`
    fn textify_simplified(&self, _names: &dyn LabelNameLookup) -> String {
        format!(
            "{} {}",
            AccessNode::for_class(self.access).class_kind(),
            java_class_name(&self.name)
        )
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::jvm::model::Instruction;
    use crate::jvm::opcodes;
    use crate::labels::LabelNameMap;

    #[test]
    fn access_representation() {
        let names = LabelNameMap::new();
        assert_eq!(AccessNode::for_class(1025).textify(&names), "[1025: public, abstract]");
        assert_eq!(AccessNode::for_method(0).textify(&names), "[0]");
    }

    #[test]
    fn type_reference_representation() {
        let names = LabelNameMap::new();
        let field = TypeReference::new(TypeReference::FIELD);
        assert_eq!(field.textify(&names), "field");
        assert_eq!(TypeReference::with_exception(1).textify(&names), "throws=1");
        let bound = TypeReference::with_type_parameter_bound(
            TypeReference::CLASS_TYPE_PARAMETER_BOUND,
            0,
            2,
        );
        assert_eq!(bound.textify(&names), "class_type_parameter_bound=0,2");
        assert_eq!(TypeReference(0x10ffff00).textify(&names), "class_extends=-1");
        assert_eq!(TypeReference(0x7f000000).textify(&names), "unknown=0x7f000000");

        let annotation = TypeAnnotationNode::new(field.0, Some("0;"), "La/NonNull;");
        assert_eq!(annotation.textify(&names), "@a.NonNull // reference: field; path: 0;");
    }

    #[test]
    fn method_representation() {
        let names = LabelNameMap::new();
        let start = Label::new();
        let mut method = MethodNode::new(0x0001, "m", "(Ljava/lang/String;J)I");
        method.exceptions = vec![String::from("java/io/IOException")];
        method.instructions = vec![
            Instruction::Label(start),
            Instruction::Plain(opcodes::ICONST_1),
            Instruction::Plain(opcodes::IRETURN),
        ];
        method.max_stack = 1;
        method.max_locals = 4;

        assert_eq!(method.textify_simplified(&names), "m(Ljava/lang/String;J)I");
        assert_eq!(
            method.textify(&names),
            [
                "[1: public] int m(java.lang.String var0, long var1) throws java.io.IOException",
                "  L0",
                "    ICONST_1",
                "    IRETURN",
                "  // Max locals: 4",
                "  // Max stack: 1",
            ]
            .join("\n")
        );
    }

    #[test]
    fn class_representation() {
        let names = LabelNameMap::new();
        let mut class = ClassNode::new(52, 0x0601, "a/I", Some("java/lang/Object"));
        class.interfaces = vec![String::from("java/io/Serializable")];
        assert_eq!(class.textify_simplified(&names), "interface a.I");
        assert_eq!(
            class.declaration_text(&names),
            "[1537: public, interface, abstract] interface a.I extends java.io.Serializable"
        );
    }

    #[test]
    fn annotation_representation() {
        let names = LabelNameMap::new();
        let annotation = AnnotationNode::new("La/Marker;")
            .with_value("value", AnnotationValue::Int(3))
            .with_value(
                "names",
                AnnotationValue::Array(vec![AnnotationValue::String(String::from("x"))]),
            );
        assert_eq!(annotation.textify_simplified(&names), "@a.Marker");
        assert_eq!(annotation.textify(&names), "@a.Marker(value=3, names={\"x\"})");
    }
}
