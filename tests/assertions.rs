use jvm_assert::assert::{
    assert_that_class, assert_that_classes, assert_that_fields, assert_that_instructions,
    assert_that_iterable, assert_that_label, assert_that_method, assert_that_methods, AssertOption,
    Error,
};
use jvm_assert::compare::{Comparator, NodeOrd};
use jvm_assert::context::Context;
use jvm_assert::jvm::model::{
    AnnotationNode, AnnotationValue, Attribute, ClassNode, ConstantValue, FieldNode,
    InnerClassNode, Instruction, LocalVariableAnnotationNode, LocalVariableNode, MethodNode,
    ParameterNode, TryCatchBlockNode, TypeAnnotationNode, TypeReference,
};
use jvm_assert::jvm::{opcodes, AccessNode, Label};
use jvm_assert::labels::{LabelIndexMap, LabelNameMap};
use jvm_assert::repr::Representation;
use jvm_assert::{assert_that_access, MethodsComparisonMode};
use std::cmp::Ordering;

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// `int m() { return <constant>; }`, with line numbers
fn constant_method(constant: u8) -> MethodNode {
    let start = Label::new();
    let mut method = MethodNode::new(0, "m", "()I");
    method.instructions = vec![
        Instruction::Label(start),
        Instruction::LineNumber { line: 3, start },
        Instruction::Plain(constant),
        Instruction::Plain(opcodes::IRETURN),
    ];
    method.max_stack = 1;
    method.max_locals = 1;
    method
}

/// Method with a loop, a try-catch block, and a local variable, all freshly labelled
fn looping_method(first_line: u32) -> MethodNode {
    let (start, body, end, handler) = (Label::new(), Label::new(), Label::new(), Label::new());
    let mut method = MethodNode::new(0x0009, "spin", "(I)V");
    method.instructions = vec![
        Instruction::Label(start),
        Instruction::LineNumber {
            line: first_line,
            start,
        },
        Instruction::Var(opcodes::ILOAD, 0),
        Instruction::Jump(opcodes::IFEQ, end),
        Instruction::Label(body),
        Instruction::LineNumber {
            line: first_line + 1,
            start: body,
        },
        Instruction::Iinc {
            var: 0,
            increment: -1,
        },
        Instruction::Jump(opcodes::GOTO, start),
        Instruction::Label(end),
        Instruction::Plain(opcodes::RETURN),
        Instruction::Label(handler),
        Instruction::Plain(opcodes::ATHROW),
    ];
    method.try_catch_blocks = vec![TryCatchBlockNode::new(start, end, handler, None)];
    method.local_variables = Some(vec![LocalVariableNode::new("n", "I", start, end, 0)]);
    method.max_stack = 1;
    method.max_locals = 1;
    method
}

fn class(access: u32, methods: Vec<MethodNode>) -> ClassNode {
    let mut class = ClassNode::new(52, access, "A", Some("java/lang/Object"));
    class.methods = methods;
    class
}

#[test]
fn identical_trees_are_equal() {
    init_logging();
    let mut actual = class(0x0021, vec![constant_method(opcodes::ICONST_1), looping_method(10)]);
    actual.fields.push(FieldNode::new(0x0002, "count", "I"));
    let expected = actual.clone();

    assert_that_class(&actual).is_equal_to(&actual);
    assert_that_class(&actual).is_equal_to(&expected);
}

#[test]
fn independently_built_labels_are_equal() {
    init_logging();
    assert_that_method(&looping_method(10)).is_equal_to(&looping_method(10));
    assert_that_class(&class(0x0021, vec![looping_method(10)]))
        .is_equal_to(&class(0x0021, vec![looping_method(10)]));
}

#[test]
fn differing_instruction_path() {
    init_logging();
    let actual = class(0x0021, vec![constant_method(opcodes::ICONST_1)]);
    let expected = class(0x0021, vec![constant_method(opcodes::ICONST_2)]);

    let err = assert_that_class(&actual).check(&expected).unwrap_err();
    match &err {
        Error::Assertion(failure) => {
            assert_eq!(
                failure.path(),
                "Class: class A > Has equal methods > Method: m()I > Has equal instructions"
            );
            assert!(failure.message.starts_with("Instruction at index 2 differs\n"));
            assert!(failure.message.contains("ICONST_2"));
            assert_eq!(failure.comparator.as_deref(), Some("InstructionComparator"));
        }
        other => panic!("unexpected error {:?}", other),
    }

    assert_that_class(&actual)
        .add_option(AssertOption::IgnoreMethods)
        .is_equal_to(&expected);
    assert_that_class(&actual)
        .add_option(AssertOption::IgnoreInstructions)
        .is_equal_to(&expected);
}

#[test]
fn access_flag_difference() {
    let actual = class(1025, vec![]);
    let expected = class(1040, vec![]);
    let err = assert_that_class(&actual).check(&expected).unwrap_err();
    assert_eq!(
        err.to_string(),
        [
            "[Class: class A > Has equal access] ",
            "Expecting actual:",
            "  [\"public\", \"abstract\"]",
            "to contain exactly in any order:",
            "  [\"final\", \"abstract\"]",
            "names not found: [\"final\"]",
            "names not expected: [\"public\"]",
        ]
        .join("\n")
    );

    assert_that_class(&actual)
        .add_option(AssertOption::IgnoreAccess)
        .is_equal_to(&expected);
    let err = assert_that_access(&AccessNode::for_class(1025))
        .check(&AccessNode::for_class(1040))
        .unwrap_err();
    assert!(err.to_string().starts_with("[Access: [1025: public, abstract]] \n"));
}

#[test]
fn access_compared_by_symbolic_names() {
    // `0x0020` means nothing for a field
    assert_that_access(&AccessNode::for_field(0x0001)).is_equal_to(&AccessNode::for_field(0x0021));
    jvm_assert::assert_that_field(&FieldNode::new(0x0001, "x", "I"))
        .is_equal_to(&FieldNode::new(0x0021, "x", "I"));
    assert_that_access(&AccessNode::for_method(0)).is_equal_to(&AccessNode::for_method(0));

    let err = assert_that_access(&AccessNode::for_method(0x0001))
        .check(&AccessNode::for_method(0x0021))
        .unwrap_err();
    assert!(err.to_string().ends_with("names not found: [\"synchronized\"]"));
}

#[test]
fn line_numbers_ignored() {
    init_logging();
    let actual = looping_method(10);
    let expected = looping_method(42);

    let err = assert_that_method(&actual).check(&expected).unwrap_err();
    assert!(err.to_string().starts_with("[Method: spin(I)V > Has equal instructions] \n"));

    assert_that_method(&actual)
        .ignore_line_numbers()
        .is_equal_to(&expected);

    // Same code, but one side never had line numbers
    let mut bare = looping_method(1);
    bare.instructions
        .retain(|instruction| !matches!(instruction, Instruction::LineNumber { .. }));
    assert_that_method(&actual)
        .ignore_line_numbers()
        .is_equal_to(&bare);
    assert_that_instructions(&actual.instructions)
        .ignore_line_numbers()
        .is_equal_to(&bare.instructions);
}

#[test]
fn method_comparison_modes() -> Result<(), Error> {
    let actual = class(0x0021, vec![constant_method(opcodes::ICONST_1)]);
    let expected = class(0x0021, vec![constant_method(opcodes::ICONST_2)]);

    assert_that_class(&actual)
        .set_methods_comparison_mode(MethodsComparisonMode::DeclarationsOnly)
        .check(&expected)?;

    let err = assert_that_class(&actual)
        .set_methods_comparison_mode(MethodsComparisonMode::Full)
        .check(&expected)
        .unwrap_err();
    let message = err.to_string();
    assert!(message.starts_with("[Class: class A > Has equal methods] \n"));
    assert!(message.contains("elements not found: [m()I]"));
    assert!(message.contains("elements not expected: [m()I]"));
    assert!(message.ends_with("when comparing values using MethodNodeComparator"));

    let renamed = class(0x0021, vec![MethodNode::new(0, "n", "()I")]);
    let err = assert_that_class(&actual)
        .set_methods_comparison_mode(MethodsComparisonMode::DeclarationsOnly)
        .check(&renamed)
        .unwrap_err();
    assert!(err.to_string().contains("elements not found: [n()I]"));
    Ok(())
}

#[test]
fn one_by_one_missing_key() {
    let fields = |names: &[&str]| -> Vec<FieldNode> {
        names
            .iter()
            .map(|name| FieldNode::new(0x0001, name, "I"))
            .collect()
    };
    let actual = fields(&["A", "B"]);
    let expected = fields(&["A", "C"]);

    let err = assert_that_fields(&actual)
        .contains_exactly_in_any_order_compare_one_by_one_elements_of(&expected)
        .unwrap_err();
    let message = err.to_string();
    assert!(message.contains("keys not found: [\"C\"]"), "{}", message);
    assert!(message.contains("keys not expected: [\"B\"]"), "{}", message);

    let mut changed = fields(&["B", "A"]);
    changed[0].desc = String::from("J");
    let err = assert_that_fields(&actual)
        .described_as("Fields")
        .contains_exactly_in_any_order_compare_one_by_one_elements_of(&changed)
        .unwrap_err();
    assert!(err
        .to_string()
        .starts_with("[Fields > Field: int B > Has equal descriptor] \n"));
}

#[test]
fn multiset_with_multiplicity() {
    let actual = vec![String::from("A"), String::from("A")];
    let expected = vec![String::from("C"), String::from("D")];
    let err = assert_that_iterable(Some(&actual[..]))
        .contains_exactly_in_any_order_elements_of(&expected)
        .unwrap_err();
    let message = err.to_string();
    assert!(message.contains("\nelements not found: [C, D]"));
    assert!(message.contains("\nelements not expected: [A, A]"));

    let shuffled = vec![String::from("A"), String::from("B"), String::from("A")];
    assert_that_iterable(Some(&shuffled[..]))
        .contains_exactly_in_any_order_elements_of(&[
            String::from("B"),
            String::from("A"),
            String::from("A"),
        ])
        .unwrap();
}

#[test]
fn missing_list_is_not_empty_list() {
    let empty: Vec<String> = vec![];
    let err = assert_that_iterable::<String>(None)
        .contains_exactly_elements_of(&empty)
        .unwrap_err();
    assert_eq!(err.to_string(), "expected: []\n but was: null");

    let mut actual = looping_method(10);
    let expected = actual.clone();
    actual.local_variables = None;
    let err = assert_that_method(&actual).check(&expected).unwrap_err();
    assert!(err.to_string().starts_with(
        "[Method: spin(I)V > Has equal local variables] \nexpected: [#0 int n]\n but was: null"
    ));
}

#[test]
fn comparator_agrees_with_assertion() {
    let settings = jvm_assert::assert::Settings::new();
    let representation = Representation::new();
    let labels = LabelIndexMap::new();
    let ctx = Context::new(&settings, &labels, false, None, &representation);

    let methods = [
        constant_method(opcodes::ICONST_1),
        constant_method(opcodes::ICONST_1),
        constant_method(opcodes::ICONST_2),
        looping_method(10),
        looping_method(11),
        MethodNode::new(0, "m", "()I"),
    ];
    for a in &methods {
        for b in &methods {
            let ordering = a.node_cmp(b, &ctx);
            let checked = assert_that_method(a).check(b);
            assert_eq!(
                ordering == Ordering::Equal,
                checked.is_ok(),
                "{} vs {}: {:?}",
                a.declaration(),
                b.declaration(),
                checked
            );
            assert_eq!(ordering.reverse(), b.node_cmp(a, &ctx));
        }
    }

    let public = AccessNode::for_field(0x0001);
    let public_with_noise = AccessNode::for_field(0x0021);
    assert_eq!(public.node_cmp(&public_with_noise, &ctx), Ordering::Equal);
    assert_ne!(public.node_cmp(&AccessNode::for_field(0x0009), &ctx), Ordering::Equal);
}

#[test]
fn iterables_of_classes_and_methods() {
    let methods = vec![constant_method(opcodes::ICONST_1), looping_method(10)];
    let reversed = vec![looping_method(10), constant_method(opcodes::ICONST_1)];
    assert_that_methods(&methods)
        .contains_exactly_in_any_order_elements_of(&reversed)
        .unwrap();
    assert_that_methods(&methods)
        .contains_exactly_in_any_order_compare_one_by_one_elements_of(&reversed)
        .unwrap();
    let err = assert_that_methods(&methods)
        .contains_exactly_elements_of(&reversed)
        .unwrap_err();
    assert!(err.to_string().starts_with("[Element at index 0 > Has equal name] \n"));

    let classes = vec![class(0x0021, methods.clone())];
    assert_that_classes(&classes)
        .set_methods_comparison_mode(MethodsComparisonMode::Full)
        .is_equal_to(&[class(0x0021, reversed)]);
}

#[test]
fn user_supplied_label_lookups() {
    let (a, b) = (Label::new(), Label::new());

    // Without any context, labels can't be told apart
    assert_that_label(&a).is_equal_to(&b);

    let mut indices = LabelIndexMap::new();
    indices.put_all([(a, 0), (b, 1)]);
    let mut names = LabelNameMap::new();
    names.insert(a, "entry").insert(b, "exit");
    let err = assert_that_label(&a)
        .use_label_index_lookup(&indices)
        .use_label_name_lookup(&names)
        .check(&b)
        .unwrap_err();
    assert_eq!(err.to_string(), "[Label: entry] \nexpected: exit\n but was: entry");
}

#[test]
fn custom_comparator_and_representation() {
    let actual = FieldNode::new(0x0001, "x", "I");
    let expected = FieldNode::new(0x0002, "x", "I");

    let by_name = Comparator::new(
        "FieldNameComparator",
        |a: &FieldNode, b: &FieldNode, _: &Context<'_>| a.name.cmp(&b.name),
    );
    jvm_assert::assert_that_field(&actual)
        .using_comparator(by_name)
        .is_equal_to(&expected);

    let representation = Representation::new()
        .register_simplified(|field: &FieldNode, _| format!("<{}>", field.name));
    let err = jvm_assert::assert_that_field(&actual)
        .with_representation(representation)
        .check(&expected)
        .unwrap_err();
    assert!(err.to_string().starts_with("[Field: <x> > Has equal access] \n"));
}

#[test]
fn element_comparator_and_full_representation() {
    let actual = vec![FieldNode::new(0x0001, "x", "I"), FieldNode::new(0x0001, "y", "I")];
    let expected = vec![FieldNode::new(0x0002, "y", "J"), FieldNode::new(0x0002, "x", "J")];

    let by_name = Comparator::new(
        "FieldNameComparator",
        |a: &FieldNode, b: &FieldNode, _: &Context<'_>| a.name.cmp(&b.name),
    );
    assert_that_fields(&actual)
        .using_element_comparator(by_name)
        .contains_exactly_in_any_order_elements_of(&expected)
        .unwrap();

    assert_that_fields(&actual)
        .add_options([AssertOption::IgnoreAccess, AssertOption::IgnoreDescriptor])
        .contains_exactly_in_any_order_compare_one_by_one_elements_of(&expected)
        .unwrap();

    let representation =
        Representation::new().register(|field: &FieldNode, _| field.name.to_uppercase());
    let err = jvm_assert::assert_that_field(&actual[0])
        .with_representation(representation)
        .using_comparator(Comparator::natural())
        .check(&expected[1])
        .unwrap_err();
    assert_eq!(
        err.to_string(),
        "[Field: int x] \nexpected: X\n but was: X\nwhen comparing values using FieldNodeComparator"
    );
}

fn failing_path(result: Result<(), Error>) -> String {
    match result {
        Err(Error::Assertion(failure)) => failure.path(),
        other => panic!("expected an assertion failure, got {:?}", other),
    }
}

fn marker() -> Option<Vec<AnnotationNode>> {
    Some(vec![AnnotationNode::new("La/Marker;")])
}

fn type_marker(sort: u8) -> Option<Vec<TypeAnnotationNode>> {
    Some(vec![TypeAnnotationNode::new(TypeReference::new(sort).0, None, "La/Marker;")])
}

fn local_variable_marker() -> Option<Vec<LocalVariableAnnotationNode>> {
    Some(vec![LocalVariableAnnotationNode {
        type_annotation: TypeAnnotationNode::new(
            TypeReference::new(TypeReference::LOCAL_VARIABLE).0,
            None,
            "La/Marker;",
        ),
        start: vec![],
        end: vec![],
        index: vec![],
    }])
}

#[test]
fn every_class_option_ignores_its_field() {
    use AssertOption::*;
    let cases: &[(AssertOption, &str, fn(&mut ClassNode))] = &[
        (IgnoreName, "Class: class B > Has equal name", |c| c.name = String::from("B")),
        (IgnoreAccess, "Class: class A > Has equal access", |c| c.access |= 0x0010),
        (IgnoreSignature, "Class: class A > Has equal signature", |c| {
            c.signature = Some(String::from("<T:Ljava/lang/Object;>Ljava/lang/Object;"))
        }),
        (IgnoreVisibleAnnotations, "Class: class A > Has equal visible annotations", |c| {
            c.visible_annotations = marker()
        }),
        (IgnoreInvisibleAnnotations, "Class: class A > Has equal invisible annotations", |c| {
            c.invisible_annotations = marker()
        }),
        (
            IgnoreVisibleTypeAnnotations,
            "Class: class A > Has equal visible type annotations",
            |c| c.visible_type_annotations = type_marker(TypeReference::CLASS_TYPE_PARAMETER),
        ),
        (
            IgnoreInvisibleTypeAnnotations,
            "Class: class A > Has equal invisible type annotations",
            |c| c.invisible_type_annotations = type_marker(TypeReference::CLASS_EXTENDS),
        ),
        (IgnoreAttributes, "Class: class A > Has equal attributes", |c| {
            c.attributes = Some(vec![Attribute::new("Custom", &[1, 2])])
        }),
        (IgnoreVersion, "Class: class A > Has equal version", |c| c.version = 61),
        (IgnoreSuperName, "Class: class A > Has equal super name", |c| {
            c.super_name = Some(String::from("a/Base"))
        }),
        (IgnoreInterfaces, "Class: class A > Has equal interfaces", |c| {
            c.interfaces = vec![String::from("java/lang/Runnable")]
        }),
        (IgnoreSourceFile, "Class: class A > Has equal source file", |c| {
            c.source_file = Some(String::from("A.java"))
        }),
        (IgnoreSourceDebug, "Class: class A > Has equal source debug", |c| {
            c.source_debug = Some(String::from("SMAP"))
        }),
        (IgnoreOuterClass, "Class: class A > Has equal outer class", |c| {
            c.outer_class = Some(String::from("a/Outer"))
        }),
        (IgnoreOuterMethod, "Class: class A > Has equal outer method", |c| {
            c.outer_method = Some(String::from("run"))
        }),
        (
            IgnoreOuterMethodDescriptor,
            "Class: class A > Has equal outer method descriptor",
            |c| c.outer_method_desc = Some(String::from("()V")),
        ),
        (IgnoreInnerClasses, "Class: class A > Has equal inner classes", |c| {
            c.inner_classes = vec![InnerClassNode {
                name: String::from("A$B"),
                outer_name: Some(String::from("A")),
                inner_name: Some(String::from("B")),
                access: 0x0009,
            }]
        }),
        (IgnoreNestHostClass, "Class: class A > Has equal nest host class", |c| {
            c.nest_host_class = Some(String::from("a/Outer"))
        }),
        (IgnoreNestMembers, "Class: class A > Has equal nest members", |c| {
            c.nest_members = Some(vec![String::from("A$B")])
        }),
        (IgnorePermittedSubclasses, "Class: class A > Has equal permitted subclasses", |c| {
            c.permitted_subclasses = Some(vec![String::from("a/Sub")])
        }),
        (IgnoreFields, "Class: class A > Has equal fields", |c| {
            c.fields.push(FieldNode::new(0x0002, "count", "I"))
        }),
        (IgnoreMethods, "Class: class A > Has equal methods", |c| {
            c.methods.push(MethodNode::new(0x0001, "n", "()V"))
        }),
    ];

    let original = class(0x0021, vec![constant_method(opcodes::ICONST_1)]);
    for (option, path, mutate) in cases {
        let mut changed = original.clone();
        mutate(&mut changed);
        assert_that_class(&changed)
            .add_option(*option)
            .is_equal_to(&original);
        let failed_at = failing_path(assert_that_class(&changed).check(&original));
        assert_eq!(failed_at, *path, "{:?}", option);
    }
}

#[test]
fn every_method_option_ignores_its_field() {
    use AssertOption::*;
    let cases: &[(AssertOption, &str, fn(&mut MethodNode))] = &[
        (IgnoreDescriptor, "Method: spin(J)V > Has equal descriptor", |m| {
            m.desc = String::from("(J)V")
        }),
        (IgnoreSignature, "Method: spin(I)V > Has equal signature", |m| {
            m.signature = Some(String::from("<T:Ljava/lang/Object;>(I)V"))
        }),
        (IgnoreExceptions, "Method: spin(I)V > Has equal exceptions", |m| {
            m.exceptions = vec![String::from("java/io/IOException")]
        }),
        (IgnoreParameters, "Method: spin(I)V > Has equal parameters", |m| {
            m.parameters = Some(vec![ParameterNode::new("n", 0)])
        }),
        (
            IgnoreVisibleAnnotableParameterCount,
            "Method: spin(I)V > Has equal visible annotable parameter count",
            |m| m.visible_annotable_parameter_count = 1,
        ),
        (
            IgnoreInvisibleAnnotableParameterCount,
            "Method: spin(I)V > Has equal invisible annotable parameter count",
            |m| m.invisible_annotable_parameter_count = 1,
        ),
        (
            IgnoreVisibleParameterAnnotations,
            "Method: spin(I)V > Has equal visible parameter annotations",
            |m| m.visible_parameter_annotations = Some(vec![marker()]),
        ),
        (
            IgnoreInvisibleParameterAnnotations,
            "Method: spin(I)V > Has equal invisible parameter annotations",
            |m| m.invisible_parameter_annotations = Some(vec![marker()]),
        ),
        (IgnoreInstructions, "Method: spin(I)V > Has equal instructions", |m| {
            m.instructions.push(Instruction::Plain(opcodes::NOP))
        }),
        (IgnoreTryCatchBlocks, "Method: spin(I)V > Has equal try catch blocks", |m| {
            m.try_catch_blocks.clear()
        }),
        (IgnoreMaxLocals, "Method: spin(I)V > Has equal max locals", |m| m.max_locals = 5),
        (IgnoreMaxStack, "Method: spin(I)V > Has equal max stack", |m| m.max_stack = 3),
        (IgnoreLocalVariables, "Method: spin(I)V > Has equal local variables", |m| {
            m.local_variables = None
        }),
        (
            IgnoreVisibleLocalVariableAnnotations,
            "Method: spin(I)V > Has equal visible local variable annotations",
            |m| m.visible_local_variable_annotations = local_variable_marker(),
        ),
        (
            IgnoreInvisibleLocalVariableAnnotations,
            "Method: spin(I)V > Has equal invisible local variable annotations",
            |m| m.invisible_local_variable_annotations = local_variable_marker(),
        ),
        (IgnoreAnnotationDefault, "Method: spin(I)V > Has equal annotation default", |m| {
            m.annotation_default = Some(AnnotationValue::Int(1))
        }),
        (IgnoreAttributes, "Method: spin(I)V > Has equal attributes", |m| {
            m.attributes = Some(vec![Attribute::new("Custom", &[])])
        }),
        (
            IgnoreVisibleTypeAnnotations,
            "Method: spin(I)V > Has equal visible type annotations",
            |m| m.visible_type_annotations = type_marker(TypeReference::METHOD_RETURN),
        ),
    ];

    let original = looping_method(10);
    for (option, path, mutate) in cases {
        let mut changed = original.clone();
        mutate(&mut changed);
        assert_that_method(&changed)
            .add_option(*option)
            .is_equal_to(&original);
        let failed_at = failing_path(assert_that_method(&changed).check(&original));
        assert_eq!(failed_at, *path, "{:?}", option);
    }
}

#[test]
fn every_field_option_ignores_its_field() {
    use AssertOption::*;
    let cases: &[(AssertOption, &str, fn(&mut FieldNode))] = &[
        (IgnoreValue, "Field: int x > Has equal value", |f| {
            f.value = Some(ConstantValue::Int(1))
        }),
        (IgnoreSignature, "Field: int x > Has equal signature", |f| {
            f.signature = Some(String::from("TT;"))
        }),
        (IgnoreAccess, "Field: int x > Has equal access", |f| f.access |= 0x0008),
        (
            IgnoreInvisibleTypeAnnotations,
            "Field: int x > Has equal invisible type annotations",
            |f| f.invisible_type_annotations = type_marker(TypeReference::FIELD),
        ),
    ];

    let original = FieldNode::new(0x0002, "x", "I");
    for (option, path, mutate) in cases {
        let mut changed = original.clone();
        mutate(&mut changed);
        jvm_assert::assert_that_field(&changed)
            .add_option(*option)
            .is_equal_to(&original);
        let failed_at = failing_path(jvm_assert::assert_that_field(&changed).check(&original));
        assert_eq!(failed_at, *path, "{:?}", option);
    }
}

#[test]
fn type_references_by_sort() {
    let parameter = TypeReference::with_type_parameter(TypeReference::CLASS_TYPE_PARAMETER, 0);
    jvm_assert::assert_that_type_reference(&parameter).is_equal_to(&TypeReference(parameter.0));

    let err = jvm_assert::assert_that_type_reference(&parameter)
        .check(&TypeReference::new(TypeReference::FIELD))
        .unwrap_err();
    assert_eq!(
        err.to_string(),
        [
            "[Type reference: class_type_parameter=0] ",
            "expected: field",
            " but was: class_type_parameter=0",
            "when comparing values using TypeReferenceComparator",
        ]
        .join("\n")
    );
}
