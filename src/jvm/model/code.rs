use crate::jvm::Label;

/// Instruction in a method body
///
/// Next to the real JVM instructions, labels, line numbers, and stack map frames are pseudo
/// instructions interleaved with the rest (they have no opcode).
#[derive(Clone, Debug, PartialEq)]
pub enum Instruction {
    /// Instruction without operands (eg. `iconst_1`, `ireturn`)
    Plain(u8),

    /// `bipush`, `sipush`, or `newarray`
    Int(u8, i32),

    /// Load, store, or `ret` of a local variable
    Var(u8, u16),

    /// `new`, `anewarray`, `checkcast`, or `instanceof` of an internal class name
    Type(u8, String),

    Field {
        opcode: u8,
        owner: String,
        name: String,
        desc: String,
    },

    Method {
        opcode: u8,
        owner: String,
        name: String,
        desc: String,
        is_interface: bool,
    },

    InvokeDynamic {
        name: String,
        desc: String,
        bootstrap: Handle,
        arguments: Vec<ConstantValue>,
    },

    /// Conditional or unconditional jump to a label
    Jump(u8, Label),

    /// Position marker
    Label(Label),

    Ldc(ConstantValue),

    Iinc {
        var: u16,
        increment: i16,
    },

    TableSwitch {
        min: i32,
        max: i32,
        default: Label,
        labels: Vec<Label>,
    },

    LookupSwitch {
        default: Label,
        keys: Vec<i32>,
        labels: Vec<Label>,
    },

    MultiANewArray {
        desc: String,
        dimensions: u8,
    },

    /// Stack map frame
    Frame {
        kind: FrameKind,
        locals: Vec<FrameValue>,
        stack: Vec<FrameValue>,
    },

    /// Source line which starts at the label
    LineNumber {
        line: u32,
        start: Label,
    },
}

impl Instruction {
    /// Opcode of the instruction, or `None` for pseudo instructions
    pub fn opcode(&self) -> Option<u8> {
        use crate::jvm::opcodes;
        match self {
            Instruction::Plain(opcode)
            | Instruction::Int(opcode, _)
            | Instruction::Var(opcode, _)
            | Instruction::Type(opcode, _)
            | Instruction::Field { opcode, .. }
            | Instruction::Method { opcode, .. }
            | Instruction::Jump(opcode, _) => Some(*opcode),
            Instruction::InvokeDynamic { .. } => Some(opcodes::INVOKEDYNAMIC),
            Instruction::Ldc(_) => Some(opcodes::LDC),
            Instruction::Iinc { .. } => Some(opcodes::IINC),
            Instruction::TableSwitch { .. } => Some(opcodes::TABLESWITCH),
            Instruction::LookupSwitch { .. } => Some(opcodes::LOOKUPSWITCH),
            Instruction::MultiANewArray { .. } => Some(opcodes::MULTIANEWARRAY),
            Instruction::Label(_) | Instruction::Frame { .. } | Instruction::LineNumber { .. } => {
                None
            }
        }
    }

    /// Position in the declaration order of the variants, used to order instructions of
    /// different shapes against each other
    pub(crate) fn variant_index(&self) -> u8 {
        match self {
            Instruction::Plain(_) => 0,
            Instruction::Int(..) => 1,
            Instruction::Var(..) => 2,
            Instruction::Type(..) => 3,
            Instruction::Field { .. } => 4,
            Instruction::Method { .. } => 5,
            Instruction::InvokeDynamic { .. } => 6,
            Instruction::Jump(..) => 7,
            Instruction::Label(_) => 8,
            Instruction::Ldc(_) => 9,
            Instruction::Iinc { .. } => 10,
            Instruction::TableSwitch { .. } => 11,
            Instruction::LookupSwitch { .. } => 12,
            Instruction::MultiANewArray { .. } => 13,
            Instruction::Frame { .. } => 14,
            Instruction::LineNumber { .. } => 15,
        }
    }

    /// Labels this instruction refers to (for a label instruction, the label itself)
    pub fn labels(&self) -> Vec<Label> {
        match self {
            Instruction::Jump(_, label) | Instruction::Label(label) => vec![*label],
            Instruction::LineNumber { start, .. } => vec![*start],
            Instruction::TableSwitch {
                default, labels, ..
            }
            | Instruction::LookupSwitch {
                default, labels, ..
            } => {
                let mut all = vec![*default];
                all.extend(labels.iter().copied());
                all
            }
            Instruction::Frame { locals, stack, .. } => locals
                .iter()
                .chain(stack.iter())
                .filter_map(|value| match value {
                    FrameValue::Uninitialized(label) => Some(*label),
                    _ => None,
                })
                .collect(),
            _ => vec![],
        }
    }
}

/// Method handle constant
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Handle {
    /// Reference kind (`REF_invokeStatic` is `6`)
    pub tag: u8,
    pub owner: String,
    pub name: String,
    pub desc: String,
    pub is_interface: bool,
}

/// Loadable constant (`ldc` operand, field initial value, bootstrap argument)
#[derive(Clone, Debug, PartialEq)]
pub enum ConstantValue {
    Int(i32),
    Float(f32),
    Long(i64),
    Double(f64),
    String(String),

    /// Class or method type, as a descriptor
    Type(String),
    Handle(Handle),
}

impl ConstantValue {
    pub(crate) fn variant_index(&self) -> u8 {
        match self {
            ConstantValue::Int(_) => 0,
            ConstantValue::Float(_) => 1,
            ConstantValue::Long(_) => 2,
            ConstantValue::Double(_) => 3,
            ConstantValue::String(_) => 4,
            ConstantValue::Type(_) => 5,
            ConstantValue::Handle(_) => 6,
        }
    }
}

/// Kind of a stack map frame
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FrameKind {
    /// Expanded frame
    New,
    Full,
    Append,
    Chop,
    Same,
    Same1,
}

impl FrameKind {
    pub fn name(self) -> &'static str {
        match self {
            FrameKind::New => "NEW",
            FrameKind::Full => "FULL",
            FrameKind::Append => "APPEND",
            FrameKind::Chop => "CHOP",
            FrameKind::Same => "SAME",
            FrameKind::Same1 => "SAME1",
        }
    }
}

/// Verification type in a stack map frame
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum FrameValue {
    Top,
    Integer,
    Float,
    Double,
    Long,
    Null,
    UninitializedThis,

    /// Internal class name
    Object(String),

    /// Value produced by the `new` instruction right after the label
    Uninitialized(Label),
}

impl FrameValue {
    pub(crate) fn variant_index(&self) -> u8 {
        match self {
            FrameValue::Top => 0,
            FrameValue::Integer => 1,
            FrameValue::Float => 2,
            FrameValue::Double => 3,
            FrameValue::Long => 4,
            FrameValue::Null => 5,
            FrameValue::UninitializedThis => 6,
            FrameValue::Object(_) => 7,
            FrameValue::Uninitialized(_) => 8,
        }
    }
}

/// Exception handler covering the range `[start, end)`
#[derive(Clone, Debug, PartialEq)]
pub struct TryCatchBlockNode {
    pub start: Label,
    pub end: Label,
    pub handler: Label,

    /// Internal name of the caught exception, `None` for `finally` blocks
    pub catch_type: Option<String>,

    pub visible_type_annotations: Option<Vec<super::TypeAnnotationNode>>,
    pub invisible_type_annotations: Option<Vec<super::TypeAnnotationNode>>,
}

impl TryCatchBlockNode {
    pub fn new(
        start: Label,
        end: Label,
        handler: Label,
        catch_type: Option<&str>,
    ) -> TryCatchBlockNode {
        TryCatchBlockNode {
            start,
            end,
            handler,
            catch_type: catch_type.map(str::to_owned),
            visible_type_annotations: None,
            invisible_type_annotations: None,
        }
    }
}

/// Local variable debug information, live in `[start, end)`
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LocalVariableNode {
    pub name: String,
    pub desc: String,
    pub signature: Option<String>,
    pub start: Label,
    pub end: Label,
    pub index: u16,
}

impl LocalVariableNode {
    pub fn new(name: &str, desc: &str, start: Label, end: Label, index: u16) -> LocalVariableNode {
        LocalVariableNode {
            name: name.to_owned(),
            desc: desc.to_owned(),
            signature: None,
            start,
            end,
            index,
        }
    }
}
