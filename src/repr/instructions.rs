use super::Textify;
use crate::jvm::model::{ConstantValue, FrameKind, FrameValue, Handle, Instruction};
use crate::jvm::opcodes;
use crate::labels::{label_name, LabelNameLookup};
use itertools::Itertools;

impl Textify for Instruction {
    fn kind_name() -> &'static str {
        "Instruction"
    }

    fn textify(&self, names: &dyn LabelNameLookup) -> String {
        let mnemonic = || self.opcode().map(opcodes::mnemonic).unwrap_or_default();
        match self {
            Instruction::Plain(_) => mnemonic(),
            Instruction::Int(opcode, operand) if *opcode == opcodes::NEWARRAY => {
                format!("{} {}", mnemonic(), opcodes::array_type_name(*operand))
            }
            Instruction::Int(_, operand) => format!("{} {}", mnemonic(), operand),
            Instruction::Var(_, var) => format!("{} {}", mnemonic(), var),
            Instruction::Type(_, class) => format!("{} {}", mnemonic(), class),
            Instruction::Field {
                owner, name, desc, ..
            } => format!("{} {}.{} : {}", mnemonic(), owner, name, desc),
            Instruction::Method {
                owner,
                name,
                desc,
                is_interface,
                ..
            } => {
                let itf = if *is_interface { " (itf)" } else { "" };
                format!("{} {}.{}{}{}", mnemonic(), owner, name, desc, itf)
            }
            Instruction::InvokeDynamic {
                name,
                desc,
                bootstrap,
                arguments,
            } => format!(
                "{} {}{} [{}{}]",
                mnemonic(),
                name,
                desc,
                textify_handle(bootstrap),
                arguments
                    .iter()
                    .map(|argument| format!(", {}", textify_constant(argument)))
                    .join("")
            ),
            Instruction::Jump(_, label) => format!("{} {}", mnemonic(), label_name(names, label)),
            Instruction::Label(label) => label_name(names, label),
            Instruction::Ldc(constant) => format!("{} {}", mnemonic(), textify_constant(constant)),
            Instruction::Iinc { var, increment } => format!("{} {} {}", mnemonic(), var, increment),
            Instruction::TableSwitch {
                min,
                default,
                labels,
                ..
            } => {
                let cases = labels
                    .iter()
                    .enumerate()
                    .map(|(offset, label)| {
                        format!("{}: {}", *min as i64 + offset as i64, label_name(names, label))
                    })
                    .chain(std::iter::once(format!("default: {}", label_name(names, default))))
                    .join(", ");
                format!("{} {}", mnemonic(), cases)
            }
            Instruction::LookupSwitch {
                default,
                keys,
                labels,
            } => {
                let cases = keys
                    .iter()
                    .zip(labels)
                    .map(|(key, label)| format!("{}: {}", key, label_name(names, label)))
                    .chain(std::iter::once(format!("default: {}", label_name(names, default))))
                    .join(", ");
                format!("{} {}", mnemonic(), cases)
            }
            Instruction::MultiANewArray { desc, dimensions } => {
                format!("{} {} {}", mnemonic(), desc, dimensions)
            }
            Instruction::Frame {
                kind,
                locals,
                stack,
            } => textify_frame(*kind, locals, stack, names),
            Instruction::LineNumber { line, start } => {
                format!("LINENUMBER {} {}", line, label_name(names, start))
            }
        }
    }
}

fn textify_frame(
    kind: FrameKind,
    locals: &[FrameValue],
    stack: &[FrameValue],
    names: &dyn LabelNameLookup,
) -> String {
    let values = |values: &[FrameValue]| {
        values
            .iter()
            .map(|value| textify_frame_value(value, names))
            .join(" ")
    };
    match kind {
        FrameKind::New | FrameKind::Full => format!(
            "FRAME {} [{}] [{}]",
            kind.name(),
            values(locals),
            values(stack)
        ),
        FrameKind::Append => format!("FRAME APPEND [{}]", values(locals)),
        FrameKind::Chop => format!("FRAME CHOP {}", locals.len()),
        FrameKind::Same => String::from("FRAME SAME"),
        FrameKind::Same1 => format!("FRAME SAME1 {}", values(stack)),
    }
}

fn textify_frame_value(value: &FrameValue, names: &dyn LabelNameLookup) -> String {
    match value {
        FrameValue::Top => String::from("T"),
        FrameValue::Integer => String::from("I"),
        FrameValue::Float => String::from("F"),
        FrameValue::Double => String::from("D"),
        FrameValue::Long => String::from("J"),
        FrameValue::Null => String::from("N"),
        FrameValue::UninitializedThis => String::from("U"),
        FrameValue::Object(class) => class.clone(),
        FrameValue::Uninitialized(label) => label_name(names, label),
    }
}

impl Textify for ConstantValue {
    fn kind_name() -> &'static str {
        "Constant"
    }

    fn textify(&self, _names: &dyn LabelNameLookup) -> String {
        textify_constant(self)
    }
}

/// Render a loadable constant the way it would appear as an `ldc` operand
pub fn textify_constant(constant: &ConstantValue) -> String {
    match constant {
        ConstantValue::Int(value) => value.to_string(),
        ConstantValue::Float(value) => format!("{:?}F", value),
        ConstantValue::Long(value) => format!("{}L", value),
        ConstantValue::Double(value) => format!("{:?}D", value),
        ConstantValue::String(value) => format!("{:?}", value),
        ConstantValue::Type(desc) => format!("{}.class", desc),
        ConstantValue::Handle(handle) => textify_handle(handle),
    }
}

pub fn textify_handle(handle: &Handle) -> String {
    let itf = if handle.is_interface { " itf" } else { "" };
    format!(
        "{}.{}{} ({}{})",
        handle.owner, handle.name, handle.desc, handle.tag, itf
    )
}

/// Render a whole instruction list, one instruction per line
///
/// Labels are flush left, everything else is indented.
pub fn textify_instructions(instructions: &[Instruction], names: &dyn LabelNameLookup) -> String {
    instructions
        .iter()
        .map(|instruction| match instruction {
            Instruction::Label(_) => instruction.textify(names),
            _ => format!("  {}", instruction.textify(names)),
        })
        .join("\n")
}
