use crate::jvm::model::{Instruction, MethodNode};
use crate::jvm::Label;
use std::collections::HashSet;

/// Labels which must survive line number removal
///
/// A label is anchored if anything other than a line number refers to it: instructions, try-catch
/// blocks, local variable ranges, and local variable annotation ranges.
pub fn anchored_labels(method: &MethodNode) -> HashSet<Label> {
    let mut anchored = instruction_anchors(&method.instructions);

    for block in &method.try_catch_blocks {
        anchored.extend([block.start, block.end, block.handler]);
    }
    for variable in method.local_variables.iter().flatten() {
        anchored.extend([variable.start, variable.end]);
    }
    let local_variable_annotations = method
        .visible_local_variable_annotations
        .iter()
        .chain(method.invisible_local_variable_annotations.iter())
        .flatten();
    for annotation in local_variable_annotations {
        anchored.extend(annotation.start.iter().copied());
        anchored.extend(annotation.end.iter().copied());
    }

    anchored
}

/// Labels referenced from instructions (jump targets, switch targets, uninitialized frame values)
pub fn instruction_anchors(instructions: &[Instruction]) -> HashSet<Label> {
    instructions
        .iter()
        .filter(|instruction| {
            !matches!(
                instruction,
                Instruction::Label(_) | Instruction::LineNumber { .. }
            )
        })
        .flat_map(Instruction::labels)
        .collect()
}

/// Copy of the instructions without line numbers and without the labels that only existed for
/// those line numbers
pub fn filter_line_numbers_insns(
    instructions: &[Instruction],
    anchored: &HashSet<Label>,
) -> Vec<Instruction> {
    let filtered: Vec<Instruction> = instructions
        .iter()
        .filter(|instruction| match instruction {
            Instruction::LineNumber { .. } => false,
            Instruction::Label(label) => anchored.contains(label),
            _ => true,
        })
        .cloned()
        .collect();
    log::debug!(
        "Removed {} line number instructions and labels",
        instructions.len() - filtered.len()
    );
    filtered
}

/// Copy of the method whose instructions have no line number information
///
/// Everything except for the instruction list is left as is.
pub fn filter_line_numbers(method: &MethodNode) -> MethodNode {
    let anchored = anchored_labels(method);
    let mut filtered = method.clone();
    filtered.instructions = filter_line_numbers_insns(&method.instructions, &anchored);
    filtered
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::jvm::model::{LocalVariableNode, TryCatchBlockNode};
    use crate::jvm::opcodes;

    #[test]
    fn removes_line_anchors_only() {
        let (line, target) = (Label::new(), Label::new());
        let (scope_end, plain) = (Label::new(), Label::new());
        let mut method = MethodNode::new(0, "m", "()V");
        method.instructions = vec![
            Instruction::Label(line),
            Instruction::LineNumber { line: 1, start: line },
            Instruction::Jump(opcodes::GOTO, target),
            Instruction::Label(plain),
            Instruction::Label(target),
            Instruction::Plain(opcodes::RETURN),
            Instruction::Label(scope_end),
        ];
        method.local_variables = Some(vec![LocalVariableNode::new(
            "this", "LA;", target, scope_end, 0,
        )]);

        let filtered = filter_line_numbers(&method);
        assert_eq!(
            filtered.instructions,
            vec![
                Instruction::Jump(opcodes::GOTO, target),
                Instruction::Label(target),
                Instruction::Plain(opcodes::RETURN),
                Instruction::Label(scope_end),
            ]
        );
    }

    #[test]
    fn keeps_exception_ranges() {
        let (start, end, handler) = (Label::new(), Label::new(), Label::new());
        let mut method = MethodNode::new(0, "m", "()V");
        method.instructions = vec![
            Instruction::Label(start),
            Instruction::LineNumber { line: 4, start },
            Instruction::Plain(opcodes::NOP),
            Instruction::Label(end),
            Instruction::Label(handler),
            Instruction::Plain(opcodes::ATHROW),
        ];
        method.try_catch_blocks = vec![TryCatchBlockNode::new(start, end, handler, None)];

        let filtered = filter_line_numbers(&method);
        assert_eq!(filtered.instructions.len(), 5);
        assert!(filtered
            .instructions
            .iter()
            .all(|instruction| !matches!(instruction, Instruction::LineNumber { .. })));
    }
}
