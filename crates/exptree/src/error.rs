use miette::Diagnostic;
use thiserror::Error;

use crate::operator::Operator;

/// Failure modes of a build pass.
///
/// `UnknownOperator` means the classifier has no category for a code's
/// operator; everything else reports a sequence that violates the arity
/// contract (a malformed sequence). Both abort the build: there are no
/// partial trees, and retrying with the same input is pointless.
#[derive(Debug, Clone, Error, Diagnostic, PartialEq, Eq)]
pub enum BuildError {
    #[error("unknown operator `{operator}` at code {position}")]
    #[diagnostic(
        code(exptree::unknown_operator),
        help(
            "the operator is not in any recognized category; either the compiler emitted an unsupported sequence or the classifier is missing a new operator"
        )
    )]
    UnknownOperator { operator: Operator, position: usize },

    #[error("stack underflow: `{operator}` at code {position} needs two operands")]
    #[diagnostic(
        code(exptree::stack_underflow),
        help("the compiled sequence does not satisfy the operator's arity; this indicates an upstream compiler bug")
    )]
    StackUnderflow { operator: Operator, position: usize },

    #[error("`{operator}` at code {position} carries no usable operand")]
    #[diagnostic(
        code(exptree::missing_operand),
        help("value-access codes carry a column reference and constant-push codes a literal; this code has neither")
    )]
    MissingOperand { operator: Operator, position: usize },

    #[error("empty code sequence")]
    #[diagnostic(
        code(exptree::empty_sequence),
        help("a compiled expression always contains at least one code")
    )]
    EmptySequence,

    #[error("{count} unconsumed node(s) left on the stack after the final code")]
    #[diagnostic(
        code(exptree::trailing_nodes),
        help(
            "the sequence encoded more than one independent expression; enable `allow_trailing_nodes` to keep only the last one"
        )
    )]
    TrailingNodes { count: usize },
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(
        BuildError::UnknownOperator { operator: Operator::Assign, position: 3 },
        "unknown operator `assign` at code 3"
    )]
    #[case(
        BuildError::StackUnderflow { operator: Operator::And, position: 0 },
        "stack underflow: `and` at code 0 needs two operands"
    )]
    #[case(
        BuildError::MissingOperand { operator: Operator::GetValue, position: 2 },
        "`get_value` at code 2 carries no usable operand"
    )]
    #[case(BuildError::EmptySequence, "empty code sequence")]
    #[case(
        BuildError::TrailingNodes { count: 2 },
        "2 unconsumed node(s) left on the stack after the final code"
    )]
    fn test_display(#[case] error: BuildError, #[case] expected: &str) {
        assert_eq!(error.to_string(), expected);
    }
}
