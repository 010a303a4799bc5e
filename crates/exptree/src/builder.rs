//! Single-pass reconstruction of an expression tree from compiled codes.
//!
//! The builder folds a postfix code sequence over an explicit node stack:
//! leaves are pushed for value-access and constant-push codes, two-operand
//! operators pop `right` then `left` and push the combined node. Repeated
//! applications of the same logical operator are flattened into one n-ary
//! node as the fold proceeds, so `a b and c and` reduces to a single
//! three-child conjunction rather than a nested chain.

use tracing::trace;

use crate::{
    code::{Code, Operand},
    error::BuildError,
    operator::{Category, Operator},
    tree::Node,
};

/// Build options.
#[derive(Debug, Clone, Default)]
pub struct Options {
    /// Accept sequences that leave extra nodes on the stack after the final
    /// code and return only the last one. Off by default: leftovers usually
    /// mean a compiler bug upstream.
    pub allow_trailing_nodes: bool,
}

/// Reduces an ordered code sequence to a single expression tree.
///
/// Each call to [`TreeBuilder::build`] owns its working stack and returns a
/// self-contained tree; the builder keeps no state between calls.
///
/// # Example
///
/// ```
/// use exptree::{Code, Operator, TreeBuilder};
///
/// let codes = vec![
///     Code::get_value("size"),
///     Code::push(100),
///     Code::new(Operator::Greater),
/// ];
/// let tree = TreeBuilder::new().build(codes).unwrap();
/// assert_eq!(tree.operator(), Some(Operator::Greater));
/// ```
#[derive(Debug, Clone, Default)]
pub struct TreeBuilder {
    options: Options,
}

impl TreeBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: Options) -> Self {
        Self { options }
    }

    pub fn set_allow_trailing_nodes(&mut self, allow: bool) {
        self.options.allow_trailing_nodes = allow;
    }

    /// Reduces `codes` to the root of the reconstructed tree.
    ///
    /// Fails without returning a partial tree when a code's operator is not
    /// in any recognized category, when an operator's arity cannot be
    /// satisfied from the stack, or when the sequence is empty. Leftover
    /// stack nodes after the final code fail too unless
    /// [`Options::allow_trailing_nodes`] is set.
    pub fn build(&self, codes: impl IntoIterator<Item = Code>) -> Result<Node, BuildError> {
        let mut stack: Vec<Node> = Vec::new();

        for (position, code) in codes.into_iter().enumerate() {
            let Code { op, operand } = code;
            trace!(operator = %op, position, depth = stack.len(), "reduce");

            match op.category() {
                Some(Category::Logical) => {
                    let (left, right) = pop_operands(&mut stack, op, position)?;
                    let mut children = Vec::new();
                    push_logical_child(op, &mut children, left);
                    push_logical_child(op, &mut children, right);
                    stack.push(Node::LogicalOperation {
                        operator: op,
                        children,
                    });
                }
                Some(Category::Relation) | Some(Category::Arithmetic) => {
                    let (left, right) = pop_operands(&mut stack, op, position)?;
                    stack.push(Node::BinaryOperation {
                        operator: op,
                        left: Box::new(left),
                        right: Box::new(right),
                    });
                }
                Some(Category::ValueAccess) => match operand {
                    Some(Operand::Column(column)) => stack.push(Node::Variable(column)),
                    _ => return Err(BuildError::MissingOperand { operator: op, position }),
                },
                Some(Category::ConstantPush) => match operand {
                    Some(Operand::Constant(constant)) => {
                        stack.push(Node::Constant(constant.into_value()));
                    }
                    _ => return Err(BuildError::MissingOperand { operator: op, position }),
                },
                None => return Err(BuildError::UnknownOperator { operator: op, position }),
            }
        }

        let root = stack.pop().ok_or(BuildError::EmptySequence)?;
        if !stack.is_empty() && !self.options.allow_trailing_nodes {
            return Err(BuildError::TrailingNodes { count: stack.len() });
        }
        Ok(root)
    }
}

/// Pops the two operands of a binary-arity operator: `right` first, then
/// `left`, matching standard postfix order.
fn pop_operands(
    stack: &mut Vec<Node>,
    operator: Operator,
    position: usize,
) -> Result<(Node, Node), BuildError> {
    let right = stack.pop();
    let left = stack.pop();
    match (left, right) {
        (Some(left), Some(right)) => Ok((left, right)),
        _ => Err(BuildError::StackUnderflow { operator, position }),
    }
}

/// Appends `node` to a logical node's child list, splicing in its children
/// instead when it is itself a logical node with the same operator. Spliced
/// children are already flat, so one level is always enough.
fn push_logical_child(operator: Operator, children: &mut Vec<Node>, node: Node) {
    match node {
        Node::LogicalOperation {
            operator: child_operator,
            children: mut grandchildren,
        } if child_operator == operator => children.append(&mut grandchildren),
        node => children.push(node),
    }
}
