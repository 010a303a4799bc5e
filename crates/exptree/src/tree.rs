//! The expression tree node model.
//!
//! Nodes are created by the tree builder in a single pass and never mutated
//! afterwards. Consumers match on the four variants; [`Node::iter`] walks the
//! tree read-only and [`Node::to_codes`] re-emits the postfix code sequence a
//! compiler would have produced for it.

use crate::{
    code::{Code, ColumnRef, Value},
    operator::Operator,
};

/// One node of a reconstructed expression tree.
///
/// Invariants:
/// - a `LogicalOperation` never directly contains a `LogicalOperation`
///   carrying the same operator (such children are flattened at
///   construction time);
/// - every node is owned by exactly one parent, so a tree is never shared
///   between roots.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    /// Leaf holding a literal pushed by the compiler.
    Constant(Value),
    /// Leaf referencing a column/field of the evaluation context.
    Variable(ColumnRef),
    /// Relation or arithmetic application; `left` was evaluated before
    /// `right` in the source expression.
    BinaryOperation {
        operator: Operator,
        left: Box<Node>,
        right: Box<Node>,
    },
    /// N-ary logical combination, children ordered left-to-right.
    LogicalOperation {
        operator: Operator,
        children: Vec<Node>,
    },
}

impl Node {
    /// The combining operator of an interior node, `None` for leaves.
    pub fn operator(&self) -> Option<Operator> {
        match self {
            Node::Constant(_) | Node::Variable(_) => None,
            Node::BinaryOperation { operator, .. } => Some(*operator),
            Node::LogicalOperation { operator, .. } => Some(*operator),
        }
    }

    /// Returns `true` for `Constant` and `Variable` nodes.
    pub fn is_leaf(&self) -> bool {
        matches!(self, Node::Constant(_) | Node::Variable(_))
    }

    /// Depth-first pre-order traversal, children visited left-to-right.
    pub fn iter(&self) -> Iter<'_> {
        Iter { stack: vec![self] }
    }

    /// Re-emits the postfix code sequence this tree reduces from.
    ///
    /// An n-ary `LogicalOperation` is emitted as the left-leaning chain of
    /// binary applications the builder flattens back, so building the
    /// returned sequence reconstructs an identical tree.
    pub fn to_codes(&self) -> Vec<Code> {
        let mut codes = Vec::new();
        self.emit(&mut codes);
        codes
    }

    fn emit(&self, codes: &mut Vec<Code>) {
        match self {
            Node::Constant(value) => codes.push(Code::push(value.clone())),
            Node::Variable(column) => codes.push(Code::get_value(column.clone())),
            Node::BinaryOperation {
                operator,
                left,
                right,
            } => {
                left.emit(codes);
                right.emit(codes);
                codes.push(Code::new(*operator));
            }
            Node::LogicalOperation { operator, children } => {
                for (i, child) in children.iter().enumerate() {
                    child.emit(codes);
                    if i > 0 {
                        codes.push(Code::new(*operator));
                    }
                }
            }
        }
    }
}

/// Iterator returned by [`Node::iter`]. Explicit stack, no recursion.
#[derive(Debug)]
pub struct Iter<'a> {
    stack: Vec<&'a Node>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = &'a Node;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        match node {
            Node::Constant(_) | Node::Variable(_) => {}
            Node::BinaryOperation { left, right, .. } => {
                self.stack.push(right);
                self.stack.push(left);
            }
            Node::LogicalOperation { children, .. } => {
                self.stack.extend(children.iter().rev());
            }
        }
        Some(node)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::operator::Operator;

    fn variable(name: &str) -> Node {
        Node::Variable(ColumnRef::new(name))
    }

    #[test]
    fn test_operator_accessor() {
        assert_eq!(variable("a").operator(), None);
        assert_eq!(Node::Constant(1.into()).operator(), None);

        let binary = Node::BinaryOperation {
            operator: Operator::Equal,
            left: Box::new(variable("a")),
            right: Box::new(Node::Constant(1.into())),
        };
        assert_eq!(binary.operator(), Some(Operator::Equal));
    }

    #[test]
    fn test_iter_visits_pre_order_left_to_right() {
        let tree = Node::LogicalOperation {
            operator: Operator::Or,
            children: vec![
                Node::BinaryOperation {
                    operator: Operator::Match,
                    left: Box::new(variable("a")),
                    right: Box::new(Node::Constant("x".into())),
                },
                variable("b"),
            ],
        };

        let names: Vec<_> = tree
            .iter()
            .map(|node| match node {
                Node::Variable(column) => column.name().to_string(),
                Node::Constant(value) => value.to_string(),
                other => other.operator().unwrap().to_string(),
            })
            .collect();
        assert_eq!(names, ["or", "match", "a", "x", "b"]);
    }

    #[test]
    fn test_to_codes_binary() {
        let tree = Node::BinaryOperation {
            operator: Operator::Less,
            left: Box::new(variable("age")),
            right: Box::new(Node::Constant(40.into())),
        };
        assert_eq!(
            tree.to_codes(),
            vec![
                Code::get_value("age"),
                Code::push(40),
                Code::new(Operator::Less),
            ]
        );
    }

    #[test]
    fn test_to_codes_logical_chain() {
        let tree = Node::LogicalOperation {
            operator: Operator::And,
            children: vec![variable("a"), variable("b"), variable("c")],
        };
        assert_eq!(
            tree.to_codes(),
            vec![
                Code::get_value("a"),
                Code::get_value("b"),
                Code::new(Operator::And),
                Code::get_value("c"),
                Code::new(Operator::And),
            ]
        );
    }
}
