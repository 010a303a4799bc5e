//! `exptree` reconstructs nested expression trees from the flat, ordered
//! postfix code sequences an expression compiler emits.
//!
//! Downstream consumers (explainers, rewriters, pretty-printers) get a
//! structured [`Node`] tree to reason about instead of a linear instruction
//! stream. The crate never evaluates anything: it classifies operators,
//! folds the sequence over a stack, and hands the single root node to the
//! caller.
//!
//! ## Examples
//!
//! ```
//! use exptree::{Code, Node, Operator, build};
//!
//! // title match "rust" && year >= 2020, compiled to postfix
//! let codes = vec![
//!     Code::get_value("title"),
//!     Code::push("rust"),
//!     Code::new(Operator::Match),
//!     Code::get_value("year"),
//!     Code::push(2020),
//!     Code::new(Operator::GreaterEqual),
//!     Code::new(Operator::And),
//! ];
//!
//! let tree = build(codes).unwrap();
//! assert_eq!(tree.operator(), Some(Operator::And));
//!
//! // Chains of the same logical operator come back as one n-ary node.
//! match &tree {
//!     Node::LogicalOperation { children, .. } => assert_eq!(children.len(), 2),
//!     _ => unreachable!(),
//! }
//! ```

mod builder;
mod code;
mod error;
mod number;
mod operator;
mod tree;

pub use builder::{Options, TreeBuilder};
pub use code::{Code, ColumnRef, Constant, Operand, Value};
pub use error::BuildError;
pub use number::Number;
pub use operator::{Category, Operator};
pub use tree::{Iter as NodeIter, Node};

pub type BuildResult = Result<Node, BuildError>;

/// Reduces `codes` to an expression tree with default [`Options`].
pub fn build(codes: impl IntoIterator<Item = Code>) -> BuildResult {
    TreeBuilder::new().build(codes)
}
