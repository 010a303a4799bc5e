use std::fmt::{self, Display, Formatter};

/// Operator codes emitted by the expression compiler.
///
/// The tree builder understands the five categories returned by
/// [`Operator::category`]; the remaining opcodes can still appear in a
/// compiled sequence (assignments, calls, stack maintenance) and are
/// reported as unrecognized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    // Logical
    And,
    Or,
    AndNot,
    Adjust,
    // Relation
    Match,
    Near,
    Near2,
    Similar,
    Prefix,
    Suffix,
    Equal,
    NotEqual,
    Less,
    Greater,
    LessEqual,
    GreaterEqual,
    GeoWithinP5,
    GeoWithinP6,
    GeoWithinP8,
    TermExtract,
    Regexp,
    Fuzzy,
    // Arithmetic
    BitwiseOr,
    BitwiseXor,
    BitwiseAnd,
    BitwiseNot,
    ShiftLeft,
    ShiftRight,
    ShiftRightUnsigned,
    Plus,
    Minus,
    Star,
    Mod,
    // Value access
    GetValue,
    // Constant push
    Push,
    // Opcodes the tree builder does not understand
    Nop,
    Pop,
    Call,
    Assign,
    Comma,
    GetMember,
    GetRef,
    Not,
}

/// Disjoint classification of the operators the tree builder understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Logical,
    Relation,
    Arithmetic,
    ValueAccess,
    ConstantPush,
}

impl Operator {
    /// Reports which category this operator belongs to, or `None` if the
    /// tree builder does not recognize it.
    ///
    /// Pure lookup over the fixed operator set. There is deliberately no
    /// wildcard arm: adding an operator forces a classification decision.
    pub fn category(&self) -> Option<Category> {
        match self {
            Operator::And | Operator::Or | Operator::AndNot | Operator::Adjust => {
                Some(Category::Logical)
            }
            Operator::Match
            | Operator::Near
            | Operator::Near2
            | Operator::Similar
            | Operator::Prefix
            | Operator::Suffix
            | Operator::Equal
            | Operator::NotEqual
            | Operator::Less
            | Operator::Greater
            | Operator::LessEqual
            | Operator::GreaterEqual
            | Operator::GeoWithinP5
            | Operator::GeoWithinP6
            | Operator::GeoWithinP8
            | Operator::TermExtract
            | Operator::Regexp
            | Operator::Fuzzy => Some(Category::Relation),
            Operator::BitwiseOr
            | Operator::BitwiseXor
            | Operator::BitwiseAnd
            | Operator::BitwiseNot
            | Operator::ShiftLeft
            | Operator::ShiftRight
            | Operator::ShiftRightUnsigned
            | Operator::Plus
            | Operator::Minus
            | Operator::Star
            | Operator::Mod => Some(Category::Arithmetic),
            Operator::GetValue => Some(Category::ValueAccess),
            Operator::Push => Some(Category::ConstantPush),
            Operator::Nop
            | Operator::Pop
            | Operator::Call
            | Operator::Assign
            | Operator::Comma
            | Operator::GetMember
            | Operator::GetRef
            | Operator::Not => None,
        }
    }

    /// The operator's name as the engine prints it.
    pub fn name(&self) -> &'static str {
        match self {
            Operator::And => "and",
            Operator::Or => "or",
            Operator::AndNot => "and_not",
            Operator::Adjust => "adjust",
            Operator::Match => "match",
            Operator::Near => "near",
            Operator::Near2 => "near2",
            Operator::Similar => "similar",
            Operator::Prefix => "prefix",
            Operator::Suffix => "suffix",
            Operator::Equal => "equal",
            Operator::NotEqual => "not_equal",
            Operator::Less => "less",
            Operator::Greater => "greater",
            Operator::LessEqual => "less_equal",
            Operator::GreaterEqual => "greater_equal",
            Operator::GeoWithinP5 => "geo_withinp5",
            Operator::GeoWithinP6 => "geo_withinp6",
            Operator::GeoWithinP8 => "geo_withinp8",
            Operator::TermExtract => "term_extract",
            Operator::Regexp => "regexp",
            Operator::Fuzzy => "fuzzy",
            Operator::BitwiseOr => "bitwise_or",
            Operator::BitwiseXor => "bitwise_xor",
            Operator::BitwiseAnd => "bitwise_and",
            Operator::BitwiseNot => "bitwise_not",
            Operator::ShiftLeft => "shiftl",
            Operator::ShiftRight => "shiftr",
            Operator::ShiftRightUnsigned => "shiftrr",
            Operator::Plus => "plus",
            Operator::Minus => "minus",
            Operator::Star => "star",
            Operator::Mod => "mod",
            Operator::GetValue => "get_value",
            Operator::Push => "push",
            Operator::Nop => "nop",
            Operator::Pop => "pop",
            Operator::Call => "call",
            Operator::Assign => "assign",
            Operator::Comma => "comma",
            Operator::GetMember => "get_member",
            Operator::GetRef => "get_ref",
            Operator::Not => "not",
        }
    }
}

impl Display for Operator {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::and(Operator::And)]
    #[case::or(Operator::Or)]
    #[case::and_not(Operator::AndNot)]
    #[case::adjust(Operator::Adjust)]
    fn test_logical_operators(#[case] op: Operator) {
        assert_eq!(op.category(), Some(Category::Logical));
    }

    #[rstest]
    #[case::match_(Operator::Match)]
    #[case::near(Operator::Near)]
    #[case::near2(Operator::Near2)]
    #[case::similar(Operator::Similar)]
    #[case::prefix(Operator::Prefix)]
    #[case::suffix(Operator::Suffix)]
    #[case::equal(Operator::Equal)]
    #[case::not_equal(Operator::NotEqual)]
    #[case::less(Operator::Less)]
    #[case::greater(Operator::Greater)]
    #[case::less_equal(Operator::LessEqual)]
    #[case::greater_equal(Operator::GreaterEqual)]
    #[case::geo_withinp5(Operator::GeoWithinP5)]
    #[case::geo_withinp6(Operator::GeoWithinP6)]
    #[case::geo_withinp8(Operator::GeoWithinP8)]
    #[case::term_extract(Operator::TermExtract)]
    #[case::regexp(Operator::Regexp)]
    #[case::fuzzy(Operator::Fuzzy)]
    fn test_relation_operators(#[case] op: Operator) {
        assert_eq!(op.category(), Some(Category::Relation));
    }

    #[rstest]
    #[case::bitwise_or(Operator::BitwiseOr)]
    #[case::bitwise_xor(Operator::BitwiseXor)]
    #[case::bitwise_and(Operator::BitwiseAnd)]
    #[case::bitwise_not(Operator::BitwiseNot)]
    #[case::shiftl(Operator::ShiftLeft)]
    #[case::shiftr(Operator::ShiftRight)]
    #[case::shiftrr(Operator::ShiftRightUnsigned)]
    #[case::plus(Operator::Plus)]
    #[case::minus(Operator::Minus)]
    #[case::star(Operator::Star)]
    #[case::mod_(Operator::Mod)]
    fn test_arithmetic_operators(#[case] op: Operator) {
        assert_eq!(op.category(), Some(Category::Arithmetic));
    }

    #[test]
    fn test_value_access_and_constant_push() {
        assert_eq!(Operator::GetValue.category(), Some(Category::ValueAccess));
        assert_eq!(Operator::Push.category(), Some(Category::ConstantPush));
    }

    #[rstest]
    #[case::nop(Operator::Nop)]
    #[case::pop(Operator::Pop)]
    #[case::call(Operator::Call)]
    #[case::assign(Operator::Assign)]
    #[case::comma(Operator::Comma)]
    #[case::get_member(Operator::GetMember)]
    #[case::get_ref(Operator::GetRef)]
    #[case::not(Operator::Not)]
    fn test_unrecognized_operators(#[case] op: Operator) {
        assert_eq!(op.category(), None);
    }

    #[rstest]
    #[case(Operator::AndNot, "and_not")]
    #[case(Operator::ShiftRightUnsigned, "shiftrr")]
    #[case(Operator::GeoWithinP6, "geo_withinp6")]
    #[case(Operator::GetValue, "get_value")]
    fn test_display(#[case] op: Operator, #[case] expected: &str) {
        assert_eq!(op.to_string(), expected);
    }
}
