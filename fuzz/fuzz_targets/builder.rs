#![no_main]

use arbitrary::Arbitrary;
use exptree::{Code, Operator, Options, TreeBuilder};
use itertools::Itertools;
use libfuzzer_sys::fuzz_target;

const OPERATORS: &[Operator] = &[
    Operator::And,
    Operator::Or,
    Operator::AndNot,
    Operator::Adjust,
    Operator::Match,
    Operator::Near,
    Operator::Similar,
    Operator::Prefix,
    Operator::Suffix,
    Operator::Equal,
    Operator::NotEqual,
    Operator::Less,
    Operator::Greater,
    Operator::LessEqual,
    Operator::GreaterEqual,
    Operator::Regexp,
    Operator::Fuzzy,
    Operator::BitwiseOr,
    Operator::BitwiseXor,
    Operator::BitwiseAnd,
    Operator::ShiftLeft,
    Operator::ShiftRight,
    Operator::Plus,
    Operator::Minus,
    Operator::Star,
    Operator::Mod,
    // Opcodes the builder must reject, not crash on.
    Operator::Nop,
    Operator::Pop,
    Operator::Call,
    Operator::Assign,
    Operator::Comma,
    Operator::GetMember,
    Operator::GetRef,
    Operator::Not,
];

#[derive(Debug, Clone, Arbitrary)]
enum ArbitraryCode {
    GetValue(String),
    PushNumber(i64),
    PushText(String),
    PushBool(bool),
    Operator(u8),
    // Malformed codes: operand-carrying operators without an operand.
    BareGetValue,
    BarePush,
}

impl ArbitraryCode {
    fn to_code(&self) -> Code {
        match self {
            ArbitraryCode::GetValue(name) => Code::get_value(name.as_str()),
            ArbitraryCode::PushNumber(n) => Code::push(*n),
            ArbitraryCode::PushText(s) => Code::push(s.as_str()),
            ArbitraryCode::PushBool(b) => Code::push(*b),
            ArbitraryCode::Operator(i) => {
                Code::new(OPERATORS[*i as usize % OPERATORS.len()])
            }
            ArbitraryCode::BareGetValue => Code::new(Operator::GetValue),
            ArbitraryCode::BarePush => Code::new(Operator::Push),
        }
    }
}

#[derive(Debug, Clone, Arbitrary)]
struct Context {
    codes: Vec<ArbitraryCode>,
    allow_trailing_nodes: bool,
}

fuzz_target!(|context: Context| {
    let builder = TreeBuilder::with_options(Options {
        allow_trailing_nodes: context.allow_trailing_nodes,
    });
    let codes = context.codes.iter().map(|code| code.to_code()).collect_vec();

    if let Ok(tree) = builder.build(codes) {
        // A built tree re-emits a sequence that rebuilds it exactly.
        let rebuilt = builder.build(tree.to_codes()).unwrap();
        assert_eq!(tree, rebuilt);
    }
});
