use exptree::{Code, Node, Operator, TreeBuilder};

fn main() {
    divan::main();
}

/// `n` leaves chained with one logical operator: the worst case for the
/// incremental flattening (every fold splices the accumulated children).
fn logical_chain(n: usize) -> Vec<Code> {
    let mut codes = Vec::with_capacity(n * 2);
    codes.push(Code::get_value("c0"));
    for i in 1..n {
        codes.push(Code::get_value(format!("c{i}").as_str()));
        codes.push(Code::new(Operator::And));
    }
    codes
}

/// A deep left-leaning arithmetic chain: `((…(x + 1) + 1) …) + 1`.
fn arithmetic_chain(n: usize) -> Vec<Code> {
    let mut codes = Vec::with_capacity(n * 2);
    codes.push(Code::get_value("x"));
    for _ in 0..n {
        codes.push(Code::push(1));
        codes.push(Code::new(Operator::Plus));
    }
    codes
}

#[divan::bench(args = [100, 10_000])]
fn build_logical_chain(bencher: divan::Bencher, n: usize) {
    let builder = TreeBuilder::new();
    bencher
        .with_inputs(|| logical_chain(n))
        .bench_values(|codes| builder.build(codes).unwrap());
}

#[divan::bench(args = [100, 10_000])]
fn build_arithmetic_chain(bencher: divan::Bencher, n: usize) {
    let builder = TreeBuilder::new();
    bencher
        .with_inputs(|| arithmetic_chain(n))
        .bench_values(|codes| builder.build(codes).unwrap());
}

#[divan::bench(args = [10_000])]
fn reemit_logical_chain(bencher: divan::Bencher, n: usize) {
    let tree: Node = TreeBuilder::new().build(logical_chain(n)).unwrap();
    bencher.bench(|| divan::black_box(&tree).to_codes());
}
