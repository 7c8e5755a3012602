// Tests with valid expressions for each rule in the grammar.

use crate::parser::{ExpressionGrammar, Rule};
use pest::Parser;
use pest::iterators::Pair;

fn contains_rule(pair: Pair<Rule>, target: Rule) -> bool {
    if pair.as_rule() == target {
        return true;
    }
    for inner in pair.into_inner() {
        if contains_rule(inner, target) {
            return true;
        }
    }
    false
}

macro_rules! rule_examples {
    ( $($rule:ident => [$($expr:expr),* $(,)?]),* $(,)? ) => {
        $(
            #[test]
            fn $rule() {
                let inputs = vec![$($expr),*];
                for input in inputs {
                    let result = ExpressionGrammar::parse(Rule::main, input)
                        .unwrap_or_else(|e| panic!("Failed to parse '{}': {}", input, e));
                    let root = result.into_iter().next().unwrap();
                    assert!(
                        contains_rule(root.clone(), Rule::$rule),
                        "Expected to find rule {:?} in parse tree for input '{}'",
                        Rule::$rule,
                        input
                    );
                }
            }
        )*
    };
}

rule_examples! {
    decimal => ["0", "123", "1_000", "-7"],
    real => ["0.751", "30.0", "1_0.2_5"],
    based => ["'h1F", "8'hFF", "'b1010", "'sd2", "4'sb0110", "'o17", "'7"],
    boolean => ["true", "FALSE", "True && x"],
    string => ["\"hello\"", "\"\"", "\"two words\" == s"],
    ident => ["foo", "_bar123", "trueish", "WIDTH_1"],
    aggregate => ["{1}", "{1, 2, 3}", "'{1, 2}", "{a, {b, c}}"],
    function_call => ["$clog2(8)", "$pow(2, 3)", "$sqrt(x)", "$unknown()"],
    grouped => ["(1)", "((a + b))"],
    ternary_op => ["a ? b : c", "x > 1 ? 'h1 : 'h2"],
    add => ["1 + 2", "a * (b + c)"],
    sub => ["1 - 2", "a-b"],
    mul => ["1 * 2", "a * ( b + c )"],
    div => ["1 / 2"],
    rem => ["7 % 3"],
    pow => ["2 ** 3", "a**b"],
    shl => ["1 << 4"],
    shr => ["16 >> 2"],
    lt => ["a < b"],
    gt => ["a > b"],
    le => ["a <= b"],
    ge => ["a >= b"],
    eq => ["a == b"],
    ne => ["a != b"],
    bit_and => ["a & b"],
    bit_or => ["a | b"],
    bit_xor => ["a ^ b"],
    log_and => ["a && b"],
    log_or => ["a || b"],
    neg => ["- 1", "-a", "2 * -3"],
    pos => ["+1"],
    bit_not => ["~a"],
    log_not => ["!a", "!!a"],
}
