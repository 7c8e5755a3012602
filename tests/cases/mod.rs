#![allow(dead_code)]

use once_cell::sync::Lazy;
use svexpr::{ExpressionParser, ParameterTable};

/// Parameters shared by the integration tests.
pub static PARAMETERS: Lazy<ParameterTable> = Lazy::new(|| {
    ParameterTable::new()
        .with("one", "1")
        .with("two", "2")
        .with("first", "1")
        .with("second", "2*first")
        .with("third", "second**second")
        .with("firstValue", "30")
        .with("secondValue", "0.751")
        .with("hexFirst", "'h1")
        .with("hexSecond", "2*hexFirst")
        .with("hexAlias", "hexFirst")
        .with("DEPTH", "'h400")
        .with("ADDR_WIDTH", "$clog2(DEPTH)")
        .with("zero", "0")
        .with("name", "\"core\"")
        .with("bounds", "{ADDR_WIDTH-1, 0}")
        .with("blank", "")
        .with("cycleA", "cycleB")
        .with("cycleB", "cycleA")
        .with("cycleC", "cycleD + 1")
        .with("cycleD", "2 * cycleE")
        .with("cycleE", "cycleC")
        .with("selfRef", "selfRef + 1")
});

pub fn parser() -> ExpressionParser<&'static ParameterTable> {
    ExpressionParser::new(&*PARAMETERS)
}

/// Declares a test that evaluates `input` against [`PARAMETERS`] and checks
/// the formatted result.
#[allow(unused_macros)]
macro_rules! test_case {
    ($name:ident, input: $input:expr, output: $output:expr $(,)?) => {
        #[test]
        fn $name() {
            let parser = crate::cases::parser();
            pretty_assertions::assert_eq!(
                parser.parse_expression($input),
                $output,
                "input: {:?}",
                $input
            );
        }
    };
}
