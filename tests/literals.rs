#[macro_use]
mod cases;

test_case!(decimal, input: "1", output: "1");
test_case!(decimal_with_separators, input: "1_000", output: "1000");
test_case!(negative_decimal, input: "-42", output: "-42");
test_case!(real, input: "0.751", output: "0.751");
test_case!(real_sum_keeps_fraction, input: "1.0+1.0", output: "2.0");
test_case!(integral_real_product, input: "2*0.5", output: "1.0");

test_case!(unsized_hex, input: "'h10", output: "16");
test_case!(sized_hex, input: "8'hFF", output: "255");
test_case!(binary, input: "'b1010", output: "10");
test_case!(octal, input: "'o17", output: "15");
test_case!(uppercase_radix, input: "'HfF", output: "255");
test_case!(tick_without_radix, input: "'2", output: "2");
test_case!(signed_marker, input: "'sd2", output: "2");
test_case!(sized_signed_binary, input: "4'sb0110", output: "6");
test_case!(negated_based, input: "-'h10", output: "-16");
// The declared size is advisory.
test_case!(digits_exceed_size, input: "4'hFFF", output: "4095");

test_case!(booleans_are_case_insensitive, input: "True + false + true", output: "2");
test_case!(string, input: "\"text\"", output: "\"text\"");

test_case!(aggregate, input: "{'h10,'h14}", output: "{16,20}");
test_case!(tick_aggregate, input: "'{1, 2}", output: "{1,2}");
test_case!(nested_aggregate, input: "{1,{1,1}}", output: "{1,{1,1}}");
test_case!(aggregate_of_expressions, input: "{1+1, 2*'h2}", output: "{2,4}");
test_case!(aggregate_arithmetic, input: "{1,1}+1", output: "x");

test_case!(c_style_hex, input: "0xff", output: "x");
test_case!(bare_letters, input: "ff", output: "x");
test_case!(hash_prefix, input: "#ff", output: "x");
test_case!(unterminated_string, input: "\"text", output: "x");
test_case!(bad_binary_digit, input: "'b102", output: "x");
test_case!(too_large, input: "99999999999999999999", output: "x");
test_case!(empty, input: "", output: "x");
test_case!(blank, input: "   ", output: "x");
test_case!(empty_parens, input: "()", output: "x");
test_case!(empty_aggregate, input: "{}", output: "x");
