use std::fs::{self};

use calcparse::{
    CalcError, ErrorKind, Limits, Session, Value,
    error::{ParseError, RuntimeError},
    evaluate,
    util::brackets::is_balanced,
};
use walkdir::WalkDir;

#[test]
fn script_fixtures_match_expected_output() {
    let mut count = 0;

    for entry in
        WalkDir::new("tests/scripts").into_iter()
                                     .filter_map(Result::ok)
                                     .filter(|e| e.path().extension().is_some_and(|ext| ext == "calc"))
    {
        let path = entry.path();
        let source =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));
        let expected_path = path.with_extension("out");
        let expected = fs::read_to_string(&expected_path).unwrap_or_else(|e| {
                                                             panic!("Failed to read {expected_path:?}: {e}")
                                                         });

        count += 1;
        let outcomes = evaluate(source.trim_end_matches('\n')).unwrap_or_else(|e| panic!("Script {path:?} failed: {e}"));
        let actual: Vec<String> = outcomes.iter().map(ToString::to_string).collect();
        let expected: Vec<&str> = expected.lines().collect();

        assert_eq!(actual, expected, "output of {path:?}");
    }

    assert!(count > 0, "No scripts found in tests/scripts");
}

fn results(src: &str) -> Vec<String> {
    match evaluate(src) {
        Ok(outcomes) => outcomes.iter().map(ToString::to_string).collect(),
        Err(e) => panic!("Script failed: {e}"),
    }
}

fn assert_result(src: &str, expected: &str) {
    let shown = results(src);
    assert_eq!(shown.last().map(String::as_str), Some(expected), "source: {src}");
}

fn assert_failure(src: &str, kind: ErrorKind) {
    match evaluate(src) {
        Ok(outcomes) => panic!("Script succeeded with {outcomes:?} but was expected to fail"),
        Err(e) => assert_eq!(e.kind(), kind, "source: {src}, error: {e}"),
    }
}

#[test]
fn assignment_echoes_binding() {
    assert_eq!(results("x = 5"), ["x = 5"]);
    assert_eq!(results("x = 1\nx = 2\nx"), ["x = 1", "x = 2", "2"]);
    assert_eq!(results("y = 3\ny\ny"), ["y = 3", "3", "3"]);
}

#[test]
fn operator_precedence() {
    assert_result("2 + 3 * 4", "14");
    assert_result("(2 + 3) * 4", "20");
    assert_result("10 - 4 - 3", "3");
    assert_result("2 * 3 % 4", "2");
    assert_result("2 ^ 3 ^ 2", "64");
    assert_result("-2 ^ 2", "4");
    assert_result("2 ^ 3!", "64");
    assert_result("--3", "3");
    assert_result("3!!", "720");
}

#[test]
fn decimal_arithmetic() {
    assert_result("1 / 4", "0.25");
    assert_result("1 / 3", "0.3333333333333333333333333333");
    assert_result("2 / 3", "0.6666666666666666666666666667");
    assert_result("0.1 + 0.2", "0.3");
    assert_result("1.50 + 1", "2.50");
    assert_result("10 / 4", "2.5");
    assert_result("2.", "2");
    assert_result(".5", "0.5");
    assert_result("7 % 3", "1");
    assert_result("-7 % 3", "-1");
}

#[test]
fn power_guard_and_results() {
    assert_result("2 ^ 10", "1024");
    assert_result("2 ^ -2", "0.25");
    assert_result("200 ^ 0", "1");
    assert_result("2 ^ 100", "1.267650600228229401496703205E+30");
    assert_result("0 ^ -1", "Infinity");

    assert_failure("2 ^ 201", ErrorKind::Overflow);
    assert_failure("201 ^ 1", ErrorKind::Overflow);
    assert_failure("inf ^ 2", ErrorKind::Overflow);
    assert_failure("0 ^ 0", ErrorKind::InvalidOperation);
    assert_failure("(-8) ^ 0.5", ErrorKind::InvalidOperation);
    assert_failure("nan ^ 2", ErrorKind::InvalidOperation);
}

#[test]
fn fractional_powers_are_decimal() {
    assert_result("2 ^ 0.5", "1.414213562373095048801688724");
    assert_result("4 ^ 0.5", "2.000000000000000000000000000");
    assert_result("0 ^ 0.5", "0");
    assert_result("0 ^ -0.5", "Infinity");
    assert_result("100 ^ 0.5", "10.00000000000000000000000000");
}

#[test]
fn huge_exponents_stay_in_range() {
    let underflow = "0E-1000026";
    assert_result("100 ^ -9000000000000000000", underflow);
    assert_result("10 ^ -200 ^ 200 ^ 200", underflow);
    assert_result("2 ^ -10000000.5", underflow);
    assert_result("1 ^ -9000000000000000000000", "1");
    assert_result("(-1) ^ -9000000000000000000001", "-1");

    assert_failure("0.5 ^ -1000000000000 + 1", ErrorKind::Overflow);
    assert_failure("1 / (10 ^ -200 ^ 200 ^ 25)", ErrorKind::Overflow);
    assert_failure("0.5 ^ -10000000.5", ErrorKind::Overflow);
}

#[test]
fn remainder_needs_a_small_quotient() {
    assert_result("(10 ^ 20) % 3", "1");
    assert_failure("(10 ^ 40) % 3", ErrorKind::InvalidOperation);
}

#[test]
fn literals_display_as_written() {
    let integers = ["0", "7", "42", "123456789"];
    let fractions = ["", "5", "05", "500", "0001", "1234567890123456789"];

    for int in integers {
        for frac in fractions {
            let literal = if frac.is_empty() { int.to_string() } else { format!("{int}.{frac}") };

            assert_result(&literal, &literal);
            assert_result(&format!("{literal} + 0"), &literal);
            if literal != "0" {
                assert_result(&format!("-{literal}"), &format!("-{literal}"));
            }
        }
    }

    // Leading integer zeros are not part of the value.
    assert_result("007", "7");
    assert_result("00.50", "0.50");
}

#[test]
fn factorial_guard_and_results() {
    assert_result("5!", "120");
    assert_result("0!", "1");
    assert_result("25!", "15511210043330979612852224");
    assert_result("50!", "30414093201713375576366966406747986832057064836514787179557289984");

    let half = results("0.5!");
    assert!(half[0].starts_with("0.886226925452"), "{half:?}");

    assert_failure("51!", ErrorKind::Overflow);
    assert_failure("inf!", ErrorKind::Overflow);
    assert_failure("-3!", ErrorKind::InvalidOperation);
}

#[test]
fn builtin_functions() {
    assert_result("round(2.5)", "2");
    assert_result("round(3.5)", "4");
    assert_result("round(-2.5)", "-2");
    assert_result("sqrt(16)", "4");
    assert_result("sqrt(2)", "1.414213562373095048801688724");
    assert_result("abs(-3.5)", "3.5");
    assert_result("sin(0)", "0");
    assert_result("cos(0)", "1");

    assert_failure("sqrt(-1)", ErrorKind::InvalidOperation);
    assert_failure("sin(inf)", ErrorKind::InvalidOperation);
    assert_failure("round(inf)", ErrorKind::Overflow);
}

#[test]
fn constants_and_special_values() {
    assert_result("pi", "3.141592653589793115997963468544185161590576171875");
    assert_result("inf", "Infinity");
    assert_result("-inf", "-Infinity");
    assert_result("nan", "NaN");
    assert_result("nan + 1", "NaN");
    assert_result("1 / inf", "0");

    assert_failure("inf - inf", ErrorKind::InvalidOperation);
    assert_failure("0 * inf", ErrorKind::InvalidOperation);
}

#[test]
fn division_by_zero_is_error() {
    assert_failure("1 / 0", ErrorKind::DivisionByZero);
    assert_failure("0 / 0", ErrorKind::InvalidOperation);
    assert_failure("5 % 0", ErrorKind::InvalidOperation);
}

#[test]
fn reserved_names_cannot_be_assigned() {
    for src in ["pi = 3", "e = 1", "inf = 2", "sqrt = 1", "round = 0"] {
        assert_failure(src, ErrorKind::KeywordConflict);
    }
}

#[test]
fn unknown_names_are_errors() {
    let err = evaluate("y + 1").unwrap_err();
    assert_eq!(err,
               CalcError::Runtime(RuntimeError::UndefinedVariable { name: "y".to_string(),
                                                                    line: 1, }));

    assert_failure("foo(1)", ErrorKind::UndefinedReference);
    assert_failure("sqrt", ErrorKind::UndefinedReference);
    assert_failure("x(2)", ErrorKind::UndefinedReference);
}

#[test]
fn syntax_errors() {
    for src in ["", "\n\n", "2 +", "(2", "2)", "2 3", "= 3", "x = ", "sqrt(", "*"] {
        assert_failure(src, ErrorKind::Syntax);
    }

    assert_eq!(evaluate("1\n2 3").unwrap_err(),
               CalcError::Parse(ParseError::UnexpectedToken { token: "3".to_string(),
                                                              line:  2, }));
}

#[test]
fn lexical_errors_surface_when_reached() {
    assert_failure("2 $ 3", ErrorKind::Lexical);
    assert_failure("1 + 1 #", ErrorKind::Lexical);

    assert_eq!(evaluate("1\n2\n$").unwrap_err(),
               CalcError::Parse(ParseError::UnexpectedCharacter { token: "$".to_string(),
                                                                  line:  3, }));

    let mut session = Session::new();
    assert!(session.evaluate("x = 1\ny = $").is_err());
    assert_eq!(session.variable("x"), Some(&Value::integer(1)));
    assert_eq!(session.variable("y"), None);
}

#[test]
fn newlines_only_separate_statements() {
    assert_eq!(results("1\n2"), ["1", "2"]);
    assert_eq!(results("1 + 1\r"), ["2"]);

    assert_eq!(evaluate("1\n").unwrap_err(),
               CalcError::Parse(ParseError::UnexpectedEndOfInput { line: 1 }));
    assert_eq!(evaluate("1\n\n2").unwrap_err(),
               CalcError::Parse(ParseError::UnexpectedToken { token: "newline".to_string(),
                                                              line:  2, }));
    assert_eq!(evaluate("\n1").unwrap_err(),
               CalcError::Parse(ParseError::UnexpectedToken { token: "newline".to_string(),
                                                              line:  1, }));
    assert_failure("1 + 1\r\n", ErrorKind::Syntax);

    let mut session = Session::new();
    assert!(session.evaluate("x = 1\n").is_err());
    assert_eq!(session.variable("x"), Some(&Value::integer(1)));
}

#[test]
fn failure_keeps_earlier_statements() {
    let mut session = Session::new();

    let err = session.evaluate("a = 2\nb = a / 0\nc = 3").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::DivisionByZero);

    assert_eq!(session.variable("a"), Some(&Value::integer(2)));
    assert_eq!(session.variable("b"), None);
    assert_eq!(session.variable("c"), None);
    assert_eq!(session.results().len(), 1);

    let outcomes = session.evaluate("a * 3").unwrap();
    assert_eq!(outcomes[0].value(), &Value::integer(6));
    assert_eq!(session.results().len(), 2);
}

#[test]
fn custom_limits() {
    let mut narrow = Session::with_limits(Limits { precision: 5,
                                                   ..Limits::default() });
    assert_eq!(narrow.evaluate("1 / 3").unwrap()[0].to_string(), "0.33333");

    let mut strict = Session::with_limits(Limits { power_limit: 10,
                                                   factorial_limit: 3,
                                                   ..Limits::default() });
    assert_eq!(strict.evaluate("2 ^ 11").unwrap_err().kind(), ErrorKind::Overflow);
    assert_eq!(strict.evaluate("4!").unwrap_err().kind(), ErrorKind::Overflow);
    assert_eq!(strict.evaluate("3!").unwrap()[0].to_string(), "6");
}

#[test]
fn bracket_matching() {
    assert!(is_balanced("([{}])"));
    assert!(!is_balanced("([)]"));
    assert!(!is_balanced("((("));
    assert!(is_balanced(""));
}

/// `S := "" | open S close S`, tried on every split.
fn derives_balanced(s: &[u8]) -> bool {
    let Some((&first, rest)) = s.split_first() else {
        return true;
    };
    let close = match first {
        b'(' => b')',
        b'[' => b']',
        b'{' => b'}',
        _ => return false,
    };
    (0..rest.len()).any(|j| {
                       rest[j] == close && derives_balanced(&rest[..j]) && derives_balanced(&rest[j + 1..])
                   })
}

#[test]
fn bracket_matching_agrees_with_grammar() {
    const ALPHABET: &[u8] = b"()[]{}";

    let mut balanced = 0;
    for len in 0..=8_u32 {
        for mut code in 0..ALPHABET.len().pow(len) {
            let mut candidate = Vec::with_capacity(len as usize);
            for _ in 0..len {
                candidate.push(ALPHABET[code % ALPHABET.len()]);
                code /= ALPHABET.len();
            }

            let text = std::str::from_utf8(&candidate).unwrap();
            let expected = derives_balanced(&candidate);
            assert_eq!(is_balanced(text), expected, "input: {text:?}");
            balanced += usize::from(expected);
        }
    }

    // 1 + 3 + 18 + 135 + 1134 balanced strings of lengths 0, 2, 4, 6 and 8.
    assert_eq!(balanced, 1291);
}
