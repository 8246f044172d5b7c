/// Maps an opening bracket to the closer that must match it.
const fn closer_of(open: char) -> Option<char> {
    match open {
        '(' => Some(')'),
        '[' => Some(']'),
        '{' => Some('}'),
        _ => None,
    }
}

/// Checks that every bracket in `text` is closed by the matching type, in
/// the reverse order it was opened.
///
/// Characters other than `()[]{}` are ignored.
///
/// # Example
/// ```
/// use calcparse::util::brackets::is_balanced;
///
/// assert!(is_balanced("([{}])"));
/// assert!(is_balanced("sqrt(2) * (1 + 3)"));
/// assert!(!is_balanced("([)]"));
/// assert!(!is_balanced("((("));
/// assert!(!is_balanced(")("));
/// ```
#[must_use]
pub fn is_balanced(text: &str) -> bool {
    let mut expected = Vec::new();

    for c in text.chars() {
        if let Some(closer) = closer_of(c) {
            expected.push(closer);
        } else if matches!(c, ')' | ']' | '}') && expected.pop() != Some(c) {
            return false;
        }
    }

    expected.is_empty()
}

#[cfg(test)]
mod tests {
    use super::is_balanced;

    #[test]
    fn empty_input_is_balanced() {
        assert!(is_balanced(""));
    }

    #[test]
    fn nested_sequences() {
        for good in ["()", "[]{}", "{[()()]}", "(((())))"] {
            assert!(is_balanced(good), "{good}");
        }
        for bad in ["(", "}", "(]", "{(})", "(()))"] {
            assert!(!is_balanced(bad), "{bad}");
        }
    }
}
