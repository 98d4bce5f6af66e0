//! Multi-line input completeness check for the REPL (§4.7).
//!
//! A single left-to-right scan over the accumulated buffer: track paren
//! depth, whether we're inside a string literal, and whether the next
//! character is escaped. Balanced parens outside of an open string mean
//! the expression is complete — an empty or all-whitespace buffer counts
//! as balanced too, since it hasn't opened anything yet.

/// Grounded in the original implementation's `ax_lang/cli/multiline.py`.
pub fn is_expression_complete(expr: &str) -> bool {
    let mut paren_count: i64 = 0;
    let mut in_string = false;
    let mut escape_next = false;

    for ch in expr.chars() {
        if escape_next {
            escape_next = false;
            continue;
        }
        if ch == '\\' && in_string {
            escape_next = true;
            continue;
        }
        if ch == '"' {
            in_string = !in_string;
            continue;
        }
        if in_string {
            continue;
        }
        match ch {
            '(' => paren_count += 1,
            ')' => paren_count -= 1,
            _ => {}
        }
    }

    paren_count == 0 && !in_string
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn simple_complete_expression() {
        assert!(is_expression_complete("(+ 1 2)"));
    }

    #[test]
    fn simple_incomplete_expression() {
        assert!(!is_expression_complete("(+ 1 2"));
    }

    #[test]
    fn empty_string_is_balanced() {
        assert!(is_expression_complete(""));
    }

    #[test]
    fn single_opening_paren_is_incomplete() {
        assert!(!is_expression_complete("("));
    }

    #[test]
    fn single_closing_paren_is_incomplete() {
        assert!(!is_expression_complete(")"));
    }

    #[test]
    fn nested_balanced_parens() {
        assert!(is_expression_complete("((()))"));
        assert!(is_expression_complete("(()())"));
    }

    #[test]
    fn nested_unbalanced_parens() {
        assert!(!is_expression_complete("((("));
        assert!(!is_expression_complete("((())"));
    }

    #[test]
    fn parens_inside_a_string_are_not_counted() {
        assert!(is_expression_complete(r#"(print "hello (world)")"#));
        assert!(is_expression_complete(r#"(print "(((")"#));
    }

    #[test]
    fn unclosed_string_is_incomplete() {
        assert!(!is_expression_complete(r#"(print "hello"#));
        assert!(!is_expression_complete("\"unclosed"));
    }

    #[test]
    fn escaped_quotes_are_handled() {
        assert!(is_expression_complete(r#"(print "hello \"world\"")"#));
        assert!(is_expression_complete(r#"(print "test\\")"#));
    }

    #[test]
    fn multi_line_function_definition_completes_across_lines() {
        let incomplete = "(def fibonacci (n)\n  (if (<= n 1)";
        assert!(!is_expression_complete(incomplete));

        let complete = "(def fibonacci (n)\n  (if (<= n 1)\n      n\n      (+ (fibonacci (- n 1))\n         (fibonacci (- n 2)))))";
        assert!(is_expression_complete(complete));
    }

    #[test]
    fn whitespace_only_is_balanced() {
        assert!(is_expression_complete("   "));
        assert!(is_expression_complete("\n\n"));
    }
}
