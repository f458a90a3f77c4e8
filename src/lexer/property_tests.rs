//! Property-based tests for the lexer.
//!
//! These tests use `proptest` to verify lexer invariants over generated
//! inputs:
//!
//! 1. The lexer never panics, whatever the input
//! 2. The lexer is deterministic
//! 3. Whitespace-only input yields exactly one EOF token
//! 4. In-range digit runs round-trip through `Number`
//! 5. Non-reserved identifiers carry their exact matched text
//! 6. `peek` never consumes

use proptest::prelude::*;

use super::lexer::{tokenize, Lexer};
use super::tokens::{TokenKind, RESERVED_LOOKUP};

proptest! {
    #[test]
    fn lexer_never_panics(source in ".*") {
        let _ = tokenize(source, None);
    }

    #[test]
    fn lexer_is_deterministic(source in ".*") {
        let first = tokenize(source.clone(), None);
        let second = tokenize(source, None);

        prop_assert_eq!(format!("{:?}", first), format!("{:?}", second));
    }

    #[test]
    fn whitespace_only_yields_eof(source in "[ \t\r\n]{0,40}") {
        let tokens = tokenize(source, None).unwrap();

        prop_assert_eq!(tokens.len(), 1);
        prop_assert_eq!(&tokens[0].kind, &TokenKind::EOF);
    }

    #[test]
    fn digit_runs_round_trip(value in 0i64..i64::MAX) {
        let tokens = tokenize(value.to_string(), None).unwrap();

        prop_assert_eq!(&tokens[0].kind, &TokenKind::Number(value));
        prop_assert_eq!(&tokens[1].kind, &TokenKind::EOF);
    }

    #[test]
    fn identifiers_keep_matched_text(name in "[a-zA-Z][a-zA-Z0-9]{0,12}") {
        prop_assume!(!RESERVED_LOOKUP.contains_key(name.as_str()));

        let tokens = tokenize(name.clone(), None).unwrap();

        prop_assert_eq!(&tokens[0].kind, &TokenKind::Identifier(name));
        prop_assert_eq!(&tokens[1].kind, &TokenKind::EOF);
    }

    #[test]
    fn peek_never_consumes(
        source in "[a-z0-9 ().,@^&+*/=-]{0,40}",
        peeks in 1usize..8,
    ) {
        let mut lexer = Lexer::new(source, None);

        let mut peeked = vec![];
        for _ in 0..peeks {
            peeked.push(lexer.peek().map(|t| t.kind).map_err(|e| format!("{:?}", e)));
        }

        for pair in peeked.windows(2) {
            prop_assert_eq!(&pair[0], &pair[1]);
        }

        if let Ok(kind) = &peeked[0] {
            let consumed = lexer.next().unwrap();
            prop_assert_eq!(&consumed.kind, kind);
        }
    }
}
