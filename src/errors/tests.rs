//! Unit tests for error handling.
//!
//! This module contains tests for error types and error reporting.

use crate::errors::errors::{Error, ErrorImpl, ErrorTip};
use crate::Position;
use std::rc::Rc;

#[test]
fn test_error_creation() {
    let error = Error::new(
        ErrorImpl::UnsupportedCharacter { character: '#' },
        Position(10, Rc::new("test.cl".to_string())),
    );

    assert_eq!(error.get_error_name(), "UnsupportedCharacter");
}

#[test]
fn test_error_position() {
    let pos = Position(42, Rc::new("test.cl".to_string()));
    let error = Error::new(
        ErrorImpl::UnexpectedToken {
            expected: "CloseParen".to_string(),
            found: "EOF".to_string(),
        },
        pos.clone(),
    );

    assert_eq!(error.get_position().0, 42);
}

#[test]
fn test_unexpected_token_error() {
    let error = Error::new(
        ErrorImpl::UnexpectedToken {
            expected: "an operator".to_string(),
            found: "Dot".to_string(),
        },
        Position(0, Rc::new("test.cl".to_string())),
    );

    assert_eq!(error.get_error_name(), "UnexpectedToken");
}

#[test]
fn test_number_parse_error() {
    let error = Error::new(
        ErrorImpl::NumberParseError {
            literal: "99999999999999999999".to_string(),
        },
        Position(0, Rc::new("test.cl".to_string())),
    );

    assert_eq!(error.get_error_name(), "NumberParseError");

    match error.get_tip() {
        ErrorTip::Suggestion(suggestion) => {
            assert!(suggestion.contains("integer limit"));
        }
        _ => panic!("Expected suggestion tip"),
    }
}

#[test]
fn test_unexpected_end_of_input_error() {
    let error = Error::new(
        ErrorImpl::UnexpectedEndOfInput,
        Position(0, Rc::new("test.cl".to_string())),
    );

    assert_eq!(error.get_error_name(), "UnexpectedEndOfInput");
}

#[test]
fn test_invalid_expression_start_error() {
    let error = Error::new(
        ErrorImpl::InvalidExpressionStart {
            token: "CloseParen".to_string(),
        },
        Position(0, Rc::new("test.cl".to_string())),
    );

    assert_eq!(error.get_error_name(), "InvalidExpressionStart");
}

#[test]
fn test_error_tip_none() {
    let error = Error::new(
        ErrorImpl::UnsupportedCharacter { character: '#' },
        Position(0, Rc::new("test.cl".to_string())),
    );

    assert!(matches!(error.get_tip(), ErrorTip::None));
}

#[test]
fn test_error_tip_suggestion() {
    let error = Error::new(
        ErrorImpl::UnexpectedToken {
            expected: "Dot".to_string(),
            found: "Comma".to_string(),
        },
        Position(0, Rc::new("test.cl".to_string())),
    );

    match error.get_tip() {
        ErrorTip::Suggestion(suggestion) => {
            assert!(suggestion.contains("Dot"));
            assert!(suggestion.contains("Comma"));
        }
        _ => panic!("Expected suggestion tip"),
    }
}

#[test]
fn test_error_tip_display() {
    let tip = ErrorTip::Suggestion("Try this instead".to_string());
    assert_eq!(tip.to_string(), "Try this instead");

    let tip = ErrorTip::None;
    assert_eq!(tip.to_string(), "");
}

#[test]
fn test_error_impl_messages() {
    let error = ErrorImpl::UnsupportedCharacter { character: '#' };
    assert_eq!(error.to_string(), "unsupported character: '#'");

    let error = ErrorImpl::UnexpectedEndOfInput;
    assert_eq!(error.to_string(), "no expression to parse: end of input");

    let error = ErrorImpl::UnexpectedToken {
        expected: "CloseParen".to_string(),
        found: "EOF".to_string(),
    };
    assert_eq!(error.to_string(), "expected CloseParen but found EOF");
}
