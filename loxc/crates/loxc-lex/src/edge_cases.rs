//! Edge case tests for loxc-lex
