//! Scanner module.
//!
//! This module organizes the scanner implementation into smaller, focused components:
//! - `core` - Main Scanner struct and dispatch
//! - `operator` - Operator and punctuation scanning
//! - `comment` - Whitespace and comment skipping

mod comment;
mod core;
mod operator;

pub use core::Scanner;
