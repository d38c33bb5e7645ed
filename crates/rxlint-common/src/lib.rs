//! Common types and utilities for rxlint.
//!
//! This crate provides foundational types used across all rxlint crates:
//! - Source spans (`Span`)
//! - Diagnostic types and the message table
//! - Traversal and resolution limits

// Span - Source location tracking (byte offsets)
pub mod span;
pub use span::Span;

// Centralized limits and thresholds
pub mod limits;

pub mod diagnostics;
pub use diagnostics::{
    Diagnostic, DiagnosticCategory, DiagnosticMessage, diagnostic_codes, diagnostic_messages,
    format_message,
};
