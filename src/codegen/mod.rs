//! Textual animation declarations built from pipeline output.

/// CSS `@keyframes` / `offset-path` output.
pub mod css;
