//! Conversion tests
//!
//! Model → Markdown tree → Markdown text. Text output is checked either with
//! inline snapshots or by parsing it back with comrak and walking the AST.

mod consistency;
mod markdown;
