//! exprpad - a constrained expression-building editor core
//!
//! This crate provides the document model, sanitization pipeline, and
//! structured insertion operations for a rich-text surface that only ever
//! contains well-formed expression tokens, plus the demo shell around it.

pub mod cli;
pub mod config;
pub mod config_paths;
pub mod editor;
pub mod theme;
pub mod tracing;

// Re-export commonly used types
pub use config::EditorConfig;
pub use editor::{ExpressionEditor, HeadlessSurface, Operator};
pub use theme::Theme;
