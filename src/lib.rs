//! inlay composes documents from a layout and named blocks.
//!
//! Block files are minijinja templates. A layout includes other blocks through
//! the template functions `inset`, `inset_if`, `loop`, `head` and `end`; each
//! included block renders in its own scope and its output is trimmed and
//! re-indented before it is spliced into the caller.

/// Block declarations and scope merging.
pub mod blocks;

/// Handles argument parsing.
pub mod cli;

/// Configuration handling for inlay templates.
pub mod config;

/// Reserved names and defaults.
pub mod constants;

/// Defines custom error types.
pub mod error;

/// A set of helpers for working with the file system.
pub mod ioutils;

/// Block composition and rendering.
pub mod renderer;
