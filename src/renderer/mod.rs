//! Block composition on top of minijinja.
//!
//! - `interface`: the [`Template`] trait concrete templates implement
//! - `engine`: [`Engine`] and the per-render [`Renderer`]
//! - `session`: block resolution, scope merging and capture
//! - `helpers`: template functions exposed to block code
//! - `format`: trimming and indentation of captured output

mod engine;
mod format;
mod helpers;
mod interface;
mod session;

pub use engine::{Engine, Renderer};
pub use interface::{Data, Template};
