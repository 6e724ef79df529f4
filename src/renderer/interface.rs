use crate::{blocks::Blocks, error::Result};

/// String-keyed data passed to an engine, either as construction parameters or
/// as per-render data.
pub type Data = serde_json::Map<String, serde_json::Value>;

/// A concrete template: decides which blocks and scopes a render uses.
pub trait Template {
    /// Declares the blocks for one render.
    ///
    /// Called exactly once at the start of every render, before any block is
    /// made. The returned table must declare a `layout` block, otherwise the
    /// render fails when it resolves the layout.
    ///
    /// # Arguments
    /// * `params` - Parameters the engine was constructed with
    /// * `data` - Data passed to this render
    ///
    /// # Returns
    /// * `Result<Blocks>` - Block files and variable scopes for the render
    fn init(&self, params: &Data, data: &Data) -> Result<Blocks>;
}

impl<F> Template for F
where
    F: Fn(&Data, &Data) -> Result<Blocks>,
{
    fn init(&self, params: &Data, data: &Data) -> Result<Blocks> {
        self(params, data)
    }
}
