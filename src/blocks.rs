//! Block declarations for a single render.
//!
//! A [`Blocks`] table is what a [`Template`](crate::renderer::Template) hands
//! back from `init`: which file backs each logical block and which variables
//! each scope contributes. Scope resolution is a pure function of this table
//! and the call-site variables.

use crate::constants::names;
use indexmap::IndexMap;
use log::debug;
use minijinja::value::{Value, ValueKind};
use serde::Serialize;

/// Merged variables visible to one block while it renders.
pub type Scope = IndexMap<String, Value>;

/// Block files and variable scopes declared for one render.
#[derive(Debug, Clone, Default)]
pub struct Blocks {
    files: IndexMap<String, String>,
    vars: IndexMap<String, Value>,
}

impl Blocks {
    pub fn new() -> Self {
        Self::default()
    }

    /// Declares the file (without extension) backing `block`.
    pub fn block(mut self, block: impl Into<String>, file: impl Into<String>) -> Self {
        self.set_block(block, file);
        self
    }

    /// Declares the variables of `scope`.
    ///
    /// Any serializable value is accepted. Values that do not serialize to a
    /// mapping are kept but contribute nothing when scopes are merged.
    pub fn vars<S: Serialize>(mut self, scope: impl Into<String>, vars: S) -> Self {
        self.set_vars(scope, vars);
        self
    }

    /// Shorthand for declaring the `common` scope.
    pub fn common<S: Serialize>(self, vars: S) -> Self {
        self.vars(names::COMMON, vars)
    }

    /// Shorthand for declaring the file of the `layout` block.
    pub fn layout(self, file: impl Into<String>) -> Self {
        self.block(names::LAYOUT, file)
    }

    pub fn set_block(&mut self, block: impl Into<String>, file: impl Into<String>) {
        self.files.insert(block.into(), file.into());
    }

    pub fn set_vars<S: Serialize>(&mut self, scope: impl Into<String>, vars: S) {
        self.vars.insert(scope.into(), Value::from_serialize(vars));
    }

    /// Returns the file declared for `block`, if any.
    pub fn file(&self, block: &str) -> Option<&str> {
        self.files.get(block).map(String::as_str)
    }

    pub fn is_declared(&self, block: &str) -> bool {
        self.files.contains_key(block)
    }

    /// Returns the raw value declared for `scope`, if any.
    pub fn scope_vars(&self, scope: &str) -> Option<&Value> {
        self.vars.get(scope)
    }

    /// Merges the variables visible to `block`.
    ///
    /// Precedence from lowest to highest: `common`, the block's own scope, then
    /// `call_site`. Declared scopes that are not mappings are skipped.
    pub fn scope(&self, block: &str, call_site: Option<&Value>) -> Scope {
        let mut scope = Scope::new();
        for name in [names::COMMON, block] {
            match self.vars.get(name) {
                Some(vars) if vars.kind() == ValueKind::Map => overlay(&mut scope, vars),
                Some(vars) => {
                    debug!("Ignoring scope '{name}': expected a mapping, got {}", vars.kind())
                }
                None => {}
            }
        }
        if let Some(vars) = call_site {
            overlay(&mut scope, vars);
        }
        scope
    }
}

/// Copies every entry of the mapping `vars` into `scope`, replacing existing keys.
pub(crate) fn overlay(scope: &mut Scope, vars: &Value) {
    let Ok(keys) = vars.try_iter() else {
        return;
    };
    for key in keys {
        let Some(name) = key.as_str().map(str::to_owned) else {
            debug!("Skipping non-string variable name {key}");
            continue;
        };
        if let Ok(value) = vars.get_item(&key) {
            scope.insert(name, value);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use minijinja::context;

    #[test]
    fn merges_scopes_by_precedence() {
        let blocks = Blocks::new()
            .common(context! { a => 1, b => 2 })
            .vars("card", context! { b => 3, c => 4 });
        let scope = blocks.scope("card", Some(&context! { c => 5, d => 6 }));

        assert_eq!(scope.len(), 4);
        assert_eq!(scope["a"], Value::from(1));
        assert_eq!(scope["b"], Value::from(3));
        assert_eq!(scope["c"], Value::from(5));
        assert_eq!(scope["d"], Value::from(6));
    }

    #[test]
    fn other_blocks_do_not_leak_into_scope() {
        let blocks = Blocks::new()
            .common(context! { a => 1 })
            .vars("card", context! { b => 2 });
        let scope = blocks.scope("footer", None);
        assert_eq!(scope.keys().collect::<Vec<_>>(), vec!["a"]);
    }

    #[test]
    fn non_mapping_scopes_are_ignored() {
        let blocks = Blocks::new().common(vec![1, 2, 3]).vars("card", "oops");
        assert!(blocks.scope("card", None).is_empty());
    }

    #[test]
    fn declares_block_files() {
        let blocks = Blocks::new().layout("main").block("item", "partials/item");
        assert_eq!(blocks.file("layout"), Some("main"));
        assert_eq!(blocks.file("item"), Some("partials/item"));
        assert_eq!(blocks.file("head"), None);
        assert!(!blocks.is_declared("head"));
    }

    #[test]
    fn serializable_structs_become_scopes() {
        #[derive(Serialize)]
        struct Page {
            title: &'static str,
        }
        let blocks = Blocks::new().common(Page { title: "Home" });
        assert_eq!(blocks.scope("layout", None)["title"], Value::from("Home"));
    }
}
