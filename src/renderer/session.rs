use super::format::{indent, terminate, terminate_items, trim_item};
use crate::{
    blocks::{Blocks, Scope},
    constants::{names, LINE_END},
    error::{Error, Result},
};
use log::{debug, trace};
use minijinja::{
    value::{Value, ValueKind},
    Environment,
};
use std::path::PathBuf;

/// Block table and file location of one render.
///
/// Every operation takes the environment to render with, so the same session
/// serves both Rust callers and helpers invoked from inside block code.
#[derive(Debug)]
pub(crate) struct Session {
    root: PathBuf,
    extension: String,
    blocks: Blocks,
}

impl Session {
    pub(crate) fn new(root: PathBuf, extension: String, blocks: Blocks) -> Self {
        Self { root, extension, blocks }
    }

    pub(crate) fn blocks(&self) -> &Blocks {
        &self.blocks
    }

    pub(crate) fn layout(&self, env: &Environment<'_>) -> Result<String> {
        Ok(terminate(&self.make(env, names::LAYOUT, None)?))
    }

    pub(crate) fn head(&self, env: &Environment<'_>) -> Result<String> {
        self.optional(env, names::HEAD)
    }

    pub(crate) fn end(&self, env: &Environment<'_>) -> Result<String> {
        self.optional(env, names::END)
    }

    pub(crate) fn inset(
        &self,
        env: &Environment<'_>,
        block: &str,
        vars: Option<&Value>,
    ) -> Result<String> {
        Ok(terminate(&self.make(env, block, vars)?))
    }

    pub(crate) fn inset_if(
        &self,
        env: &Environment<'_>,
        condition: bool,
        block: &str,
        vars: Option<&Value>,
    ) -> Result<String> {
        if condition {
            self.inset(env, block, vars)
        } else {
            Ok(LINE_END.to_string())
        }
    }

    pub(crate) fn each(
        &self,
        env: &Environment<'_>,
        collection: &Value,
        block: &str,
        empty_block: Option<&str>,
    ) -> Result<String> {
        let entries = entries(collection)?;
        if entries.is_empty() {
            return match empty_block {
                Some(empty_block) => self.inset(env, empty_block, None),
                None => Ok(LINE_END.to_string()),
            };
        }

        let mut items = String::new();
        for (key, item) in entries {
            let vars: Scope =
                [(names::KEY.to_string(), key), (names::ITEM.to_string(), item)].into_iter().collect();
            let vars = Value::from_serialize(&vars);
            items.push_str(trim_item(&self.make(env, block, Some(&vars))?));
        }
        Ok(terminate_items(&items))
    }

    fn optional(&self, env: &Environment<'_>, block: &str) -> Result<String> {
        if self.blocks.is_declared(block) {
            self.inset(env, block, None)
        } else {
            Ok(LINE_END.to_string())
        }
    }

    /// Renders `block` and returns its re-indented, untrimmed output.
    fn make(&self, env: &Environment<'_>, block: &str, vars: Option<&Value>) -> Result<String> {
        if let Some(vars) = vars {
            if vars.kind() != ValueKind::Map {
                return Err(Error::InvalidVars {
                    block: block.to_string(),
                    kind: vars.kind().to_string(),
                });
            }
        }
        let scope = self.blocks.scope(block, vars);

        let file = self
            .blocks
            .file(block)
            .ok_or_else(|| Error::UndeclaredBlock { block: block.to_string() })?;
        let name = format!("{file}.{}", self.extension);
        let path = self.root.join(&name);

        debug!("Rendering block '{block}' from {}", path.display());
        trace!("Scope of '{block}': {:?}", scope.keys().collect::<Vec<_>>());

        let source = std::fs::read_to_string(&path).map_err(|source| Error::BlockRead {
            block: block.to_string(),
            path: path.clone(),
            source,
        })?;

        let (captured, width) = capture(env, name, source, &scope)?;
        Ok(indent(&captured, width))
    }
}

/// Renders `source` in a context made only of `scope`.
///
/// Returns the captured output and the indentation width the block declared
/// through its top-level `_` variable.
fn capture(
    env: &Environment<'_>,
    name: String,
    source: String,
    scope: &Scope,
) -> Result<(String, usize)> {
    let mut env = env.clone();
    env.add_template_owned(name.clone(), source)?;
    let template = env.get_template(&name)?;
    let (captured, state) = template.render_and_return_state(Value::from_serialize(scope))?;
    let width = state
        .lookup(names::INDENT)
        .and_then(|value| i64::try_from(value).ok())
        .and_then(|width| usize::try_from(width).ok())
        .unwrap_or(0);
    Ok((captured, width))
}

/// Lists the (key, item) pairs of a sequence or mapping in iteration order.
fn entries(collection: &Value) -> Result<Vec<(Value, Value)>> {
    match collection.kind() {
        ValueKind::Map => collection
            .try_iter()?
            .map(|key| -> Result<(Value, Value)> {
                let item = collection.get_item(&key)?;
                Ok((key, item))
            })
            .collect(),
        ValueKind::Seq | ValueKind::Iterable => Ok(collection
            .try_iter()?
            .enumerate()
            .map(|(index, item)| (Value::from(index), item))
            .collect()),
        kind => Err(Error::NotIterable { kind: kind.to_string() }),
    }
}
