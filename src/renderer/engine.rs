use super::{
    helpers,
    interface::{Data, Template},
    session::Session,
};
use crate::{
    blocks::Blocks,
    config::EngineConfig,
    error::{Error, Result},
    ioutils::json_kind,
};
use log::debug;
use minijinja::{value::Value, AutoEscape, Environment, UndefinedBehavior};
use std::{
    path::{Path, PathBuf},
    sync::Arc,
};

/// Composes a layout and its blocks into one rendered document.
///
/// The engine stores its inputs verbatim; nothing is read or validated until
/// [`Engine::render`] runs.
///
/// # Examples
/// ```no_run
/// use inlay::blocks::Blocks;
/// use inlay::error::Result;
/// use inlay::renderer::{Data, Engine};
///
/// let engine = Engine::new("templates", Data::new(), |_: &Data, data: &Data| -> Result<Blocks> {
///     Ok(Blocks::new().layout("main").block("item", "item").common(data))
/// });
/// let html = engine.render(Some(serde_json::json!({ "items": ["a", "b"] }))).unwrap();
/// ```
pub struct Engine<T> {
    path: PathBuf,
    params: Data,
    config: EngineConfig,
    template: T,
}

impl<T: Template> Engine<T> {
    pub fn new(path: impl Into<PathBuf>, params: Data, template: T) -> Self {
        Self { path: path.into(), params, config: EngineConfig::default(), template }
    }

    /// Replaces the default engine settings.
    pub fn with_config(mut self, config: EngineConfig) -> Self {
        self.config = config;
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn params(&self) -> &Data {
        &self.params
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn template(&self) -> &T {
        &self.template
    }

    /// Renders the layout block.
    ///
    /// # Arguments
    /// * `data` - Render data; `None` and JSON `null` are treated as an empty mapping
    ///
    /// # Returns
    /// * `Result<String>` - The trimmed layout followed by one line terminator
    pub fn render(&self, data: Option<serde_json::Value>) -> Result<String> {
        self.prepare(data)?.layout()
    }

    /// Runs the template's `init` and returns a renderer for its blocks.
    pub fn prepare(&self, data: Option<serde_json::Value>) -> Result<Renderer> {
        let data = match data {
            None | Some(serde_json::Value::Null) => Data::new(),
            Some(serde_json::Value::Object(data)) => data,
            Some(other) => return Err(Error::InvalidData { kind: json_kind(&other).into() }),
        };
        let blocks = self.template.init(&self.params, &data)?;
        debug!("Template declared blocks for render in {}", self.path.display());
        Ok(Renderer::new(self.environment(), self.session(blocks)))
    }

    fn session(&self, blocks: Blocks) -> Arc<Session> {
        Arc::new(Session::new(self.path.clone(), self.config.extension.clone(), blocks))
    }

    /// Builds the minijinja environment block code is rendered with.
    fn environment(&self) -> Environment<'static> {
        let mut env = Environment::new();
        env.set_trim_blocks(self.config.trim_blocks);
        env.set_lstrip_blocks(self.config.lstrip_blocks);
        env.set_keep_trailing_newline(self.config.keep_trailing_newline);
        if self.config.strict_undefined {
            env.set_undefined_behavior(UndefinedBehavior::Strict);
        }
        if !self.config.auto_escape {
            env.set_auto_escape_callback(|_| AutoEscape::None);
        }
        env
    }
}

/// Renders the blocks declared for one render.
///
/// Obtained from [`Engine::prepare`]. The same operations are available to
/// block code as the template functions `inset`, `inset_if`, `loop`/`each`,
/// `head` and `end`.
pub struct Renderer {
    env: Environment<'static>,
    session: Arc<Session>,
}

impl Renderer {
    fn new(mut env: Environment<'static>, session: Arc<Session>) -> Self {
        helpers::register(&mut env, &session);
        Self { env, session }
    }

    /// Blocks declared by the template for this render.
    pub fn blocks(&self) -> &Blocks {
        self.session.blocks()
    }

    /// Renders the `layout` block.
    pub fn layout(&self) -> Result<String> {
        self.session.layout(&self.env)
    }

    /// Renders the `head` block, or only a line terminator when none is declared.
    pub fn head(&self) -> Result<String> {
        self.session.head(&self.env)
    }

    /// Renders the `end` block, or only a line terminator when none is declared.
    pub fn end(&self) -> Result<String> {
        self.session.end(&self.env)
    }

    /// Renders `block` with optional call-site variables.
    pub fn inset(&self, block: &str, vars: Option<&Value>) -> Result<String> {
        self.session.inset(&self.env, block, vars)
    }

    /// Renders `block` only when `condition` holds; the block is not touched otherwise.
    pub fn inset_if(&self, condition: bool, block: &str, vars: Option<&Value>) -> Result<String> {
        self.session.inset_if(&self.env, condition, block, vars)
    }

    /// Renders `block` once per element of `collection` with `key` and `item` in scope.
    ///
    /// An empty collection renders `empty_block` when given.
    pub fn each(&self, collection: &Value, block: &str, empty_block: Option<&str>) -> Result<String> {
        self.session.each(&self.env, collection, block, empty_block)
    }
}
