use super::loader::ConfigV1;
use crate::{
    blocks::{overlay, Blocks, Scope},
    constants::names,
    error::Result,
    renderer::{Data, Template},
};
use minijinja::value::{Value, ValueKind};

/// A template whose blocks and scopes come from a configuration file.
///
/// The render data is overlaid onto the configured `common` scope, and the
/// engine parameters are visible to every block as `params`.
#[derive(Debug)]
pub struct ManifestTemplate {
    config: ConfigV1,
}

impl ManifestTemplate {
    pub fn new(config: ConfigV1) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ConfigV1 {
        &self.config
    }
}

impl Template for ManifestTemplate {
    fn init(&self, params: &Data, data: &Data) -> Result<Blocks> {
        let mut blocks = Blocks::new();
        for (block, file) in &self.config.blocks {
            blocks.set_block(block, file);
        }
        for (scope, vars) in &self.config.vars {
            if scope != names::COMMON {
                blocks.set_vars(scope, vars);
            }
        }

        let mut common = Scope::new();
        if let Some(vars) = self.config.vars.get(names::COMMON) {
            let vars = Value::from_serialize(vars);
            if vars.kind() == ValueKind::Map {
                overlay(&mut common, &vars);
            }
        }
        overlay(&mut common, &Value::from_serialize(data));
        common.insert(names::PARAMS.to_string(), Value::from_serialize(params));
        blocks.set_vars(names::COMMON, common);

        Ok(blocks)
    }
}
