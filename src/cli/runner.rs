use crate::{
    cli::Args,
    config::{Config, ManifestTemplate},
    constants::STDIN_INDICATOR,
    error::Result,
    ioutils::{parse_string_to_json, read_from, write_file},
    renderer::{Data, Engine},
};
use log::{debug, info};

/// CLI runner: loads a manifest, renders its layout and writes the result.
pub struct Runner {
    args: Args,
}

impl Runner {
    pub fn new(args: Args) -> Self {
        Self { args }
    }

    /// Renders the template directory and returns the document.
    pub fn render(&self) -> Result<String> {
        let Config::V1(config) = Config::load_config(&self.args.template_dir)?;
        config.validate()?;

        let engine_config = config.engine.clone();
        let params = config.params.clone();
        let engine = Engine::new(&self.args.template_dir, params, ManifestTemplate::new(config))
            .with_config(engine_config);

        let data = self.read_data()?;
        debug!("Rendering {} with {} data keys", self.args.template_dir.display(), data.len());
        engine.render(Some(serde_json::Value::Object(data)))
    }

    /// Renders and writes the document to the output file or stdout.
    pub fn run(self) -> Result<()> {
        let document = self.render()?;
        match &self.args.output {
            Some(output) => {
                write_file(&document, output)?;
                info!("Rendered document written to {}", output.display());
            }
            None => print!("{document}"),
        }
        Ok(())
    }

    fn read_data(&self) -> Result<Data> {
        let buf = match (&self.args.data, &self.args.data_file) {
            (Some(data), _) if data == STDIN_INDICATOR => read_from(std::io::stdin())?,
            (Some(data), _) => data.clone(),
            (None, Some(path)) => std::fs::read_to_string(path)?,
            (None, None) => return Ok(Data::new()),
        };
        parse_string_to_json(&buf)
    }
}

/// Entry point used by the binary.
pub fn run(args: Args) -> Result<()> {
    Runner::new(args).run()
}
