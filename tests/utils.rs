#![allow(dead_code)]

use inlay::blocks::Blocks;
use inlay::error::Result;
use inlay::renderer::{Data, Engine, Template};
use std::fs;
use std::path::Path;
use tempfile::TempDir;

/// Writes block files into a fresh temporary directory.
///
/// # Arguments
/// * `files` - Pairs of file name (without the `.html` extension) and content.
pub fn block_dir(files: &[(&str, &str)]) -> TempDir {
    let dir = tempfile::tempdir().unwrap();
    for (name, content) in files {
        let path = dir.path().join(format!("{name}.html"));
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(path, content).unwrap();
    }
    dir
}

/// Builds an engine whose template always declares `blocks`.
pub fn engine_with(dir: &Path, blocks: Blocks) -> Engine<impl Template> {
    Engine::new(dir, Data::new(), move |_: &Data, _: &Data| -> Result<Blocks> {
        Ok(blocks.clone())
    })
}
