//! Constants used throughout inlay

/// Configuration file names in order of preference
pub const CONFIG_FILENAMES: &[&str] = &["inlay.json", "inlay.yaml", "inlay.yml"];

/// Default extension of block files
pub const DEFAULT_FILE_EXTENSION: &str = "html";

/// Line terminator appended to every rendered block
pub const LINE_END: &str = "\n";

/// STDIN indicator for CLI arguments
pub const STDIN_INDICATOR: &str = "-";

/// Reserved scope and block names.
pub mod names {
    /// Scope whose variables are visible to every block.
    pub const COMMON: &str = "common";
    /// Block rendered by `Engine::render`.
    pub const LAYOUT: &str = "layout";
    /// Optional head assets block.
    pub const HEAD: &str = "head";
    /// Optional end assets block.
    pub const END: &str = "end";
    /// Block-local variable holding the indentation width of its output.
    pub const INDENT: &str = "_";
    /// Loop variable holding the index or mapping key.
    pub const KEY: &str = "key";
    /// Loop variable holding the current element.
    pub const ITEM: &str = "item";
    /// Common variable exposing the engine parameters to manifest templates.
    pub const PARAMS: &str = "params";
}

/// Exit codes
pub mod exit_codes {
    pub const SUCCESS: i32 = 0;
    pub const FAILURE: i32 = 1;
}

/// Verbosity levels
pub mod verbosity {
    pub const OFF: u8 = 0;
    pub const INFO: u8 = 1;
    pub const DEBUG: u8 = 2;
    pub const TRACE: u8 = 3;
}
