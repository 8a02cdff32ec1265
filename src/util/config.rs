//! Configuration file support for raygen.
//!
//! An optional `Raygen.toml` in the working directory (or the file given
//! with `--config`) controls which modules are generated, where their API
//! descriptions are read from, where bindings are written, and how the
//! generated files are formatted. Without a file the defaults reproduce the
//! upstream layout:
//!
//! - `raylib.c.v` from `external/raylib/parser/raylib_api.json`
//! - `raymath/raymath.c.v` from `external/raylib/parser/raymath_api.json`
//! - `raygui/raygui.c.v` from `external/raylib/parser/raygui_api.json`
//!
//! Per-module binding rules (ignore sets, renames, boilerplate) are not
//! configurable here; they live in [`crate::bindings::modules`].

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::bindings::{BindgenError, ModuleConfig};

/// Default configuration file name.
pub const CONFIG_FILE: &str = "Raygen.toml";

/// raygen configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Formatter settings
    pub format: FormatConfig,

    /// Modules to generate, in order
    pub jobs: Vec<JobConfig>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            format: FormatConfig::default(),
            jobs: default_jobs(),
        }
    }
}

/// External source formatter run on every generated file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormatConfig {
    /// Run the formatter after writing
    pub enabled: bool,

    /// Formatter program, looked up in PATH
    pub program: String,

    /// Arguments placed before the file path
    pub args: Vec<String>,
}

impl Default for FormatConfig {
    fn default() -> Self {
        FormatConfig {
            enabled: true,
            program: "v".to_string(),
            args: vec!["fmt".to_string(), "-w".to_string()],
        }
    }
}

/// One module generation job.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct JobConfig {
    /// Built-in module configuration to use (raylib, raymath, raygui)
    pub module: String,

    /// API description JSON produced by raylib_parser
    pub description: PathBuf,

    /// Generated `.c.v` file
    pub output: PathBuf,

    /// Name in the `module` header (defaults to `module`)
    #[serde(default)]
    pub name: Option<String>,
}

impl JobConfig {
    /// Create a job whose header name matches the module.
    pub fn new(
        module: impl Into<String>,
        description: impl Into<PathBuf>,
        output: impl Into<PathBuf>,
    ) -> Self {
        JobConfig {
            module: module.into(),
            description: description.into(),
            output: output.into(),
            name: None,
        }
    }

    /// Name written in the `module` header.
    pub fn header_name(&self) -> &str {
        self.name.as_deref().unwrap_or(&self.module)
    }

    /// The built-in configuration for this job's module.
    pub fn module_config(&self) -> Result<&'static ModuleConfig, BindgenError> {
        ModuleConfig::lookup(&self.module)
    }
}

fn default_jobs() -> Vec<JobConfig> {
    vec![
        JobConfig::new(
            "raylib",
            "external/raylib/parser/raylib_api.json",
            "raylib.c.v",
        ),
        JobConfig::new(
            "raymath",
            "external/raylib/parser/raymath_api.json",
            "raymath/raymath.c.v",
        ),
        JobConfig::new(
            "raygui",
            "external/raylib/parser/raygui_api.json",
            "raygui/raygui.c.v",
        ),
    ]
}

impl Config {
    /// Load configuration from a file.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file: {}", path.display()))?;

        toml::from_str(&contents)
            .with_context(|| format!("failed to parse config file: {}", path.display()))
    }

    /// Resolve the configuration for a command invocation.
    ///
    /// An explicit path must exist and parse. Otherwise `Raygen.toml` in
    /// `cwd` is loaded when present, and must parse too; without it the
    /// defaults apply.
    pub fn resolve(explicit: Option<&Path>, cwd: &Path) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::load(path);
        }

        let discovered = cwd.join(CONFIG_FILE);
        if discovered.exists() {
            Self::load(&discovered)
        } else {
            tracing::debug!("no {} in {}, using defaults", CONFIG_FILE, cwd.display());
            Ok(Self::default())
        }
    }

    /// Save configuration to a file.
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).with_context(|| {
                format!("failed to create config directory: {}", parent.display())
            })?;
        }

        let contents =
            toml::to_string_pretty(self).with_context(|| "failed to serialize config")?;

        std::fs::write(path, contents)
            .with_context(|| format!("failed to write config file: {}", path.display()))?;

        Ok(())
    }

    /// Jobs whose module name is in `modules`, or all jobs when empty.
    pub fn select_jobs(&self, modules: &[String]) -> Vec<&JobConfig> {
        self.jobs
            .iter()
            .filter(|job| modules.is_empty() || modules.contains(&job.module))
            .collect()
    }
}
