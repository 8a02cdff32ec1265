//! Generate binding files from API descriptions.
//!
//! Each module run loads its description, renders the whole file in memory,
//! writes it atomically, then hands the path to the external formatter. The
//! formatter is fire-and-forget: its failure is reported but never undoes
//! the write. Runs are independent; one module failing does not stop the
//! others.

use std::path::{Path, PathBuf};

use anyhow::{bail, Result};
use tracing::{debug, info, warn};

use crate::bindings::{ApiDescription, BindgenError, BindingEmitter, EmitSummary, ModuleConfig};
use crate::util::config::{Config, FormatConfig, JobConfig};
use crate::util::fs::write_atomic;
use crate::util::process::{find_executable, ProcessBuilder};

/// Options shared by every module run.
#[derive(Debug, Clone, Default)]
pub struct GenerateOptions {
    /// Formatter to run on written files; `None` skips formatting
    pub formatter: Option<FormatConfig>,
}

impl GenerateOptions {
    /// Options using the configured formatter unless `no_fmt` is set.
    pub fn from_config(config: &Config, no_fmt: bool) -> Self {
        let formatter = if no_fmt || !config.format.enabled {
            None
        } else {
            Some(config.format.clone())
        };
        GenerateOptions { formatter }
    }
}

/// What happened when formatting a generated file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormatStatus {
    /// The formatter ran successfully
    Formatted,
    /// Formatting was not attempted
    Skipped(String),
    /// The formatter ran and failed; the file is left as generated
    Failed(String),
}

/// Result of one successful module run.
#[derive(Debug, Clone)]
pub struct GenerateResult {
    /// Written file
    pub output: PathBuf,
    /// Items emitted per category
    pub summary: EmitSummary,
    /// Formatter outcome
    pub format: FormatStatus,
}

/// Generate one module's bindings.
///
/// Fails with [`BindgenError::MissingInput`] or
/// [`BindgenError::MalformedInput`] for a bad description, and with
/// [`BindgenError::UnresolvedVariadic`] or [`BindgenError::MalformedType`]
/// when an item cannot be translated. Nothing is written on failure.
pub fn generate(
    output_path: &Path,
    description_path: &Path,
    module_name: &str,
    module_config: &ModuleConfig,
    opts: &GenerateOptions,
) -> Result<GenerateResult, BindgenError> {
    debug!(
        "generating module {} ({}) from {}",
        module_name,
        module_config.name,
        description_path.display()
    );

    let api = ApiDescription::load(description_path)?;
    let emitted = BindingEmitter::new(module_name, module_config).emit(&api)?;

    write_atomic(output_path, &emitted.source).map_err(|source| BindgenError::Io {
        path: output_path.to_path_buf(),
        source,
    })?;

    info!(
        "wrote {} ({} structs, {} aliases, {} callbacks, {} enums, {} functions)",
        output_path.display(),
        emitted.summary.structs,
        emitted.summary.aliases,
        emitted.summary.callbacks,
        emitted.summary.enums,
        emitted.summary.functions
    );

    let format = run_formatter(output_path, opts.formatter.as_ref());

    Ok(GenerateResult {
        output: output_path.to_path_buf(),
        summary: emitted.summary,
        format,
    })
}

/// Run the external formatter on a written file.
pub fn run_formatter(path: &Path, formatter: Option<&FormatConfig>) -> FormatStatus {
    let Some(formatter) = formatter.filter(|f| f.enabled) else {
        return FormatStatus::Skipped("formatting disabled".to_string());
    };

    let Some(program) = find_executable(&formatter.program) else {
        warn!(
            "formatter `{}` not found in PATH, leaving {} unformatted",
            formatter.program,
            path.display()
        );
        return FormatStatus::Skipped(format!("`{}` not found in PATH", formatter.program));
    };

    let cmd = ProcessBuilder::new(program)
        .args(&formatter.args)
        .arg(path);

    match cmd.exec_and_check() {
        Ok(_) => {
            debug!("formatted {}", path.display());
            FormatStatus::Formatted
        }
        Err(e) => {
            warn!("formatter failed on {}: {:#}", path.display(), e);
            FormatStatus::Failed(format!("{:#}", e))
        }
    }
}

/// Outcome of one configured job.
#[derive(Debug)]
pub struct JobReport {
    /// The job that ran
    pub job: JobConfig,
    /// Its result
    pub result: Result<GenerateResult, BindgenError>,
}

impl JobReport {
    pub fn succeeded(&self) -> bool {
        self.result.is_ok()
    }
}

/// Run a configured job.
pub fn run_job(job: &JobConfig, opts: &GenerateOptions) -> Result<GenerateResult, BindgenError> {
    let module_config = job.module_config()?;
    generate(
        &job.output,
        &job.description,
        job.header_name(),
        module_config,
        opts,
    )
}

/// Run every configured job (or those named in `modules`), continuing past
/// failures.
pub fn generate_all(
    config: &Config,
    modules: &[String],
    opts: &GenerateOptions,
) -> Result<Vec<JobReport>> {
    for name in modules {
        if !config.jobs.iter().any(|job| &job.module == name) {
            bail!("no job configured for module `{}`", name);
        }
    }

    let reports = config
        .select_jobs(modules)
        .into_iter()
        .map(|job| {
            let result = run_job(job, opts);
            if let Err(ref e) = result {
                warn!("module {} failed: {}", job.module, e);
            }
            JobReport {
                job: job.clone(),
                result,
            }
        })
        .collect();

    Ok(reports)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bindings::modules::{RAYGUI, RAYLIB, RAYMATH};
    use crate::test_support::{
        DescriptionWorkspace, RAYLIB_SAMPLE, RAYMATH_SAMPLE, UNRESOLVED_VARIADIC_SAMPLE,
    };

    fn no_fmt() -> GenerateOptions {
        GenerateOptions::default()
    }

    #[test]
    fn test_generate_writes_module() {
        let ws = DescriptionWorkspace::new();
        let input = ws.write_description("raylib_api.json", RAYLIB_SAMPLE);
        let output = ws.path().join("raylib.c.v");

        let result = generate(&output, &input, "raylib", &RAYLIB, &no_fmt()).unwrap();

        assert_eq!(result.summary.functions, 4);
        assert_eq!(result.format, FormatStatus::Skipped("formatting disabled".to_string()));

        let source = ws.read("raylib.c.v");
        assert!(source.starts_with("module raylib\n"));
        assert!(source.contains("pub fn init_window(width int, height int, title string) {"));
    }

    #[test]
    fn test_generate_creates_output_directory() {
        let ws = DescriptionWorkspace::new();
        let input = ws.write_description("raymath_api.json", RAYMATH_SAMPLE);
        let output = ws.path().join("raymath").join("raymath.c.v");

        generate(&output, &input, "raymath", &RAYMATH, &no_fmt()).unwrap();

        let source = ws.read("raymath/raymath.c.v");
        assert!(source.starts_with("module raymath\nimport raylib { Vector2, Vector3, Vector4, Matrix }\n"));
    }

    #[test]
    fn test_missing_input_writes_nothing() {
        let ws = DescriptionWorkspace::new();
        let output = ws.path().join("raylib.c.v");

        let err = generate(&output, &ws.path().join("nope.json"), "raylib", &RAYLIB, &no_fmt())
            .unwrap_err();

        assert!(matches!(err, BindgenError::MissingInput { .. }));
        assert!(!output.exists());
    }

    #[test]
    fn test_malformed_input_writes_nothing() {
        let ws = DescriptionWorkspace::new();
        let input = ws.write_description("bad.json", "{\"structs\": [");
        let output = ws.path().join("raylib.c.v");

        let err = generate(&output, &input, "raylib", &RAYLIB, &no_fmt()).unwrap_err();

        assert!(matches!(err, BindgenError::MalformedInput { .. }));
        assert!(!output.exists());
    }

    #[test]
    fn test_late_failure_keeps_previous_output() {
        let ws = DescriptionWorkspace::new();
        let input = ws.write_description("api.json", UNRESOLVED_VARIADIC_SAMPLE);
        let output = ws.path().join("raylib.c.v");
        std::fs::write(&output, "module raylib\n// previous run\n").unwrap();

        let err = generate(&output, &input, "raylib", &RAYLIB, &no_fmt()).unwrap_err();

        assert!(matches!(err, BindgenError::UnresolvedVariadic { .. }));
        assert_eq!(ws.read("raylib.c.v"), "module raylib\n// previous run\n");
    }

    #[test]
    fn test_missing_formatter_is_not_an_error() {
        let ws = DescriptionWorkspace::new();
        let input = ws.write_description("raygui_api.json", "{}");
        let output = ws.path().join("raygui.c.v");
        let opts = GenerateOptions {
            formatter: Some(FormatConfig {
                enabled: true,
                program: "raygen-test-missing-formatter".to_string(),
                args: Vec::new(),
            }),
        };

        let result = generate(&output, &input, "raygui", &RAYGUI, &opts).unwrap();

        assert!(matches!(result.format, FormatStatus::Skipped(_)));
        assert!(output.exists());
    }

    #[cfg(unix)]
    #[test]
    fn test_failing_formatter_keeps_file() {
        let ws = DescriptionWorkspace::new();
        let input = ws.write_description("raylib_api.json", RAYLIB_SAMPLE);
        let output = ws.path().join("raylib.c.v");
        let opts = GenerateOptions {
            formatter: Some(FormatConfig {
                enabled: true,
                program: "false".to_string(),
                args: Vec::new(),
            }),
        };

        let result = generate(&output, &input, "raylib", &RAYLIB, &opts).unwrap();

        assert!(matches!(result.format, FormatStatus::Failed(_)));
        assert!(ws.read("raylib.c.v").starts_with("module raylib\n"));
    }

    #[test]
    fn test_generate_all_continues_after_failure() {
        let ws = DescriptionWorkspace::new();
        let raymath = ws.write_description("raymath_api.json", RAYMATH_SAMPLE);

        let config = Config {
            jobs: vec![
                JobConfig::new("raylib", ws.path().join("missing.json"), ws.path().join("raylib.c.v")),
                JobConfig::new("raymath", raymath, ws.path().join("raymath/raymath.c.v")),
            ],
            ..Config::default()
        };

        let reports = generate_all(&config, &[], &no_fmt()).unwrap();

        assert_eq!(reports.len(), 2);
        assert!(!reports[0].succeeded());
        assert!(reports[1].succeeded());
        assert!(ws.path().join("raymath/raymath.c.v").exists());
    }

    #[test]
    fn test_generate_all_rejects_unknown_filter() {
        let err = generate_all(&Config::default(), &["rlgl".to_string()], &no_fmt()).unwrap_err();
        assert!(err.to_string().contains("rlgl"));
    }

    #[test]
    fn test_options_from_config() {
        let mut config = Config::default();
        assert!(GenerateOptions::from_config(&config, false).formatter.is_some());
        assert!(GenerateOptions::from_config(&config, true).formatter.is_none());

        config.format.enabled = false;
        assert!(GenerateOptions::from_config(&config, false).formatter.is_none());
    }
}
